// File: crates/atlas-core/src/theme.rs
// Summary: Light/Dark theming for chart scene colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub title: Color,
    pub bar_fill: Color,
    pub bar_alt_fill: Color,
    pub point_fill: Color,
    pub bubble_fill: Color,
    pub series_stroke: Color,
    pub box_fill: Color,
    pub box_stroke: Color,
    pub trend_stroke: Color,
    pub radar_fill: Color,
    pub radar_stroke: Color,
    pub missing_cell: Color,
    /// Ten-color categorical palette (pie slices and friends).
    pub palette: [Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(250, 250, 252),
            grid: Color::from_rgb(230, 230, 235),
            axis_line: Color::from_rgb(60, 60, 70),
            axis_label: Color::from_rgb(20, 20, 30),
            tick: Color::from_rgb(100, 100, 110),
            title: Color::from_rgb(20, 20, 30),
            bar_fill: Color::from_rgb(76, 120, 168),
            bar_alt_fill: Color::from_rgb(255, 127, 14),
            point_fill: Color::from_argb(178, 44, 160, 44),
            bubble_fill: Color::from_argb(153, 214, 39, 40),
            series_stroke: Color::from_rgb(23, 190, 207),
            box_fill: Color::from_argb(204, 141, 211, 199),
            box_stroke: Color::from_rgb(30, 30, 30),
            trend_stroke: Color::from_rgb(30, 30, 30),
            radar_fill: Color::from_argb(128, 31, 119, 180),
            radar_stroke: Color::from_rgb(31, 119, 180),
            missing_cell: Color::from_rgb(210, 210, 214),
            palette: CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            grid: Color::from_rgb(40, 40, 45),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
            tick: Color::from_rgb(150, 150, 160),
            title: Color::from_rgb(235, 235, 245),
            bar_fill: Color::from_rgb(96, 156, 255),
            bar_alt_fill: Color::from_rgb(255, 160, 60),
            point_fill: Color::from_argb(178, 80, 200, 90),
            bubble_fill: Color::from_argb(153, 230, 90, 90),
            series_stroke: Color::from_rgb(64, 200, 215),
            box_fill: Color::from_argb(204, 80, 160, 150),
            box_stroke: Color::from_rgb(220, 220, 230),
            trend_stroke: Color::from_rgb(235, 235, 245),
            radar_fill: Color::from_argb(110, 100, 160, 255),
            radar_stroke: Color::from_rgb(100, 160, 255),
            missing_cell: Color::from_rgb(60, 60, 66),
            palette: CATEGORY10,
        }
    }
}

/// The d3 category10 ordinal palette.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb(31, 119, 180),
    Color::from_rgb(255, 127, 14),
    Color::from_rgb(44, 160, 44),
    Color::from_rgb(214, 39, 40),
    Color::from_rgb(148, 103, 189),
    Color::from_rgb(140, 86, 75),
    Color::from_rgb(227, 119, 194),
    Color::from_rgb(127, 127, 127),
    Color::from_rgb(188, 189, 34),
    Color::from_rgb(23, 190, 207),
];

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("dark").name, "dark");
        assert_eq!(find("no-such-theme").name, "light");
    }
}
