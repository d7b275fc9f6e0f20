// File: crates/atlas-core/src/axis.rs
// Summary: Axis decoration as scene geometry (spines, ticks, labels).

use crate::scale::{BandScale, LinearScale, PointScale};
use crate::scene::{Mark, TextAnchor};
use crate::theme::Theme;

const TICK_LEN: f32 = 6.0;
const LABEL_SIZE: f32 = 11.0;

/// Format one tick value with `decimals` places, dropping the fraction
/// entirely when it is zero.
pub fn format_tick(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$}")
}

/// Bottom axis for a linear scale: spine, ticks, numeric labels.
pub fn x_linear_axis(scale: &LinearScale, y: f32, theme: &Theme) -> Vec<Mark> {
    let mut marks = vec![Mark::Line {
        x1: scale.r0,
        y1: y,
        x2: scale.r1,
        y2: y,
        stroke: theme.axis_line,
        width: 1.5,
    }];
    let decimals = scale.tick_decimals(5);
    for t in scale.ticks(5) {
        let x = scale.scale(t);
        marks.push(Mark::Line {
            x1: x,
            y1: y,
            x2: x,
            y2: y + TICK_LEN,
            stroke: theme.tick,
            width: 1.0,
        });
        marks.push(Mark::Text {
            x,
            y: y + TICK_LEN + 12.0,
            text: format_tick(t, decimals),
            size: LABEL_SIZE,
            color: theme.axis_label,
            anchor: TextAnchor::Middle,
            angle: 0.0,
        });
    }
    marks
}

/// Left axis for a linear scale.
pub fn y_linear_axis(scale: &LinearScale, x: f32, theme: &Theme) -> Vec<Mark> {
    // Vertical scales run bottom-to-top, so r0/r1 order the spine ends.
    let (top, bottom) = if scale.r0 < scale.r1 {
        (scale.r0, scale.r1)
    } else {
        (scale.r1, scale.r0)
    };
    let mut marks = vec![Mark::Line {
        x1: x,
        y1: top,
        x2: x,
        y2: bottom,
        stroke: theme.axis_line,
        width: 1.5,
    }];
    let decimals = scale.tick_decimals(5);
    for t in scale.ticks(5) {
        let y = scale.scale(t);
        marks.push(Mark::Line {
            x1: x - TICK_LEN,
            y1: y,
            x2: x,
            y2: y,
            stroke: theme.tick,
            width: 1.0,
        });
        marks.push(Mark::Text {
            x: x - TICK_LEN - 4.0,
            y: y + 4.0,
            text: format_tick(t, decimals),
            size: LABEL_SIZE,
            color: theme.axis_label,
            anchor: TextAnchor::End,
            angle: 0.0,
        });
    }
    marks
}

/// Bottom axis for a band scale; labels rotate when categories are long.
pub fn x_band_axis(scale: &BandScale, y: f32, rotated: bool, theme: &Theme) -> Vec<Mark> {
    let mut marks = Vec::new();
    let (r0, r1) = band_range(scale);
    marks.push(Mark::Line {
        x1: r0,
        y1: y,
        x2: r1,
        y2: y,
        stroke: theme.axis_line,
        width: 1.5,
    });
    for (i, key) in scale.keys().iter().enumerate() {
        let cx = scale.center_index(i);
        marks.push(Mark::Line {
            x1: cx,
            y1: y,
            x2: cx,
            y2: y + TICK_LEN,
            stroke: theme.tick,
            width: 1.0,
        });
        if rotated {
            marks.push(Mark::Text {
                x: cx - 6.0,
                y: y + TICK_LEN + 8.0,
                text: key.clone(),
                size: LABEL_SIZE,
                color: theme.axis_label,
                anchor: TextAnchor::End,
                angle: -40.0,
            });
        } else {
            marks.push(Mark::Text {
                x: cx,
                y: y + TICK_LEN + 12.0,
                text: key.clone(),
                size: LABEL_SIZE,
                color: theme.axis_label,
                anchor: TextAnchor::Middle,
                angle: 0.0,
            });
        }
    }
    marks
}

/// Left axis listing band categories (horizontal bars, heatmap rows).
pub fn y_band_axis(scale: &BandScale, x: f32, theme: &Theme) -> Vec<Mark> {
    let mut marks = Vec::new();
    let (r0, r1) = band_range(scale);
    marks.push(Mark::Line {
        x1: x,
        y1: r0,
        x2: x,
        y2: r1,
        stroke: theme.axis_line,
        width: 1.5,
    });
    for (i, key) in scale.keys().iter().enumerate() {
        let cy = scale.center_index(i);
        marks.push(Mark::Line {
            x1: x - TICK_LEN,
            y1: cy,
            x2: x,
            y2: cy,
            stroke: theme.tick,
            width: 1.0,
        });
        marks.push(Mark::Text {
            x: x - TICK_LEN - 4.0,
            y: cy + 4.0,
            text: key.clone(),
            size: LABEL_SIZE,
            color: theme.axis_label,
            anchor: TextAnchor::End,
            angle: 0.0,
        });
    }
    marks
}

/// Bottom axis for a point scale, rotated labels (regions are long names).
pub fn x_point_axis(scale: &PointScale, y: f32, theme: &Theme) -> Vec<Mark> {
    let mut marks = Vec::new();
    for (i, key) in scale.keys().iter().enumerate() {
        let cx = scale.position_index(i);
        marks.push(Mark::Line {
            x1: cx,
            y1: y,
            x2: cx,
            y2: y + TICK_LEN,
            stroke: theme.tick,
            width: 1.0,
        });
        marks.push(Mark::Text {
            x: cx - 6.0,
            y: y + TICK_LEN + 8.0,
            text: key.clone(),
            size: LABEL_SIZE,
            color: theme.axis_label,
            anchor: TextAnchor::End,
            angle: -35.0,
        });
    }
    marks
}

fn band_range(scale: &BandScale) -> (f32, f32) {
    let n = scale.keys().len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let first = scale.position_index(0);
    let last = scale.position_index(n - 1) + scale.bandwidth();
    (first.min(last), first.max(last))
}
