// File: crates/atlas-core/src/colormap.rs
// Summary: Sequential colormap for the heatmap color channel.

use crate::types::Color;

/// Piecewise-linear color ramp over [0,1].
#[derive(Clone, Debug)]
pub struct Colormap {
    pub name: &'static str,
    stops: Vec<Color>,
}

impl Colormap {
    pub fn from_colors(name: &'static str, stops: Vec<Color>) -> Self {
        Self { name, stops }
    }

    /// Sample the ramp at `t`, clamped to [0,1]. Out-of-range and NaN
    /// inputs clamp to the low end rather than panic.
    pub fn sample(&self, t: f64) -> Color {
        if self.stops.is_empty() {
            return Color::from_rgb(128, 128, 128);
        }
        if self.stops.len() == 1 {
            return self.stops[0];
        }
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (self.stops.len() - 1) as f64;
        let lo = scaled.floor() as usize;
        let hi = (scaled.ceil() as usize).min(self.stops.len() - 1);
        Color::lerp(self.stops[lo], self.stops[hi], (scaled - lo as f64) as f32)
    }
}

/// Perceptually uniform, colorblind-safe sequential ramp.
pub fn viridis() -> Colormap {
    Colormap::from_colors(
        "viridis",
        vec![
            Color::from_rgb(68, 1, 84),
            Color::from_rgb(72, 36, 117),
            Color::from_rgb(65, 68, 135),
            Color::from_rgb(53, 95, 141),
            Color::from_rgb(42, 120, 142),
            Color::from_rgb(33, 145, 140),
            Color::from_rgb(34, 168, 132),
            Color::from_rgb(66, 190, 113),
            Color::from_rgb(122, 209, 81),
            Color::from_rgb(189, 223, 38),
            Color::from_rgb(253, 231, 37),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_endpoints_hit_first_and_last_stops() {
        let cm = viridis();
        assert_eq!(cm.sample(0.0), Color::from_rgb(68, 1, 84));
        assert_eq!(cm.sample(1.0), Color::from_rgb(253, 231, 37));
    }

    #[test]
    fn sample_clamps_and_tolerates_nan() {
        let cm = viridis();
        assert_eq!(cm.sample(-3.0), cm.sample(0.0));
        assert_eq!(cm.sample(7.0), cm.sample(1.0));
        assert_eq!(cm.sample(f64::NAN), cm.sample(0.0));
    }
}
