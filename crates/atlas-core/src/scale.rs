// File: crates/atlas-core/src/scale.rs
// Summary: Linear, band, point, and sqrt scale transforms for chart layout.

/// Linear domain -> pixel range mapping.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f32, r1: f32) -> Self {
        let mut s = Self { d0, d1, r0, r1 };
        // Widen a zero-span domain so scaling never divides by zero.
        if (s.d1 - s.d0).abs() < 1e-12 {
            s.d1 = s.d0 + 1.0;
        }
        s
    }

    /// Extend the domain outward to round tick boundaries (1-2-5 steps).
    pub fn nice(mut self) -> Self {
        let step = nice_step(self.d1 - self.d0, 5);
        if step > 0.0 {
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
        }
        self
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f32 {
        let span = (self.d1 - self.d0).max(1e-12);
        self.r0 + ((v - self.d0) / span) as f32 * (self.r1 - self.r0)
    }

    /// Round tick values covering the domain, roughly `target` of them.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let step = nice_step(self.d1 - self.d0, target.max(2));
        if step <= 0.0 {
            return vec![self.d0, self.d1];
        }
        let mut out = Vec::new();
        let mut v = (self.d0 / step).ceil() * step;
        while v <= self.d1 + step * 1e-3 {
            out.push(v);
            v += step;
        }
        out
    }

    /// Decimal places that make tick labels read cleanly for this domain.
    pub fn tick_decimals(&self, target: usize) -> usize {
        let step = nice_step(self.d1 - self.d0, target.max(2));
        if step >= 1.0 || step <= 0.0 {
            0
        } else {
            (-step.log10().floor()) as usize
        }
    }
}

/// Round a raw span/target ratio down to a 1-2-5 ladder step.
fn nice_step(span: f64, target: usize) -> f64 {
    if !(span > 0.0) {
        return 0.0;
    }
    let rough = span / target as f64;
    let magnitude = 10f64.powf(rough.log10().floor());
    let residual = rough / magnitude;
    let factor = if residual <= 1.5 {
        1.0
    } else if residual <= 3.0 {
        2.0
    } else if residual <= 7.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Categorical scale with inner/outer padding; bars and heatmap cells.
#[derive(Clone, Debug)]
pub struct BandScale {
    keys: Vec<String>,
    r0: f32,
    r1: f32,
    padding: f32,
}

impl BandScale {
    pub fn new(keys: Vec<String>, r0: f32, r1: f32, padding: f32) -> Self {
        Self { keys, r0, r1, padding: padding.clamp(0.0, 0.99) }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn step(&self) -> f32 {
        let n = self.keys.len().max(1) as f32;
        (self.r1 - self.r0) / (n + self.padding)
    }

    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding)
    }

    /// Leading edge of band `i`.
    pub fn position_index(&self, i: usize) -> f32 {
        self.r0 + self.step() * (self.padding + i as f32)
    }

    pub fn position(&self, key: &str) -> Option<f32> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| self.position_index(i))
    }

    /// Band center, where ticks and labels sit.
    pub fn center_index(&self, i: usize) -> f32 {
        self.position_index(i) + self.bandwidth() / 2.0
    }
}

/// Band scale collapsed to points (zero bandwidth), for connected series
/// over categories.
#[derive(Clone, Debug)]
pub struct PointScale {
    keys: Vec<String>,
    r0: f32,
    r1: f32,
    padding: f32,
}

impl PointScale {
    pub fn new(keys: Vec<String>, r0: f32, r1: f32, padding: f32) -> Self {
        Self { keys, r0, r1, padding: padding.max(0.0) }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn position_index(&self, i: usize) -> f32 {
        let n = self.keys.len();
        if n <= 1 {
            return (self.r0 + self.r1) / 2.0;
        }
        let step = (self.r1 - self.r0) / ((n - 1) as f32 + 2.0 * self.padding);
        self.r0 + step * (self.padding + i as f32)
    }

    pub fn position(&self, key: &str) -> Option<f32> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| self.position_index(i))
    }
}

/// Square-root scale for bubble radii, so mark *area* tracks the value.
#[derive(Clone, Copy, Debug)]
pub struct SqrtScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl SqrtScale {
    pub fn new(d0: f64, d1: f64, r0: f32, r1: f32) -> Self {
        let mut s = Self { d0: d0.max(0.0), d1: d1.max(0.0), r0, r1 };
        if (s.d1 - s.d0).abs() < 1e-12 {
            s.d1 = s.d0 + 1.0;
        }
        s
    }

    pub fn scale(&self, v: f64) -> f32 {
        let lo = self.d0.sqrt();
        let hi = self.d1.sqrt();
        let t = ((v.max(0.0).sqrt() - lo) / (hi - lo).max(1e-12)) as f32;
        self.r0 + t.clamp(0.0, 1.0) * (self.r1 - self.r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_endpoints() {
        let s = LinearScale::new(0.0, 10.0, 0.0, 100.0);
        assert_eq!(s.scale(0.0), 0.0);
        assert_eq!(s.scale(10.0), 100.0);
        assert_eq!(s.scale(5.0), 50.0);
    }

    #[test]
    fn linear_inverted_range_for_y_axes() {
        let s = LinearScale::new(0.0, 10.0, 400.0, 0.0);
        assert_eq!(s.scale(0.0), 400.0);
        assert_eq!(s.scale(10.0), 0.0);
    }

    #[test]
    fn linear_degenerate_domain_widens() {
        let s = LinearScale::new(3.0, 3.0, 0.0, 100.0);
        assert!(s.scale(3.0).is_finite());
    }

    #[test]
    fn nice_extends_to_round_bounds() {
        let s = LinearScale::new(0.13, 9.7, 0.0, 100.0).nice();
        assert!(s.d0 <= 0.13);
        assert!(s.d1 >= 9.7);
        assert_eq!(s.d0, 0.0);
        assert_eq!(s.d1, 10.0);
    }

    #[test]
    fn ticks_cover_domain_with_round_steps() {
        let s = LinearScale::new(0.0, 10.0, 0.0, 100.0);
        let ticks = s.ticks(5);
        assert!(ticks.len() >= 4);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(*ticks.last().unwrap(), 10.0);
    }

    #[test]
    fn band_positions_fit_inside_range() {
        let keys: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let b = BandScale::new(keys, 0.0, 300.0, 0.2);
        assert!(b.position("a").unwrap() >= 0.0);
        let last = b.position("c").unwrap() + b.bandwidth();
        assert!(last <= 300.0 + 1e-3);
        assert!(b.position("missing").is_none());
        assert!(b.bandwidth() > 0.0);
    }

    #[test]
    fn point_scale_spreads_with_padding() {
        let keys: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let p = PointScale::new(keys, 0.0, 400.0, 0.5);
        let a = p.position("a").unwrap();
        let c = p.position("c").unwrap();
        assert!(a > 0.0);
        assert!(c < 400.0);
        assert!(c > a);
    }

    #[test]
    fn sqrt_scale_is_monotonic_in_area() {
        let s = SqrtScale::new(0.0, 4.0, 0.0, 10.0);
        assert_eq!(s.scale(0.0), 0.0);
        assert_eq!(s.scale(4.0), 10.0);
        // Quadrupling the value doubles the radius.
        assert!((s.scale(1.0) * 2.0 - s.scale(4.0)).abs() < 1e-3);
    }
}
