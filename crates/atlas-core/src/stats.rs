// File: crates/atlas-core/src/stats.rs
// Summary: Descriptive statistics shared by the chart builders.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("empty input")]
    Empty,
    #[error("input lengths differ: {0} vs {1}")]
    LengthMismatch(usize, usize),
    #[error("all x values identical; regression slope is undefined")]
    DegenerateX,
}

/// Arithmetic mean. `None` on empty input; callers decide how absence
/// reaches the visual encoding.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// The `q`-th quantile of pre-sorted data via R-7 linear interpolation
/// (the D3/R/NumPy default): h = q*(n-1), interpolate between the
/// neighboring order statistics. Sortedness is the caller's precondition.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let h = q * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Linear rescale of `x` into [0,1] given an observed domain. A degenerate
/// domain (max == min) maps to 0.5 so constant indicators land mid-ramp
/// instead of feeding NaN into color and size encodings.
pub fn min_max_normalize(x: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return 0.5;
    }
    (x - min) / span
}

/// Tukey five-number summary of a box-and-whisker glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiveNumber {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
}

/// Quartiles plus whiskers clamped to the Tukey fences (Q1/Q3 -/+ 1.5*IQR)
/// and to the observed data extremes. Input must be sorted ascending.
pub fn tukey_fence(sorted: &[f64]) -> Option<FiveNumber> {
    let q1 = quantile_sorted(sorted, 0.25)?;
    let median = quantile_sorted(sorted, 0.5)?;
    let q3 = quantile_sorted(sorted, 0.75)?;
    let iqr = q3 - q1;
    let lo = sorted[0];
    let hi = sorted[sorted.len() - 1];
    Some(FiveNumber {
        q1,
        median,
        q3,
        lower_whisker: lo.max(q1 - 1.5 * iqr),
        upper_whisker: hi.min(q3 + 1.5 * iqr),
    })
}

/// Ordinary-least-squares fit of y on x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// OLS via slope = Σ(x-x̄)(y-ȳ) / Σ(x-x̄)². Zero x-variance is a named
/// error, never a silent Infinity/NaN.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Result<LinearFit, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch(xs.len(), ys.len()));
    }
    if xs.is_empty() {
        return Err(StatsError::Empty);
    }
    let x_mean = xs.iter().sum::<f64>() / xs.len() as f64;
    let y_mean = ys.iter().sum::<f64>() / ys.len() as f64;

    let mut num = 0.0;
    let mut den = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        num += (x - x_mean) * (y - y_mean);
        den += (x - x_mean) * (x - x_mean);
    }
    if den.abs() < f64::EPSILON {
        return Err(StatsError::DegenerateX);
    }
    let slope = num / den;
    Ok(LinearFit { slope, intercept: y_mean - slope * x_mean })
}

/// Finite minimum and maximum, skipping NaN; `None` when nothing is finite.
pub fn extent(xs: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for &x in xs {
        if x.is_finite() {
            min = min.min(x);
            max = max.max(x);
            any = true;
        }
    }
    if any {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert!((mean(&[1.0, 2.0, 3.0]).unwrap() - 2.0).abs() < EPS);
    }

    #[test]
    fn median_matches_parity_conventions() {
        // Odd length: middle element.
        let odd = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((quantile_sorted(&odd, 0.5).unwrap() - 3.0).abs() < EPS);
        // Even length: mean of the two middle elements.
        let even = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile_sorted(&even, 0.5).unwrap() - 2.5).abs() < EPS);
    }

    #[test]
    fn quantile_endpoints() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&xs, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&xs, 1.0), Some(5.0));
        assert_eq!(quantile_sorted(&xs, 1.5), None);
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn normalize_hits_unit_interval_endpoints() {
        assert!((min_max_normalize(2.0, 2.0, 6.0) - 0.0).abs() < EPS);
        assert!((min_max_normalize(6.0, 2.0, 6.0) - 1.0).abs() < EPS);
        assert!((min_max_normalize(4.0, 2.0, 6.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn normalize_degenerate_domain_is_defined() {
        let v = min_max_normalize(3.0, 3.0, 3.0);
        assert!(!v.is_nan());
        assert!((v - 0.5).abs() < EPS);
    }

    #[test]
    fn tukey_fence_on_one_to_ten() {
        let xs: Vec<f64> = (1..=10).map(f64::from).collect();
        let f = tukey_fence(&xs).unwrap();
        assert!((f.q1 - 3.25).abs() < EPS);
        assert!((f.median - 5.5).abs() < EPS);
        assert!((f.q3 - 7.75).abs() < EPS);
        // No outliers: whiskers clamp to the data extremes.
        assert!((f.lower_whisker - 1.0).abs() < EPS);
        assert!((f.upper_whisker - 10.0).abs() < EPS);
    }

    #[test]
    fn tukey_fence_clamps_outliers() {
        let xs = [1.0, 2.0, 3.0, 4.0, 100.0];
        let f = tukey_fence(&xs).unwrap();
        assert!(f.upper_whisker < 100.0);
        assert!((f.lower_whisker - 1.0).abs() < EPS);
    }

    #[test]
    fn regression_recovers_collinear_points() {
        let fit = linear_regression(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
        assert!((fit.slope - 2.0).abs() < EPS);
        assert!(fit.intercept.abs() < EPS);
        assert!((fit.at(3.0) - 6.0).abs() < EPS);
    }

    #[test]
    fn regression_degenerate_x_is_an_error() {
        let err = linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, StatsError::DegenerateX);
    }

    #[test]
    fn regression_shape_errors() {
        assert_eq!(linear_regression(&[], &[]).unwrap_err(), StatsError::Empty);
        assert_eq!(
            linear_regression(&[1.0], &[1.0, 2.0]).unwrap_err(),
            StatsError::LengthMismatch(1, 2)
        );
    }

    #[test]
    fn extent_skips_nan() {
        let xs = [f64::NAN, 3.0, 1.0, f64::NAN, 2.0];
        assert_eq!(extent(&xs), Some((1.0, 3.0)));
        assert_eq!(extent(&[f64::NAN]), None);
    }
}
