// File: crates/atlas-core/src/charts/mod.rs
// Summary: The ten chart builders; each is a pure (dataset, theme) -> Scene fn.

pub mod bars;
pub mod heatmap;
pub mod pie;
pub mod radar;
pub mod region;
pub mod scatter;

pub use bars::{top10_bars, top10_bars_horizontal};
pub use heatmap::indicator_heatmap;
pub use pie::factor_pie;
pub use radar::country_radar;
pub use region::{region_boxplot, region_means};
pub use scatter::{bubble_freedom, regression_scatter, scatter_gdp};

use crate::types::Insets;

/// Plot rectangle (left, top, right, bottom) for a surface and margins.
pub(crate) fn plot_rect(width: i32, height: i32, insets: Insets) -> (f32, f32, f32, f32) {
    (
        insets.left as f32,
        insets.top as f32,
        (width - insets.right as i32) as f32,
        (height - insets.bottom as i32) as f32,
    )
}
