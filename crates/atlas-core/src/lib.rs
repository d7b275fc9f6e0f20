// File: crates/atlas-core/src/lib.rs
// Summary: Core library entry point; stats, scales, chart scenes, rendering.

pub mod axis;
pub mod charts;
pub mod colormap;
pub mod render;
pub mod scale;
pub mod scene;
pub mod stats;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use charts::{
    bubble_freedom, country_radar, factor_pie, indicator_heatmap, region_boxplot, region_means,
    regression_scatter, scatter_gdp, top10_bars, top10_bars_horizontal,
};
pub use colormap::{viridis, Colormap};
pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8};
pub use scale::{BandScale, LinearScale, PointScale, SqrtScale};
pub use scene::{Mark, Scene, TextAnchor};
pub use stats::{
    extent, linear_regression, mean, min_max_normalize, quantile_sorted, tukey_fence, FiveNumber,
    LinearFit, StatsError,
};
pub use svg::{scene_to_svg_string, write_scene_svg};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Color, Insets, HEIGHT, WIDTH};
