// File: crates/atlas-core/src/charts/heatmap.rs
// Summary: Top-10 x indicator heatmap with per-column min-max color scaling.

use atlas_data::{Dataset, Indicator};

use crate::axis::{x_band_axis, y_band_axis};
use crate::charts::plot_rect;
use crate::colormap::viridis;
use crate::scale::BandScale;
use crate::scene::{Mark, Scene};
use crate::stats::{extent, min_max_normalize};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Grid of the ten highest-scoring countries against the six indicators.
/// Each column is normalized independently before entering the color ramp,
/// so indicators on different unit scales stay comparable. Missing cells
/// take the theme's missing fill instead of a ramp color.
pub fn indicator_heatmap(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let (l, t, r, b) = plot_rect(WIDTH, HEIGHT, Insets::new(180, 20, 80, 100));

    let top = ds.top_by_score(10);
    let ramp = viridis();

    let x = BandScale::new(
        Indicator::ALL.iter().map(|i| i.label().to_string()).collect(),
        l,
        r,
        0.05,
    );
    let y = BandScale::new(
        top.iter().map(|rec| rec.country.clone()).collect(),
        t,
        b,
        0.05,
    );

    for (col, &ind) in Indicator::ALL.iter().enumerate() {
        let values: Vec<f64> = top.iter().map(|rec| rec.indicator(ind)).collect();
        let domain = extent(&values);

        for (row, value) in values.iter().enumerate() {
            let fill = match (domain, value.is_finite()) {
                (Some((min, max)), true) => {
                    ramp.sample(min_max_normalize(*value, min, max))
                }
                _ => theme.missing_cell,
            };
            scene.push(Mark::Rect {
                x: x.position_index(col),
                y: y.position_index(row),
                w: x.bandwidth(),
                h: y.bandwidth(),
                fill,
            });
        }
    }

    scene.extend(x_band_axis(&x, b, true, theme));
    scene.extend(y_band_axis(&y, l, theme));
    scene.push_title("Indicator heatmap for the top 10 countries", theme.title);
    scene
}
