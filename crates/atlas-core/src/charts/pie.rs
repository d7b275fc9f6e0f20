// File: crates/atlas-core/src/charts/pie.rs
// Summary: Donut of global indicator means as proportional arc angles.

use atlas_data::{Dataset, Indicator};

use crate::scene::{Mark, Scene, TextAnchor};
use crate::stats::mean;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

/// Six global indicator means as a donut. Indicators whose mean is
/// undefined or non-positive contribute no slice (a negative share has no
/// meaningful arc angle).
pub fn factor_pie(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let cx = WIDTH as f32 / 2.0;
    let cy = HEIGHT as f32 / 2.0;
    let outer = (WIDTH.min(HEIGHT) as f32) / 4.0;
    let inner = outer * 0.4;

    let slices: Vec<(Indicator, f64)> = Indicator::ALL
        .iter()
        .filter_map(|&ind| {
            let values: Vec<f64> = ds
                .indicator_values(ind)
                .into_iter()
                .filter(|v| v.is_finite())
                .collect();
            mean(&values)
                .filter(|avg| avg.is_finite() && *avg > 0.0)
                .map(|avg| (ind, avg))
        })
        .collect();

    let total: f64 = slices.iter().map(|s| s.1).sum();
    if total <= 0.0 {
        return scene;
    }

    let mut start = 0.0f32;
    for (i, (ind, value)) in slices.iter().enumerate() {
        let sweep = (value / total * 360.0) as f32;
        scene.push(Mark::Wedge {
            cx,
            cy,
            inner,
            outer,
            start,
            sweep,
            fill: theme.palette[i % theme.palette.len()].with_alpha(217),
        });

        // Label at the slice centroid, as d3's arc.centroid does.
        let mid = (start + sweep / 2.0 - 90.0).to_radians();
        let label_r = (inner + outer) / 2.0;
        scene.push(Mark::Text {
            x: cx + label_r * mid.cos(),
            y: cy + label_r * mid.sin(),
            text: ind.short_label().to_string(),
            size: 11.0,
            color: theme.axis_label,
            anchor: TextAnchor::Middle,
            angle: 0.0,
        });

        start += sweep;
    }

    scene
}
