// File: crates/atlas-core/src/charts/bars.rs
// Summary: Top-10 ladder score bars, vertical and horizontal variants.

use atlas_data::Dataset;

use crate::axis::{x_band_axis, x_linear_axis, y_band_axis, y_linear_axis};
use crate::charts::plot_rect;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Mark, Scene};
use crate::stats::extent;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Vertical bars for the ten highest-scoring countries.
pub fn top10_bars(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let (l, t, r, b) = plot_rect(WIDTH, HEIGHT, Insets::new(80, 30, 40, 150));

    let top = ds.top_by_score(10);
    let scores: Vec<f64> = top.iter().map(|rec| rec.ladder_score).collect();
    let max = extent(&scores).map(|(_, hi)| hi).unwrap_or(1.0);

    let x = BandScale::new(
        top.iter().map(|rec| rec.country.clone()).collect(),
        l,
        r,
        0.2,
    );
    let y = LinearScale::new(0.0, max, b, t).nice();

    for (i, rec) in top.iter().enumerate() {
        let x0 = x.position_index(i);
        let y0 = y.scale(rec.ladder_score);
        scene.push(Mark::Rect {
            x: x0,
            y: y0,
            w: x.bandwidth(),
            h: b - y0,
            fill: theme.bar_fill,
        });
    }

    scene.extend(x_band_axis(&x, b, true, theme));
    scene.extend(y_linear_axis(&y, l, theme));
    scene.push_title("Top 10 countries by ladder score", theme.title);
    scene
}

/// Horizontal variant of the top-10 ranking.
pub fn top10_bars_horizontal(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let (l, t, r, b) = plot_rect(WIDTH, HEIGHT, Insets::new(200, 30, 40, 40));

    let top = ds.top_by_score(10);
    let scores: Vec<f64> = top.iter().map(|rec| rec.ladder_score).collect();
    let max = extent(&scores).map(|(_, hi)| hi).unwrap_or(1.0);

    let y = BandScale::new(
        top.iter().map(|rec| rec.country.clone()).collect(),
        t,
        b,
        0.15,
    );
    let x = LinearScale::new(0.0, max, l, r).nice();

    for (i, rec) in top.iter().enumerate() {
        let y0 = y.position_index(i);
        scene.push(Mark::Rect {
            x: l,
            y: y0,
            w: x.scale(rec.ladder_score) - l,
            h: y.bandwidth(),
            fill: theme.bar_alt_fill,
        });
    }

    scene.extend(y_band_axis(&y, l, theme));
    scene.extend(x_linear_axis(&x, b, theme));
    scene
}
