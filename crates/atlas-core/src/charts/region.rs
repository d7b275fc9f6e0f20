// File: crates/atlas-core/src/charts/region.rs
// Summary: Per-region aggregates; mean-score series and Tukey boxplots.

use atlas_data::Dataset;

use crate::axis::{x_band_axis, x_point_axis, y_linear_axis};
use crate::charts::plot_rect;
use crate::scale::{BandScale, LinearScale, PointScale};
use crate::scene::{Mark, Scene};
use crate::stats::{extent, mean, tukey_fence};
use crate::theme::Theme;
use crate::types::{Color, Insets, HEIGHT, WIDTH};

/// Mean ladder score per region as a connected point series. Regions sort
/// alphabetically so equal means cannot reorder the axis between runs.
pub fn region_means(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let (l, t, r, b) = plot_rect(WIDTH, HEIGHT, Insets::new(80, 30, 40, 110));

    let mut groups: Vec<(String, f64)> = ds
        .group_by_region()
        .into_iter()
        .filter_map(|(region, members)| {
            let scores: Vec<f64> = members
                .iter()
                .map(|rec| rec.ladder_score)
                .filter(|s| s.is_finite())
                .collect();
            mean(&scores).map(|avg| (region, avg))
        })
        .collect();
    groups.sort_by(|a, b| a.0.cmp(&b.0));

    let max = extent(&groups.iter().map(|g| g.1).collect::<Vec<_>>())
        .map(|(_, hi)| hi)
        .unwrap_or(1.0);

    let x = PointScale::new(groups.iter().map(|g| g.0.clone()).collect(), l, r, 0.5);
    let y = LinearScale::new(0.0, max, b, t).nice();

    let points: Vec<(f32, f32)> = groups
        .iter()
        .enumerate()
        .map(|(i, (_, avg))| (x.position_index(i), y.scale(*avg)))
        .collect();

    if points.len() >= 2 {
        scene.push(Mark::Polyline {
            points: points.clone(),
            stroke: theme.series_stroke,
            width: 2.0,
        });
    }
    for (cx, cy) in points {
        scene.push(Mark::Circle {
            cx,
            cy,
            r: 5.0,
            fill: theme.series_stroke,
            stroke: Color::TRANSPARENT,
            stroke_width: 0.0,
        });
    }

    scene.extend(x_point_axis(&x, b, theme));
    scene.extend(y_linear_axis(&y, l, theme));
    scene
}

/// Ladder-score distribution per region as box-and-whisker glyphs.
/// Regions keep first-seen dataset order; empty groups are skipped.
pub fn region_boxplot(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let (l, t, r, b) = plot_rect(WIDTH, HEIGHT, Insets::new(80, 30, 40, 150));

    let summaries: Vec<(String, crate::stats::FiveNumber)> = ds
        .group_by_region()
        .into_iter()
        .filter_map(|(region, members)| {
            let mut scores: Vec<f64> = members
                .iter()
                .map(|rec| rec.ladder_score)
                .filter(|s| s.is_finite())
                .collect();
            scores.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            tukey_fence(&scores).map(|f| (region, f))
        })
        .collect();

    let all_scores: Vec<f64> = ds
        .ladder_scores()
        .into_iter()
        .filter(|s| s.is_finite())
        .collect();
    let (lo, hi) = extent(&all_scores).unwrap_or((0.0, 1.0));

    let x = BandScale::new(summaries.iter().map(|s| s.0.clone()).collect(), l, r, 0.4);
    let y = LinearScale::new(lo, hi, b, t).nice();

    for (i, (_, five)) in summaries.iter().enumerate() {
        let center = x.center_index(i);
        let box_w = x.bandwidth() * 0.6;

        // Whisker spine, then box, median tick, and end caps.
        scene.push(Mark::Line {
            x1: center,
            y1: y.scale(five.lower_whisker),
            x2: center,
            y2: y.scale(five.upper_whisker),
            stroke: theme.box_stroke,
            width: 1.0,
        });
        let y_q3 = y.scale(five.q3);
        scene.push(Mark::Rect {
            x: center - box_w / 2.0,
            y: y_q3,
            w: box_w,
            h: y.scale(five.q1) - y_q3,
            fill: theme.box_fill,
        });
        scene.push(Mark::Line {
            x1: center - box_w / 2.0,
            y1: y.scale(five.median),
            x2: center + box_w / 2.0,
            y2: y.scale(five.median),
            stroke: theme.box_stroke,
            width: 1.5,
        });
        for whisker in [five.lower_whisker, five.upper_whisker] {
            scene.push(Mark::Line {
                x1: center - box_w / 4.0,
                y1: y.scale(whisker),
                x2: center + box_w / 4.0,
                y2: y.scale(whisker),
                stroke: theme.box_stroke,
                width: 1.0,
            });
        }
    }

    scene.extend(x_band_axis(&x, b, true, theme));
    scene.extend(y_linear_axis(&y, l, theme));
    scene
}
