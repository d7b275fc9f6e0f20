// File: crates/atlas-core/src/charts/scatter.rs
// Summary: Scatter, bubble, and regression-scatter builders over indicator pairs.

use atlas_data::{Dataset, Indicator};

use crate::axis::{x_linear_axis, y_linear_axis};
use crate::charts::plot_rect;
use crate::scale::{LinearScale, SqrtScale};
use crate::scene::{Mark, Scene};
use crate::stats::{extent, linear_regression};
use crate::theme::Theme;
use crate::types::{Color, Insets, HEIGHT, WIDTH};

const POINT_R: f32 = 5.0;

/// GDP proxy vs ladder score. Rows missing either coordinate are skipped.
pub fn scatter_gdp(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let (l, t, r, b) = plot_rect(WIDTH, HEIGHT, Insets::new(80, 30, 40, 60));

    let points: Vec<(f64, f64)> = ds
        .iter()
        .map(|rec| (rec.indicator(Indicator::LogGdpPerCapita), rec.ladder_score))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let (x0, x1) = extent(&xs).unwrap_or((0.0, 1.0));
    let (y0, y1) = extent(&ys).unwrap_or((0.0, 1.0));
    let x = LinearScale::new(x0, x1, l, r).nice();
    let y = LinearScale::new(y0, y1, b, t).nice();

    for (px, py) in &points {
        scene.push(circle(x.scale(*px), y.scale(*py), POINT_R, theme.point_fill));
    }

    scene.extend(x_linear_axis(&x, b, theme));
    scene.extend(y_linear_axis(&y, l, theme));
    scene
}

/// GDP vs ladder score with radius encoding freedom through a sqrt scale,
/// so bubble area tracks the value linearly.
pub fn bubble_freedom(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let (l, t, r, b) = plot_rect(WIDTH, HEIGHT, Insets::new(80, 30, 40, 60));

    let points: Vec<(f64, f64, f64)> = ds
        .iter()
        .map(|rec| {
            (
                rec.indicator(Indicator::LogGdpPerCapita),
                rec.ladder_score,
                rec.indicator(Indicator::Freedom),
            )
        })
        .filter(|(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite())
        .collect();

    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let zs: Vec<f64> = points.iter().map(|p| p.2).collect();
    let (x0, x1) = extent(&xs).unwrap_or((0.0, 1.0));
    let (y0, y1) = extent(&ys).unwrap_or((0.0, 1.0));
    let (z0, z1) = extent(&zs).unwrap_or((0.0, 1.0));

    let x = LinearScale::new(x0, x1, l, r).nice();
    let y = LinearScale::new(y0, y1, b, t).nice();
    let radius = SqrtScale::new(z0, z1, 3.0, 25.0);

    for (px, py, pz) in &points {
        scene.push(circle(
            x.scale(*px),
            y.scale(*py),
            radius.scale(*pz),
            theme.bubble_fill,
        ));
    }

    scene.extend(x_linear_axis(&x, b, theme));
    scene.extend(y_linear_axis(&y, l, theme));
    scene
}

/// Generosity vs corruption perception plus one OLS trend line spanning the
/// finite x-extent. Pairs with a missing coordinate stay out of both the
/// scatter and the fit; a degenerate fit simply draws no line.
pub fn regression_scatter(ds: &Dataset, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let (l, t, r, b) = plot_rect(WIDTH, HEIGHT, Insets::new(80, 30, 40, 60));

    let points: Vec<(f64, f64)> = ds
        .iter()
        .map(|rec| {
            (
                rec.indicator(Indicator::Generosity),
                rec.indicator(Indicator::Corruption),
            )
        })
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let (x0, x1) = extent(&xs).unwrap_or((0.0, 1.0));
    let (y0, y1) = extent(&ys).unwrap_or((0.0, 1.0));
    let x = LinearScale::new(x0, x1, l, r).nice();
    let y = LinearScale::new(y0, y1, b, t).nice();

    for (px, py) in &points {
        scene.push(circle(
            x.scale(*px),
            y.scale(*py),
            POINT_R,
            theme.palette[4].with_alpha(190),
        ));
    }

    if let Ok(fit) = linear_regression(&xs, &ys) {
        scene.push(Mark::Polyline {
            points: vec![
                (x.scale(x0), y.scale(fit.at(x0))),
                (x.scale(x1), y.scale(fit.at(x1))),
            ],
            stroke: theme.trend_stroke,
            width: 2.0,
        });
    }

    scene.extend(x_linear_axis(&x, b, theme));
    scene.extend(y_linear_axis(&y, l, theme));
    scene
}

fn circle(cx: f32, cy: f32, r: f32, fill: Color) -> Mark {
    Mark::Circle {
        cx,
        cy,
        r,
        fill,
        stroke: Color::TRANSPARENT,
        stroke_width: 0.0,
    }
}
