// File: crates/atlas-core/src/charts/radar.rs
// Summary: Six-spoke normalized indicator profile for one named country.

use atlas_data::{Dataset, Indicator};

use crate::scene::{Mark, Scene, TextAnchor};
use crate::stats::{extent, min_max_normalize};
use crate::theme::Theme;
use crate::types::{Color, HEIGHT, WIDTH};

const GRID_LEVELS: usize = 4;

/// Radar profile of the six indicators for `country`, matched
/// case-insensitively. Each spoke is min-max normalized over the whole
/// dataset; the corruption spoke alone is inverted (1 - norm) because its
/// raw direction is the only one where higher means worse, keeping every
/// spoke readable as "higher = better". A lookup miss renders a message
/// scene rather than failing the whole run.
pub fn country_radar(ds: &Dataset, country: &str, theme: &Theme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    let cx = WIDTH as f32 / 2.0;
    let cy = HEIGHT as f32 / 2.0;
    let radius = (WIDTH.min(HEIGHT) as f32) / 3.0;

    let Some(record) = ds.find_country(country) else {
        scene.push(Mark::Text {
            x: cx,
            y: cy,
            text: format!("Country not found: {country}"),
            size: 14.0,
            color: theme.axis_label,
            anchor: TextAnchor::Middle,
            angle: 0.0,
        });
        return scene;
    };

    // Concentric grid rings.
    for level in 1..=GRID_LEVELS {
        scene.push(Mark::Circle {
            cx,
            cy,
            r: radius * level as f32 / GRID_LEVELS as f32,
            fill: Color::TRANSPARENT,
            stroke: theme.grid,
            stroke_width: 1.0,
        });
    }

    let step = std::f32::consts::TAU / Indicator::ALL.len() as f32;
    let mut points = Vec::with_capacity(Indicator::ALL.len());

    for (i, &ind) in Indicator::ALL.iter().enumerate() {
        let angle = step * i as f32 - std::f32::consts::FRAC_PI_2;
        let (dir_x, dir_y) = (angle.cos(), angle.sin());

        // Spoke and its label.
        scene.push(Mark::Line {
            x1: cx,
            y1: cy,
            x2: cx + radius * 1.05 * dir_x,
            y2: cy + radius * 1.05 * dir_y,
            stroke: theme.tick,
            width: 1.0,
        });
        scene.push(Mark::Text {
            x: cx + radius * 1.15 * dir_x,
            y: cy + radius * 1.15 * dir_y + 4.0,
            text: ind.short_label().to_string(),
            size: 11.0,
            color: theme.axis_label,
            anchor: TextAnchor::Middle,
            angle: 0.0,
        });

        let norm = spoke_value(ds, record.indicator(ind), ind);
        points.push((cx + radius * norm * dir_x, cy + radius * norm * dir_y));
    }

    scene.push(Mark::Polygon {
        points: points.clone(),
        fill: theme.radar_fill,
        stroke: theme.radar_stroke,
        stroke_width: 2.0,
    });
    for (px, py) in points {
        scene.push(Mark::Circle {
            cx: px,
            cy: py,
            r: 4.0,
            fill: theme.radar_stroke,
            stroke: theme.background,
            stroke_width: 1.0,
        });
    }

    scene.push_title(format!("{} — indicator profile", record.country), theme.title);
    scene
}

/// Normalized spoke length in [0,1]. A missing value collapses the spoke
/// to the center, which keeps the gap visible without breaking the polygon.
fn spoke_value(ds: &Dataset, raw: f64, ind: Indicator) -> f32 {
    if !raw.is_finite() {
        return 0.0;
    }
    let values = ds.indicator_values(ind);
    let Some((min, max)) = extent(&values) else {
        return 0.0;
    };
    let mut norm = min_max_normalize(raw, min, max);
    if ind == Indicator::Corruption {
        norm = 1.0 - norm;
    }
    norm.clamp(0.0, 1.0) as f32
}
