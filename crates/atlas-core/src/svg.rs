// File: crates/atlas-core/src/svg.rs
// Summary: Vector twin of the raster backend; serializes scenes as SVG.

use std::fmt::Write as _;

use anyhow::Result;

use crate::scene::{Mark, Scene, TextAnchor};
use crate::types::Color;

/// Serialize a scene into a standalone SVG document.
pub fn scene_to_svg_string(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = scene.width,
        h = scene.height
    );
    let _ = write!(
        out,
        "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        scene.width,
        scene.height,
        scene.background.to_svg_rgb()
    );
    for mark in &scene.marks {
        write_mark(&mut out, mark);
    }
    out.push_str("</svg>\n");
    out
}

/// Write the scene as an SVG file, creating parent directories as needed.
pub fn write_scene_svg(scene: &Scene, path: impl AsRef<std::path::Path>) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, scene_to_svg_string(scene))?;
    Ok(())
}

fn write_mark(out: &mut String, mark: &Mark) {
    match mark {
        Mark::Rect { x, y, w, h, fill } => {
            if fill.is_visible() {
                let _ = write!(
                    out,
                    "  <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\"{}/>\n",
                    fill_attrs(*fill)
                );
            }
        }
        Mark::Line { x1, y1, x2, y2, stroke, width } => {
            let _ = write!(
                out,
                "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\"{}/>\n",
                stroke_attrs(*stroke, *width)
            );
        }
        Mark::Polyline { points, stroke, width } => {
            if points.len() < 2 {
                return;
            }
            let _ = write!(
                out,
                "  <polyline points=\"{}\" fill=\"none\"{}/>\n",
                points_attr(points),
                stroke_attrs(*stroke, *width)
            );
        }
        Mark::Polygon { points, fill, stroke, stroke_width } => {
            if points.len() < 3 {
                return;
            }
            let fill_part = if fill.is_visible() {
                fill_attrs(*fill)
            } else {
                " fill=\"none\"".to_string()
            };
            let stroke_part = if stroke.is_visible() && *stroke_width > 0.0 {
                stroke_attrs(*stroke, *stroke_width)
            } else {
                String::new()
            };
            let _ = write!(
                out,
                "  <polygon points=\"{}\"{}{}/>\n",
                points_attr(points),
                fill_part,
                stroke_part
            );
        }
        Mark::Circle { cx, cy, r, fill, stroke, stroke_width } => {
            let fill_part = if fill.is_visible() {
                fill_attrs(*fill)
            } else {
                " fill=\"none\"".to_string()
            };
            let stroke_part = if stroke.is_visible() && *stroke_width > 0.0 {
                stroke_attrs(*stroke, *stroke_width)
            } else {
                String::new()
            };
            let _ = write!(
                out,
                "  <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\"{}{}/>\n",
                fill_part, stroke_part
            );
        }
        Mark::Wedge { cx, cy, inner, outer, start, sweep, fill } => {
            let _ = write!(out, "  <path d=\"{}\"{}/>\n", wedge_path(*cx, *cy, *inner, *outer, *start, *sweep), fill_attrs(*fill));
        }
        Mark::Text { x, y, text, size, color, anchor, angle } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let transform = if angle.abs() > f32::EPSILON {
                format!(" transform=\"rotate({angle:.1},{x:.2},{y:.2})\"")
            } else {
                String::new()
            };
            let _ = write!(
                out,
                "  <text x=\"{x:.2}\" y=\"{y:.2}\" font-size=\"{size:.1}\" font-family=\"sans-serif\" text-anchor=\"{anchor}\" fill=\"{}\"{}>{}</text>\n",
                color.to_svg_rgb(),
                transform,
                escape(text)
            );
        }
    }
}

/// Annular sector path. Scene angles run clockwise from 12 o'clock.
fn wedge_path(cx: f32, cy: f32, inner: f32, outer: f32, start: f32, sweep: f32) -> String {
    let sweep = sweep.min(359.99);
    let a0 = (start - 90.0).to_radians();
    let a1 = (start + sweep - 90.0).to_radians();
    let large = if sweep > 180.0 { 1 } else { 0 };

    let (ox0, oy0) = (cx + outer * a0.cos(), cy + outer * a0.sin());
    let (ox1, oy1) = (cx + outer * a1.cos(), cy + outer * a1.sin());

    if inner > 0.0 {
        let (ix0, iy0) = (cx + inner * a0.cos(), cy + inner * a0.sin());
        let (ix1, iy1) = (cx + inner * a1.cos(), cy + inner * a1.sin());
        format!(
            "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large} 1 {ox1:.2} {oy1:.2} \
             L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
        )
    } else {
        format!(
            "M {cx:.2} {cy:.2} L {ox0:.2} {oy0:.2} \
             A {outer:.2} {outer:.2} 0 {large} 1 {ox1:.2} {oy1:.2} Z"
        )
    }
}

fn points_attr(points: &[(f32, f32)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fill_attrs(c: Color) -> String {
    if c.a == 255 {
        format!(" fill=\"{}\"", c.to_svg_rgb())
    } else {
        format!(" fill=\"{}\" fill-opacity=\"{:.3}\"", c.to_svg_rgb(), c.svg_opacity())
    }
}

fn stroke_attrs(c: Color, width: f32) -> String {
    if c.a == 255 {
        format!(" stroke=\"{}\" stroke-width=\"{width:.2}\"", c.to_svg_rgb())
    } else {
        format!(
            " stroke=\"{}\" stroke-opacity=\"{:.3}\" stroke-width=\"{width:.2}\"",
            c.to_svg_rgb(),
            c.svg_opacity()
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
