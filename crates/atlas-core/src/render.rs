// File: crates/atlas-core/src/render.rs
// Summary: Headless scene rasterization using Skia CPU surfaces (PNG/RGBA).

use anyhow::Result;
use skia_safe as skia;

use crate::scene::{Mark, Scene, TextAnchor};
use crate::text::TextShaper;
use crate::types::Color;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(c));
    paint.set_anti_alias(true);
    paint
}

fn stroke_paint(c: Color, width: f32) -> skia::Paint {
    let mut paint = fill_paint(c);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

/// Render the scene to a PNG at `path` using a CPU raster surface.
pub fn render_to_png(scene: &Scene, path: impl AsRef<std::path::Path>) -> Result<()> {
    let data = render_to_png_bytes(scene)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

/// Render the scene and return encoded PNG bytes.
pub fn render_to_png_bytes(scene: &Scene) -> Result<Vec<u8>> {
    let mut surface = raster_surface(scene)?;
    draw_scene(surface.canvas(), scene);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene into a raw RGBA8 buffer; returns (pixels, w, h, stride).
pub fn render_to_rgba8(scene: &Scene) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = raster_surface(scene)?;
    draw_scene(surface.canvas(), scene);

    let (w, h) = (scene.width, scene.height);
    let info = skia::ImageInfo::new(
        (w, h),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Premul,
        None,
    );
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read_pixels failed");
    }
    Ok((pixels, w, h, stride))
}

fn raster_surface(scene: &Scene) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((scene.width, scene.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

fn draw_scene(canvas: &skia::Canvas, scene: &Scene) {
    let shaper = TextShaper::new();
    canvas.clear(to_skia(scene.background));
    for mark in &scene.marks {
        draw_mark(canvas, &shaper, mark);
    }
}

fn draw_mark(canvas: &skia::Canvas, shaper: &TextShaper, mark: &Mark) {
    match mark {
        Mark::Rect { x, y, w, h, fill } => {
            if fill.is_visible() {
                let rect = skia::Rect::from_xywh(*x, *y, *w, *h);
                canvas.draw_rect(rect, &fill_paint(*fill));
            }
        }
        Mark::Line { x1, y1, x2, y2, stroke, width } => {
            canvas.draw_line((*x1, *y1), (*x2, *y2), &stroke_paint(*stroke, *width));
        }
        Mark::Polyline { points, stroke, width } => {
            if points.len() < 2 {
                return;
            }
            let path = polyline_path(points, false);
            canvas.draw_path(&path, &stroke_paint(*stroke, *width));
        }
        Mark::Polygon { points, fill, stroke, stroke_width } => {
            if points.len() < 3 {
                return;
            }
            let path = polyline_path(points, true);
            if fill.is_visible() {
                canvas.draw_path(&path, &fill_paint(*fill));
            }
            if stroke.is_visible() && *stroke_width > 0.0 {
                canvas.draw_path(&path, &stroke_paint(*stroke, *stroke_width));
            }
        }
        Mark::Circle { cx, cy, r, fill, stroke, stroke_width } => {
            if fill.is_visible() {
                canvas.draw_circle((*cx, *cy), *r, &fill_paint(*fill));
            }
            if stroke.is_visible() && *stroke_width > 0.0 {
                canvas.draw_circle((*cx, *cy), *r, &stroke_paint(*stroke, *stroke_width));
            }
        }
        Mark::Wedge { cx, cy, inner, outer, start, sweep, fill } => {
            // Scene angles run clockwise from 12 o'clock; Skia measures
            // from 3 o'clock. Sweep stays below a full turn.
            let start = start - 90.0;
            let sweep = sweep.min(359.99);
            let outer_oval =
                skia::Rect::from_xywh(cx - outer, cy - outer, outer * 2.0, outer * 2.0);
            let mut path = skia::PathBuilder::new();
            path.arc_to(outer_oval, start, sweep, true);
            if *inner > 0.0 {
                let inner_oval =
                    skia::Rect::from_xywh(cx - inner, cy - inner, inner * 2.0, inner * 2.0);
                path.arc_to(inner_oval, start + sweep, -sweep, false);
            } else {
                path.line_to((*cx, *cy));
            }
            path.close();
            canvas.draw_path(&path.detach(), &fill_paint(*fill));
        }
        Mark::Text { x, y, text, size, color, anchor, angle } => {
            let width = shaper.measure_width(text, *size);
            let dx = match anchor {
                TextAnchor::Start => 0.0,
                TextAnchor::Middle => -width / 2.0,
                TextAnchor::End => -width,
            };
            let rotated = angle.abs() > f32::EPSILON;
            if rotated {
                canvas.save();
                canvas.rotate(*angle, Some(skia::Point::new(*x, *y)));
            }
            shaper.draw_left(canvas, text, x + dx, *y, *size, to_skia(*color));
            if rotated {
                canvas.restore();
            }
        }
    }
}

fn polyline_path(points: &[(f32, f32)], closed: bool) -> skia::Path {
    let mut path = skia::PathBuilder::new();
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    if closed {
        path.close();
    }
    path.detach()
}
