// File: crates/atlas-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use atlas_core::render::render_to_rgba8;
use atlas_core::scene::{Mark, Scene};
use atlas_core::types::Color;

#[test]
fn render_rgba8_buffer() {
    let mut scene = Scene::new(64, 48, Color::from_rgb(250, 250, 252));
    scene.push(Mark::Line {
        x1: 0.0,
        y1: 0.0,
        x2: 64.0,
        y2: 48.0,
        stroke: Color::from_rgb(30, 30, 30),
        width: 2.0,
    });

    let (px, w, h, stride) = render_to_rgba8(&scene).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}
