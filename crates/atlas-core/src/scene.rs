// File: crates/atlas-core/src/scene.rs
// Summary: Backend-neutral scene model; charts compute marks, backends draw them.

use crate::types::Color;

/// Horizontal anchoring for text marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One drawable primitive. Coordinates are surface pixels, y growing down.
#[derive(Clone, Debug)]
pub enum Mark {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Color,
        width: f32,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        stroke: Color,
        width: f32,
    },
    /// Closed polygon; either paint may be transparent.
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Color,
        stroke: Color,
        stroke_width: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Color,
        stroke: Color,
        stroke_width: f32,
    },
    /// Annular sector for pie/donut slices. Angles are degrees, measured
    /// clockwise from 12 o'clock; `sweep` is the slice extent.
    Wedge {
        cx: f32,
        cy: f32,
        inner: f32,
        outer: f32,
        start: f32,
        sweep: f32,
        fill: Color,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
        /// Rotation in degrees around (x, y); 0 = horizontal.
        angle: f32,
    },
}

/// A fully computed chart: fixed surface size, background, ordered marks.
/// Building a scene touches no drawing surface, so geometry is testable
/// on its own; re-rendering a scene replaces the previous output entirely.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: Color,
    pub marks: Vec<Mark>,
}

impl Scene {
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        Self { width, height, background, marks: Vec::new() }
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    /// Centered title across the top of the surface.
    pub fn push_title(&mut self, text: impl Into<String>, color: Color) {
        let x = self.width as f32 / 2.0;
        self.push(Mark::Text {
            x,
            y: 22.0,
            text: text.into(),
            size: 16.0,
            color,
            anchor: TextAnchor::Middle,
            angle: 0.0,
        });
    }

    /// Count marks of one shape; scene tests lean on this.
    pub fn count(&self, pred: impl Fn(&Mark) -> bool) -> usize {
        self.marks.iter().filter(|m| pred(m)).count()
    }
}
