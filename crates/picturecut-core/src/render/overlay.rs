//! Overlay geometry for the crop rectangle.
//!
//! The overlay is a 3x3 grid spanning the crop rectangle (its outer lines
//! are the rectangle border) plus thicker accent strokes: two at each
//! corner and one centered on each edge. Everything is recomputed from the
//! current rectangle on every frame.

use crate::config::EditorConfig;
use crate::geometry::{CropRect, Point};

/// A straight stroke in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub stroke: f32,
}

impl Segment {
    fn new(x0: f32, y0: f32, x1: f32, y1: f32, stroke: f32) -> Self {
        Self {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
            stroke,
        }
    }
}

/// Strokes to draw for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Width of one grid cell.
    pub cell_width: f32,
    /// Height of one grid cell.
    pub cell_height: f32,
    /// Four vertical then four horizontal grid lines.
    pub grid: [Segment; 8],
    /// Eight corner strokes then four edge-midpoint strokes.
    pub accents: [Segment; 12],
}

impl Overlay {
    pub fn compute(rect: &CropRect, config: &EditorConfig) -> Self {
        let CropRect {
            left: l,
            top: t,
            right: r,
            bottom: b,
        } = *rect;
        let cell_width = rect.width() / 3.0;
        let cell_height = rect.height() / 3.0;
        let thin = config.grid_stroke;

        // The last line of each direction is the border itself
        let grid: [Segment; 8] = std::array::from_fn(|i| {
            let step = i % 4;
            if i < 4 {
                let x = if step == 3 { r } else { l + cell_width * step as f32 };
                Segment::new(x, t, x, b, thin)
            } else {
                let y = if step == 3 { b } else { t + cell_height * step as f32 };
                Segment::new(l, y, r, y, thin)
            }
        });

        let a = config.corner_accent_length;
        let half = config.edge_accent_length / 2.0;
        let thick = config.accent_stroke;
        let center = rect.center();

        let accents = [
            // Top-left
            Segment::new(l, t, l + a, t, thick),
            Segment::new(l, t, l, t + a, thick),
            // Top-right
            Segment::new(r - a, t, r, t, thick),
            Segment::new(r, t, r, t + a, thick),
            // Bottom-left
            Segment::new(l, b, l + a, b, thick),
            Segment::new(l, b - a, l, b, thick),
            // Bottom-right
            Segment::new(r - a, b, r, b, thick),
            Segment::new(r, b - a, r, b, thick),
            // Edge midpoints: top, bottom, left, right
            Segment::new(center.x - half, t, center.x + half, t, thick),
            Segment::new(center.x - half, b, center.x + half, b, thick),
            Segment::new(l, center.y - half, l, center.y + half, thick),
            Segment::new(r, center.y - half, r, center.y + half, thick),
        ];

        Self {
            cell_width,
            cell_height,
            grid,
            accents,
        }
    }

    /// All strokes, grid first.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.grid.iter().chain(self.accents.iter())
    }
}
