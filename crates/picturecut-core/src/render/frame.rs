//! Rasterizing a frame of the crop editor.
//!
//! A frame is a viewport-sized RGB image. While editing it shows the
//! display copy at its placement with the overlay on top. After a commit it
//! shows only the part of the display copy inside the crop rectangle.

use crate::config::EditorConfig;
use crate::decode::DecodedImage;
use crate::geometry::CropRect;
use crate::interaction::{CropSession, Layout};

use super::{Overlay, Segment};

/// Integer pixel span `[start, end)` covering `[low, high]`, clipped to `len`.
fn pixel_span(low: f32, high: f32, len: u32) -> (u32, u32) {
    let start = low.floor().clamp(0.0, len as f32) as u32;
    let end = high.ceil().clamp(0.0, len as f32) as u32;
    (start, end.max(start))
}

/// Fill an axis-aligned region of the canvas.
fn fill_rect(canvas: &mut DecodedImage, rect: &CropRect, rgb: [u8; 3]) {
    let (x0, x1) = pixel_span(rect.left, rect.right, canvas.width);
    let (y0, y1) = pixel_span(rect.top, rect.bottom, canvas.height);
    for y in y0..y1 {
        let row = (y * canvas.width) as usize * 3;
        for x in x0..x1 {
            let idx = row + x as usize * 3;
            canvas.pixels[idx..idx + 3].copy_from_slice(&rgb);
        }
    }
}

/// Draw an axis-aligned stroke as a filled rectangle.
fn draw_segment(canvas: &mut DecodedImage, seg: &Segment, rgb: [u8; 3]) {
    let half = seg.stroke / 2.0;
    let rect = CropRect::new(
        seg.start.x.min(seg.end.x) - half,
        seg.start.y.min(seg.end.y) - half,
        seg.start.x.max(seg.end.x) + half,
        seg.start.y.max(seg.end.y) + half,
    );
    fill_rect(canvas, &rect, rgb);
}

/// Copy `image` onto the canvas at `(x, y)`, restricted to `clip`.
fn blit(canvas: &mut DecodedImage, image: &DecodedImage, x: f32, y: f32, clip: &CropRect) {
    let origin_x = x.round() as i64;
    let origin_y = y.round() as i64;
    let (cx0, cx1) = pixel_span(clip.left, clip.right, canvas.width);
    let (cy0, cy1) = pixel_span(clip.top, clip.bottom, canvas.height);

    let x0 = (origin_x.max(cx0 as i64)) as u32;
    let x1 = ((origin_x + image.width as i64).min(cx1 as i64)).max(x0 as i64) as u32;
    let y0 = (origin_y.max(cy0 as i64)) as u32;
    let y1 = ((origin_y + image.height as i64).min(cy1 as i64)).max(y0 as i64) as u32;
    if x0 >= x1 {
        return;
    }

    let run = (x1 - x0) as usize * 3;
    for cy in y0..y1 {
        let sy = (cy as i64 - origin_y) as u32;
        let sx = (x0 as i64 - origin_x) as u32;
        let src = ((sy * image.width + sx) * 3) as usize;
        let dst = ((cy * canvas.width + x0) * 3) as usize;
        canvas.pixels[dst..dst + run].copy_from_slice(&image.pixels[src..src + run]);
    }
}

/// Render one frame for a laid-out session.
pub fn render_layout(layout: &Layout, config: &EditorConfig) -> DecodedImage {
    let viewport = layout.viewport();
    let width = (viewport.width.round() as u32).max(1);
    let height = (viewport.height.round() as u32).max(1);
    let mut canvas = DecodedImage::filled(width, height, config.background_color);

    let placed = layout.placed();
    let crop = layout.crop();

    if layout.is_committed() {
        blit(&mut canvas, layout.display(), placed.offset_x, placed.offset_y, &crop);
        return canvas;
    }

    let full = CropRect::new(0.0, 0.0, width as f32, height as f32);
    blit(&mut canvas, layout.display(), placed.offset_x, placed.offset_y, &full);

    let overlay = Overlay::compute(&crop, config);
    for seg in overlay.segments() {
        draw_segment(&mut canvas, seg, config.overlay_color);
    }
    canvas
}

/// Render the current frame, or `None` before the first layout.
pub fn render_frame(session: &CropSession) -> Option<DecodedImage> {
    session
        .layout()
        .map(|layout| render_layout(layout, session.config()))
}
