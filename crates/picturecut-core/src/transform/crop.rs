//! Mapping the crop rectangle back to source pixels and cutting it out.
//!
//! # Coordinate System
//!
//! - The crop rectangle lives in viewport coordinates
//! - The output rectangle is in source-image pixels, origin top-left
//! - `source = (viewport - offset) / scale`, rounded to whole pixels

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;
use crate::geometry::{CropRect, PlacedImage};

/// A rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Result of committing a crop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropOutput {
    /// The cut region in source pixels.
    pub rect: PixelRect,
    /// Pixels of that region, in the source's representation.
    pub image: DecodedImage,
}

/// Map one viewport edge pair onto a source axis of `len` pixels.
fn map_axis(low: f32, high: f32, offset: f32, scale: f64, len: u32) -> (u32, u32) {
    let to_px = |v: f32| ((v - offset) as f64 / scale).round().clamp(0.0, len as f64) as u32;
    let start = to_px(low).min(len.saturating_sub(1));
    let end = to_px(high).clamp(start + 1, len);
    (start, end - start)
}

/// Inverse-map a crop rectangle through the placement into source pixels.
///
/// The result is clamped to the source image and is at least 1x1.
pub fn source_rect(crop: &CropRect, placed: &PlacedImage) -> PixelRect {
    let (x, width) = map_axis(
        crop.left,
        crop.right,
        placed.offset_x,
        placed.scale,
        placed.source_width,
    );
    let (y, height) = map_axis(
        crop.top,
        crop.bottom,
        placed.offset_y,
        placed.scale,
        placed.source_height,
    );
    PixelRect::new(x, y, width, height)
}

/// Cut a pixel rectangle out of an image.
///
/// The rectangle is clipped to the image; a full-size rectangle returns a
/// copy of the original.
pub fn apply_crop(image: &DecodedImage, rect: &PixelRect) -> DecodedImage {
    let px_left = rect.x.min(image.width.saturating_sub(1));
    let px_top = rect.y.min(image.height.saturating_sub(1));
    let px_right = px_left.saturating_add(rect.width).min(image.width);
    let px_bottom = px_top.saturating_add(rect.height).min(image.height);

    // Fast path: full crop returns a clone
    if px_left == 0 && px_top == 0 && px_right == image.width && px_bottom == image.height {
        return image.clone();
    }

    let out_width = px_right.saturating_sub(px_left).max(1);
    let out_height = px_bottom.saturating_sub(px_top).max(1);

    let row_bytes = (out_width * 3) as usize;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for y in px_top..px_top + out_height {
        let start = ((y * image.width + px_left) * 3) as usize;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Map `crop` to source pixels and cut that region out of `source`.
pub fn crop_to_source(source: &DecodedImage, crop: &CropRect, placed: &PlacedImage) -> CropOutput {
    let rect = source_rect(crop, placed);
    CropOutput {
        rect,
        image: apply_crop(source, &rect),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
