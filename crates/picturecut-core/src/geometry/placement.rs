//! Fitting the source image into the viewport.
//!
//! The image is scaled uniformly so that it fills one viewport axis exactly
//! without exceeding the other, then centered on both axes.
//!
//! # Algorithm
//!
//! 1. `scale = viewport_width / image_width`
//! 2. If `scale * image_height > viewport_height`, use
//!    `scale = viewport_height / image_height` instead
//! 3. Offsets center the scaled image and are clamped at zero

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CropRect;

/// Error types for the layout pass.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The source image has a zero dimension.
    #[error("Invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    /// The viewport has a non-positive or non-finite dimension.
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Drawing area left over after the reserved chrome is subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, rejecting non-positive or non-finite sizes.
    pub fn new(width: f32, height: f32) -> Result<Self, LayoutError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Derive the viewport from physical screen metrics.
    ///
    /// The full screen width is available; the height loses the status bar
    /// and the title bar.
    pub fn from_screen(
        screen_width: f32,
        screen_height: f32,
        status_bar_height: f32,
        title_bar_height: f32,
    ) -> Result<Self, LayoutError> {
        Self::new(
            screen_width,
            screen_height - status_bar_height - title_bar_height,
        )
    }
}

/// The source image after uniform scaling and centering in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedImage {
    /// Source image width in pixels.
    pub source_width: u32,
    /// Source image height in pixels.
    pub source_height: u32,
    /// Uniform scale from source pixels to viewport units.
    pub scale: f64,
    /// Scaled width in viewport units.
    pub width: f32,
    /// Scaled height in viewport units.
    pub height: f32,
    /// Left edge of the placed image.
    pub offset_x: f32,
    /// Top edge of the placed image.
    pub offset_y: f32,
}

impl PlacedImage {
    /// The placed image as a rectangle in viewport coordinates.
    pub fn bounds(&self) -> CropRect {
        CropRect::new(
            self.offset_x,
            self.offset_y,
            self.offset_x + self.width,
            self.offset_y + self.height,
        )
    }

    /// Pixel dimensions of the display copy built during layout.
    pub fn display_size(&self) -> (u32, u32) {
        (
            (self.width.round() as u32).max(1),
            (self.height.round() as u32).max(1),
        )
    }
}

/// Compute the scale and placement of an image inside a viewport.
///
/// # Arguments
///
/// * `image_width`, `image_height` - Source image size in pixels
/// * `viewport` - Available drawing area
///
/// # Returns
///
/// A `PlacedImage` whose scaled size fits the viewport on both axes and
/// matches it exactly on the binding axis.
///
/// # Errors
///
/// Returns `LayoutError::InvalidImageSize` if either image dimension is zero.
pub fn compute_placement(
    image_width: u32,
    image_height: u32,
    viewport: Viewport,
) -> Result<PlacedImage, LayoutError> {
    if image_width == 0 || image_height == 0 {
        return Err(LayoutError::InvalidImageSize {
            width: image_width,
            height: image_height,
        });
    }

    let img_w = image_width as f64;
    let img_h = image_height as f64;
    let view_w = viewport.width as f64;
    let view_h = viewport.height as f64;

    let width_scale = view_w / img_w;
    let (scale, width, height) = if width_scale * img_h > view_h {
        // Height is the binding axis
        let scale = view_h / img_h;
        let width = ((img_w * scale) as f32).min(viewport.width);
        (scale, width, viewport.height)
    } else {
        let height = ((img_h * width_scale) as f32).min(viewport.height);
        (width_scale, viewport.width, height)
    };

    let offset_x = ((viewport.width - width) / 2.0).max(0.0);
    let offset_y = ((viewport.height - height) / 2.0).max(0.0);

    Ok(PlacedImage {
        source_width: image_width,
        source_height: image_height,
        scale,
        width,
        height,
        offset_x,
        offset_y,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
