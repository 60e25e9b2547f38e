//! Geometry and layout.
//!
//! # Coordinate System
//!
//! - All interactive geometry is in viewport coordinates (f32)
//! - Origin is the top-left corner of the viewport
//! - Source pixel coordinates only appear at commit time, see
//!   [`crate::transform`]

mod placement;
mod rect;

pub use placement::{compute_placement, LayoutError, PlacedImage, Viewport};
pub use rect::{CropRect, Point};
