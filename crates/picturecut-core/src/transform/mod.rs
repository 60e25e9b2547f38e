//! Producing the cropped output.
//!
//! The crop rectangle the user edits is in viewport coordinates over the
//! scaled display copy. Committing maps it back through the placement to
//! source-image pixels and cuts that region out of the full-resolution
//! source, so the output is never degraded by the display scaling.

mod crop;

pub use crop::{apply_crop, crop_to_source, source_rect, CropOutput, PixelRect};
