//! Drawing the crop editor.
//!
//! `overlay` turns the crop rectangle into strokes; `frame` rasterizes the
//! placed image and those strokes into a viewport-sized RGB frame.

mod frame;
mod overlay;

pub use frame::{render_frame, render_layout};
pub use overlay::{Overlay, Segment};
