//! Pointer-driven editing of the crop rectangle.
//!
//! - `handle` - classifies a pointer position into one of nine zones
//! - `rules` - pure resize and translate rules with image-bound and
//!   minimum-size clamps
//! - `session` - the editing session: layout phases, drag state machine
//!   and commit
//!
//! Clamping is the designed behavior of every rule and is never reported
//! as an error.

mod handle;
mod rules;
mod session;

pub use handle::{classify, classify_with_handle, HandleRegion};
pub use rules::{resize, translate, Limits};
pub use session::{
    CropSession, DragSession, DragState, Layout, PointerEvent, PointerOutcome, SessionError,
};
