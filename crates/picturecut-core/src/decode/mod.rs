//! Image input for the crop editor.
//!
//! This module provides:
//! - The `DecodedImage` pixel container shared by every other module
//! - Decoding of encoded bytes (JPEG, PNG) into RGB pixel data
//! - Resizing used by the layout pass to build the display copy
//!
//! A decode failure is the "no image" condition: the host gets a
//! `DecodeError` and no crop session is started.

mod reader;
mod resize;
mod types;

pub use reader::decode_image;
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType};
