//! Picturecut WASM - WebAssembly bindings for the Picturecut crop editor
//!
//! This crate exposes picturecut-core to JavaScript/TypeScript hosts.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for images and crop results
//! - `decode` - Image decoding bindings
//! - `session` - The interactive crop session
//! - `logger` - Routes core logging to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropSession } from '@picturecut/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const session = new JsCropSession(bytes, innerWidth, innerHeight, 0, { min_size: 300 });
//! session.set_chrome_height(header.offsetHeight);
//! const frame = session.render();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod logger;
mod session;
mod types;

pub use decode::decode_image;
pub use session::JsCropSession;
pub use types::{JsCropOutput, JsDecodedImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init(log::LevelFilter::Info);
}

/// Change how much of the core's logging reaches the console.
///
/// 0 = off, 1 = error, 2 = warn, 3 = info, 4 = debug, anything else = trace.
#[wasm_bindgen]
pub fn set_log_level(level: u8) {
    logger::init(level_from_u8(level));
}

fn level_from_u8(level: u8) -> log::LevelFilter {
    match level {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
