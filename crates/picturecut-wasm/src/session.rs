//! Crop session WASM bindings.
//!
//! The host creates a session from the image and its screen metrics, then
//! reports the title bar height once its chrome is measured. Pointer
//! methods return `true` when the frame needs redrawing.
//!
//! # Example
//!
//! ```typescript
//! import { JsCropSession } from '@picturecut/wasm';
//!
//! const session = new JsCropSession(bytes, screen.width, screen.height, 24, undefined);
//! session.set_chrome_height(titleBar.offsetHeight);
//!
//! canvas.onpointermove = (e) => {
//!   if (session.pointer_move(e.offsetX, e.offsetY)) draw(session.render());
//! };
//!
//! const output = session.commit(1);
//! ```

use crate::types::{config_from_js, JsCropOutput, JsDecodedImage};
use picturecut_core::render::render_frame;
use picturecut_core::{CropSession, Point};
use wasm_bindgen::prelude::*;

/// A crop editing session for JavaScript.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession,
    screen_width: f32,
    screen_height: f32,
    status_bar_height: f32,
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
impl JsCropSession {
    /// Decode `bytes` and start a session.
    ///
    /// `config` is an optional partial `EditorConfig` object.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be decoded or the config is
    /// malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(
        bytes: &[u8],
        screen_width: f32,
        screen_height: f32,
        status_bar_height: f32,
        config: JsValue,
    ) -> Result<JsCropSession, JsValue> {
        let config = config_from_js(config)?;
        let inner = CropSession::from_bytes(bytes, config).map_err(to_js_error)?;
        Ok(Self::from_parts(inner, screen_width, screen_height, status_bar_height))
    }

    /// Start a session for an already-decoded image.
    pub fn from_image(
        image: &JsDecodedImage,
        screen_width: f32,
        screen_height: f32,
        status_bar_height: f32,
        config: JsValue,
    ) -> Result<JsCropSession, JsValue> {
        let config = config_from_js(config)?;
        let inner = CropSession::new(image.to_decoded(), config).map_err(to_js_error)?;
        Ok(Self::from_parts(inner, screen_width, screen_height, status_bar_height))
    }

    /// Report the title bar height and lay the image out.
    ///
    /// May be called again when the chrome changes; each call resets the
    /// crop rectangle to the full placed image.
    pub fn set_chrome_height(&mut self, title_bar_height: f32) -> Result<(), JsValue> {
        self.inner
            .layout_screen(
                self.screen_width,
                self.screen_height,
                self.status_bar_height,
                title_bar_height,
            )
            .map(|_| ())
            .map_err(to_js_error)
    }

    /// Update the screen metrics, e.g. after a rotation. Takes effect on the
    /// next `set_chrome_height`.
    pub fn set_screen(&mut self, screen_width: f32, screen_height: f32, status_bar_height: f32) {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
        self.status_bar_height = status_bar_height;
    }

    #[wasm_bindgen(getter)]
    pub fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.inner.pointer_down(Point::new(x, y)).needs_redraw()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.inner.pointer_move(Point::new(x, y)).needs_redraw()
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.inner.pointer_up(Point::new(x, y)).needs_redraw()
    }

    pub fn pointer_cancel(&mut self) -> bool {
        self.inner.pointer_cancel().needs_redraw()
    }

    /// Commit the crop. A zero `flag` or a session without a layout returns
    /// `undefined`.
    pub fn commit(&mut self, flag: i32) -> Option<JsCropOutput> {
        self.inner.commit(flag).map(JsCropOutput::from_output)
    }

    /// Current crop rectangle in viewport coordinates, or `null` before layout.
    pub fn crop_rect(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.crop_rect()).map_err(to_js_error)
    }

    /// Current placement of the image, or `null` before layout.
    pub fn placed(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.placed()).map_err(to_js_error)
    }

    /// Draw the current frame, or `undefined` before layout.
    pub fn render(&self) -> Option<JsDecodedImage> {
        render_frame(&self.inner).map(JsDecodedImage::from_decoded)
    }
}

impl JsCropSession {
    fn from_parts(
        inner: CropSession,
        screen_width: f32,
        screen_height: f32,
        status_bar_height: f32,
    ) -> Self {
        Self {
            inner,
            screen_width,
            screen_height,
            status_bar_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picturecut_core::{DecodedImage, EditorConfig};

    fn session() -> JsCropSession {
        let inner =
            CropSession::new(DecodedImage::filled(800, 600, [50, 60, 70]), EditorConfig::default())
                .unwrap();
        // 800x700 screen with 40 status bar; a 60 title bar leaves 800x600
        JsCropSession::from_parts(inner, 800.0, 700.0, 40.0)
    }

    #[test]
    fn test_pointer_before_layout_is_ignored() {
        let mut s = session();
        assert!(!s.is_ready());
        assert!(!s.pointer_down(10.0, 10.0));
        assert!(!s.pointer_move(20.0, 20.0));
        assert!(s.commit(1).is_none());
        assert!(s.render().is_none());
    }

    #[test]
    fn test_drag_and_commit() {
        let mut s = session();
        s.set_chrome_height(60.0).unwrap();
        assert!(s.is_ready());

        // Drag the top-left corner in by 100 in both directions
        assert!(!s.pointer_down(5.0, 5.0));
        assert!(s.pointer_move(100.0, 100.0));
        assert!(!s.pointer_up(100.0, 100.0));

        let frame = s.render().unwrap();
        assert_eq!((frame.width(), frame.height()), (800, 600));

        assert!(s.commit(0).is_none());
        let output = s.commit(1).unwrap();
        assert_eq!((output.x(), output.y()), (100, 100));
        assert_eq!((output.width(), output.height()), (700, 500));
    }

    #[test]
    fn test_relayout_resets_crop() {
        let mut s = session();
        s.set_chrome_height(60.0).unwrap();
        s.pointer_down(795.0, 300.0);
        s.pointer_move(500.0, 300.0);
        s.pointer_up(500.0, 300.0);

        s.set_screen(1600.0, 1300.0, 40.0);
        s.set_chrome_height(60.0).unwrap();
        let output = s.commit(1).unwrap();
        assert_eq!((output.width(), output.height()), (800, 600));
    }
}
