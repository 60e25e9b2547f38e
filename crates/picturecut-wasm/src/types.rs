//! WASM-compatible wrapper types for image data and crop results.
//!
//! These wrap the core Picturecut types and handle the conversion between
//! Rust and JavaScript data representations.

use picturecut_core::decode::DecodedImage;
use picturecut_core::transform::CropOutput;
use picturecut_core::EditorConfig;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// The pixel data is stored in WASM memory. `pixels()` copies it into a
/// `Uint8Array`, so keep images in WASM memory until the host needs them.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create an image from dimensions and RGB pixel data (3 bytes per pixel,
    /// row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as a `Uint8Array` copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns the pixels expanded to RGBA, ready for `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for rgb in self.pixels.chunks_exact(3) {
            out.extend_from_slice(rgb);
            out.push(255);
        }
        out
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core image. Clones the pixel data.
    ///
    /// The buffer length is not checked here; sessions validate it.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// The result of a commit: where the crop landed in the source image and
/// the cropped pixels.
#[wasm_bindgen]
pub struct JsCropOutput {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    image: DecodedImage,
}

#[wasm_bindgen]
impl JsCropOutput {
    /// Left edge of the crop in source pixels.
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Top edge of the crop in source pixels.
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The cropped image. Copies the pixels.
    pub fn image(&self) -> JsDecodedImage {
        JsDecodedImage::from_decoded(self.image.clone())
    }
}

impl JsCropOutput {
    pub(crate) fn from_output(output: CropOutput) -> Self {
        let CropOutput { rect, image } = output;
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            image,
        }
    }
}

/// Read an editor config from a JS object.
///
/// `undefined` and `null` give the default config. Missing fields take their
/// defaults.
pub(crate) fn config_from_js(value: JsValue) -> Result<EditorConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EditorConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use picturecut_core::transform::PixelRect;

    #[test]
    fn test_js_decoded_image_creation() {
        let img = JsDecodedImage::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_to_rgba() {
        let img = JsDecodedImage::new(2, 1, vec![255, 128, 64, 32, 16, 8]);
        assert_eq!(img.to_rgba(), vec![255, 128, 64, 255, 32, 16, 8, 255]);
    }

    #[test]
    fn test_decoded_conversions() {
        let decoded = DecodedImage::filled(20, 10, [1, 2, 3]);
        let js_img = JsDecodedImage::from_decoded(decoded.clone());
        assert_eq!(js_img.byte_length(), 600);
        assert_eq!(js_img.to_decoded(), decoded);
    }

    #[test]
    fn test_crop_output_fields() {
        let output = CropOutput {
            rect: PixelRect::new(5, 6, 7, 8),
            image: DecodedImage::filled(7, 8, [9, 9, 9]),
        };
        let js = JsCropOutput::from_output(output);
        assert_eq!((js.x(), js.y(), js.width(), js.height()), (5, 6, 7, 8));
        let image = js.image();
        assert_eq!((image.width(), image.height()), (7, 8));
    }
}
