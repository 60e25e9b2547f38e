//! Editor tunables.
//!
//! Every field carries a serde default so hosts can pass a partial object
//! (or nothing at all) and get the stock behavior.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;

/// Minimum width and height of the crop rectangle, in viewport units.
pub const MIN_SIZE: f32 = 300.0;

/// Thickness of the corner squares and edge bands used for hit-testing.
pub const HANDLE_SIZE: f32 = 50.0;

/// Settings for a crop editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum crop width/height in viewport units.
    pub min_size: f32,
    /// Corner square size and edge band thickness for hit-testing.
    pub handle_size: f32,
    /// Length of each of the two strokes drawn at a corner.
    pub corner_accent_length: f32,
    /// Length of the stroke centered on each edge midpoint.
    pub edge_accent_length: f32,
    /// Stroke width of the 3x3 grid lines.
    pub grid_stroke: f32,
    /// Stroke width of the corner and edge accents.
    pub accent_stroke: f32,
    /// RGB color of the overlay strokes.
    pub overlay_color: [u8; 3],
    /// RGB color painted outside the placed image.
    pub background_color: [u8; 3],
    /// Filter used when building the display copy.
    pub resize_filter: FilterType,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            handle_size: HANDLE_SIZE,
            corner_accent_length: 50.0,
            edge_accent_length: 50.0,
            grid_stroke: 1.0,
            accent_stroke: 4.0,
            overlay_color: [255, 255, 255],
            background_color: [0, 0, 0],
            resize_filter: FilterType::Bilinear,
        }
    }
}

impl EditorConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with non-finite or non-positive sizes replaced by defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        self.min_size = fix(self.min_size, defaults.min_size);
        self.handle_size = fix(self.handle_size, defaults.handle_size);
        self.corner_accent_length = fix(self.corner_accent_length, defaults.corner_accent_length);
        self.edge_accent_length = fix(self.edge_accent_length, defaults.edge_accent_length);
        self.grid_stroke = fix(self.grid_stroke, defaults.grid_stroke);
        self.accent_stroke = fix(self.accent_stroke, defaults.accent_stroke);
        self
    }
}
