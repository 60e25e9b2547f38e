//! Hit-testing pointer positions against the crop overlay.
//!
//! The overlay has nine interactive zones: a square at each corner, a band
//! along each edge between the corner squares, and the interior. Corners are
//! tested before edges so points in the overlap resolve to the corner.
//!
//! ```text
//!   +----+----------------+----+
//!   | TL |      Top       | TR |
//!   +----+----------------+----+
//!   |    |                |    |
//!   | L  |     Center     |  R |
//!   |    |                |    |
//!   +----+----------------+----+
//!   | BL |     Bottom     | BR |
//!   +----+----------------+----+
//! ```

use serde::{Deserialize, Serialize};

use crate::config::HANDLE_SIZE;
use crate::geometry::{CropRect, Point};

/// Classification of a pointer position relative to the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandleRegion {
    /// Outside every interactive zone.
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Left,
    Top,
    Right,
    Bottom,
    /// The interior, used to move the whole rectangle.
    Center,
}

impl HandleRegion {
    /// True for every region that starts a drag.
    pub fn is_interactive(self) -> bool {
        self != HandleRegion::None
    }
}

/// Classify a point using the default handle thickness.
pub fn classify(point: Point, rect: &CropRect) -> HandleRegion {
    classify_with_handle(point, rect, HANDLE_SIZE)
}

/// Classify a point against the nine zones of `rect`.
///
/// All zone boundaries are inclusive. Tests run in precedence order:
/// corners, then edges, then the interior.
pub fn classify_with_handle(point: Point, rect: &CropRect, handle: f32) -> HandleRegion {
    if !rect.contains(point) {
        return HandleRegion::None;
    }
    let Point { x, y } = point;

    let in_left = x >= rect.left && x <= rect.left + handle;
    let in_right = x >= rect.right - handle && x <= rect.right;
    let in_top = y >= rect.top && y <= rect.top + handle;
    let in_bottom = y >= rect.bottom - handle && y <= rect.bottom;
    let in_middle_x = x >= rect.left + handle && x <= rect.right - handle;
    let in_middle_y = y >= rect.top + handle && y <= rect.bottom - handle;

    if in_left && in_top {
        HandleRegion::TopLeft
    } else if in_left && in_bottom {
        HandleRegion::BottomLeft
    } else if in_right && in_top {
        HandleRegion::TopRight
    } else if in_right && in_bottom {
        HandleRegion::BottomRight
    } else if in_middle_x && in_top {
        HandleRegion::Top
    } else if in_middle_x && in_bottom {
        HandleRegion::Bottom
    } else if in_left && in_middle_y {
        HandleRegion::Left
    } else if in_right && in_middle_y {
        HandleRegion::Right
    } else if in_middle_x && in_middle_y {
        HandleRegion::Center
    } else {
        HandleRegion::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> CropRect {
        CropRect::new(100.0, 0.0, 900.0, 1600.0)
    }

    #[test]
    fn test_corners() {
        let r = rect();
        assert_eq!(classify(Point::new(100.0, 0.0), &r), HandleRegion::TopLeft);
        assert_eq!(classify(Point::new(880.0, 20.0), &r), HandleRegion::TopRight);
        assert_eq!(classify(Point::new(900.0, 1600.0), &r), HandleRegion::BottomRight);
        assert_eq!(classify(Point::new(130.0, 1580.0), &r), HandleRegion::BottomLeft);
    }

    #[test]
    fn test_edges() {
        let r = rect();
        assert_eq!(classify(Point::new(500.0, 10.0), &r), HandleRegion::Top);
        assert_eq!(classify(Point::new(500.0, 1590.0), &r), HandleRegion::Bottom);
        assert_eq!(classify(Point::new(110.0, 800.0), &r), HandleRegion::Left);
        assert_eq!(classify(Point::new(895.0, 800.0), &r), HandleRegion::Right);
    }

    #[test]
    fn test_center() {
        let r = rect();
        assert_eq!(classify(Point::new(500.0, 800.0), &r), HandleRegion::Center);
        assert_eq!(classify(Point::new(150.0, 50.0), &r), HandleRegion::TopLeft);
        assert_eq!(classify(Point::new(151.0, 51.0), &r), HandleRegion::Center);
    }

    #[test]
    fn test_outside_is_none() {
        let r = rect();
        assert_eq!(classify(Point::new(50.0, 800.0), &r), HandleRegion::None);
        assert_eq!(classify(Point::new(500.0, 1601.0), &r), HandleRegion::None);
        assert_eq!(classify(Point::new(f32::NAN, 800.0), &r), HandleRegion::None);
    }

    #[test]
    fn test_corner_wins_on_shared_boundary() {
        // (150, 25) lies on the corner square edge and the top band edge
        let r = rect();
        assert_eq!(classify(Point::new(150.0, 25.0), &r), HandleRegion::TopLeft);
        assert_eq!(classify(Point::new(850.0, 1575.0), &r), HandleRegion::BottomRight);
    }

    #[test]
    fn test_custom_handle_size() {
        let r = CropRect::new(0.0, 0.0, 300.0, 300.0);
        let p = Point::new(80.0, 80.0);
        assert_eq!(classify_with_handle(p, &r, 50.0), HandleRegion::Center);
        assert_eq!(classify_with_handle(p, &r, 100.0), HandleRegion::TopLeft);
    }

    #[test]
    fn test_region_kinds() {
        assert!(HandleRegion::Center.is_interactive());
        assert!(!HandleRegion::None.is_interactive());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
