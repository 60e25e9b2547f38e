//! Movement rules applied to the crop rectangle on every pointer move.
//!
//! Both functions here are pure: they take the current rectangle and return
//! the next one. Each edge rule is evaluated against the current frame's
//! rectangle, so an edge follows the pointer through the valid range and
//! stops exactly at its limits.
//!
//! # Edge rule
//!
//! For the moving edge, with `bound` the matching side of the placed image
//! and `limit` the position `min_size` away from the opposite edge:
//! 1. Pointer beyond `bound`: the edge snaps to `bound`
//! 2. Pointer past `limit`: the edge snaps to `limit`
//! 3. Otherwise the edge takes the pointer coordinate
//!
//! Corners apply the horizontal and vertical edge rules independently.
//!
//! Edge positions are computed in f32. Wherever rounding would leave the
//! rectangle a fraction of a unit short of its minimum or of the extent it
//! is moved with, the edge is stepped outward one ulp at a time until the
//! size holds, never past the image bound.
//!
//! Callers must pass finite pointer coordinates.

use crate::geometry::{CropRect, Point};

use super::HandleRegion;

/// Constraints for a crop rectangle within one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// The placed image; the rectangle never leaves it.
    pub bounds: CropRect,
    /// Minimum rectangle width.
    pub min_width: f32,
    /// Minimum rectangle height.
    pub min_height: f32,
}

impl Limits {
    /// Build limits for a placed image.
    ///
    /// The minimum on each axis is capped at the image extent so the
    /// constraints stay satisfiable for images placed smaller than
    /// `min_size`.
    pub fn new(bounds: CropRect, min_size: f32) -> Self {
        Self {
            bounds,
            min_width: min_size.min(bounds.width()),
            min_height: min_size.min(bounds.height()),
        }
    }

    /// True when `rect` lies inside the image and meets both minimums.
    pub fn admits(&self, rect: &CropRect) -> bool {
        self.bounds.encloses(rect)
            && rect.width() >= self.min_width
            && rect.height() >= self.min_height
    }
}

/// Next representable f32 above `x`.
fn next_up(x: f32) -> f32 {
    if x.is_nan() || x == f32::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f32::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f32::from_bits(bits + 1)
    } else {
        f32::from_bits(bits - 1)
    }
}

/// Next representable f32 below `x`.
fn next_down(x: f32) -> f32 {
    -next_up(-x)
}

/// New position of a left or top edge.
#[inline]
fn low_edge(pointer: f32, bound: f32, opposite: f32, min: f32) -> f32 {
    let mut limit = opposite - min;
    while opposite - limit < min && limit > bound {
        limit = next_down(limit);
    }
    if pointer >= limit {
        limit.max(bound)
    } else if pointer <= bound {
        bound
    } else {
        pointer
    }
}

/// New position of a right or bottom edge.
#[inline]
fn high_edge(pointer: f32, bound: f32, opposite: f32, min: f32) -> f32 {
    let mut limit = opposite + min;
    while limit - opposite < min && limit < bound {
        limit = next_up(limit);
    }
    if pointer <= limit {
        limit.min(bound)
    } else if pointer >= bound {
        bound
    } else {
        pointer
    }
}

/// Apply the resize rule for `region` to `rect`.
///
/// `Center` and `None` return the rectangle unchanged; moving the whole
/// rectangle is handled by [`translate`].
pub fn resize(region: HandleRegion, pointer: Point, rect: &CropRect, limits: &Limits) -> CropRect {
    let b = &limits.bounds;
    let mut next = *rect;

    let move_left = |next: &mut CropRect| {
        next.left = low_edge(pointer.x, b.left, rect.right, limits.min_width);
    };
    let move_right = |next: &mut CropRect| {
        next.right = high_edge(pointer.x, b.right, rect.left, limits.min_width);
    };
    let move_top = |next: &mut CropRect| {
        next.top = low_edge(pointer.y, b.top, rect.bottom, limits.min_height);
    };
    let move_bottom = |next: &mut CropRect| {
        next.bottom = high_edge(pointer.y, b.bottom, rect.top, limits.min_height);
    };

    match region {
        HandleRegion::Left => move_left(&mut next),
        HandleRegion::Right => move_right(&mut next),
        HandleRegion::Top => move_top(&mut next),
        HandleRegion::Bottom => move_bottom(&mut next),
        HandleRegion::TopLeft => {
            move_left(&mut next);
            move_top(&mut next);
        }
        HandleRegion::TopRight => {
            move_right(&mut next);
            move_top(&mut next);
        }
        HandleRegion::BottomRight => {
            move_right(&mut next);
            move_bottom(&mut next);
        }
        HandleRegion::BottomLeft => {
            move_left(&mut next);
            move_bottom(&mut next);
        }
        HandleRegion::Center | HandleRegion::None => {}
    }

    next
}

/// Place a span of `extent` starting at `low` inside `[bound_low, bound_high]`.
///
/// A span that would cross a bound is placed flush against it. The span is
/// never shorter than `extent` as long as `extent` fits within the bounds.
fn place_span(low: f32, extent: f32, bound_low: f32, bound_high: f32) -> (f32, f32) {
    if low <= bound_low {
        let mut high = (bound_low + extent).min(bound_high);
        while high - bound_low < extent && high < bound_high {
            high = next_up(high);
        }
        (bound_low, high)
    } else if low + extent >= bound_high {
        let mut low = (bound_high - extent).max(bound_low);
        while bound_high - low < extent && low > bound_low {
            low = next_down(low);
        }
        (low, bound_high)
    } else {
        let mut high = low + extent;
        while high - low < extent && high < bound_high {
            high = next_up(high);
        }
        (low, high)
    }
}

/// Move the whole rectangle by `(dx, dy)`, rebuilding it from `size`.
///
/// On each axis the rectangle is pushed flush against an image bound
/// instead of crossing it. A drag passes the size captured when it started,
/// so rounding in successive moves cannot accumulate into the extent.
pub fn translate(
    rect: &CropRect,
    dx: f32,
    dy: f32,
    size: (f32, f32),
    bounds: &CropRect,
) -> CropRect {
    let (left, right) = place_span(rect.left + dx, size.0, bounds.left, bounds.right);
    let (top, bottom) = place_span(rect.top + dy, size.1, bounds.top, bounds.bottom);
    CropRect::new(left, top, right, bottom)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
