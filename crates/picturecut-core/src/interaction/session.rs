//! The crop editing session.
//!
//! A session owns the decoded source image and goes through two phases:
//!
//! - **Uninitialized**: the image is known but the viewport is not (the
//!   host has not reported its chrome height yet). Pointer events and
//!   commits are ignored.
//! - **Ready**: a layout pass has placed the image, built the display copy
//!   and reset the crop rectangle to the full placed image.
//!
//! While ready, pointer input drives a small state machine:
//!
//! ```text
//!   Idle --down(region != None)--> Dragging(region)
//!   Dragging --move--> Dragging        (rule applied, redraw)
//!   Dragging --up / cancel--> Idle     (applied movement is kept)
//! ```
//!
//! Pointer handling never allocates or blocks.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EditorConfig;
use crate::decode::{decode_image, resize, DecodeError, DecodedImage};
use crate::geometry::{compute_placement, CropRect, LayoutError, PlacedImage, Point, Viewport};
use crate::transform::{crop_to_source, CropOutput};

use super::{classify_with_handle, resize as resize_rect, translate, HandleRegion, Limits};

/// Errors that prevent a session from starting or laying out.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The image could not be decoded or has no pixels.
    #[error("No image: {0}")]
    InvalidImage(#[from] DecodeError),

    /// The layout pass rejected its inputs.
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}

/// What a pointer event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing changed: no layout yet, no active drag, a degenerate
    /// pointer-down, or non-finite coordinates.
    Ignored,
    /// A drag started on the given region.
    DragStarted(HandleRegion),
    /// The crop rectangle was updated and the frame should be redrawn.
    Redraw,
    /// The active drag ended.
    DragEnded,
}

impl PointerOutcome {
    pub fn needs_redraw(self) -> bool {
        self == PointerOutcome::Redraw
    }
}

/// State captured on pointer-down for the lifetime of one drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The region that was hit.
    pub region: HandleRegion,
    /// Last pointer position, tracked only for center drags.
    pub last_pointer: Option<Point>,
    /// Width and height at pointer-down, kept only for center drags.
    pub size: Option<(f32, f32)>,
}

impl DragSession {
    pub fn begin(region: HandleRegion, pointer: Point, rect: &CropRect) -> Self {
        let center = region == HandleRegion::Center;
        Self {
            region,
            last_pointer: center.then_some(pointer),
            size: center.then(|| (rect.width(), rect.height())),
        }
    }

    /// Apply one pointer move and return the next rectangle.
    ///
    /// Center drags move by the delta since the previous move and rebuild
    /// the rectangle from the size captured at pointer-down; every other
    /// region runs its resize rule against the current rectangle.
    pub fn apply(&mut self, pointer: Point, rect: &CropRect, limits: &Limits) -> CropRect {
        match (self.region, self.last_pointer, self.size) {
            (HandleRegion::Center, Some(last), Some(size)) => {
                let (dx, dy) = (pointer.x - last.x, pointer.y - last.y);
                let next = translate(rect, dx, dy, size, &limits.bounds);
                self.last_pointer = Some(pointer);
                next
            }
            (region, _, _) => resize_rect(region, pointer, rect, limits),
        }
    }
}

/// Pointer state of a ready session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Everything computed by one layout pass, plus the crop state it seeds.
#[derive(Debug, Clone)]
pub struct Layout {
    viewport: Viewport,
    placed: PlacedImage,
    display: DecodedImage,
    limits: Limits,
    crop: CropRect,
    drag: DragState,
    committed: bool,
}

impl Layout {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn placed(&self) -> &PlacedImage {
        &self.placed
    }

    /// The source image rescaled to the placed size.
    pub fn display(&self) -> &DecodedImage {
        &self.display
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn crop(&self) -> CropRect {
        self.crop
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// True once a commit has been requested for this layout.
    pub fn is_committed(&self) -> bool {
        self.committed
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Uninitialized,
    Ready(Box<Layout>),
}

/// A crop editing session over one source image.
#[derive(Debug, Clone)]
pub struct CropSession {
    source: DecodedImage,
    config: EditorConfig,
    phase: Phase,
}

impl CropSession {
    /// Start a session for an already-decoded image.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidImage` if the image has no pixels or
    /// its buffer does not match its dimensions.
    pub fn new(source: DecodedImage, config: EditorConfig) -> Result<Self, SessionError> {
        source.validate()?;
        debug!("Crop session created for {}x{} image", source.width, source.height);
        Ok(Self {
            source,
            config: config.sanitized(),
            phase: Phase::Uninitialized,
        })
    }

    /// Decode `bytes` and start a session for the result.
    pub fn from_bytes(bytes: &[u8], config: EditorConfig) -> Result<Self, SessionError> {
        let source = decode_image(bytes).inspect_err(|e| warn!("Failed to decode image: {}", e))?;
        Self::new(source, config)
    }

    pub fn source(&self) -> &DecodedImage {
        &self.source
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    /// The current layout, once the first layout pass has completed.
    pub fn layout(&self) -> Option<&Layout> {
        match &self.phase {
            Phase::Ready(layout) => Some(&**layout),
            Phase::Uninitialized => None,
        }
    }

    pub fn crop_rect(&self) -> Option<CropRect> {
        self.layout().map(Layout::crop)
    }

    pub fn placed(&self) -> Option<&PlacedImage> {
        self.layout().map(Layout::placed)
    }

    /// The region being dragged, if a drag is active.
    pub fn active_region(&self) -> Option<HandleRegion> {
        match self.layout()?.drag {
            DragState::Dragging(drag) => Some(drag.region),
            DragState::Idle => None,
        }
    }

    /// Run a layout pass for `viewport`.
    ///
    /// Places the image, builds the display copy and resets the crop
    /// rectangle to the full placed image. Any active drag ends and the
    /// committed flag is cleared. On error the previous phase is kept.
    pub fn layout_viewport(&mut self, viewport: Viewport) -> Result<PlacedImage, SessionError> {
        let placed = compute_placement(self.source.width, self.source.height, viewport)
            .inspect_err(|e| warn!("Layout rejected: {}", e))?;

        let (display_w, display_h) = placed.display_size();
        let display = resize(&self.source, display_w, display_h, self.config.resize_filter)?;

        let bounds = placed.bounds();
        info!(
            "Layout: viewport {}x{}, scale {:.4}, placed {}x{} at ({}, {})",
            viewport.width,
            viewport.height,
            placed.scale,
            placed.width,
            placed.height,
            placed.offset_x,
            placed.offset_y
        );

        self.phase = Phase::Ready(Box::new(Layout {
            viewport,
            placed,
            display,
            limits: Limits::new(bounds, self.config.min_size),
            crop: bounds,
            drag: DragState::Idle,
            committed: false,
        }));
        Ok(placed)
    }

    /// Run a layout pass from screen metrics and the reserved chrome heights.
    pub fn layout_screen(
        &mut self,
        screen_width: f32,
        screen_height: f32,
        status_bar_height: f32,
        title_bar_height: f32,
    ) -> Result<PlacedImage, SessionError> {
        let viewport =
            Viewport::from_screen(screen_width, screen_height, status_bar_height, title_bar_height)?;
        self.layout_viewport(viewport)
    }

    fn ready_mut(&mut self) -> Option<&mut Layout> {
        match &mut self.phase {
            Phase::Ready(layout) => Some(&mut **layout),
            Phase::Uninitialized => None,
        }
    }

    /// Dispatch a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerOutcome {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up(p) => self.pointer_up(p),
            PointerEvent::Cancel => self.pointer_cancel(),
        }
    }

    /// Classify `point` and start a drag on the region it hits.
    pub fn pointer_down(&mut self, point: Point) -> PointerOutcome {
        let handle = self.config.handle_size;
        let Some(layout) = self.ready_mut() else {
            debug!("Pointer down before layout ignored");
            return PointerOutcome::Ignored;
        };

        let region = classify_with_handle(point, &layout.crop, handle);
        if !region.is_interactive() {
            debug!("Pointer down at ({}, {}) outside the crop handles", point.x, point.y);
            layout.drag = DragState::Idle;
            return PointerOutcome::Ignored;
        }

        layout.drag = DragState::Dragging(DragSession::begin(region, point, &layout.crop));
        PointerOutcome::DragStarted(region)
    }

    /// Apply the active drag's rule for a pointer move.
    pub fn pointer_move(&mut self, point: Point) -> PointerOutcome {
        if !(point.x.is_finite() && point.y.is_finite()) {
            return PointerOutcome::Ignored;
        }
        let Some(layout) = self.ready_mut() else {
            return PointerOutcome::Ignored;
        };
        let DragState::Dragging(drag) = &mut layout.drag else {
            return PointerOutcome::Ignored;
        };

        layout.crop = drag.apply(point, &layout.crop, &layout.limits);
        PointerOutcome::Redraw
    }

    /// End the active drag.
    pub fn pointer_up(&mut self, _point: Point) -> PointerOutcome {
        self.end_drag()
    }

    /// End the active drag; movement already applied is kept.
    pub fn pointer_cancel(&mut self) -> PointerOutcome {
        self.end_drag()
    }

    fn end_drag(&mut self) -> PointerOutcome {
        match self.ready_mut() {
            Some(layout) if layout.drag != DragState::Idle => {
                layout.drag = DragState::Idle;
                PointerOutcome::DragEnded
            }
            _ => PointerOutcome::Ignored,
        }
    }

    /// Produce the cropped region of the source image.
    ///
    /// `flag` is the host's opaque commit trigger: zero means "not
    /// requested" and is ignored, as is a commit before the first layout.
    /// Committing does not change the crop rectangle, so repeated commits
    /// return identical output.
    pub fn commit(&mut self, flag: i32) -> Option<CropOutput> {
        if flag == 0 {
            return None;
        }
        let Some(layout) = self.ready_mut() else {
            debug!("Commit before layout ignored");
            return None;
        };
        layout.committed = true;
        let (crop, placed) = (layout.crop, layout.placed);

        let output = crop_to_source(&self.source, &crop, &placed);
        info!(
            "Committed crop {}x{} at ({}, {})",
            output.rect.width, output.rect.height, output.rect.x, output.rect.y
        );
        Some(output)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn event_strategy() -> impl Strategy<Value = PointerEvent> {
        let point = (-200.0f32..1400.0, -200.0f32..1900.0).prop_map(|(x, y)| Point::new(x, y));
        prop_oneof![
            1 => point.clone().prop_map(PointerEvent::Down),
            6 => point.clone().prop_map(PointerEvent::Move),
            1 => point.prop_map(PointerEvent::Up),
            1 => Just(PointerEvent::Cancel),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: arbitrary pointer streams keep the crop rectangle valid.
        #[test]
        fn prop_pointer_stream_keeps_invariants(
            (image_w, image_h) in (100u32..=1200, 100u32..=1200),
            events in prop::collection::vec(event_strategy(), 1..64),
        ) {
            let image = DecodedImage::filled(image_w, image_h, [1, 2, 3]);
            let config = EditorConfig { resize_filter: crate::decode::FilterType::Nearest, ..Default::default() };
            let mut session = CropSession::new(image, config).unwrap();
            session.layout_viewport(Viewport::new(1000.0, 1600.0).unwrap()).unwrap();

            for event in events {
                session.handle_pointer(event);
                let layout = session.layout().unwrap();
                let crop = layout.crop();
                prop_assert!(layout.limits().admits(&crop), "{:?}", crop);
                prop_assert!(crop.width() >= layout.limits().min_width);
                prop_assert!(crop.height() >= layout.limits().min_height);
            }
        }

        /// Property: two commits without pointer input are identical.
        #[test]
        fn prop_commit_idempotent(
            moves in prop::collection::vec((0.0f32..1000.0, 0.0f32..1600.0), 0..8),
        ) {
            let image = DecodedImage::filled(100, 200, [9, 8, 7]);
            let config = EditorConfig { resize_filter: crate::decode::FilterType::Nearest, ..Default::default() };
            let mut session = CropSession::new(image, config).unwrap();
            session.layout_viewport(Viewport::new(1000.0, 1600.0).unwrap()).unwrap();
            session.pointer_down(Point::new(890.0, 1590.0));
            for (x, y) in moves {
                session.pointer_move(Point::new(x, y));
            }
            session.pointer_up(Point::new(0.0, 0.0));

            let first = session.commit(1);
            let second = session.commit(2);
            prop_assert!(first.is_some());
            prop_assert_eq!(first, second);
        }
    }
}
