//! Picturecut Core - Crop rectangle editing engine
//!
//! This crate provides the headless core of the Picturecut crop editor:
//! fitting an image into a viewport, classifying pointer positions into
//! handle regions, resizing and moving the crop rectangle under image-bound
//! and minimum-size clamps, drawing the overlay, and mapping the final
//! rectangle back to source pixels.
//!
//! The typical flow:
//!
//! 1. [`CropSession::from_bytes`] decodes the image.
//! 2. [`CropSession::layout_screen`] places it once the chrome height is known.
//! 3. Pointer events go through [`CropSession::handle_pointer`].
//! 4. [`render_frame`] draws the current state.
//! 5. [`CropSession::commit`] returns the cropped source pixels.

pub mod config;
pub mod decode;
pub mod geometry;
pub mod interaction;
pub mod render;
pub mod transform;

pub use config::{EditorConfig, HANDLE_SIZE, MIN_SIZE};
pub use decode::{decode_image, DecodeError, DecodedImage, FilterType};
pub use geometry::{compute_placement, CropRect, LayoutError, PlacedImage, Point, Viewport};
pub use interaction::{
    classify, CropSession, DragState, HandleRegion, PointerEvent, PointerOutcome, SessionError,
};
pub use render::{render_frame, Overlay};
pub use transform::{crop_to_source, CropOutput, PixelRect};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_edit_flow() {
        let source = DecodedImage::filled(2000, 1000, [10, 20, 30]);
        let mut session = CropSession::new(source, EditorConfig::default()).unwrap();
        assert!(!session.is_ready());

        // 1000x700 screen, 40 status + 60 title leaves a 1000x600 viewport
        let placed = session.layout_screen(1000.0, 700.0, 40.0, 60.0).unwrap();
        assert!((placed.scale - 0.5).abs() < 1e-9);
        assert_eq!((placed.width, placed.height), (1000.0, 500.0));
        assert_eq!(placed.offset_y, 50.0);

        // Move the left edge in by 100 display pixels
        let outcome = session.handle_pointer(PointerEvent::Down(Point::new(5.0, 300.0)));
        assert_eq!(outcome, PointerOutcome::DragStarted(HandleRegion::Left));
        assert!(session
            .handle_pointer(PointerEvent::Move(Point::new(100.0, 300.0)))
            .needs_redraw());
        session.handle_pointer(PointerEvent::Up(Point::new(100.0, 300.0)));

        let frame = render_frame(&session).unwrap();
        assert_eq!((frame.width, frame.height), (1000, 600));

        let output = session.commit(1).unwrap();
        assert_eq!(output.rect, PixelRect::new(200, 0, 1800, 1000));
        assert_eq!((output.image.width, output.image.height), (1800, 1000));
    }

    #[test]
    fn test_commit_zero_is_noop() {
        let source = DecodedImage::filled(400, 400, [0, 0, 0]);
        let mut session = CropSession::new(source, EditorConfig::default()).unwrap();
        session.layout_viewport(Viewport::new(400.0, 400.0).unwrap()).unwrap();
        assert!(session.commit(0).is_none());
        assert!(!session.layout().unwrap().is_committed());
    }
}
