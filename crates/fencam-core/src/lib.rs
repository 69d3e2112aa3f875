//! Board geometry for camera chess recognition.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete object detector or image type: a frame enters as
//! a list of normalized detection records plus the pixel dimensions of the
//! captured image.

mod corners;
mod homography;
mod logger;
mod records;
mod rectify;
mod squares;

pub use corners::{locate_corners, CalibrationError, CornerSet};
pub use homography::{homography_from_quad, GeometryError, Homography};
pub use records::{
    load_label_file, parse_labels, Detection, FrameSize, RecordError, BLACK_ROOK_CLASS,
    PIECE_CLASS_COUNT, WHITE_ROOK_CLASS,
};
pub use rectify::{BoardRectifier, DEFAULT_CANVAS_SIZE};
pub use squares::Square;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;
