//! High-level facade crate for the `fencam-*` workspace.
//!
//! Reconstructs a chess position (FEN) from per-frame object detections
//! of a physical board: rook anchors locate the board corners, a
//! homography rectifies the view onto a canonical canvas, every piece
//! anchor maps to a square, and a continuity heuristic decides whether a
//! freshly reconstructed position is a real move or a noisy frame.
//!
//! The object detector, camera and chess engine are collaborators, not
//! dependencies: frames enter as normalized detection records plus the
//! frame's pixel size.
//!
//! ## Quickstart
//!
//! ```
//! use fencam::{orient_board, recognize_frame, BoardRectifier, Detection, FrameSize};
//! use fencam::notation::board_fen;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = FrameSize { width: 800, height: 800 };
//! // Orientation frame: one rook on each corner square.
//! let rooks = vec![
//!     Detection { class_id: 7, x_center: 0.125, y_center: 0.47, width: 0.05, height: 0.1 },
//!     Detection { class_id: 7, x_center: 0.5, y_center: 0.07, width: 0.05, height: 0.1 },
//!     Detection { class_id: 1, x_center: 0.875, y_center: 0.47, width: 0.05, height: 0.1 },
//!     Detection { class_id: 1, x_center: 0.5, y_center: 0.87, width: 0.05, height: 0.1 },
//! ];
//! let corners = orient_board(&rooks, frame)?;
//! let rectifier = BoardRectifier::with_default_canvas(&corners)?;
//! let board = recognize_frame(&rooks, frame, &rectifier);
//! assert_eq!(board_fen(&board), "r6r/8/8/8/8/8/8/R6R");
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`](fencam_core): detection records, corner location,
//!   homography, square mapping.
//! - [`notation`](fencam_notation): occupancy maps, FEN text, castling
//!   rights.
//! - [`Orientation`]: persisted calibration (corners + canvas).
//! - [`GameSession`]: move acceptance across detection cycles.

pub use fencam_core as core;
pub use fencam_notation as notation;

pub use fencam_core::{
    BoardRectifier, CalibrationError, CornerSet, Detection, FrameSize, GeometryError, Square,
};
pub use fencam_notation::{Board, CastlingRights, Color, Piece};

mod orientation;
mod pipeline;
mod session;

pub use orientation::{Orientation, OrientationIoError};
pub use pipeline::{orient_board, recognize_frame};
pub use session::{DetectionMode, GameSession, MoveDecision, RejectReason, SessionError};
