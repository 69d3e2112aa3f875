//! Move acceptance across detection cycles.

use std::fmt;
use std::path::Path;

use log::{debug, info, warn};

use fencam_core::{load_label_file, BoardRectifier, Detection, FrameSize, RecordError};
use fencam_notation::{board_fen, full_fen, Board, CastlingRights, Color, FenFields};

use crate::pipeline::recognize_frame;

/// How a frame's detections were triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionMode {
    /// Scheduled polling detection.
    Automatic,
    /// Explicit on-demand single shot, e.g. after deliberately
    /// repositioning many pieces.
    Forced,
}

/// Why a reconstructed position was not adopted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The reconstruction matches the accepted position.
    Unchanged,
    /// Too many previously occupied squares changed at once; most likely
    /// a hand over the board, not a move.
    OcclusionSuspected { moved_squares: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Unchanged => write!(f, "position unchanged"),
            RejectReason::OcclusionSuspected { moved_squares } => {
                write!(f, "{moved_squares} occupied squares changed")
            }
        }
    }
}

/// Outcome of one detection cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum MoveDecision {
    /// The position was adopted; `fen` is the full accepted record.
    Accepted { fen: String, moved_squares: usize },
    Rejected(RejectReason),
}

/// Errors that abort a detection cycle.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Records(#[from] RecordError),
}

/// Tracks the accepted position across detection cycles.
///
/// All mutable pipeline state lives here: the rectifier built at
/// orientation time, the last accepted board, the side to move, the
/// castling blacklist and the first-automatic-cycle flag. The session is
/// strictly sequential; one cycle must complete before the next starts.
pub struct GameSession {
    rectifier: BoardRectifier,
    accepted: Board,
    turn: Color,
    castling: CastlingRights,
    first_automatic: bool,
}

impl GameSession {
    /// Start a session from a calibrated rectifier, assuming the standard
    /// starting position until the first accepted detection says
    /// otherwise.
    pub fn new(rectifier: BoardRectifier) -> Self {
        Self {
            rectifier,
            accepted: Board::starting_position(),
            turn: Color::White,
            castling: CastlingRights::new(),
            first_automatic: true,
        }
    }

    pub fn accepted_board(&self) -> &Board {
        &self.accepted
    }

    /// Board field of the accepted position.
    pub fn accepted_fen(&self) -> String {
        board_fen(&self.accepted)
    }

    /// Full 6-field FEN of the accepted position, with the session's
    /// side to move and surviving castling rights.
    pub fn full_fen(&self) -> String {
        full_fen(
            &self.accepted,
            &FenFields::new(self.turn, self.castling.field()),
        )
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn castling(&self) -> &CastlingRights {
        &self.castling
    }

    /// Manual side-to-move override (the physical board has no clock to
    /// tell whose turn it is).
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.other();
    }

    /// Replace the rectifier after an explicit re-orientation.
    pub fn re_orient(&mut self, rectifier: BoardRectifier) {
        self.rectifier = rectifier;
    }

    /// Arm the first-automatic-cycle escape hatch.
    ///
    /// Call when automatic detection is (re-)enabled: the first automatic
    /// cycle after forced single shots may legitimately differ from the
    /// accepted position by many squares, and must not be discarded as
    /// occlusion.
    pub fn arm_first_automatic(&mut self) {
        self.first_automatic = true;
    }

    /// Run one detection cycle over already-parsed records.
    pub fn process_frame(
        &mut self,
        detections: &[Detection],
        frame: FrameSize,
        mode: DetectionMode,
    ) -> MoveDecision {
        let candidate = recognize_frame(detections, frame, &self.rectifier);
        let decision = self.consider(candidate, mode);
        self.first_automatic = false;
        decision
    }

    /// Run one detection cycle from a label file on disk, propagating
    /// failures. The session state is untouched on error.
    pub fn process_labels(
        &mut self,
        path: impl AsRef<Path>,
        frame: FrameSize,
        mode: DetectionMode,
    ) -> Result<MoveDecision, SessionError> {
        let detections = load_label_file(path)?;
        Ok(self.process_frame(&detections, frame, mode))
    }

    /// Run one detection cycle from a label file on disk.
    ///
    /// Any failure is logged and reported as `None`, "no update this
    /// cycle": the accepted state stays untouched and a polling caller
    /// simply carries on with the next frame.
    pub fn poll_labels(
        &mut self,
        path: impl AsRef<Path>,
        frame: FrameSize,
        mode: DetectionMode,
    ) -> Option<MoveDecision> {
        let path = path.as_ref();
        match self.process_labels(path, frame, mode) {
            Ok(decision) => Some(decision),
            Err(err) => {
                warn!("detection cycle skipped ({}): {err}", path.display());
                None
            }
        }
    }

    fn consider(&mut self, candidate: Board, mode: DetectionMode) -> MoveDecision {
        if candidate == self.accepted {
            return MoveDecision::Rejected(RejectReason::Unchanged);
        }

        // A real move (castling and captures included) empties at most 2
        // previously occupied squares; more than that means a hand was
        // over the board mid-gesture — unless this cycle is a deliberate
        // bulk reposition (forced, or the first automatic one after it).
        let moved_squares = self.accepted.moved_piece_count(&candidate);
        let bypass = mode == DetectionMode::Forced || self.first_automatic;
        if moved_squares > 2 && !bypass {
            debug!("rejecting frame: {moved_squares} occupied squares changed");
            return MoveDecision::Rejected(RejectReason::OcclusionSuspected { moved_squares });
        }

        self.accepted = candidate;
        self.turn = self.turn.other();
        if !self.castling.is_void() {
            self.castling.refresh(&self.accepted);
        }
        let fen = self.full_fen();
        info!("accepted new position: {fen}");
        MoveDecision::Accepted {
            fen,
            moved_squares,
        }
    }
}
