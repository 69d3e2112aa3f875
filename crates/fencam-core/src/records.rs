//! Normalized detection records produced by the external object detector.
//!
//! One record per detected piece, in the YOLO label format: a class id
//! followed by the box center and size, all coordinates normalized to
//! `[0, 1]` of the frame. The detector itself is a collaborator; this
//! module only parses its output.

use std::fs;
use std::path::Path;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Number of piece classes the detector emits: white P,R,N,B,Q,K are
/// 0..=5, black p,r,n,b,q,k are 6..=11. Class 12 marks an empty square
/// downstream and never appears in a detection record.
pub const PIECE_CLASS_COUNT: u8 = 12;

/// Class id of the white rook.
pub const WHITE_ROOK_CLASS: u8 = 1;
/// Class id of the black rook.
pub const BLACK_ROOK_CLASS: u8 = 7;

/// One object detection in normalized image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class_id: u8,
    pub x_center: f32,
    pub y_center: f32,
    pub width: f32,
    pub height: f32,
}

impl Detection {
    /// Whether this record belongs to one of the two rook classes.
    pub fn is_rook(&self) -> bool {
        self.class_id == WHITE_ROOK_CLASS || self.class_id == BLACK_ROOK_CLASS
    }

    /// Anchor point of this detection in pixel coordinates: horizontally
    /// the box center, vertically 20% above the bottom edge of the box.
    ///
    /// Under an angled camera the top of a tall piece leans over the
    /// neighbouring square; the base is what actually sits on the square,
    /// and it sits slightly above the box's bottom edge.
    pub fn anchor(&self, frame: FrameSize) -> Point2<f32> {
        let y_bottom = self.y_center + self.height / 2.0;
        let y = y_bottom - 0.2 * self.height;
        Point2::new(
            self.x_center * frame.width as f32,
            y * frame.height as f32,
        )
    }
}

/// Pixel dimensions of the captured frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

/// Errors reading or parsing a detection label file.
#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed detection record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("unknown piece class {class_id} at line {line}")]
    UnknownClass { class_id: u8, line: usize },
}

/// Parse YOLO label text: one detection per line,
/// `class x_center y_center width height`.
///
/// Empty lines are skipped. A trailing confidence column, if present, is
/// ignored. Class ids outside the 12 piece classes are rejected.
pub fn parse_labels(text: &str) -> Result<Vec<Detection>, RecordError> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() < 5 {
            return Err(RecordError::Malformed {
                line,
                reason: format!("expected 5 fields, got {}", parts.len()),
            });
        }
        let class_id: u8 = parts[0].parse().map_err(|_| RecordError::Malformed {
            line,
            reason: format!("bad class id {:?}", parts[0]),
        })?;
        if class_id >= PIECE_CLASS_COUNT {
            return Err(RecordError::UnknownClass { class_id, line });
        }
        let mut coords = [0.0f32; 4];
        for (slot, field) in coords.iter_mut().zip(&parts[1..5]) {
            *slot = field.parse().map_err(|_| RecordError::Malformed {
                line,
                reason: format!("bad coordinate {field:?}"),
            })?;
        }
        out.push(Detection {
            class_id,
            x_center: coords[0],
            y_center: coords[1],
            width: coords[2],
            height: coords[3],
        });
    }
    Ok(out)
}

/// Read and parse a detection label file.
pub fn load_label_file(path: impl AsRef<Path>) -> Result<Vec<Detection>, RecordError> {
    let raw = fs::read_to_string(path)?;
    parse_labels(&raw)
}
