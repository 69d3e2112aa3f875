//! Board corner location from rook-class detections.
//!
//! The orientation photo is taken with one rook standing on each corner
//! square. The rook anchors are the only calibration markers; everything
//! downstream (rectification, square mapping) hangs off the corner set
//! located here.

use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::{Detection, FrameSize};

/// The four board corners in pixel coordinates, ordered to match the
/// canonical rectified canvas: `a8` top-left, `h8` top-right, `h1`
/// bottom-right, `a1` bottom-left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerSet {
    pub a8: Point2<f32>,
    pub h8: Point2<f32>,
    pub h1: Point2<f32>,
    pub a1: Point2<f32>,
}

impl CornerSet {
    /// Corners in `[a8, h8, h1, a1]` order.
    pub fn as_quad(&self) -> [Point2<f32>; 4] {
        [self.a8, self.h8, self.h1, self.a1]
    }
}

/// Errors locating the board corners in an orientation frame.
#[derive(thiserror::Error, Debug)]
pub enum CalibrationError {
    #[error("expected exactly 4 rook detections in the orientation frame, got {got}")]
    RookCount { got: usize },
    #[error("rook anchors do not form four distinct board corners")]
    Degenerate,
}

/// Locate the four board corners from an orientation frame.
///
/// Precondition: the orientation photo shows exactly one rook per board
/// corner, so the frame must carry exactly 4 rook-class detections; any
/// other count is a [`CalibrationError::RookCount`] and the caller should
/// retry with a fresh frame.
///
/// Corner labels are assigned independently per extreme: `a1` is the
/// bottom-most anchor, `h1` the right-most, `a8` the left-most and `h8`
/// the top-most (ties resolve to the earliest record). This is not a
/// consistent quadrilateral assignment; a layout where one anchor wins
/// two extremes is rejected here instead of producing a corrupt
/// homography, and full collinearity is caught by the rectifier.
pub fn locate_corners(
    detections: &[Detection],
    frame: FrameSize,
) -> Result<CornerSet, CalibrationError> {
    let anchors: Vec<Point2<f32>> = detections
        .iter()
        .filter(|d| d.is_rook())
        .map(|d| d.anchor(frame))
        .collect();
    if anchors.len() != 4 {
        return Err(CalibrationError::RookCount { got: anchors.len() });
    }

    let a1 = extreme(&anchors, |p| p.y);
    let h1 = extreme(&anchors, |p| p.x);
    let a8 = extreme(&anchors, |p| -p.x);
    let h8 = extreme(&anchors, |p| -p.y);

    let quad = [a8, h8, h1, a1];
    for i in 0..4 {
        for j in i + 1..4 {
            if quad[i] == quad[j] {
                return Err(CalibrationError::Degenerate);
            }
        }
    }

    debug!(
        "located corners a8=({:.1},{:.1}) h8=({:.1},{:.1}) h1=({:.1},{:.1}) a1=({:.1},{:.1})",
        a8.x, a8.y, h8.x, h8.y, h1.x, h1.y, a1.x, a1.y
    );
    Ok(CornerSet { a8, h8, h1, a1 })
}

fn extreme(points: &[Point2<f32>], key: impl Fn(&Point2<f32>) -> f32) -> Point2<f32> {
    let mut best = points[0];
    let mut best_key = key(&points[0]);
    for p in &points[1..] {
        let k = key(p);
        if k > best_key {
            best = *p;
            best_key = k;
        }
    }
    best
}
