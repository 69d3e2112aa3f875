//! End-to-end frame helpers: detections in, corner set or board out.

use fencam_core::{
    locate_corners, BoardRectifier, CalibrationError, CornerSet, Detection, FrameSize, Square,
};
use fencam_notation::{Board, Piece};

/// Locate the board corners in an orientation frame.
///
/// Run once at calibration time and again whenever the camera or board
/// moves; the resulting corner set feeds [`BoardRectifier::new`].
pub fn orient_board(
    detections: &[Detection],
    frame: FrameSize,
) -> Result<CornerSet, CalibrationError> {
    locate_corners(detections, frame)
}

/// Reconstruct the occupancy map for one frame.
///
/// Every detection contributes exactly one `(piece, square)` placement;
/// detections landing on the same square overwrite in record order.
/// Square mapping never fails (out-of-canvas anchors clamp to the board
/// edge), so this is infallible given a built rectifier.
pub fn recognize_frame(
    detections: &[Detection],
    frame: FrameSize,
    rectifier: &BoardRectifier,
) -> Board {
    let square_size = rectifier.square_size();
    let placements = detections.iter().filter_map(|d| {
        let piece = Piece::from_class(d.class_id)?;
        let spot = rectifier.rectify(d.anchor(frame));
        Some((piece, Square::from_canvas(spot, square_size)))
    });
    Board::from_placements(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fencam_notation::board_fen;
    use nalgebra::Point2;

    const FRAME: FrameSize = FrameSize {
        width: 800,
        height: 800,
    };

    /// Axis-aligned corner set: the rectification is the identity, so a
    /// pixel anchor *is* its canvas coordinate.
    fn straight_corners() -> CornerSet {
        CornerSet {
            a8: Point2::new(0.0, 0.0),
            h8: Point2::new(799.0, 0.0),
            h1: Point2::new(799.0, 799.0),
            a1: Point2::new(0.0, 799.0),
        }
    }

    /// A detection whose anchor lands on the given canvas pixel.
    fn detection_at(class_id: u8, px: f32, py: f32) -> Detection {
        let height = 0.1;
        Detection {
            class_id,
            x_center: px / 800.0,
            // anchor y = (y_center + 0.3 * height) * frame height
            y_center: py / 800.0 - 0.3 * height,
            width: 0.05,
            height,
        }
    }

    #[test]
    fn pieces_map_to_their_squares() {
        let rectifier = BoardRectifier::new(&straight_corners(), 800).expect("rectifier");
        let detections = vec![
            detection_at(0, 450.0, 450.0),  // white pawn on e4
            detection_at(11, 450.0, 50.0),  // black king on e8
            detection_at(5, 50.0, 750.0),   // white king on a1
        ];
        let board = recognize_frame(&detections, FRAME, &rectifier);
        assert_eq!(board_fen(&board), "4k3/8/8/8/4P3/8/8/K7");
    }

    #[test]
    fn colliding_detections_keep_the_last_record() {
        let rectifier = BoardRectifier::new(&straight_corners(), 800).expect("rectifier");
        let detections = vec![
            detection_at(0, 450.0, 450.0),
            detection_at(10, 455.0, 445.0), // same square, later record
        ];
        let board = recognize_frame(&detections, FRAME, &rectifier);
        assert_eq!(board_fen(&board), "8/8/8/8/4q3/8/8/8");
    }

    #[test]
    fn orientation_and_recognition_agree_on_the_corner_rooks() {
        // Diamond layout: each rook anchor wins exactly one extreme.
        let rooks = vec![
            detection_at(7, 100.0, 400.0), // a8
            detection_at(7, 400.0, 80.0),  // h8
            detection_at(1, 700.0, 400.0), // h1
            detection_at(1, 400.0, 720.0), // a1
        ];
        let corners = orient_board(&rooks, FRAME).expect("orient");
        let rectifier = BoardRectifier::with_default_canvas(&corners).expect("rectifier");
        let board = recognize_frame(&rooks, FRAME, &rectifier);
        assert_eq!(board_fen(&board), "r6r/8/8/8/8/8/8/R6R");
    }
}
