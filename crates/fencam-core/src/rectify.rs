//! Perspective rectification of the photographed board into a canonical
//! top-down canvas.

use nalgebra::Point2;

use crate::{homography_from_quad, CornerSet, GeometryError, Homography};

/// Default side length of the rectified canvas, in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 800;

/// Maps image pixels into the canonical top-down board canvas.
///
/// Built once per orientation; [`BoardRectifier::rectify`] reuses the same
/// homography for every point of every subsequent frame. Rebuild only
/// after an explicit re-orientation.
#[derive(Clone, Copy, Debug)]
pub struct BoardRectifier {
    canvas_from_img: Homography,
    canvas_size: u32,
}

impl BoardRectifier {
    /// Build the rectifier for a corner set and a square output canvas.
    ///
    /// The source quad `[a8, h8, h1, a1]` maps to
    /// `[(0,0), (S-1,0), (S-1,S-1), (0,S-1)]`, i.e. rank 8 becomes the
    /// top edge of the canvas.
    pub fn new(corners: &CornerSet, canvas_size: u32) -> Result<Self, GeometryError> {
        if canvas_size < 8 {
            return Err(GeometryError::CanvasTooSmall { size: canvas_size });
        }
        let s = (canvas_size - 1) as f32;
        let dst = [
            Point2::new(0.0, 0.0),
            Point2::new(s, 0.0),
            Point2::new(s, s),
            Point2::new(0.0, s),
        ];
        let canvas_from_img = homography_from_quad(&corners.as_quad(), &dst)?;
        Ok(Self {
            canvas_from_img,
            canvas_size,
        })
    }

    pub fn with_default_canvas(corners: &CornerSet) -> Result<Self, GeometryError> {
        Self::new(corners, DEFAULT_CANVAS_SIZE)
    }

    /// Map one image pixel into canvas coordinates.
    #[inline]
    pub fn rectify(&self, p: Point2<f32>) -> Point2<f32> {
        self.canvas_from_img.apply(p)
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// Side length of one board square on the canvas.
    pub fn square_size(&self) -> f32 {
        self.canvas_size as f32 / 8.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn diamond() -> CornerSet {
        CornerSet {
            a8: Point2::new(100.0, 400.0),
            h8: Point2::new(400.0, 80.0),
            h1: Point2::new(700.0, 400.0),
            a1: Point2::new(400.0, 720.0),
        }
    }

    #[test]
    fn corners_land_on_canvas_corners() {
        let rect = BoardRectifier::new(&diamond(), 800).expect("rectifier");
        let cases = [
            (Point2::new(100.0_f32, 400.0), (0.0, 0.0)),
            (Point2::new(400.0_f32, 80.0), (799.0, 0.0)),
            (Point2::new(700.0_f32, 400.0), (799.0, 799.0)),
            (Point2::new(400.0_f32, 720.0), (0.0, 799.0)),
        ];
        for (src, (x, y)) in cases {
            let p = rect.rectify(src);
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-2);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-2);
        }
    }

    #[test]
    fn board_center_lands_mid_canvas() {
        // The diagonals of the diamond cross at the board center.
        let rect = BoardRectifier::new(&diamond(), 800).expect("rectifier");
        let p = rect.rectify(Point2::new(400.0, 400.0));
        assert_abs_diff_eq!(p.x, 399.5, epsilon = 1.0);
        assert_abs_diff_eq!(p.y, 399.5, epsilon = 1.0);
    }

    #[test]
    fn square_size_follows_canvas() {
        let rect = BoardRectifier::new(&diamond(), 800).expect("rectifier");
        assert_eq!(rect.square_size(), 100.0);
    }

    #[test]
    fn tiny_canvas_is_rejected() {
        assert_eq!(
            BoardRectifier::new(&diamond(), 4).unwrap_err(),
            GeometryError::CanvasTooSmall { size: 4 }
        );
    }
}
