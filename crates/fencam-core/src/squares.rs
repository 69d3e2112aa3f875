//! Algebraic squares and canvas-to-square mapping.

use std::fmt;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One of the 64 board squares.
///
/// Files `a..h` and ranks `1..8` are stored zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square from zero-based file (`0` = `a`) and rank
    /// (`0` = rank 1) indices.
    pub const fn new(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8);
        Self { file, rank }
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Index into a rank-major 64-element array (`a1` = 0, `h8` = 63).
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    /// All 64 squares, `a1..h1, a2..`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }

    /// Map a rectified canvas point to its square.
    ///
    /// Canvas row 0 is the far side of the board (rank 8). Both indices
    /// are clamped to the board, so a point slightly outside the canvas
    /// still resolves to the nearest edge square: deliberate tolerance
    /// for detector imprecision near the board boundary, not a
    /// correctness guarantee.
    pub fn from_canvas(p: Point2<f32>, square_size: f32) -> Square {
        let col = (p.x / square_size).floor() as i32;
        let row = (p.y / square_size).floor() as i32;
        let file = col.clamp(0, 7) as u8;
        let row = row.clamp(0, 7) as u8;
        Square {
            file,
            rank: 7 - row,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            (b'1' + self.rank) as char
        )
    }
}
