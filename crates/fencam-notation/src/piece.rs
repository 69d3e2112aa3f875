//! Piece classes as emitted by the object detector.

use serde::{Deserialize, Serialize};

/// A chess piece, numbered the way the detector's classes are: white
/// pawn, rook, knight, bishop, queen, king are 0..=5; the black pieces
/// follow as 6..=11.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Piece {
    WhitePawn = 0,
    WhiteRook = 1,
    WhiteKnight = 2,
    WhiteBishop = 3,
    WhiteQueen = 4,
    WhiteKing = 5,
    BlackPawn = 6,
    BlackRook = 7,
    BlackKnight = 8,
    BlackBishop = 9,
    BlackQueen = 10,
    BlackKing = 11,
}

impl Piece {
    /// Map a detector class id to a piece. `None` for anything outside
    /// the 12 piece classes (class 12, "empty square", included).
    pub fn from_class(class_id: u8) -> Option<Self> {
        use Piece::*;
        Some(match class_id {
            0 => WhitePawn,
            1 => WhiteRook,
            2 => WhiteKnight,
            3 => WhiteBishop,
            4 => WhiteQueen,
            5 => WhiteKing,
            6 => BlackPawn,
            7 => BlackRook,
            8 => BlackKnight,
            9 => BlackBishop,
            10 => BlackQueen,
            11 => BlackKing,
            _ => return None,
        })
    }

    pub fn class_id(self) -> u8 {
        self as u8
    }

    /// FEN symbol: uppercase for white, lowercase for black.
    pub fn symbol(self) -> char {
        use Piece::*;
        match self {
            WhitePawn => 'P',
            WhiteRook => 'R',
            WhiteKnight => 'N',
            WhiteBishop => 'B',
            WhiteQueen => 'Q',
            WhiteKing => 'K',
            BlackPawn => 'p',
            BlackRook => 'r',
            BlackKnight => 'n',
            BlackBishop => 'b',
            BlackQueen => 'q',
            BlackKing => 'k',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        use Piece::*;
        Some(match symbol {
            'P' => WhitePawn,
            'R' => WhiteRook,
            'N' => WhiteKnight,
            'B' => WhiteBishop,
            'Q' => WhiteQueen,
            'K' => WhiteKing,
            'p' => BlackPawn,
            'r' => BlackRook,
            'n' => BlackKnight,
            'b' => BlackBishop,
            'q' => BlackQueen,
            'k' => BlackKing,
            _ => return None,
        })
    }

    pub fn color(self) -> Color {
        if self.class_id() < 6 {
            Color::White
        } else {
            Color::Black
        }
    }
}

/// Side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// FEN turn field: `w` or `b`.
    pub fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_ids_round_trip() {
        for class_id in 0..12u8 {
            let piece = Piece::from_class(class_id).expect("piece class");
            assert_eq!(piece.class_id(), class_id);
            assert_eq!(Piece::from_symbol(piece.symbol()), Some(piece));
        }
        assert_eq!(Piece::from_class(12), None);
    }

    #[test]
    fn colors_split_at_class_six() {
        assert_eq!(Piece::WhiteKing.color(), Color::White);
        assert_eq!(Piece::BlackPawn.color(), Color::Black);
        assert_eq!(Color::White.other(), Color::Black);
        assert_eq!(Color::Black.fen_char(), 'b');
    }
}
