//! Castling rights inferred from king/rook home-square occupancy.

use fencam_core::Square;
use serde::{Deserialize, Serialize};

use crate::{Board, Piece};

/// One of the four castling moves, in FEN field order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastleFlag {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastleFlag {
    pub const ALL: [CastleFlag; 4] = [
        CastleFlag::WhiteKingside,
        CastleFlag::WhiteQueenside,
        CastleFlag::BlackKingside,
        CastleFlag::BlackQueenside,
    ];

    /// FEN letter for this flag.
    pub fn symbol(self) -> char {
        match self {
            CastleFlag::WhiteKingside => 'K',
            CastleFlag::WhiteQueenside => 'Q',
            CastleFlag::BlackKingside => 'k',
            CastleFlag::BlackQueenside => 'q',
        }
    }

    /// King home square, rook home square and the pieces expected there.
    fn home_pair(self) -> (Square, Square, Piece, Piece) {
        const E1: Square = Square::new(4, 0);
        const A1: Square = Square::new(0, 0);
        const H1: Square = Square::new(7, 0);
        const E8: Square = Square::new(4, 7);
        const A8: Square = Square::new(0, 7);
        const H8: Square = Square::new(7, 7);
        match self {
            CastleFlag::WhiteKingside => (E1, H1, Piece::WhiteKing, Piece::WhiteRook),
            CastleFlag::WhiteQueenside => (E1, A1, Piece::WhiteKing, Piece::WhiteRook),
            CastleFlag::BlackKingside => (E8, H8, Piece::BlackKing, Piece::BlackRook),
            CastleFlag::BlackQueenside => (E8, A8, Piece::BlackKing, Piece::BlackRook),
        }
    }

    /// Whether the king/rook pair for this flag stands on its home
    /// squares.
    fn is_available(self, board: &Board) -> bool {
        let (king_home, rook_home, king, rook) = self.home_pair();
        board.piece_at(king_home) == Some(king) && board.piece_at(rook_home) == Some(rook)
    }
}

/// Castling availability with a one-way blacklist.
///
/// A flag whose king/rook pair is ever caught away from its home squares
/// is blacklisted and never granted again, even if the pieces later
/// return (a manual board edit, say). This over-forfeits compared to
/// strict chess law: the reconstruction cannot tell a return-to-home
/// apart from pieces that never moved, so rights once lost stay lost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    granted: [bool; 4],
    blacklist: [bool; 4],
}

impl Default for CastlingRights {
    /// Full rights, empty blacklist: the state before the first accepted
    /// detection.
    fn default() -> Self {
        Self {
            granted: [true; 4],
            blacklist: [false; 4],
        }
    }
}

impl CastlingRights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the surviving flags from king/rook home occupancy.
    ///
    /// A flag survives only while its pair is present *and* it was never
    /// blacklisted; anything else blacklists it permanently.
    pub fn refresh(&mut self, board: &Board) {
        for (i, flag) in CastleFlag::ALL.iter().enumerate() {
            if flag.is_available(board) && !self.blacklist[i] {
                self.granted[i] = true;
            } else {
                self.granted[i] = false;
                self.blacklist[i] = true;
            }
        }
    }

    pub fn is_granted(&self, flag: CastleFlag) -> bool {
        self.granted[flag as usize]
    }

    pub fn is_blacklisted(&self, flag: CastleFlag) -> bool {
        self.blacklist[flag as usize]
    }

    /// All four flags blacklisted; nothing can ever be granted again.
    pub fn is_void(&self) -> bool {
        self.blacklist.iter().all(|b| *b)
    }

    /// FEN castling field: surviving flags in `KQkq` order, `-` if none.
    pub fn field(&self) -> String {
        let field: String = CastleFlag::ALL
            .iter()
            .filter(|flag| self.is_granted(**flag))
            .map(|flag| flag.symbol())
            .collect();
        if field.is_empty() {
            "-".to_string()
        } else {
            field
        }
    }
}
