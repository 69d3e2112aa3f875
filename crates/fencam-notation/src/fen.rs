//! FEN serialization of the occupancy map.

use serde::{Deserialize, Serialize};

use fencam_core::Square;

use crate::{Board, Color, Piece};

/// Board field of the standard starting position.
pub const STARTING_BOARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Metadata appended to a board field to form a full 6-field FEN record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FenFields {
    pub turn: Color,
    pub castling: String,
    pub en_passant: String,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl FenFields {
    /// Fields the way the engine bridge builds them: no en-passant
    /// square, zeroed clocks.
    pub fn new(turn: Color, castling: impl Into<String>) -> Self {
        Self {
            turn,
            castling: castling.into(),
            en_passant: "-".to_string(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

/// Encode the board field: ranks 8 down to 1, files a to h, runs of
/// empty squares as decimal digits. Pure function of the board.
pub fn board_fen(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for rank in (0..8u8).rev() {
        if rank < 7 {
            out.push('/');
        }
        let mut empty_run = 0u8;
        for file in 0..8u8 {
            match board.piece_at(Square::new(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    out.push(piece.symbol());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push((b'0' + empty_run) as char);
        }
    }
    out
}

/// Encode a full 6-field FEN record.
pub fn full_fen(board: &Board, fields: &FenFields) -> String {
    format!(
        "{} {} {} {} {} {}",
        board_fen(board),
        fields.turn.fen_char(),
        fields.castling,
        fields.en_passant,
        fields.halfmove_clock,
        fields.fullmove_number
    )
}

/// Errors parsing a FEN board field.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 8 ranks, got {got}")]
    RankCount { got: usize },
    #[error("rank {rank:?} does not describe exactly 8 files")]
    RankWidth { rank: String },
    #[error("unknown piece symbol {symbol:?}")]
    UnknownSymbol { symbol: char },
}

/// Parse a board field back into an occupancy map.
pub fn parse_board_fen(text: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = text.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { got: ranks.len() });
    }
    let mut board = Board::empty();
    for (i, chunk) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file = 0u32;
        for symbol in chunk.chars() {
            if let Some(run) = symbol.to_digit(10) {
                file += run;
            } else {
                let piece =
                    Piece::from_symbol(symbol).ok_or(FenError::UnknownSymbol { symbol })?;
                if file >= 8 {
                    return Err(FenError::RankWidth {
                        rank: chunk.to_string(),
                    });
                }
                board.set(Square::new(file as u8, rank), Some(piece));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth {
                rank: chunk.to_string(),
            });
        }
    }
    Ok(board)
}
