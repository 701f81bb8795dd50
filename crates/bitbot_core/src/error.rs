//! Error types for notation and position import.
//!
//! Malformed input fails fast with one of these instead of producing a
//! corrupted board.

use thiserror::Error;

/// Rejected coordinate-notation move string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("move notation must be 4 or 5 characters, got {0}")]
    BadLength(usize),

    #[error("invalid square in move notation: {0}")]
    BadSquare(String),

    #[error("invalid promotion piece: {0}")]
    BadPromotion(char),
}

/// Rejected FEN position string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFenError {
    #[error("expected at least 4 FEN fields, got {0}")]
    MissingFields(usize),

    #[error("piece placement must list 8 ranks, got {0}")]
    BadRankCount(usize),

    #[error("rank does not span exactly 8 files")]
    BadFileWidth,

    #[error("invalid piece character: {0}")]
    BadPiece(char),

    #[error("invalid side to move: {0}")]
    BadSideToMove(String),

    #[error("invalid castling availability character: {0}")]
    BadCastling(char),

    #[error("invalid en passant square: {0}")]
    BadEnPassant(String),
}
