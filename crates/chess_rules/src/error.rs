use thiserror::Error;

use crate::types::Coordinate;

/// Domain errors for the rules engine.
///
/// Coordinate and position errors are caller contract violations. Move
/// rejections normally travel as a [`MoveStatus`](crate::MoveStatus) inside a
/// [`MoveTransition`](crate::MoveTransition); the `IllegalMove` and
/// `LeavesKingInCheck` variants exist for callers that convert a rejected
/// transition with [`MoveTransition::into_result`](crate::MoveTransition::into_result).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("coordinate {0} is outside the board (expected 0..=63)")]
    InvalidCoordinate(i32),

    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Coordinate, to: Coordinate },

    #[error("move {from} -> {to} leaves the king in check")]
    LeavesKingInCheck { from: Coordinate, to: Coordinate },

    #[error("no legal move from {from} to {to}")]
    NoSuchMove { from: Coordinate, to: Coordinate },

    #[error("malformed position: {0}")]
    MalformedPosition(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
