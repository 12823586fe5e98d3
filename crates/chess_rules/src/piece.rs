use std::fmt;

use crate::board::Board;
use crate::movegen::pseudo_legal_moves;
use crate::moves::Move;
use crate::types::{Alliance, Coordinate, PieceKind};

/// A piece standing on a square.
///
/// Equality is structural over all four fields: two pieces of the same kind
/// and side on the same square with the same first-move flag are
/// interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    position: Coordinate,
    side: Alliance,
    kind: PieceKind,
    first_move: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Alliance, position: Coordinate, first_move: bool) -> Self {
        Self {
            position,
            side,
            kind,
            first_move,
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn side(&self) -> Alliance {
        self.side
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Gates the pawn double step and castling. Cleared once this piece moves.
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_rook(&self) -> bool {
        self.kind == PieceKind::Rook
    }

    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    /// Pseudo-legal moves: movement geometry and occupancy only. Whether the
    /// move exposes the own king is decided by [`Player`](crate::Player).
    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<Move> {
        pseudo_legal_moves(self, board)
    }

    /// The same piece after `mv`, standing on its destination.
    pub fn move_piece(&self, mv: &Move) -> Piece {
        Piece {
            position: mv.destination(),
            first_move: false,
            ..*self
        }
    }

    /// The queen a pawn turns into on its promotion square.
    pub fn promotion_piece(&self) -> Piece {
        Piece {
            kind: PieceKind::Queen,
            first_move: false,
            ..*self
        }
    }

    /// Upper case for white, lower case for black.
    pub fn symbol(&self) -> char {
        match self.side {
            Alliance::White => self.kind.symbol(),
            Alliance::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
