use std::fmt;

use crate::board::{Board, BoardBuilder};
use crate::piece::Piece;
use crate::types::Coordinate;

/// King and rook relocation for either castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastleMove {
    pub king: Piece,
    pub destination: Coordinate,
    pub rook: Piece,
    pub rook_destination: Coordinate,
}

/// A single ply. Moves are plain values: `execute` reads the source board
/// and returns a new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    MajorMove {
        piece: Piece,
        destination: Coordinate,
    },
    MajorAttackMove {
        piece: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    PawnMove {
        piece: Piece,
        destination: Coordinate,
    },
    PawnJump {
        piece: Piece,
        destination: Coordinate,
    },
    PawnAttackMove {
        piece: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    /// The captured pawn stands beside the mover, not on `destination`.
    PawnEnPassantAttackMove {
        piece: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    /// Wraps a `PawnMove` or `PawnAttackMove` that lands on the back rank.
    PawnPromotion(Box<Move>),
    KingSideCastle(CastleMove),
    QueenSideCastle(CastleMove),
}

impl Move {
    pub fn destination(&self) -> Coordinate {
        match self {
            Move::MajorMove { destination, .. }
            | Move::MajorAttackMove { destination, .. }
            | Move::PawnMove { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnAttackMove { destination, .. }
            | Move::PawnEnPassantAttackMove { destination, .. } => *destination,
            Move::PawnPromotion(inner) => inner.destination(),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => castle.destination,
        }
    }

    /// The piece that moves; the king for castles.
    pub fn moved_piece(&self) -> &Piece {
        match self {
            Move::MajorMove { piece, .. }
            | Move::MajorAttackMove { piece, .. }
            | Move::PawnMove { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnAttackMove { piece, .. }
            | Move::PawnEnPassantAttackMove { piece, .. } => piece,
            Move::PawnPromotion(inner) => inner.moved_piece(),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => &castle.king,
        }
    }

    pub fn current_coordinate(&self) -> Coordinate {
        self.moved_piece().position()
    }

    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Move::MajorAttackMove { captured, .. }
            | Move::PawnAttackMove { captured, .. }
            | Move::PawnEnPassantAttackMove { captured, .. } => Some(captured),
            Move::PawnPromotion(inner) => inner.attacked_piece(),
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    pub fn is_castle(&self) -> bool {
        matches!(self, Move::KingSideCastle(_) | Move::QueenSideCastle(_))
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion(_))
    }

    pub fn castle(&self) -> Option<&CastleMove> {
        match self {
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle),
            _ => None,
        }
    }

    /// Produce the board after this move. The source board is untouched; the
    /// side to move becomes the mover's opponent.
    pub fn execute(&self, board: &Board) -> Board {
        self.stage(board).assemble()
    }

    /// Builder holding every piece of the resulting position.
    fn stage(&self, board: &Board) -> BoardBuilder {
        if let Move::PawnPromotion(inner) = self {
            let mut builder = inner.stage(board);
            let pawn = inner.moved_piece().move_piece(inner);
            builder.set_piece(pawn.promotion_piece());
            return builder;
        }

        let moved = self.moved_piece();
        let captured = self.attacked_piece().map(Piece::position);
        let rook = self.castle().map(|castle| castle.rook.position());

        let mut builder = BoardBuilder::new();
        for piece in board.all_pieces() {
            let at = piece.position();
            if at == moved.position() || Some(at) == captured || Some(at) == rook {
                continue;
            }
            builder.set_piece(*piece);
        }

        builder.set_piece(moved.move_piece(self));
        if let Some(castle) = self.castle() {
            builder.set_piece(Piece::new(
                castle.rook.kind(),
                castle.rook.side(),
                castle.rook_destination,
                false,
            ));
        }
        if let Move::PawnJump { .. } = self {
            builder.set_en_passant_pawn(moved.move_piece(self));
        }
        builder.set_move_maker(moved.side().opponent());
        builder
    }

    /// Turn two clicked squares into a move by searching the side to move's
    /// candidate moves. `None` when nothing matches.
    pub fn create_from_coordinates(
        board: &Board,
        current: Coordinate,
        destination: Coordinate,
    ) -> Option<Move> {
        board
            .current_player()
            .pseudo_legal_moves()
            .find(|mv| mv.current_coordinate() == current && mv.destination() == destination)
            .cloned()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::KingSideCastle(_) => write!(f, "O-O"),
            Move::QueenSideCastle(_) => write!(f, "O-O-O"),
            Move::PawnPromotion(inner) => write!(f, "{inner}q"),
            _ => write!(f, "{}{}", self.current_coordinate(), self.destination()),
        }
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
