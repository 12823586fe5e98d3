use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::error::ChessError;
use crate::moves::{CastleMove, Move};
use crate::piece::Piece;
use crate::types::{Alliance, Coordinate};

/// Outcome of [`Player::make_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::LeavesPlayerInCheck => write!(f, "leaves player in check"),
        }
    }
}

/// Result envelope of [`Player::make_move`]. When the status is not `Done`,
/// `board` is the unchanged source board.
#[derive(Clone, Debug)]
pub struct MoveTransition {
    board: Board,
    mv: Move,
    status: MoveStatus,
}

impl MoveTransition {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn played_move(&self) -> &Move {
        &self.mv
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// The resulting board, or the rejection as an error.
    pub fn into_result(self) -> Result<Board, ChessError> {
        let from = self.mv.current_coordinate();
        let to = self.mv.destination();
        match self.status {
            MoveStatus::Done => Ok(self.board),
            MoveStatus::IllegalMove => Err(ChessError::IllegalMove { from, to }),
            MoveStatus::LeavesPlayerInCheck => Err(ChessError::LeavesKingInCheck { from, to }),
        }
    }
}

/// Where a side's state machine stands on the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerStatus::Normal => write!(f, "normal"),
            PlayerStatus::Check => write!(f, "check"),
            PlayerStatus::Checkmate => write!(f, "checkmate"),
            PlayerStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// One side's view of a board.
///
/// The moves behind the view were generated when the board was assembled;
/// check, checkmate and stalemate are recomputed on every query.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    board: &'a Board,
    side: Alliance,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, side: Alliance) -> Self {
        Self { board, side }
    }

    pub fn alliance(&self) -> Alliance {
        self.side
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.side.opponent())
    }

    /// Always `Some` on boards produced by `build` or by a `Done` transition.
    pub fn king(&self) -> Option<&'a Piece> {
        self.board.side_state(self.side).king.as_ref()
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.pieces(self.side)
    }

    /// The nominal move set: every piece's pseudo-legal moves plus castles.
    /// `make_move` rejects anything outside it with `IllegalMove`.
    pub fn pseudo_legal_moves(self) -> impl Iterator<Item = &'a Move> {
        let state = self.board.side_state(self.side);
        state.standard_moves.iter().chain(state.castles.iter())
    }

    pub fn castle_moves(&self) -> &'a [Move] {
        &self.board.side_state(self.side).castles
    }

    /// Moves that can actually be played: the nominal set minus every move
    /// that leaves this side's king attacked.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.pseudo_legal_moves()
            .filter(|mv| !self.leaves_king_attacked(mv))
            .cloned()
            .collect()
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.pseudo_legal_moves().any(|candidate| candidate == mv)
    }

    pub fn is_in_check(&self) -> bool {
        let opponent_moves = &self.board.side_state(self.side.opponent()).standard_moves;
        self.king()
            .is_some_and(|king| is_attacked(king.position(), opponent_moves))
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    pub fn status(&self) -> PlayerStatus {
        match (self.is_in_check(), self.has_escape_moves()) {
            (true, true) => PlayerStatus::Check,
            (true, false) => PlayerStatus::Checkmate,
            (false, true) => PlayerStatus::Normal,
            (false, false) => PlayerStatus::Stalemate,
        }
    }

    /// Whether any nominal move keeps the king safe.
    pub fn has_escape_moves(&self) -> bool {
        self.pseudo_legal_moves()
            .any(|mv| !self.leaves_king_attacked(mv))
    }

    /// Play `mv` for this side.
    ///
    /// `IllegalMove` if it is not this side's turn or `mv` is not in the
    /// nominal set; `LeavesPlayerInCheck` if the resulting board has this
    /// side's king attacked. Otherwise `Done` with the new board.
    pub fn make_move(&self, mv: &Move) -> MoveTransition {
        if self.side != self.board.next_move_maker() || !self.is_move_legal(mv) {
            debug!(side = %self.side, mv = %mv, "rejected move: not in legal move set");
            return self.reject(mv, MoveStatus::IllegalMove);
        }

        let candidate = mv.execute(self.board);
        if candidate.player(self.side).is_in_check() {
            debug!(side = %self.side, mv = %mv, "rejected move: king left in check");
            return self.reject(mv, MoveStatus::LeavesPlayerInCheck);
        }

        MoveTransition {
            board: candidate,
            mv: mv.clone(),
            status: MoveStatus::Done,
        }
    }

    fn reject(&self, mv: &Move, status: MoveStatus) -> MoveTransition {
        MoveTransition {
            board: self.board.clone(),
            mv: mv.clone(),
            status,
        }
    }

    fn leaves_king_attacked(&self, mv: &Move) -> bool {
        mv.execute(self.board).player(self.side).is_in_check()
    }
}

/// Every move in `moves` that lands on `coordinate`.
///
/// The attack oracle is the opponent's pseudo-legal move set, whether or not
/// those moves would expose the opponent's own king.
pub fn calculate_attacks_on_tile(coordinate: Coordinate, moves: &[Move]) -> Vec<&Move> {
    moves
        .iter()
        .filter(|mv| mv.destination() == coordinate)
        .collect()
}

fn is_attacked(coordinate: Coordinate, moves: &[Move]) -> bool {
    moves.iter().any(|mv| mv.destination() == coordinate)
}

/// Squares one side's castles care about.
struct Wing {
    rook_home: u8,
    king_to: u8,
    rook_to: u8,
    /// Must be empty.
    between: &'static [u8],
    /// Must not be attacked: the squares the king crosses and lands on.
    king_path: &'static [u8],
}

struct CastleLayout {
    king_home: u8,
    king_side: Wing,
    queen_side: Wing,
}

const WHITE_CASTLES: CastleLayout = CastleLayout {
    king_home: 60,
    king_side: Wing {
        rook_home: 63,
        king_to: 62,
        rook_to: 61,
        between: &[61, 62],
        king_path: &[61, 62],
    },
    queen_side: Wing {
        rook_home: 56,
        king_to: 58,
        rook_to: 59,
        between: &[57, 58, 59],
        king_path: &[58, 59],
    },
};

const BLACK_CASTLES: CastleLayout = CastleLayout {
    king_home: 4,
    king_side: Wing {
        rook_home: 7,
        king_to: 6,
        rook_to: 5,
        between: &[5, 6],
        king_path: &[5, 6],
    },
    queen_side: Wing {
        rook_home: 0,
        king_to: 2,
        rook_to: 3,
        between: &[1, 2, 3],
        king_path: &[2, 3],
    },
};

/// Castles available to `side`, given the opponent's pseudo-legal moves.
///
/// Requires an unmoved king on its home square that is not in check, an
/// unmoved rook of the same side on the wing's corner, empty squares between
/// them, and no opponent move landing on a square the king crosses or lands on.
pub(crate) fn calculate_king_castles(
    board: &Board,
    side: Alliance,
    opponent_moves: &[Move],
) -> Vec<Move> {
    let mut castles = Vec::new();
    let layout = match side {
        Alliance::White => &WHITE_CASTLES,
        Alliance::Black => &BLACK_CASTLES,
    };

    let Some(king) = board.pieces(side).iter().find(|p| p.is_king()) else {
        return castles;
    };
    if !king.is_first_move()
        || king.position() != Coordinate::at(layout.king_home)
        || is_attacked(king.position(), opponent_moves)
    {
        return castles;
    }

    for (wing, king_side) in [(&layout.king_side, true), (&layout.queen_side, false)] {
        let clear = wing
            .between
            .iter()
            .all(|&c| !board.tile(Coordinate::at(c)).is_occupied());
        let safe = wing
            .king_path
            .iter()
            .all(|&c| calculate_attacks_on_tile(Coordinate::at(c), opponent_moves).is_empty());
        if !clear || !safe {
            continue;
        }

        let Some(rook) = board.piece_at(Coordinate::at(wing.rook_home)) else {
            continue;
        };
        if !rook.is_rook() || rook.side() != side || !rook.is_first_move() {
            continue;
        }

        let castle = CastleMove {
            king: *king,
            destination: Coordinate::at(wing.king_to),
            rook: *rook,
            rook_destination: Coordinate::at(wing.rook_to),
        };
        castles.push(if king_side {
            Move::KingSideCastle(castle)
        } else {
            Move::QueenSideCastle(castle)
        });
    }
    castles
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
