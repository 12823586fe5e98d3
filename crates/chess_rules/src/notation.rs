//! FEN and coordinate-notation helpers for tests and tooling.
//!
//! The board has no move clocks, so the halfmove/fullmove fields are
//! accepted on input and written as `0 1`. Castling flags map onto the
//! first-move flags of the king and the corner rooks; the en-passant target
//! maps onto the pawn that just double-stepped.

use crate::board::{Board, BoardBuilder};
use crate::error::ChessError;
use crate::moves::Move;
use crate::piece::Piece;
use crate::tables::{NUM_TILES_PER_ROW, SECOND_ROW, SEVENTH_ROW};
use crate::types::{Alliance, Coordinate, PieceKind};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Corner rooks and the FEN castling letter they carry.
const CASTLING_CORNERS: [(char, Alliance, u8); 4] = [
    ('K', Alliance::White, 63),
    ('Q', Alliance::White, 56),
    ('k', Alliance::Black, 7),
    ('q', Alliance::Black, 0),
];

fn king_home(side: Alliance) -> Coordinate {
    match side {
        Alliance::White => Coordinate::at(60),
        Alliance::Black => Coordinate::at(4),
    }
}

/// Whether a non-castling piece stands where the standard setup puts it.
fn on_home_square(kind: PieceKind, side: Alliance, at: Coordinate) -> bool {
    let back_row = match side {
        Alliance::White => 7,
        Alliance::Black => 0,
    };
    match kind {
        PieceKind::Pawn => match side {
            Alliance::White => SEVENTH_ROW[at.index()],
            Alliance::Black => SECOND_ROW[at.index()],
        },
        PieceKind::Knight => at.row() == back_row && matches!(at.column(), 1 | 6),
        PieceKind::Bishop => at.row() == back_row && matches!(at.column(), 2 | 5),
        PieceKind::Queen => at.row() == back_row && at.column() == 3,
        PieceKind::Rook | PieceKind::King => false,
    }
}

impl Board {
    /// Parse a position from Forsyth-Edwards Notation.
    pub fn from_fen(fen: &str) -> Result<Board, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(ChessError::InvalidFen(format!(
                "expected at least 4 fields, got {}",
                parts.len()
            )));
        }
        let (board_part, stm_part, castle_part, ep_part) = (parts[0], parts[1], parts[2], parts[3]);

        let side_to_move = match stm_part {
            "w" => Alliance::White,
            "b" => Alliance::Black,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid side to move: {stm_part}"
                )));
            }
        };

        if castle_part != "-"
            && let Some(c) = castle_part.chars().find(|c| !"KQkq".contains(*c))
        {
            return Err(ChessError::InvalidFen(format!("invalid castling char: {c}")));
        }

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != NUM_TILES_PER_ROW {
            return Err(ChessError::InvalidFen(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut builder = BoardBuilder::new();
        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut column: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) || column as usize + d as usize > NUM_TILES_PER_ROW {
                        return Err(ChessError::InvalidFen(format!(
                            "rank {rank_str} covers more than 8 files"
                        )));
                    }
                    column += d as u8;
                    continue;
                }
                let kind = PieceKind::from_symbol(ch)
                    .ok_or_else(|| ChessError::InvalidFen(format!("invalid piece char: {ch}")))?;
                let side = if ch.is_ascii_uppercase() {
                    Alliance::White
                } else {
                    Alliance::Black
                };
                let at = Coordinate::from_row_column(row as u8, column)
                    .ok_or_else(|| ChessError::InvalidFen(format!("too many files in rank {rank_str}")))?;
                let first_move = match kind {
                    PieceKind::King => {
                        at == king_home(side)
                            && CASTLING_CORNERS
                                .iter()
                                .any(|&(flag, s, _)| s == side && castle_part.contains(flag))
                    }
                    PieceKind::Rook => CASTLING_CORNERS.iter().any(|&(flag, s, corner)| {
                        s == side && at == Coordinate::at(corner) && castle_part.contains(flag)
                    }),
                    _ => on_home_square(kind, side, at),
                };
                builder.set_piece(Piece::new(kind, side, at, first_move));
                column += 1;
            }
            if column as usize != NUM_TILES_PER_ROW {
                return Err(ChessError::InvalidFen(format!(
                    "rank {rank_str} covers {column} files"
                )));
            }
        }

        if ep_part != "-" {
            let target = Coordinate::from_algebraic(ep_part)
                .ok_or_else(|| ChessError::InvalidFen(format!("invalid en-passant square: {ep_part}")))?;
            let jumper = side_to_move.opponent();
            let pawn = target
                .offset(8 * jumper.direction())
                .and_then(|at| builder.piece_at(at))
                .filter(|p| p.is_pawn() && p.side() == jumper)
                .ok_or_else(|| {
                    ChessError::InvalidFen(format!("no pawn to capture en passant on {ep_part}"))
                })?;
            builder.set_en_passant_pawn(pawn);
        }

        builder.set_move_maker(side_to_move);
        builder.build()
    }

    /// Render the position as FEN.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..NUM_TILES_PER_ROW as u8 {
            let mut empty = 0;
            for column in 0..NUM_TILES_PER_ROW as u8 {
                let at = Coordinate::at(row * NUM_TILES_PER_ROW as u8 + column);
                match self.piece_at(at) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.next_move_maker() {
            Alliance::White => 'w',
            Alliance::Black => 'b',
        });

        let castling: String = CASTLING_CORNERS
            .iter()
            .filter(|&&(_, side, corner)| {
                let king_ready = self
                    .piece_at(king_home(side))
                    .is_some_and(|k| k.is_king() && k.side() == side && k.is_first_move());
                let rook_ready = self
                    .piece_at(Coordinate::at(corner))
                    .is_some_and(|r| r.is_rook() && r.side() == side && r.is_first_move());
                king_ready && rook_ready
            })
            .map(|&(flag, _, _)| flag)
            .collect();
        fen.push(' ');
        fen.push_str(if castling.is_empty() { "-" } else { &castling });

        fen.push(' ');
        match self
            .en_passant_pawn()
            .and_then(|pawn| pawn.position().offset(pawn.side().opposite_direction() * 8))
        {
            Some(target) => fen.push_str(&target.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");
        fen
    }
}

/// Resolve `"e2e4"` (or `"e7e8q"`) against the side to move's candidate
/// moves. A promotion suffix other than `q` never matches, since pawns always
/// promote to a queen.
pub fn parse_coordinate_move(board: &Board, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return None;
    }
    let from = Coordinate::from_algebraic(&txt[0..2])?;
    let to = Coordinate::from_algebraic(&txt[2..4])?;
    let mv = Move::create_from_coordinates(board, from, to)?;
    match txt[4..].chars().next() {
        None => Some(mv),
        Some('q' | 'Q') if mv.is_promotion() => Some(mv),
        Some(_) => None,
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
