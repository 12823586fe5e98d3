use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::error::ChessError;
use crate::moves::Move;
use crate::piece::Piece;
use crate::player::{Player, calculate_king_castles};
use crate::tables::{EIGHTH_ROW, FIRST_ROW, NUM_TILES, NUM_TILES_PER_ROW};
use crate::tile::Tile;
use crate::types::{Alliance, Coordinate, PieceKind};

/// Everything computed for one side when a board is assembled.
#[derive(Clone, Debug, Default)]
pub(crate) struct SideState {
    pub(crate) king: Option<Piece>,
    /// Pseudo-legal moves of every piece of the side, castles excluded.
    pub(crate) standard_moves: Vec<Move>,
    pub(crate) castles: Vec<Move>,
}

/// An immutable 64-tile snapshot. All move generation happens once, when the
/// board is assembled; everything downstream only reads.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: [Tile; NUM_TILES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    sides: [SideState; 2],
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Board {
    /// The standard starting position, white to move.
    pub fn standard() -> Self {
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = BoardBuilder::new();
        for (f, &kind) in back.iter().enumerate() {
            let f = f as u8;
            builder.set_piece(Piece::new(kind, Alliance::Black, Coordinate::at(f), true));
            builder.set_piece(Piece::new(PieceKind::Pawn, Alliance::Black, Coordinate::at(8 + f), true));
            builder.set_piece(Piece::new(PieceKind::Pawn, Alliance::White, Coordinate::at(48 + f), true));
            builder.set_piece(Piece::new(kind, Alliance::White, Coordinate::at(56 + f), true));
        }
        builder.set_move_maker(Alliance::White);
        builder.assemble()
    }

    pub fn tile(&self, c: Coordinate) -> &Tile {
        &self.tiles[c.index()]
    }

    /// Tile lookup by raw index, for callers that have not validated it.
    pub fn tile_at(&self, index: i32) -> Result<&Tile, ChessError> {
        Ok(self.tile(Coordinate::new(index)?))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn piece_at(&self, c: Coordinate) -> Option<&Piece> {
        self.tile(c).piece()
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    pub fn pieces(&self, side: Alliance) -> &[Piece] {
        match side {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    pub fn white_player(&self) -> Player<'_> {
        Player::new(self, Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        Player::new(self, Alliance::Black)
    }

    pub fn current_player(&self) -> Player<'_> {
        Player::new(self, self.next_move_maker)
    }

    pub fn player(&self, side: Alliance) -> Player<'_> {
        Player::new(self, side)
    }

    pub fn next_move_maker(&self) -> Alliance {
        self.next_move_maker
    }

    /// The pawn that double-stepped on the previous ply, if any.
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    /// Both sides' candidate moves, white first. Only the side to move may
    /// actually play its share.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.white_player()
            .pseudo_legal_moves()
            .chain(self.black_player().pseudo_legal_moves())
    }

    pub(crate) fn side_state(&self, side: Alliance) -> &SideState {
        &self.sides[side.idx()]
    }

    fn calculate_legal_moves(&self, pieces: &[Piece]) -> Vec<Move> {
        pieces
            .iter()
            .flat_map(|piece| piece.calculate_legal_moves(self))
            .collect()
    }
}

fn calculate_active_pieces(tiles: &[Tile], side: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.side() == side)
        .copied()
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(NUM_TILES_PER_ROW) {
            for tile in row {
                write!(f, "{:>3}", tile.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Staging area for a board: a sparse coordinate -> piece map, the side to
/// move and the en-passant pawn. Consumed once by [`BoardBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    config: HashMap<Coordinate, Piece>,
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `piece` on its own position, replacing whatever was there.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.config.insert(piece.position(), piece);
        self
    }

    pub fn set_move_maker(&mut self, side: Alliance) -> &mut Self {
        self.next_move_maker = side;
        self
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub(crate) fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.config.get(&at).copied()
    }

    /// Validate and assemble the board.
    ///
    /// Fails with [`ChessError::MalformedPosition`] unless each side has
    /// exactly one king, no pawn stands on a back rank, the en-passant pawn
    /// (if any) is a pawn of the side that just moved and is on the board, and
    /// the side that just moved is not left in check.
    pub fn build(self) -> Result<Board, ChessError> {
        for side in [Alliance::White, Alliance::Black] {
            let kings = self
                .config
                .values()
                .filter(|p| p.side() == side && p.is_king())
                .count();
            if kings != 1 {
                return Err(ChessError::MalformedPosition(format!(
                    "{side} has {kings} kings, expected exactly one"
                )));
            }
        }

        if let Some(pawn) = self.config.values().find(|p| {
            p.is_pawn() && (FIRST_ROW[p.position().index()] || EIGHTH_ROW[p.position().index()])
        }) {
            return Err(ChessError::MalformedPosition(format!(
                "pawn on back rank at {}",
                pawn.position()
            )));
        }

        if let Some(ep) = self.en_passant_pawn
            && (!ep.is_pawn()
                || ep.side() == self.next_move_maker
                || self.config.get(&ep.position()) != Some(&ep))
        {
            return Err(ChessError::MalformedPosition(format!(
                "en-passant pawn at {} does not match the board",
                ep.position()
            )));
        }

        let next = self.next_move_maker;
        let board = self.assemble();
        if board.player(next.opponent()).is_in_check() {
            return Err(ChessError::MalformedPosition(format!(
                "{} is in check but {next} is to move",
                next.opponent()
            )));
        }
        Ok(board)
    }

    /// Assemble without validation. Only used on the standard setup and on
    /// positions derived from a valid board by a move.
    pub(crate) fn assemble(self) -> Board {
        let tiles: [Tile; NUM_TILES] = std::array::from_fn(|i| {
            let c = Coordinate::at(i as u8);
            Tile::new(c, self.config.get(&c).copied())
        });
        let white_pieces = calculate_active_pieces(&tiles, Alliance::White);
        let black_pieces = calculate_active_pieces(&tiles, Alliance::Black);

        let mut board = Board {
            tiles,
            white_pieces,
            black_pieces,
            sides: Default::default(),
            next_move_maker: self.next_move_maker,
            en_passant_pawn: self.en_passant_pawn,
        };

        let white_moves = board.calculate_legal_moves(&board.white_pieces);
        let black_moves = board.calculate_legal_moves(&board.black_pieces);
        let white_castles = calculate_king_castles(&board, Alliance::White, &black_moves);
        let black_castles = calculate_king_castles(&board, Alliance::Black, &white_moves);

        trace!(
            next = %board.next_move_maker,
            white_moves = white_moves.len(),
            black_moves = black_moves.len(),
            "assembled board"
        );

        board.sides = [
            SideState {
                king: board.white_pieces.iter().find(|p| p.is_king()).copied(),
                standard_moves: white_moves,
                castles: white_castles,
            },
            SideState {
                king: board.black_pieces.iter().find(|p| p.is_king()).copied(),
                standard_moves: black_moves,
                castles: black_castles,
            },
        ];
        board
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
