use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;
use crate::tables::{EIGHTH_ROW, FIRST_ROW, NUM_TILES, NUM_TILES_PER_ROW, is_valid_coordinate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alliance {
    #[default]
    White,
    Black,
}

impl Alliance {
    pub fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    /// Row delta of a pawn advance. White walks toward row 0, black toward row 7.
    pub fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    pub fn opposite_direction(self) -> i8 {
        -self.direction()
    }

    /// True when a pawn of this side reaching `c` must promote.
    pub fn is_promotion_square(self, c: Coordinate) -> bool {
        match self {
            Alliance::White => FIRST_ROW[c.index()],
            Alliance::Black => EIGHTH_ROW[c.index()],
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "white"),
            Alliance::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used in board dumps and FEN.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_symbol(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Nominal material value in centipawns.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }
}

/// A board square, 0..=63 in row-major order. Row 0 is black's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Coordinate(u8);

impl Coordinate {
    pub fn new(index: i32) -> Result<Self, ChessError> {
        if is_valid_coordinate(index) {
            Ok(Coordinate(index as u8))
        } else {
            Err(ChessError::InvalidCoordinate(index))
        }
    }

    /// Crate-internal constructor for indices already known to be on the board.
    pub(crate) const fn at(index: u8) -> Self {
        debug_assert!((index as usize) < NUM_TILES);
        Coordinate(index)
    }

    pub fn from_row_column(row: u8, column: u8) -> Option<Self> {
        if (row as usize) < NUM_TILES_PER_ROW && (column as usize) < NUM_TILES_PER_ROW {
            Some(Coordinate(row * NUM_TILES_PER_ROW as u8 + column))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> u8 {
        self.0 / NUM_TILES_PER_ROW as u8
    }

    pub fn column(self) -> u8 {
        self.0 % NUM_TILES_PER_ROW as u8
    }

    /// Raw index arithmetic. Returns `None` past either end of the board;
    /// column wraparound is the caller's concern (see [`crate::tables`]).
    pub fn offset(self, delta: i8) -> Option<Coordinate> {
        Coordinate::new(self.0 as i32 + delta as i32).ok()
    }

    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..NUM_TILES as u8).map(Coordinate)
    }

    /// Parse a square name such as `"e2"`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        // Rank 8 is row 0.
        Coordinate::from_row_column(b'8' - r, f - b'a')
    }

    pub fn to_algebraic(self) -> String {
        let f = (b'a' + self.column()) as char;
        let r = (b'8' - self.row()) as char;
        format!("{f}{r}")
    }
}

impl TryFrom<u8> for Coordinate {
    type Error = ChessError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Coordinate::new(value as i32)
    }
}

impl From<Coordinate> for u8 {
    fn from(c: Coordinate) -> u8 {
        c.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
