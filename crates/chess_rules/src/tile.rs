use std::fmt;

use crate::piece::Piece;
use crate::types::Coordinate;

/// One board cell. Boards are rebuilt wholesale, so tiles never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty(Coordinate),
    Occupied(Coordinate, Piece),
}

impl Tile {
    pub fn new(coordinate: Coordinate, piece: Option<Piece>) -> Self {
        match piece {
            Some(piece) => Tile::Occupied(coordinate, piece),
            None => Tile::Empty(coordinate),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            Tile::Empty(c) | Tile::Occupied(c, _) => *c,
        }
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(piece),
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(..))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "-"),
            Tile::Occupied(_, piece) => write!(f, "{piece}"),
        }
    }
}
