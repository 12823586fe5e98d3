//! Chess rules on immutable boards.
//!
//! A [`Board`] is a 64-tile snapshot that generates both sides' moves when it
//! is assembled. [`Player`] views filter those moves for king safety and
//! [`Player::make_move`] returns a fresh board inside a [`MoveTransition`];
//! nothing is ever mutated in place.
//!
//! ```
//! use chess_rules::{Board, Coordinate, Move, MoveStatus};
//!
//! let board = Board::standard();
//! let e2 = Coordinate::from_algebraic("e2").unwrap();
//! let e4 = Coordinate::from_algebraic("e4").unwrap();
//! let mv = Move::create_from_coordinates(&board, e2, e4).unwrap();
//! let transition = board.current_player().make_move(&mv);
//! assert_eq!(transition.status(), MoveStatus::Done);
//! ```

pub mod board;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod piece;
pub mod player;
pub mod tables;
pub mod tile;
pub mod types;

pub use board::{Board, BoardBuilder};
pub use error::ChessError;
pub use moves::{CastleMove, Move};
pub use notation::{STARTING_FEN, parse_coordinate_move};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use player::{
    MoveStatus, MoveTransition, Player, PlayerStatus, calculate_attacks_on_tile,
};
pub use tile::Tile;
pub use types::{Alliance, Coordinate, PieceKind};
