//! Command interpreter behind the stdin loop. One `Session` owns the live
//! board; every command either reads it or swaps in the board returned by a
//! `Done` transition.

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::{debug, info};

use chess_rules::{
    Alliance, Board, ChessError, Coordinate, Move, MoveStatus, PlayerStatus, parse_coordinate_move,
};

use crate::config::CliConfig;

const HELP: &str = "\
commands:
  new                 start from the standard position
  fen <fen>           load a position
  board               print the board
  moves               list the side to move's legal moves
  move <from><to>     play a move, e.g. `move e2e4` or `move e2 e4`
  status              normal, check, checkmate or stalemate
  json                print a JSON snapshot of the position
  quit                leave";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Quit,
}

/// JSON view of the live position.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub fen: String,
    pub side_to_move: Alliance,
    pub status: PlayerStatus,
    pub legal_moves: Vec<String>,
}

pub struct Session {
    board: Board,
    config: CliConfig,
}

impl Session {
    pub fn new(config: CliConfig) -> Self {
        Self {
            board: Board::standard(),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run one input line. Failures are reported in the reply text and never
    /// end the session.
    pub fn execute(&mut self, line: &str) -> Reply {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Reply::Continue(String::new());
        };
        let args: Vec<&str> = parts.collect();

        let result = match command {
            "new" => {
                self.board = Board::standard();
                info!("new game");
                Ok("new game, white to move".to_string())
            }
            "fen" => self.load_fen(&args),
            "board" => Ok(self.board.to_string().trim_end().to_string()),
            "moves" => Ok(legal_move_names(&self.board).join(" ")),
            "move" => self.play(&args),
            "status" => Ok(self.status_line()),
            "json" => self.snapshot_json(),
            "help" => Ok(HELP.to_string()),
            "quit" | "exit" => return Reply::Quit,
            other => Err(anyhow!("unknown command `{other}`, try `help`")),
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(e) => {
                debug!(command, error = %e, "command failed");
                Reply::Continue(format!("error: {e:#}"))
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let player = self.board.current_player();
        Snapshot {
            fen: self.board.to_fen(),
            side_to_move: player.alliance(),
            status: player.status(),
            legal_moves: legal_move_names(&self.board),
        }
    }

    fn load_fen(&mut self, args: &[&str]) -> Result<String> {
        if args.is_empty() {
            bail!("usage: fen <fen>");
        }
        let fen = args.join(" ");
        self.board = Board::from_fen(&fen)?;
        info!(fen = %fen, "position loaded");
        Ok(self.status_line())
    }

    fn play(&mut self, args: &[&str]) -> Result<String> {
        let text = args.concat();
        let Some(mv) = parse_coordinate_move(&self.board, &text) else {
            let (Some(from), Some(to)) = (text.get(0..2), text.get(2..4)) else {
                bail!("usage: move <from><to>, e.g. move e2e4");
            };
            let (from, to) = (parse_square(from)?, parse_square(to)?);
            return Err(ChessError::NoSuchMove { from, to }.into());
        };
        let transition = self.board.current_player().make_move(&mv);
        let status = transition.status();
        debug!(mv = %mv, %status, "move attempted");
        if status != MoveStatus::Done {
            return Ok(format!("{}: {status}", move_name(&mv)));
        }

        self.board = transition.into_board();
        let mut reply = format!("{}: {status}, {}", move_name(&mv), self.status_line());
        if self.config.show_board {
            reply.push('\n');
            reply.push_str(self.board.to_string().trim_end());
        }
        Ok(reply)
    }

    fn status_line(&self) -> String {
        let player = self.board.current_player();
        format!("{} to move: {}", player.alliance(), player.status())
    }

    fn snapshot_json(&self) -> Result<String> {
        let snapshot = self.snapshot();
        let json = if self.config.pretty_json {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        Ok(json)
    }
}

fn parse_square(name: &str) -> Result<Coordinate> {
    Coordinate::from_algebraic(name).with_context(|| format!("invalid square `{name}`"))
}

/// Coordinate notation, castles included, so every listed move can be typed back.
fn move_name(mv: &Move) -> String {
    let suffix = if mv.is_promotion() { "q" } else { "" };
    format!("{}{}{suffix}", mv.current_coordinate(), mv.destination())
}

fn legal_move_names(board: &Board) -> Vec<String> {
    let mut names: Vec<String> = board
        .current_player()
        .legal_moves()
        .iter()
        .map(move_name)
        .collect();
    names.sort();
    names
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
