//! Text rendering and command parsing

use crate::game::ai::Difficulty;
use crate::game::snapshot::GameSnapshot;
use crate::game::GameError;
use chess_engine::{Piece, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Prompt help text
pub const HELP: &str = "\
Commands:
  start [easy|medium|hard|expert|legend]   start a new game
  <square> | <row> <col>                    select a piece or its destination (e.g. e2, or 6 4)
  pause | resume                            pause or resume the game
  reset                                     back to the menu
  board                                     redraw the board
  help                                      this text
  quit                                      leave";

/// A line typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start(Option<Difficulty>),
    Select(Square),
    Pause,
    Resume,
    Reset,
    Board,
    Help,
    Quit,
}

/// Why a line could not be understood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("not a square: {0} (use e2 or `row col` with values 0-7)")]
    InvalidSquare(String),

    #[error(transparent)]
    Difficulty(#[from] GameError),
}

/// Parse one prompt line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Err(CommandError::Empty);
    };

    let command = match (head.to_ascii_lowercase().as_str(), rest) {
        ("start" | "new", []) => Command::Start(None),
        ("start" | "new", [difficulty]) => Command::Start(Some(difficulty.parse()?)),
        ("pause", []) => Command::Pause,
        ("resume", []) => Command::Resume,
        ("reset", []) => Command::Reset,
        ("board", []) => Command::Board,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        (_, [col]) => Command::Select(parse_row_col(head, col)?),
        (_, []) if head.len() == 2 => Command::Select(parse_square(head)?),
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };
    Ok(command)
}

/// Parse algebraic `e2` (file a-h, rank 1-8; rank 1 is row 7)
pub fn parse_square(text: &str) -> Result<Square, CommandError> {
    let invalid = || CommandError::InvalidSquare(text.to_string());
    let [file, rank] = text.as_bytes() else {
        return Err(invalid());
    };

    let file = file.to_ascii_lowercase();
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
        return Err(invalid());
    }
    Square::new(b'8' - rank, file - b'a').map_err(|_| invalid())
}

fn parse_row_col(row: &str, col: &str) -> Result<Square, CommandError> {
    let invalid = || CommandError::InvalidSquare(format!("{row} {col}"));
    let row: u8 = row.parse().map_err(|_| invalid())?;
    let col: u8 = col.parse().map_err(|_| invalid())?;
    Square::new(row, col).map_err(|_| invalid())
}

/// Format seconds as MM:SS
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn captured_list(kinds: &[PieceKind], owner: fn(PieceKind) -> Piece) -> String {
    if kinds.is_empty() {
        return "-".to_string();
    }
    kinds.iter().map(|&kind| owner(kind).symbol()).collect()
}

/// Board and status panel for one snapshot
pub struct Screen<'a>(pub &'a GameSnapshot);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;

        writeln!(f, "     0 1 2 3 4 5 6 7")?;
        for row in 0..8u8 {
            write!(f, "{} {} ", 8 - row, row)?;
            for col in 0..8u8 {
                let square = Square::at(row, col);
                let symbol = snapshot.piece_at(square).map_or('.', Piece::symbol);
                let marker = if snapshot.selected == Some(square) {
                    '['
                } else if snapshot.targets.contains(&square) {
                    '*'
                } else {
                    ' '
                };
                write!(f, "{marker}{symbol}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "     a b c d e f g h")?;
        writeln!(f)?;

        writeln!(f, "{}", snapshot.status.message())?;
        if let Some(difficulty) = snapshot.difficulty {
            writeln!(f, "Difficulty: {difficulty}")?;
        }
        writeln!(
            f,
            "White: {}   Black: {}",
            format_time(snapshot.clocks.white),
            format_time(snapshot.clocks.black)
        )?;
        writeln!(f, "Score: {}   Material: {:+}", snapshot.score, snapshot.material_advantage)?;
        writeln!(
            f,
            "Captured by White: {}   by Black: {}",
            captured_list(&snapshot.captured.white, Piece::black),
            captured_list(&snapshot.captured.black, Piece::white)
        )?;
        if let Some(last) = snapshot.last_move() {
            writeln!(f, "Last move: {last}")?;
        }
        if snapshot.is_thinking {
            writeln!(f, "Computer is thinking...")?;
        } else if snapshot.status.is_playing() {
            writeln!(f, "{} to move", snapshot.side_to_move)?;
        }
        Ok(())
    }
}

/// Draw the board and the status panel
pub fn render(snapshot: &GameSnapshot) -> String {
    Screen(snapshot).to_string()
}
