//! # Core engine types
//!
//! Plain value types shared by every engine module:
//!
//! - [`Color`] - White (human side) or Black (computer side)
//! - [`PieceKind`] / [`Piece`] - what stands on a square
//! - [`Square`] - a bounded `(row, col)` coordinate
//! - [`Move`] - a `from`/`to` pair
//!
//! ## Coordinates
//!
//! Row 0 is Black's back rank and row 7 is White's back rank, so White pawns
//! start on row 6 and advance towards row 0. Columns run 0-7 from left to
//! right as seen from White's side.
//!
//! A [`Square`] can only be built through validating constructors, so an
//! out-of-range coordinate never reaches the board or the move generator.

use crate::error::{ChessEngineError, ChessEngineResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Evaluation score, always from Black's point of view (positive favours Black)
pub type Score = f64;

/// Side of a piece or side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step (White moves up the board towards row 0)
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in pawns. The king is worth nothing: it can be captured
    /// like any other piece and losing it does not end the game by itself.
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Upper-case letter used in board text
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece token: kind plus color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, Color::White)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, Color::Black)
    }

    /// Board-text symbol: upper case for White, lower case for Black
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Inverse of [`Piece::symbol`]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let kind = PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == symbol.to_ascii_uppercase())?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(kind, color))
    }
}

/// A board coordinate with `row` and `col` both in `0..8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Validating constructor
    pub fn new(row: u8, col: u8) -> ChessEngineResult<Self> {
        if row < 8 && col < 8 {
            Ok(Self { row, col })
        } else {
            Err(ChessEngineError::InvalidSquare { row, col })
        }
    }

    /// Constructor for coordinates known to be on the board.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more. Usable in `const` items, where
    /// the check happens at compile time.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square out of range");
        Self { row, col }
    }

    /// Square from a row-major index in `0..64`
    pub fn from_index(index: usize) -> ChessEngineResult<Self> {
        if index < 64 {
            Ok(Self {
                row: (index / 8) as u8,
                col: (index % 8) as u8,
            })
        } else {
            Err(ChessEngineError::InvalidSquareIndex { index })
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..64`
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Every square in row-major order. Move generation relies on this order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }

    /// The square `(row + dr, col + dc)`, if it is on the board
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = ChessEngineError;

    fn try_from((row, col): (u8, u8)) -> ChessEngineResult<Self> {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A move from one square to another. Whatever stands on `to` is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
