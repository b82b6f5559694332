//! Board model
//!
//! [`Board`] is a plain 8×8 value. It is `Copy`, so the search explores
//! branches by producing new boards with [`Board::clone_with_move`] and the
//! canonical game board is never touched during a search.
//!
//! Board text (used by tests and the terminal front end) is one line per row,
//! row 0 first, with `.` for an empty square, upper case for White and lower
//! case for Black. Whitespace inside a line is ignored.

use crate::constants::BACK_RANK;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8×8 grid of optional pieces, indexed `[row][col]`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

/// Color of a cell's occupant, `None` for an empty cell
#[inline]
pub fn color_of(cell: Option<Piece>) -> Option<Color> {
    cell.map(|piece| piece.color)
}

impl Board {
    /// Board with no pieces
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting position (Black on rows 0-1, White on rows 6-7)
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::black(kind));
            board.cells[1][col] = Some(Piece::black(PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::white(PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::white(kind));
        }
        board
    }

    /// Board holding exactly the listed pieces
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> Self {
        pieces
            .iter()
            .fold(Self::empty(), |board, &(square, piece)| {
                board.with_piece(square, Some(piece))
            })
    }

    /// Copy of the board with one cell replaced
    #[must_use]
    pub fn with_piece(mut self, square: Square, cell: Option<Piece>) -> Self {
        self.cells[square.row() as usize][square.col() as usize] = cell;
        self
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        color_of(self.piece_at(square))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// New board with the piece on `from` moved to `to`.
    ///
    /// Whatever stood on `to` is overwritten (captured) and `from` becomes
    /// empty. No legality check happens here.
    #[must_use]
    pub fn clone_with_move(&self, from: Square, to: Square) -> Board {
        let piece = self.piece_at(from);
        self.with_piece(from, None).with_piece(to, piece)
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// All 64 cells in row-major order
    pub fn cells(&self) -> Vec<Option<Piece>> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Number of pieces of one color
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color == color).count()
    }
}

impl FromStr for Board {
    type Err = ChessEngineError;

    fn from_str(text: &str) -> ChessEngineResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ChessEngineError::InvalidLayout {
                message: format!("expected 8 rows, found {}", rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != 8 {
                return Err(ChessEngineError::InvalidLayout {
                    message: format!("row {} has {} squares, expected 8", row, symbols.len()),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                if symbol == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(symbol).ok_or_else(|| ChessEngineError::InvalidLayout {
                    message: format!("unknown piece symbol '{}' at ({}, {})", symbol, row, col),
                })?;
                board.cells[row][col] = Some(piece);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::symbol))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "}}")
    }
}
