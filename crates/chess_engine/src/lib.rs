//! Chess engine for single-player games against the computer
//!
//! A small, self-contained engine: an 8×8 board value, simplified move
//! legality, a Black-positive evaluator and a depth-limited minimax search
//! with alpha-beta pruning. It performs no I/O; callers hand it a board and
//! get back moves and scores.
//!
//! # Architecture
//!
//! - [`board`] - the [`Board`] value and its text format
//! - [`move_gen`] - per-piece legality and move generation
//! - [`evaluation`] - material plus pawn and knight piece-square tables
//! - [`search`] - minimax with alpha-beta pruning
//! - [`types`] - colors, pieces, squares and moves
//!
//! # Rule set
//!
//! No check detection, castling, en passant or promotion. Kings can be
//! captured like any other piece. A side with no legal move is the only
//! terminal condition the engine knows about.
//!
//! # Example
//!
//! ```rust,ignore
//! use chess_engine::{best_move, is_legal, Board, Color, Square};
//!
//! let board = Board::initial();
//! assert!(is_legal(&board, Square::at(6, 4), Square::at(4, 4)));
//!
//! let after = board.clone_with_move(Square::at(6, 4), Square::at(4, 4));
//! let reply = best_move(&after, Color::Black, 3);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use board::{color_of, Board};
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::evaluate;
pub use move_gen::{all_moves, has_any_move, is_legal, is_path_clear, legal_destinations};
pub use search::{best_move, minimax, Search, SearchOutcome};
pub use types::{Color, Move, Piece, PieceKind, Score, Square};
