//! Minimax search with alpha-beta pruning
//!
//! The evaluator is Black-positive, so Black is the maximizing side and
//! White the minimizing one. The search is a plain depth-limited minimax:
//!
//! - `depth == 0` returns [`evaluate`] directly
//! - a side with no moves returns [`TERMINAL_SCORE`] (positive when Black is
//!   stuck, negative when White is stuck)
//! - otherwise every generated move is tried on a copied board
//!
//! Boards are `Copy`, so each ply works on its own value and the caller's
//! board is never touched. Depth is bounded by the difficulty table of the
//! caller, so the recursion stays shallow.
//!
//! # Example
//!
//! ```rust,ignore
//! use chess_engine::{best_move, Board, Color};
//!
//! let board = Board::initial();
//! let reply = best_move(&board, Color::Black, 3);
//! ```

mod alphabeta;


use crate::board::Board;
use crate::constants::TERMINAL_SCORE;
use crate::evaluation::evaluate;
use crate::move_gen::all_moves;
use crate::types::{Color, Move, Score};

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Best move for the side to move, `None` when it has no moves
    pub best_move: Option<Move>,
    /// Score of the best line (Black-positive)
    pub score: Score,
    /// Nodes visited
    pub nodes: u64,
    /// Sibling cutoffs taken by alpha-beta
    pub cutoffs: u64,
}

/// Search driver with node statistics.
///
/// `Search::new()` prunes with alpha-beta; [`Search::full_width`] explores
/// every node and is kept for comparing results.
#[derive(Debug, Clone)]
pub struct Search {
    pruning: bool,
    nodes: u64,
    cutoffs: u64,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    pub fn new() -> Self {
        Self {
            pruning: true,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Search without pruning
    pub fn full_width() -> Self {
        Self {
            pruning: false,
            ..Self::new()
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// Score `board` to `depth` plies. `maximizing` is true when Black moves.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Score {
        alphabeta::alphabeta(self, board, depth, alpha, beta, maximizing)
    }

    /// Pick the best move for `color` at `depth`.
    ///
    /// Ties keep the earliest move in generator order.
    pub fn best_move(&mut self, board: &Board, color: Color, depth: u32) -> SearchOutcome {
        let maximizing = color == Color::Black;
        let moves = all_moves(board, color);
        self.nodes += 1;

        if moves.is_empty() {
            return SearchOutcome {
                best_move: None,
                score: terminal_score(maximizing),
                nodes: self.nodes,
                cutoffs: self.cutoffs,
            };
        }

        let mut alpha = Score::NEG_INFINITY;
        let mut beta = Score::INFINITY;
        let mut best: Option<(Move, Score)> = None;

        for mv in moves {
            let child = board.clone_with_move(mv.from, mv.to);
            let score = self.minimax(&child, depth.saturating_sub(1), alpha, beta, !maximizing);

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }

            if self.pruning {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        SearchOutcome {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or_else(|| evaluate(board), |(_, score)| score),
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }
}

/// Score for a side left without moves
pub(crate) fn terminal_score(maximizing: bool) -> Score {
    if maximizing {
        TERMINAL_SCORE
    } else {
        -TERMINAL_SCORE
    }
}

/// Minimax value of `board` with alpha-beta pruning
pub fn minimax(board: &Board, depth: u32, alpha: Score, beta: Score, maximizing: bool) -> Score {
    Search::new().minimax(board, depth, alpha, beta, maximizing)
}

/// Best move for `color`, or `None` when `color` has no moves
pub fn best_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    Search::new().best_move(board, color, depth).best_move
}
