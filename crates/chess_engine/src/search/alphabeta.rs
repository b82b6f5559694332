//! Recursive alpha-beta

use super::{terminal_score, Search};
use crate::board::Board;
use crate::evaluation::evaluate;
use crate::move_gen::all_moves;
use crate::types::{Color, Score};

pub(super) fn alphabeta(
    search: &mut Search,
    board: &Board,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> Score {
    search.nodes += 1;

    if depth == 0 {
        return evaluate(board);
    }

    let color = if maximizing { Color::Black } else { Color::White };
    let moves = all_moves(board, color);
    if moves.is_empty() {
        return terminal_score(maximizing);
    }

    let mut best = if maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };

    for mv in moves {
        let child = board.clone_with_move(mv.from, mv.to);
        let score = alphabeta(search, &child, depth - 1, alpha, beta, !maximizing);

        if maximizing {
            best = best.max(score);
            if search.pruning {
                alpha = alpha.max(score);
            }
        } else {
            best = best.min(score);
            if search.pruning {
                beta = beta.min(score);
            }
        }

        if search.pruning && beta <= alpha {
            search.cutoffs += 1;
            break;
        }
    }

    best
}
