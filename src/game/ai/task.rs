//! Background move computation
//!
//! A search never runs on the async runtime's worker threads: [`think`]
//! sleeps for the artificial delay, then moves the search onto
//! `spawn_blocking`. The request owns its board copy, so the live game board
//! is never shared with the search.

use crate::game::error::{GameError, GameResult};
use chess_engine::{Board, Color, Move, Score, Search};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Identifies one outstanding computer search.
///
/// `epoch` changes on every start and reset, `ply` on every applied move and
/// `serial` on every request, so a result computed for an older position, or
/// by a search that was abandoned on pause, never matches the pending ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThinkTicket {
    pub epoch: u64,
    pub ply: u32,
    pub serial: u64,
}

/// Everything the search needs, detached from the live session
#[derive(Debug, Clone, Copy)]
pub struct ThinkRequest {
    pub ticket: ThinkTicket,
    pub board: Board,
    pub color: Color,
    pub depth: u32,
}

/// Result of a computer search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiMove {
    pub ticket: ThinkTicket,
    /// `None` when the computer had no legal move
    pub mv: Option<Move>,
    pub score: Score,
    pub depth: u32,
    pub nodes: u64,
    pub cutoffs: u64,
    pub thinking_time: Duration,
}

/// Run the search synchronously
pub fn compute_ai_move(request: &ThinkRequest) -> AiMove {
    let start = Instant::now();
    let mut search = Search::new();
    let outcome = search.best_move(&request.board, request.color, request.depth);
    let thinking_time = start.elapsed();

    match outcome.best_move {
        Some(mv) => info!(
            "[AI] Best move {} | Score={:.2} | Depth={} | Nodes={} | Cutoffs={} | Time={:.3}s",
            mv,
            outcome.score,
            request.depth,
            outcome.nodes,
            outcome.cutoffs,
            thinking_time.as_secs_f64()
        ),
        None => info!("[AI] {} has no legal move", request.color),
    }

    AiMove {
        ticket: request.ticket,
        mv: outcome.best_move,
        score: outcome.score,
        depth: request.depth,
        nodes: outcome.nodes,
        cutoffs: outcome.cutoffs,
        thinking_time,
    }
}

/// Wait `delay`, then search on a blocking thread.
///
/// Cancelling the future (aborting its task) drops the result; a search
/// already running on the blocking pool finishes and is thrown away.
pub async fn think(request: ThinkRequest, delay: Duration) -> GameResult<AiMove> {
    debug!(
        "[AI] Thinking for {:?} before searching ply {} at depth {}",
        delay, request.ticket.ply, request.depth
    );
    tokio::time::sleep(delay).await;

    tokio::task::spawn_blocking(move || compute_ai_move(&request))
        .await
        .map_err(|e| GameError::EngineTask {
            message: e.to_string(),
        })
}
