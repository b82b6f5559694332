//! Game controller - the state machine behind a single-player game
//!
//! Owns the one [`GameSession`] and is the only code that mutates it. Front
//! ends call the operations below and read [`GameController::snapshot`];
//! nothing here calls back into presentation code.
//!
//! # Turn flow
//!
//! 1. The human (White) picks a piece and a destination with
//!    [`GameController::select_square`]
//! 2. The move is applied and Black is to move
//! 3. [`GameController::begin_thinking`] hands out a [`ThinkRequest`] and
//!    records its ticket as pending
//! 4. The search result comes back through
//!    [`GameController::complete_thinking`]; a result whose ticket is no
//!    longer pending is dropped
//!
//! Pausing and resetting clear the pending ticket. Every applied move
//! changes the ply, every start/reset changes the epoch and every request
//! gets a fresh serial, so any search still in flight can only produce a
//! stale ticket.

use crate::core::GameSettings;
use crate::game::ai::{Difficulty, ThinkRequest, ThinkTicket};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{ClockTick, GameClock, MoveRecord};
use crate::game::session::GameSession;
use crate::game::snapshot::{CapturedView, ClockView, GameSnapshot};
use crate::game::status::GameStatus;
use crate::game::{CAPTURE_SCORE_MULTIPLIER, COMPUTER_COLOR, HUMAN_COLOR, WIN_BONUS};
use chess_engine::{has_any_move, is_legal, legal_destinations, Board, Color, Move, Square};
use tracing::{debug, info, warn};

/// What a click on a square did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Not the human's turn, no game, or nothing selectable
    Ignored,
    /// A friendly piece is now selected
    Selected { square: Square, targets: Vec<Square> },
    /// The selection was cleared
    Deselected,
    /// The selected piece moved
    Moved(MoveRecord),
}

/// What a clock tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game not playing; nothing changed
    Idle,
    Counted { color: Color, remaining: u32 },
    TimedOut { loser: Color },
}

/// What happened to a finished search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThinkingOutcome {
    Applied(MoveRecord),
    /// The ticket was no longer pending
    Discarded,
    /// The computer had no move to play
    NoMove,
}

/// The single-player game state machine
#[derive(Debug)]
pub struct GameController {
    settings: GameSettings,
    session: Option<GameSession>,
    epoch: u64,
    next_serial: u64,
    pending: Option<ThinkTicket>,
}

impl GameController {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            session: None,
            epoch: 0,
            next_serial: 0,
            pending: None,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.session.as_ref().map_or(GameStatus::Menu, |session| session.status)
    }

    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a new game from the menu
    pub fn start(&mut self, difficulty: Difficulty) -> GameResult<()> {
        let clock = GameClock::new(
            self.settings.initial_clock_seconds(),
            self.settings.increment_seconds,
        );
        self.start_session(GameSession::new(difficulty, clock))
    }

    /// Start from a prepared session (custom position, clocks or side to move)
    pub fn start_session(&mut self, mut session: GameSession) -> GameResult<()> {
        if let Some(current) = &self.session {
            return Err(GameError::InvalidStateTransition {
                message: format!("cannot start a game while {:?}", current.status),
            });
        }

        session.status = GameStatus::Playing;
        self.epoch += 1;
        self.pending = None;
        info!(
            "[GAME] New game | Difficulty: {} | Clock: {}s +{}s | {} to move",
            session.difficulty,
            session.clock.white_seconds,
            session.clock.increment_seconds,
            session.side_to_move
        );
        finish_if_stuck(&mut session);
        self.session = Some(session);
        Ok(())
    }

    /// Handle a click on `square` by the human
    pub fn select_square(&mut self, square: Square) -> GameResult<SelectionOutcome> {
        let thinking = self.is_thinking();
        let Some(session) = self.session.as_mut() else {
            return Ok(SelectionOutcome::Ignored);
        };
        if !session.status.is_playing() || session.side_to_move != HUMAN_COLOR || thinking {
            return Ok(SelectionOutcome::Ignored);
        }

        let friendly = session.board.color_at(square) == Some(HUMAN_COLOR);

        let Some(selected) = session.selection.selected else {
            if !friendly {
                return Ok(SelectionOutcome::Ignored);
            }
            return Ok(select(session, square));
        };

        if selected == square {
            session.selection.clear();
            return Ok(SelectionOutcome::Deselected);
        }

        if session.selection.is_target(square) {
            session.selection.clear();
            let record = self.apply_move(Move::new(selected, square))?;
            return Ok(SelectionOutcome::Moved(record));
        }

        if friendly {
            Ok(select(session, square))
        } else {
            session.selection.clear();
            Ok(SelectionOutcome::Deselected)
        }
    }

    /// Apply a move for the side to move, with full bookkeeping.
    ///
    /// Either the whole move is applied or nothing changes.
    pub fn apply_move(&mut self, mv: Move) -> GameResult<MoveRecord> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveGame)?;
        if !session.status.is_playing() {
            return Err(GameError::InvalidStateTransition {
                message: format!("cannot move while {:?}", session.status),
            });
        }

        let piece = session.board.piece_at(mv.from).ok_or(GameError::PieceNotFound {
            row: mv.from.row(),
            col: mv.from.col(),
        })?;
        let mover = session.side_to_move;
        if piece.color != mover {
            return Err(GameError::NotYourTurn {
                expected: mover,
                found: piece.color,
            });
        }
        if !is_legal(&session.board, mv.from, mv.to) {
            return Err(GameError::InvalidMove {
                message: format!("{} cannot move {}", piece.symbol(), mv),
            });
        }

        let captured = session.board.piece_at(mv.to);
        session.board = session.board.clone_with_move(mv.from, mv.to);

        if let Some(taken) = captured {
            session.captured.add_capture(taken);
            if mover == HUMAN_COLOR {
                session.score += CAPTURE_SCORE_MULTIPLIER * taken.kind.value();
            }
        }

        let record = MoveRecord {
            piece,
            from: mv.from,
            to: mv.to,
            captured,
        };
        session.history.add_move(record);
        session.clock.apply_increment(mover);
        session.selection.clear();
        session.side_to_move = mover.opposite();
        self.pending = None;

        info!("[GAME] {} played {} | Score: {}", mover, record, session.score);
        finish_if_stuck(session);

        Ok(record)
    }

    /// Playing → Paused
    pub fn pause(&mut self) -> GameResult<()> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveGame)?;
        if !session.status.is_playing() {
            return Err(GameError::InvalidStateTransition {
                message: format!("cannot pause while {:?}", session.status),
            });
        }
        session.status = GameStatus::Paused;
        if let Some(ticket) = self.pending.take() {
            debug!("[GAME] Pause drops pending search for ply {}", ticket.ply);
        }
        info!("[GAME] Paused");
        Ok(())
    }

    /// Paused → Playing
    pub fn resume(&mut self) -> GameResult<()> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveGame)?;
        if session.status != GameStatus::Paused {
            return Err(GameError::InvalidStateTransition {
                message: format!("cannot resume while {:?}", session.status),
            });
        }
        session.status = GameStatus::Playing;
        info!("[GAME] Resumed");
        Ok(())
    }

    /// Discard the session and go back to the menu. Valid from any state.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            info!("[GAME] Reset to menu");
        }
        self.epoch += 1;
        self.pending = None;
    }

    /// Advance the clock of the side to move by one second
    pub fn tick(&mut self) -> TickOutcome {
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Idle;
        };
        if !session.status.is_playing() {
            return TickOutcome::Idle;
        }

        let color = session.side_to_move;
        match session.clock.tick(color) {
            ClockTick::Running { remaining } => TickOutcome::Counted { color, remaining },
            ClockTick::Expired => {
                session.status = GameStatus::Timeout { loser: color };
                session.selection.clear();
                self.pending = None;
                info!("[CLOCK] {}", session.status.message());
                TickOutcome::TimedOut { loser: color }
            }
        }
    }

    /// Hand out a search request when the computer is to move.
    ///
    /// Returns `None` when it is not the computer's turn, the game is not
    /// playing, or a search is already pending.
    pub fn begin_thinking(&mut self) -> Option<ThinkRequest> {
        let session = self.session.as_ref()?;
        if !session.status.is_playing() || session.side_to_move != COMPUTER_COLOR || self.pending.is_some() {
            return None;
        }

        self.next_serial += 1;
        let ticket = ThinkTicket {
            epoch: self.epoch,
            ply: session.ply(),
            serial: self.next_serial,
        };
        self.pending = Some(ticket);
        debug!("[AI] Search requested for ply {} at depth {}", ticket.ply, session.difficulty.depth());

        Some(ThinkRequest {
            ticket,
            board: session.board,
            color: COMPUTER_COLOR,
            depth: session.difficulty.depth(),
        })
    }

    /// Apply a finished search if its ticket is still pending
    pub fn complete_thinking(&mut self, ticket: ThinkTicket, mv: Option<Move>) -> GameResult<ThinkingOutcome> {
        if self.pending != Some(ticket) {
            debug!("[AI] Discarding stale result for epoch {} ply {}", ticket.epoch, ticket.ply);
            return Ok(ThinkingOutcome::Discarded);
        }
        self.pending = None;

        match mv {
            Some(mv) => Ok(ThinkingOutcome::Applied(self.apply_move(mv)?)),
            None => {
                warn!("[AI] Search returned no move");
                if let Some(session) = self.session.as_mut() {
                    finish_if_stuck(session);
                }
                Ok(ThinkingOutcome::NoMove)
            }
        }
    }

    /// Forget a pending search that will never report back
    pub fn cancel_thinking(&mut self, ticket: ThinkTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Current state as a plain value
    pub fn snapshot(&self) -> GameSnapshot {
        let Some(session) = &self.session else {
            let seconds = self.settings.initial_clock_seconds();
            return GameSnapshot {
                status: GameStatus::Menu,
                board: Board::initial().cells(),
                side_to_move: HUMAN_COLOR,
                clocks: ClockView {
                    white: seconds,
                    black: seconds,
                },
                score: 0,
                captured: CapturedView::default(),
                history: Vec::new(),
                is_thinking: false,
                difficulty: None,
                selected: None,
                targets: Vec::new(),
                material_advantage: 0,
            };
        };

        GameSnapshot {
            status: session.status,
            board: session.board.cells(),
            side_to_move: session.side_to_move,
            clocks: ClockView {
                white: session.clock.white_seconds,
                black: session.clock.black_seconds,
            },
            score: session.score,
            captured: CapturedView {
                white: session.captured.white_captured.clone(),
                black: session.captured.black_captured.clone(),
            },
            history: session.history.moves().to_vec(),
            is_thinking: self.is_thinking(),
            difficulty: Some(session.difficulty),
            selected: session.selection.selected,
            targets: session.selection.targets.clone(),
            material_advantage: session.captured.material_advantage(),
        }
    }
}

/// End a playing game whose side to move has no legal move; the other side wins
fn finish_if_stuck(session: &mut GameSession) {
    if !session.status.is_playing() || has_any_move(&session.board, session.side_to_move) {
        return;
    }

    let winner = session.side_to_move.opposite();
    session.status = GameStatus::Finished { winner };
    session.selection.clear();
    if winner == HUMAN_COLOR {
        session.score += WIN_BONUS;
    }
    info!("[GAME] {} | Final score: {}", session.status.message(), session.score);
}

fn select(session: &mut GameSession, square: Square) -> SelectionOutcome {
    let targets = legal_destinations(&session.board, square);
    session.selection.select(square, targets.clone());
    SelectionOutcome::Selected { square, targets }
}
