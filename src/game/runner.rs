//! Async game runner
//!
//! Wraps a [`GameController`] for use from a tokio runtime:
//!
//! - a clock task ticks the controller once per period (one second by
//!   default)
//! - the computer's turn runs as its own task: random thinking delay, then
//!   the search on a blocking thread, then the result goes back to the
//!   controller under the lock
//! - every change is published as a [`GameSnapshot`] on a watch channel
//!
//! The controller lock is a `parking_lot::Mutex` and is never held across an
//! `.await`. Pause and reset abort the thinking task; even when the abort
//! comes too late, the controller rejects the result by its ticket.
//!
//! All methods must be called from inside a tokio runtime.

use crate::core::{GameSettings, ThinkingDelay};
use crate::game::ai::{think, Difficulty, ThinkRequest};
use crate::game::controller::{GameController, SelectionOutcome, ThinkingOutcome, TickOutcome};
use crate::game::error::GameResult;
use crate::game::snapshot::GameSnapshot;
use chess_engine::Square;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error};

/// Default clock resolution
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

struct Shared {
    controller: Mutex<GameController>,
    snapshots: watch::Sender<GameSnapshot>,
    think_task: Mutex<Option<JoinHandle<()>>>,
    thinking_delay: ThinkingDelay,
}

impl Shared {
    fn publish(&self, controller: &GameController) {
        self.snapshots.send_replace(controller.snapshot());
    }

    fn abort_thinking(&self) {
        if let Some(handle) = self.think_task.lock().take() {
            handle.abort();
        }
    }

    /// Spawn the computer's turn if the controller asks for one
    fn schedule_thinking(self: &Arc<Self>, controller: &mut GameController) {
        let Some(request) = controller.begin_thinking() else {
            return;
        };

        let delay = self.thinking_delay.sample();
        let shared = Arc::clone(self);
        let handle = tokio::spawn(async move { shared.run_thinking(request, delay).await });

        if let Some(previous) = self.think_task.lock().replace(handle) {
            previous.abort();
        }
    }

    async fn run_thinking(&self, request: ThinkRequest, delay: Duration) {
        let result = think(request, delay).await;

        let mut controller = self.controller.lock();
        match result {
            Ok(ai_move) => match controller.complete_thinking(ai_move.ticket, ai_move.mv) {
                Ok(ThinkingOutcome::Discarded) => return,
                Ok(_) => {}
                Err(e) => error!("[AI] Computer move rejected: {}", e),
            },
            Err(e) => {
                error!("[AI] {}", e);
                controller.cancel_thinking(request.ticket);
            }
        }
        self.publish(&controller);
    }

    fn on_tick(&self) {
        let mut controller = self.controller.lock();
        match controller.tick() {
            TickOutcome::Idle => {}
            TickOutcome::Counted { .. } => self.publish(&controller),
            TickOutcome::TimedOut { .. } => {
                self.abort_thinking();
                self.publish(&controller);
            }
        }
    }
}

/// Handle to a running game
pub struct GameRunner {
    shared: Arc<Shared>,
    clock_task: JoinHandle<()>,
}

impl GameRunner {
    /// Start the clock task with a one-second tick
    pub fn spawn(settings: GameSettings) -> Self {
        Self::with_tick_period(settings, TICK_PERIOD)
    }

    /// Start the clock task with a custom tick period
    pub fn with_tick_period(settings: GameSettings, period: Duration) -> Self {
        let thinking_delay = settings.thinking_delay;
        let controller = GameController::new(settings);
        let (snapshots, _) = watch::channel(controller.snapshot());

        let shared = Arc::new(Shared {
            controller: Mutex::new(controller),
            snapshots,
            think_task: Mutex::new(None),
            thinking_delay,
        });

        let clock_shared = Arc::clone(&shared);
        let clock_task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                clock_shared.on_tick();
            }
        });

        debug!("[CLOCK] Clock task started with a {:?} period", period);
        Self { shared, clock_task }
    }

    /// Receive a snapshot after every change
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.shared.snapshots.subscribe()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.shared.controller.lock().snapshot()
    }

    pub fn settings(&self) -> GameSettings {
        self.shared.controller.lock().settings().clone()
    }

    pub fn start(&self, difficulty: Difficulty) -> GameResult<()> {
        let mut controller = self.shared.controller.lock();
        controller.start(difficulty)?;
        self.shared.schedule_thinking(&mut controller);
        self.shared.publish(&controller);
        Ok(())
    }

    pub fn select_square(&self, square: Square) -> GameResult<SelectionOutcome> {
        let mut controller = self.shared.controller.lock();
        let outcome = controller.select_square(square)?;
        if matches!(outcome, SelectionOutcome::Moved(_)) {
            self.shared.schedule_thinking(&mut controller);
        }
        self.shared.publish(&controller);
        Ok(outcome)
    }

    pub fn pause(&self) -> GameResult<()> {
        let mut controller = self.shared.controller.lock();
        controller.pause()?;
        self.shared.abort_thinking();
        self.shared.publish(&controller);
        Ok(())
    }

    pub fn resume(&self) -> GameResult<()> {
        let mut controller = self.shared.controller.lock();
        controller.resume()?;
        self.shared.schedule_thinking(&mut controller);
        self.shared.publish(&controller);
        Ok(())
    }

    pub fn reset(&self) {
        let mut controller = self.shared.controller.lock();
        controller.reset();
        self.shared.abort_thinking();
        self.shared.publish(&controller);
    }
}

impl Drop for GameRunner {
    fn drop(&mut self) {
        self.clock_task.abort();
        self.shared.abort_thinking();
    }
}
