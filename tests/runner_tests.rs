//! Async Runner Integration Tests
//!
//! Real tokio time with short thinking delays. Each test waits on the
//! snapshot channel with a timeout instead of sleeping for fixed periods
//! where it can.

use arcade_chess::core::{GameSettings, ThinkingDelay, TimeControl};
use arcade_chess::game::{Difficulty, GameRunner, GameSnapshot, GameStatus, SelectionOutcome};
use chess_engine::{Color, Square};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep, timeout};

/// Long enough that the clock never ticks during a test
const NO_TICKS: Duration = Duration::from_secs(3600);

fn settings(delay_ms: u64) -> GameSettings {
    GameSettings {
        thinking_delay: ThinkingDelay::fixed(delay_ms),
        ..Default::default()
    }
}

async fn wait_for(
    snapshots: &mut watch::Receiver<GameSnapshot>,
    condition: impl FnMut(&GameSnapshot) -> bool,
) -> GameSnapshot {
    timeout(Duration::from_secs(10), snapshots.wait_for(condition))
        .await
        .expect("condition reached in time")
        .expect("runner still publishing")
        .clone()
}

fn play_e4(runner: &GameRunner) {
    runner.select_square(Square::at(6, 4)).expect("select pawn");
    let outcome = runner.select_square(Square::at(4, 4)).expect("move pawn");
    assert!(matches!(outcome, SelectionOutcome::Moved(_)));
}

#[tokio::test]
async fn test_computer_replies_after_human_move() {
    let runner = GameRunner::with_tick_period(settings(50), NO_TICKS);
    let mut snapshots = runner.subscribe();

    runner.start(Difficulty::Easy).expect("start");
    play_e4(&runner);
    assert!(runner.snapshot().is_thinking, "Search pending right after the human move");

    let snapshot = wait_for(&mut snapshots, |s| s.history.len() == 2).await;
    assert_eq!(snapshot.side_to_move, Color::White);
    assert!(!snapshot.is_thinking);
    assert_eq!(snapshot.history[1].piece.color, Color::Black);
}

#[tokio::test]
async fn test_pause_drops_pending_reply() {
    let runner = GameRunner::with_tick_period(settings(200), NO_TICKS);
    let mut snapshots = runner.subscribe();

    runner.start(Difficulty::Easy).expect("start");
    play_e4(&runner);
    runner.pause().expect("pause");

    sleep(Duration::from_millis(500)).await;
    let paused = runner.snapshot();
    assert_eq!(paused.status, GameStatus::Paused);
    assert_eq!(paused.history.len(), 1, "No computer move while paused");
    assert!(!paused.is_thinking);

    runner.resume().expect("resume");
    let snapshot = wait_for(&mut snapshots, |s| s.history.len() == 2).await;
    assert_eq!(snapshot.status, GameStatus::Playing);
}

#[tokio::test]
async fn test_reset_drops_pending_reply() {
    let runner = GameRunner::with_tick_period(settings(200), NO_TICKS);

    runner.start(Difficulty::Easy).expect("start");
    play_e4(&runner);
    runner.reset();

    sleep(Duration::from_millis(500)).await;
    let snapshot = runner.snapshot();
    assert_eq!(snapshot.status, GameStatus::Menu);
    assert!(snapshot.history.is_empty());
}

#[tokio::test]
async fn test_clock_runs_for_side_to_move() {
    let runner = GameRunner::with_tick_period(settings(50), Duration::from_millis(10));
    let mut snapshots = runner.subscribe();

    runner.start(Difficulty::Easy).expect("start");
    let snapshot = wait_for(&mut snapshots, |s| s.clocks.white <= 597).await;
    assert_eq!(snapshot.clocks.black, 600, "Black's clock waits for its turn");
}

#[tokio::test]
async fn test_clock_runs_out() {
    let pro = GameSettings {
        time_control: TimeControl::Pro,
        ..settings(50)
    };
    let runner = GameRunner::with_tick_period(pro, Duration::from_millis(1));
    let mut snapshots = runner.subscribe();

    runner.start(Difficulty::Easy).expect("start");
    let snapshot = wait_for(&mut snapshots, |s| s.status.is_terminal()).await;

    assert_eq!(snapshot.status, GameStatus::Timeout { loser: Color::White });
    assert_eq!(snapshot.clocks.white, 0);
    assert_eq!(snapshot.clocks.black, 300);
}
