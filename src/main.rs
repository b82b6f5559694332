use anyhow::{Context, Result};
use arcade_chess::core::{init_logging, load_settings, save_settings, TimeControl};
use arcade_chess::game::{Difficulty, GameRunner, GameSnapshot, SelectionOutcome};
use arcade_chess::ui::{parse_command, render, Command, HELP};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Play chess against the computer in the terminal
#[derive(Parser, Debug)]
#[command(name = "arcade-chess", version, about)]
struct Args {
    /// Difficulty used by `start` without an argument
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Five-minute clocks instead of ten
    #[arg(long)]
    pro: bool,

    /// Seconds added after each move
    #[arg(long)]
    increment: Option<u32>,

    /// Settings file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// Redraw only when something other than the clocks changed
fn needs_redraw(previous: &GameSnapshot, current: &GameSnapshot) -> bool {
    previous.status != current.status
        || previous.history.len() != current.history.len()
        || previous.selected != current.selected
        || previous.is_thinking != current.is_thinking
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let mut settings = load_settings(args.config.as_deref()).context("loading settings")?;
    if let Some(difficulty) = args.difficulty {
        settings.default_difficulty = difficulty;
    }
    if args.pro {
        settings.time_control = TimeControl::Pro;
    }
    if let Some(increment) = args.increment {
        settings.increment_seconds = increment;
    }
    settings.validate().context("invalid settings")?;
    if args.save_settings {
        save_settings(&settings, args.config.as_deref()).context("saving settings")?;
    }

    info!(
        "[GAME] Arcade Chess | {:?} clock, +{}s | default difficulty {}",
        settings.time_control, settings.increment_seconds, settings.default_difficulty
    );

    let default_difficulty = settings.default_difficulty;
    let runner = GameRunner::spawn(settings);

    let mut snapshots = runner.subscribe();
    let printer = tokio::spawn(async move {
        let mut previous = snapshots.borrow_and_update().clone();
        println!("{}", render(&previous));
        while snapshots.changed().await.is_ok() {
            let current = snapshots.borrow_and_update().clone();
            if needs_redraw(&previous, &current) {
                println!("{}", render(&current));
            }
            previous = current;
        }
    });

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let result = match command {
            Command::Start(difficulty) => runner.start(difficulty.unwrap_or(default_difficulty)),
            Command::Select(square) => runner.select_square(square).map(|outcome| {
                if outcome == SelectionOutcome::Ignored {
                    println!("Nothing to select on {square}");
                }
            }),
            Command::Pause => runner.pause(),
            Command::Resume => runner.resume(),
            Command::Reset => {
                runner.reset();
                Ok(())
            }
            Command::Board => {
                println!("{}", render(&runner.snapshot()));
                Ok(())
            }
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Quit => break,
        };

        if let Err(e) = result {
            warn!("[GAME] {}", e);
            println!("{e}");
        }
    }

    drop(runner);
    printer.abort();
    Ok(())
}
