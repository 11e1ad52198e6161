//! Streaks - tic-tac-toe replay tool.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use streaks_tictactoe::{Game, GameStatus, Position, RuleSet, WinningStreak};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            moves,
            rules,
            strict,
        } => run_play(moves, rules, strict),
        Command::Statuses => {
            run_statuses();
            Ok(())
        }
        Command::Lines => {
            run_lines();
            Ok(())
        }
    }
}

/// Replay moves and print the status after each one
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_play(moves: Vec<Position>, rules: Option<PathBuf>, strict: bool) -> Result<()> {
    let rules = match rules {
        Some(path) => RuleSet::from_file(path)?,
        None if strict => RuleSet::strict(),
        None => RuleSet::reference(),
    };
    debug!(?rules, "Starting game");

    let mut game = Game::with_rules(rules);
    let mut last = None;
    for position in moves {
        let number = game.moves_made() + 1;
        match game.try_move(position) {
            Ok(status) => {
                println!("{:>2}. {} {}: {}", number, position.coordinate(), position, status);
                last = Some(status);
            }
            Err(e) => println!("    {} {}: rejected ({})", position.coordinate(), position, e),
        }
    }

    if let Some(status) = last {
        info!(%status, moves = game.moves_made(), "Replay finished");
    }
    Ok(())
}

/// Print every status description
fn run_statuses() {
    for status in GameStatus::all() {
        println!("{}", status);
    }
}

/// Print the canonical lines per streak kind
fn run_lines() {
    for streak in WinningStreak::iter() {
        for line in streak.lines() {
            let cells: Vec<String> = line.iter().map(|p| p.coordinate().to_string()).collect();
            println!("{:<10} {}", streak, cells.join(" "));
        }
    }
}
