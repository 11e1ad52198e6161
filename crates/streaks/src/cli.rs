//! Command-line interface for streaks.

use clap::{Parser, Subcommand};
use streaks_tictactoe::Position;

/// Streaks - replay tic-tac-toe games and report their status
#[derive(Parser, Debug)]
#[command(name = "streaks")]
#[command(about = "Replay tic-tac-toe move lists", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play positions on a fresh game, printing the status after each move
    Play {
        /// Positions as "row,col", board index 0-8, or label ("center")
        #[arg(required = true)]
        moves: Vec<Position>,

        /// Path to a TOML rules file
        #[arg(short, long, conflicts_with = "strict")]
        rules: Option<std::path::PathBuf>,

        /// Reject repeated cells and check every triple for a streak
        #[arg(long)]
        strict: bool,
    },

    /// List every game status description
    Statuses,

    /// List the winning lines of each streak kind
    Lines,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_moves() {
        let cli = Cli::try_parse_from(["streaks", "play", "1,1", "center", "8"]).unwrap();
        match cli.command {
            Command::Play { moves, rules, strict } => {
                assert_eq!(
                    moves,
                    vec![Position::TopLeft, Position::Center, Position::BottomRight]
                );
                assert!(rules.is_none());
                assert!(!strict);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_play_rejects_bad_position() {
        assert!(Cli::try_parse_from(["streaks", "play", "4,4"]).is_err());
    }

    #[test]
    fn test_rules_and_strict_conflict() {
        let parsed = Cli::try_parse_from(["streaks", "play", "--strict", "--rules", "r.toml", "1"]);
        assert!(parsed.is_err());
    }
}
