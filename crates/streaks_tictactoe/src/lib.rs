//! Tic-tac-toe game-state engine.
//!
//! Moves are submitted as bare [`Position`]s; the [`Game`] derives whose
//! move each one is from its place in the history, checks each player's
//! cells for a [`WinningStreak`], and reports a [`GameStatus`].
//!
//! # Example
//!
//! ```
//! use streaks_tictactoe::{Game, GameStatus, Player, Position, WinningStreak};
//!
//! let mut game = Game::new();
//! for position in [
//!     Position::TopLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::MiddleLeft,
//! ] {
//!     assert_eq!(game.submit_move(position), Some(GameStatus::InProgress));
//! }
//!
//! assert_eq!(
//!     game.submit_move(Position::BottomRight),
//!     Some(GameStatus::Win(Player::First, WinningStreak::Diagonal)),
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use config::{ConfigError, OccupiedPolicy, RuleSet, StreakWindow};
pub use game::{BOARD_CELLS, Game};
pub use position::{Coordinate, ParsePositionError, Position};
pub use rules::evaluate;
pub use types::{GameStatus, Player, WinningStreak};
