//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Moves at even history indices (goes first).
    First,
    /// Moves at odd history indices.
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the owner of the move at a zero-based history index.
    pub fn for_move(index: usize) -> Self {
        if index % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }
}

/// Kind of line a completed three-in-a-row lies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum WinningStreak {
    /// All three cells share a row.
    #[display("horizontal")]
    Horizontal,
    /// All three cells share a column.
    #[display("vertical")]
    Vertical,
    /// The cells form either diagonal.
    #[display("diagonal")]
    Diagonal,
}

impl WinningStreak {
    /// Canonical winning lines of this kind.
    pub fn lines(self) -> &'static [[Position; 3]] {
        use Position::*;

        const ROWS: [[Position; 3]; 3] = [
            [TopLeft, TopCenter, TopRight],
            [MiddleLeft, Center, MiddleRight],
            [BottomLeft, BottomCenter, BottomRight],
        ];
        const COLUMNS: [[Position; 3]; 3] = [
            [TopLeft, MiddleLeft, BottomLeft],
            [TopCenter, Center, BottomCenter],
            [TopRight, MiddleRight, BottomRight],
        ];
        const DIAGONALS: [[Position; 3]; 2] = [
            [TopLeft, Center, BottomRight],
            [TopRight, Center, BottomLeft],
        ];

        match self {
            WinningStreak::Horizontal => &ROWS,
            WinningStreak::Vertical => &COLUMNS,
            WinningStreak::Diagonal => &DIAGONALS,
        }
    }
}

/// Current status of the game.
///
/// Recomputed from the full move history after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Game is running")]
    InProgress,
    /// No player holds a streak.
    #[display("Game ended up in a draw")]
    Draw,
    /// A player completed a streak.
    #[display("{} won on {} combination", _0, _1)]
    Win(Player, WinningStreak),
}

impl GameStatus {
    /// Every status value: in progress, draw, and one win per player and streak.
    pub fn all() -> Vec<GameStatus> {
        let wins = Player::iter().flat_map(|player| {
            WinningStreak::iter().map(move |streak| GameStatus::Win(player, streak))
        });

        [GameStatus::InProgress, GameStatus::Draw]
            .into_iter()
            .chain(wins)
            .collect()
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Win(player, _) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true for draw and win.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
