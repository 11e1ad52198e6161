//! Tests for the enumerable game values and their descriptions.

use strum::IntoEnumIterator;
use streaks_tictactoe::{GameStatus, Player, WinningStreak};

#[test]
fn test_two_players() {
    assert_eq!(Player::iter().count(), 2);
}

#[test]
fn test_three_streak_kinds() {
    assert_eq!(WinningStreak::iter().count(), 3);
}

#[test]
fn test_eight_statuses() {
    let all = GameStatus::all();
    assert_eq!(all.len(), 2 + 2 * 3);
    for (i, a) in all.iter().enumerate() {
        assert!(all[i + 1..].iter().all(|b| b != a), "{:?} listed twice", a);
    }
}

#[test]
fn test_every_status_has_description() {
    for status in GameStatus::all() {
        assert!(!status.to_string().is_empty(), "{:?}", status);
    }
}

#[test]
fn test_descriptions() {
    assert_eq!(GameStatus::InProgress.to_string(), "Game is running");
    assert_eq!(GameStatus::Draw.to_string(), "Game ended up in a draw");
    assert_eq!(
        GameStatus::Win(Player::First, WinningStreak::Diagonal).to_string(),
        "First won on diagonal combination"
    );
}

#[test]
fn test_status_serializes() {
    let status = GameStatus::Win(Player::Second, WinningStreak::Horizontal);
    let json = serde_json::to_string(&status).unwrap();
    assert_eq!(json, r#"{"Win":["Second","horizontal"]}"#);
}
