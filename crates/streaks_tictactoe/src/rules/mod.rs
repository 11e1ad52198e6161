//! Game rules for tic-tac-toe.
//!
//! Pure functions for classifying a player's cells. Rules are kept apart
//! from the engine so they can be tested in isolation.

pub mod win;

pub use win::{evaluate, find_streak};
