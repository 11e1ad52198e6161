//! Rule configuration for the game engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// What the engine does with a position that is already in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupiedPolicy {
    /// Accept the move and append it again.
    #[default]
    Permit,
    /// Refuse the move.
    Reject,
}

/// Which of a player's moves are checked for a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakWindow {
    /// Only the player's first three moves.
    #[default]
    FirstThree,
    /// Every combination of three of the player's moves.
    AnyTriple,
}

/// Engine rule set.
///
/// The default accepts repeated cells and only lets each player's first
/// three moves form a streak.
///
/// ```toml
/// occupied = "reject"
/// window = "any_triple"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSet {
    occupied: OccupiedPolicy,
    window: StreakWindow,
}

impl RuleSet {
    /// The default rule set.
    pub fn reference() -> Self {
        Self::default()
    }

    /// Rejects repeated cells and checks every triple.
    pub fn strict() -> Self {
        Self {
            occupied: OccupiedPolicy::Reject,
            window: StreakWindow::AnyTriple,
        }
    }

    /// Replaces the occupied-cell policy.
    pub fn with_occupied(mut self, occupied: OccupiedPolicy) -> Self {
        self.occupied = occupied;
        self
    }

    /// Replaces the streak window.
    pub fn with_window(mut self, window: StreakWindow) -> Self {
        self.window = window;
        self
    }

    /// Returns the occupied-cell policy.
    pub fn occupied(&self) -> OccupiedPolicy {
        self.occupied
    }

    /// Returns the streak window.
    pub fn window(&self) -> StreakWindow {
        self.window
    }

    /// Parses a rule set from TOML. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse rules: {}", e)))?;
        debug!(?rules, "Rules parsed");
        Ok(rules)
    }

    /// Loads a rule set from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading rules from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read rules file: {}", e)))?;

        let rules = Self::from_toml_str(&content)?;
        info!(occupied = ?rules.occupied, window = ?rules.window, "Rules loaded");
        Ok(rules)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_reference() {
        assert_eq!(RuleSet::from_toml_str("").unwrap(), RuleSet::reference());
    }

    #[test]
    fn test_builders() {
        let rules = RuleSet::reference()
            .with_occupied(OccupiedPolicy::Reject)
            .with_window(StreakWindow::AnyTriple);
        assert_eq!(rules, RuleSet::strict());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
