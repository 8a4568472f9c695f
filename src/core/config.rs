//! Game constants and session configuration.
//!
//! The board geometry and piece counts are fixed by the rules and live
//! here as constants. Everything a host application may tune is on
//! `SessionConfig`:
//! - History depth and what happens when it fills up
//! - The advisory per-turn time limit
//! - Where (if anywhere) to autosave

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 5;

/// Goats a game starts with (all off the board, waiting to be placed).
pub const TOTAL_GOATS: u32 = 20;

/// Tigers on the board, one per corner at the start.
pub const TIGER_COUNT: usize = 4;

/// Captures that win the game for the tigers.
pub const CAPTURES_TO_WIN: u32 = 5;

/// Default undo/redo stack depth.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Default advisory time per turn.
pub const DEFAULT_TURN_TIME_LIMIT: Duration = Duration::from_secs(15);

/// What a full history stack does with one more push.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Refuse the push. The earliest `capacity` states are kept.
    #[default]
    DropNewest,
    /// Discard the oldest entry to make room. The most recent
    /// `capacity` states are kept.
    EvictOldest,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum depth of each of the undo and redo stacks.
    pub history_capacity: usize,

    /// Behaviour of a push onto a full stack.
    pub overflow_policy: OverflowPolicy,

    /// Time after which a turn is reported as overdue.
    /// Never rejects a move.
    pub turn_time_limit: Duration,

    /// Directory for the autosave slot. `None` disables autosave.
    pub autosave_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            overflow_policy: OverflowPolicy::DropNewest,
            turn_time_limit: DEFAULT_TURN_TIME_LIMIT,
            autosave_dir: None,
        }
    }
}

impl SessionConfig {
    /// Set the history depth.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Set the advisory turn time limit.
    #[must_use]
    pub fn with_turn_time_limit(mut self, limit: Duration) -> Self {
        self.turn_time_limit = limit;
        self
    }

    /// Autosave into `dir` after every successful move.
    #[must_use]
    pub fn with_autosave_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.autosave_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.history_capacity, 100);
        assert_eq!(config.overflow_policy, OverflowPolicy::DropNewest);
        assert_eq!(config.turn_time_limit, Duration::from_secs(15));
        assert!(config.autosave_dir.is_none());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default()
            .with_history_capacity(3)
            .with_overflow_policy(OverflowPolicy::EvictOldest)
            .with_turn_time_limit(Duration::from_secs(30))
            .with_autosave_dir("/tmp/saves");

        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.overflow_policy, OverflowPolicy::EvictOldest);
        assert_eq!(config.turn_time_limit, Duration::from_secs(30));
        assert_eq!(config.autosave_dir, Some(PathBuf::from("/tmp/saves")));
    }

    #[test]
    fn test_config_serialization() {
        let config = SessionConfig::default().with_overflow_policy(OverflowPolicy::EvictOldest);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
