//! Undo/redo history.
//!
//! - [`BoundedStack`]: capacity-limited stack with an explicit overflow policy
//! - [`History`]: paired undo and redo stacks of full state snapshots
//!
//! ## Example Usage
//!
//! ```
//! use bagh_chal::core::{GameState, OverflowPolicy};
//! use bagh_chal::history::History;
//!
//! let mut history = History::new(100, OverflowPolicy::DropNewest);
//! let before = GameState::new();
//! history.snapshot(before);
//!
//! // Undo hands back the snapshot and parks the live state for redo.
//! let live = GameState::new();
//! assert_eq!(history.undo(live), Some(before));
//! assert!(history.can_redo());
//! ```

mod bounded;
mod manager;

pub use bounded::{BoundedStack, PushOutcome};
pub use manager::History;
