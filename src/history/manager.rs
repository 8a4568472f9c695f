//! Undo/redo history of full game-state snapshots.
//!
//! Two bounded stacks:
//! - `undo`: states from before each move, newest on top
//! - `redo`: states that were undone, newest on top
//!
//! Any new move clears `redo`, so redo is only possible directly after
//! one or more undos.

use tracing::{instrument, trace};

use crate::core::{GameState, OverflowPolicy};

use super::bounded::{BoundedStack, PushOutcome};

/// Undo/redo manager.
#[derive(Clone, Debug)]
pub struct History {
    undo: BoundedStack<GameState>,
    redo: BoundedStack<GameState>,
}

impl History {
    /// Both stacks share `capacity` and `policy`.
    #[must_use]
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            undo: BoundedStack::new(capacity, policy),
            redo: BoundedStack::new(capacity, policy),
        }
    }

    /// Record the state from just before a move, and forget any redo chain.
    #[instrument(skip(self, state), fields(undo_depth = self.undo.len()))]
    pub fn snapshot(&mut self, state: GameState) {
        log_push("undo", self.undo.push(state));
        self.redo.clear();
    }

    /// Step back one move.
    ///
    /// `current` goes onto the redo stack and the most recent snapshot is
    /// returned as the new live state. `None` when there is nothing to undo;
    /// both stacks are then left as they were.
    #[instrument(skip(self, current), fields(undo_depth = self.undo.len()))]
    pub fn undo(&mut self, current: GameState) -> Option<GameState> {
        let previous = self.undo.pop()?;
        log_push("redo", self.redo.push(current));
        Some(previous)
    }

    /// Step forward one undone move. Mirror image of [`History::undo`].
    #[instrument(skip(self, current), fields(redo_depth = self.redo.len()))]
    pub fn redo(&mut self, current: GameState) -> Option<GameState> {
        let next = self.redo.pop()?;
        log_push("undo", self.undo.push(current));
        Some(next)
    }

    /// Forget everything (new game or load).
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Snapshots available to undo, oldest first.
    pub fn undo_states(&self) -> impl Iterator<Item = &GameState> {
        self.undo.iter()
    }
}

fn log_push(stack: &str, outcome: PushOutcome<GameState>) {
    match outcome {
        PushOutcome::Pushed => {}
        PushOutcome::Dropped(state) => {
            trace!(stack, moves_played = state.moves_played(), "history full, newest snapshot dropped");
        }
        PushOutcome::Evicted(state) => {
            trace!(stack, moves_played = state.moves_played(), "history full, oldest snapshot evicted");
        }
    }
}
