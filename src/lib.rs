//! # bagh-chal
//!
//! Rules engine and undo/redo history for Bagh-Chal, the Nepali "tigers
//! and goats" hunt game.
//!
//! ## Design Principles
//!
//! 1. **Validate, then commit**: A move is checked against the live state
//!    and produces a [`MoveOutcome`]. Only then is the pre-move state
//!    snapshotted and the outcome applied, so a rejected move never
//!    touches state or history.
//!
//! 2. **Snapshots, not diffs**: Undo/redo stores whole [`GameState`]
//!    values. A state is a few dozen bytes and `Copy`; bounded stacks are
//!    backed by `im` vectors.
//!
//! 3. **Off-board is a value**: Player input and jump arithmetic can name
//!    positions off the board. [`Coord`] carries them as ordinary values
//!    and every board query answers them safely.
//!
//! ## Modules
//!
//! - `core`: Coordinates, cells, board, state, moves, errors, configuration
//! - `rules`: Move validation, win detection, the `RulesEngine` trait
//! - `history`: Bounded undo/redo stacks of state snapshots
//! - `session`: Input parsing, turn timer, the playable game session
//! - `persist`: Fixed-layout save records and slot files

pub mod core;
pub mod history;
pub mod persist;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Direction, GameState, Move, MoveError, MoveOutcome, OverflowPolicy, Phase,
    SessionConfig, Side,
};

pub use crate::rules::{BaghChal, GameResult, RulesEngine};

pub use crate::history::History;

pub use crate::session::{GameSession, TurnEvent};

pub use crate::persist::{PersistError, SaveRecord, SaveSlots};
