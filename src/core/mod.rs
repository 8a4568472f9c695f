//! Core game types: cells, sides, coordinates, board, state, moves, configuration.
//!
//! Nothing here knows the movement rules. The board stores pieces, the
//! state stores counters, and `rules` decides what is legal.

pub mod entity;
pub mod player;
pub mod coord;
pub mod board;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use entity::Cell;
pub use player::Side;
pub use coord::{Coord, Direction};
pub use board::Board;
pub use config::{
    OverflowPolicy, SessionConfig, BOARD_SIZE, CAPTURES_TO_WIN, DEFAULT_HISTORY_CAPACITY,
    DEFAULT_TURN_TIME_LIMIT, TIGER_COUNT, TOTAL_GOATS,
};
pub use action::{Move, MoveOutcome};
pub use state::{GameState, Phase};
pub use error::MoveError;
