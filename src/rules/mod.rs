//! Rules engine for game implementations.
//!
//! - `validate`: pure legality checks for placements and moves
//! - `outcome`: trap detection and win evaluation
//! - `engine`: the `RulesEngine` trait and the `BaghChal` rules
//!
//! The session calls into `RulesEngine` but never interprets board
//! geometry directly.

pub mod engine;
pub mod outcome;
pub mod validate;

pub use engine::{BaghChal, RulesEngine};
pub use outcome::{capture_threshold_reached, evaluate, tiger_can_move, tigers_are_trapped, GameResult};
pub use validate::{
    check_goat_move, check_placement, check_tiger_move, validate_goat_move, validate_tiger_move,
    TigerMove,
};
