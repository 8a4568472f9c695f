//! Moves and their validated outcomes.
//!
//! A `Move` is what a player asks for. A `MoveOutcome` is what the
//! validator decided it means: a placement, a plain step, or a capture
//! with the jumped goat's position. Only outcomes are ever applied.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Side;

/// A requested move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Drop a new goat on an empty cell (goat placement phase only).
    Place(Coord),
    /// Move a piece of the side to move from one cell to another.
    Step { from: Coord, to: Coord },
}

impl Move {
    #[must_use]
    pub const fn step(from: Coord, to: Coord) -> Self {
        Move::Step { from, to }
    }

    /// Destination cell of the move.
    #[must_use]
    pub const fn target(&self) -> Coord {
        match *self {
            Move::Place(at) => at,
            Move::Step { to, .. } => to,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(at) => write!(f, "place {at}"),
            Move::Step { from, to } => write!(f, "{from} -> {to}"),
        }
    }
}

/// Validated effect of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A goat entered the board.
    Placed { at: Coord },
    /// A piece stepped to an adjacent empty cell.
    Moved { side: Side, from: Coord, to: Coord },
    /// A tiger jumped over the goat at `captured`.
    Captured { from: Coord, to: Coord, captured: Coord },
}

impl MoveOutcome {
    /// Side that made the move.
    #[must_use]
    pub const fn side(&self) -> Side {
        match *self {
            MoveOutcome::Placed { .. } => Side::Goat,
            MoveOutcome::Moved { side, .. } => side,
            MoveOutcome::Captured { .. } => Side::Tiger,
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, MoveOutcome::Captured { .. })
    }
}
