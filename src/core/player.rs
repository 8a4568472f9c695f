//! The two sides of the game.
//!
//! Goats always move first. The side to move alternates after every
//! successful placement or move; undo/redo restore it from the snapshot.

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The 20-piece side. Wins by trapping all four tigers.
    Goat,
    /// The 4-piece side. Wins by capturing five goats.
    Tiger,
}

impl Side {
    /// The side that moves after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Goat => Side::Tiger,
            Side::Tiger => Side::Goat,
        }
    }

    /// Side to move after `moves_played` successful moves from the opening.
    ///
    /// Goats open, so even counts are goat turns.
    #[must_use]
    pub const fn to_move_after(moves_played: u32) -> Self {
        if moves_played % 2 == 0 {
            Side::Goat
        } else {
            Side::Tiger
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Goat => write!(f, "Goat"),
            Side::Tiger => write!(f, "Tiger"),
        }
    }
}
