//! Move rejection reasons.
//!
//! Every variant is recoverable: the live state is left untouched and the
//! same side is asked again.

use thiserror::Error;

use super::coord::Coord;
use super::entity::Cell;
use super::state::Phase;

/// Why a move, command, or input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position {0} is off the board")]
    OutOfBounds(Coord),

    /// Source doesn't hold the expected piece, or destination isn't empty.
    #[error("expected {expected:?} at {at}")]
    OccupiedOrWrongPiece { at: Coord, expected: Cell },

    #[error("{from} and {to} are not adjacent")]
    NotAdjacent { from: Coord, to: Coord },

    /// Displacement is neither one step nor a straight two-cell jump over a goat.
    #[error("{from} to {to} is not a legal jump")]
    InvalidJumpGeometry { from: Coord, to: Coord },

    #[error("no history available")]
    NoHistoryAvailable,

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("move does not fit the {expected:?} phase")]
    WrongPhase { expected: Phase },

    #[error("the game is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_use_player_coordinates() {
        let err = MoveError::OutOfBounds(Coord::new(5, 0));
        assert_eq!(err.to_string(), "position (6, 1) is off the board");

        let err = MoveError::NotAdjacent { from: Coord::new(0, 0), to: Coord::new(2, 2) };
        assert_eq!(err.to_string(), "(1, 1) and (3, 3) are not adjacent");
    }
}
