//! Game state: the unit of undo/redo history.
//!
//! ## GameState
//!
//! A full snapshot of one position:
//! - The board
//! - Goat counters (to place, on the board, captured)
//! - Side to move
//! - Number of successful moves so far
//!
//! The goat phase is never stored. It is recomputed from the counters on
//! every query so it can't drift after a load, undo, or redo.
//!
//! ## Conservation
//!
//! `goats_on_board + goats_captured + goats_remaining == TOTAL_GOATS`
//! holds for every state reachable through validated moves.

use serde::{Deserialize, Serialize};

use super::action::MoveOutcome;
use super::board::Board;
use super::config::TOTAL_GOATS;
use super::entity::Cell;
use super::error::MoveError;
use super::player::Side;

/// Goat sub-phase, derived from how many goats have entered the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fewer than 20 goats have entered: goats are dropped onto empty cells.
    Placement,
    /// All goats have entered: goats step to adjacent cells.
    Movement,
}

/// Complete position snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    goats_remaining: u32,
    goats_on_board: u32,
    goats_captured: u32,
    turn: Side,
    moves_played: u32,
}

impl GameState {
    /// Opening position: tigers on the corners, 20 goats to place, goats to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            goats_remaining: TOTAL_GOATS,
            goats_on_board: 0,
            goats_captured: 0,
            turn: Side::Goat,
            moves_played: 0,
        }
    }

    /// Assemble a state from its parts. `goats_on_board` is read off the board.
    ///
    /// No rule checking happens here; see [`GameState::is_conserved`].
    #[must_use]
    pub fn from_parts(
        board: Board,
        goats_remaining: u32,
        goats_captured: u32,
        turn: Side,
        moves_played: u32,
    ) -> Self {
        Self {
            goats_on_board: board.count(Cell::Goat) as u32,
            board,
            goats_remaining,
            goats_captured,
            turn,
            moves_played,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Goats still waiting to be placed.
    #[must_use]
    pub fn goats_remaining(&self) -> u32 {
        self.goats_remaining
    }

    #[must_use]
    pub fn goats_on_board(&self) -> u32 {
        self.goats_on_board
    }

    #[must_use]
    pub fn goats_captured(&self) -> u32 {
        self.goats_captured
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Successful moves since the opening.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Goats that have ever been placed: those still standing plus those captured.
    #[must_use]
    pub fn goats_entered(&self) -> u32 {
        self.goats_on_board + self.goats_captured
    }

    /// Current goat phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.goats_entered() < TOTAL_GOATS {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }

    /// True iff the goat counters agree with the board and add up to 20.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.board.count(Cell::Goat) as u32 == self.goats_on_board
            && self.goats_on_board + self.goats_captured + self.goats_remaining == TOTAL_GOATS
    }

    /// Apply a validated outcome and pass the turn.
    ///
    /// Unchecked: callers must only pass outcomes produced by the validator
    /// for this exact state.
    pub(crate) fn apply(&mut self, outcome: MoveOutcome) -> Result<(), MoveError> {
        match outcome {
            MoveOutcome::Placed { at } => {
                self.board.set(at, Cell::Goat)?;
                self.goats_on_board += 1;
                self.goats_remaining = self.goats_remaining.saturating_sub(1);
            }
            MoveOutcome::Moved { side, from, to } => {
                self.board.set(from, Cell::Empty)?;
                self.board.set(to, Cell::piece_of(side))?;
            }
            MoveOutcome::Captured { from, to, captured } => {
                self.board.set(from, Cell::Empty)?;
                self.board.set(to, Cell::Tiger)?;
                self.board.set(captured, Cell::Empty)?;
                self.goats_on_board = self.goats_on_board.saturating_sub(1);
                self.goats_captured += 1;
            }
        }
        self.turn = self.turn.opponent();
        self.moves_played += 1;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
