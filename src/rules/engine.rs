//! Rules engine trait and the Bagh-Chal implementation.
//!
//! The session calls into `RulesEngine` and never inspects the board
//! geometry itself:
//! - `validate` turns a requested move into an outcome or a rejection
//! - `apply` validates and commits in one step
//! - `is_terminal` reports a finished game

use smallvec::SmallVec;

use crate::core::{Cell, Coord, Direction, GameState, Move, MoveError, MoveOutcome, Phase, Side};

use super::outcome::{self, GameResult};
use super::validate;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must be pure: it never touches the state
/// - `legal_moves` returns an empty vec once the side to move is stuck
pub trait RulesEngine {
    /// Decide what `mv` means for the side to move in `state`.
    fn validate(&self, state: &GameState, mv: &Move) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Candidate moves for the side to move, legal or not.
    fn candidate_moves(&self, state: &GameState) -> Vec<Move>;

    // === Convenience Methods ===

    /// Validate and commit `mv`, passing the turn.
    ///
    /// On error the state is unchanged.
    fn apply(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome, MoveError> {
        let outcome = self.validate(state, mv)?;
        state.apply(outcome)?;
        Ok(outcome)
    }

    /// Enumerate all legal moves for the side to move.
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        self.candidate_moves(state)
            .into_iter()
            .filter(|mv| self.validate(state, mv).is_ok())
            .collect()
    }
}

const STEP: &[i32] = &[1];
const STEP_OR_JUMP: &[i32] = &[1, 2];

/// Standard 5x5 rules: 20 goats, 4 tigers, diagonal links everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaghChal;

impl BaghChal {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RulesEngine for BaghChal {
    fn validate(&self, state: &GameState, mv: &Move) -> Result<MoveOutcome, MoveError> {
        let board = state.board();
        match (state.turn(), state.phase(), *mv) {
            (Side::Goat, Phase::Placement, Move::Place(at)) => validate::check_placement(board, at),
            (Side::Goat, Phase::Movement, Move::Step { from, to }) => {
                validate::check_goat_move(board, from, to)
            }
            (Side::Goat, phase, _) => Err(MoveError::WrongPhase {
                expected: phase,
            }),
            (Side::Tiger, _, Move::Step { from, to }) => validate::check_tiger_move(board, from, to),
            (Side::Tiger, _, Move::Place(_)) => Err(MoveError::MalformedInput(
                "tigers move from one cell to another".to_string(),
            )),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        outcome::evaluate(state)
    }

    fn candidate_moves(&self, state: &GameState) -> Vec<Move> {
        let board = state.board();
        let (piece, reach) = match (state.turn(), state.phase()) {
            (Side::Goat, Phase::Placement) => {
                return board.positions_of(Cell::Empty).map(Move::Place).collect();
            }
            (Side::Goat, Phase::Movement) => (Cell::Goat, STEP),
            (Side::Tiger, _) => (Cell::Tiger, STEP_OR_JUMP),
        };

        let mut moves = Vec::new();
        for from in board.positions_of(piece) {
            let targets: SmallVec<[Coord; 16]> = Direction::ALL
                .iter()
                .flat_map(|&dir| reach.iter().map(move |&steps| from.offset(dir, steps)))
                .filter(|to| board.holds(*to, Cell::Empty))
                .collect();
            moves.extend(targets.into_iter().map(|to| Move::step(from, to)));
        }
        moves
    }
}
