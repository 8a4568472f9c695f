//! Win and trap detection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Board, Cell, Coord, Direction, GameState, Side, CAPTURES_TO_WIN, TIGER_COUNT};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Five goats were captured.
    TigersWin,
    /// Every tiger is trapped.
    GoatsWin,
}

impl GameResult {
    #[must_use]
    pub const fn winner(self) -> Side {
        match self {
            GameResult::TigersWin => Side::Tiger,
            GameResult::GoatsWin => Side::Goat,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == side
    }
}

/// True iff the tiger at `at` has a step or a jump in any of the eight directions.
#[must_use]
pub fn tiger_can_move(board: &Board, at: Coord) -> bool {
    Direction::ALL.iter().any(|&dir| {
        let next = at.offset(dir, 1);
        match board.get(next) {
            Some(Cell::Empty) => true,
            Some(Cell::Goat) => board.holds(at.offset(dir, 2), Cell::Empty),
            _ => false,
        }
    })
}

/// True iff exactly four tigers are on the board and none of them can move.
///
/// A board with fewer tigers never counts as trapped.
#[must_use]
pub fn tigers_are_trapped(board: &Board) -> bool {
    let mut found = 0;
    for at in board.positions_of(Cell::Tiger) {
        found += 1;
        if tiger_can_move(board, at) {
            return false;
        }
    }
    found == TIGER_COUNT
}

/// True once the tigers have captured enough goats.
#[must_use]
pub fn capture_threshold_reached(state: &GameState) -> bool {
    state.goats_captured() >= CAPTURES_TO_WIN
}

/// Result of the position, if the game is over.
///
/// The capture threshold is checked first, so a position that satisfies
/// both conditions is reported as a tiger win.
#[instrument(skip(state), fields(captured = state.goats_captured()))]
pub fn evaluate(state: &GameState) -> Option<GameResult> {
    if capture_threshold_reached(state) {
        Some(GameResult::TigersWin)
    } else if tigers_are_trapped(state.board()) {
        Some(GameResult::GoatsWin)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tigers on all four corners, each boxed in by goats two deep.
    fn trapped_board() -> Board {
        let mut board = Board::initial();
        for (r, c) in [
            (0, 1), (0, 2), (0, 3),
            (1, 0), (1, 1), (1, 3), (1, 4),
            (2, 0), (2, 1), (2, 2), (2, 3), (2, 4),
            (3, 0), (3, 1), (3, 2), (3, 3), (3, 4),
            (4, 1), (4, 2), (4, 3),
        ] {
            board.set(Coord::new(r, c), Cell::Goat).unwrap();
        }
        board
    }

    #[test]
    fn test_opening_tigers_free() {
        let board = Board::initial();
        assert!(tiger_can_move(&board, Coord::new(0, 0)));
        assert!(!tigers_are_trapped(&board));
    }

    #[test]
    fn test_all_trapped() {
        // (1, 2) is empty but neither next to a corner nor a jump landing.
        let board = trapped_board();
        for corner in board.positions_of(Cell::Tiger) {
            assert!(!tiger_can_move(&board, corner), "{corner} should be trapped");
        }
        assert!(tigers_are_trapped(&board));
    }

    #[test]
    fn test_jump_frees_tiger() {
        let mut board = trapped_board();
        board.set(Coord::new(0, 2), Cell::Empty).unwrap();
        // (0, 0) can now jump (0, 1) into (0, 2).
        assert!(tiger_can_move(&board, Coord::new(0, 0)));
        assert!(!tigers_are_trapped(&board));
    }

    #[test]
    fn test_fewer_than_four_tigers_is_not_a_win() {
        let mut board = trapped_board();
        board.set(Coord::new(4, 4), Cell::Goat).unwrap();
        assert_eq!(board.count(Cell::Tiger), 3);
        assert!(!tigers_are_trapped(&board));
    }

    #[test]
    fn test_evaluate_capture_threshold() {
        let state = GameState::from_parts(Board::initial(), 15, 5, Side::Goat, 20);
        assert_eq!(evaluate(&state), Some(GameResult::TigersWin));

        let state = GameState::from_parts(Board::initial(), 16, 4, Side::Goat, 20);
        assert_eq!(evaluate(&state), None);
    }

    #[test]
    fn test_evaluate_trap() {
        let state = GameState::from_parts(trapped_board(), 0, 0, Side::Tiger, 39);
        assert_eq!(evaluate(&state), Some(GameResult::GoatsWin));
    }

    #[test]
    fn test_capture_threshold_takes_precedence() {
        let state = GameState::from_parts(trapped_board(), 0, 5, Side::Tiger, 50);
        assert!(tigers_are_trapped(state.board()));
        assert_eq!(evaluate(&state), Some(GameResult::TigersWin));
    }

    #[test]
    fn test_result_winner() {
        assert!(GameResult::TigersWin.is_winner(Side::Tiger));
        assert!(!GameResult::TigersWin.is_winner(Side::Goat));
        assert_eq!(GameResult::GoatsWin.winner(), Side::Goat);
    }
}
