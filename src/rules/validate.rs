//! Move legality.
//!
//! Pure predicates over a board. Nothing here mutates state; a validated
//! outcome is applied by the caller after the pre-move snapshot is taken.
//!
//! Checks run in a fixed order so the reported reason is stable:
//! bounds, self-move, source piece, destination empty, geometry.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Coord, MoveError, MoveOutcome, Side};

/// Classification of a tiger move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TigerMove {
    Invalid,
    /// One step in any of the eight directions.
    SimpleMove,
    /// Straight or diagonal two-cell jump over the goat at `mid`.
    Capture { mid: Coord },
}

/// A goat may be dropped on any empty on-board cell.
pub fn check_placement(board: &Board, at: Coord) -> Result<MoveOutcome, MoveError> {
    require_empty(board, at)?;
    Ok(MoveOutcome::Placed { at })
}

/// A goat steps from a goat cell to an adjacent empty cell.
pub fn check_goat_move(board: &Board, from: Coord, to: Coord) -> Result<MoveOutcome, MoveError> {
    require_endpoints(board, from, to, Cell::Goat)?;
    if !from.is_adjacent(to) {
        return Err(MoveError::NotAdjacent { from, to });
    }
    Ok(MoveOutcome::Moved { side: Side::Goat, from, to })
}

/// A tiger steps to an adjacent empty cell, or jumps a goat in a straight
/// or diagonal line into the empty cell beyond it.
pub fn check_tiger_move(board: &Board, from: Coord, to: Coord) -> Result<MoveOutcome, MoveError> {
    require_endpoints(board, from, to, Cell::Tiger)?;

    let (dr, dc) = from.delta_to(to);
    if dr.abs() <= 1 && dc.abs() <= 1 {
        return Ok(MoveOutcome::Moved { side: Side::Tiger, from, to });
    }

    let is_jump = matches!((dr.abs(), dc.abs()), (2, 0) | (0, 2) | (2, 2));
    if is_jump {
        let mid = Coord::new(from.row + dr / 2, from.col + dc / 2);
        if board.holds(mid, Cell::Goat) {
            return Ok(MoveOutcome::Captured { from, to, captured: mid });
        }
    }
    Err(MoveError::InvalidJumpGeometry { from, to })
}

/// Boolean form of [`check_goat_move`].
#[must_use]
pub fn validate_goat_move(board: &Board, from: Coord, to: Coord) -> bool {
    check_goat_move(board, from, to).is_ok()
}

/// Classifying form of [`check_tiger_move`].
#[must_use]
pub fn validate_tiger_move(board: &Board, from: Coord, to: Coord) -> TigerMove {
    match check_tiger_move(board, from, to) {
        Ok(MoveOutcome::Captured { captured, .. }) => TigerMove::Capture { mid: captured },
        Ok(_) => TigerMove::SimpleMove,
        Err(_) => TigerMove::Invalid,
    }
}

fn require_empty(board: &Board, at: Coord) -> Result<(), MoveError> {
    match board.get(at) {
        None => Err(MoveError::OutOfBounds(at)),
        Some(Cell::Empty) => Ok(()),
        Some(_) => Err(MoveError::OccupiedOrWrongPiece { at, expected: Cell::Empty }),
    }
}

fn require_endpoints(board: &Board, from: Coord, to: Coord, piece: Cell) -> Result<(), MoveError> {
    for coord in [from, to] {
        if !coord.is_in_bounds() {
            return Err(MoveError::OutOfBounds(coord));
        }
    }
    if from == to {
        return Err(MoveError::NotAdjacent { from, to });
    }
    if !board.holds(from, piece) {
        return Err(MoveError::OccupiedOrWrongPiece { at: from, expected: piece });
    }
    require_empty(board, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(goats: &[(i32, i32)]) -> Board {
        let mut board = Board::initial();
        for &(r, c) in goats {
            board.set(Coord::new(r, c), Cell::Goat).unwrap();
        }
        board
    }

    #[test]
    fn test_placement() {
        let board = board_with(&[(2, 2)]);

        assert_eq!(
            check_placement(&board, Coord::new(1, 1)),
            Ok(MoveOutcome::Placed { at: Coord::new(1, 1) })
        );
        assert_eq!(
            check_placement(&board, Coord::new(2, 2)),
            Err(MoveError::OccupiedOrWrongPiece { at: Coord::new(2, 2), expected: Cell::Empty })
        );
        assert_eq!(
            check_placement(&board, Coord::new(0, 0)),
            Err(MoveError::OccupiedOrWrongPiece { at: Coord::new(0, 0), expected: Cell::Empty })
        );
        assert_eq!(
            check_placement(&board, Coord::new(5, 1)),
            Err(MoveError::OutOfBounds(Coord::new(5, 1)))
        );
    }

    #[test]
    fn test_goat_move() {
        let board = board_with(&[(2, 2), (2, 3)]);

        assert!(validate_goat_move(&board, Coord::new(2, 2), Coord::new(1, 1)));
        assert!(validate_goat_move(&board, Coord::new(2, 2), Coord::new(3, 2)));
        // Occupied destination.
        assert!(!validate_goat_move(&board, Coord::new(2, 2), Coord::new(2, 3)));
        // Goats never jump.
        assert_eq!(
            check_goat_move(&board, Coord::new(2, 2), Coord::new(2, 0)),
            Err(MoveError::NotAdjacent { from: Coord::new(2, 2), to: Coord::new(2, 0) })
        );
        // Wrong piece.
        assert!(!validate_goat_move(&board, Coord::new(0, 0), Coord::new(0, 1)));
    }

    #[test]
    fn test_goat_self_move_is_not_adjacent() {
        let board = board_with(&[(2, 2)]);
        assert_eq!(
            check_goat_move(&board, Coord::new(2, 2), Coord::new(2, 2)),
            Err(MoveError::NotAdjacent { from: Coord::new(2, 2), to: Coord::new(2, 2) })
        );
    }

    #[test]
    fn test_tiger_simple_move() {
        let board = Board::initial();
        assert_eq!(
            validate_tiger_move(&board, Coord::new(0, 0), Coord::new(1, 1)),
            TigerMove::SimpleMove
        );
        assert_eq!(
            validate_tiger_move(&board, Coord::new(4, 4), Coord::new(4, 3)),
            TigerMove::SimpleMove
        );
    }

    #[test]
    fn test_tiger_capture_straight_and_diagonal() {
        let board = board_with(&[(0, 1), (1, 1), (1, 0)]);

        assert_eq!(
            validate_tiger_move(&board, Coord::new(0, 0), Coord::new(0, 2)),
            TigerMove::Capture { mid: Coord::new(0, 1) }
        );
        assert_eq!(
            validate_tiger_move(&board, Coord::new(0, 0), Coord::new(2, 2)),
            TigerMove::Capture { mid: Coord::new(1, 1) }
        );
        assert_eq!(
            validate_tiger_move(&board, Coord::new(0, 0), Coord::new(2, 0)),
            TigerMove::Capture { mid: Coord::new(1, 0) }
        );
    }

    #[test]
    fn test_tiger_jump_without_goat() {
        let board = Board::initial();
        assert_eq!(
            check_tiger_move(&board, Coord::new(0, 0), Coord::new(0, 2)),
            Err(MoveError::InvalidJumpGeometry { from: Coord::new(0, 0), to: Coord::new(0, 2) })
        );
    }

    #[test]
    fn test_tiger_knight_shape_is_invalid() {
        let board = board_with(&[(1, 0), (1, 1), (0, 1)]);
        assert_eq!(
            validate_tiger_move(&board, Coord::new(0, 0), Coord::new(2, 1)),
            TigerMove::Invalid
        );
        assert_eq!(
            validate_tiger_move(&board, Coord::new(0, 0), Coord::new(0, 3)),
            TigerMove::Invalid
        );
    }

    #[test]
    fn test_tiger_cannot_jump_over_tiger() {
        let mut board = Board::empty();
        board.set(Coord::new(2, 0), Cell::Tiger).unwrap();
        board.set(Coord::new(2, 1), Cell::Tiger).unwrap();
        assert_eq!(
            validate_tiger_move(&board, Coord::new(2, 0), Coord::new(2, 2)),
            TigerMove::Invalid
        );
    }

    #[test]
    fn test_tiger_wrong_source() {
        let board = board_with(&[(2, 2)]);
        assert_eq!(
            check_tiger_move(&board, Coord::new(2, 2), Coord::new(2, 3)),
            Err(MoveError::OccupiedOrWrongPiece { at: Coord::new(2, 2), expected: Cell::Tiger })
        );
    }

    #[test]
    fn test_tiger_destination_off_board() {
        let board = Board::initial();
        assert_eq!(
            check_tiger_move(&board, Coord::new(0, 0), Coord::new(-1, 0)),
            Err(MoveError::OutOfBounds(Coord::new(-1, 0)))
        );
    }
}
