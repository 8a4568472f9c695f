//! The 5x5 board.
//!
//! Cells are stored row-major. The board does not enforce piece counts;
//! that is the job of the move validator and the session.

use serde::{Deserialize, Serialize};

use super::config::BOARD_SIZE;
use super::coord::Coord;
use super::entity::Cell;
use super::error::MoveError;

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Fixed-size grid of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Opening position: a tiger on each corner, nothing else.
    #[must_use]
    pub fn initial() -> Self {
        let last = BOARD_SIZE as i32 - 1;
        let mut board = Self::empty();
        for corner in [
            Coord::new(0, 0),
            Coord::new(0, last),
            Coord::new(last, 0),
            Coord::new(last, last),
        ] {
            if let Some(i) = corner.index() {
                board.cells[i] = Cell::Tiger;
            }
        }
        board
    }

    /// Build from row-major cells.
    #[must_use]
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    #[must_use]
    pub const fn is_in_bounds(coord: Coord) -> bool {
        coord.is_in_bounds()
    }

    #[must_use]
    pub const fn is_adjacent(a: Coord, b: Coord) -> bool {
        a.is_adjacent(b)
    }

    /// Contents at `coord`, or `None` off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord.index().map(|i| self.cells[i])
    }

    /// True iff `coord` is on the board and holds `cell`.
    #[must_use]
    pub fn holds(&self, coord: Coord, cell: Cell) -> bool {
        self.get(coord) == Some(cell)
    }

    /// Overwrite one cell.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), MoveError> {
        let i = coord.index().ok_or(MoveError::OutOfBounds(coord))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Coordinates holding `cell`, row-major.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cell)
            .map(|(i, _)| Coord::from_index(i))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    /// One line per row, cells as their persisted bytes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in line {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tigers_on_corners() {
        let board = Board::initial();
        assert_eq!(board.count(Cell::Tiger), 4);
        assert_eq!(board.count(Cell::Goat), 0);
        let tigers: Vec<_> = board.positions_of(Cell::Tiger).collect();
        assert_eq!(
            tigers,
            vec![Coord::new(0, 0), Coord::new(0, 4), Coord::new(4, 0), Coord::new(4, 4)]
        );
    }

    #[test]
    fn test_get_and_set() {
        let mut board = Board::empty();
        assert_eq!(board.get(Coord::new(2, 3)), Some(Cell::Empty));

        board.set(Coord::new(2, 3), Cell::Goat).unwrap();
        assert!(board.holds(Coord::new(2, 3), Cell::Goat));
        assert_eq!(board.get(Coord::new(5, 5)), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::empty();
        let err = board.set(Coord::new(-1, 0), Cell::Goat).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds(Coord::new(-1, 0)));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_display() {
        let mut board = Board::initial();
        board.set(Coord::new(0, 1), Cell::Goat).unwrap();
        assert_eq!(format!("{board}"), "TG..T\n.....\n.....\n.....\nT...T");
    }
}
