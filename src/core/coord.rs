//! Board coordinates and the eight move directions.
//!
//! A `Coord` is a *candidate* position: it may lie off the board, since
//! player input and jump arithmetic both produce such values. Use
//! [`Coord::is_in_bounds`] before treating it as a cell.

use serde::{Deserialize, Serialize};

use super::config::BOARD_SIZE;

/// Zero-based (row, col) position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Build from 1-based row/column as typed by a player.
    #[must_use]
    pub const fn from_one_based(row: i32, col: i32) -> Self {
        Self::new(row.saturating_sub(1), col.saturating_sub(1))
    }

    /// True iff both components lie in `[0, BOARD_SIZE)`.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE as i32 && self.col >= 0 && self.col < BOARD_SIZE as i32
    }

    /// Row-major cell index, or `None` off the board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_in_bounds() {
            Some(self.row as usize * BOARD_SIZE + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as i32, (index % BOARD_SIZE) as i32)
    }

    /// Step `steps` cells along `dir`. The result may be off the board.
    #[must_use]
    pub const fn offset(self, dir: Direction, steps: i32) -> Self {
        Self::new(self.row + dir.dr * steps, self.col + dir.dc * steps)
    }

    /// (row delta, col delta) from `self` to `other`.
    #[must_use]
    pub const fn delta_to(self, other: Coord) -> (i32, i32) {
        (other.row - self.row, other.col - self.col)
    }

    /// True iff the two positions are on the board, distinct, and within
    /// one step of each other in any of the eight directions.
    ///
    /// Diagonal links exist from every cell, not just the cross-points of
    /// the traditional board.
    #[must_use]
    pub const fn is_adjacent(self, other: Coord) -> bool {
        if !self.is_in_bounds() || !other.is_in_bounds() {
            return false;
        }
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr <= 1 && dc <= 1 && !(dr == 0 && dc == 0)
    }

    /// All 25 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Coord::from_index)
    }
}

impl std::fmt::Display for Coord {
    /// Displays 1-based, the way players type positions.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// One of the eight compass directions as a unit (row, col) step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

impl Direction {
    pub const N: Direction = Direction { dr: -1, dc: 0 };
    pub const S: Direction = Direction { dr: 1, dc: 0 };
    pub const E: Direction = Direction { dr: 0, dc: 1 };
    pub const W: Direction = Direction { dr: 0, dc: -1 };
    pub const NE: Direction = Direction { dr: -1, dc: 1 };
    pub const NW: Direction = Direction { dr: -1, dc: -1 };
    pub const SE: Direction = Direction { dr: 1, dc: 1 };
    pub const SW: Direction = Direction { dr: 1, dc: -1 };

    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Coord::new(0, 0).is_in_bounds());
        assert!(Coord::new(4, 4).is_in_bounds());
        assert!(!Coord::new(5, 0).is_in_bounds());
        assert!(!Coord::new(0, -1).is_in_bounds());
    }

    #[test]
    fn test_one_based() {
        assert_eq!(Coord::from_one_based(1, 1), Coord::new(0, 0));
        assert_eq!(Coord::from_one_based(5, 3), Coord::new(4, 2));
        assert!(!Coord::from_one_based(0, 3).is_in_bounds());
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, coord) in Coord::all().enumerate() {
            assert_eq!(coord.index(), Some(i));
        }
        assert_eq!(Coord::all().count(), 25);
        assert_eq!(Coord::new(-1, 2).index(), None);
    }

    #[test]
    fn test_adjacency() {
        let center = Coord::new(2, 2);
        for dir in Direction::ALL {
            assert!(center.is_adjacent(center.offset(dir, 1)));
            assert!(!center.is_adjacent(center.offset(dir, 2)));
        }
        assert!(!center.is_adjacent(center));
        // Diagonals connect everywhere, not only at cross-points.
        assert!(Coord::new(0, 1).is_adjacent(Coord::new(1, 2)));
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(-1, -1)));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(format!("{}", Coord::new(0, 4)), "(1, 5)");
    }
}
