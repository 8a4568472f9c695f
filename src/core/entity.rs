//! Cell contents.
//!
//! Pieces carry no identity beyond their position: every goat is
//! interchangeable with every other goat, and likewise for tigers.
//!
//! ## Byte encoding
//!
//! Cells are stored on disk as one ASCII byte each:
//!
//! ```
//! use bagh_chal::core::Cell;
//!
//! assert_eq!(Cell::Empty.to_byte(), b'.');
//! assert_eq!(Cell::from_byte(b'G'), Some(Cell::Goat));
//! assert_eq!(Cell::from_byte(b'x'), None);
//! ```

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// A goat.
    Goat,
    /// A tiger.
    Tiger,
}

impl Cell {
    /// Persisted byte for this cell.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Cell::Empty => b'.',
            Cell::Goat => b'G',
            Cell::Tiger => b'T',
        }
    }

    /// Decode a persisted byte. Returns `None` for anything but `.`, `G`, `T`.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(Cell::Empty),
            b'G' => Some(Cell::Goat),
            b'T' => Some(Cell::Tiger),
            _ => None,
        }
    }

    /// The piece a side moves.
    #[must_use]
    pub const fn piece_of(side: Side) -> Self {
        match side {
            Side::Goat => Cell::Goat,
            Side::Tiger => Cell::Tiger,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}
