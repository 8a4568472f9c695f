//! Fixed-layout save record.
//!
//! ## Layout (41 bytes)
//!
//! | Offset | Size | Field                          |
//! |--------|------|--------------------------------|
//! | 0      | 25   | cells, row-major, `.`/`G`/`T`  |
//! | 25     | 4    | goats remaining to place (i32) |
//! | 29     | 4    | goats on board (i32)           |
//! | 33     | 4    | goats captured (i32)           |
//! | 37     | 4    | moves played (i32)             |
//!
//! Integers are little-endian. bincode's legacy encoding (fixed-width
//! integers, no length prefix on arrays) produces exactly this layout from
//! the struct below.
//!
//! History and the side to move are not stored. The side to move is
//! recovered from the parity of the move counter.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, GameState, Side, BOARD_SIZE, TOTAL_GOATS};

use super::error::PersistError;

/// Encoded length of a record.
pub const RECORD_LEN: usize = BOARD_SIZE * BOARD_SIZE + 4 * 4;

/// On-disk form of a game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub cells: [u8; BOARD_SIZE * BOARD_SIZE],
    pub goats_remaining: i32,
    pub goats_on_board: i32,
    pub goats_captured: i32,
    pub moves_played: i32,
}

impl SaveRecord {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let mut cells = [Cell::Empty.to_byte(); BOARD_SIZE * BOARD_SIZE];
        for (byte, cell) in cells.iter_mut().zip(state.board().cells()) {
            *byte = cell.to_byte();
        }
        Self {
            cells,
            goats_remaining: state.goats_remaining() as i32,
            goats_on_board: state.goats_on_board() as i32,
            goats_captured: state.goats_captured() as i32,
            moves_played: state.moves_played() as i32,
        }
    }

    /// Decode into a live state, checking every cell and the goat counts.
    ///
    /// The recorded goats-on-board count is accepted either as the number
    /// of goats standing (what this crate writes) or as the number ever
    /// placed, standing plus captured (what older save files hold).
    pub fn into_state(self) -> Result<GameState, PersistError> {
        let mut cells = [Cell::Empty; BOARD_SIZE * BOARD_SIZE];
        for (index, (cell, &byte)) in cells.iter_mut().zip(self.cells.iter()).enumerate() {
            *cell = Cell::from_byte(byte).ok_or(PersistError::InvalidCell { index, byte })?;
        }
        let board = Board::from_cells(cells);

        let remaining = non_negative(self.goats_remaining, "goats remaining")?;
        let on_board = non_negative(self.goats_on_board, "goats on board")?;
        let captured = non_negative(self.goats_captured, "goats captured")?;
        let moves_played = non_negative(self.moves_played, "moves played")?;

        let cells = board.count(Cell::Goat) as u32;
        let entered = cells.checked_add(captured);
        let total = entered.and_then(|n| n.checked_add(remaining));
        let recorded_ok = on_board == cells || Some(on_board) == entered;
        if !recorded_ok || total != Some(TOTAL_GOATS) {
            return Err(PersistError::InconsistentCounts {
                cells,
                on_board,
                captured,
                remaining,
            });
        }

        Ok(GameState::from_parts(
            board,
            remaining,
            captured,
            Side::to_move_after(moves_played),
            moves_played,
        ))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode the first [`RECORD_LEN`] bytes; anything after is ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistError> {
        Ok(bincode::deserialize(bytes)?)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        Ok(bincode::serialize_into(writer, self)?)
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self, PersistError> {
        Ok(bincode::deserialize_from(reader)?)
    }
}

fn non_negative(value: i32, field: &'static str) -> Result<u32, PersistError> {
    u32::try_from(value).map_err(|_| PersistError::NegativeCount { field })
}
