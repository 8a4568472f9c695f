//! Persistence errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("save record could not be encoded or decoded: {0}")]
    Codec(#[from] bincode::Error),

    #[error("cell {index} holds byte {byte:#04x}, expected '.', 'G' or 'T'")]
    InvalidCell { index: usize, byte: u8 },

    #[error("{field} is negative")]
    NegativeCount { field: &'static str },

    #[error(
        "goat counts don't add up: {cells} on the board, {on_board} recorded, \
         {captured} captured, {remaining} to place"
    )]
    InconsistentCounts {
        cells: u32,
        on_board: u32,
        captured: u32,
        remaining: u32,
    },
}
