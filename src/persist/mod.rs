//! Saving and loading games.
//!
//! - [`SaveRecord`]: the fixed 41-byte on-disk layout
//! - [`SaveSlots`]: numbered slot files in a directory
//!
//! Undo/redo history is never persisted; loading always starts with empty
//! history.

mod error;
mod record;
mod slots;

pub use error::PersistError;
pub use record::{SaveRecord, RECORD_LEN};
pub use slots::{SaveSlots, AUTOSAVE_SLOT};
