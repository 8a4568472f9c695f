//! Numbered save slots in a directory.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::error::PersistError;
use super::record::SaveRecord;

/// Slot written after every successful move when autosave is on.
pub const AUTOSAVE_SLOT: u32 = 0;

const FILE_PREFIX: &str = "savegame_slot_";

/// A directory of `savegame_slot_<n>.dat` files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveSlots {
    dir: PathBuf,
}

impl SaveSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `slot`.
    #[must_use]
    pub fn path(&self, slot: u32) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{slot}.dat"))
    }

    /// Write `record` to `slot`, replacing whatever was there.
    #[instrument(skip(self, record), fields(dir = %self.dir.display()))]
    pub fn save(&self, slot: u32, record: &SaveRecord) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(self.path(slot))?);
        record.write_to(&mut writer)?;
        writer.flush()?;
        debug!(slot, "game saved");
        Ok(())
    }

    /// Read `slot`. A slot that was never written is `Ok(None)`.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn load(&self, slot: u32) -> Result<Option<SaveRecord>, PersistError> {
        let file = match File::open(self.path(slot)) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        SaveRecord::read_from(BufReader::new(file)).map(Some)
    }
}
