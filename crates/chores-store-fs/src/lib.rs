//! File-backed storage implementation for chores.
//!
//! Two independent slots under a data directory: `tasks.json` holds the
//! JSON-serialized task array, `theme` holds the literal `dark` or `light`.
//! Loads degrade silently — missing or malformed data yields the empty
//! value and a `debug!` line, never a user-visible error. Saves overwrite
//! the whole slot atomically; the last writer wins.

use anyhow::{Context, Result};
use chores_app::{StateStore, Theme};
use chores_core::Task;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const TASKS_SLOT: &str = "tasks.json";
const THEME_SLOT: &str = "theme";

/// Error raised while writing a storage slot.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    /// The slot payload could not be encoded.
    #[error("failed to encode slot {slot}")]
    Encode {
        /// Slot file name.
        slot: &'static str,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
    /// The slot file could not be written or swapped into place.
    #[error("failed to write slot {slot}")]
    Write {
        /// Slot file name.
        slot: &'static str,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Storage rooted at a data directory, one file per slot.
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Open (creating if needed) the store rooted at `dir`.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        info!(dir = %dir.display(), "opened store");
        Ok(Self { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }

    /// Read a slot's raw contents; any failure reads as "slot absent".
    fn read_slot(&self, slot: &str) -> Option<String> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                debug!(slot, %err, "failed to read slot, treating as absent");
                None
            }
        }
    }

    /// Overwrite a slot atomically: write a sibling temp file, then rename.
    fn write_slot(&self, slot: &'static str, contents: &str) -> Result<(), SlotError> {
        let path = self.slot_path(slot);
        let tmp = self.dir.join(format!("{slot}.tmp"));
        fs::write(&tmp, contents).map_err(|source| SlotError::Write { slot, source })?;
        fs::rename(&tmp, &path).map_err(|source| SlotError::Write { slot, source })?;
        Ok(())
    }
}

impl StateStore for FsStore {
    fn load_tasks(&self) -> Vec<Task> {
        let Some(raw) = self.read_slot(TASKS_SLOT) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                // Malformed data resets the whole collection; no partial recovery.
                debug!(%err, "malformed tasks slot, loading empty collection");
                Vec::new()
            }
        }
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let body = serde_json::to_string_pretty(tasks).map_err(|source| SlotError::Encode {
            slot: TASKS_SLOT,
            source,
        })?;
        self.write_slot(TASKS_SLOT, &body)?;
        debug!(count = tasks.len(), "saved task collection");
        Ok(())
    }

    fn load_theme(&self) -> Option<Theme> {
        let raw = self.read_slot(THEME_SLOT)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                debug!(%err, "malformed theme slot, falling back to ambient");
                None
            }
        }
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        self.write_slot(THEME_SLOT, theme.as_str())?;
        debug!(%theme, "saved theme preference");
        Ok(())
    }
}
