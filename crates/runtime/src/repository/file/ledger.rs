//! File-based LedgerStore implementation.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use awaken_core::PlayerState;

use crate::repository::{LedgerRecord, LedgerStore, RepositoryError, Result};

/// File-based implementation of LedgerStore.
///
/// # File Format
///
/// The ledger is a single versioned JSON document (`ledger.json`) so it
/// stays readable and hand-inspectable. Saves go through a sibling temp file
/// that is synced and then renamed over the record, so a crash leaves either
/// the old record or the new one, never a truncated file. The directory is
/// synced after the rename so the new entry itself survives power loss.
pub struct FileLedgerStore {
    base_dir: PathBuf,
    path: PathBuf,
}

impl FileLedgerStore {
    pub const FILE_NAME: &'static str = "ledger.json";

    /// Create a new file-based ledger store rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Flush the directory entry written by the last rename.
    #[cfg(unix)]
    fn sync_base_dir(&self) -> Result<()> {
        File::open(&self.base_dir)?.sync_all()?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn sync_base_dir(&self) -> Result<()> {
        Ok(())
    }
}

impl LedgerStore for FileLedgerStore {
    fn read(&self) -> Result<Option<PlayerState>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::Storage(e)),
        };

        let state = LedgerRecord::decode(&bytes, &self.location())?;
        tracing::debug!("Loaded ledger from {}", self.path.display());

        Ok(Some(state))
    }

    fn save(&self, state: &PlayerState) -> Result<()> {
        let bytes = LedgerRecord::new(state.clone()).encode()?;
        let temp_path = self.temp_path();

        // Write and sync the temp file before it replaces the record
        let mut file = File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        drop(file);

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;
        self.sync_base_dir()?;

        tracing::debug!(
            "Saved ledger (level {}, xp {}/{}) to {}",
            state.level,
            state.xp_current,
            state.xp_next,
            self.path.display()
        );

        Ok(())
    }

    fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Deleted ledger: {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RepositoryError::Storage(e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
