//! Append-only journal file.
//!
//! Entries are stored one JSON document per line:
//! ```text
//! {"recorded_at":"...","activity":"physical",...}
//! {"recorded_at":"...","activity":"intel",...}
//! ```
//!
//! A final line without its newline is the remains of an interrupted append.
//! Reads skip it and the next append cuts it off before writing.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::repository::{JournalEntry, JournalRepository, RepositoryError, Result};

/// File-based journal of completed activities (`journal.jsonl`).
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub const FILE_NAME: &'static str = "journal.jsonl";

    /// Create a journal rooted at `base_dir`. The file itself is created on first append.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<JournalEntry>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepositoryError::Storage(e)),
        };

        let mut entries = Vec::new();
        for (index, line) in bytes.split_inclusive(|byte| *byte == b'\n').enumerate() {
            let Some(line) = line.strip_suffix(b"\n") else {
                tracing::warn!(
                    "Skipping unterminated journal line {}:{}",
                    self.path.display(),
                    index + 1
                );
                continue;
            };
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            let entry = serde_json::from_slice(line).map_err(|e| {
                RepositoryError::corrupt(
                    format!("{}:{}", self.path.display(), index + 1),
                    e,
                )
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Cut a partial trailing line left by an interrupted append.
    fn truncate_torn_tail(&self) -> Result<()> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(RepositoryError::Storage(e)),
        };
        if file.metadata()?.len() == 0 {
            return Ok(());
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last[0] == b'\n' {
            return Ok(());
        }

        let bytes = fs::read(&self.path)?;
        let keep = bytes
            .iter()
            .rposition(|byte| *byte == b'\n')
            .map_or(0, |index| index + 1);
        OpenOptions::new()
            .write(true)
            .open(&self.path)?
            .set_len(keep as u64)?;

        tracing::warn!(
            "Dropped {} bytes of an unterminated entry from {}",
            bytes.len() - keep,
            self.path.display()
        );
        Ok(())
    }
}

impl JournalRepository for FileJournal {
    fn append(&self, entry: &JournalEntry) -> Result<()> {
        let mut line =
            serde_json::to_vec(entry).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        line.push(b'\n');

        self.truncate_torn_tail()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;
        file.flush()?;

        tracing::debug!(
            "Journaled {} (+{} xp) to {}",
            entry.activity,
            entry.xp_gained,
            self.path.display()
        );

        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<JournalEntry>> {
        let entries = self.read_all()?;
        Ok(entries.into_iter().rev().take(limit).collect())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Cleared journal: {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RepositoryError::Storage(e)),
        }
    }
}
