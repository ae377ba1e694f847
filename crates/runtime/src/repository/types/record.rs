//! Versioned on-disk envelope for the player ledger.

use awaken_core::PlayerState;
use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, Result};

/// Persisted form of the single ledger record.
///
/// The version is checked before the body is decoded so that a record written
/// by a newer build is reported instead of being misread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerRecord {
    pub version: u32,
    pub player: PlayerState,
}

#[derive(Deserialize)]
struct RecordHeader {
    version: u32,
}

impl LedgerRecord {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(player: PlayerState) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            player,
        }
    }

    /// Serializes the record as pretty-printed JSON.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    /// Strictly decodes and validates a record read from `location`.
    pub fn decode(bytes: &[u8], location: &str) -> Result<PlayerState> {
        let header: RecordHeader = serde_json::from_slice(bytes)
            .map_err(|e| RepositoryError::corrupt(location, e))?;

        if header.version != Self::CURRENT_VERSION {
            return Err(RepositoryError::corrupt(
                location,
                format!(
                    "unsupported record version {} (expected {})",
                    header.version,
                    Self::CURRENT_VERSION
                ),
            ));
        }

        let record: LedgerRecord = serde_json::from_slice(bytes)
            .map_err(|e| RepositoryError::corrupt(location, e))?;
        record
            .player
            .validate()
            .map_err(|violation| RepositoryError::corrupt(location, violation))?;

        Ok(record.player)
    }
}
