//! On-disk snapshot of the last manifest read.
//!
//! Lets a later process serve the previous result as cached records.

use std::path::{Path, PathBuf};

use super::record::EnvironmentRecord;
use crate::error::{EnvrankError, Result};

/// JSON file holding the records of the last fresh manifest read.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored records, or `None` if no snapshot was written yet.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `Other` if it is not a
    /// valid snapshot.
    pub async fn load(&self) -> Result<Option<Vec<EnvironmentRecord>>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(EnvrankError::Io(e)),
        };

        let records: Vec<EnvironmentRecord> = serde_json::from_str(&json).map_err(|e| {
            EnvrankError::Other(anyhow::anyhow!(
                "Invalid snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(Some(records))
    }

    /// Replace the snapshot with `records`, creating parent directories.
    pub async fn save(&self, records: &[EnvironmentRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let fresh: Vec<EnvironmentRecord> = records
            .iter()
            .cloned()
            .map(|record| record.with_cached(false))
            .collect();
        let json =
            serde_json::to_string_pretty(&fresh).map_err(|e| EnvrankError::Other(e.into()))?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
