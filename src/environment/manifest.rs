//! Manifest-backed environment source.
//!
//! Reads environment records from a YAML manifest:
//!
//! ```yaml
//! environments:
//!   - path: /usr/bin/python3
//!     display_name: Python 3.9.7 64-bit
//!     version: "3.9.7"
//!     kind: system
//!   - path: /home/me/proj/.venv/bin/python
//!     display_name: Python 3.11.4 ('.venv': venv)
//!     version: "3.11.4"
//!     kind: venv
//!     workspace: /home/me/proj
//! ```
//!
//! The first successful read is kept as a snapshot. Later calls are served
//! from the snapshot with every record marked `cached`, until a caller asks
//! to ignore the cache, which re-reads the file. With a snapshot file
//! configured the snapshot also outlives the process.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::record::EnvironmentRecord;
use super::snapshot::SnapshotStore;
use super::source::{EnvironmentSource, GetInterpretersOptions};
use crate::error::{EnvrankError, Result};

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    environments: Vec<EnvironmentRecord>,
}

/// Environment source reading a YAML manifest file.
#[derive(Debug)]
pub struct ManifestSource {
    path: PathBuf,
    snapshot: Mutex<Option<Vec<EnvironmentRecord>>>,
    store: Option<SnapshotStore>,
}

impl ManifestSource {
    /// Create a source for the manifest at `path`. Nothing is read until the
    /// first retrieval.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: Mutex::new(None),
            store: None,
        }
    }

    /// Persist the snapshot to `path` so later processes start from it.
    pub fn with_snapshot_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.store = Some(SnapshotStore::new(path));
        self
    }

    /// Path of the manifest file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_manifest(&self) -> Result<Vec<EnvironmentRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    EnvrankError::ManifestNotFound {
                        path: self.path.clone(),
                    }
                } else {
                    EnvrankError::Retrieval {
                        message: format!("{}: {}", self.path.display(), e),
                    }
                }
            })?;

        let manifest = parse_manifest(&content, &self.path)?;
        validate_manifest(&manifest)?;

        tracing::debug!(
            "Read {} environment(s) from {}",
            manifest.len(),
            self.path.display()
        );
        Ok(manifest)
    }

    /// Load the persisted snapshot. An unreadable snapshot is ignored.
    async fn load_persisted(&self) -> Option<Vec<EnvironmentRecord>> {
        let store = self.store.as_ref()?;
        match store.load().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Ignoring snapshot {}: {}", store.path().display(), e);
                None
            }
        }
    }

    /// Write a fresh read to the snapshot file. Failing to write is not fatal.
    async fn persist(&self, records: &[EnvironmentRecord]) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(records).await {
                tracing::warn!("Could not write snapshot {}: {}", store.path().display(), e);
            }
        }
    }
}

#[async_trait]
impl EnvironmentSource for ManifestSource {
    async fn get_interpreters(
        &self,
        scope: Option<&Path>,
        options: GetInterpretersOptions,
    ) -> Result<Vec<EnvironmentRecord>> {
        let mut snapshot = self.snapshot.lock().await;

        if !options.ignore_cache && snapshot.is_none() {
            *snapshot = self.load_persisted().await;
        }

        let records = match snapshot.as_ref() {
            Some(previous) if !options.ignore_cache => previous
                .iter()
                .cloned()
                .map(|record| record.with_cached(true))
                .collect::<Vec<_>>(),
            _ => {
                let fresh = self.read_manifest().await?;
                self.persist(&fresh).await;
                *snapshot = Some(fresh.clone());
                fresh
            }
        };

        Ok(records
            .into_iter()
            .filter(|record| record.applies_to(scope))
            .collect())
    }
}

/// Parse manifest YAML into records.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Vec<EnvironmentRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let manifest: Manifest =
        serde_yaml::from_str(content).map_err(|e| EnvrankError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(manifest.environments)
}

/// Reject manifests listing the same interpreter path twice.
pub fn validate_manifest(records: &[EnvironmentRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.path.as_path()) {
            return Err(EnvrankError::ConfigValidationError {
                message: format!(
                    "environment '{}' is listed more than once",
                    record.path.display()
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentKind;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
environments:
  - path: /usr/bin/python3
    display_name: Python 3.9
    version: "3.9"
    kind: system
  - path: /proj/.venv/bin/python
    display_name: Python 3.11 ('.venv')
    version: "3.11.4"
    kind: venv
    workspace: /proj
"#;

    fn write_manifest(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("environments.yml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn options(ignore_cache: bool) -> GetInterpretersOptions {
        GetInterpretersOptions {
            on_suggestion: true,
            ignore_cache,
        }
    }

    #[tokio::test]
    async fn first_read_is_fresh() {
        let (_temp, path) = write_manifest(MANIFEST);
        let source = ManifestSource::new(&path);

        let records = source
            .get_interpreters(Some(Path::new("/proj")), options(false))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.cached));
        assert_eq!(records[1].kind, EnvironmentKind::Venv);
    }

    #[tokio::test]
    async fn second_read_is_served_from_snapshot() {
        let (_temp, path) = write_manifest(MANIFEST);
        let source = ManifestSource::new(&path);

        source.get_interpreters(None, options(false)).await.unwrap();
        fs::remove_file(&path).unwrap();

        let records = source.get_interpreters(None, options(false)).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].cached);
    }

    #[tokio::test]
    async fn ignore_cache_rereads_manifest() {
        let (_temp, path) = write_manifest(MANIFEST);
        let source = ManifestSource::new(&path);

        source.get_interpreters(None, options(false)).await.unwrap();
        fs::write(
            &path,
            "environments:\n  - path: /opt/python/bin/python3\n    display_name: Opt\n",
        )
        .unwrap();

        let records = source.get_interpreters(None, options(true)).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, PathBuf::from("/opt/python/bin/python3"));
        assert!(!records[0].cached);
    }

    #[tokio::test]
    async fn workspace_records_are_filtered_by_scope() {
        let (_temp, path) = write_manifest(MANIFEST);
        let source = ManifestSource::new(&path);

        let none = source.get_interpreters(None, options(true)).await.unwrap();
        assert_eq!(none.len(), 1);

        let other = source
            .get_interpreters(Some(Path::new("/elsewhere")), options(true))
            .await
            .unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].path, PathBuf::from("/usr/bin/python3"));
    }

    #[tokio::test]
    async fn missing_manifest_is_reported() {
        let temp = TempDir::new().unwrap();
        let source = ManifestSource::new(temp.path().join("missing.yml"));

        let err = source
            .get_interpreters(None, options(false))
            .await
            .unwrap_err();
        assert!(matches!(err, EnvrankError::ManifestNotFound { .. }));
    }

    #[tokio::test]
    async fn failed_read_does_not_poison_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("environments.yml");
        let source = ManifestSource::new(&path);

        assert!(source.get_interpreters(None, options(false)).await.is_err());

        fs::write(&path, MANIFEST).unwrap();
        let records = source.get_interpreters(None, options(false)).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].cached);
    }

    #[tokio::test]
    async fn snapshot_file_serves_a_new_source_as_cached() {
        let (temp, path) = write_manifest(MANIFEST);
        let snapshot = temp.path().join("cache").join("snapshot.json");

        let first = ManifestSource::new(&path).with_snapshot_file(&snapshot);
        let records = first.get_interpreters(None, options(false)).await.unwrap();
        assert!(!records[0].cached);
        assert!(snapshot.exists());

        fs::remove_file(&path).unwrap();
        let second = ManifestSource::new(&path).with_snapshot_file(&snapshot);
        let records = second.get_interpreters(None, options(false)).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].cached);
    }

    #[tokio::test]
    async fn ignore_cache_refreshes_snapshot_file() {
        let (temp, path) = write_manifest(MANIFEST);
        let snapshot = temp.path().join("snapshot.json");
        ManifestSource::new(&path)
            .with_snapshot_file(&snapshot)
            .get_interpreters(None, options(false))
            .await
            .unwrap();

        fs::write(
            &path,
            "environments:\n  - path: /opt/python/bin/python3\n    display_name: Opt\n",
        )
        .unwrap();
        let refreshed = ManifestSource::new(&path)
            .with_snapshot_file(&snapshot)
            .get_interpreters(None, options(true))
            .await
            .unwrap();
        assert_eq!(refreshed[0].path, PathBuf::from("/opt/python/bin/python3"));
        assert!(!refreshed[0].cached);

        let later = ManifestSource::new(&path)
            .with_snapshot_file(&snapshot)
            .get_interpreters(None, options(false))
            .await
            .unwrap();
        assert_eq!(later[0].path, PathBuf::from("/opt/python/bin/python3"));
        assert!(later[0].cached);
    }

    #[tokio::test]
    async fn corrupt_snapshot_file_falls_back_to_manifest() {
        let (temp, path) = write_manifest(MANIFEST);
        let snapshot = temp.path().join("snapshot.json");
        fs::write(&snapshot, "garbage").unwrap();

        let records = ManifestSource::new(&path)
            .with_snapshot_file(&snapshot)
            .get_interpreters(None, options(false))
            .await
            .unwrap();
        assert!(!records[0].cached);
    }

    #[test]
    fn parse_manifest_reports_path_on_error() {
        let err = parse_manifest("environments: [", Path::new("/m.yml")).unwrap_err();
        assert!(err.to_string().contains("/m.yml"));
    }

    #[test]
    fn parse_empty_manifest() {
        let records = parse_manifest("   \n", Path::new("/m.yml")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let records = vec![
            EnvironmentRecord::new("/usr/bin/python3"),
            EnvironmentRecord::new("/usr/bin/python3"),
        ];
        let err = validate_manifest(&records).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
