//! Turning environment records into display records.

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::environment::EnvironmentRecord;
use crate::error::{EnvrankError, Result};
use crate::paths::PathUtils;

/// Marker prepended to the detail of records served from a cache.
pub const CACHED_PREFIX: &str = "(cached) ";

/// One entry of a suggestion list, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    /// The environment's display name.
    pub label: String,
    /// Human-readable location, prefixed with [`CACHED_PREFIX`] for cached records.
    pub detail: String,
    /// Interpreter path.
    pub path: PathBuf,
    /// The record this entry was built from.
    pub interpreter: EnvironmentRecord,
}

/// Builds a [`DisplayRecord`] for one environment.
#[async_trait]
pub trait SuggestionMapper: Send + Sync {
    async fn to_display_record(
        &self,
        env: &EnvironmentRecord,
        scope: Option<&Path>,
    ) -> Result<DisplayRecord>;
}

/// The standard mapper: label from the display name, detail from the path
/// formatter.
#[derive(Clone)]
pub struct DisplayMapper {
    paths: Arc<dyn PathUtils>,
}

impl DisplayMapper {
    pub fn new(paths: Arc<dyn PathUtils>) -> Self {
        Self { paths }
    }

    /// Build the display record without suspending.
    ///
    /// A record without a display name breaks the source's contract and is
    /// reported as [`EnvrankError::Mapping`].
    pub fn map(&self, env: &EnvironmentRecord, scope: Option<&Path>) -> Result<DisplayRecord> {
        let label = env.display_name.clone().ok_or_else(|| {
            tracing::warn!("Environment {} has no display name", env.path.display());
            EnvrankError::Mapping {
                path: env.path.clone(),
                message: "environment has no display name".to_string(),
            }
        })?;

        let location = self.paths.display_name(&env.path, scope);
        let prefix = if env.cached { CACHED_PREFIX } else { "" };

        Ok(DisplayRecord {
            label,
            detail: format!("{}{}", prefix, location),
            path: env.path.clone(),
            interpreter: env.clone(),
        })
    }
}

#[async_trait]
impl SuggestionMapper for DisplayMapper {
    async fn to_display_record(
        &self,
        env: &EnvironmentRecord,
        scope: Option<&Path>,
    ) -> Result<DisplayRecord> {
        self.map(env, scope)
    }
}

impl std::fmt::Debug for DisplayMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayMapper").finish_non_exhaustive()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::paths::HomeRelativePaths;

    fn mapper() -> DisplayMapper {
        DisplayMapper::new(Arc::new(HomeRelativePaths::with_home("/home/me")))
    }

    #[tokio::test]
    async fn cached_record_gets_prefix() {
        let env = EnvironmentRecord::new("/opt/env/bin/python")
            .with_display_name("Python 3.10")
            .with_cached(true);

        let record = mapper().to_display_record(&env, None).await.unwrap();
        assert_eq!(record.detail, "(cached) /opt/env/bin/python");
        assert!(record.detail.starts_with(CACHED_PREFIX));
    }

    #[tokio::test]
    async fn fresh_record_has_no_prefix() {
        let env = EnvironmentRecord::new("/usr/bin/python3").with_display_name("Python 3.9");

        let record = mapper().to_display_record(&env, None).await.unwrap();
        assert_eq!(record.detail, "/usr/bin/python3");
        assert!(!record.detail.contains("(cached)"));
    }

    #[tokio::test]
    async fn detail_is_relative_to_scope() {
        let env = EnvironmentRecord::new("/home/me/proj/.venv/bin/python")
            .with_display_name("Python 3.11 ('.venv')")
            .with_cached(true);

        let record = mapper()
            .to_display_record(&env, Some(Path::new("/home/me/proj")))
            .await
            .unwrap();
        assert_eq!(record.detail, "(cached) ./.venv/bin/python");
    }

    #[test]
    fn label_path_and_backref() {
        let env = EnvironmentRecord::new("/home/me/.pyenv/versions/3.12.1/bin/python")
            .with_display_name("Python 3.12.1")
            .with_version("3.12.1");

        let record = mapper().map(&env, None).unwrap();
        assert_eq!(record.label, "Python 3.12.1");
        assert_eq!(record.detail, "~/.pyenv/versions/3.12.1/bin/python");
        assert_eq!(record.path, env.path);
        assert_eq!(record.interpreter, env);
    }

    #[test]
    fn missing_display_name_is_mapping_error() {
        let env = EnvironmentRecord::new("/usr/bin/python3");
        let err = mapper().map(&env, None).unwrap_err();
        assert!(matches!(err, EnvrankError::Mapping { .. }));
        assert!(err.to_string().contains("/usr/bin/python3"));
    }

    #[test]
    fn display_record_serializes() {
        let env = EnvironmentRecord::new("/usr/bin/python3").with_display_name("Python 3.9");
        let record = mapper().map(&env, None).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["label"], "Python 3.9");
        assert_eq!(json["interpreter"]["path"], "/usr/bin/python3");
    }
}
