//! Configuration schema definitions for envrank.
//!
//! This module contains the struct definitions that map to the
//! `.envrank/config.yml` file format:
//!
//! ```yaml
//! settings:
//!   default_output: normal
//! experiments:
//!   enabled: true
//!   opt_into: [pythonSortEnvs]
//!   opt_out_from: []
//! environments_file: .envrank/environments.yml
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default manifest location, relative to the project root.
pub const DEFAULT_ENVIRONMENTS_FILE: &str = ".envrank/environments.yml";

/// Snapshot of the last manifest read, relative to the project root.
pub const SNAPSHOT_FILE: &str = ".envrank/cache/environments.json";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvrankConfig {
    /// Global settings
    pub settings: Settings,

    /// Experiment opt-in / opt-out settings
    pub experiments: ExperimentSettings,

    /// Environment manifest path (relative paths resolve against the project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments_file: Option<PathBuf>,
}

impl EnvrankConfig {
    /// Resolve the manifest path for a project.
    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        match &self.environments_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => project_root.join(path),
            None => project_root.join(DEFAULT_ENVIRONMENTS_FILE),
        }
    }

    /// Where cached manifest reads are kept for a project.
    pub fn snapshot_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(SNAPSHOT_FILE)
    }
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: normal, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// Experiment membership overrides.
///
/// `All` in either list matches every experiment. Opting out wins over
/// opting in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentSettings {
    /// Master switch; when false no experiment is active
    pub enabled: bool,

    /// Experiments to join
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opt_into: Vec<String>,

    /// Experiments to leave
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opt_out_from: Vec<String>,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            opt_into: Vec::new(),
            opt_out_from: Vec::new(),
        }
    }
}
