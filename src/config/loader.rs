//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::EnvrankConfig;
use crate::error::{EnvrankError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.envrank/config.yml`)
/// 2. Project config (`.envrank/config.yml`)
/// 3. Local overrides (`.envrank/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.envrank/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .envrank/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .envrank/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref())
    }

    /// Discover config files with an explicit home directory (for testing).
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        Self {
            user_global: home.and_then(|h| existing(h.join(".envrank").join("config.yml"))),
            project: existing(project_root.join(".envrank").join("config.yml")),
            project_local: existing(project_root.join(".envrank").join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if any config file exists.
    pub fn has_any(&self) -> bool {
        !self.all_existing().is_empty()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.envrank` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(".envrank").is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<EnvrankConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvrankError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvrankError::Io(e)
        }
    })?;

    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| EnvrankError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<EnvrankConfig> {
    serde_yaml::from_value(value).map_err(|e| EnvrankError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all discovered config files for a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no config file exists at all.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<EnvrankConfig> {
    load_merged_from(&ConfigPaths::discover(project_root), project_root)
}

/// Load and merge the config files named by `paths`.
pub fn load_merged_from(paths: &ConfigPaths, project_root: &Path) -> Result<EnvrankConfig> {
    if !paths.has_any() {
        return Err(EnvrankError::ConfigNotFound {
            path: project_root.join(".envrank").join("config.yml"),
        });
    }

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    tracing::debug!("Merged {} config file(s)", configs.len());

    from_value(merged, &project_root.join(".envrank").join("config.yml"))
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files; finding none yields
/// the default configuration.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<EnvrankConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match load_merged_config(project_root) {
        Err(EnvrankError::ConfigNotFound { .. }) => {
            tracing::debug!("No configuration found, using defaults");
            Ok(EnvrankConfig::default())
        }
        other => other,
    }
}
