//! Configuration loading, parsing, and validation for envrank.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use envrank::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".envrank");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "experiments:\n  opt_into: [pythonSortEnvs]\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.experiments.opt_into, vec!["pythonSortEnvs".to_string()]);
//! ```
//!
//! # Configuration File Locations
//!
//! envrank discovers and merges configuration in this order:
//! 1. User global config (`~/.envrank/config.yml`)
//! 2. Project config (`.envrank/config.yml`)
//! 3. Local overrides (`.envrank/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    load_merged_from, ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{
    EnvrankConfig, ExperimentSettings, OutputMode, Settings, DEFAULT_ENVIRONMENTS_FILE,
    SNAPSHOT_FILE,
};
pub use validator::{validate, validate_config, ValidationError};
