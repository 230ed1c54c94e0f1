//! envrank - Ranked Python environment suggestions.
//!
//! envrank decides which Python environments to offer for a workspace and in
//! what order. Candidates come from an environment source, are sorted by a
//! comparator chosen through an experiment flag, and are turned into display
//! records for a picker.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compare`] - Interpreter comparators
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`disposable`] - Deferred resource release
//! - [`environment`] - Environment records and sources
//! - [`error`] - Error types and result aliases
//! - [`experiment`] - Experiment membership
//! - [`paths`] - Path display helpers
//! - [`selector`] - The suggestion pipeline
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use envrank::compare::{DefaultComparer, InterpreterComparer};
//! use envrank::environment::EnvironmentRecord;
//!
//! let newer = EnvironmentRecord::new("/usr/bin/python3.12").with_version("3.12.1");
//! let older = EnvironmentRecord::new("/usr/bin/python3.9").with_version("3.9.7");
//! assert_eq!(DefaultComparer.compare(&newer, &older), Ordering::Less);
//! ```
//!
//! For manifest-backed ranking, see the integration tests.

pub mod cli;
pub mod compare;
pub mod config;
pub mod disposable;
pub mod environment;
pub mod error;
pub mod experiment;
pub mod paths;
pub mod selector;
pub mod ui;

pub use error::{EnvrankError, Result};
