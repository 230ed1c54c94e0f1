//! Error types for envrank operations.
//!
//! This module defines [`EnvrankError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Ranking failures (`Retrieval`, `StrategyResolution`, `Mapping`) abort the
//!   whole suggestion call; no partial or fallback list is ever produced
//! - Use `anyhow::Error` (via `EnvrankError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envrank operations.
#[derive(Debug, Error)]
pub enum EnvrankError {
    /// The environment source could not produce candidates.
    #[error("Failed to retrieve environments: {message}")]
    Retrieval { message: String },

    /// The experiment check that selects the comparator did not complete.
    #[error("Could not resolve sorting strategy from experiment '{experiment}': {message}")]
    StrategyResolution { experiment: String, message: String },

    /// A single environment could not be turned into a display record.
    #[error("Failed to present environment {path}: {message}")]
    Mapping { path: PathBuf, message: String },

    /// Environment manifest not found at expected location.
    #[error("Environment manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or manifest file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envrank operations.
pub type Result<T> = std::result::Result<T, EnvrankError>;
