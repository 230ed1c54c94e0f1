//! Configuration validation rules.
//!
//! - Experiment names in `opt_into` / `opt_out_from` must not be blank
//! - The same experiment must not be listed twice in one list
//! - `environments_file` must not be empty

use crate::config::schema::EnvrankConfig;
use crate::error::{EnvrankError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &EnvrankConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_experiment_list(
        "opt_into",
        &config.experiments.opt_into,
    ));
    errors.extend(validate_experiment_list(
        "opt_out_from",
        &config.experiments.opt_out_from,
    ));

    if let Some(path) = &config.environments_file {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError {
                rule: "empty-environments-file".to_string(),
                message: "'environments_file' must not be empty".to_string(),
            });
        }
    }

    errors
}

fn validate_experiment_list(field: &str, names: &[String]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for name in names {
        if name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "blank-experiment".to_string(),
                message: format!("'experiments.{}' contains a blank experiment name", field),
            });
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError {
                rule: "duplicate-experiment".to_string(),
                message: format!(
                    "'experiments.{}' lists '{}' more than once",
                    field, name
                ),
            });
        }
    }

    errors
}

/// Validate a configuration, joining every error into one.
pub fn validate(config: &EnvrankConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(EnvrankError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
