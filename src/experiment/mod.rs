//! Experiment membership.
//!
//! The ranking pipeline asks an [`ExperimentService`] whether the
//! environment sorting experiment is active; how membership is decided is
//! the service's business. [`ConfiguredExperiments`] answers from the
//! user's opt-in / opt-out settings.

pub mod settings;

pub use settings::ConfiguredExperiments;

use async_trait::async_trait;

use crate::error::Result;

/// Experiment that switches suggestions to environment-type-aware sorting.
pub const ENVIRONMENT_SORTING_EXPERIMENT: &str = "pythonSortEnvs";

/// Wildcard matching every experiment in opt-in / opt-out lists.
pub const ALL_EXPERIMENTS: &str = "All";

/// Answers whether the current user is in a named experiment.
#[async_trait]
pub trait ExperimentService: Send + Sync {
    /// Check membership in `experiment`.
    async fn in_experiment(&self, experiment: &str) -> Result<bool>;
}
