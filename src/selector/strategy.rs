//! Per-invocation choice of comparator.

use std::sync::Arc;

use crate::compare::{ComparerSet, ComparisonType, InterpreterComparer};
use crate::error::{EnvrankError, Result};
use crate::experiment::{ExperimentService, ENVIRONMENT_SORTING_EXPERIMENT};

/// Decides which comparator governs a suggestion list.
///
/// Membership in the environment sorting experiment selects
/// [`ComparisonType::EnvType`]; otherwise [`ComparisonType::Default`]. The
/// experiment is checked on every call and never memoized. A failed check
/// is an error; no comparator is substituted.
#[derive(Clone)]
pub struct StrategySelector {
    experiments: Arc<dyn ExperimentService>,
    comparers: ComparerSet,
}

impl StrategySelector {
    pub fn new(experiments: Arc<dyn ExperimentService>, comparers: ComparerSet) -> Self {
        Self {
            experiments,
            comparers,
        }
    }

    /// Resolve which comparator key is active right now.
    pub async fn active_type(&self) -> Result<ComparisonType> {
        let in_experiment = self
            .experiments
            .in_experiment(ENVIRONMENT_SORTING_EXPERIMENT)
            .await
            .map_err(|e| match e {
                EnvrankError::StrategyResolution { .. } => e,
                other => EnvrankError::StrategyResolution {
                    experiment: ENVIRONMENT_SORTING_EXPERIMENT.to_string(),
                    message: other.to_string(),
                },
            })?;

        Ok(if in_experiment {
            ComparisonType::EnvType
        } else {
            ComparisonType::Default
        })
    }

    /// Resolve the active comparator together with its key.
    pub async fn resolve(&self) -> Result<(ComparisonType, Arc<dyn InterpreterComparer>)> {
        let kind = self.active_type().await?;
        Ok((kind, self.comparers.get(kind)))
    }
}

impl std::fmt::Debug for StrategySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategySelector")
            .field("comparers", &self.comparers)
            .finish_non_exhaustive()
    }
}
