//! Settings-backed experiment membership.

use async_trait::async_trait;

use super::{ExperimentService, ALL_EXPERIMENTS};
use crate::config::ExperimentSettings;
use crate::error::Result;

/// Resolves experiment membership from [`ExperimentSettings`].
///
/// Resolution order:
/// 1. Experiments disabled: not a member
/// 2. Opted out (by name or `All`): not a member
/// 3. Opted in (by name or `All`): member
/// 4. Otherwise: not a member
#[derive(Debug, Clone, Default)]
pub struct ConfiguredExperiments {
    settings: ExperimentSettings,
}

impl ConfiguredExperiments {
    pub fn new(settings: ExperimentSettings) -> Self {
        Self { settings }
    }

    /// Synchronous membership decision.
    pub fn is_member(&self, experiment: &str) -> bool {
        if !self.settings.enabled {
            return false;
        }
        if listed(&self.settings.opt_out_from, experiment) {
            return false;
        }
        listed(&self.settings.opt_into, experiment)
    }
}

fn listed(list: &[String], experiment: &str) -> bool {
    list.iter()
        .any(|name| name == experiment || name == ALL_EXPERIMENTS)
}

#[async_trait]
impl ExperimentService for ConfiguredExperiments {
    async fn in_experiment(&self, experiment: &str) -> Result<bool> {
        let member = self.is_member(experiment);
        tracing::debug!("Experiment '{}' active: {}", experiment, member);
        Ok(member)
    }
}
