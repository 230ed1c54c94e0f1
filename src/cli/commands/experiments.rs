//! Experiments command implementation.
//!
//! The `envrank experiments` command reports whether the environment sorting
//! experiment is active and which comparator it selects.

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::ExperimentsArgs;
use crate::config::{load_config, validate};
use crate::error::{EnvrankError, Result};
use crate::experiment::ENVIRONMENT_SORTING_EXPERIMENT;
use crate::selector::InterpreterSelector;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The experiments command implementation.
pub struct ExperimentsCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ExperimentsArgs,
}

#[derive(Serialize)]
struct ExperimentReport<'a> {
    experiment: &'a str,
    active: bool,
    comparator: String,
}

impl ExperimentsCommand {
    /// Create a new experiments command.
    pub fn new(
        project_root: &Path,
        config_override: Option<&Path>,
        args: ExperimentsArgs,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

#[async_trait(?Send)]
impl Command for ExperimentsCommand {
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        validate(&config)?;

        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        let selector = InterpreterSelector::from_config(&self.project_root, &config);
        let kind = match selector.strategy().active_type().await {
            Ok(kind) => kind,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let report = ExperimentReport {
            experiment: ENVIRONMENT_SORTING_EXPERIMENT,
            active: kind == crate::compare::ComparisonType::EnvType,
            comparator: kind.to_string(),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| EnvrankError::Other(e.into()))?;
            ui.result(&json);
        } else {
            let state = if report.active { "active" } else { "inactive" };
            ui.message(&format!("{}: {}", report.experiment, state));
            ui.result(&format!("Sorting by: {}", report.comparator));
        }

        Ok(CommandResult::success())
    }
}
