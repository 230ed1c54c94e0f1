//! Suggest command implementation.
//!
//! The `envrank suggest` command prints the ranked environment list for the
//! project.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::cli::args::SuggestArgs;
use crate::config::{load_config, validate};
use crate::error::{EnvrankError, Result};
use crate::selector::InterpreterSelector;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The suggest command implementation.
pub struct SuggestCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: SuggestArgs,
}

impl SuggestCommand {
    /// Create a new suggest command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: SuggestArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SuggestArgs {
        &self.args
    }

    fn scope(&self) -> Option<&Path> {
        if self.args.no_scope {
            None
        } else {
            Some(&self.project_root)
        }
    }
}

#[async_trait(?Send)]
impl Command for SuggestCommand {
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        validate(&config)?;

        // Apply config default_output when no CLI flag was explicitly set
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        let mut selector = InterpreterSelector::from_config(&self.project_root, &config);
        let outcome = selector
            .get_suggestions(self.scope(), self.args.ignore_cache)
            .await;
        selector.dispose();

        let suggestions = match outcome {
            Ok(suggestions) => suggestions,
            Err(EnvrankError::ManifestNotFound { path }) => {
                ui.error(&format!(
                    "No environment manifest found at {}",
                    path.display()
                ));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&suggestions)
                .map_err(|e| EnvrankError::Other(e.into()))?;
            ui.result(&json);
            return Ok(CommandResult::success());
        }

        if suggestions.is_empty() {
            ui.warning("No environments apply to this project");
            return Ok(CommandResult::success());
        }

        if let Some(scope) = self.scope() {
            ui.message(&format!("Environments for {}:", scope.display()));
        }
        for (index, suggestion) in suggestions.iter().enumerate() {
            let line = ui
                .theme()
                .format_suggestion(index + 1, &suggestion.label, &suggestion.detail);
            ui.result(&line);
        }

        Ok(CommandResult::success())
    }
}
