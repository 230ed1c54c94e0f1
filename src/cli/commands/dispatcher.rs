//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::experiments::ExperimentsCommand;
use super::suggest::SuggestCommand;
use crate::cli::args::{Cli, Commands, SuggestArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
#[async_trait(?Send)]
pub trait Command {
    /// Execute the command, writing output through `ui`.
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Load configuration from a single file instead of discovering it.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, `suggest` runs with default arguments.
    pub async fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config_override.as_deref();
        match &cli.command {
            Some(Commands::Suggest(args)) => {
                SuggestCommand::new(&self.project_root, config, args.clone())
                    .execute(ui)
                    .await
            }
            Some(Commands::Experiments(args)) => {
                ExperimentsCommand::new(&self.project_root, config, args.clone())
                    .execute(ui)
                    .await
            }
            None => {
                SuggestCommand::new(&self.project_root, config, SuggestArgs::default())
                    .execute(ui)
                    .await
            }
        }
    }
}
