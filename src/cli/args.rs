//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// envrank - Rank Python environments for a workspace.
#[derive(Debug, Parser)]
#[command(name = "envrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .envrank/config.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show suggestions only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List ranked environment suggestions (default if no command specified)
    Suggest(SuggestArgs),

    /// Show which sorting strategy the experiment settings select
    Experiments(ExperimentsArgs),
}

/// Arguments for the `suggest` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SuggestArgs {
    /// Ask the environment source for fresh records
    #[arg(long)]
    pub ignore_cache: bool,

    /// Rank without a workspace scope
    #[arg(long)]
    pub no_scope: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `experiments` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExperimentsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suggest_flags() {
        let cli = Cli::parse_from(["envrank", "suggest", "--ignore-cache", "--json"]);
        match cli.command {
            Some(Commands::Suggest(args)) => {
                assert!(args.ignore_cache);
                assert!(args.json);
                assert!(!args.no_scope);
            }
            other => panic!("Expected Suggest, got {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["envrank", "experiments", "--project", "/proj", "--debug"]);
        assert_eq!(cli.project, Some(PathBuf::from("/proj")));
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Experiments(_))));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["envrank", "--quiet"]);
        assert!(cli.command.is_none());
        assert!(cli.quiet);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
