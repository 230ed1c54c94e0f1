//! envrank CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use envrank::cli::{Cli, CommandDispatcher};
use envrank::config::find_project_root;
use envrank::ui::{ConsoleUI, OutputMode, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so suggestion output stays machine-readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("envrank=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envrank=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("envrank starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    // Determine project root
    let project_root = match cli.project.clone() {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().unwrap_or_default();
            find_project_root(&cwd).unwrap_or(cwd)
        }
    };

    // Handle --no-color
    let mut ui = if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
        ConsoleUI::plain(output_mode)
    } else {
        ConsoleUI::new(output_mode)
    };
    let dispatcher = CommandDispatcher::new(project_root).with_config_override(cli.config.clone());

    match dispatcher.dispatch(&cli, &mut ui).await {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
