//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`ConsoleUI`] for terminal and piped usage
//! - [`MockUI`] for capturing output in tests
//! - [`EnvrankTheme`] for styling
//!
//! # Example
//!
//! ```
//! use envrank::ui::{ConsoleUI, OutputMode, UserInterface};
//!
//! let mut ui = ConsoleUI::new(OutputMode::Silent);
//! ui.success("Setup complete!");
//! ```

pub mod console;
pub mod mock;
pub mod output;
pub mod theme;

pub use console::ConsoleUI;
pub use mock::MockUI;
pub use output::OutputMode;
pub use theme::{should_use_colors, EnvrankTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Theme used to style result lines.
    fn theme(&self) -> &EnvrankTheme;

    /// Display a line of command output (a suggestion, a JSON document).
    fn result(&mut self, line: &str);

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
