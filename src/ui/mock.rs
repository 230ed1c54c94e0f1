//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use envrank::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.result(" 1. Python 3.12  /usr/bin/python3.12");
//! ui.success("Done!");
//!
//! assert!(ui.has_result("Python 3.12"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::theme::EnvrankTheme;
use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    theme: EnvrankTheme,
    results: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI with Normal output mode and a plain theme.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: EnvrankTheme::plain(),
            results: Vec::new(),
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Get all captured result lines.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a result line containing `text` was shown.
    pub fn has_result(&self, text: &str) -> bool {
        self.results.iter().any(|m| m.contains(text))
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn theme(&self) -> &EnvrankTheme {
        &self.theme
    }

    fn result(&mut self, line: &str) {
        self.results.push(line.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
