//! Console UI writing to stdout/stderr.

use super::theme::{should_use_colors, EnvrankTheme};
use super::{OutputMode, UserInterface};

/// UI implementation for terminal and piped output.
///
/// Results and status go to stdout, warnings and errors to stderr. Colors
/// are applied only when stdout is a terminal and `NO_COLOR` is unset.
pub struct ConsoleUI {
    mode: OutputMode,
    theme: EnvrankTheme,
}

impl ConsoleUI {
    /// Create a console UI, choosing colors from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            EnvrankTheme::new()
        } else {
            EnvrankTheme::plain()
        };
        Self { mode, theme }
    }

    /// Create a console UI that never styles output.
    pub fn plain(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: EnvrankTheme::plain(),
        }
    }
}

impl UserInterface for ConsoleUI {
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
        if self.mode.shows_results() {
            println!("{}", line);
        }
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
