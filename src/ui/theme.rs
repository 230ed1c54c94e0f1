//! Visual theme and styling.

use console::Style;

/// envrank's visual theme.
#[derive(Debug, Clone)]
pub struct EnvrankTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for secondary text such as suggestion details (dim).
    pub dim: Style,
    /// Style for suggestion labels (bold).
    pub label: Style,
    /// Style for the cached marker (orange dim).
    pub cached: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for rank numbers (dim).
    pub rank: Style,
}

impl Default for EnvrankTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvrankTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            label: Style::new().bold(),
            cached: Style::new().color256(208).dim(),
            key: Style::new().bold(),
            rank: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            label: Style::new(),
            cached: Style::new(),
            key: Style::new(),
            rank: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format one suggestion line: rank, label, and detail.
    ///
    /// A leading cached marker in `detail` is styled separately.
    pub fn format_suggestion(&self, rank: usize, label: &str, detail: &str) -> String {
        let detail = match detail.strip_prefix(crate::selector::CACHED_PREFIX) {
            Some(rest) => format!(
                "{}{}",
                self.cached.apply_to(crate::selector::CACHED_PREFIX),
                self.dim.apply_to(rest)
            ),
            None => format!("{}", self.dim.apply_to(detail)),
        };
        format!(
            "{} {}  {}",
            self.rank.apply_to(format!("{:>2}.", rank)),
            self.label.apply_to(label),
            detail
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
