//! Human-readable rendering of interpreter paths.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Formats a filesystem path for display.
pub trait PathUtils: Send + Sync {
    /// Render `path` for display, relative to `cwd` when given.
    fn display_name(&self, path: &Path, cwd: Option<&Path>) -> String;
}

/// Renders paths relative to the workspace (`./...`) or the user's home
/// directory (`~/...`), falling back to the path unchanged.
///
/// Prefix matching is per path component, so `/home/me2` is not treated as
/// being inside `/home/me`.
#[derive(Debug, Clone)]
pub struct HomeRelativePaths {
    home: Option<PathBuf>,
}

impl Default for HomeRelativePaths {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeRelativePaths {
    /// Use the current user's home directory.
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    /// Use an explicit home directory (for testing).
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Never abbreviate to `~`.
    pub fn without_home() -> Self {
        Self { home: None }
    }
}

impl PathUtils for HomeRelativePaths {
    fn display_name(&self, path: &Path, cwd: Option<&Path>) -> String {
        if let Some(relative) = cwd.and_then(|cwd| path.strip_prefix(cwd).ok()) {
            return format!(".{}{}", MAIN_SEPARATOR, relative.display());
        }

        if let Some(relative) = self
            .home
            .as_deref()
            .and_then(|home| path.strip_prefix(home).ok())
        {
            return format!("~{}{}", MAIN_SEPARATOR, relative.display());
        }

        path.display().to_string()
    }
}
