//! Environment records as reported by an environment source.
//!
//! An [`EnvironmentRecord`] is read-only for the ranking pipeline. The fields
//! beyond `path`, `display_name` and `cached` feed the comparators.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:[-.]?(a|alpha|b|beta|c|rc|candidate|final)\.?(\d+)?)?\s*$",
    )
    .expect("version regex is valid")
});

/// Category of a Python environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentKind {
    Poetry,
    Pipenv,
    VirtualEnvWrapper,
    Venv,
    VirtualEnv,
    Conda,
    Pyenv,
    Global,
    System,
    WindowsStore,
    #[default]
    Unknown,
}

impl EnvironmentKind {
    /// Human-readable type name. Empty for [`EnvironmentKind::Unknown`].
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Poetry => "Poetry",
            Self::Pipenv => "Pipenv",
            Self::VirtualEnvWrapper => "VirtualEnvWrapper",
            Self::Venv => "Venv",
            Self::VirtualEnv => "VirtualEnv",
            Self::Conda => "Conda",
            Self::Pyenv => "Pyenv",
            Self::Global => "Global",
            Self::System => "System",
            Self::WindowsStore => "Microsoft Store",
            Self::Unknown => "",
        }
    }

    /// Whether this kind is a virtual environment usually living next to a project.
    pub fn is_virtual(&self) -> bool {
        matches!(
            self,
            Self::Poetry | Self::Pipenv | Self::VirtualEnvWrapper | Self::Venv | Self::VirtualEnv
        )
    }
}

/// CPU architecture an interpreter was built for.
///
/// Variant order is the ranking order used by the default comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X64,
    Arm64,
    X86,
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X64 => write!(f, "64-bit"),
            Self::Arm64 => write!(f, "ARM 64-bit"),
            Self::X86 => write!(f, "32-bit"),
        }
    }
}

/// Pre-release marker of a Python version. Variant order is release order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseLevel {
    Alpha,
    Beta,
    Candidate,
    #[default]
    Final,
}

/// A parsed Python version such as `3.10.4` or `3.13.0rc1`.
///
/// Equality and ordering ignore the raw text and compare the numeric parts,
/// then the release level and serial. A missing component sorts below any
/// present one, so `3` < `3.0` < `3.0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PythonVersion {
    pub major: u32,
    pub minor: Option<u32>,
    pub micro: Option<u32>,
    pub release: ReleaseLevel,
    pub serial: u32,
    raw: String,
}

impl PythonVersion {
    /// The version string as it was reported.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    fn key(&self) -> (u32, Option<u32>, Option<u32>, ReleaseLevel, u32) {
        (self.major, self.minor, self.micro, self.release, self.serial)
    }
}

impl FromStr for PythonVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = VERSION_REGEX
            .captures(s)
            .ok_or_else(|| format!("invalid Python version: {}", s))?;

        let number = |idx: usize| -> Result<Option<u32>, String> {
            caps.get(idx)
                .map(|m| {
                    m.as_str()
                        .parse::<u32>()
                        .map_err(|e| format!("invalid Python version {}: {}", s, e))
                })
                .transpose()
        };

        let major = number(1)?.ok_or_else(|| format!("invalid Python version: {}", s))?;
        let release = match caps.get(4).map(|m| m.as_str()) {
            Some("a" | "alpha") => ReleaseLevel::Alpha,
            Some("b" | "beta") => ReleaseLevel::Beta,
            Some("c" | "rc" | "candidate") => ReleaseLevel::Candidate,
            _ => ReleaseLevel::Final,
        };

        Ok(Self {
            major,
            minor: number(2)?,
            micro: number(3)?,
            release,
            serial: number(5)?.unwrap_or(0),
            raw: s.trim().to_string(),
        })
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PythonVersion> for String {
    fn from(version: PythonVersion) -> Self {
        version.raw
    }
}

impl std::fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl PartialEq for PythonVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PythonVersion {}

impl PartialOrd for PythonVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PythonVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// One runtime environment as reported by an environment source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    /// Path to the interpreter executable.
    pub path: PathBuf,

    /// Human-readable name, e.g. "Python 3.10.4 64-bit ('.venv': venv)".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Whether the record was served from a cache rather than freshly probed.
    #[serde(default)]
    pub cached: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<PythonVersion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,

    /// Distributor name (e.g. "Anaconda, Inc."). Ranked as "Python" when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default)]
    pub kind: EnvironmentKind,

    /// Environment name, e.g. the conda environment name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_name: Option<String>,

    /// Workspace folder this environment belongs to. `None` means global.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<PathBuf>,
}

impl EnvironmentRecord {
    /// Create a record for an interpreter path with every other field unset.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            display_name: None,
            cached: false,
            version: None,
            architecture: None,
            company: None,
            kind: EnvironmentKind::Unknown,
            env_name: None,
            workspace: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the version from text. Unparseable text leaves the version unset.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.parse().ok();
        self
    }

    pub fn with_kind(mut self, kind: EnvironmentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_architecture(mut self, architecture: Architecture) -> Self {
        self.architecture = Some(architecture);
        self
    }

    pub fn with_env_name(mut self, name: impl Into<String>) -> Self {
        self.env_name = Some(name.into());
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<PathBuf>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn with_cached(mut self, cached: bool) -> Self {
        self.cached = cached;
        self
    }

    /// Whether this is a conda environment.
    pub fn is_conda(&self) -> bool {
        self.kind == EnvironmentKind::Conda
    }

    /// Whether this is the `base` conda environment.
    pub fn is_base_conda(&self) -> bool {
        self.is_conda() && self.env_name.as_deref() == Some("base")
    }

    /// Whether this record should be offered for the given scope.
    ///
    /// Global records apply everywhere. Workspace-local records apply only
    /// when the scope is that workspace or a folder nested inside it.
    pub fn applies_to(&self, scope: Option<&Path>) -> bool {
        match &self.workspace {
            None => true,
            Some(workspace) => scope.is_some_and(|s| s.starts_with(workspace)),
        }
    }
}
