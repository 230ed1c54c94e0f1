//! Environment-category-aware interpreter ranking.

use std::cmp::Ordering;

use super::default::DefaultComparer;
use super::InterpreterComparer;
use crate::environment::{EnvironmentKind, EnvironmentRecord};

/// Category order: local virtual environments, then global installs.
const CATEGORY_PRIORITY: &[EnvironmentKind] = &[
    EnvironmentKind::Poetry,
    EnvironmentKind::Pipenv,
    EnvironmentKind::VirtualEnvWrapper,
    EnvironmentKind::Venv,
    EnvironmentKind::VirtualEnv,
    EnvironmentKind::Conda,
    EnvironmentKind::Pyenv,
    EnvironmentKind::Global,
    EnvironmentKind::System,
    EnvironmentKind::WindowsStore,
    EnvironmentKind::Unknown,
];

/// Rank of `kind` in the category order. Lower ranks first.
pub fn category_priority(kind: EnvironmentKind) -> usize {
    CATEGORY_PRIORITY
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(CATEGORY_PRIORITY.len())
}

/// Ranks interpreters by environment category first.
///
/// Within a category the conda `base` environment goes after named conda
/// environments; remaining ties are broken by [`DefaultComparer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvTypeComparer {
    fallback: DefaultComparer,
}

impl EnvTypeComparer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InterpreterComparer for EnvTypeComparer {
    fn compare(&self, a: &EnvironmentRecord, b: &EnvironmentRecord) -> Ordering {
        category_priority(a.kind)
            .cmp(&category_priority(b.kind))
            .then_with(|| a.is_base_conda().cmp(&b.is_base_conda()))
            .then_with(|| self.fallback.compare(a, b))
    }
}
