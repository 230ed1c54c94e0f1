//! Interpreter ordering.
//!
//! Two interchangeable comparators rank environment records:
//!
//! - [`DefaultComparer`] - version descending, then architecture, company,
//!   environment type and name, with the interpreter path as final tie-break
//! - [`EnvTypeComparer`] - environment category first, then as the default
//!
//! Which one governs a given suggestion list is decided outside the
//! comparators, by the strategy selector. Both are pure and total.

pub mod default;
pub mod env_type;

pub use default::{compare_version_descending, DefaultComparer};
pub use env_type::{category_priority, EnvTypeComparer};

use std::cmp::Ordering;
use std::sync::Arc;

use crate::environment::EnvironmentRecord;

/// Pure three-way ordering over environment records.
pub trait InterpreterComparer: Send + Sync {
    /// Compare two records. `Less` means `a` ranks before `b`.
    fn compare(&self, a: &EnvironmentRecord, b: &EnvironmentRecord) -> Ordering;
}

/// Key naming one of the registered comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonType {
    /// General-purpose ranking heuristic.
    Default,
    /// Environment-category-aware ranking.
    EnvType,
}

impl std::fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::EnvType => write!(f, "environment type"),
        }
    }
}

/// The comparators available to the strategy selector, keyed by
/// [`ComparisonType`].
#[derive(Clone)]
pub struct ComparerSet {
    default: Arc<dyn InterpreterComparer>,
    env_type: Arc<dyn InterpreterComparer>,
}

impl ComparerSet {
    /// Register one comparator per [`ComparisonType`].
    pub fn new(
        default: Arc<dyn InterpreterComparer>,
        env_type: Arc<dyn InterpreterComparer>,
    ) -> Self {
        Self { default, env_type }
    }

    /// The built-in [`DefaultComparer`] and [`EnvTypeComparer`].
    pub fn builtin() -> Self {
        Self::new(Arc::new(DefaultComparer), Arc::new(EnvTypeComparer::new()))
    }

    /// Look up the comparator registered for `kind`.
    pub fn get(&self, kind: ComparisonType) -> Arc<dyn InterpreterComparer> {
        match kind {
            ComparisonType::Default => Arc::clone(&self.default),
            ComparisonType::EnvType => Arc::clone(&self.env_type),
        }
    }
}

impl Default for ComparerSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for ComparerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparerSet").finish_non_exhaustive()
    }
}
