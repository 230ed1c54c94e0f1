//! General-purpose interpreter ranking.

use std::cmp::Ordering;

use super::InterpreterComparer;
use crate::environment::{EnvironmentRecord, PythonVersion};

/// Ranks interpreters newest first.
///
/// Criteria, in order:
/// 1. Version, descending; records without a version go last
/// 2. Architecture (64-bit, ARM 64-bit, 32-bit, unknown)
/// 3. Company name, with "Python" standing in for a missing one
/// 4. Environment type name
/// 5. Environment name
/// 6. Interpreter path
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer;

impl InterpreterComparer for DefaultComparer {
    fn compare(&self, a: &EnvironmentRecord, b: &EnvironmentRecord) -> Ordering {
        compare_version_descending(a.version.as_ref(), b.version.as_ref())
            .then_with(|| none_last(a.architecture, b.architecture))
            .then_with(|| company_name(a).cmp(company_name(b)))
            .then_with(|| a.kind.type_name().cmp(b.kind.type_name()))
            .then_with(|| none_last(a.env_name.as_deref(), b.env_name.as_deref()))
            .then_with(|| a.path.cmp(&b.path))
    }
}

/// Compare versions so the newer one ranks first. Unknown versions rank last.
pub fn compare_version_descending(
    a: Option<&PythonVersion>,
    b: Option<&PythonVersion>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn none_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn company_name(record: &EnvironmentRecord) -> &str {
    record
        .company
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Python")
}
