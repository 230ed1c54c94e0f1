//! The environment source contract.

use async_trait::async_trait;
use std::path::Path;

use super::record::EnvironmentRecord;
use crate::error::Result;

/// Options forwarded to an [`EnvironmentSource`] on every retrieval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetInterpretersOptions {
    /// The caller is building a suggestion list for the user.
    pub on_suggestion: bool,
    /// Bypass any cached results and produce fresh records.
    pub ignore_cache: bool,
}

/// Produces the candidate environments for a scope.
///
/// Discovery and caching live behind this trait; the ranking pipeline only
/// reads what it returns.
#[async_trait]
pub trait EnvironmentSource: Send + Sync {
    /// Retrieve every environment relevant to `scope` (`None` means no
    /// specific workspace).
    async fn get_interpreters(
        &self,
        scope: Option<&Path>,
        options: GetInterpretersOptions,
    ) -> Result<Vec<EnvironmentRecord>>;
}
