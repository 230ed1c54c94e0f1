//! The interpreter suggestion pipeline.
//!
//! - [`strategy`] - Experiment-gated choice of comparator
//! - [`display`] - Display records and the mapper that builds them
//! - [`pipeline`] - [`InterpreterSelector`], which ties retrieval, ranking
//!   and presentation together
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use envrank::compare::ComparerSet;
//! use envrank::config::ExperimentSettings;
//! use envrank::environment::ManifestSource;
//! use envrank::experiment::ConfiguredExperiments;
//! use envrank::paths::HomeRelativePaths;
//! use envrank::selector::InterpreterSelector;
//!
//! # async fn run() -> envrank::Result<()> {
//! let selector = InterpreterSelector::new(
//!     Arc::new(ManifestSource::new(".envrank/environments.yml")),
//!     ComparerSet::builtin(),
//!     Arc::new(HomeRelativePaths::new()),
//!     Arc::new(ConfiguredExperiments::new(ExperimentSettings::default())),
//! );
//! for suggestion in selector.get_suggestions(None, false).await? {
//!     println!("{}  {}", suggestion.label, suggestion.detail);
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod pipeline;
pub mod strategy;

pub use display::{DisplayMapper, DisplayRecord, SuggestionMapper, CACHED_PREFIX};
pub use pipeline::InterpreterSelector;
pub use strategy::StrategySelector;
