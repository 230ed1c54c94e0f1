//! The suggestion pipeline.

use futures::future::try_join_all;
use std::path::Path;
use std::sync::Arc;

use super::display::{DisplayMapper, DisplayRecord, SuggestionMapper};
use super::strategy::StrategySelector;
use crate::compare::ComparerSet;
use crate::config::EnvrankConfig;
use crate::disposable::DisposableBag;
use crate::environment::{EnvironmentSource, GetInterpretersOptions, ManifestSource};
use crate::error::Result;
use crate::experiment::{ConfiguredExperiments, ExperimentService};
use crate::paths::{HomeRelativePaths, PathUtils};

/// Produces the ordered suggestion list for the interpreter picker.
///
/// Each call to [`get_suggestions`](Self::get_suggestions) retrieves its own
/// candidates, resolves the comparator once, sorts, and maps every
/// candidate concurrently. Nothing is shared between calls.
pub struct InterpreterSelector {
    source: Arc<dyn EnvironmentSource>,
    strategy: StrategySelector,
    mapper: Arc<dyn SuggestionMapper>,
    disposables: DisposableBag,
}

impl InterpreterSelector {
    /// Wire a selector from its collaborators, using [`DisplayMapper`] for
    /// presentation.
    pub fn new(
        source: Arc<dyn EnvironmentSource>,
        comparers: ComparerSet,
        paths: Arc<dyn PathUtils>,
        experiments: Arc<dyn ExperimentService>,
    ) -> Self {
        Self {
            source,
            strategy: StrategySelector::new(experiments, comparers),
            mapper: Arc::new(DisplayMapper::new(paths)),
            disposables: DisposableBag::new(),
        }
    }

    /// Wire a selector for a project from its configuration: manifest source
    /// with a persisted snapshot, settings-backed experiments, built-in
    /// comparators.
    pub fn from_config(project_root: &Path, config: &EnvrankConfig) -> Self {
        let source = ManifestSource::new(config.manifest_path(project_root))
            .with_snapshot_file(config.snapshot_path(project_root));
        Self::new(
            Arc::new(source),
            ComparerSet::builtin(),
            Arc::new(HomeRelativePaths::new()),
            Arc::new(ConfiguredExperiments::new(config.experiments.clone())),
        )
    }

    /// Replace the presentation step.
    pub fn with_mapper(mut self, mapper: Arc<dyn SuggestionMapper>) -> Self {
        self.mapper = mapper;
        self
    }

    /// The strategy selector driving this pipeline.
    pub fn strategy(&self) -> &StrategySelector {
        &self.strategy
    }

    /// Register a callback to run when the selector is disposed.
    pub fn register_disposable(&mut self, release: impl FnOnce() + Send + 'static) {
        self.disposables.push(release);
    }

    /// Build the ordered suggestion list for `scope`.
    ///
    /// `ignore_cache` asks the environment source for fresh records.
    ///
    /// # Errors
    ///
    /// Fails with the source's own error if retrieval fails, with
    /// `StrategyResolution` if the experiment check fails, and with the
    /// first mapping error if any record cannot be presented. No partial
    /// list is returned.
    pub async fn get_suggestions(
        &self,
        scope: Option<&Path>,
        ignore_cache: bool,
    ) -> Result<Vec<DisplayRecord>> {
        let mut interpreters = self
            .source
            .get_interpreters(
                scope,
                GetInterpretersOptions {
                    on_suggestion: true,
                    ignore_cache,
                },
            )
            .await?;

        let (kind, comparer) = self.strategy.resolve().await?;
        interpreters.sort_by(|a, b| comparer.compare(a, b));
        tracing::debug!(
            "Ranked {} environment(s) with the {} comparator",
            interpreters.len(),
            kind
        );

        // try_join_all yields results in input order, whatever order they complete in.
        let suggestions = try_join_all(
            interpreters
                .iter()
                .map(|env| self.mapper.to_display_record(env, scope)),
        )
        .await?;
        Ok(suggestions)
    }

    /// Release every registered resource. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.disposables.dispose();
    }
}

impl std::fmt::Debug for InterpreterSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpreterSelector")
            .field("strategy", &self.strategy)
            .field("disposables", &self.disposables)
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::compare::fixtures;
    use crate::compare::{DefaultComparer, EnvTypeComparer, InterpreterComparer};
    use crate::environment::EnvironmentRecord;
    use crate::error::EnvrankError;
    use crate::selector::display::CACHED_PREFIX;
    use crate::selector::testing::{
        DelayedMapper, FailingExperiments, FailingSource, FixedExperiments, StaticSource,
    };
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn selector(
        records: Vec<EnvironmentRecord>,
        experiments: Arc<dyn ExperimentService>,
    ) -> InterpreterSelector {
        InterpreterSelector::new(
            Arc::new(StaticSource::new(records)),
            ComparerSet::builtin(),
            Arc::new(HomeRelativePaths::with_home("/home/me")),
            experiments,
        )
    }

    fn labels(records: &[DisplayRecord]) -> Vec<&str> {
        records.iter().map(|r| r.label.as_str()).collect()
    }

    fn sorted_paths(cmp: &dyn InterpreterComparer) -> Vec<PathBuf> {
        let mut records = fixtures::mixed();
        records.sort_by(|a, b| cmp.compare(a, b));
        records.into_iter().map(|r| r.path).collect()
    }

    #[tokio::test]
    async fn newest_cached_environment_comes_first() {
        let records = vec![
            EnvironmentRecord::new("/usr/bin/python3")
                .with_display_name("Python 3.9")
                .with_version("3.9"),
            EnvironmentRecord::new("/opt/env/bin/python")
                .with_display_name("Python 3.10")
                .with_version("3.10")
                .with_cached(true),
        ];
        let selector = selector(records, Arc::new(FixedExperiments::new(false)));

        let suggestions = selector.get_suggestions(None, false).await.unwrap();

        assert_eq!(labels(&suggestions), vec!["Python 3.10", "Python 3.9"]);
        assert!(suggestions[0].detail.starts_with(CACHED_PREFIX));
        assert!(!suggestions[1].detail.starts_with(CACHED_PREFIX));
    }

    #[tokio::test]
    async fn default_strategy_governs_without_experiment() {
        let selector = selector(fixtures::mixed(), Arc::new(FixedExperiments::new(false)));
        let suggestions = selector.get_suggestions(None, false).await.unwrap();

        let paths: Vec<PathBuf> = suggestions.into_iter().map(|r| r.path).collect();
        assert_eq!(paths, sorted_paths(&DefaultComparer));
    }

    #[tokio::test]
    async fn env_type_strategy_governs_with_experiment() {
        let selector = selector(fixtures::mixed(), Arc::new(FixedExperiments::new(true)));
        let suggestions = selector.get_suggestions(None, false).await.unwrap();

        let paths: Vec<PathBuf> = suggestions.into_iter().map(|r| r.path).collect();
        assert_eq!(paths, sorted_paths(&EnvTypeComparer::new()));
        assert_ne!(paths, sorted_paths(&DefaultComparer));
    }

    #[tokio::test]
    async fn repeated_calls_give_same_order() {
        let selector = selector(fixtures::mixed(), Arc::new(FixedExperiments::new(true)));
        let first = selector.get_suggestions(None, false).await.unwrap();
        let second = selector.get_suggestions(None, false).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn experiment_checked_once_per_call() {
        let experiments = Arc::new(FixedExperiments::new(true));
        let selector = selector(fixtures::mixed(), experiments.clone());

        let first = selector.get_suggestions(None, false).await.unwrap();
        assert_eq!(experiments.calls(), 1);

        experiments.set(false);
        let second = selector.get_suggestions(None, false).await.unwrap();
        assert_eq!(experiments.calls(), 2);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn order_survives_out_of_order_completion() {
        let records = fixtures::mixed();
        let mut expected = records.clone();
        expected.sort_by(|a, b| DefaultComparer.compare(a, b));

        // Highest-ranked record finishes last.
        let delays = expected
            .iter()
            .enumerate()
            .map(|(i, r)| (r.path.clone(), 10 * (expected.len() - i) as u64))
            .collect();
        let mapper = Arc::new(DelayedMapper::new(delays));
        let selector = selector(records, Arc::new(FixedExperiments::new(false)))
            .with_mapper(mapper.clone());

        let suggestions = selector.get_suggestions(None, false).await.unwrap();

        let returned: Vec<PathBuf> = suggestions.into_iter().map(|r| r.path).collect();
        let expected: Vec<PathBuf> = expected.into_iter().map(|r| r.path).collect();
        assert_eq!(returned, expected);

        let mut completed = mapper.completed();
        assert_ne!(completed, expected);
        completed.reverse();
        assert_eq!(completed, expected);
    }

    #[tokio::test]
    async fn ignore_cache_and_scope_reach_the_source() {
        let source = Arc::new(StaticSource::new(fixtures::mixed()));
        let selector = InterpreterSelector::new(
            source.clone(),
            ComparerSet::builtin(),
            Arc::new(HomeRelativePaths::without_home()),
            Arc::new(FixedExperiments::new(false)),
        );

        selector
            .get_suggestions(Some(Path::new("/proj")), true)
            .await
            .unwrap();

        let (scope, options) = source.last_call().unwrap();
        assert_eq!(scope, Some(PathBuf::from("/proj")));
        assert!(options.on_suggestion);
        assert!(options.ignore_cache);
    }

    #[tokio::test]
    async fn detail_uses_scope() {
        let records = vec![EnvironmentRecord::new("/proj/.venv/bin/python")
            .with_display_name("venv")
            .with_version("3.11")];
        let selector = selector(records, Arc::new(FixedExperiments::new(false)));

        let suggestions = selector
            .get_suggestions(Some(Path::new("/proj")), false)
            .await
            .unwrap();
        assert_eq!(suggestions[0].detail, "./.venv/bin/python");
    }

    #[tokio::test]
    async fn retrieval_failure_propagates_unchanged() {
        let experiments = Arc::new(FixedExperiments::new(false));
        let selector = InterpreterSelector::new(
            Arc::new(FailingSource),
            ComparerSet::builtin(),
            Arc::new(HomeRelativePaths::without_home()),
            experiments.clone(),
        );

        let err = selector.get_suggestions(None, false).await.unwrap_err();
        match err {
            EnvrankError::Retrieval { message } => assert_eq!(message, "locator crashed"),
            other => panic!("Expected Retrieval, got {:?}", other),
        }
        assert_eq!(experiments.calls(), 0);
    }

    #[tokio::test]
    async fn strategy_failure_fails_the_call() {
        let selector = selector(fixtures::mixed(), Arc::new(FailingExperiments));
        let err = selector.get_suggestions(None, false).await.unwrap_err();
        assert!(matches!(err, EnvrankError::StrategyResolution { .. }));
    }

    #[tokio::test]
    async fn mapping_failure_fails_the_call() {
        let mut records = fixtures::mixed();
        records.push(EnvironmentRecord::new("/broken/bin/python").with_version("3.11"));
        let selector = selector(records, Arc::new(FixedExperiments::new(false)));

        let err = selector.get_suggestions(None, false).await.unwrap_err();
        match err {
            EnvrankError::Mapping { path, .. } => {
                assert_eq!(path, PathBuf::from("/broken/bin/python"))
            }
            other => panic!("Expected Mapping, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_source_gives_empty_list() {
        let selector = selector(Vec::new(), Arc::new(FixedExperiments::new(true)));
        assert!(selector.get_suggestions(None, false).await.unwrap().is_empty());
    }

    #[test]
    fn dispose_releases_registrations_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut selector = selector(Vec::new(), Arc::new(FixedExperiments::new(false)));
        for _ in 0..2 {
            let count = Arc::clone(&count);
            selector.register_disposable(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        selector.dispose();
        selector.dispose();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn from_config_points_at_manifest() {
        let config = EnvrankConfig::default();
        let selector = InterpreterSelector::from_config(Path::new("/proj"), &config);
        assert!(format!("{:?}", selector).contains("InterpreterSelector"));
    }
}
