//! Text analyzer facade and builder
//!
//! [`TextAnalyzer`] ties the pieces together: preprocessing, the strategy
//! list, result assembly, the result cache, observers and the batch
//! executors. It is an ordinary value; share it through an `Arc` when
//! several threads or tasks need it.

use crate::{
    assembler::ResultAssembler,
    cache::FifoCache,
    config::EngineConfig,
    error::{EngineError, Result},
    events::{AnalysisEvent, AnalysisObserver, EventHub},
    executor::{CooperativeExecutor, ExecutionMode},
    export::{ExportFormat, ExportSummary},
    retry::RetryPolicy,
    timing::timed,
};
use log::{debug, info, trace};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use textlens_core::{
    content_hash, default_strategies, AnalysisInput, AnalysisStrategy, Ngram, Pipeline,
    TextStatistics,
};

/// Length of the text prefix kept in history and event previews
pub const PREVIEW_CHARS: usize = 50;

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Difference between two analyzed texts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Jaccard similarity of the unique word sets, in `[0, 1]`
    pub similarity: f64,
    /// Word count of the second text minus the first
    pub word_diff: i64,
    /// Sentiment score of the second text minus the first
    pub sentiment_diff: f64,
    /// Readability score of the second text minus the first
    pub readability_diff: f64,
}

/// Main text analyzer
pub struct TextAnalyzer {
    config: EngineConfig,
    pipeline: Pipeline,
    strategies: Vec<Box<dyn AnalysisStrategy>>,
    assembler: ResultAssembler,
    cache: FifoCache<String, TextStatistics>,
    hub: EventHub,
    analysis_count: AtomicUsize,
    history: Mutex<Vec<String>>,
}

impl TextAnalyzer {
    /// Create an analyzer with the built-in strategies
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_strategies(config, default_strategies())
    }

    /// Create an analyzer with the default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(EngineConfig::default())
    }

    /// Create an analyzer running exactly `strategies`, in order
    pub fn with_strategies(
        config: EngineConfig,
        strategies: Vec<Box<dyn AnalysisStrategy>>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            pipeline: Pipeline::standard(config.lowercase, config.remove_special),
            cache: FifoCache::new(config.cache_capacity),
            strategies,
            assembler: ResultAssembler::new(),
            hub: EventHub::new(),
            analysis_count: AtomicUsize::new(0),
            history: Mutex::new(Vec::new()),
            config,
        })
    }

    /// Start building an analyzer
    pub fn builder() -> TextAnalyzerBuilder {
        TextAnalyzerBuilder::new()
    }

    /// Append a strategy; cached results are dropped since they no longer match
    pub fn add_strategy(&mut self, strategy: Box<dyn AnalysisStrategy>) -> &mut Self {
        debug!("adding strategy {}", strategy.name());
        self.strategies.push(strategy);
        self.cache.clear();
        self
    }

    /// Names of the active strategies, in execution order
    pub fn strategies(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Subscribe an observer; returns `false` if it was already attached
    pub fn attach(&self, observer: Arc<dyn AnalysisObserver>) -> bool {
        self.hub.attach(observer)
    }

    /// Unsubscribe an observer; returns `false` if it was not attached
    pub fn detach(&self, observer: &Arc<dyn AnalysisObserver>) -> bool {
        self.hub.detach(observer)
    }

    /// Analyze one text
    ///
    /// A cached result is returned as is: no events fire and the counters
    /// stay untouched.
    pub fn analyze(&self, text: &str) -> Result<TextStatistics> {
        if text.trim().is_empty() {
            return Err(EngineError::EmptyInput);
        }

        if let Some(stats) = self.cache.get(text) {
            trace!("cache hit for {}", stats.text_hash());
            return Ok(stats);
        }

        let stats = timed("analyze", || self.compute(text))?;

        self.cache.insert(text.to_string(), stats.clone());
        self.lock_history().push(preview(text));
        self.analysis_count.fetch_add(1, Ordering::Relaxed);

        Ok(stats)
    }

    fn compute(&self, text: &str) -> Result<TextStatistics> {
        let text_preview = preview(text);
        self.hub
            .notify(&AnalysisEvent::started(content_hash(text), text_preview.clone()))?;

        let input = AnalysisInput::with_pipeline(text, &self.pipeline);
        let reports = self
            .strategies
            .iter()
            .map(|strategy| {
                trace!("running {}", strategy.name());
                strategy.analyze(&input)
            })
            .collect();
        let stats = self.assembler.assemble(&input, reports)?;

        self.hub
            .notify(&AnalysisEvent::completed(text_preview, stats.clone()))?;
        Ok(stats)
    }

    /// Analyze a batch on a pool of `max_workers` threads
    ///
    /// `max_workers == 0` uses the configured worker count. Results keep the
    /// input order; the first failure fails the batch.
    #[cfg(feature = "parallel")]
    pub fn parallel_analyze<S>(&self, texts: &[S], max_workers: usize) -> Result<Vec<TextStatistics>>
    where
        S: AsRef<str> + Sync,
    {
        let workers = if max_workers == 0 {
            self.config.max_workers
        } else {
            max_workers
        };

        let executor = crate::executor::ParallelExecutor::new(workers)?;
        info!(
            "analyzing {} texts ({}, {} workers)",
            texts.len(),
            executor.mode().as_str(),
            executor.workers()
        );
        let results = executor.run(texts, |text| self.analyze(text.as_ref()))?;
        info!("{} batch of {} texts done", executor.mode().as_str(), results.len());
        Ok(results)
    }

    /// Analyze a batch sequentially (built without the `parallel` feature)
    #[cfg(not(feature = "parallel"))]
    pub fn parallel_analyze<S>(&self, texts: &[S], _max_workers: usize) -> Result<Vec<TextStatistics>>
    where
        S: AsRef<str> + Sync,
    {
        let executor = crate::executor::SequentialExecutor;
        info!("analyzing {} texts ({})", texts.len(), executor.mode().as_str());
        executor.run(texts, |text| self.analyze(text.as_ref()))
    }

    /// Execution mode [`parallel_analyze`](Self::parallel_analyze) runs in
    pub fn batch_mode(&self) -> ExecutionMode {
        if cfg!(feature = "parallel") {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }

    /// Analyze a batch as cooperative async units
    ///
    /// Each unit waits the configured latency before analyzing its text.
    /// Results keep the input order; one failure fails the batch.
    pub async fn async_analyze<S>(&self, texts: &[S]) -> Result<Vec<TextStatistics>>
    where
        S: AsRef<str>,
    {
        let executor = CooperativeExecutor::new(self.config.async_latency);
        info!(
            "analyzing {} texts ({}, {:?} latency)",
            texts.len(),
            executor.mode().as_str(),
            executor.latency()
        );
        let results = executor
            .run(texts, |text| self.analyze(text.as_ref()))
            .await?;
        info!("{} batch of {} texts done", executor.mode().as_str(), results.len());
        Ok(results)
    }

    /// Compare two texts
    pub fn compare_texts(&self, a: &str, b: &str) -> Result<Comparison> {
        let stats_a = self.analyze(a)?;
        let stats_b = self.analyze(b)?;

        let input_a = AnalysisInput::with_pipeline(a, &self.pipeline);
        let input_b = AnalysisInput::with_pipeline(b, &self.pipeline);
        let words_a: HashSet<&str> = input_a.tokens().iter().map(String::as_str).collect();
        let words_b: HashSet<&str> = input_b.tokens().iter().map(String::as_str).collect();

        let union = words_a.union(&words_b).count();
        let similarity = if union == 0 {
            0.0
        } else {
            words_a.intersection(&words_b).count() as f64 / union as f64
        };

        Ok(Comparison {
            similarity,
            word_diff: stats_b.total_words() as i64 - stats_a.total_words() as i64,
            sentiment_diff: stats_b.sentiment_score() - stats_a.sentiment_score(),
            readability_diff: stats_b.readability_score() - stats_a.readability_score(),
        })
    }

    /// Word n-grams of `text` with their counts, most frequent first
    pub fn ngram_frequencies(&self, text: &str, n: usize) -> Vec<(Ngram, usize)> {
        textlens_core::ngram_frequencies(text, n)
    }

    /// Case-insensitive regex matches in `text`
    pub fn find_patterns(&self, text: &str, pattern: &str) -> Result<Vec<String>> {
        Ok(textlens_core::find_patterns(text, pattern)?)
    }

    /// Snapshot of the counters for export
    pub fn summary(&self) -> ExportSummary {
        ExportSummary {
            analyzer_name: self.config.name.clone(),
            total_analyses: self.analysis_count(),
            texts_analyzed: self.analyzed_texts(),
        }
    }

    /// Write the summary to `path` in `format` (`"json"` or `"csv"`)
    ///
    /// File creation and writing are retried according to the configured
    /// retry policy.
    pub fn export_results(&self, path: impl AsRef<Path>, format: &str) -> Result<()> {
        let format: ExportFormat = format.parse()?;
        let path = path.as_ref();
        let summary = self.summary();

        self.config.retry.run(|| {
            let file = File::create(path)?;
            summary.write_to(format, BufWriter::new(file))
        })?;

        info!("exported {} analyses to {}", summary.total_analyses, path.display());
        Ok(())
    }

    /// Number of computed analyses since creation or the last reset
    pub fn analysis_count(&self) -> usize {
        self.analysis_count.load(Ordering::Relaxed)
    }

    /// Prefixes of analyzed texts, oldest first
    pub fn analyzed_texts(&self) -> Vec<String> {
        self.lock_history().clone()
    }

    /// Number of cached results
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Analyzer name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Clear counters, history and cache; strategies and observers stay
    pub fn reset_statistics(&self) {
        self.analysis_count.store(0, Ordering::Relaxed);
        self.lock_history().clear();
        self.cache.clear();
        debug!("statistics reset for {}", self.config.name);
    }

    fn lock_history(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("name", &self.config.name)
            .field("strategies", &self.strategies())
            .field("pipeline", &self.pipeline)
            .field("cache", &self.cache)
            .field("observers", &self.hub.len())
            .field("analysis_count", &self.analysis_count())
            .finish()
    }
}

/// Builder for TextAnalyzer
///
/// Provides a fluent interface for configuring the analyzer.
pub struct TextAnalyzerBuilder {
    config: EngineConfig,
    strategies: Option<Vec<Box<dyn AnalysisStrategy>>>,
    observers: Vec<Arc<dyn AnalysisObserver>>,
}

impl Default for TextAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            strategies: None,
            observers: Vec::new(),
        }
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the analyzer name
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the cache capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Set the default worker count
    pub fn max_workers(mut self, workers: usize) -> Self {
        self.config.max_workers = workers;
        self
    }

    /// Set the simulated latency of cooperative units
    pub fn async_latency(mut self, latency: Duration) -> Self {
        self.config.async_latency = latency;
        self
    }

    /// Toggle lowercasing
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.config.lowercase = enabled;
        self
    }

    /// Toggle special character removal
    pub fn remove_special(mut self, enabled: bool) -> Self {
        self.config.remove_special = enabled;
        self
    }

    /// Set the retry policy
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.config.retry = policy;
        self
    }

    /// Use the fast configuration preset, keeping the name
    pub fn fast(mut self) -> Self {
        let name = std::mem::take(&mut self.config.name);
        self.config = EngineConfig {
            name,
            ..EngineConfig::fast()
        };
        self
    }

    /// Add a strategy; the first call replaces the built-in set
    pub fn strategy(mut self, strategy: Box<dyn AnalysisStrategy>) -> Self {
        self.strategies.get_or_insert_with(Vec::new).push(strategy);
        self
    }

    /// Attach an observer on build
    pub fn observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Result<TextAnalyzer> {
        let strategies = self.strategies.unwrap_or_else(default_strategies);
        let analyzer = TextAnalyzer::with_strategies(self.config, strategies)?;
        for observer in self.observers {
            analyzer.attach(observer);
        }
        Ok(analyzer)
    }
}
