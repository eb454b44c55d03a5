//! Pipeline runner — orchestrates stage execution.
//!
//! [`HarvestPipeline::run`] executes the extraction stages in order, each
//! stage fully materializing its output before the next begins, and
//! notifies an optional [`PipelineObserver`] at each boundary:
//!
//! 1. Extract: clean records, split into token runs, generate n-grams,
//!    accumulate frequency/variants per canonical key.
//! 2. Dedupe: collapse candidates sharing a normalized key.
//! 3. Filter: frequency and capitalization gates.
//! 4. Context: protected-segment detection and context sampling.
//! 5. Prune: parent-child redundancy removal.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::dedupe::{
    apply_structural_filters, build_segment_set, dedupe_candidates, to_glossary_rows,
};
use crate::extract::{keyed_variant, ngram_windows, TermCollector};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_CONTEXT, STAGE_DEDUPE, STAGE_EXTRACT,
    STAGE_FILTER, STAGE_PRUNE,
};
use crate::prune::prune_parent_child;
use crate::text::{clean_text, tokenize_to_segments, StopwordFilter};
use crate::types::{GlossaryRow, HarvestConfig};

/// Result of a pipeline run
#[derive(Debug, Clone)]
pub struct HarvestOutput {
    /// Surviving glossary rows in pipeline order
    pub rows: Vec<GlossaryRow>,
    /// Terms whose exact lowercase form matched a full cleaned segment
    pub protected: FxHashSet<String>,
}

impl HarvestOutput {
    /// Split rows into (locked, candidates) preserving pipeline order
    pub fn partition_locked(self) -> (Vec<GlossaryRow>, Vec<GlossaryRow>) {
        self.rows.into_iter().partition(|r| r.must_keep)
    }
}

/// The term extraction, normalization and deduplication pipeline
#[derive(Debug, Clone)]
pub struct HarvestPipeline {
    config: HarvestConfig,
    stopwords: StopwordFilter,
}

impl Default for HarvestPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl HarvestPipeline {
    /// Create a pipeline with the default config and built-in stopwords
    pub fn new() -> Self {
        Self {
            config: HarvestConfig::default(),
            stopwords: StopwordFilter::builtin(),
        }
    }

    /// Create a pipeline with a custom config
    pub fn with_config(config: HarvestConfig) -> Self {
        Self {
            config,
            stopwords: StopwordFilter::builtin(),
        }
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Execute the pipeline over the raw record texts.
    pub fn run(
        &self,
        texts: &[String],
        observer: &mut impl PipelineObserver,
    ) -> HarvestOutput {
        // Stage 1: Extract candidates
        observer.on_stage_start(STAGE_EXTRACT);
        let clock = StageClock::start();
        let mut collector = TermCollector::new();
        for (order, text) in texts.iter().enumerate() {
            let cleaned = clean_text(text);
            for run in tokenize_to_segments(&cleaned, &self.stopwords) {
                for window in ngram_windows(&run, self.config.ngram_max) {
                    if let Some((key, variant)) = keyed_variant(window) {
                        collector.observe(&key, &variant, order);
                    }
                }
            }
        }
        let candidates = collector.finish();
        info!(records = texts.len(), candidates = candidates.len(), "extraction done");
        let report = StageReport::new(clock.elapsed()).with_items(candidates.len());
        observer.on_stage_end(STAGE_EXTRACT, &report);
        observer.on_candidates(&candidates);

        // Stage 2: Deduplicate by canonical key
        observer.on_stage_start(STAGE_DEDUPE);
        let clock = StageClock::start();
        let deduped = dedupe_candidates(candidates);
        debug!(rows = deduped.len(), "deduplication done");
        let report = StageReport::new(clock.elapsed()).with_items(deduped.len());
        observer.on_stage_end(STAGE_DEDUPE, &report);

        // Stage 3: Structural filters
        observer.on_stage_start(STAGE_FILTER);
        let clock = StageClock::start();
        let filtered = apply_structural_filters(deduped, &self.config);
        debug!(rows = filtered.len(), "filtering done");
        let report = StageReport::new(clock.elapsed()).with_items(filtered.len());
        observer.on_stage_end(STAGE_FILTER, &report);

        // Stage 4: Protected segments and context sampling
        observer.on_stage_start(STAGE_CONTEXT);
        let clock = StageClock::start();
        let segments = build_segment_set(texts);
        let rows = to_glossary_rows(filtered, texts, &segments, &self.config);
        let protected: FxHashSet<String> = rows
            .iter()
            .filter(|r| r.must_keep)
            .map(|r| r.term.clone())
            .collect();
        debug!(rows = rows.len(), protected = protected.len(), "context done");
        let report = StageReport::new(clock.elapsed()).with_items(rows.len());
        observer.on_stage_end(STAGE_CONTEXT, &report);

        // Stage 5: Parent-child pruning
        observer.on_stage_start(STAGE_PRUNE);
        let clock = StageClock::start();
        let (kept, removed) = prune_parent_child(rows, &protected);
        info!(kept = kept.len(), removed = removed.len(), "pruning done");
        let report = StageReport::new(clock.elapsed()).with_items(kept.len());
        observer.on_stage_end(STAGE_PRUNE, &report);
        observer.on_rows(&kept);

        HarvestOutput {
            rows: kept,
            protected,
        }
    }
}
