//! Core types shared across pipeline stages

use serde::{Deserialize, Serialize};

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Maximum n-gram length generated from each token run
    pub ngram_max: usize,
    /// Minimum raw frequency for a term to survive filtering
    pub min_freq: u32,
    /// Require at least one ASCII uppercase letter in the display term
    pub capital_required: bool,
    /// Maximum number of context segments sampled per term
    pub context_max_lines: usize,
    /// Maximum total character budget for a term's joined context
    pub context_char_cap: usize,
    /// Batch size for review rounds
    pub review_batch: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            ngram_max: 4,
            min_freq: 2,
            capital_required: true,
            context_max_lines: 30,
            context_char_cap: 1200,
            review_batch: 20,
        }
    }
}

impl HarvestConfig {
    /// Set the maximum n-gram length
    pub fn with_ngram_max(mut self, n: usize) -> Self {
        self.ngram_max = n.max(1);
        self
    }

    /// Set the minimum surviving frequency
    pub fn with_min_freq(mut self, min_freq: u32) -> Self {
        self.min_freq = min_freq;
        self
    }

    /// Set whether an uppercase letter is required in the display term
    pub fn with_capital_required(mut self, required: bool) -> Self {
        self.capital_required = required;
        self
    }

    /// Set the context sample bounds (segment count, character budget)
    pub fn with_context_bounds(mut self, max_lines: usize, char_cap: usize) -> Self {
        self.context_max_lines = max_lines;
        self.context_char_cap = char_cap;
        self
    }

    /// Set the review batch size
    pub fn with_review_batch(mut self, batch: usize) -> Self {
        self.review_batch = batch.max(1);
        self
    }
}

/// A candidate term produced by n-gram extraction, before deduplication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTerm {
    /// Representative display form (one of the observed variants)
    pub term: String,
    /// Count of segment positions where this term's canonical key occurred
    pub freq: u32,
    /// Index of the earliest record the term appeared in
    pub order: usize,
}

/// One surviving glossary entry with attached review metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryRow {
    /// Display form of the term
    pub term: String,
    /// Raw frequency across all segment positions
    pub freq: u32,
    /// Index of the earliest record the term appeared in
    pub order: usize,
    /// Exact lowercase form appears verbatim as a full cleaned segment
    pub must_keep: bool,
    /// `" || "`-joined sample of segments containing the term
    pub context: String,
}
