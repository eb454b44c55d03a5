//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::types::{CandidateTerm, GlossaryRow};

pub const STAGE_EXTRACT: &str = "extract";
pub const STAGE_DEDUPE: &str = "dedupe";
pub const STAGE_FILTER: &str = "filter";
pub const STAGE_CONTEXT: &str = "context";
pub const STAGE_PRUNE: &str = "prune";

/// All pipeline stage names in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_EXTRACT,
    STAGE_DEDUPE,
    STAGE_FILTER,
    STAGE_CONTEXT,
    STAGE_PRUNE,
];

/// Wall-clock timer for one stage
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing a stage
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed time since the clock started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Metrics reported at the end of a stage
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    /// Create a report carrying only elapsed time
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach the number of items the stage produced
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    /// Elapsed wall-clock time for the stage
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of items the stage produced, when reported
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Callbacks invoked at pipeline stage boundaries.
///
/// All methods have no-op defaults; implement only what you need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    /// Called once after extraction with the full candidate set.
    fn on_candidates(&mut self, _candidates: &[CandidateTerm]) {}
    /// Called once after pruning with the surviving glossary rows.
    fn on_rows(&mut self, _rows: &[GlossaryRow]) {}
}

/// Observer that ignores all notifications (zero overhead)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a timing report per stage
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create a new timing observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports collected so far, in stage order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
