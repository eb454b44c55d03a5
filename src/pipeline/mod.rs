//! Pipeline orchestration: stage runner and boundary observers

pub mod observer;
pub mod runner;

pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageTimingObserver, STAGES,
    STAGE_CONTEXT, STAGE_DEDUPE, STAGE_EXTRACT, STAGE_FILTER, STAGE_PRUNE,
};
pub use runner::{HarvestOutput, HarvestPipeline};
