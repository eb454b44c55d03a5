//! Library error type
//!
//! Fatal errors abort the run (missing text column, unreadable input,
//! unwritable output, transport construction). Per-record and per-batch
//! problems are handled inline by the stages that own them and never
//! surface here.

use std::io;

use thiserror::Error;

/// Error type for input/output and review-transport failures.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("no text column found in input (expected 'text_en' or a header containing 'text')")]
    MissingTextColumn,
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to build review transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
