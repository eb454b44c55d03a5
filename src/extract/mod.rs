//! Candidate generation: n-gram windows and frequency accumulation

pub mod collector;
pub mod ngram;

pub use collector::TermCollector;
pub use ngram::{keyed_variant, ngram_windows};
