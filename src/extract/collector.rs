//! Candidate term accumulation
//!
//! A write-once-then-read accumulator keyed by canonical lowercase key.
//! Tracks frequency, observed display variants (consecutive duplicates
//! collapsed), first-seen variant, and first-seen record index.

use rustc_hash::FxHashMap;

use crate::text::tokenizer::looks_like_title_variant;
use crate::types::CandidateTerm;

/// Per-key accumulator state
#[derive(Debug, Clone)]
struct TermAccumulator {
    freq: u32,
    /// Distinct variants in observation order (consecutive duplicates collapsed)
    variants: Vec<String>,
    first_seen: String,
    first_pos: usize,
}

/// Accumulates candidate term occurrences across all records
#[derive(Debug, Default)]
pub struct TermCollector {
    terms: FxHashMap<String, TermAccumulator>,
}

impl TermCollector {
    /// Create a new empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key` displayed as `variant` in record `order`
    pub fn observe(&mut self, key: &str, variant: &str, order: usize) {
        match self.terms.get_mut(key) {
            Some(acc) => {
                acc.freq += 1;
                if acc.variants.last().map(String::as_str) != Some(variant) {
                    acc.variants.push(variant.to_string());
                }
            }
            None => {
                self.terms.insert(
                    key.to_string(),
                    TermAccumulator {
                        freq: 1,
                        variants: vec![variant.to_string()],
                        first_seen: variant.to_string(),
                        first_pos: order,
                    },
                );
            }
        }
    }

    /// Number of distinct canonical keys observed
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether nothing has been observed
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Select representatives and produce candidates sorted by
    /// (`order` ascending, `term` ascending).
    ///
    /// The representative is the first title-looking variant, falling back
    /// to the first-seen variant.
    pub fn finish(self) -> Vec<CandidateTerm> {
        let mut candidates: Vec<CandidateTerm> = self
            .terms
            .into_values()
            .map(|acc| {
                let term = acc
                    .variants
                    .iter()
                    .find(|v| looks_like_title_variant(v))
                    .cloned()
                    .unwrap_or(acc.first_seen);
                CandidateTerm {
                    term,
                    freq: acc.freq,
                    order: acc.first_pos,
                }
            })
            .collect();
        candidates.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.term.cmp(&b.term)));
        candidates
    }
}
