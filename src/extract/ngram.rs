//! N-gram candidate generation
//!
//! Produces all contiguous token subsequences of length 1..=max_n from a
//! filtered token run, in left-to-right, increasing-length order.

use crate::text::tokenizer::{is_pure_digits, is_single_alnum};

/// Iterate over all contiguous windows of length 1..=max_n.
///
/// All 1-grams come first (left to right), then all 2-grams, and so on.
pub fn ngram_windows<T>(tokens: &[T], max_n: usize) -> impl Iterator<Item = &[T]> {
    let len = tokens.len();
    let n_max = max_n.min(len);
    (1..=n_max).flat_map(move |n| (0..=len - n).map(move |i| &tokens[i..i + n]))
}

/// Reduce a window to its (canonical key, display variant) pair.
///
/// Pure-digit tokens are dropped from the window; returns `None` when
/// nothing remains or the remainder is a lone single character.
pub fn keyed_variant(window: &[String]) -> Option<(String, String)> {
    let filtered: Vec<&str> = window
        .iter()
        .map(String::as_str)
        .filter(|t| !is_pure_digits(t))
        .collect();
    if filtered.is_empty() {
        return None;
    }
    if filtered.len() == 1 && is_single_alnum(filtered[0]) {
        return None;
    }
    let key = filtered
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let variant = filtered.join(" ");
    Some((key, variant))
}
