//! Parent-child redundancy pruning
//!
//! Removes a shorter term when its token sequence occurs contiguously
//! inside a longer, equal-or-more-frequent surviving term. Protected terms
//! are never removed. Runs over the filtered glossary only; the O(T²·k)
//! pair scan is acceptable at glossary scale but not over the raw
//! candidate set.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::GlossaryRow;

fn is_possessive(term: &str) -> bool {
    term.ends_with("'s") || term.ends_with("’s")
}

fn contains_contiguous(longer: &[&str], shorter: &[&str]) -> bool {
    if shorter.is_empty() || shorter.len() > longer.len() {
        return false;
    }
    longer.windows(shorter.len()).any(|w| w == shorter)
}

/// Prune redundant terms, returning the survivors in original row order
/// and the set of removed terms.
pub fn prune_parent_child(
    rows: Vec<GlossaryRow>,
    protected: &FxHashSet<String>,
) -> (Vec<GlossaryRow>, FxHashSet<String>) {
    let mut removed: FxHashSet<String> = FxHashSet::default();
    let freq_map: FxHashMap<&str, u32> =
        rows.iter().map(|r| (r.term.as_str(), r.freq)).collect();

    // Step 1: unprotected possessive forms.
    for row in &rows {
        if is_possessive(&row.term) && !protected.contains(&row.term) {
            removed.insert(row.term.clone());
        }
    }

    // Step 2: containment scan, longest terms first (stable on ties).
    let mut by_length: Vec<&str> = rows.iter().map(|r| r.term.as_str()).collect();
    by_length.sort_by_key(|t| std::cmp::Reverse(t.split_whitespace().count()));

    for i in 0..by_length.len() {
        let longer = by_length[i];
        if removed.contains(longer) {
            continue;
        }
        let longer_tokens: Vec<&str> = longer.split_whitespace().collect();
        let longer_freq = freq_map.get(longer).copied().unwrap_or(0);

        for &shorter in &by_length[i + 1..] {
            if shorter == longer || removed.contains(shorter) || protected.contains(shorter) {
                continue;
            }
            let shorter_tokens: Vec<&str> = shorter.split_whitespace().collect();
            let shorter_freq = freq_map.get(shorter).copied().unwrap_or(0);
            if contains_contiguous(&longer_tokens, &shorter_tokens)
                && shorter_freq <= longer_freq
            {
                removed.insert(shorter.to_string());
            }
        }
    }

    let kept = rows
        .into_iter()
        .filter(|r| !removed.contains(&r.term))
        .collect();
    (kept, removed)
}
