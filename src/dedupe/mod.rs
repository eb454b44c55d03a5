//! Deduplication, structural filtering, and protected-segment detection
//!
//! Collapses candidates sharing a canonical key into one row, applies the
//! frequency/capitalization gates, and computes the `must_keep` flag
//! against the set of fully-cleaned clause segments.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::context::build_context_string;
use crate::normalize::normalize_key;
use crate::text::cleaner::clean_text;
use crate::text::tokenizer::starts_with_capital_first_token;
use crate::types::{CandidateTerm, GlossaryRow, HarvestConfig};

/// Collapse candidates by canonical key, keeping one representative each.
///
/// Within a group the representative is the row with the shortest display
/// string, then the earliest `order` (shortest length is a proxy for the
/// least-decorated spelling). Output is re-sorted by (`order`, `term`).
pub fn dedupe_candidates(candidates: Vec<CandidateTerm>) -> Vec<CandidateTerm> {
    let mut best: FxHashMap<String, CandidateTerm> = FxHashMap::default();
    for cand in candidates {
        let key = normalize_key(&cand.term);
        match best.get_mut(&key) {
            Some(current) => {
                let cand_rank = (cand.term.chars().count(), cand.order);
                let current_rank = (current.term.chars().count(), current.order);
                if cand_rank < current_rank {
                    *current = cand;
                }
            }
            None => {
                best.insert(key, cand);
            }
        }
    }
    let mut rows: Vec<CandidateTerm> = best.into_values().collect();
    rows.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.term.cmp(&b.term)));
    rows
}

/// Apply the structural gates, each strictly narrowing the set:
/// frequency minimum, uppercase presence (configurable), and
/// capital-initial first token.
pub fn apply_structural_filters(
    rows: Vec<CandidateTerm>,
    cfg: &HarvestConfig,
) -> Vec<CandidateTerm> {
    let mut rows = rows;
    rows.retain(|r| r.freq >= cfg.min_freq);
    if cfg.capital_required {
        rows.retain(|r| r.term.chars().any(|c| c.is_ascii_uppercase()));
    }
    rows.retain(|r| starts_with_capital_first_token(&r.term));
    rows
}

/// Build the set of lowercased fully-cleaned clause segments of the corpus.
///
/// A term whose exact lowercase form appears in this set is protected.
pub fn build_segment_set(texts: &[String]) -> FxHashSet<String> {
    let mut segments = FxHashSet::default();
    for raw in texts {
        let cleaned = clean_text(raw);
        for seg in cleaned.split('|') {
            let seg = seg.trim();
            if !seg.is_empty() {
                segments.insert(seg.to_lowercase());
            }
        }
    }
    segments
}

/// Attach `must_keep` and `context` to every surviving row.
pub fn to_glossary_rows(
    rows: Vec<CandidateTerm>,
    texts: &[String],
    segments: &FxHashSet<String>,
    cfg: &HarvestConfig,
) -> Vec<GlossaryRow> {
    rows.into_iter()
        .map(|cand| {
            let must_keep =
                cand.freq >= cfg.min_freq && segments.contains(&cand.term.to_lowercase());
            let context = build_context_string(
                &cand.term,
                texts,
                cfg.context_max_lines,
                cfg.context_char_cap,
            );
            GlossaryRow {
                term: cand.term,
                freq: cand.freq,
                order: cand.order,
                must_keep,
                context,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(term: &str, freq: u32, order: usize) -> CandidateTerm {
        CandidateTerm {
            term: term.to_string(),
            freq,
            order,
        }
    }

    #[test]
    fn test_variants_collapse_to_shortest() {
        let rows = dedupe_candidates(vec![
            cand("Iron Keys", 3, 2),
            cand("Iron Key", 5, 4),
            cand("iron-key", 1, 7),
        ]);
        assert_eq!(rows.len(), 1);
        // "Iron Key" and "iron-key" tie at 8 chars; earlier order wins.
        assert_eq!(rows[0].term, "Iron Key");
        assert_eq!(rows[0].freq, 5);
    }

    #[test]
    fn test_distinct_keys_survive() {
        let rows = dedupe_candidates(vec![
            cand("Iron Key", 2, 1),
            cand("Ancient Temple", 2, 0),
        ]);
        let terms: Vec<&str> = rows.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["Ancient Temple", "Iron Key"]);
    }

    #[test]
    fn test_output_resorted_by_order_then_term() {
        let rows = dedupe_candidates(vec![
            cand("Zeal", 2, 1),
            cand("Amulet", 2, 1),
            cand("Temple", 2, 0),
        ]);
        let terms: Vec<&str> = rows.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["Temple", "Amulet", "Zeal"]);
    }

    #[test]
    fn test_frequency_gate() {
        let cfg = HarvestConfig::default().with_min_freq(3);
        let rows = apply_structural_filters(vec![cand("Temple", 2, 0), cand("Key", 3, 1)], &cfg);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].term, "Key");
    }

    #[test]
    fn test_capital_presence_gate() {
        let cfg = HarvestConfig::default().with_min_freq(1);
        let rows = apply_structural_filters(
            vec![cand("temple door", 5, 0), cand("Temple", 5, 1)],
            &cfg,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].term, "Temple");

        let relaxed = cfg.clone().with_capital_required(false);
        let rows = apply_structural_filters(vec![cand("temple door", 5, 0)], &relaxed);
        // Still dropped: first token must start with a capital.
        assert!(rows.is_empty());
    }

    #[test]
    fn test_capital_first_token_gate() {
        let cfg = HarvestConfig::default().with_min_freq(1);
        let rows = apply_structural_filters(vec![cand("ancient Temple", 5, 0)], &cfg);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_segment_set_is_cleaned_and_lowercased() {
        let texts = vec!["[hint] Ancient Temple, beware!".to_string()];
        let segments = build_segment_set(&texts);
        assert!(segments.contains("ancient temple"));
        assert!(segments.contains("beware"));
        assert!(!segments.contains("hint"));
    }

    #[test]
    fn test_must_keep_requires_exact_full_segment() {
        let cfg = HarvestConfig::default().with_min_freq(1);
        let texts = vec![
            "Ancient Temple | enter the Ancient Temple now".to_string(),
            "Iron Key opens it".to_string(),
        ];
        let segments = build_segment_set(&texts);
        let rows = to_glossary_rows(
            vec![cand("Ancient Temple", 2, 0), cand("Iron Key", 2, 1)],
            &texts,
            &segments,
            &cfg,
        );

        assert!(rows[0].must_keep, "full-segment match should protect");
        assert!(!rows[1].must_keep, "substring occurrence is not enough");
        assert!(rows[0].context.contains("Ancient Temple"));
        assert!(rows[1].context.contains("Iron Key opens it"));
    }

    #[test]
    fn test_must_keep_comparison_is_case_insensitive() {
        let cfg = HarvestConfig::default().with_min_freq(1);
        let texts = vec!["iron key".to_string()];
        let segments = build_segment_set(&texts);
        let rows = to_glossary_rows(vec![cand("Iron Key", 1, 0)], &texts, &segments, &cfg);
        assert!(rows[0].must_keep);
    }

    #[test]
    fn test_decorated_representative_misses_plain_segment() {
        // The chosen representative keeps its raw spelling; a hyphenated
        // variant does not equal the space-separated cleaned segment, so
        // the term stays unprotected even though its content recurs.
        let cfg = HarvestConfig::default().with_min_freq(1);
        let texts = vec!["iron key".to_string()];
        let segments = build_segment_set(&texts);
        let rows = to_glossary_rows(vec![cand("Iron-Key", 1, 0)], &texts, &segments, &cfg);
        assert!(!rows[0].must_keep);
    }
}
