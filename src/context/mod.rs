//! Representative-context sampling
//!
//! Finds all clause segments containing a term, then samples a bounded,
//! diverse, length-capped subset. Context search runs over raw record
//! texts split on literal pipes: reviewers should see the clause strings
//! as they appear in the source.

use crate::text::tokenizer::{split_segments_strict, tokens};

/// Joiner between sampled segments.
pub const CONTEXT_JOINER: &str = " || ";

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive substring match, anchored so the match is neither
/// preceded nor followed by a word character.
pub fn term_matches_segment(term: &str, segment: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return false;
    }
    let haystack = segment.to_lowercase();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let begin = from + pos;
        let end = begin + needle.len();
        let before_ok = haystack[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        if before_ok && after_ok {
            return true;
        }
        from = begin
            + haystack[begin..]
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
    }
    false
}

/// Locate all clause segments across all records containing the term.
///
/// Single-word terms require an exact case-insensitive token match;
/// multi-word terms use the boundary-anchored substring match.
pub fn find_term_contexts(term: &str, texts: &[String]) -> Vec<String> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let term_lower = term.to_lowercase();
    let single_word = term.split_whitespace().count() == 1;

    let mut contexts = Vec::new();
    for text in texts {
        if text.is_empty() {
            continue;
        }
        for seg in split_segments_strict(text) {
            let matched = if single_word {
                tokens(seg).iter().any(|t| t.to_lowercase() == term_lower)
            } else {
                term_matches_segment(term, seg)
            };
            if matched {
                contexts.push(seg.to_string());
            }
        }
    }
    contexts
}

/// Interleaved index order over a length-sorted array.
///
/// Seeds with {first, last, middle}, then expands one index per arm per
/// round from both edges and both sides of the middle, spreading picks
/// across the whole array instead of clustering at one length extreme.
/// The output is a permutation of `0..n` for every `n`.
pub fn diverse_order(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let bound = n as i64;
    let mid = bound / 2;
    let mut order = Vec::with_capacity(n);
    let mut used = vec![false; n];

    for seed in [0, bound - 1, mid] {
        if (0..bound).contains(&seed) && !used[seed as usize] {
            order.push(seed as usize);
            used[seed as usize] = true;
        }
    }

    let (mut l, mut r, mut lm, mut rm) = (1, bound - 2, mid - 1, mid + 1);
    while order.len() < n {
        for cand in [l, r, lm, rm] {
            if (0..bound).contains(&cand) && !used[cand as usize] {
                order.push(cand as usize);
                used[cand as usize] = true;
            }
        }
        l += 1;
        r -= 1;
        lm -= 1;
        rm += 1;
        if l > r && lm < 0 && rm >= bound {
            for (i, seen) in used.iter().enumerate() {
                if !seen {
                    order.push(i);
                }
            }
            break;
        }
    }
    order
}

/// Sample segments in diversity order under count and character budgets.
///
/// Segments are deduplicated (first occurrence wins) and stable-sorted by
/// ascending length before sampling. Acceptance stops at the first segment
/// that would overflow the character budget; no further fitting attempts.
pub fn select_diverse_contexts(
    contexts: &[String],
    max_lines: usize,
    char_cap: usize,
) -> Vec<String> {
    if contexts.is_empty() {
        return Vec::new();
    }

    let mut seen = rustc_hash::FxHashSet::default();
    let mut uniq: Vec<&String> = Vec::new();
    for s in contexts {
        if seen.insert(s.as_str()) {
            uniq.push(s);
        }
    }
    uniq.sort_by_key(|s| s.chars().count());

    let mut picked: Vec<String> = Vec::new();
    let mut total = 0usize;
    for k in diverse_order(uniq.len()) {
        if picked.len() >= max_lines {
            break;
        }
        let s = uniq[k];
        let sep_len = if picked.is_empty() {
            0
        } else {
            CONTEXT_JOINER.len()
        };
        if total + sep_len + s.chars().count() > char_cap {
            break;
        }
        total += sep_len + s.chars().count();
        picked.push(s.clone());
    }
    picked
}

/// Build the joined context string for a term over the raw corpus.
pub fn build_context_string(
    term: &str,
    texts: &[String],
    max_lines: usize,
    char_cap: usize,
) -> String {
    let contexts = find_term_contexts(term, texts);
    select_diverse_contexts(&contexts, max_lines, char_cap).join(CONTEXT_JOINER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_word_token_match() {
        let corpus = texts(&["Enter the Temple | templed halls"]);
        let found = find_term_contexts("temple", &corpus);
        // "templed" must not match a single-word term
        assert_eq!(found, vec!["Enter the Temple".to_string()]);
    }

    #[test]
    fn test_multi_word_boundary_match() {
        let corpus = texts(&[
            "The Ancient Temple awaits",
            "ancient templeton manor",
            "an ANCIENT TEMPLE indeed",
        ]);
        let found = find_term_contexts("Ancient Temple", &corpus);
        assert_eq!(found.len(), 2);
        assert!(found.contains(&"The Ancient Temple awaits".to_string()));
        assert!(found.contains(&"an ANCIENT TEMPLE indeed".to_string()));
    }

    #[test]
    fn test_boundary_rejects_word_neighbors() {
        assert!(term_matches_segment("iron key", "take the iron key now"));
        assert!(!term_matches_segment("iron key", "environ keystone"));
        assert!(!term_matches_segment("iron key", "iron keys"));
    }

    #[test]
    fn test_contexts_split_per_clause() {
        let corpus = texts(&["Iron Key || rusted | the Iron Key turns"]);
        let found = find_term_contexts("Iron Key", &corpus);
        assert_eq!(
            found,
            vec!["Iron Key".to_string(), "the Iron Key turns".to_string()]
        );
    }

    #[test]
    fn test_diverse_order_is_permutation() {
        for n in 0..64 {
            let mut order = diverse_order(n);
            assert_eq!(order.len(), n, "wrong length for n={n}");
            order.sort_unstable();
            let expected: Vec<usize> = (0..n).collect();
            assert_eq!(order, expected, "not a permutation for n={n}");
        }
    }

    #[test]
    fn test_diverse_order_seeds() {
        let order = diverse_order(7);
        assert_eq!(&order[..3], &[0, 6, 3]);
    }

    #[test]
    fn test_select_dedups_and_caps_count() {
        let contexts = texts(&["bb", "aaa", "bb", "c", "dddd"]);
        let picked = select_diverse_contexts(&contexts, 2, 1000);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_select_respects_char_budget() {
        let contexts = texts(&["aaaa", "bbbb", "cccc"]);
        // First pick fits; second pick (4 + joiner 4) would exceed 10.
        let picked = select_diverse_contexts(&contexts, 10, 10);
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn test_budget_stops_on_first_overflow() {
        // Length-sorted: ["a", "ccc", "eeeee"]; diverse order = [0, 2, 1].
        // "a" fits, "eeeee" overflows, so "ccc" is never tried.
        let contexts = texts(&["eeeee", "ccc", "a"]);
        let picked = select_diverse_contexts(&contexts, 10, 7);
        assert_eq!(picked, vec!["a".to_string()]);
    }

    #[test]
    fn test_build_context_string_joins() {
        let corpus = texts(&["Iron Key | Iron Key opens the gate"]);
        let joined = build_context_string("Iron Key", &corpus, 30, 1200);
        assert_eq!(joined, "Iron Key || Iron Key opens the gate");
    }

    #[test]
    fn test_empty_term_and_corpus() {
        assert!(find_term_contexts("", &texts(&["anything"])).is_empty());
        assert!(find_term_contexts("term", &[]).is_empty());
        assert_eq!(build_context_string("term", &[], 30, 1200), "");
    }
}
