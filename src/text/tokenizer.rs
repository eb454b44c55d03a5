//! Tokenization and segment splitting
//!
//! Tokens are alphanumeric-led lexical units (`[A-Za-z0-9][A-Za-z0-9'/-]*`).
//! Stopwords split a segment's token run into sub-runs; pure-digit tokens
//! and single alphanumeric characters are dropped outright.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::stopwords::StopwordFilter;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9][A-Za-z0-9'/-]*").unwrap());

/// Extract raw tokens from a segment
pub fn tokens(segment: &str) -> Vec<&str> {
    TOKEN.find_iter(segment).map(|m| m.as_str()).collect()
}

/// A token consisting solely of ASCII digits
pub fn is_pure_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// A single alphanumeric character
pub fn is_single_alnum(token: &str) -> bool {
    token.len() == 1 && token.bytes().next().is_some_and(|b| b.is_ascii_alphanumeric())
}

/// Split a cleaned string into filtered token runs.
///
/// The string is split on the clause-separator marker; within each segment,
/// a stopword ends the current run and starts a new one, digit tokens and
/// single characters are dropped. Runs that end up as a lone digit or
/// single character are discarded as well.
pub fn tokenize_to_segments(cleaned: &str, stopwords: &StopwordFilter) -> Vec<Vec<String>> {
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut runs: Vec<Vec<String>> = Vec::new();
    for segment in cleaned.split('|') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let mut current: Vec<String> = Vec::new();
        for tok in tokens(segment) {
            if is_pure_digits(tok) {
                continue;
            }
            if is_single_alnum(tok) {
                continue;
            }
            if stopwords.is_stopword(tok) {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
                continue;
            }
            current.push(tok.to_string());
        }
        if !current.is_empty() {
            runs.push(current);
        }
    }

    // A lone digit or single character never survives as a 1-gram source.
    runs.retain(|run| {
        if run.len() == 1 {
            let t = &run[0];
            !is_pure_digits(t) && !is_single_alnum(t)
        } else {
            true
        }
    });
    runs
}

/// Split a raw text on literal pipes into trimmed non-empty clause segments
pub fn split_segments_strict(s: &str) -> Vec<&str> {
    s.split('|')
        .map(str::trim)
        .filter(|seg| !seg.is_empty())
        .collect()
}

/// The first extracted token begins with an uppercase letter
pub fn starts_with_capital_first_token(s: &str) -> bool {
    match TOKEN.find(s) {
        Some(m) => m
            .as_str()
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() && c.is_uppercase()),
        None => false,
    }
}

/// At least one whitespace token begins with an uppercase letter or is
/// fully uppercase
pub fn looks_like_title_variant(s: &str) -> bool {
    s.split_whitespace().any(|t| {
        let first_upper = t.chars().next().is_some_and(|c| c.is_uppercase());
        let mut cased = t.chars().filter(|c| c.is_alphabetic()).peekable();
        let all_upper = cased.peek().is_some() && cased.all(|c| c.is_uppercase());
        first_upper || all_upper
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pattern() {
        assert_eq!(
            tokens("Guard's Key-ring a/b 42"),
            vec!["Guard's", "Key-ring", "a/b", "42"]
        );
        assert_eq!(tokens("...!!"), Vec::<&str>::new());
    }

    #[test]
    fn test_stopword_splits_runs() {
        let sw = StopwordFilter::from_list(&["open", "the"]);
        let runs = tokenize_to_segments("Open the Ancient Temple door", &sw);
        assert_eq!(runs, vec![vec!["Ancient", "Temple", "door"]]);
    }

    #[test]
    fn test_stopword_in_middle_splits() {
        let sw = StopwordFilter::from_list(&["of"]);
        let runs = tokenize_to_segments("Hall of Mirrors", &sw);
        assert_eq!(runs, vec![vec!["Hall"], vec!["Mirrors"]]);
    }

    #[test]
    fn test_digits_and_single_chars_dropped() {
        let sw = StopwordFilter::empty();
        let runs = tokenize_to_segments("Level 99 a Temple", &sw);
        assert_eq!(runs, vec![vec!["Level", "Temple"]]);
    }

    #[test]
    fn test_segments_split_on_marker() {
        let sw = StopwordFilter::empty();
        let runs = tokenize_to_segments("Ancient Temple | Iron Key", &sw);
        assert_eq!(runs, vec![vec!["Ancient", "Temple"], vec!["Iron", "Key"]]);
    }

    #[test]
    fn test_empty_input_yields_no_runs() {
        let sw = StopwordFilter::builtin();
        assert!(tokenize_to_segments("", &sw).is_empty());
        assert!(tokenize_to_segments(" |  | ", &sw).is_empty());
    }

    #[test]
    fn test_split_segments_strict() {
        assert_eq!(
            split_segments_strict("one || two | three "),
            vec!["one", "two", "three"]
        );
        assert!(split_segments_strict("").is_empty());
    }

    #[test]
    fn test_starts_with_capital_first_token() {
        assert!(starts_with_capital_first_token("Ancient Temple"));
        assert!(starts_with_capital_first_token("\"Temple\" door"));
        assert!(!starts_with_capital_first_token("ancient Temple"));
        assert!(!starts_with_capital_first_token("42 Temple"));
        assert!(!starts_with_capital_first_token(""));
    }

    #[test]
    fn test_looks_like_title_variant() {
        assert!(looks_like_title_variant("ancient Temple"));
        assert!(looks_like_title_variant("HP bar"));
        assert!(!looks_like_title_variant("ancient temple"));
        assert!(!looks_like_title_variant(""));
    }
}
