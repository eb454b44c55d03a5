//! Canonical dedup key derivation
//!
//! Maps a display term to the key used to merge variant spellings:
//! de-possessivize, de-hyphenate, strip decoration, lowercase, and
//! singularize each word. Total function; blank input yields an empty
//! string. Idempotent: normalizing a key returns the key.

pub mod singular;

use once_cell::sync::Lazy;
use regex::Regex;

pub use singular::singularize;

static POSSESSIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[’']s\b").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_/\-]+").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s']").unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Derive the canonical dedup key for a display term.
pub fn normalize_key(term: &str) -> String {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let s = POSSESSIVE.replace_all(trimmed, "");
    let s = SEPARATORS.replace_all(&s, " ");
    let s = NON_WORD.replace_all(&s, "");
    let s = SPACES.replace_all(&s, " ");
    let s = s.trim().to_lowercase();
    s.split(' ')
        .filter(|w| !w.is_empty())
        .map(singularize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_key() {
        assert_eq!(normalize_key("Ancient Temple"), "ancient temple");
    }

    #[test]
    fn test_possessive_stripped() {
        assert_eq!(normalize_key("Guard's Key"), "guard key");
        assert_eq!(normalize_key("Guard’s Key"), "guard key");
    }

    #[test]
    fn test_separators_collapse_to_space() {
        assert_eq!(normalize_key("iron-key"), "iron key");
        assert_eq!(normalize_key("save_slot"), "save slot");
        assert_eq!(normalize_key("attack/defense"), "attack defense");
    }

    #[test]
    fn test_decoration_stripped() {
        assert_eq!(normalize_key("«Temple»!"), "temple");
        assert_eq!(normalize_key("  Iron   Key  "), "iron key");
    }

    #[test]
    fn test_singularized_per_word() {
        assert_eq!(normalize_key("Iron Keys"), "iron key");
        assert_eq!(normalize_key("Wolves Den"), "wolf den");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("   "), "");
        assert_eq!(normalize_key("!!!"), "");
    }

    #[test]
    fn test_idempotent() {
        for term in [
            "Guard's Keys",
            "Ancient-Temple",
            "Wolves/Dens",
            "HP bar",
            "«Mystic» Sigils",
            "children of men",
        ] {
            let once = normalize_key(term);
            assert_eq!(normalize_key(&once), once, "not idempotent for {term}");
        }
    }
}
