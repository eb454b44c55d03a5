//! Rule-based singularization
//!
//! Irregular-plural table, invariant list, and ordered suffix rules.
//! Operates on lowercase words; a word with no detected singular form is
//! returned unchanged. Idempotent by construction.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

/// Plurals that do not follow suffix rules
static IRREGULAR: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("people", "person"),
        ("oxen", "ox"),
        ("dice", "die"),
    ]
    .into_iter()
    .collect()
});

/// Words that are their own plural, or look plural but are singular
static INVARIANT: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "series", "species", "news", "means", "sheep", "fish", "deer", "swine", "aircraft",
        "salmon", "bison", "chassis", "corps",
    ]
    .into_iter()
    .collect()
});

/// Plurals in -ves with an -f or -fe singular
static VES_PLURALS: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("wolves", "wolf"),
        ("knives", "knife"),
        ("lives", "life"),
        ("wives", "wife"),
        ("leaves", "leaf"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("halves", "half"),
        ("calves", "calf"),
        ("scarves", "scarf"),
        ("loaves", "loaf"),
        ("hooves", "hoof"),
        ("elves", "elf"),
        ("selves", "self"),
        ("sheaves", "sheaf"),
        ("wharves", "wharf"),
        ("dwarves", "dwarf"),
    ]
    .into_iter()
    .collect()
});

/// Singularize one lowercase word, or return it unchanged.
pub fn singularize(word: &str) -> String {
    if INVARIANT.contains(word) {
        return word.to_string();
    }
    if let Some(&singular) = IRREGULAR.get(word) {
        return singular.to_string();
    }
    if let Some(&singular) = VES_PLURALS.get(word) {
        return singular.to_string();
    }
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    // -zes alone would clip -ze words (prizes), so require the doubled z.
    if ["xes", "ches", "shes", "sses", "zzes"]
        .iter()
        .any(|suf| word.ends_with(suf))
    {
        return word[..word.len() - 2].to_string();
    }
    if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
