//! Stopword filtering
//!
//! The pipeline default is a fixed built-in list tuned for localization
//! source strings: function words, UI/common verbs, contractions, and roman
//! numerals i-xv. Language lists from the `stop-words` crate are reachable
//! for library consumers processing other corpora.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Built-in stopword list for localization corpora.
///
/// A stopword splits a segment's token run; it can never appear inside a
/// candidate term.
pub const BUILTIN_STOPWORDS: &[&str] = &[
    "a", "an", "and", "or", "but", "if", "then", "else", "when", "while", "for", "to", "from",
    "by", "with", "without", "of", "in", "on", "at", "as", "is", "are", "was", "were", "be",
    "been", "being", "it", "its", "this", "that", "these", "those", "you", "your", "yours", "we",
    "our", "us", "ours", "they", "them", "their", "theirs", "he", "she", "his", "her", "hers",
    "i", "me", "my", "do", "does", "did", "done", "doing", "can", "could", "should", "would",
    "may", "might", "must", "will", "shall", "not", "no", "yes", "up", "down", "over", "under",
    "again", "more", "most", "some", "such", "only", "own", "same", "so", "than", "too", "very",
    "into", "out", "about", "above", "below", "between", "through", "during", "before", "after",
    "off", "against", "new", "now", "enter", "unlock", "unlocked", "available", "tap", "click",
    "open", "close", "back", "next", "previous", "ok", "okay", "cancel", "please", "error",
    "success", "failed", "confirm", "retry", "skip", "start", "stop", "continue", "loading",
    "load", "save", "saved", "press", "hold", "release", "enable", "disable", "enabled",
    "disabled", "have", "has", "alright", "hey", "hi", "hello", "bye", "goodbye", "thanks",
    "thank", "sorry", "okey", "yah", "yeah", "yep", "nope", "uh", "uhh", "hmm", "huh", "ah",
    "oh", "oops", "briefly", "who", "whom", "whose", "what", "which", "where", "why", "how",
    "it's", "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't", "won't",
    "wouldn't", "can't", "couldn't", "shouldn't", "don't", "doesn't", "didn't", "i'll", "you'll",
    "he'll", "she'll", "we'll", "they'll", "i'd", "you'd", "he'd", "she'd", "we'd", "they'd",
    "i'm", "you're", "we're", "they're", "he's", "she's", "that's", "there's", "here's",
    "what's", "who's", "how's", "where's", "let's", "ain't", "i've", "you've", "we've",
    "they've", "gonna", "wanna", "gotta", "kinda", "sorta", "lotta", "lemme", "gimme", "y’all",
    "c’mon", "'em", "ma’am", "’cause", "cos", "’til", "’bout", "’round", "should’ve",
    "would’ve", "could’ve", "might’ve", "must’ve", "just", "really", "quite", "even", "ever",
    "always", "maybe", "perhaps", "still", "also", "yet", "already", "almost", "though",
    "although", "however", "therefore", "hence", "thus", "either", "neither", "each", "both",
    "every", "anyone", "anything", "everyone", "everything", "someone", "something", "none",
    "nothing", "somebody", "nobody", "everybody", "whichever", "whenever", "wherever",
    "whatever", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii",
    "xiv", "xv",
];

/// A membership filter for stopwords (lowercase)
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StopwordFilter {
    /// Create the built-in localization stopword filter
    pub fn builtin() -> Self {
        Self::from_list(BUILTIN_STOPWORDS)
    }

    /// Create an empty stopword filter (no run splitting)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Create a stopword filter from a `stop-words` crate language list
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi,
    /// hu, tr, pl, ar. Unknown languages fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
