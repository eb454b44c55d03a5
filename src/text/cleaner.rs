//! Clause-level text cleaning
//!
//! Rewrites structural delimiters (bracketed markup, parentheses, isolated
//! dash clauses, sentence punctuation, a fixed symbol set) into a single
//! clause-separator marker. The rules form an ordered rewrite sequence;
//! later rules depend on earlier ones, so the order is fixed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker inserted between clauses, always padded to `" | "` before output.
pub const CLAUSE_SEPARATOR: &str = " | ";

/// Private-use sentinel standing in for a protected honorific period.
/// No rewrite rule touches it, so `Mr. Smith` survives cleaning intact.
const DOT_SENTINEL: char = '\u{E000}';

static HONORIFIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(Mr|Mrs|Ms|Dr|St)\.").unwrap());

/// Delimiter-to-separator rewrites, applied before honorific restoration.
static SPAN_REWRITES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Bracketed / braced / angle-bracketed markup spans
        Regex::new(r"\[.*?\]|\{.*?\}|<.*?>").unwrap(),
        // Parentheses
        Regex::new(r"[()]").unwrap(),
        // Isolated dash clauses (space-dash-space)
        Regex::new(r"\s-\s").unwrap(),
        // Sentence punctuation
        Regex::new(r"[,:;!?]").unwrap(),
    ]
});

static CONTROL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\t]").unwrap());
static SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r##"[“”"#%&*_+=<>/\\^~|]"##).unwrap());
static MARKER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|+").unwrap());
static MARKER_PAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\s*").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Rewrite structural delimiters into clause-separator markers.
///
/// Honorific abbreviations (Mr/Mrs/Ms/Dr/St) keep their period. Repeated
/// markers collapse, markers are padded to `" | "`, whitespace is collapsed
/// and the result is trimmed. Blank input yields an empty string.
pub fn clean_text(text: &str) -> String {
    let mut s = HONORIFIC
        .replace_all(text, format!("${{1}}{DOT_SENTINEL}"))
        .into_owned();
    for rule in SPAN_REWRITES.iter() {
        s = rule.replace_all(&s, CLAUSE_SEPARATOR).into_owned();
    }
    s = s.replace(DOT_SENTINEL, ".");
    s = CONTROL_WS.replace_all(&s, " ").into_owned();
    s = SYMBOLS.replace_all(&s, CLAUSE_SEPARATOR).into_owned();
    s = MARKER_RUN.replace_all(&s, "|").into_owned();
    s = MARKER_PAD.replace_all(&s, CLAUSE_SEPARATOR).into_owned();
    s = WHITESPACE.replace_all(&s, " ").into_owned();
    s.trim().to_string()
}
