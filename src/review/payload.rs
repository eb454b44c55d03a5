//! Review request payloads and answer parsing
//!
//! Builds the per-batch prompts and recovers the JSON array of verdicts
//! from collaborator answers that may be fenced in Markdown code blocks or
//! embedded in prose.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Round-1 request object: term with supporting contexts and related terms
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyItem {
    pub term: String,
    pub contexts: Vec<String>,
    pub existing_terms: Vec<String>,
}

/// Round-2 request object: term with related terms only
#[derive(Debug, Clone, Serialize)]
pub struct RedundancyItem {
    pub term: String,
    pub existing_terms: Vec<String>,
}

/// One verdict from the collaborator
#[derive(Debug, Clone, Deserialize)]
pub struct TagAnswer {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub tag: String,
}

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^```(?:json)?\s*(.*?)```$").unwrap());
static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*([\]}])").unwrap());

fn strip_code_fences(s: &str) -> &str {
    match CODE_FENCE.captures(s.trim()) {
        Some(caps) => caps.get(1).map_or(s, |m| m.as_str().trim()),
        None => s,
    }
}

/// Extract the outermost JSON array of verdict objects from answer text.
///
/// Returns `None` when no well-formed array of objects can be recovered;
/// the caller maps that to the round's default tag for the whole batch.
pub fn extract_tag_answers(content: &str) -> Option<Vec<TagAnswer>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return None;
    }
    let s = strip_code_fences(trimmed).trim();

    let candidate = if s.starts_with('[') && s.ends_with(']') {
        s.to_string()
    } else {
        let first = s.find('[')?;
        let last = s.rfind(']')?;
        if last <= first {
            return None;
        }
        s[first..=last].to_string()
    };
    let candidate = TRAILING_COMMA
        .replace_all(&candidate, "$1")
        .replace('\u{feff}', "");

    let values: Vec<serde_json::Value> = serde_json::from_str(candidate.trim()).ok()?;
    if values.iter().any(|v| !v.is_object()) {
        return None;
    }
    Some(
        values
            .into_iter()
            .map(|v| TagAnswer {
                term: v
                    .get("term")
                    .and_then(|t| t.as_str())
                    .unwrap_or_default()
                    .to_string(),
                tag: v
                    .get("tag")
                    .and_then(|t| t.as_str())
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect(),
    )
}

/// Build the round-1 prompt (classification with contexts).
pub fn build_classify_prompt(items: &[ClassifyItem]) -> String {
    let payload = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"You are reviewing English localization terms for a video game.

Each term must be evaluated **as-is**, based only on:
- Its own content
- Context lines provided
- Related existing terms (existing_terms)

Do NOT infer meanings, synonyms, or definitions.
Only compare tokens exactly; do not match substrings within other words.

Assign each term exactly one tag:
- Keep: term is complete, meaningful, necessary, and not redundant
- Remove: term is incomplete, redundant, or already covered by existing_terms
- Need Recheck: ambiguous, unsure, or insufficient context
Return JSON array ONLY, one object per term:
[
  {{"term":"...","tag":"Keep"}},
  {{"term":"...","tag":"Remove"}},
  {{"term":"...","tag":"Need Recheck"}}
]

Input terms with contexts and related existing terms:
{payload}"#
    )
}

/// Build the round-2 prompt (redundancy pruning).
pub fn build_redundancy_prompt(items: &[RedundancyItem]) -> String {
    let payload = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"You are reviewing English localization terms for a video game.
Each term must be evaluated strictly as a stand-alone term for translation.
Do NOT provide definitions, explanations, or suggestions.

Input for each term:
- "term": the term to evaluate (single word or multi-word)
- "existing_terms": list of existing terms already approved

Your task:
For each term, decide whether it should be:
- Keep: the term is complete, meaningful, and not redundant
- Remove: the term is incomplete, redundant, or its meaning is already covered by existing_terms

Important:
- Only use existing_terms for redundancy checks; do not invent synonyms or definitions

Return JSON array ONLY, one object per term:
[
  {{"term":"...","tag":"Keep"}},
  {{"term":"...","tag":"Remove"}}
]

Input terms with related existing terms:
{payload}"#
    )
}
