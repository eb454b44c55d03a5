//! Two-round collaborator review
//!
//! Round 1 classifies candidates with supporting contexts; round 2 prunes
//! redundancy among the round-1 keeps. Both rounds are total: any batch
//! the collaborator fails to answer validly falls back to the round's
//! default tag, and the pipeline continues.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{info, warn};

use crate::review::client::{ChatMessage, ChatTransport};
use crate::review::payload::{
    build_classify_prompt, build_redundancy_prompt, extract_tag_answers, ClassifyItem,
    RedundancyItem,
};
use crate::review::ReviewTag;
use crate::text::tokenizer::split_segments_strict;
use crate::types::GlossaryRow;

/// Maximum supporting contexts sent per term.
pub const MAX_CONTEXTS_PER_TERM: usize = 30;

const SYSTEM_PROMPT: &str = "Output JSON array only.";

/// Already-accepted terms sharing at least one case-insensitive whitespace
/// token with the candidate, sorted for deterministic payloads.
pub fn related_terms(term: &str, existing: &FxHashSet<String>) -> Vec<String> {
    let term_tokens: FxHashSet<String> =
        term.to_lowercase().split_whitespace().map(str::to_string).collect();
    let mut related: Vec<String> = existing
        .iter()
        .filter(|t| {
            t.to_lowercase()
                .split_whitespace()
                .any(|tok| term_tokens.contains(tok))
        })
        .cloned()
        .collect();
    related.sort();
    related
}

/// Drives the review rounds through a chat transport
#[derive(Debug)]
pub struct TermReviewer<T: ChatTransport> {
    transport: T,
    batch_size: usize,
}

impl<T: ChatTransport> TermReviewer<T> {
    /// Create a reviewer over the given transport
    pub fn new(transport: T, batch_size: usize) -> Self {
        Self {
            transport,
            batch_size: batch_size.max(1),
        }
    }

    /// Round 1: classify candidates with supporting contexts.
    ///
    /// Default tag on any failure: `NeedRecheck`. Valid tags returned for
    /// terms in the batch: Keep / Remove / Need Recheck; `Keep` adds the
    /// term to the accepted set.
    pub fn classify_with_context(
        &self,
        terms: &[String],
        contexts: &FxHashMap<String, Vec<String>>,
        existing: &mut FxHashSet<String>,
    ) -> IndexMap<String, ReviewTag> {
        let mut tag_map: IndexMap<String, ReviewTag> = IndexMap::new();
        if terms.is_empty() {
            return tag_map;
        }

        for (batch_idx, batch) in terms.chunks(self.batch_size).enumerate() {
            let items: Vec<ClassifyItem> = batch
                .iter()
                .map(|t| {
                    let mut ctx = contexts.get(t).cloned().unwrap_or_default();
                    ctx.truncate(MAX_CONTEXTS_PER_TERM);
                    ClassifyItem {
                        term: t.clone(),
                        contexts: ctx,
                        existing_terms: related_terms(t, existing),
                    }
                })
                .collect();

            let messages = [
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_classify_prompt(&items)),
            ];
            let content = self.transport.complete(&messages).unwrap_or_default();

            let Some(answers) = extract_tag_answers(&content) else {
                warn!(batch = batch_idx, "round 1 answer unusable, whole batch defaults");
                for t in batch {
                    tag_map.insert(t.clone(), ReviewTag::NeedRecheck);
                }
                continue;
            };

            for answer in answers {
                let term = answer.term.trim();
                let Some(tag) = ReviewTag::parse(answer.tag.trim()) else {
                    continue;
                };
                if !batch.iter().any(|t| t == term) {
                    continue;
                }
                tag_map.insert(term.to_string(), tag);
                if tag == ReviewTag::Keep {
                    existing.insert(term.to_string());
                }
            }
            for t in batch {
                if !tag_map.contains_key(t) {
                    tag_map.insert(t.clone(), ReviewTag::NeedRecheck);
                }
            }
        }
        info!(
            terms = terms.len(),
            kept = tag_map.values().filter(|t| **t == ReviewTag::Keep).count(),
            "round 1 done"
        );
        tag_map
    }

    /// Round 2: prune redundancy among round-1 keeps.
    ///
    /// Default tag on any failure: `Keep`. Valid tags: Keep / Remove;
    /// `Keep` adds to and `Remove` drops from the accepted set.
    pub fn prune_redundant(
        &self,
        keep_terms: &[String],
        existing: &mut FxHashSet<String>,
    ) -> IndexMap<String, ReviewTag> {
        let mut tag_map: IndexMap<String, ReviewTag> = IndexMap::new();
        if keep_terms.is_empty() {
            return tag_map;
        }

        for (batch_idx, batch) in keep_terms.chunks(self.batch_size).enumerate() {
            let items: Vec<RedundancyItem> = batch
                .iter()
                .map(|t| RedundancyItem {
                    term: t.clone(),
                    existing_terms: related_terms(t, existing),
                })
                .collect();

            let messages = [
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_redundancy_prompt(&items)),
            ];
            let content = self.transport.complete(&messages).unwrap_or_default();

            let Some(answers) = extract_tag_answers(&content) else {
                warn!(batch = batch_idx, "round 2 answer unusable, whole batch defaults");
                for t in batch {
                    tag_map.insert(t.clone(), ReviewTag::Keep);
                }
                continue;
            };

            for answer in answers {
                let term = answer.term.trim();
                let tag = match ReviewTag::parse(answer.tag.trim()) {
                    Some(tag) if tag != ReviewTag::NeedRecheck => tag,
                    _ => continue,
                };
                if !batch.iter().any(|t| t == term) {
                    continue;
                }
                tag_map.insert(term.to_string(), tag);
                match tag {
                    ReviewTag::Keep => {
                        existing.insert(term.to_string());
                    }
                    ReviewTag::Remove => {
                        existing.remove(term);
                    }
                    ReviewTag::NeedRecheck => {}
                }
            }
            for t in batch {
                if !tag_map.contains_key(t) {
                    tag_map.insert(t.clone(), ReviewTag::Keep);
                }
            }
        }
        info!(terms = keep_terms.len(), "round 2 done");
        tag_map
    }

    /// Run both rounds over the pipeline output.
    ///
    /// Locked (`must_keep`) rows bypass review. Output order: locked rows
    /// in pipeline order, then kept candidates in pipeline order.
    pub fn review(&self, rows: Vec<GlossaryRow>) -> Vec<GlossaryRow> {
        let (locked, candidates): (Vec<GlossaryRow>, Vec<GlossaryRow>) =
            rows.into_iter().partition(|r| r.must_keep);

        if candidates.is_empty() {
            info!(locked = locked.len(), "review skipped, all rows locked");
            return locked;
        }

        let all_terms: Vec<String> = candidates.iter().map(|r| r.term.clone()).collect();
        let contexts: FxHashMap<String, Vec<String>> = candidates
            .iter()
            .map(|r| {
                let segs: Vec<String> = split_segments_strict(&r.context)
                    .into_iter()
                    .take(MAX_CONTEXTS_PER_TERM)
                    .map(str::to_string)
                    .collect();
                (r.term.clone(), segs)
            })
            .collect();

        let mut existing: FxHashSet<String> = locked.iter().map(|r| r.term.clone()).collect();

        let round1 = self.classify_with_context(&all_terms, &contexts, &mut existing);
        let keep_terms: Vec<String> = round1
            .iter()
            .filter(|(_, tag)| **tag == ReviewTag::Keep)
            .map(|(t, _)| t.clone())
            .collect();
        let round2 = self.prune_redundant(&keep_terms, &mut existing);

        let mut final_rows = locked;
        for row in candidates {
            let tag = round2
                .get(&row.term)
                .or_else(|| round1.get(&row.term))
                .copied()
                .unwrap_or(ReviewTag::NeedRecheck);
            if tag == ReviewTag::Keep {
                final_rows.push(row);
            }
        }
        final_rows
    }
}
