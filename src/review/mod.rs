//! Collaborator review: two-round term classification over a chat endpoint

pub mod classify;
pub mod client;
pub mod payload;

pub use classify::{related_terms, TermReviewer, MAX_CONTEXTS_PER_TERM};
pub use client::{ChatMessage, ChatTransport, HttpChatTransport, ReviewEndpoint};
pub use payload::{
    build_classify_prompt, build_redundancy_prompt, extract_tag_answers, ClassifyItem,
    RedundancyItem, TagAnswer,
};

/// Verdict assigned to a candidate term during review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewTag {
    Keep,
    Remove,
    NeedRecheck,
}

impl ReviewTag {
    /// Canonical wire form of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewTag::Keep => "Keep",
            ReviewTag::Remove => "Remove",
            ReviewTag::NeedRecheck => "Need Recheck",
        }
    }

    /// Parse a tag from answer text; `None` for anything unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Keep" => Some(ReviewTag::Keep),
            "Remove" => Some(ReviewTag::Remove),
            "Need Recheck" => Some(ReviewTag::NeedRecheck),
            _ => None,
        }
    }
}
