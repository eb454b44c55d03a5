//! Text cleaning, tokenization and stopword filtering

pub mod cleaner;
pub mod stopwords;
pub mod tokenizer;

pub use cleaner::{clean_text, CLAUSE_SEPARATOR};
pub use stopwords::{StopwordFilter, BUILTIN_STOPWORDS};
pub use tokenizer::{
    looks_like_title_variant, split_segments_strict, starts_with_capital_first_token,
    tokenize_to_segments, tokens,
};
