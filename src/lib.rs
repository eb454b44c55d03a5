//! termharvest — glossary term extraction for localization datasets.
//!
//! Takes the source-language strings of a localization export and produces
//! a reviewed glossary: candidate terms with frequencies and supporting
//! contexts, ready for translators.
//!
//! The extraction pipeline runs five stages over the raw strings
//! ([`pipeline::HarvestPipeline`]):
//!
//! 1. **Extract** — clean markup and punctuation into clause segments,
//!    split on stopwords, and collect n-gram candidates with frequencies.
//! 2. **Dedupe** — collapse candidates that normalize to the same
//!    canonical key (case, separators, possessives, plurals).
//! 3. **Filter** — frequency and capitalization gates.
//! 4. **Context** — mark terms matching a full cleaned segment as locked,
//!    and sample diverse supporting contexts per term.
//! 5. **Prune** — remove terms contained in an equally-frequent longer
//!    term.
//!
//! An optional review pass ([`review::TermReviewer`]) then classifies the
//! unlocked candidates in two rounds over a chat-completion endpoint.
//!
//! ```no_run
//! use termharvest::pipeline::{HarvestPipeline, NoopObserver};
//!
//! let texts = vec!["Open the Ancient Temple door".to_string()];
//! let output = HarvestPipeline::new().run(&texts, &mut NoopObserver);
//! for row in &output.rows {
//!     println!("{} ({})", row.term, row.freq);
//! }
//! ```

pub mod context;
pub mod dedupe;
pub mod errors;
pub mod extract;
pub mod io;
pub mod normalize;
pub mod pipeline;
pub mod prune;
pub mod review;
pub mod text;
pub mod types;

pub use errors::HarvestError;
pub use pipeline::{HarvestOutput, HarvestPipeline};
pub use types::{CandidateTerm, GlossaryRow, HarvestConfig};
