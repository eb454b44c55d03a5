//! Dataset input and glossary output

pub mod dataset;
pub mod writer;

pub use dataset::{detect_text_column, read_texts};
pub use writer::write_glossary;
