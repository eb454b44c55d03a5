//! Glossary output
//!
//! Writes the final glossary as UTF-8 CSV with a byte-order mark so
//! spreadsheet tools open it with the right encoding.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::HarvestError;
use crate::types::GlossaryRow;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Write glossary rows to `path` as `term,freq,context` CSV.
pub fn write_glossary(path: &Path, rows: &[GlossaryRow]) -> Result<(), HarvestError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(["term", "freq", "context"])?;
    for row in rows {
        writer.write_record([row.term.as_str(), &row.freq.to_string(), row.context.as_str()])?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "glossary written");
    Ok(())
}
