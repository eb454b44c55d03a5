//! Dataset reading
//!
//! Loads the source-language strings from a CSV export. The text column is
//! detected by header name; blank cells are skipped at read time.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::errors::HarvestError;

/// Find the source-text column in the header row.
///
/// Prefers an exact `text_en` match, then falls back to the first header
/// containing `text` case-insensitively.
pub fn detect_text_column(headers: &csv::StringRecord) -> Option<usize> {
    if let Some(idx) = headers.iter().position(|h| h == "text_en") {
        return Some(idx);
    }
    headers
        .iter()
        .position(|h| h.to_lowercase().contains("text"))
}

/// Read the non-empty source texts from a CSV file.
pub fn read_texts(path: &Path) -> Result<Vec<String>, HarvestError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let column = detect_text_column(&headers).ok_or(HarvestError::MissingTextColumn)?;

    let mut texts = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(cell) = record.get(column) {
            let cell = cell.trim();
            if !cell.is_empty() {
                texts.push(cell.to_string());
            }
        }
    }
    info!(
        path = %path.display(),
        column = headers.get(column).unwrap_or(""),
        records = texts.len(),
        "dataset loaded"
    );
    Ok(texts)
}
