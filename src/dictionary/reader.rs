//! Word list loading from frequency CSV files
//!
//! The input format is a UTF-8 CSV whose first row is a header and whose
//! first column holds the candidate words; remaining columns (frequency data)
//! are ignored.

use crate::core::WordEntry;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

/// Load word entries from a frequency CSV file
///
/// Skips the header row, takes the first field of each record, trims it, and
/// keeps every word that survives [`WordEntry::new`]. Invalid words and blank
/// rows are dropped silently. Row order is preserved, so the returned list
/// carries the source's frequency ranking.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a record cannot be read.
///
/// # Examples
/// ```no_run
/// use dictionary_converter::dictionary::load_from_csv;
///
/// let words = load_from_csv("dict_input/filtered_frequency.csv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>> {
    let path = path.as_ref();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open dictionary {}", path.display()))?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read row from {}", path.display()))?;

        let Some(raw) = record.get(0) else {
            continue;
        };

        if let Ok(entry) = WordEntry::new(raw.trim()) {
            entries.push(entry);
        }
    }

    Ok(entries)
}
