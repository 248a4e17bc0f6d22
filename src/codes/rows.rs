//! Row reader for the tab-separated code tables.
//!
//! Both code tables share one shape: a header line followed by data lines whose
//! fields are separated by tabs. Malformed rows are never an error here; callers
//! decide which field counts they accept and count the rest as skipped.

use csv::{ReaderBuilder, StringRecord};

/// Iterate over the data rows of `content`, skipping the header line.
///
/// Quotes carry no meaning and rows may have any number of fields. Trailing
/// empty fields (from a trailing tab) are dropped, and every remaining field is
/// trimmed. Blank lines are not rows. A record the reader cannot decode comes
/// back with no fields.
pub fn data_rows(content: &str) -> impl Iterator<Item = Vec<String>> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes())
        .into_records()
        .map(|record| record.map(|record| fields(&record)).unwrap_or_default())
}

fn fields(record: &StringRecord) -> Vec<String> {
    let mut fields: Vec<&str> = record.iter().collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(|field| field.trim().to_string()).collect()
}
