//! Country code to display name resolution.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

use super::rows::data_rows;
use crate::bundled;

/// Returned by [`CountryCodeIndex::name_for_code`] when the code is not loaded.
pub const UNKNOWN_CODE: &str = "Unknown code";

/// Returned by [`CountryCodeIndex::code_for_name`] when the name is not loaded.
pub const UNKNOWN_COUNTRY: &str = "Unknown country";

/// One row of the country code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: String,
    /// ISO 3166-1 alpha-2, lowercased.
    pub alpha2: String,
    /// ISO 3166-1 alpha-3, lowercased.
    pub alpha3: String,
    pub numeric: Option<String>,
}

/// Bidirectional index between alpha-3 country codes and display names.
///
/// Source rows read `<name><TAB><alpha-2><TAB><alpha-3>[<TAB><numeric>]`
/// after a header line. Codes are matched case-insensitively and handed back
/// lowercased, the form the translation dataset uses for its country keys.
/// A later row for an already loaded code or name replaces the earlier one in
/// both directions.
#[derive(Debug, Clone, Default)]
pub struct CountryCodeIndex {
    entries_by_alpha3: HashMap<String, CountryEntry>,
    alpha3_by_name: HashMap<String, String>,
    skipped_rows: usize,
}

impl CountryCodeIndex {
    /// Build the table compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_tsv_str(bundled::COUNTRY_CODES)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read country codes file: {:?}", path))?;
        Ok(Self::from_tsv_str(&content))
    }

    pub fn from_tsv_str(content: &str) -> Self {
        let mut index = Self::default();

        for fields in data_rows(content) {
            let entry = match fields.as_slice() {
                [name, alpha2, alpha3] => parse_entry(name, alpha2, alpha3, None),
                [name, alpha2, alpha3, numeric] => {
                    parse_entry(name, alpha2, alpha3, Some(numeric.as_str()))
                }
                _ => None,
            };
            match entry {
                Some(entry) => index.insert(entry),
                None => index.skipped_rows += 1,
            }
        }

        index
    }

    fn insert(&mut self, entry: CountryEntry) {
        if let Some(previous) = self.entries_by_alpha3.remove(&entry.alpha3) {
            self.alpha3_by_name.remove(&previous.name);
        }
        if let Some(previous) = self.alpha3_by_name.remove(&entry.name) {
            self.entries_by_alpha3.remove(&previous);
        }
        self.alpha3_by_name
            .insert(entry.name.clone(), entry.alpha3.clone());
        self.entries_by_alpha3.insert(entry.alpha3.clone(), entry);
    }

    /// Display name for an alpha-3 code, or [`UNKNOWN_CODE`].
    pub fn name_for_code(&self, code: &str) -> &str {
        self.lookup_name(code).unwrap_or(UNKNOWN_CODE)
    }

    /// Lowercase alpha-3 code for a display name, or [`UNKNOWN_COUNTRY`].
    pub fn code_for_name(&self, name: &str) -> &str {
        self.lookup_code(name).unwrap_or(UNKNOWN_COUNTRY)
    }

    pub fn lookup_name(&self, code: &str) -> Option<&str> {
        self.entry(code).map(|entry| entry.name.as_str())
    }

    pub fn lookup_code(&self, name: &str) -> Option<&str> {
        self.alpha3_by_name.get(name).map(String::as_str)
    }

    pub fn entry(&self, code: &str) -> Option<&CountryEntry> {
        self.entries_by_alpha3.get(&code.to_lowercase())
    }

    pub fn count(&self) -> usize {
        self.entries_by_alpha3.len()
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

fn parse_entry(
    name: &str,
    alpha2: &str,
    alpha3: &str,
    numeric: Option<&str>,
) -> Option<CountryEntry> {
    if name.is_empty() || alpha3.is_empty() {
        return None;
    }
    Some(CountryEntry {
        name: name.to_string(),
        alpha2: alpha2.to_lowercase(),
        alpha3: alpha3.to_lowercase(),
        numeric: numeric
            .filter(|numeric| !numeric.is_empty())
            .map(str::to_string),
    })
}
