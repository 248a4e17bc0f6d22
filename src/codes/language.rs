//! Language code to language name resolution.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

use super::rows::data_rows;
use crate::bundled;

/// Returned by [`LanguageCodeIndex::name_for_code`] when the code is not loaded.
pub const UNKNOWN_CODE: &str = "Unknown code";

/// Returned by [`LanguageCodeIndex::code_for_name`] when the name is not loaded.
pub const UNKNOWN_LANGUAGE: &str = "Unknown language";

/// Bidirectional index between language codes (e.g. `en`) and language
/// names (e.g. `English`).
///
/// Built once from a tab-separated table whose first line is a header and
/// whose data lines read `<name><TAB><code>`. Lines that do not have exactly
/// two fields are skipped, so a few bad lines never make the table unusable.
/// A two-field line is kept even when one field is empty after trimming.
/// Only failing to read the file is an error.
#[derive(Debug, Clone, Default)]
pub struct LanguageCodeIndex {
    names_by_code: HashMap<String, String>,
    codes_by_name: HashMap<String, String>,
    skipped_rows: usize,
}

impl LanguageCodeIndex {
    /// Build the table compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_tsv_str(bundled::LANGUAGE_CODES)
    }

    /// Load a table from `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read language codes file: {:?}", path))?;
        Ok(Self::from_tsv_str(&content))
    }

    /// Build an index from table text.
    pub fn from_tsv_str(content: &str) -> Self {
        let mut index = Self::default();

        for fields in data_rows(content) {
            match fields.as_slice() {
                [name, code] => {
                    index.names_by_code.insert(code.clone(), name.clone());
                    index.codes_by_name.insert(name.clone(), code.clone());
                }
                _ => index.skipped_rows += 1,
            }
        }

        index
    }

    /// Name for `code`, or [`UNKNOWN_CODE`].
    pub fn name_for_code(&self, code: &str) -> &str {
        self.lookup_name(code).unwrap_or(UNKNOWN_CODE)
    }

    /// Code for `name`, or [`UNKNOWN_LANGUAGE`].
    pub fn code_for_name(&self, name: &str) -> &str {
        self.lookup_code(name).unwrap_or(UNKNOWN_LANGUAGE)
    }

    pub fn lookup_name(&self, code: &str) -> Option<&str> {
        self.names_by_code.get(code).map(String::as_str)
    }

    pub fn lookup_code(&self, name: &str) -> Option<&str> {
        self.codes_by_name.get(name).map(String::as_str)
    }

    /// Number of distinct codes loaded.
    pub fn count(&self) -> usize {
        self.names_by_code.len()
    }

    /// Number of data rows ignored as malformed.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
