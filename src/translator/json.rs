//! Translator backed by a JSON array of country records.
//!
//! The source is an array of flat objects such as
//! `{"id": 124, "alpha2": "ca", "alpha3": "can", "en": "Canada", "fr": "Canada"}`.
//! `alpha3` is the country key; `id` and `alpha2` are metadata; every other
//! field is a language key mapped to the country's name in that language.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use super::Translator;
use crate::bundled;

/// Field holding the country key.
pub const COUNTRY_KEY_FIELD: &str = "alpha3";

/// Metadata fields that are never treated as language columns.
pub const RESERVED_FIELDS: &[&str] = &["id", "alpha2", "alpha3"];

/// Translations of one country's name, keyed by language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRecord {
    /// Language keys in source column order.
    languages: Vec<String>,
    translations: HashMap<String, String>,
}

impl CountryRecord {
    fn insert(&mut self, language: &str, text: &str) {
        if self
            .translations
            .insert(language.to_string(), text.to_string())
            .is_none()
        {
            self.languages.push(language.to_string());
        }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }
}

/// Country name translations loaded once from a JSON source.
///
/// Immutable after construction. Every list handed out is a freshly built
/// `Vec`, so nothing a caller does to it can reach the stored records.
#[derive(Debug, Clone, Default)]
pub struct JsonTranslator {
    /// Country keys in order of first appearance.
    countries: Vec<String>,
    records: HashMap<String, CountryRecord>,
}

impl JsonTranslator {
    /// Load the dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(bundled::TRANSLATIONS).context("Failed to load bundled translations")
    }

    /// Load a dataset from `path`.
    ///
    /// Fails if the file cannot be read or does not hold a valid dataset.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations file: {:?}", path))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to load translations file: {:?}", path))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(content).context("Invalid JSON")?;
        let Value::Array(items) = json else {
            bail!("Expected a JSON array of country records");
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => bail!("Record {} is not a JSON object", index),
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_records(records)
    }

    /// Build a translator from already parsed records.
    ///
    /// A record whose country key was already seen replaces the earlier
    /// translations for that country.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        let mut translator = Self::default();

        for (index, record) in records.into_iter().enumerate() {
            let (country, parsed) =
                parse_record(&record).with_context(|| format!("Invalid record {}", index))?;

            if translator.records.insert(country.clone(), parsed).is_none() {
                translator.countries.push(country);
            }
        }

        Ok(translator)
    }

    pub fn record(&self, country: &str) -> Option<&CountryRecord> {
        self.records.get(country)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Translator for JsonTranslator {
    fn list_countries(&self) -> Vec<String> {
        self.countries.clone()
    }

    fn list_languages(&self, country: &str) -> Vec<String> {
        self.records
            .get(country)
            .map(|record| record.languages().to_vec())
            .unwrap_or_default()
    }

    fn translate(&self, country: &str, language: &str) -> Option<String> {
        self.records
            .get(country)
            .and_then(|record| record.get(language))
            .map(str::to_string)
    }
}

fn parse_record(record: &Map<String, Value>) -> Result<(String, CountryRecord)> {
    let country = match record.get(COUNTRY_KEY_FIELD) {
        Some(Value::String(key)) => key.clone(),
        Some(other) => bail!(
            "Field \"{}\" must be a string, found {}",
            COUNTRY_KEY_FIELD,
            other
        ),
        None => bail!("Missing field \"{}\"", COUNTRY_KEY_FIELD),
    };

    let mut parsed = CountryRecord::default();
    for (field, value) in record {
        if RESERVED_FIELDS.contains(&field.as_str()) {
            continue;
        }
        let Value::String(text) = value else {
            bail!(
                "Translation \"{}\" for country \"{}\" must be a string, found {}",
                field,
                country,
                value
            );
        };
        parsed.insert(field, text);
    }

    Ok((country, parsed))
}
