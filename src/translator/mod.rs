//! Country name translation sources.
//!
//! [`Translator`] is the read-only query interface the CLI works against.
//! Implementations:
//!
//! - [`JsonTranslator`]: loaded from a JSON array of country records
//! - [`CanadaTranslator`]: a fixed, hand-built single-country translator
//!
//! [`AnyTranslator`] wraps whichever one was chosen at startup.

use enum_dispatch::enum_dispatch;

mod canada;
pub mod json;

pub use canada::CanadaTranslator;
pub use json::{CountryRecord, JsonTranslator};

/// Read-only access to translated country names.
///
/// Country keys are the dataset's alpha-3 codes; language keys are the
/// dataset's column names (typically ISO 639-1 codes). Lookups never fail:
/// an unknown key yields an empty list or `None`.
#[enum_dispatch]
pub trait Translator {
    /// Every known country key, as a new list.
    fn list_countries(&self) -> Vec<String>;

    /// Language keys available for `country`, as a new list. Empty if the
    /// country is unknown.
    fn list_languages(&self, country: &str) -> Vec<String>;

    /// `country`'s name in `language`, if both are known.
    fn translate(&self, country: &str, language: &str) -> Option<String>;
}

#[enum_dispatch(Translator)]
#[derive(Debug, Clone)]
pub enum AnyTranslator {
    Json(JsonTranslator),
    Canada(CanadaTranslator),
}
