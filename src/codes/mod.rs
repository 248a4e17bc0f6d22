//! Tab-separated code tables used to present human-readable names.
//!
//! - [`LanguageCodeIndex`]: language code <-> language name
//! - [`CountryCodeIndex`]: alpha-3 country code <-> country display name

pub mod country;
pub mod language;
mod rows;

pub use country::{CountryCodeIndex, CountryEntry};
pub use language::LanguageCodeIndex;
