//! Reference data compiled into the binary.
//!
//! Used when no configuration file, path flag or `./data` directory points at
//! files on disk, so an installed `ctrans` works from any directory.

pub const TRANSLATIONS: &str = include_str!("../data/sample.json");
pub const LANGUAGE_CODES: &str = include_str!("../data/language-codes.txt");
pub const COUNTRY_CODES: &str = include_str!("../data/country-codes.txt");
