//! Country name translation from bundled reference data.
//!
//! Looks up a country's name in a chosen language. Data comes from two kinds
//! of source: a JSON array of per-country translation records, and
//! tab-separated tables mapping language and country codes to readable names.
//! Everything is loaded once up front and only read afterwards.
//!
//! ## Module Structure
//!
//! - `translator`: the `Translator` trait and its implementations
//! - `codes`: language and country code tables
//! - `bundled`: reference data compiled into the binary
//! - `config`: configuration file loading and data path resolution
//! - `cli`: command-line interface (commands, interactive session, output)

pub mod bundled;
pub mod cli;
pub mod codes;
pub mod config;
pub mod translator;
