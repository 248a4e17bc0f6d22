//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - (none): interactive session, pick a country then a language
//! - `countries`: list known countries
//! - `languages`: list the languages a country is translated into
//! - `translate`: print one translation
//! - `language`: resolve a language code or name
//! - `init`: write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DataOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory holding the data files (overrides config file)
    #[arg(long, global = true, env = "CTRANS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Country translations JSON file (overrides config file)
    #[arg(long, global = true)]
    pub translations: Option<PathBuf>,

    /// Language codes table (overrides config file)
    #[arg(long, global = true)]
    pub language_codes: Option<PathBuf>,

    /// Country codes table (overrides config file)
    #[arg(long, global = true)]
    pub country_codes: Option<PathBuf>,

    /// Use the built-in Canada-only translator instead of the translations file
    #[arg(long, global = true)]
    pub builtin: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> DataOverrides {
        DataOverrides {
            data_dir: self.data_dir.clone(),
            translations: self.translations.clone(),
            language_codes: self.language_codes.clone(),
            country_codes: self.country_codes.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    /// Country key (e.g. "can") or display name (e.g. "Canada")
    pub country: String,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Country key (e.g. "can") or display name (e.g. "Canada")
    pub country: String,
    /// Language code (e.g. "fr") or name (e.g. "French")
    pub language: String,
}

#[derive(Debug, Args)]
pub struct LanguageCommand {
    /// Language code or language name
    pub query: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every country with translations
    Countries,
    /// List the languages a country's name is available in
    Languages(LanguagesCommand),
    /// Translate a country's name into a language
    Translate(TranslateCommand),
    /// Look up a language name by code, or a code by name
    Language(LanguageCommand),
    /// Initialize a new .ctransrc.json configuration file
    Init,
}
