//! Reference data shared by every command.
//!
//! Loaded once per invocation and then only read. A load failure is fatal
//! and propagates to `main`. Files come from the configured data directory,
//! or from the compiled-in copy when nothing on disk is configured.

use std::{env, fmt::Display};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::CommonArgs;
use crate::{
    codes::{CountryCodeIndex, LanguageCodeIndex},
    config::{CONFIG_FILE_NAME, DataPaths, load_config},
    translator::{AnyTranslator, CanadaTranslator, JsonTranslator, Translator},
};

#[derive(Debug)]
pub struct DataContext {
    pub translator: AnyTranslator,
    pub languages: LanguageCodeIndex,
    pub countries: CountryCodeIndex,
}

impl DataContext {
    /// Load configuration and all reference data for `args`.
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let config_result = load_config(&cwd)?;

        if args.verbose {
            match &config_result.source {
                Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
                None => eprintln!(
                    "Note: No {} found, using default configuration",
                    CONFIG_FILE_NAME
                ),
            }
        }

        let overrides = args.overrides();
        if config_result.uses_bundled_data(&overrides) {
            if args.verbose {
                eprintln!(
                    "Note: No {} directory found, using bundled data",
                    config_result.config.data_dir
                );
            }
            Self::load_bundled(args)
        } else {
            Self::load_files(args, &config_result.data_paths(&overrides))
        }
    }

    fn load_files(args: &CommonArgs, paths: &DataPaths) -> Result<Self> {
        let translator: AnyTranslator = if args.builtin {
            CanadaTranslator.into()
        } else {
            let translator = JsonTranslator::from_file(&paths.translations)?;
            note_loaded(
                args.verbose,
                paths.translations.display(),
                translator.len(),
                "countries",
                0,
            );
            translator.into()
        };

        let languages = LanguageCodeIndex::from_file(&paths.language_codes)?;
        note_loaded(
            args.verbose,
            paths.language_codes.display(),
            languages.count(),
            "languages",
            languages.skipped_rows(),
        );

        let countries = CountryCodeIndex::from_file(&paths.country_codes)?;
        note_loaded(
            args.verbose,
            paths.country_codes.display(),
            countries.count(),
            "countries",
            countries.skipped_rows(),
        );

        Ok(Self {
            translator,
            languages,
            countries,
        })
    }

    fn load_bundled(args: &CommonArgs) -> Result<Self> {
        let translator: AnyTranslator = if args.builtin {
            CanadaTranslator.into()
        } else {
            let translator = JsonTranslator::bundled()?;
            note_loaded(args.verbose, BUNDLED, translator.len(), "countries", 0);
            translator.into()
        };

        let languages = LanguageCodeIndex::bundled();
        note_loaded(args.verbose, BUNDLED, languages.count(), "languages", 0);

        let countries = CountryCodeIndex::bundled();
        note_loaded(args.verbose, BUNDLED, countries.count(), "countries", 0);

        Ok(Self {
            translator,
            languages,
            countries,
        })
    }

    /// Country key for user input: a key as stored, a key in another case,
    /// or a display name from the country code table.
    pub fn resolve_country(&self, input: &str) -> Option<String> {
        let known = self.translator.list_countries();
        let lowercase = input.to_lowercase();

        [Some(input), Some(lowercase.as_str()), self.countries.lookup_code(input)]
            .into_iter()
            .flatten()
            .find(|candidate| known.iter().any(|key| key == candidate))
            .map(str::to_string)
    }

    /// Language key for user input within `country`: a key as stored, a key
    /// in another case, or a language name from the language code table.
    pub fn resolve_language(&self, country: &str, input: &str) -> Option<String> {
        let known = self.translator.list_languages(country);
        let lowercase = input.to_lowercase();

        [Some(input), Some(lowercase.as_str()), self.languages.lookup_code(input)]
            .into_iter()
            .flatten()
            .find(|candidate| known.iter().any(|key| key == candidate))
            .map(str::to_string)
    }

    /// Display name for a country key, falling back to the key itself.
    pub fn country_name<'a>(&'a self, country: &'a str) -> &'a str {
        self.countries.lookup_name(country).unwrap_or(country)
    }

    /// Display name for a language key, falling back to the key itself.
    pub fn language_name<'a>(&'a self, language: &'a str) -> &'a str {
        self.languages.lookup_name(language).unwrap_or(language)
    }

    /// Country keys paired with display names, sorted by name.
    pub fn sorted_countries(&self) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = self
            .translator
            .list_countries()
            .into_iter()
            .map(|key| {
                let name = self.country_name(&key).to_string();
                (key, name)
            })
            .collect();
        rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }

    /// A country's language keys paired with language names, sorted by name.
    pub fn sorted_languages(&self, country: &str) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = self
            .translator
            .list_languages(country)
            .into_iter()
            .map(|key| {
                let name = self.language_name(&key).to_string();
                (key, name)
            })
            .collect();
        rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }
}

const BUNDLED: &str = "bundled data";

fn note_loaded(verbose: bool, source: impl Display, count: usize, what: &str, skipped: usize) {
    if !verbose {
        return;
    }
    eprintln!("Loaded {} {} from {}", count, what, source);
    if skipped > 0 {
        eprintln!(
            "{} skipped {} malformed row(s) in {}",
            "warning:".bold().yellow(),
            skipped,
            source
        );
    }
}
