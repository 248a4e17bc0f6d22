use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".ctransrc.json";

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_TRANSLATIONS_FILE: &str = "sample.json";
pub const DEFAULT_LANGUAGE_CODES_FILE: &str = "language-codes.txt";
pub const DEFAULT_COUNTRY_CODES_FILE: &str = "country-codes.txt";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_translations_file")]
    pub translations_file: String,
    #[serde(default = "default_language_codes_file")]
    pub language_codes_file: String,
    #[serde(default = "default_country_codes_file")]
    pub country_codes_file: String,
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_translations_file() -> String {
    DEFAULT_TRANSLATIONS_FILE.to_string()
}

fn default_language_codes_file() -> String {
    DEFAULT_LANGUAGE_CODES_FILE.to_string()
}

fn default_country_codes_file() -> String {
    DEFAULT_COUNTRY_CODES_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            translations_file: default_translations_file(),
            language_codes_file: default_language_codes_file(),
            country_codes_file: default_country_codes_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the data directory or any data file name is empty.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("dataDir", &self.data_dir),
            ("translationsFile", &self.translations_file),
            ("languageCodesFile", &self.language_codes_file),
            ("countryCodesFile", &self.country_codes_file),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", name);
            }
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// The config file, if one was found.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            source: None,
        }),
    }
}

/// Paths of the three data files after config and overrides are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub translations: PathBuf,
    pub language_codes: PathBuf,
    pub country_codes: PathBuf,
}

/// Per-invocation overrides, typically from command line flags.
#[derive(Debug, Clone, Default)]
pub struct DataOverrides {
    pub data_dir: Option<PathBuf>,
    pub translations: Option<PathBuf>,
    pub language_codes: Option<PathBuf>,
    pub country_codes: Option<PathBuf>,
}

impl DataOverrides {
    pub fn is_empty(&self) -> bool {
        self.data_dir.is_none()
            && self.translations.is_none()
            && self.language_codes.is_none()
            && self.country_codes.is_none()
    }
}

impl ConfigLoadResult {
    /// True if config was loaded from a file, false if using defaults.
    pub fn from_file(&self) -> bool {
        self.source.is_some()
    }

    /// True if nothing points at data on disk, so the compiled-in data applies.
    ///
    /// That is the case without a config file, without overrides, and when the
    /// default data directory does not exist under `base_dir`.
    pub fn uses_bundled_data(&self, overrides: &DataOverrides) -> bool {
        !self.from_file()
            && overrides.is_empty()
            && !self.base_dir.join(&self.config.data_dir).is_dir()
    }

    /// Resolve the data file paths.
    ///
    /// An overriding file path is used as given. Otherwise the file name from
    /// the config is joined onto the data directory, which is itself either the
    /// override or the config's `dataDir` resolved against `base_dir`.
    pub fn data_paths(&self, overrides: &DataOverrides) -> DataPaths {
        let data_dir = match &overrides.data_dir {
            Some(dir) => dir.clone(),
            None => self.base_dir.join(&self.config.data_dir),
        };
        let resolve = |over: &Option<PathBuf>, name: &str| {
            over.clone().unwrap_or_else(|| data_dir.join(name))
        };

        DataPaths {
            translations: resolve(&overrides.translations, &self.config.translations_file),
            language_codes: resolve(&overrides.language_codes, &self.config.language_codes_file),
            country_codes: resolve(&overrides.country_codes, &self.config.country_codes_file),
        }
    }
}
