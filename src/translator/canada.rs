//! Translator with a fixed table for a single country.

use super::Translator;

const CANADA: &str = "can";

const TRANSLATIONS: &[(&str, &str)] = &[
    ("de", "Kanada"),
    ("en", "Canada"),
    ("es", "Canadá"),
    ("fr", "Canada"),
    ("it", "Canada"),
    ("ja", "カナダ"),
    ("nl", "Canada"),
    ("pt", "Canadá"),
    ("ru", "Канада"),
    ("zh", "加拿大"),
];

/// A hand-built translator that only knows Canada.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanadaTranslator;

impl Translator for CanadaTranslator {
    fn list_countries(&self) -> Vec<String> {
        vec![CANADA.to_string()]
    }

    fn list_languages(&self, country: &str) -> Vec<String> {
        if country != CANADA {
            return Vec::new();
        }
        TRANSLATIONS
            .iter()
            .map(|(language, _)| language.to_string())
            .collect()
    }

    fn translate(&self, country: &str, language: &str) -> Option<String> {
        if country != CANADA {
            return None;
        }
        TRANSLATIONS
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, text)| text.to_string())
    }
}
