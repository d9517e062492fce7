use serde::{Deserialize, Serialize};
use crate::languages::Stemmer;
use crate::languages::english::EnglishStemmer;
use crate::languages::undetermined::UndeterminedStemmer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Undetermined,
}

impl Language {
    pub fn is_english(&self) -> bool {
        matches!(self, Language::English)
    }

    /// Map a language code or name to a supported language. Anything that is
    /// not English is undetermined.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Language::English,
            _ => Language::Undetermined,
        }
    }

    pub fn stemmer(&self) -> Box<dyn Stemmer> {
        match self {
            Language::English => Box::new(EnglishStemmer::new()),
            Language::Undetermined => Box::new(UndeterminedStemmer),
        }
    }
}
