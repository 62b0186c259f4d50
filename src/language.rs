//! Alphabet-based language heuristic.
//!
//! Any Cyrillic letter (`а`–`я`, `ё`, either case) marks the text as
//! Russian; everything else is treated as English. This is not language
//! detection: mixed text, transliteration and every other alphabet fall
//! through to English.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[allow(clippy::expect_used)]
static CYRILLIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[а-яё]").expect("valid regex"));

/// Languages with a stopword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Russian,
    English,
}

impl Language {
    /// All supported languages, in a fixed order.
    pub const ALL: [Language; 2] = [Language::Russian, Language::English];

    /// Lowercase tag, also used as the NLTK stopword file name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Russian => "russian",
            Language::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "russian" => Ok(Language::Russian),
            "english" => Ok(Language::English),
            other => Err(Error::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Picks the stopword language for `text`.
#[must_use]
pub fn detect_language(text: &str) -> Language {
    if CYRILLIC_RE.is_match(text) {
        Language::Russian
    } else {
        Language::English
    }
}
