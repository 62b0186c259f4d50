//! Stopword sets, loaded once per process.
//!
//! `LinguisticResources` is built before any site is processed and then
//! shared read-only with the analyzer. A language without a set is a hard
//! error, never an empty set.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::language::Language;

/// Immutable stopword sets keyed by language.
#[derive(Debug, Clone)]
pub struct LinguisticResources {
    stopwords: HashMap<Language, HashSet<String>>,
}

impl LinguisticResources {
    /// Loads the NLTK stopword lists bundled with the `stop-words` crate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingResource`] if a bundled list is empty.
    pub fn bundled() -> Result<Self> {
        let mut stopwords = HashMap::new();
        for language in Language::ALL {
            let words = bundled_list(language);
            if words.is_empty() {
                return Err(Error::MissingResource(format!("bundled {language} stopword list is empty")));
            }
            stopwords.insert(language, normalize(words));
        }
        tracing::debug!("loaded bundled stopword lists");
        Ok(Self { stopwords })
    }

    /// Loads NLTK-style stopword files from `dir` (`dir/english`,
    /// `dir/russian`), one word per line. Blank lines and `#` comments are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingResource`] if a file is missing, unreadable,
    /// or contains no words.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut stopwords = HashMap::new();
        for language in Language::ALL {
            let path = dir.join(language.as_str());
            let contents = fs::read_to_string(&path)
                .map_err(|e| Error::MissingResource(format!("{}: {e}", path.display())))?;
            let words: Vec<&str> = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .collect();
            if words.is_empty() {
                return Err(Error::MissingResource(format!("{} contains no stopwords", path.display())));
            }
            tracing::debug!(path = %path.display(), words = words.len(), "loaded stopword file");
            stopwords.insert(language, normalize(words));
        }
        Ok(Self { stopwords })
    }

    /// Builds resources from explicit word lists.
    ///
    /// Languages not listed have no set, and analyzing text in them fails.
    #[must_use]
    pub fn from_lists<I, W>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Language, Vec<W>)>,
        W: AsRef<str>,
    {
        let stopwords = lists
            .into_iter()
            .map(|(language, words)| (language, normalize(words)))
            .collect();
        Self { stopwords }
    }

    /// Stopword set for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] when no set was loaded for it.
    pub fn stopwords(&self, language: Language) -> Result<&HashSet<String>> {
        self.stopwords
            .get(&language)
            .ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))
    }

    /// Whether `word` is a stopword in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] when no set was loaded for it.
    pub fn is_stopword(&self, language: Language, word: &str) -> Result<bool> {
        Ok(self.stopwords(language)?.contains(word))
    }
}

fn bundled_list(language: Language) -> Vec<String> {
    let words = match language {
        Language::English => stop_words::get(stop_words::LANGUAGE::English),
        Language::Russian => stop_words::get(stop_words::LANGUAGE::Russian),
    };
    words.iter().map(ToString::to_string).collect()
}

fn normalize<W: AsRef<str>>(words: impl IntoIterator<Item = W>) -> HashSet<String> {
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
