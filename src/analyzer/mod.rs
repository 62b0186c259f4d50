//! Keyword frequency analysis.
//!
//! Text is lowercased and tokenized, short and non-alphanumeric tokens and
//! stopwords are dropped, and the remaining words are ranked by count.
//! Ties keep the order in which words were first seen.

pub mod stopwords;
pub mod tokenizer;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::language::Language;
use crate::options::Options;
use crate::result::Keyword;

pub use stopwords::LinguisticResources;
pub use tokenizer::{is_alphanumeric_word, tokenize};

/// Ranks the most frequent non-trivial words of a text.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    resources: Arc<LinguisticResources>,
    top_n: usize,
    min_word_chars: usize,
}

impl KeywordAnalyzer {
    /// Creates an analyzer over already-loaded resources.
    #[must_use]
    pub fn new(resources: Arc<LinguisticResources>, options: &Options) -> Self {
        Self {
            resources,
            top_n: options.top_n,
            min_word_chars: options.min_word_chars,
        }
    }

    /// Returns up to `top_n` keywords, most frequent first.
    ///
    /// Text with no surviving tokens yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedLanguage`] when no stopword set is
    /// loaded for `language`.
    pub fn analyze(&self, text: &str, language: Language) -> Result<Vec<Keyword>> {
        let stopwords = self.resources.stopwords(language)?;

        let words = tokenize(text)
            .into_iter()
            .filter(|word| is_alphanumeric_word(word) && word.chars().count() >= self.min_word_chars)
            .filter(|word| !stopwords.contains(word));

        let ranked = most_common(words, self.top_n);
        tracing::debug!(%language, keywords = ranked.len(), "ranked keywords");
        Ok(ranked)
    }
}

/// Counts `words` and returns the `limit` most frequent.
///
/// The sort is stable over first-occurrence order, so equal counts keep
/// the order in which the words first appeared.
#[must_use]
pub fn most_common(words: impl IntoIterator<Item = String>, limit: usize) -> Vec<Keyword> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<Keyword> = Vec::new();

    for word in words {
        if let Some(&slot) = index.get(&word) {
            counts[slot].1 += 1;
        } else {
            index.insert(word.clone(), counts.len());
            counts.push(Keyword(word, 1));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
