//! Result types for harvesting output.
//!
//! A `SiteResult` is built once per successfully processed URL and never
//! mutated afterwards. The `ResultSet` collects them in input order and is
//! what gets written to disk.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A word and the number of times it occurred.
///
/// Serialized as a two-element JSON array: `["word", 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword(pub String, pub usize);

impl Keyword {
    /// The lowercased word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.0
    }

    /// Number of occurrences in the cleaned text.
    #[must_use]
    pub fn count(&self) -> usize {
        self.1
    }
}

/// Keyword summary of one web page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteResult {
    /// URL exactly as supplied by the caller.
    pub url: String,

    /// Stopword set the page was analyzed with.
    pub language: Language,

    /// Most frequent words, highest count first.
    pub keywords: Vec<Keyword>,

    /// Leading characters of the cleaned text, followed by an ellipsis marker.
    pub text_sample: String,
}

impl SiteResult {
    /// Builds a result, cutting `text` down to a sample of `sample_chars`
    /// characters followed by `suffix`.
    #[must_use]
    pub fn new(
        url: &str,
        language: Language,
        keywords: Vec<Keyword>,
        text: &str,
        sample_chars: usize,
        suffix: &str,
    ) -> Self {
        let mut text_sample: String = text.chars().take(sample_chars).collect();
        text_sample.push_str(suffix);

        Self {
            url: url.to_string(),
            language,
            keywords,
            text_sample,
        }
    }
}

/// Ordered collection of site results for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    sites: Vec<SiteResult>,
}

impl ResultSet {
    /// Creates an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result; only the harvester calls this.
    pub(crate) fn push(&mut self, site: SiteResult) {
        self.sites.push(site);
    }

    /// Results in input order.
    #[must_use]
    pub fn sites(&self) -> &[SiteResult] {
        &self.sites
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl From<Vec<SiteResult>> for ResultSet {
    fn from(sites: Vec<SiteResult>) -> Self {
        Self { sites }
    }
}

impl IntoIterator for ResultSet {
    type Item = SiteResult;
    type IntoIter = std::vec::IntoIter<SiteResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.into_iter()
    }
}
