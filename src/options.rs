//! Configuration options for a harvesting run.
//!
//! The `Options` struct gathers every tunable default in one place. It is
//! built once at startup (by the CLI or by library callers) and passed down
//! to the fetcher, the analyzer and the harvester.

use std::path::PathBuf;
use std::time::Duration;

/// Default JSON destination.
pub const DEFAULT_OUTPUT_FILE: &str = "semantic_results.json";

/// Desktop Chrome on Windows 10.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration options for harvesting.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use semantic_harvester::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     top_n: 10,
///     timeout: Duration::from_secs(5),
///     ..Options::default()
/// };
/// assert_eq!(options.preview_count, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Where the JSON result set is written.
    ///
    /// Default: `semantic_results.json`
    pub output_path: PathBuf,

    /// Per-request timeout for the page download.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// `User-Agent` header sent with every request.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Maximum number of keywords kept per site.
    ///
    /// Default: `20`
    pub top_n: usize,

    /// Number of keywords echoed in the progress line for each site.
    ///
    /// Default: `5`
    pub preview_count: usize,

    /// Minimum token length, in characters, for a word to be counted.
    ///
    /// Default: `3`
    pub min_word_chars: usize,

    /// Number of characters of cleaned text kept as `text_sample`.
    ///
    /// Default: `500`
    pub sample_chars: usize,

    /// Marker appended to every `text_sample`.
    ///
    /// Default: `"..."`
    pub sample_suffix: String,

    /// Directory with NLTK-style stopword files (`english`, `russian`).
    ///
    /// When `None`, the bundled lists are used.
    ///
    /// Default: `None`
    pub stopwords_dir: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            top_n: 20,
            preview_count: 5,
            min_word_chars: 3,
            sample_chars: 500,
            sample_suffix: "...".to_string(),
            stopwords_dir: None,
        }
    }
}
