//! # semantic-harvester
//!
//! Fetches web pages and summarises each one by its most frequent
//! non-trivial words.
//!
//! For every URL the page is downloaded, scripts, styles and navigation
//! chrome are stripped, the language is guessed from the alphabet, and the
//! remaining words are counted against a stopword list. Results are written
//! to a JSON file.
//!
//! ## Quick Start
//!
//! ```rust
//! use semantic_harvester::{detect_language, extract_text, Language};
//!
//! let html = r#"<html><body><nav>Menu</nav><p>Привет мир</p></body></html>"#;
//!
//! let text = extract_text(html);
//! assert_eq!(text, "Привет мир");
//! assert_eq!(detect_language(&text), Language::Russian);
//! ```
//!
//! ## Pipeline
//!
//! - **Fetch**: one GET per URL with a timeout and a desktop-browser user agent
//! - **Extract**: drop `script`, `style`, `meta`, `link`, `footer`, `nav`, `header`
//! - **Detect**: Cyrillic letters mean Russian, anything else English
//! - **Rank**: top words by count after stopword and length filtering
//!
//! Sites are processed one after another. A failing site is reported and
//! skipped; it never aborts the run.

mod error;
mod extract;
mod language;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Tokenization, stopwords and keyword ranking.
pub mod analyzer;

/// HTTP page download.
pub mod fetch;

/// Per-URL pipeline driver.
pub mod harvest;

/// JSON persistence of result sets.
pub mod persist;

/// Diagnostic logging setup.
pub mod logging;

use std::io::Write;
use std::sync::Arc;

// Public API - re-exports
pub use analyzer::{KeywordAnalyzer, LinguisticResources};
pub use error::{Error, FetchError, Result};
pub use extract::{collapse_whitespace, extract_text, NON_CONTENT_TAGS};
pub use fetch::{HttpFetcher, PageSource};
pub use harvest::{Harvester, SiteOutcome};
pub use language::{detect_language, Language};
pub use options::{Options, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT};
pub use result::{Keyword, ResultSet, SiteResult};

/// Loads stopword data according to `options`.
///
/// Uses `options.stopwords_dir` when set, the bundled lists otherwise.
///
/// # Errors
///
/// Returns [`Error::MissingResource`] when the data cannot be loaded.
pub fn load_resources(options: &Options) -> Result<LinguisticResources> {
    match &options.stopwords_dir {
        Some(dir) => LinguisticResources::from_dir(dir),
        None => LinguisticResources::bundled(),
    }
}

/// Harvests `urls` over HTTP and saves the results to
/// `options.output_path`.
///
/// Linguistic resources are loaded before the first request, so a missing
/// stopword list fails the call without touching the network. Progress
/// lines are written to `out`.
///
/// Returns the collected results; the file is only written when at least
/// one site succeeded.
///
/// # Errors
///
/// Returns an error for an empty URL list, missing linguistic resources,
/// HTTP client setup failure, or a failure to write the results.
/// Individual sites failing is not an error.
pub fn harvest<U: AsRef<str>>(urls: &[U], options: &Options, out: &mut dyn Write) -> Result<ResultSet> {
    if urls.is_empty() {
        return Err(Error::NoUrls);
    }

    let resources = Arc::new(load_resources(options)?);
    let analyzer = KeywordAnalyzer::new(resources, options);
    let fetcher = HttpFetcher::new(options)?;
    let harvester = Harvester::new(fetcher, analyzer, options.clone());

    let results = harvester.run(urls, out)?;
    harvester.finish(&results, &options.output_path, out)?;
    Ok(results)
}
