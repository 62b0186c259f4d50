//! Per-URL pipeline driver.
//!
//! Each URL goes through fetch, extraction, language detection and keyword
//! analysis on its own. A fetch failure or a page without text only skips
//! that URL; the run carries on with the rest. Progress lines go to the
//! operator stream passed in by the caller.

use std::io::Write;
use std::path::Path;

use crate::analyzer::KeywordAnalyzer;
use crate::error::{Error, FetchError, Result};
use crate::extract::extract_text;
use crate::fetch::PageSource;
use crate::language::detect_language;
use crate::options::Options;
use crate::persist::save_results;
use crate::result::{ResultSet, SiteResult};

/// What happened to a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteOutcome {
    /// The page was analyzed and produced a result.
    Recorded(SiteResult),
    /// The page could not be downloaded.
    FetchFailed(FetchError),
    /// The page had no text outside the removed elements.
    EmptyContent,
}

/// Runs the keyword pipeline over a list of URLs, one at a time.
pub struct Harvester<S> {
    source: S,
    analyzer: KeywordAnalyzer,
    options: Options,
}

impl<S: PageSource> Harvester<S> {
    #[must_use]
    pub fn new(source: S, analyzer: KeywordAnalyzer, options: Options) -> Self {
        Self {
            source,
            analyzer,
            options,
        }
    }

    /// Processes one URL and reports progress to `out`.
    ///
    /// # Errors
    ///
    /// Only run-level failures are returned: writing to `out` failed, or the
    /// analyzer has no stopword set for the detected language. Fetch
    /// failures and empty pages come back as a [`SiteOutcome`].
    pub fn process_site(&self, url: &str, out: &mut dyn Write) -> Result<SiteOutcome> {
        writeln!(out, "\n[🔍] Analyzing: {url}")?;

        let html = match self.source.fetch(url) {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(url, error = %err, "fetch failed");
                writeln!(out, "Error fetching {url}: {err}")?;
                return Ok(SiteOutcome::FetchFailed(err));
            }
        };

        let text = extract_text(&html);
        if text.trim().is_empty() {
            tracing::warn!(url, "no text extracted");
            writeln!(out, "[⚠] Warning: could not extract text from {url}")?;
            return Ok(SiteOutcome::EmptyContent);
        }

        let language = detect_language(&text);
        let keywords = self.analyzer.analyze(&text, language)?;
        tracing::debug!(url, %language, chars = text.chars().count(), "analyzed page");

        Ok(SiteOutcome::Recorded(SiteResult::new(
            url,
            language,
            keywords,
            &text,
            self.options.sample_chars,
            &self.options.sample_suffix,
        )))
    }

    /// Processes every URL in order and collects the successful results.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoUrls`] for an empty list, before anything is
    /// fetched. Otherwise only the run-level failures of
    /// [`Harvester::process_site`] abort the run.
    pub fn run<U: AsRef<str>>(&self, urls: &[U], out: &mut dyn Write) -> Result<ResultSet> {
        if urls.is_empty() {
            return Err(Error::NoUrls);
        }

        let mut results = ResultSet::new();
        for url in urls {
            if let SiteOutcome::Recorded(site) = self.process_site(url.as_ref(), out)? {
                self.report_site(&site, out)?;
                results.push(site);
            }
        }

        tracing::info!(requested = urls.len(), recorded = results.len(), "harvest finished");
        Ok(results)
    }

    /// Writes `results` to `path` when there is anything to write, and
    /// reports the outcome to `out`.
    ///
    /// Returns whether a file was written. An empty result set is reported
    /// but is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if saving or reporting fails.
    pub fn finish(&self, results: &ResultSet, path: &Path, out: &mut dyn Write) -> Result<bool> {
        if results.is_empty() {
            tracing::warn!("no site produced a result");
            writeln!(out, "[❌] Could not obtain data from any site")?;
            return Ok(false);
        }

        save_results(results, path)?;
        writeln!(out, "\n[💾] Results saved to {}", path.display())?;
        Ok(true)
    }

    fn report_site(&self, site: &SiteResult, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "[✅] Keywords found: {}", site.keywords.len())?;
        writeln!(out, "    Top-{} keywords:", self.options.preview_count)?;
        for keyword in site.keywords.iter().take(self.options.preview_count) {
            writeln!(out, "    - {}: {}", keyword.word(), keyword.count())?;
        }
        Ok(())
    }
}
