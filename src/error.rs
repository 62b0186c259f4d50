//! Error types for semantic-harvester.
//!
//! `Error` covers run-level failures (startup, persistence, programming
//! errors). `FetchError` covers a single page download and is always
//! recovered by the harvester.

use std::path::PathBuf;

/// Error type for harvesting operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The harvester was started without any URLs.
    #[error("no site URLs supplied")]
    NoUrls,

    /// Stopword or tokenizer data could not be loaded at startup.
    #[error("linguistic resource unavailable: {0}")]
    MissingResource(String),

    /// A language tag outside the supported set was requested.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing progress lines to the operator stream failed.
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),

    /// Result serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single page could not be downloaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The URL did not parse or used a scheme other than http(s).
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request exceeded the configured timeout.
    #[error("request to {0} timed out")]
    Timeout(String),

    /// Connection, TLS, redirect or other transport failure.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("HTTP {code} for {url}")]
    Status { code: u16, url: String },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Result type alias for harvesting operations.
pub type Result<T> = std::result::Result<T, Error>;
