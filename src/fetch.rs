//! Page download.
//!
//! One blocking GET per URL with a fixed timeout and a desktop-browser
//! `User-Agent`. Every failure is returned as a [`FetchError`]; nothing is
//! retried.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::encoding;
use crate::error::{Error, FetchError, Result};
use crate::options::Options;

/// Source of raw page markup.
///
/// The harvester only talks to pages through this trait, so runs can be
/// driven by [`HttpFetcher`] or by any in-memory source.
pub trait PageSource {
    /// Returns the markup at `url`, or why it could not be obtained.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] for any failure; callers treat it as
    /// final for that URL.
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

/// HTTP fetcher backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the client from the timeout and user agent in `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientSetup`] if the TLS backend or client cannot be
    /// initialized.
    pub fn new(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(|e| Error::ClientSetup(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let parsed = validate_url(url)?;
        tracing::debug!(url = %parsed, "fetching page");

        let response = self.client.get(parsed).send().map_err(|e| classify(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(encoding::decode_body(&body, content_type.as_deref()))
    }
}

/// Parses `url` and accepts only `http` and `https`.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] for anything else.
pub fn validate_url(url: &str) -> std::result::Result<Url, FetchError> {
    let parsed = Url::parse(url.trim()).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        "http" | "https" => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: "missing host".to_string(),
        }),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}

fn classify(url: &str, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Request(err.to_string())
    }
}
