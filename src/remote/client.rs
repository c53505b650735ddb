//! Lookup service page fetcher
//!
//! HTTP client for the online lookup page of a word. The body is returned
//! as raw text; interpretation is left to the heuristics.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, ClientBuilder};
use url::Url;

use crate::config::LookupConfig;
use crate::error::FetchError;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// Source of lookup-page HTML for a word
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page for a normalized, non-empty word
    async fn fetch(&self, word: &str) -> Result<String, FetchError>;
}

/// Build the lookup-service page URL for `word`.
///
/// The word becomes a single percent-encoded path segment under `base`.
pub fn word_url(base: &Url, word: &str) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl {
            base: base.to_string(),
            reason: "URL cannot have path segments".to_string(),
        })?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

/// Fetcher backed by `reqwest`
pub struct HttpPageFetcher {
    client: Client,
    base_url: Url,
}

impl HttpPageFetcher {
    pub fn new(config: &LookupConfig) -> Result<Self, FetchError> {
        Self::with_builder(config, Client::builder())
    }

    /// Finish `builder` with the configured timeout, User-Agent and Accept header
    fn with_builder(config: &LookupConfig, builder: ClientBuilder) -> Result<Self, FetchError> {
        let base_url = config.parsed_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

        let client = builder
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, word: &str) -> Result<String, FetchError> {
        let url = word_url(&self.base_url, word)?;
        tracing::debug!(%url, "Fetching lookup page");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Fetcher used when online lookups are switched off
pub struct DisabledFetcher;

#[async_trait]
impl PageFetcher for DisabledFetcher {
    async fn fetch(&self, _word: &str) -> Result<String, FetchError> {
        Err(FetchError::Disabled)
    }
}
