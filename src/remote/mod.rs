//! Online lookup resolver
//!
//! Fallback for words missing from the local dictionary: fetch the lookup
//! page and classify the article from its raw HTML. The resolver is total;
//! every failure becomes an unknown result marked as local.

pub mod client;
pub mod heuristics;

use std::sync::Arc;

use crate::article::{Article, ArticleResult, Source};
use crate::error::{FetchError, RemoteError};

pub use client::{word_url, DisabledFetcher, HttpPageFetcher, PageFetcher};
pub use heuristics::{classify, detect, DetectionRule, Token};

/// Remote heuristic resolver
#[derive(Clone)]
pub struct RemoteResolver {
    fetcher: Arc<dyn PageFetcher>,
}

impl RemoteResolver {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolver that never goes online
    pub fn disabled() -> Self {
        Self::new(Arc::new(DisabledFetcher))
    }

    async fn try_resolve(&self, word: &str) -> Result<Article, RemoteError> {
        let html = self.fetcher.fetch(word).await?;
        Ok(classify(&html, word)?)
    }

    /// Resolve a normalized, non-empty word that has no local entry
    pub async fn resolve(&self, word: &str) -> ArticleResult {
        match self.try_resolve(word).await {
            Ok(article) => {
                tracing::debug!(word = %word, article = %article, "Online lookup classified word");
                ArticleResult::resolved(word, article, Source::Online)
            }
            Err(RemoteError::Fetch(FetchError::Disabled)) => {
                tracing::debug!(word = %word, "Online lookup disabled, word stays unknown");
                ArticleResult::unresolved(word, Source::Local)
            }
            Err(e) => {
                tracing::warn!(word = %word, error = %e, "Online lookup failed, word stays unknown");
                ArticleResult::unresolved(word, Source::Local)
            }
        }
    }
}
