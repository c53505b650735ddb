//! ArticleLookupService - local-first article resolution
//!
//! Normalizes the query, consults the dictionary and falls back to the
//! online resolver on a miss.

use std::sync::Arc;

use crate::article::{normalize_word, ArticleResult};
use crate::config::LookupConfig;
use crate::dictionary::LocalDictionary;
use crate::error::ServiceBuildError;
use crate::remote::{HttpPageFetcher, PageFetcher, RemoteResolver};

/// Article lookup orchestrator
#[derive(Clone)]
pub struct ArticleLookupService {
    dictionary: Arc<LocalDictionary>,
    remote: RemoteResolver,
}

impl ArticleLookupService {
    pub fn new(dictionary: Arc<LocalDictionary>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            dictionary,
            remote: RemoteResolver::new(fetcher),
        }
    }

    /// Service that never goes online; local misses stay unknown
    pub fn offline(dictionary: Arc<LocalDictionary>) -> Self {
        Self {
            dictionary,
            remote: RemoteResolver::disabled(),
        }
    }

    /// Production service: bundled dictionary, optional user word list,
    /// HTTP fetcher unless the configuration says offline
    pub fn from_config(config: &LookupConfig) -> Result<Self, ServiceBuildError> {
        let dictionary = match &config.dictionary_path {
            Some(path) => {
                let user = LocalDictionary::from_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    entries = user.len(),
                    "Layering user word list over bundled dictionary"
                );
                Arc::new(LocalDictionary::bundled().as_ref().clone().extend(user))
            }
            None => LocalDictionary::bundled(),
        };

        if config.offline {
            tracing::info!("Online lookups disabled");
            return Ok(Self::offline(dictionary));
        }

        let fetcher = HttpPageFetcher::new(config)?;
        Ok(Self::new(dictionary, Arc::new(fetcher)))
    }

    pub fn dictionary(&self) -> &LocalDictionary {
        &self.dictionary
    }

    /// Look up the article for raw user input.
    ///
    /// Never fails: empty input, dictionary misses and online failures all
    /// end in an ordinary result.
    pub async fn lookup_article(&self, raw: &str) -> ArticleResult {
        let word = normalize_word(raw);
        if word.is_empty() {
            return ArticleResult::empty();
        }

        if let Some(result) = self.dictionary.resolve(&word) {
            tracing::debug!(word = %word, article = %result.article(), "Resolved from dictionary");
            return result;
        }

        self.remote.resolve(&word).await
    }
}
