//! Local dictionary resolver
//!
//! Read-only mapping from lowercase noun to article. The bundled list is
//! parsed once per process; a user list can be layered on top when the
//! dictionary is built, never afterwards.

pub mod loader;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::article::{Article, ArticleResult, Source};
use crate::error::DictionaryResult;

pub use loader::WordListLoader;

/// Word list shipped with the crate
const BUNDLED_WORD_LIST: &str = include_str!("../../data/lidwoorden.txt");

static BUNDLED: LazyLock<Arc<LocalDictionary>> = LazyLock::new(|| {
    let entries = WordListLoader::parse(BUNDLED_WORD_LIST).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Bundled word list is invalid, starting empty");
        HashMap::new()
    });
    tracing::debug!(entries = entries.len(), "Bundled word list loaded");
    Arc::new(LocalDictionary { entries })
});

/// In-memory noun → article mapping
#[derive(Debug, Clone, Default)]
pub struct LocalDictionary {
    entries: HashMap<String, Article>,
}

impl LocalDictionary {
    /// Shared instance of the bundled word list
    pub fn bundled() -> Arc<LocalDictionary> {
        Arc::clone(&BUNDLED)
    }

    /// Create an empty dictionary (useful for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a word list from text
    pub fn parse(text: &str) -> DictionaryResult<Self> {
        Ok(Self {
            entries: WordListLoader::parse(text)?,
        })
    }

    /// Load a word list file
    pub fn from_file<P: AsRef<Path>>(path: P) -> DictionaryResult<Self> {
        Ok(Self {
            entries: WordListLoader::load_from_file(path)?,
        })
    }

    /// Layer `other` over this dictionary; entries in `other` win
    pub fn extend(mut self, other: LocalDictionary) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Mapped article for a normalized word
    pub fn get(&self, word: &str) -> Option<Article> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a normalized, non-empty word.
    ///
    /// `None` means "no local entry", which sends the caller to the online
    /// lookup.
    pub fn resolve(&self, word: &str) -> Option<ArticleResult> {
        self.get(word)
            .map(|article| ArticleResult::resolved(word, article, Source::Local))
    }
}

impl FromIterator<(String, Article)> for LocalDictionary {
    fn from_iter<I: IntoIterator<Item = (String, Article)>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for (word, article) in iter {
            let word = crate::article::normalize_word(&word);
            if word.is_empty() || !article.is_known() {
                continue;
            }
            entries
                .entry(word)
                .and_modify(|existing: &mut Article| *existing = existing.merge(article))
                .or_insert(article);
        }
        Self { entries }
    }
}
