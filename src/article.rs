//! Article classification and the lookup result record
//!
//! Every lookup ends in an [`ArticleResult`]. The record can only be built
//! from an already-normalized word, so the display form never leaks the
//! caller's casing or whitespace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// ARTICLE
// =============================================================================

/// Definite article a Dutch noun takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    /// Neuter: "het huis"
    Het,
    /// Common gender: "de auto"
    De,
    /// Both are in use: "het/de kind"
    Both,
    /// No classification could be made
    Unknown,
}

impl Article {
    /// Lowercase name as used in results and word lists
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::Het => "het",
            Article::De => "de",
            Article::Both => "both",
            Article::Unknown => "unknown",
        }
    }

    /// The article as it is written in front of the noun.
    ///
    /// `Both` renders as "het/de"; `Unknown` has no token.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Article::Het => Some("het"),
            Article::De => Some("de"),
            Article::Both => Some("het/de"),
            Article::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Article::Unknown)
    }

    /// Combine two independent detections into one classification
    pub fn from_detections(het: bool, de: bool) -> Self {
        match (het, de) {
            (true, true) => Article::Both,
            (true, false) => Article::Het,
            (false, true) => Article::De,
            (false, false) => Article::Unknown,
        }
    }

    /// Merge a second classification for the same word
    pub fn merge(self, other: Article) -> Article {
        match (self, other) {
            (a, b) if a == b => a,
            (Article::Unknown, b) => b,
            (a, Article::Unknown) => a,
            _ => Article::Both,
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Article {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "het" => Ok(Article::Het),
            "de" => Ok(Article::De),
            "both" | "het/de" | "de/het" => Ok(Article::Both),
            "unknown" => Ok(Article::Unknown),
            other => Err(format!("unknown article '{}'", other)),
        }
    }
}

// =============================================================================
// SOURCE
// =============================================================================

/// Which path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Bundled dictionary, empty input, or a failed online lookup
    Local,
    /// The online lookup completed (whether or not it matched)
    Online,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Local => "local",
            Source::Online => "online",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULT RECORD
// =============================================================================

/// Outcome of a single lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResult {
    word: String,
    article: Article,
    full_word: String,
    source: Source,
}

impl ArticleResult {
    /// Result for a normalized word with a known (or unknown) article.
    ///
    /// `word` must already have gone through [`normalize_word`].
    pub fn resolved(word: impl Into<String>, article: Article, source: Source) -> Self {
        let word = word.into();
        let full_word = format_full_word(article, &word);
        Self {
            word,
            article,
            full_word,
            source,
        }
    }

    /// Unknown article for a normalized word
    pub fn unresolved(word: impl Into<String>, source: Source) -> Self {
        Self::resolved(word, Article::Unknown, source)
    }

    /// Placeholder returned for empty input
    pub fn empty() -> Self {
        Self::unresolved(String::new(), Source::Local)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn article(&self) -> Article {
        self.article
    }

    pub fn full_word(&self) -> &str {
        &self.full_word
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Display form: "het huis", "het/de kind", or the bare word when unknown
pub fn format_full_word(article: Article, word: &str) -> String {
    match article.token() {
        Some(token) => format!("{} {}", token, word),
        None => word.to_string(),
    }
}

/// Trim and lower-case raw input
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_word_formatting() {
        assert_eq!(format_full_word(Article::Het, "huis"), "het huis");
        assert_eq!(format_full_word(Article::De, "auto"), "de auto");
        assert_eq!(format_full_word(Article::Both, "kind"), "het/de kind");
        assert_eq!(format_full_word(Article::Unknown, "xyz"), "xyz");
    }

    #[test]
    fn test_empty_result() {
        let result = ArticleResult::empty();
        assert_eq!(result.word(), "");
        assert_eq!(result.article(), Article::Unknown);
        assert_eq!(result.full_word(), "");
        assert_eq!(result.source(), Source::Local);
        assert!(result.is_empty());
    }

    #[test]
    fn test_from_detections_table() {
        assert_eq!(Article::from_detections(true, true), Article::Both);
        assert_eq!(Article::from_detections(true, false), Article::Het);
        assert_eq!(Article::from_detections(false, true), Article::De);
        assert_eq!(Article::from_detections(false, false), Article::Unknown);
    }

    #[test]
    fn test_merge() {
        assert_eq!(Article::Het.merge(Article::Het), Article::Het);
        assert_eq!(Article::Het.merge(Article::De), Article::Both);
        assert_eq!(Article::De.merge(Article::Both), Article::Both);
        assert_eq!(Article::Unknown.merge(Article::De), Article::De);
    }

    #[test]
    fn test_parse_article() {
        assert_eq!("het".parse::<Article>().unwrap(), Article::Het);
        assert_eq!(" De ".parse::<Article>().unwrap(), Article::De);
        assert_eq!("het/de".parse::<Article>().unwrap(), Article::Both);
        assert_eq!("de/het".parse::<Article>().unwrap(), Article::Both);
        assert!("een".parse::<Article>().is_err());
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  Huis "), "huis");
        assert_eq!(normalize_word("ÉCLAIR"), "éclair");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn test_result_serializes_with_original_keys() {
        let result = ArticleResult::resolved("kind", Article::Both, Source::Online);
        let json = serde_json::to_value(&result).expect("Should serialize");

        assert_eq!(json["word"], "kind");
        assert_eq!(json["article"], "both");
        assert_eq!(json["fullWord"], "het/de kind");
        assert_eq!(json["source"], "online");
    }
}
