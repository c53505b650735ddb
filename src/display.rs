//! Presentation of a lookup result
//!
//! Derives everything a front end shows for one result: title, subtitle,
//! a colour tag, the two copy actions and the link to the lookup page.

use serde::Serialize;
use url::Url;

use crate::article::{Article, ArticleResult, Source};
use crate::remote::word_url;

/// Colour tag keyed by article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Green,
    Blue,
    Purple,
    Red,
}

impl Tint {
    pub fn for_article(article: Article) -> Self {
        match article {
            Article::Het => Tint::Green,
            Article::De => Tint::Blue,
            Article::Both => Tint::Purple,
            Article::Unknown => Tint::Red,
        }
    }
}

/// Rendered view of an [`ArticleResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub title: String,
    pub subtitle: String,
    pub tint: Tint,
    pub source_label: &'static str,
    /// Text for "copy word": the full word with its article
    pub copy_full_word: String,
    /// Text for "copy article"; absent when the article is unknown
    pub copy_article: Option<&'static str>,
    /// Lookup page for the word; absent for empty input
    pub open_url: Option<String>,
}

impl Presentation {
    pub fn for_result(result: &ArticleResult, base_url: &Url) -> Self {
        let open_url = if result.is_empty() {
            None
        } else {
            word_url(base_url, result.word()).ok().map(String::from)
        };

        Self {
            title: result.full_word().to_string(),
            subtitle: subtitle(result),
            tint: Tint::for_article(result.article()),
            source_label: source_label(result.source()),
            copy_full_word: result.full_word().to_string(),
            copy_article: result.article().token(),
            open_url,
        }
    }
}

/// Human-readable explanation of the article
pub fn subtitle(result: &ArticleResult) -> String {
    match result.article() {
        Article::Unknown => format!("Article not found for \"{}\"", result.word()),
        Article::Both => "Both \"het\" and \"de\" are used (het/de)".to_string(),
        article => format!(
            "The article is \"{}\"",
            article.token().unwrap_or_default()
        ),
    }
}

pub fn source_label(source: Source) -> &'static str {
    match source {
        Source::Local => "local dictionary",
        Source::Online => "online",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Url {
        Url::parse("https://www.welklidwoord.nl").unwrap()
    }

    #[test]
    fn test_het_presentation() {
        let result = ArticleResult::resolved("huis", Article::Het, Source::Local);
        let view = Presentation::for_result(&result, &base());

        assert_eq!(
            view,
            Presentation {
                title: "het huis".to_string(),
                subtitle: "The article is \"het\"".to_string(),
                tint: Tint::Green,
                source_label: "local dictionary",
                copy_full_word: "het huis".to_string(),
                copy_article: Some("het"),
                open_url: Some("https://www.welklidwoord.nl/huis".to_string()),
            }
        );
    }

    #[test]
    fn test_both_copies_combined_token() {
        let result = ArticleResult::resolved("kind", Article::Both, Source::Online);
        let view = Presentation::for_result(&result, &base());

        assert_eq!(view.copy_article, Some("het/de"));
        assert_eq!(view.tint, Tint::Purple);
        assert!(view.subtitle.contains("het/de"));
    }

    #[test]
    fn test_unknown_presentation() {
        let result = ArticleResult::unresolved("xyznonword", Source::Online);
        let view = Presentation::for_result(&result, &base());

        assert_eq!(view.title, "xyznonword");
        assert_eq!(view.subtitle, "Article not found for \"xyznonword\"");
        assert_eq!(view.tint, Tint::Red);
        assert_eq!(view.copy_article, None);
    }

    #[test]
    fn test_empty_has_no_link() {
        let view = Presentation::for_result(&ArticleResult::empty(), &base());
        assert_eq!(view.open_url, None);
        assert_eq!(view.title, "");
    }
}
