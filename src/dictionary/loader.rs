//! Word list parsing
//!
//! Format: one `word|article` entry per line, article being `het`, `de`,
//! `both`, `het/de` or `de/het`. Blank lines and `#` comments are skipped.

use std::collections::HashMap;
use std::path::Path;

use crate::article::{normalize_word, Article};
use crate::error::{DictionaryError, DictionaryResult};

pub struct WordListLoader;

impl WordListLoader {
    /// Parse a word list from text
    pub fn parse(text: &str) -> DictionaryResult<HashMap<String, Article>> {
        let mut entries: HashMap<String, Article> = HashMap::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line_num = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, article) = line.split_once('|').ok_or_else(|| {
                DictionaryError::MalformedLine {
                    line: line_num,
                    content: line.to_string(),
                }
            })?;

            let word = normalize_word(word);
            if word.is_empty() {
                return Err(DictionaryError::MalformedLine {
                    line: line_num,
                    content: line.to_string(),
                });
            }

            let article = match article.parse::<Article>() {
                Ok(Article::Unknown) | Err(_) => {
                    return Err(DictionaryError::UnknownArticle {
                        line: line_num,
                        value: article.trim().to_string(),
                    })
                }
                Ok(article) => article,
            };

            entries
                .entry(word)
                .and_modify(|existing| *existing = existing.merge(article))
                .or_insert(article);
        }

        Ok(entries)
    }

    /// Read and parse a word list file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DictionaryResult<HashMap<String, Article>> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# nouns\n\nhuis|het\n  Auto | de \nkind|het/de\n";
        let entries = WordListLoader::parse(text).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries["huis"], Article::Het);
        assert_eq!(entries["auto"], Article::De);
        assert_eq!(entries["kind"], Article::Both);
    }

    #[test]
    fn test_duplicate_with_other_article_becomes_both() {
        let entries = WordListLoader::parse("pad|het\npad|de\n").unwrap();
        assert_eq!(entries["pad"], Article::Both);
    }

    #[test]
    fn test_missing_separator_reports_line() {
        let err = WordListLoader::parse("huis|het\nauto\n").unwrap_err();
        match err {
            DictionaryError::MalformedLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "auto");
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_article_rejected() {
        let err = WordListLoader::parse("huis|een\n").unwrap_err();
        assert!(matches!(err, DictionaryError::UnknownArticle { line: 1, .. }));

        let err = WordListLoader::parse("huis|unknown\n").unwrap_err();
        assert!(matches!(err, DictionaryError::UnknownArticle { line: 1, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordListLoader::load_from_file("/nonexistent/lidwoorden.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }
}
