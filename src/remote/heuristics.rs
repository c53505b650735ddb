//! Article detection on raw lookup-page HTML
//!
//! The page is never parsed. Each candidate token ("Het", "De") is checked
//! against four patterns and a single hit counts as a detection:
//!
//! 1. the token alone in bold markup: `<strong>Het</strong>`
//! 2. token and word enclosed in markup: `>Het huis<`
//! 3. token and word as plain text: `Het huis`
//! 4. the token opening the top-level heading, any case: `<h1 class="x"> het`

use regex::Regex;
use std::sync::LazyLock;

use crate::article::Article;

// =============================================================================
// TOKENS AND RULES
// =============================================================================

/// Article token as it appears on the lookup page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Het,
    De,
}

impl Token {
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Het => "Het",
            Token::De => "De",
        }
    }
}

/// Which pattern produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionRule {
    StrongMarkup,
    EnclosedPhrase,
    PlainPhrase,
    Heading,
}

/// Word-independent patterns, compiled once per token.
///
/// Only opening tags may sit between `<h1>` and the token; a closing tag
/// ends the heading.
struct TokenPatterns {
    strong: Regex,
    heading: Regex,
}

impl TokenPatterns {
    fn compile(token: Token) -> Self {
        let t = token.as_str();
        Self {
            strong: Regex::new(&format!(
                r"<(?:strong|b)(?:\s[^>]*)?>\s*{t}\s*</(?:strong|b)>"
            ))
            .unwrap(),
            heading: Regex::new(&format!(
                r"(?i)<h1(?:\s[^>]*)?>(?:\s|<[^/>][^>]*>)*{t}\b"
            ))
            .unwrap(),
        }
    }
}

static HET_PATTERNS: LazyLock<TokenPatterns> =
    LazyLock::new(|| TokenPatterns::compile(Token::Het));
static DE_PATTERNS: LazyLock<TokenPatterns> =
    LazyLock::new(|| TokenPatterns::compile(Token::De));

fn patterns(token: Token) -> &'static TokenPatterns {
    match token {
        Token::Het => &HET_PATTERNS,
        Token::De => &DE_PATTERNS,
    }
}

// =============================================================================
// DETECTION
// =============================================================================

/// First rule that detects `token` for `word` in `html`, if any
pub fn matched_rule(
    html: &str,
    word: &str,
    token: Token,
) -> Result<Option<DetectionRule>, regex::Error> {
    let fixed = patterns(token);
    if fixed.strong.is_match(html) {
        return Ok(Some(DetectionRule::StrongMarkup));
    }

    let t = token.as_str();
    let w = regex::escape(word);

    let enclosed = Regex::new(&format!(r">\s*{t}\s+{w}\s*<"))?;
    if enclosed.is_match(html) {
        return Ok(Some(DetectionRule::EnclosedPhrase));
    }

    // The word must end there: "Het huis" is no evidence for "hu"
    let plain = Regex::new(&format!(r"\b{t}\s+{w}(?:\W|$)"))?;
    if plain.is_match(html) {
        return Ok(Some(DetectionRule::PlainPhrase));
    }

    if fixed.heading.is_match(html) {
        return Ok(Some(DetectionRule::Heading));
    }

    Ok(None)
}

/// Whether any rule detects `token` for `word`
pub fn detect(html: &str, word: &str, token: Token) -> Result<bool, regex::Error> {
    Ok(matched_rule(html, word, token)?.is_some())
}

/// Classify the article of `word` from the lookup page body
pub fn classify(html: &str, word: &str) -> Result<Article, regex::Error> {
    let het = detect(html, word, Token::Het)?;
    let de = detect(html, word, Token::De)?;
    Ok(Article::from_detections(het, de))
}
