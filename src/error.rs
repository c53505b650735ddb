//! Error types for the article lookup crate
//!
//! Only construction paths are fallible: loading configuration, loading a
//! word list and building the HTTP client. The lookup itself is total and
//! never surfaces these errors to its caller.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while fetching a page from the online lookup service
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lookup service returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Cannot build lookup URL from base '{base}': {reason}")]
    InvalidUrl { base: String, reason: String },

    #[error("Online lookup is disabled")]
    Disabled,
}

/// Failure anywhere on the online path; always recovered by the resolver
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Cannot build page pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Failure while loading a word list
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed entry on line {line}: '{content}' (expected word|article)")]
    MalformedLine { line: usize, content: String },

    #[error("Unknown article '{value}' on line {line}")]
    UnknownArticle { line: usize, value: String },
}

/// Failure while assembling the lookup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Failure while assembling a lookup service from configuration
#[derive(Error, Debug)]
pub enum ServiceBuildError {
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("HTTP client error: {0}")]
    Fetch(#[from] FetchError),
}

/// Convenience alias for dictionary loading
pub type DictionaryResult<T> = Result<T, DictionaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DictionaryError::MalformedLine {
            line: 3,
            content: "huis".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed entry on line 3: 'huis' (expected word|article)"
        );

        let err = ConfigError::InvalidValue {
            key: "HETOFDE_TIMEOUT_SECS".to_string(),
            value: "soon".to_string(),
        };
        assert!(err.to_string().contains("HETOFDE_TIMEOUT_SECS"));
    }
}
