//! Lookup configuration
//!
//! Layered as: built-in defaults, then an optional YAML file, then
//! `HETOFDE_*` environment variables (a `.env` file is honoured).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, FetchError};

/// Default online lookup service
pub const DEFAULT_BASE_URL: &str = "https://www.welklidwoord.nl";

/// Browser-like User-Agent; the lookup site serves its normal page to it
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Environment variable naming a YAML config file
pub const CONFIG_PATH_ENV: &str = "HETOFDE_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    /// Base URL of the online lookup service
    pub base_url: String,
    /// User-Agent sent with online lookups
    pub user_agent: String,
    /// Request timeout for online lookups
    pub timeout_secs: u64,
    /// Quiet period before a typed query is looked up
    pub debounce_ms: u64,
    /// Extra word list layered over the bundled one
    pub dictionary_path: Option<PathBuf>,
    /// Skip online lookups entirely
    pub offline: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            dictionary_path: None,
            offline: false,
        }
    }
}

impl LookupConfig {
    /// Parse YAML; missing keys keep their defaults
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Full layering: defaults, file (explicit path or `HETOFDE_CONFIG`),
    /// then process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is normal
        let _ = dotenvy::dotenv();

        let config = match config_path(path, std::env::var_os(CONFIG_PATH_ENV)) {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HETOFDE_*` overrides from a variable source
    pub fn with_overrides<F>(mut self, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = var("HETOFDE_BASE_URL") {
            self.base_url = value;
        }
        if let Some(value) = var("HETOFDE_USER_AGENT") {
            self.user_agent = value;
        }
        if let Some(value) = var("HETOFDE_TIMEOUT_SECS") {
            self.timeout_secs = parse_value("HETOFDE_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = var("HETOFDE_DEBOUNCE_MS") {
            self.debounce_ms = parse_value("HETOFDE_DEBOUNCE_MS", &value)?;
        }
        if let Some(value) = var("HETOFDE_DICTIONARY") {
            self.dictionary_path = Some(PathBuf::from(value));
        }
        if let Some(value) = var("HETOFDE_OFFLINE") {
            self.offline = parse_flag("HETOFDE_OFFLINE", &value)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        self.parsed_base_url().map_err(|_| ConfigError::InvalidValue {
            key: "base_url".to_string(),
            value: self.base_url.clone(),
        })?;
        Ok(())
    }

    pub fn parsed_base_url(&self) -> Result<Url, FetchError> {
        let url = Url::parse(&self.base_url).map_err(|e| FetchError::InvalidUrl {
            base: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                base: self.base_url.clone(),
                reason: "URL cannot have path segments".to_string(),
            });
        }
        Ok(url)
    }
}

fn parse_value(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Config file to read: an explicit path wins over `HETOFDE_CONFIG`.
///
/// The variable is read only after `.env` has been loaded, so both sources
/// of the path see the same environment.
fn config_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}
