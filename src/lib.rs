//! hetofde - "het" or "de"?
//!
//! Looks up the definite article of a Dutch noun. The bundled dictionary is
//! consulted first; words it does not know are looked up on an online
//! reference page and classified from its HTML. The lookup never fails:
//! anything that goes wrong ends in an "unknown" result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hetofde::{ArticleLookupService, LookupConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let service = ArticleLookupService::from_config(&LookupConfig::default())?;
//! let result = service.lookup_article("  Huis ").await;
//! assert_eq!(result.full_word(), "het huis");
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Result record and article classification
pub mod article;

// Configuration layering
pub mod config;

// Local dictionary resolver
pub mod dictionary;

// Online lookup resolver
pub mod remote;

// Fallback chain
pub mod lookup;

// As-you-type lookups
pub mod debounce;

// Result presentation
pub mod display;

pub use article::{normalize_word, Article, ArticleResult, Source};
pub use config::LookupConfig;
pub use debounce::{DebouncedLookup, LookupUpdate};
pub use dictionary::LocalDictionary;
pub use display::{Presentation, Tint};
pub use error::{ConfigError, DictionaryError, FetchError, ServiceBuildError};
pub use lookup::ArticleLookupService;
pub use remote::{HttpPageFetcher, PageFetcher, RemoteResolver};
