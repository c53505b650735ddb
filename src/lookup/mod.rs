//! Article Lookup
//!
//! Fixed fallback chain for a single query:
//!
//! ```text
//! raw input: "  Huis "
//!         │
//!         ▼
//! normalize ──► ""  ──► { word: "", unknown, local }
//!         │
//!         ├─► 1. Local dictionary
//!         │       └─► hit: { huis, het, "het huis", local }
//!         │
//!         └─► 2. Online lookup page + heuristics
//!                 ├─► fetched: { word, het|de|both|unknown, online }
//!                 └─► failed:  { word, unknown, local }
//! ```

pub mod service;

pub use service::ArticleLookupService;
