//! In-memory business-directory search with fuzzy matching.
//!
//! This crate implements the search core of a company directory: an
//! inverted index over a record snapshot, a conjunctive filter pipeline
//! with fuzzy text matching, result caching, search history, and
//! autocomplete suggestions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   types.rs  │────▶│   index.rs   │────▶│  search.rs  │
//! │  (Company,  │     │(CompanyIndex,│     │ (Searcher,  │
//! │SearchParams)│     │ token maps)  │     │  pipeline)  │
//! └─────────────┘     └──────────────┘     └──────┬──────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌───────────┐  ┌────────────┐  ┌──────────┐  ┌────────────┐
//! │  fuzzy/   │  │ suggest.rs │  │ cache.rs │  │ history.rs │
//! │(similarity│  │ (terms)    │  │ (memo)   │  │ (log + KV  │
//! │ matching) │  │            │  │          │  │   store)   │
//! └───────────┘  └────────────┘  └──────────┘  └────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use findex::{Searcher, SearchParams};
//!
//! let companies = serde_json::from_str(&data)?;
//! let mut searcher = Searcher::new(companies);
//!
//! let results = searcher.search(&SearchParams {
//!     query: Some("cloud consulting".into()),
//!     location: Some("nsw".into()),
//!     ..Default::default()
//! });
//! ```
//!
//! The `Searcher` owns all mutable state; there are no module-global
//! singletons, so independent searchers never interfere. For one-off
//! queries [`search_companies`] runs the pipeline without a context.

// Module declarations
mod cache;
mod fuzzy;
mod history;
mod index;
mod regions;
mod scoring;
mod search;
mod suggest;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use cache::{ResultCache, CACHE_CAPACITY, CACHE_TTL};
pub use fuzzy::{fuzzy_match, fuzzy_search, highlight_match, levenshtein, levenshtein_within, similarity};
pub use history::{
    FileStore, HistoryError, HistoryRecorder, HistoryStore, MemoryStore, HISTORY_CAPACITY,
    HISTORY_KEY,
};
pub use index::{CompanyIndex, IndexStats};
pub use regions::{alias as region_alias, same_region, REGIONS};
pub use scoring::{field_weight, MatchField, MAX_FILTER_BONUS};
pub use search::{
    search_companies, Searcher, ABN_THRESHOLD, INDUSTRY_THRESHOLD, SERVICE_THRESHOLD,
};
pub use suggest::{suggested_terms, SUGGESTION_THRESHOLD};
pub use types::{
    Company, HistoryEntry, Office, ScoredCompany, SearchHit, SearchParams, SortKey, SortOrder,
};
pub use utils::{normalize, tokenize};
