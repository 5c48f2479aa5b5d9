// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a directory search.
//!
//! These types define the record snapshot callers hand in, the filter
//! parameters a search runs with, and the scored hits that come back.
//!
//! # Invariants
//!
//! - **Company**: read-only once handed to a `Searcher`; the snapshot
//!   position (index into the caller's `Vec<Company>`) is the identity
//!   used by index buckets, cache entries, and tie-breaking.
//! - **SearchParams**: every field is optional; absent or whitespace-only
//!   means "no constraint", never an error. `cache_key` is a pure
//!   function of the normalized content, so two params built in different
//!   field orders collide to the same cache entry.

use serde::{Deserialize, Serialize};

// =============================================================================
// RECORD TYPES
// =============================================================================

/// A directory listing: one company, as supplied by the record source.
///
/// Field names serialize camelCase to interoperate with the JSON datasets
/// the directory frontend produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub offices: Vec<Office>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    /// 11-digit Australian Business Number, when known.
    #[serde(default)]
    pub abn: Option<String>,
    /// Categorical bucket ("1-10", "11-50", ...), not a number.
    #[serde(default)]
    pub team_size: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A physical office attached to a company record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    /// Region code, e.g. "NSW", "VIC".
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub is_headquarter: bool,
}

// =============================================================================
// QUERY TYPES
// =============================================================================

/// Sort key for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Rating,
    #[default]
    Relevance,
}

/// Sort direction. Descending is the default, matching the directory UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Search filter specification. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    /// Free-text query, tokenized against name, services, and ABN.
    pub query: Option<String>,
    /// Comma-joined region codes ("nsw,vic") or a single region name.
    pub location: Option<String>,
    /// Desired services; a record passes if any fuzzy-matches.
    pub services: Vec<String>,
    /// Team-size categories; exact match.
    pub size: Vec<String>,
    pub industry: Option<String>,
    pub abn: Option<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

/// A text filter is active only when it has non-whitespace content.
pub(crate) fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl SearchParams {
    /// Stable cache/history key: normalized field content in a fixed
    /// order, so semantically identical params collide regardless of how
    /// they were constructed.
    ///
    /// List fields are sorted before joining; text fields are trimmed and
    /// lowercased.
    pub fn cache_key(&self) -> String {
        fn norm(field: &Option<String>) -> String {
            active(field).map(str::to_lowercase).unwrap_or_default()
        }
        fn norm_list(list: &[String]) -> String {
            let mut items: Vec<String> = list
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            items.sort();
            items.join(",")
        }

        format!(
            "q={}|loc={}|svc={}|size={}|ind={}|abn={}|sort={:?}:{:?}",
            norm(&self.query),
            norm(&self.location),
            norm_list(&self.services),
            norm_list(&self.size),
            norm(&self.industry),
            norm(&self.abn),
            self.sort_by,
            self.sort_order,
        )
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Internal search hit: snapshot position + accumulated relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub position: usize,
    pub score: f64,
}

/// A search result with its relevance score exposed, for callers that
/// want to re-rank or display match quality.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCompany {
    pub company: Company,
    pub score: f64,
}

/// One recorded search, most recent first in the history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub params: SearchParams,
    /// Unix timestamp, seconds.
    pub timestamp: u64,
}
