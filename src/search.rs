// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Query execution: the conjunctive filter pipeline and the `Searcher`
//! context that owns snapshot, index, cache, and history.
//!
//! # Pipeline
//!
//! Each stage narrows the candidate set (AND semantics across stages):
//!
//! ```text
//! cache lookup → query tokens → location → services → size
//!              → industry → ABN → sort → cache store + history
//! ```
//!
//! Within the query stage, tokens combine by union (OR): a record matches
//! if at least one token hits its name, services, or exact ABN. Every
//! other stage filters.
//!
//! # Ordering guarantees
//!
//! The working set is always in snapshot order before sorting, and the
//! relevance sort is stable descending by score, so score ties (including
//! the everything-scores-zero case of a filter-only search) come back in
//! input order. Repeated calls with equal params return identical
//! orderings, the second served from cache.
//!
//! Absent or empty filter fields are pass-through, never errors. A
//! malformed ABN or unknown region code matches nothing rather than
//! failing.

use crate::cache::ResultCache;
use crate::fuzzy::similarity;
use crate::history::{HistoryError, HistoryRecorder, HistoryStore};
use crate::index::CompanyIndex;
use crate::regions;
use crate::scoring::{field_weight, MatchField};
use crate::suggest::suggested_terms;
use crate::types::{
    active, Company, HistoryEntry, ScoredCompany, SearchHit, SearchParams, SortKey, SortOrder,
};
use crate::utils::tokenize;
use std::collections::BTreeMap;

/// Similarity threshold for the services filter.
pub const SERVICE_THRESHOLD: f64 = 0.7;

/// Similarity threshold for the industry filter.
pub const INDUSTRY_THRESHOLD: f64 = 0.7;

/// Similarity threshold for the ABN filter. Higher than the text filters
/// because ABNs are numeric identifiers where near-misses are meaningful.
pub const ABN_THRESHOLD: f64 = 0.8;

// =============================================================================
// SEARCHER
// =============================================================================

/// The search context: one snapshot, its index, and the mutable state
/// (cache, history) that used to be module-global in the directory
/// frontend. Owning everything here gives test isolation and lets
/// embedders run independent tenants side by side.
pub struct Searcher {
    companies: Vec<Company>,
    index: CompanyIndex,
    cache: ResultCache,
    history: HistoryRecorder,
}

impl Searcher {
    /// Build a searcher over a snapshot. The index is constructed here,
    /// once, and stays valid for the life of the snapshot — there is no
    /// lazy global to go stale.
    pub fn new(companies: Vec<Company>) -> Self {
        let index = CompanyIndex::build(&companies);
        Searcher {
            companies,
            index,
            cache: ResultCache::new(),
            history: HistoryRecorder::default(),
        }
    }

    /// Searcher with persistent history (e.g. [`FileStore`]).
    ///
    /// [`FileStore`]: crate::history::FileStore
    pub fn with_history_store(companies: Vec<Company>, store: Box<dyn HistoryStore>) -> Self {
        let index = CompanyIndex::build(&companies);
        Searcher {
            companies,
            index,
            cache: ResultCache::new(),
            history: HistoryRecorder::new(store),
        }
    }

    /// Run a search, returning matching companies in final order.
    pub fn search(&mut self, params: &SearchParams) -> Vec<Company> {
        self.search_scored(params)
            .into_iter()
            .map(|scored| scored.company)
            .collect()
    }

    /// Run a search, returning companies with their relevance scores so
    /// callers can re-rank or display match quality.
    pub fn search_scored(&mut self, params: &SearchParams) -> Vec<ScoredCompany> {
        let key = params.cache_key();

        let cached: Option<Vec<SearchHit>> = self.cache.get(&key).map(<[SearchHit]>::to_vec);
        if let Some(hits) = cached {
            return self.resolve(&hits);
        }

        let hits = execute(&self.companies, &self.index, params);
        self.cache.insert(key, hits.clone());

        // Best-effort: a failing history store must not fail the search.
        let _ = self.history.record(params);

        self.resolve(&hits)
    }

    /// Autocomplete terms for partial input.
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<String> {
        suggested_terms(&self.index, input, limit)
    }

    /// Recorded searches, most recent first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    pub fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.history.clear()
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn index(&self) -> &CompanyIndex {
        &self.index
    }

    /// Lookups served from cache; lets tests verify memoization.
    pub fn cache_hits(&self) -> u64 {
        self.cache.hit_count()
    }

    fn resolve(&self, hits: &[SearchHit]) -> Vec<ScoredCompany> {
        hits.iter()
            .map(|hit| ScoredCompany {
                company: self.companies[hit.position].clone(),
                score: hit.score,
            })
            .collect()
    }
}

/// One-shot search over a snapshot: builds a throwaway index, no cache,
/// no history. For repeated queries use a [`Searcher`].
pub fn search_companies(companies: &[Company], params: &SearchParams) -> Vec<Company> {
    let index = CompanyIndex::build(companies);
    execute(companies, &index, params)
        .into_iter()
        .map(|hit| companies[hit.position].clone())
        .collect()
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Run the filter pipeline. Pure: no cache, no history, no globals.
pub(crate) fn execute(
    companies: &[Company],
    index: &CompanyIndex,
    params: &SearchParams,
) -> Vec<SearchHit> {
    let mut hits = match active(&params.query) {
        Some(query) => query_stage(index, query),
        None => (0..companies.len())
            .map(|position| SearchHit {
                position,
                score: 0.0,
            })
            .collect(),
    };

    if let Some(location) = active(&params.location) {
        let codes: Vec<String> = location
            .split(',')
            .map(|code| code.trim().to_lowercase())
            .filter(|code| !code.is_empty())
            .collect();
        if !codes.is_empty() {
            hits.retain(|hit| location_matches(&companies[hit.position], &codes));
        }
    }

    let services: Vec<&str> = params
        .services
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !services.is_empty() {
        hits = hits
            .into_iter()
            .filter_map(|mut hit| {
                best_service_similarity(&companies[hit.position], &services).map(|bonus| {
                    hit.score += bonus;
                    hit
                })
            })
            .collect();
    }

    let sizes: Vec<&str> = params
        .size
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !sizes.is_empty() {
        hits.retain(|hit| {
            companies[hit.position]
                .team_size
                .as_deref()
                .map(str::trim)
                .is_some_and(|size| sizes.contains(&size))
        });
    }

    if let Some(industry) = active(&params.industry) {
        hits = hits
            .into_iter()
            .filter_map(|mut hit| {
                industry_similarity(&companies[hit.position], industry).map(|bonus| {
                    hit.score += bonus;
                    hit
                })
            })
            .collect();
    }

    if let Some(abn) = active(&params.abn) {
        hits = hits
            .into_iter()
            .filter_map(|mut hit| {
                abn_similarity(&companies[hit.position], abn).map(|bonus| {
                    hit.score += bonus;
                    hit
                })
            })
            .collect();
    }

    sort_hits(&mut hits, companies, params.sort_by, params.sort_order);
    hits
}

/// Token union over name buckets, service buckets, and the exact ABN map.
///
/// Scores accumulate per (token, field) hit. The BTreeMap keeps the
/// working set in snapshot order.
fn query_stage(index: &CompanyIndex, query: &str) -> Vec<SearchHit> {
    let mut scores: BTreeMap<usize, f64> = BTreeMap::new();

    for token in tokenize(query) {
        for &position in index.name_bucket(&token) {
            *scores.entry(position).or_insert(0.0) += field_weight(MatchField::Name);
        }
        for &position in index.service_bucket(&token) {
            *scores.entry(position).or_insert(0.0) += field_weight(MatchField::Service);
        }
        if let Some(position) = index.abn_entry(&token) {
            *scores.entry(position).or_insert(0.0) += field_weight(MatchField::AbnExact);
        }
    }

    scores
        .into_iter()
        .map(|(position, score)| SearchHit { position, score })
        .collect()
}

/// Structured offices first; flat location string as fallback; neither →
/// excluded while a location filter is active.
fn location_matches(company: &Company, codes: &[String]) -> bool {
    if !company.offices.is_empty() {
        return company.offices.iter().any(|office| {
            codes
                .iter()
                .any(|code| regions::same_region(&office.state, code))
        });
    }

    match &company.location {
        Some(location) => codes
            .iter()
            .any(|code| regions::location_mentions(location, code)),
        None => false,
    }
}

/// Best similarity between any requested service and any record service,
/// if at least one pair clears the threshold.
fn best_service_similarity(company: &Company, requested: &[&str]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for want in requested {
        for have in &company.services {
            let score = similarity(have, want);
            if score >= SERVICE_THRESHOLD && best.is_none_or(|b| score > b) {
                best = Some(score);
            }
        }
    }
    best
}

fn industry_similarity(company: &Company, requested: &str) -> Option<f64> {
    let industry = company.industry.as_deref()?;
    let score = similarity(industry, requested);
    (score >= INDUSTRY_THRESHOLD).then_some(score)
}

/// ABN passes on fuzzy similarity OR substring containment, so a partial
/// ABN (a digit short) still finds its record.
fn abn_similarity(company: &Company, requested: &str) -> Option<f64> {
    let abn = company.abn.as_deref().map(str::trim)?;
    if abn.is_empty() {
        return None;
    }
    let score = similarity(abn, requested);
    (score >= ABN_THRESHOLD || abn.contains(requested)).then_some(score)
}

fn sort_hits(hits: &mut [SearchHit], companies: &[Company], key: SortKey, order: SortOrder) {
    match key {
        SortKey::Name => {
            hits.sort_by(|a, b| {
                let cmp = companies[a.position]
                    .name
                    .to_lowercase()
                    .cmp(&companies[b.position].name.to_lowercase());
                match order {
                    SortOrder::Asc => cmp,
                    SortOrder::Desc => cmp.reverse(),
                }
            });
        }
        SortKey::Rating => {
            hits.sort_by(|a, b| {
                let ra = companies[a.position].rating.unwrap_or(0.0);
                let rb = companies[b.position].rating.unwrap_or(0.0);
                let cmp = ra.total_cmp(&rb);
                match order {
                    SortOrder::Asc => cmp,
                    SortOrder::Desc => cmp.reverse(),
                }
            });
        }
        SortKey::Relevance => {
            // Stable descending by accumulated score. Ties keep upstream
            // (snapshot) order, so unscored searches return input order.
            hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
    }
}
