//! Autocomplete suggestions derived from index tokens.

use crate::fuzzy::fuzzy_search;
use crate::index::CompanyIndex;
use crate::utils::normalize;
use std::collections::BTreeSet;

/// Similarity threshold for suggestion ranking. Looser than the filter
/// thresholds (0.7/0.8) since partial input is the normal case here.
pub const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Suggest completions for partial input.
///
/// Scans the name, service, and industry token maps for tokens containing
/// the normalized input as a substring, then ranks the deduplicated
/// candidates with [`fuzzy_search`] and truncates to `limit`.
///
/// Deterministic for a given index and input: candidates are collected
/// into sorted order before ranking, so map iteration order never leaks
/// into the output.
pub fn suggested_terms(index: &CompanyIndex, input: &str, limit: usize) -> Vec<String> {
    let query = normalize(input);
    if query.is_empty() {
        return Vec::new();
    }

    let candidates: BTreeSet<&str> = index
        .name_tokens()
        .chain(index.service_tokens())
        .chain(index.industry_tokens())
        .filter(|token| token.contains(&query))
        .collect();
    let candidates: Vec<String> = candidates.into_iter().map(str::to_string).collect();

    let mut ranked = fuzzy_search(&query, &candidates, SUGGESTION_THRESHOLD);
    ranked.truncate(limit);
    ranked
}
