// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Every filter that tolerates spelling variation goes through here: a
//! normalized similarity score in [0, 1], a threshold predicate on top of
//! it, and a ranked candidate search for autocomplete.

mod levenshtein;

pub use levenshtein::{levenshtein, levenshtein_within};

/// Similarity score between two strings, in [0, 1].
///
/// Comparison is case-insensitive over trimmed input. Scoring rules, in
/// order:
///
/// 1. Both empty → 1.0 (identical)
/// 2. One empty → 0.0 (nothing to match)
/// 3. Equal → 1.0
/// 4. One contains the other → `0.9 + 0.1 * (shorter/longer)`. Substring
///    containment short-circuits to a near-perfect score so "consult"
///    still ranks highly against "consulting" even though a third of the
///    characters are missing.
/// 5. Otherwise `1 - levenshtein / max_char_len`
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, longer) = if a_len <= b_len {
        (a_len, b_len)
    } else {
        (b_len, a_len)
    };

    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        return 0.9 + 0.1 * (shorter as f64 / longer as f64);
    }

    1.0 - levenshtein(&a, &b) as f64 / longer as f64
}

/// Does `text` match `pattern` with at least the given similarity?
///
/// An empty or whitespace-only pattern matches everything (an absent
/// filter is no constraint). Empty text never matches a non-empty pattern.
pub fn fuzzy_match(text: &str, pattern: &str, threshold: f64) -> bool {
    if pattern.trim().is_empty() {
        return true;
    }
    if text.trim().is_empty() {
        return false;
    }

    similarity(text, pattern) >= threshold
}

/// Rank `candidates` against `query` by similarity.
///
/// Returns every candidate scoring at or above `threshold`, highest score
/// first. Ties break lexicographically so output is deterministic
/// regardless of candidate order. The caller truncates to its own limit.
pub fn fuzzy_search(query: &str, candidates: &[String], threshold: f64) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (similarity(query, candidate), candidate))
        .filter(|(score, _)| *score >= threshold)
        .collect();

    scored.sort_by(|(sa, ca), (sb, cb)| {
        sb.total_cmp(sa).then_with(|| ca.cmp(cb))
    });

    scored.into_iter().map(|(_, c)| c.clone()).collect()
}

/// Wrap the first case-insensitive occurrence of `query` in `text` with
/// the given marker pair.
///
/// Only exact substring occurrences are highlighted; for fuzzy-only
/// matches the text comes back unchanged, since there is no single span
/// to point at.
pub fn highlight_match(text: &str, query: &str, open: &str, close: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return text.to_string();
    }

    let haystack = text.to_lowercase();
    let needle = query.to_lowercase();
    match haystack.find(&needle) {
        Some(start) => {
            // Byte offsets from the lowercased copy are only safe to apply to
            // the original when lowercasing preserves byte lengths; skip the
            // highlight for the rare multi-byte case change.
            let end = start + needle.len();
            if text.is_char_boundary(start) && text.is_char_boundary(end) {
                format!(
                    "{}{}{}{}{}",
                    &text[..start],
                    open,
                    &text[start..end],
                    close,
                    &text[end..]
                )
            } else {
                text.to_string()
            }
        }
        None => text.to_string(),
    }
}
