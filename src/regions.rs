// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

//! The region alias table: state codes ⇄ full names.
//!
//! Location filters accept either form ("nsw" or "new south wales"), and
//! office records store whichever form the upstream data happened to use.
//! Keeping the table in one place with a bidirectional lookup means every
//! call site agrees on what counts as the same state.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Australian states and territories: (code, full name), both lowercase.
pub const REGIONS: [(&str, &str); 8] = [
    ("nsw", "new south wales"),
    ("vic", "victoria"),
    ("qld", "queensland"),
    ("sa", "south australia"),
    ("wa", "western australia"),
    ("tas", "tasmania"),
    ("nt", "northern territory"),
    ("act", "australian capital territory"),
];

/// Bidirectional alias lookup: code → name and name → code.
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(REGIONS.len() * 2);
    for (code, name) in REGIONS {
        map.insert(code, name);
        map.insert(name, code);
    }
    map
});

/// The other spelling of a region, if the term is a known code or name.
///
/// `alias("nsw")` → `Some("new south wales")`, `alias("victoria")` →
/// `Some("vic")`, anything unrecognized → `None`. Case-insensitive,
/// whitespace-trimmed.
pub fn alias(term: &str) -> Option<&'static str> {
    ALIASES.get(term.trim().to_lowercase().as_str()).copied()
}

/// Do two region terms name the same state?
///
/// True when the terms are equal (case-insensitive) or when one is the
/// alias of the other. Unknown terms only match themselves.
pub fn same_region(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }
    alias(&a) == Some(b.as_str()) || alias(&b) == Some(a.as_str())
}

/// Does a free-text location mention the requested region?
///
/// Fallback for records without structured offices: substring match of the
/// term or its alias against the lowercased location string. "Sydney, NSW"
/// matches both "nsw" and "new south wales".
pub fn location_mentions(location: &str, term: &str) -> bool {
    let location = location.to_lowercase();
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return false;
    }
    if location.contains(&term) {
        return true;
    }
    alias(&term).is_some_and(|other| location.contains(other))
}
