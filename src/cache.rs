// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Result cache: normalized params → ordered hits.
//!
//! Repeated searches with the same filters are common (every keystroke in
//! the directory UI re-runs the current query), so results are memoized
//! under the stable [`SearchParams::cache_key`](crate::SearchParams::cache_key)
//! form. Entries are immutable once written, expire after five minutes,
//! and the map is capped at 100 entries with oldest-first eviction.
//!
//! Single-threaded by design: the cache is owned by a `Searcher`, not
//! shared global state.

use crate::types::SearchHit;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default maximum number of cached queries.
pub const CACHE_CAPACITY: usize = 100;

/// Default time-to-live for a cache entry.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    hits: Vec<SearchHit>,
    inserted_at: Instant,
}

/// Bounded, expiring memo of search results keyed by normalized params.
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    capacity: usize,
    ttl: Duration,
    hit_count: u64,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::with_config(CACHE_CAPACITY, CACHE_TTL)
    }
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache with explicit bounds, for tests and embedders with different
    /// memory budgets.
    pub fn with_config(capacity: usize, ttl: Duration) -> Self {
        ResultCache {
            entries: HashMap::new(),
            capacity,
            ttl,
            hit_count: 0,
        }
    }

    /// Look up a previously computed result. Expired entries are dropped,
    /// never returned.
    pub fn get(&mut self, key: &str) -> Option<&[SearchHit]> {
        self.cleanup();
        match self.entries.get(key) {
            Some(entry) => {
                self.hit_count += 1;
                Some(&entry.hits)
            }
            None => None,
        }
    }

    /// Store a computed result. Entries are immutable: re-inserting under
    /// the same key replaces the entry wholesale.
    pub fn insert(&mut self, key: String, hits: Vec<SearchHit>) {
        self.cleanup();
        self.entries.insert(
            key,
            CacheEntry {
                hits,
                inserted_at: Instant::now(),
            },
        );
        self.evict_overflow();
    }

    /// Drop expired entries.
    fn cleanup(&mut self) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| entry.inserted_at.elapsed() <= ttl);
    }

    /// If still over capacity after cleanup, drop the oldest entries.
    fn evict_overflow(&mut self) {
        while self.entries.len() > self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => self.entries.remove(&key),
                None => break,
            };
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many lookups were served from the cache. Lets callers verify
    /// the memoization actually happened.
    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }
}
