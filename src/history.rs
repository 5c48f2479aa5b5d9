// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Search history: a small, capped, most-recent-first log of executed
//! queries, persisted through an opaque string key-value store.
//!
//! The store seam mirrors the browser localStorage API the directory
//! frontend used: get/set/remove on string keys. Anything that can hold a
//! JSON blob works; [`MemoryStore`] for tests and embedding,
//! [`FileStore`] for a local CLI.
//!
//! Recording is best-effort at the search entry point: a failing store
//! never fails a search. The explicit recorder API returns errors for
//! callers that care.

use crate::types::{HistoryEntry, SearchParams};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Storage key for the history blob.
pub const HISTORY_KEY: &str = "search_history";

/// Maximum number of retained entries; oldest are dropped beyond this.
pub const HISTORY_CAPACITY: usize = 10;

// =============================================================================
// ERRORS
// =============================================================================

/// Failure writing or reading the history store.
#[derive(Debug)]
pub enum HistoryError {
    /// Underlying store I/O failed.
    Store(io::Error),
    /// History payload could not be serialized.
    Serialize(serde_json::Error),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Store(e) => write!(f, "history store error: {e}"),
            HistoryError::Serialize(e) => write!(f, "history serialization error: {e}"),
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Store(e) => Some(e),
            HistoryError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for HistoryError {
    fn from(e: io::Error) -> Self {
        HistoryError::Store(e)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::Serialize(e)
    }
}

// =============================================================================
// STORES
// =============================================================================

/// Opaque string key-value persistence, the localStorage shape.
pub trait HistoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), HistoryError>;
    fn remove(&mut self, key: &str) -> Result<(), HistoryError>;
}

/// In-memory store. The default; history lives as long as the recorder.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HistoryError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), HistoryError> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed store: each key is a JSON file under one directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl HistoryStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HistoryError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), HistoryError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// RECORDER
// =============================================================================

/// Append-only-in-spirit search log: newest first, deduplicated by
/// normalized params, capped at [`HISTORY_CAPACITY`].
pub struct HistoryRecorder {
    store: Box<dyn HistoryStore>,
    capacity: usize,
}

impl Default for HistoryRecorder {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }
}

impl HistoryRecorder {
    pub fn new(store: Box<dyn HistoryStore>) -> Self {
        HistoryRecorder {
            store,
            capacity: HISTORY_CAPACITY,
        }
    }

    pub fn with_capacity(store: Box<dyn HistoryStore>, capacity: usize) -> Self {
        HistoryRecorder { store, capacity }
    }

    /// Prepend a timestamped copy of `params`.
    ///
    /// A previous entry with the same normalized params is removed first,
    /// so re-running a search moves it to the front instead of duplicating
    /// it. The list is then truncated to capacity and persisted.
    pub fn record(&mut self, params: &SearchParams) -> Result<(), HistoryError> {
        let mut entries = self.entries();
        let key = params.cache_key();
        entries.retain(|entry| entry.params.cache_key() != key);

        entries.insert(
            0,
            HistoryEntry {
                params: params.clone(),
                timestamp: unix_now(),
            },
        );
        entries.truncate(self.capacity);

        let payload = serde_json::to_string(&entries)?;
        self.store.set(HISTORY_KEY, &payload)
    }

    /// Stored entries, most recent first.
    ///
    /// A missing, unreadable, or corrupt payload degrades to an empty
    /// list — history is never load-bearing.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.store
            .get(HISTORY_KEY)
            .ok()
            .flatten()
            .and_then(|payload| serde_json::from_str(&payload).ok())
            .unwrap_or_default()
    }

    /// Drop all recorded history.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.store.remove(HISTORY_KEY)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
