//! Inverted index construction over a company snapshot.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BUCKET_ORDER**: Every token bucket lists snapshot positions in
//!    ascending order (the input order of the record list). Relevance
//!    ties are broken by this order, so it must be stable.
//! 2. **POSITION_WELLFORMED**: Every position is a valid index into the
//!    snapshot the index was built from.
//! 3. **PURE**: The index is a pure function of the snapshot. Same
//!    records in, equivalent buckets out.
//!
//! The index is an explicit value tied to one snapshot. It is built by
//! the caller (or the `Searcher` constructor), never lazily initialized
//! behind the scenes, so there is no way for it to go stale silently.

use crate::types::Company;
use crate::utils::tokenize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// Token → snapshot positions, one map per indexed field, plus the exact
/// ABN lookup.
#[derive(Debug, Clone, Default)]
pub struct CompanyIndex {
    name: HashMap<String, Vec<usize>>,
    location: HashMap<String, Vec<usize>>,
    services: HashMap<String, Vec<usize>>,
    industry: HashMap<String, Vec<usize>>,
    abn: HashMap<String, usize>,
    num_companies: usize,
}

/// Size summary for `findex inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub companies: usize,
    pub name_tokens: usize,
    pub location_tokens: usize,
    pub service_tokens: usize,
    pub industry_tokens: usize,
    pub abn_entries: usize,
}

/// Append `position` to the bucket for each token, once per token.
///
/// A repeated token within one field ("Acme Acme Pty") must not list the
/// record twice in the same bucket.
fn index_field(map: &mut HashMap<String, Vec<usize>>, text: &str, position: usize) {
    for token in tokenize(text) {
        let bucket = map.entry(token).or_default();
        if bucket.last() != Some(&position) {
            bucket.push(position);
        }
    }
}

impl CompanyIndex {
    /// Build an index over the snapshot.
    ///
    /// Tokenizes name, location, each service, and industry; records the
    /// ABN under its exact, untokenized key. Missing optional fields
    /// simply contribute no entries — there is no failure mode.
    pub fn build(companies: &[Company]) -> Self {
        let mut index = CompanyIndex {
            num_companies: companies.len(),
            ..Default::default()
        };

        for (position, company) in companies.iter().enumerate() {
            index.add(company, position);
        }

        index
    }

    /// Parallel map-reduce build for large snapshots.
    ///
    /// Tokenizes per record in parallel, then merges per-record maps in
    /// snapshot order so BUCKET_ORDER still holds. Produces an index
    /// equivalent to [`CompanyIndex::build`].
    #[cfg(feature = "parallel")]
    pub fn build_parallel(companies: &[Company]) -> Self {
        // MAP PHASE: tokenize each record independently
        let per_company: Vec<CompanyIndex> = companies
            .par_iter()
            .enumerate()
            .map(|(position, company)| {
                let mut partial = CompanyIndex::default();
                partial.add(company, position);
                partial
            })
            .collect();

        // REDUCE PHASE: merge in snapshot order to keep buckets sorted
        let mut index = CompanyIndex {
            num_companies: companies.len(),
            ..Default::default()
        };
        for partial in per_company {
            for (field, partial_map) in [
                (&mut index.name, partial.name),
                (&mut index.location, partial.location),
                (&mut index.services, partial.services),
                (&mut index.industry, partial.industry),
            ] {
                for (token, positions) in partial_map {
                    field.entry(token).or_default().extend(positions);
                }
            }
            for (abn, position) in partial.abn {
                index.abn.entry(abn).or_insert(position);
            }
        }

        index
    }

    fn add(&mut self, company: &Company, position: usize) {
        index_field(&mut self.name, &company.name, position);
        if let Some(location) = &company.location {
            index_field(&mut self.location, location, position);
        }
        for service in &company.services {
            index_field(&mut self.services, service, position);
        }
        if let Some(industry) = &company.industry {
            index_field(&mut self.industry, industry, position);
        }
        if let Some(abn) = &company.abn {
            let abn = abn.trim();
            if !abn.is_empty() {
                self.abn.entry(abn.to_string()).or_insert(position);
            }
        }
    }

    /// Positions whose name field contains this token.
    pub fn name_bucket(&self, token: &str) -> &[usize] {
        self.name.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions whose service list contains this token.
    pub fn service_bucket(&self, token: &str) -> &[usize] {
        self.services.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exact ABN lookup.
    pub fn abn_entry(&self, abn: &str) -> Option<usize> {
        self.abn.get(abn).copied()
    }

    /// All distinct name tokens (arbitrary order; sort before display).
    pub fn name_tokens(&self) -> impl Iterator<Item = &str> {
        self.name.keys().map(String::as_str)
    }

    /// All distinct service tokens.
    pub fn service_tokens(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// All distinct industry tokens.
    pub fn industry_tokens(&self) -> impl Iterator<Item = &str> {
        self.industry.keys().map(String::as_str)
    }

    /// Number of records the index was built over.
    pub fn num_companies(&self) -> usize {
        self.num_companies
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            companies: self.num_companies,
            name_tokens: self.name.len(),
            location_tokens: self.location.len(),
            service_tokens: self.services.len(),
            industry_tokens: self.industry.len(),
            abn_entries: self.abn.len(),
        }
    }

    /// Check index invariants (debug assertion).
    #[cfg(any(debug_assertions, test))]
    #[allow(dead_code)]
    pub fn check_well_formed(&self) -> bool {
        let maps = [&self.name, &self.location, &self.services, &self.industry];
        for map in maps {
            for bucket in map.values() {
                // BUCKET_ORDER: strictly ascending positions
                if bucket.windows(2).any(|w| w[0] >= w[1]) {
                    return false;
                }
                // POSITION_WELLFORMED
                if bucket.iter().any(|&p| p >= self.num_companies) {
                    return false;
                }
            }
        }
        self.abn.values().all(|&p| p < self.num_companies)
    }
}
