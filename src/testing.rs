//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Company, Office};

/// Create a minimal test company: id, name, nothing else.
pub fn make_company(id: &str, name: &str) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
        location: None,
        offices: Vec::new(),
        industry: None,
        services: Vec::new(),
        abn: None,
        team_size: None,
        rating: None,
    }
}

/// Create a test company with services, industry, and ABN.
pub fn make_company_full(
    id: &str,
    name: &str,
    services: &[&str],
    industry: Option<&str>,
    abn: Option<&str>,
) -> Company {
    Company {
        services: services.iter().map(|s| (*s).to_string()).collect(),
        industry: industry.map(str::to_string),
        abn: abn.map(str::to_string),
        ..make_company(id, name)
    }
}

/// Create a test office in the given state.
pub fn make_office(state: &str, city: &str) -> Office {
    Office {
        state: state.to_string(),
        city: city.to_string(),
        address: format!("1 Example St, {city}"),
        is_headquarter: false,
    }
}
