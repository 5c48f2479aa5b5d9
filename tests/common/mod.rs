//! Shared test utilities and fixtures.

#![allow(dead_code)]

use findex::{Company, Office};

// Re-export canonical test utilities from findex::testing
pub use findex::testing::{make_company, make_company_full, make_office};

/// A small but realistic directory snapshot: varied states, services,
/// industries, ratings, and ABN coverage.
pub fn fixture_directory() -> Vec<Company> {
    vec![
        company(
            "COMP_00001",
            "Acme Cloud Consulting",
            &["Cloud Migration", "Consulting", "Managed Services"],
            Some("Technology"),
            Some("51824753556"),
            Some(("NSW", "Sydney")),
            None,
            Some("11-50"),
            Some(4.5),
        ),
        company(
            "COMP_00002",
            "Brindle Web Studio",
            &["Web Development", "Design"],
            Some("Creative"),
            Some("10000000001"),
            Some(("VIC", "Melbourne")),
            None,
            Some("1-10"),
            Some(3.8),
        ),
        company(
            "COMP_00003",
            "Corella Data Services",
            &["Data Engineering", "Cloud Migration"],
            Some("Technology"),
            None,
            None,
            Some("Brisbane, QLD"),
            Some("51-200"),
            Some(4.9),
        ),
        company(
            "COMP_00004",
            "Dunnart Security",
            &["Penetration Testing", "Consulting"],
            Some("Cyber Security"),
            Some("83914571000"),
            Some(("WA", "Perth")),
            None,
            Some("11-50"),
            None,
        ),
        company(
            "COMP_00005",
            "Everlea Accounting Group",
            &["Bookkeeping", "Tax Advisory"],
            Some("Finance"),
            None,
            Some(("NSW", "Newcastle")),
            None,
            Some("1-10"),
            Some(4.1),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn company(
    id: &str,
    name: &str,
    services: &[&str],
    industry: Option<&str>,
    abn: Option<&str>,
    office: Option<(&str, &str)>,
    location: Option<&str>,
    team_size: Option<&str>,
    rating: Option<f64>,
) -> Company {
    let mut company = make_company_full(id, name, services, industry, abn);
    company.offices = office
        .map(|(state, city)| {
            vec![Office {
                state: state.to_string(),
                city: city.to_string(),
                address: format!("1 Example St, {city}"),
                is_headquarter: true,
            }]
        })
        .unwrap_or_default();
    company.location = location.map(str::to_string);
    company.team_size = team_size.map(str::to_string);
    company.rating = rating;
    company
}
