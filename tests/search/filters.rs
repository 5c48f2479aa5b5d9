//! Filter stages: location aliases, services, size, industry, ABN.

use crate::common::fixture_directory;
use findex::{search_companies, SearchParams};

fn ids(params: &SearchParams) -> Vec<String> {
    search_companies(&fixture_directory(), params)
        .into_iter()
        .map(|c| c.id)
        .collect()
}

#[test]
fn location_matches_office_state_code() {
    let params = SearchParams {
        location: Some("nsw".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&params), vec!["COMP_00001", "COMP_00005"]);
}

#[test]
fn location_code_and_full_name_are_equivalent() {
    let by_code = SearchParams {
        location: Some("nsw".to_string()),
        ..Default::default()
    };
    let by_name = SearchParams {
        location: Some("new south wales".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&by_code), ids(&by_name));
}

#[test]
fn location_accepts_multiple_codes() {
    let params = SearchParams {
        location: Some("nsw, vic".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&params), vec!["COMP_00001", "COMP_00002", "COMP_00005"]);
}

#[test]
fn location_falls_back_to_flat_string() {
    // Corella has no offices, only "Brisbane, QLD"
    let params = SearchParams {
        location: Some("queensland".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&params), vec!["COMP_00003"]);
}

#[test]
fn unknown_region_code_matches_nothing() {
    let params = SearchParams {
        location: Some("atlantis".to_string()),
        ..Default::default()
    };
    assert!(ids(&params).is_empty());
}

#[test]
fn service_filter_is_fuzzy() {
    let exact = SearchParams {
        services: vec!["Cloud Migration".to_string()],
        ..Default::default()
    };
    assert_eq!(ids(&exact), vec!["COMP_00001", "COMP_00003"]);

    let typo = SearchParams {
        services: vec!["Cloud Migrtion".to_string()],
        ..Default::default()
    };
    assert_eq!(ids(&typo), vec!["COMP_00001", "COMP_00003"]);
}

#[test]
fn any_requested_service_suffices() {
    let params = SearchParams {
        services: vec!["Bookkeeping".to_string(), "Design".to_string()],
        ..Default::default()
    };
    assert_eq!(ids(&params), vec!["COMP_00002", "COMP_00005"]);
}

#[test]
fn size_filter_is_exact_categorical() {
    let params = SearchParams {
        size: vec!["1-10".to_string()],
        ..Default::default()
    };
    assert_eq!(ids(&params), vec!["COMP_00002", "COMP_00005"]);

    // A near-miss category is not a match
    let near = SearchParams {
        size: vec!["1-11".to_string()],
        ..Default::default()
    };
    assert!(ids(&near).is_empty());
}

#[test]
fn industry_filter_is_fuzzy() {
    let params = SearchParams {
        industry: Some("Tecnology".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&params), vec!["COMP_00001", "COMP_00003"]);
}

#[test]
fn abn_filter_exact_partial_and_miss() {
    let exact = SearchParams {
        abn: Some("51824753556".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&exact), vec!["COMP_00001"]);

    // One digit short: substring containment still matches
    let partial = SearchParams {
        abn: Some("5182475355".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&partial), vec!["COMP_00001"]);

    let miss = SearchParams {
        abn: Some("99999999999".to_string()),
        ..Default::default()
    };
    assert!(ids(&miss).is_empty());
}

#[test]
fn malformed_abn_matches_nothing() {
    let params = SearchParams {
        abn: Some("not-a-number".to_string()),
        ..Default::default()
    };
    assert!(ids(&params).is_empty());
}

#[test]
fn filters_compose_conjunctively() {
    let params = SearchParams {
        location: Some("nsw".to_string()),
        services: vec!["Consulting".to_string()],
        industry: Some("Technology".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&params), vec!["COMP_00001"]);
}

#[test]
fn whitespace_only_filters_are_pass_through() {
    let params = SearchParams {
        query: Some("  ".to_string()),
        location: Some("".to_string()),
        industry: Some("   ".to_string()),
        abn: Some(" ".to_string()),
        services: vec![String::new()],
        size: vec!["  ".to_string()],
        ..Default::default()
    };
    assert_eq!(ids(&params).len(), fixture_directory().len());
}
