//! Core query semantics: token union, pass-through, determinism.

use crate::common::fixture_directory;
use findex::{search_companies, SearchParams};

#[test]
fn empty_params_return_full_snapshot_in_input_order() {
    let companies = fixture_directory();
    let results = search_companies(&companies, &SearchParams::default());

    assert_eq!(results.len(), companies.len());
    let ids: Vec<&str> = results.iter().map(|c| c.id.as_str()).collect();
    let expected: Vec<&str> = companies.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn query_unions_tokens_across_name_and_services() {
    let companies = fixture_directory();
    let params = SearchParams {
        query: Some("cloud".to_string()),
        ..Default::default()
    };
    let ids: Vec<String> = search_companies(&companies, &params)
        .into_iter()
        .map(|c| c.id)
        .collect();

    // Acme has "cloud" in its name and services; Corella only in services.
    assert_eq!(ids, vec!["COMP_00001", "COMP_00003"]);
}

#[test]
fn multi_token_query_is_or_across_tokens() {
    let companies = fixture_directory();
    let params = SearchParams {
        query: Some("bookkeeping penetration".to_string()),
        ..Default::default()
    };
    let ids: Vec<String> = search_companies(&companies, &params)
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec!["COMP_00004", "COMP_00005"]);
}

#[test]
fn query_token_matches_abn_exactly() {
    let companies = fixture_directory();
    let params = SearchParams {
        query: Some("51824753556".to_string()),
        ..Default::default()
    };
    let results = search_companies(&companies, &params);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "COMP_00001");
}

#[test]
fn unmatched_query_returns_empty_not_error() {
    let companies = fixture_directory();
    let params = SearchParams {
        query: Some("zzzzzz".to_string()),
        ..Default::default()
    };
    assert!(search_companies(&companies, &params).is_empty());
}

#[test]
fn repeated_calls_return_identical_ordering() {
    let companies = fixture_directory();
    let params = SearchParams {
        query: Some("consulting".to_string()),
        ..Default::default()
    };
    let first = search_companies(&companies, &params);
    let second = search_companies(&companies, &params);
    assert_eq!(first, second);
}
