//! Sorting and relevance scoring.

use crate::common::fixture_directory;
use findex::{search_companies, Searcher, SearchParams, SortKey, SortOrder};

#[test]
fn name_sort_ascending_and_descending() {
    let companies = fixture_directory();

    let asc = SearchParams {
        sort_by: SortKey::Name,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    let names: Vec<String> = search_companies(&companies, &asc)
        .into_iter()
        .map(|c| c.name)
        .collect();
    let mut expected = names.clone();
    expected.sort();
    assert_eq!(names, expected);

    let desc = SearchParams {
        sort_by: SortKey::Name,
        sort_order: SortOrder::Desc,
        ..Default::default()
    };
    let reversed: Vec<String> = search_companies(&companies, &desc)
        .into_iter()
        .map(|c| c.name)
        .collect();
    expected.reverse();
    assert_eq!(reversed, expected);
}

#[test]
fn rating_sort_treats_missing_as_zero() {
    let companies = fixture_directory();
    let asc = SearchParams {
        sort_by: SortKey::Rating,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    let results = search_companies(&companies, &asc);

    // Dunnart has no rating and must sort first ascending
    assert_eq!(results[0].id, "COMP_00004");
    let ratings: Vec<f64> = results.iter().map(|c| c.rating.unwrap_or(0.0)).collect();
    let mut expected = ratings.clone();
    expected.sort_by(f64::total_cmp);
    assert_eq!(ratings, expected);
}

#[test]
fn rating_sort_descending() {
    let companies = fixture_directory();
    let desc = SearchParams {
        sort_by: SortKey::Rating,
        sort_order: SortOrder::Desc,
        ..Default::default()
    };
    let results = search_companies(&companies, &desc);
    assert_eq!(results[0].id, "COMP_00003"); // 4.9
    assert_eq!(results.last().unwrap().id, "COMP_00004"); // unrated
}

#[test]
fn relevance_preserves_input_order_without_query() {
    let companies = fixture_directory();
    let params = SearchParams {
        sort_by: SortKey::Relevance,
        ..Default::default()
    };
    let ids: Vec<String> = search_companies(&companies, &params)
        .into_iter()
        .map(|c| c.id)
        .collect();
    let expected: Vec<String> = companies.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn relevance_ranks_name_hits_above_service_hits() {
    let companies = fixture_directory();
    let mut searcher = Searcher::new(companies);
    let params = SearchParams {
        query: Some("cloud".to_string()),
        ..Default::default()
    };
    let scored = searcher.search_scored(&params);

    assert_eq!(scored[0].company.id, "COMP_00001"); // name + service hit
    assert_eq!(scored[1].company.id, "COMP_00003"); // service hit only
    assert!(scored[0].score > scored[1].score);
}

#[test]
fn equal_scores_tie_break_by_input_order() {
    let companies = vec![
        findex::testing::make_company("COMP_A", "Acme Widgets"),
        findex::testing::make_company("COMP_B", "Acme Gadgets"),
        findex::testing::make_company("COMP_C", "Other Co"),
    ];
    let params = SearchParams {
        query: Some("acme".to_string()),
        ..Default::default()
    };
    let ids: Vec<String> = search_companies(&companies, &params)
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["COMP_A", "COMP_B"]);
}

#[test]
fn fuzzy_filter_bonus_orders_closer_matches_first() {
    let companies = vec![
        findex::testing::make_company_full("COMP_A", "A", &["Cloud Migration Advisory"], None, None),
        findex::testing::make_company_full("COMP_B", "B", &["Cloud Migration"], None, None),
    ];
    let mut searcher = Searcher::new(companies);
    let params = SearchParams {
        services: vec!["Cloud Migration".to_string()],
        ..Default::default()
    };
    let scored = searcher.search_scored(&params);

    assert_eq!(scored.len(), 2);
    // Exact service match scores 1.0; the longer variant scores lower
    assert_eq!(scored[0].company.id, "COMP_B");
    assert!(scored[0].score > scored[1].score);
}
