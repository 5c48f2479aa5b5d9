//! Result cache behavior through the Searcher.

use crate::common::fixture_directory;
use findex::{Searcher, SearchParams};

#[test]
fn second_identical_search_hits_the_cache() {
    let mut searcher = Searcher::new(fixture_directory());
    let params = SearchParams {
        query: Some("consulting".to_string()),
        ..Default::default()
    };

    let first = searcher.search(&params);
    assert_eq!(searcher.cache_hits(), 0);

    let second = searcher.search(&params);
    assert_eq!(first, second);
    assert_eq!(searcher.cache_hits(), 1);
}

#[test]
fn semantically_identical_params_share_an_entry() {
    let mut searcher = Searcher::new(fixture_directory());

    let a = SearchParams {
        query: Some("  Consulting ".to_string()),
        services: vec!["Cloud Migration".to_string(), "Design".to_string()],
        ..Default::default()
    };
    let b = SearchParams {
        query: Some("consulting".to_string()),
        services: vec!["design".to_string(), "cloud migration".to_string()],
        ..Default::default()
    };

    let first = searcher.search(&a);
    let second = searcher.search(&b);
    assert_eq!(first, second);
    assert_eq!(searcher.cache_hits(), 1, "b should be served from a's entry");
}

#[test]
fn different_filters_get_different_entries() {
    let mut searcher = Searcher::new(fixture_directory());

    let by_query = SearchParams {
        query: Some("technology".to_string()),
        ..Default::default()
    };
    let by_industry = SearchParams {
        industry: Some("technology".to_string()),
        ..Default::default()
    };

    searcher.search(&by_query);
    searcher.search(&by_industry);
    assert_eq!(searcher.cache_hits(), 0);
}

#[test]
fn independent_searchers_do_not_share_state() {
    let params = SearchParams {
        query: Some("cloud".to_string()),
        ..Default::default()
    };

    let mut first = Searcher::new(fixture_directory());
    first.search(&params);

    let mut second = Searcher::new(fixture_directory());
    second.search(&params);
    assert_eq!(second.cache_hits(), 0);
    assert_eq!(second.history().len(), 1);
}
