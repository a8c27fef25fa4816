//! Queries at the edges: too short, empty, no hits, odd characters.

use super::common::{blog_index, ids, make_doc};
use blogsift::{build_index, build_index_with_config, search, search_default, SearchConfig};

#[test]
fn test_below_minimum_length_is_empty() {
    let index = blog_index();
    for query in ["", " ", "g", "  c  ", "\t\n"] {
        assert!(search_default(&index, query).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_minimum_length_counts_characters_not_bytes() {
    let index = build_index(vec![make_doc("1", "東京 Travel Notes")]);
    // One character, three bytes.
    assert!(search_default(&index, "東").is_empty());
    assert_eq!(ids(&search_default(&index, "東京")), vec!["1"]);
}

#[test]
fn test_configurable_minimum() {
    let config = SearchConfig {
        min_query_len: 1,
        ..SearchConfig::default()
    };
    let index = build_index_with_config(vec![make_doc("1", "Go Channels")], config);
    assert_eq!(ids(&search_default(&index, "g")), vec!["1"]);
}

#[test]
fn test_no_match_is_empty_not_error() {
    assert!(search_default(&blog_index(), "kubernetes").is_empty());
    assert!(search_default(&blog_index(), "!!").is_empty());
}

#[test]
fn test_empty_index() {
    let index = build_index(vec![]);
    assert!(index.is_empty());
    assert!(search_default(&index, "rust").is_empty());
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let index = blog_index();
    assert_eq!(
        ids(&search_default(&index, "  channels  ")),
        ids(&search_default(&index, "channels"))
    );
}

#[test]
fn test_case_and_diacritics_folded() {
    let index = build_index(vec![make_doc("1", "Café Culture in Lisbon")]);
    assert_eq!(ids(&search_default(&index, "CAFE")), vec!["1"]);
    assert_eq!(ids(&search_default(&index, "café")), vec!["1"]);
}

#[test]
fn test_empty_fields_never_match() {
    let index = build_index(vec![make_doc("1", "Only A Title")]);
    let results = search(&index, "title", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched, "title");
}
