//! Loading the document payload: partial failures, whole-payload failures, files.

use super::common::{blog_payload, ids};
use blogsift::{
    build_index_from_json, parse_documents, search_default, InvalidDocumentError, PayloadError,
    SearchConfig,
};
use std::io::Write;

#[test]
fn test_bad_records_are_skipped_with_reasons() {
    let json = r#"[
        {"id": "a", "title": "Alpha Post", "slug": "alpha"},
        {"id": null, "title": "No Id", "slug": "no-id"},
        {"id": "c", "title": "No Slug"},
        {"id": "a", "title": "Same Id", "slug": "other"},
        {"id": "e", "title": "Same Slug", "slug": "alpha"},
        {"id": "f", "title": "Bad Tags", "slug": "f", "tags": "not-a-list"},
        "not even an object",
        {"id": "h", "title": "Another Post", "slug": "another"}
    ]"#;
    let index = build_index_from_json(json, SearchConfig::default()).unwrap();

    assert_eq!(index.docs().iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), vec!["a", "h"]);
    let skipped = index.skipped();
    assert_eq!(
        skipped.iter().map(InvalidDocumentError::position).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
    assert!(matches!(skipped[0], InvalidDocumentError::MissingId { .. }));
    assert!(matches!(skipped[1], InvalidDocumentError::MissingSlug { .. }));
    assert!(matches!(skipped[2], InvalidDocumentError::DuplicateId { .. }));
    assert!(matches!(skipped[3], InvalidDocumentError::DuplicateSlug { .. }));
    assert!(matches!(skipped[4], InvalidDocumentError::Malformed { .. }));
    assert!(matches!(skipped[5], InvalidDocumentError::Malformed { .. }));

    assert_eq!(ids(&search_default(&index, "post")), vec!["a", "h"]);
}

#[test]
fn test_whitespace_only_identifiers_are_missing() {
    let json = r#"[{"id": "   ", "slug": "x"}, {"id": "y", "slug": " "}]"#;
    let index = build_index_from_json(json, SearchConfig::default()).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.skipped().len(), 2);
}

#[test]
fn test_payload_must_be_an_array() {
    assert!(matches!(
        build_index_from_json(r#"{"docs": []}"#, SearchConfig::default()),
        Err(PayloadError::NotAnArray)
    ));
    assert!(matches!(parse_documents("[{"), Err(PayloadError::Json(_))));
}

#[test]
fn test_missing_optional_fields_default() {
    let parsed = parse_documents(r#"[{"id": "1", "slug": "one"}]"#).unwrap();
    let docs = parsed.into_documents();
    assert_eq!(docs[0].title, "");
    assert!(docs[0].tags.is_empty());
    assert_eq!(docs[0].language, None);
}

#[test]
fn test_payload_and_config_from_files() {
    let mut payload = tempfile::NamedTempFile::new().unwrap();
    payload.write_all(blog_payload().as_bytes()).unwrap();
    let mut config = tempfile::NamedTempFile::new().unwrap();
    config
        .write_all(br#"{"routePrefix": "/posts", "limit": 1, "boosts": {"tags": 4}}"#)
        .unwrap();

    let config = SearchConfig::from_json(&std::fs::read_to_string(config.path()).unwrap()).unwrap();
    assert_eq!(config.boosts.tags, 4.0);
    assert_eq!(config.boosts.title, 10.0);

    let json = std::fs::read_to_string(payload.path()).unwrap();
    let index = build_index_from_json(&json, config).unwrap();
    assert_eq!(index.len(), 5);

    let results = search_default(&index, "cpp");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 4.0);
    assert_eq!(results[0].href(), "/posts/cmake-modern-targets");
}
