//! Same input, same output: builds and queries are deterministic.

use super::common::{blog_index, blog_payload, blog_posts};
use blogsift::{build_index, build_index_from_json, search_default, SearchConfig};

const QUERIES: [&str; 6] = ["rust", "cpp", "build", "memory", "chan", "c++"];

#[test]
fn test_rebuild_gives_identical_results() {
    let first = blog_index();
    let second = build_index(blog_posts());
    for query in QUERIES {
        assert_eq!(
            search_default(&first, query),
            search_default(&second, query),
            "query {:?}",
            query
        );
    }
}

#[test]
fn test_json_and_struct_builds_agree() {
    let from_structs = blog_index();
    let from_json = build_index_from_json(&blog_payload(), SearchConfig::default()).unwrap();
    assert_eq!(from_structs.entries(), from_json.entries());
    for query in QUERIES {
        assert_eq!(search_default(&from_structs, query), search_default(&from_json, query));
    }
}

#[test]
fn test_repeated_queries_are_stable() {
    let index = blog_index();
    let baseline = search_default(&index, "memory");
    for _ in 0..20 {
        assert_eq!(search_default(&index, "memory"), baseline);
    }
}
