//! Shared test utilities and fixtures.

#![allow(dead_code)]

use blogsift::testing::RecordingHost;
use blogsift::{build_index, SearchDocument, SearchIndex, SearchSession};

// Re-export canonical test utilities from blogsift::testing
pub use blogsift::testing::{make_doc, make_tagged_doc, HostCall};

fn post(
    id: &str,
    title: &str,
    description: &str,
    content: &str,
    tags: &[&str],
    language: Option<&str>,
) -> SearchDocument {
    SearchDocument {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        language: language.map(str::to_string),
        slug: id.to_string(),
    }
}

/// Five posts, slug = id. Payload order is the order listed here.
pub fn blog_posts() -> Vec<SearchDocument> {
    vec![
        post(
            "rust-ownership",
            "Understanding Rust Ownership",
            "Borrowing, moves and lifetimes explained",
            "Ownership is the feature that sets Rust apart. Every value has a single owner, \
             and memory is freed when the owner leaves scope.",
            &["rust", "memory"],
            Some("Rust"),
        ),
        post(
            "cmake-modern-targets",
            "CMake Modern Targets",
            "Stop reaching for include_directories",
            "Modern CMake is built around targets and their usage requirements. \
             Link a library and its headers follow.",
            &["cpp", "cmake"],
            Some("C++"),
        ),
        post(
            "cpp-modules",
            "C++ Modules in Practice",
            "What C++20 modules change for build times",
            "Header files have served c++ for decades. Modules replace textual inclusion \
             with compiled interfaces.",
            &["cpp"],
            Some("C++"),
        ),
        post(
            "go-channels",
            "Go Channels",
            "Concurrency patterns with channels and select",
            "Do not communicate by sharing memory; share memory by communicating.",
            &["go", "concurrency"],
            Some("Go"),
        ),
        post(
            "static-blog",
            "Building a Static Blog",
            "Markdown, templates and a search box",
            "Every page here is rendered at build time. Search runs entirely in your browser, \
             with no server round trip.",
            &["web"],
            None,
        ),
    ]
}

/// The fixture corpus as a JSON payload, the way the site ships it.
pub fn blog_payload() -> String {
    serde_json::to_string(&blog_posts()).unwrap()
}

pub fn blog_index() -> SearchIndex {
    build_index(blog_posts())
}

/// Ids of results, in rank order.
pub fn ids(results: &[blogsift::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

/// A session over the fixture corpus plus a handle on its call log.
pub fn blog_session() -> (SearchSession<RecordingHost>, RecordingHost) {
    let host = RecordingHost::new();
    (SearchSession::new(blog_index(), host.clone()), host)
}

/// Assert scores never increase down the list.
pub fn assert_ranked(results: &[blogsift::SearchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "{} ({}) ranked above {} ({})",
            pair[0].id,
            pair[0].score,
            pair[1].id,
            pair[1].score
        );
    }
}
