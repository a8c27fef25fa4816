// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary strings at search, highlighting and excerpts. Emoji, RTL
//! text, null bytes, half a regex: none of it may panic, and whatever comes back
//! must still be ranked and bounded.

#![no_main]

use blogsift::highlight::{extract_excerpt, highlight, Segment};
use blogsift::{build_index, search, SearchDocument, SearchIndex};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn post(id: &str, title: &str, content: &str, tags: &[&str], language: &str) -> SearchDocument {
    SearchDocument {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Notes on {}", title.to_lowercase()),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        language: Some(language.to_string()),
        slug: id.to_string(),
    }
}

fn index() -> &'static SearchIndex {
    static INDEX: OnceLock<SearchIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        build_index(vec![
            post("ownership", "Rust Ownership", "Moves, borrows and lifetimes.", &["rust"], "Rust"),
            post("cmake", "CMake Modern Targets", "target_link_libraries(app PRIVATE fmt)", &["cpp"], "C++"),
            post("regex", "Regex: (a|b)*c?", "Escape [brackets] and $anchors^.", &["regex"], "Perl"),
            post("tokyo", "東京 Café Guide", "Crème brûlée near Shibuya 🍮", &["travel"], "日本語"),
            post("csharp", "C# Records", "record struct Point(int X, int Y);", &["dotnet"], "C#"),
        ])
    })
}

fuzz_target!(|data: &[u8]| {
    let query = String::from_utf8_lossy(data);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    // INVARIANT 1: search never panics and respects the limit
    let results = search(index(), &query, 3);
    assert!(results.len() <= 3);

    // INVARIANT 2: ranked, positive
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for result in &results {
        assert!(result.score > 0.0);
        assert!(result.href().ends_with(&result.slug));
    }

    // INVARIANT 3: highlighting loses no text
    for doc in index().docs() {
        let joined: String = highlight(&doc.title, &query).iter().map(Segment::text).collect();
        assert_eq!(joined, doc.title);

        // INVARIANT 4: excerpts respect char boundaries (slicing would panic otherwise)
        let _ = extract_excerpt(&doc.content, &query, 150);
    }
});
