//! Highlighting and excerpts never lose text and never panic.

use blogsift::highlight::{extract_excerpt, highlight, Segment};
use blogsift::normalize;
use blogsift::util::char_len;
use proptest::prelude::*;

#[cfg(feature = "unicode-normalization")]
use blogsift::{build_index, search_default, testing::make_doc};

/// Put an acute accent on every vowel.
#[cfg(feature = "unicode-normalization")]
fn accent(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'a' => 'á',
            'e' => 'é',
            'i' => 'í',
            'o' => 'ó',
            'u' => 'ú',
            other => other,
        })
        .collect()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .+*?()éü東京]{0,200}").unwrap()
}

proptest! {
    #[test]
    fn prop_segments_rejoin_to_text(text in text_strategy(), query in "[a-zA-Z.+*?()é]{0,4}") {
        let segments = highlight(&text, &query);
        let joined: String = segments.iter().map(Segment::text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn prop_marks_equal_query_once_folded(text in text_strategy(), query in "[a-zé+.]{1,3}") {
        for segment in highlight(&text, &query) {
            if let Segment::Mark(mark) = segment {
                prop_assert_eq!(normalize(mark), normalize(&query));
            }
        }
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn prop_accented_title_hit_is_highlighted(word in "[a-z]{3,8}") {
        let title = format!("Notes on {}", accent(&word));
        let index = build_index(vec![make_doc("1", &title)]);
        prop_assert_eq!(search_default(&index, &word).len(), 1);
        prop_assert!(highlight(&title, &word).iter().any(Segment::is_mark));
    }

    #[test]
    fn prop_excerpt_is_bounded(text in text_strategy(), query in "[a-z東]{0,3}") {
        let excerpt = extract_excerpt(&text, &query, 150);
        // Two ellipses, 50 characters each side, and the match itself.
        prop_assert!(char_len(&excerpt) <= 6 + 100 + char_len(&query).max(150));
    }
}
