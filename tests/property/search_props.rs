//! Query engine invariants over random corpora.

use blogsift::util::char_len;
use blogsift::{build_index, search, SearchDocument};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9+#]{1,8}").unwrap()
}

fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..max_words).prop_map(|words| words.join(" "))
}

fn doc_strategy() -> impl Strategy<Value = (String, String, String, Vec<String>)> {
    (
        text_strategy(5),
        text_strategy(8),
        text_strategy(20),
        prop::collection::vec(word_strategy(), 0..4),
    )
}

/// Corpus with unique ids and slugs, so nothing gets skipped.
fn corpus_strategy() -> impl Strategy<Value = Vec<SearchDocument>> {
    prop::collection::vec(doc_strategy(), 0..12).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (title, description, content, tags))| SearchDocument {
                id: format!("doc-{i}"),
                title,
                description,
                content,
                tags,
                language: None,
                slug: format!("post-{i}"),
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        text_strategy(3),
        prop::string::string_regex("[ a-z.*+?()\\[\\]^$|]{0,10}").unwrap(),
    ]
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_short_queries_return_nothing(
        docs in corpus_strategy(),
        query in prop::string::string_regex("\\s{0,3}[a-z+]?\\s{0,3}").unwrap(),
    ) {
        let index = build_index(docs);
        prop_assume!(char_len(query.trim()) < 2);
        prop_assert!(search(&index, &query, 10).is_empty());
    }

    #[test]
    fn prop_scores_positive_and_non_increasing(docs in corpus_strategy(), query in query_strategy()) {
        let index = build_index(docs);
        let results = search(&index, &query, 50);
        for result in &results {
            prop_assert!(result.score > 0.0);
            prop_assert!(!result.matched.is_empty());
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prop_limit_respected(docs in corpus_strategy(), query in query_strategy(), limit in 0usize..8) {
        let index = build_index(docs);
        prop_assert!(search(&index, &query, limit).len() <= limit);
    }

    #[test]
    fn prop_limit_is_a_prefix_of_the_full_ranking(docs in corpus_strategy(), query in query_strategy()) {
        let index = build_index(docs);
        let full = search(&index, &query, 100);
        let top = search(&index, &query, 3);
        prop_assert_eq!(&full[..top.len()], &top[..]);
    }

    #[test]
    fn prop_no_duplicate_results(docs in corpus_strategy(), query in query_strategy()) {
        let index = build_index(docs);
        let results = search(&index, &query, 100);
        let mut slugs: Vec<&str> = results.iter().map(|r| r.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        prop_assert_eq!(slugs.len(), results.len());
    }

    #[test]
    fn prop_build_and_search_idempotent(docs in corpus_strategy(), query in query_strategy()) {
        let first = build_index(docs.clone());
        let second = build_index(docs);
        prop_assert_eq!(search(&first, &query, 10), search(&second, &query, 10));
    }

    #[test]
    fn prop_every_accepted_document_indexed_once(docs in corpus_strategy()) {
        let count = docs.len();
        let index = build_index(docs);
        prop_assert_eq!(index.len(), count);
        prop_assert!(index.skipped().is_empty());
        for (i, entry) in index.entries().iter().enumerate() {
            prop_assert_eq!(entry.position, i);
        }
    }

    #[test]
    fn prop_exact_title_word_is_found(docs in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let index = build_index(docs);
        let candidates: Vec<(usize, String)> = index
            .docs()
            .iter()
            .enumerate()
            .flat_map(|(i, doc)| {
                blogsift::util::tokenize(&doc.title)
                    .into_iter()
                    .filter(|t| char_len(t) >= 2)
                    .map(move |t| (i, t))
            })
            .collect();
        prop_assume!(!candidates.is_empty());
        let (position, word) = &candidates[pick.index(candidates.len())];
        let results = search(&index, word, 100);
        let id = &index.docs()[*position].id;
        prop_assert!(results.iter().any(|r| &r.id == id));
    }
}
