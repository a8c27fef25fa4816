// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked search over a built index.

use super::utils::ParsedQuery;
use crate::scoring::ranking::rank;
use crate::scoring::{score_document, DocumentScore};
use crate::types::{SearchIndex, SearchResult};
use crate::util::char_len;

/// Search the index and return at most `limit` results, best first.
///
/// Queries shorter than the configured minimum (after trimming) return nothing
/// without looking at a single document. That is the common case while someone
/// is still typing the first letter, so it has to be cheap.
pub fn search(index: &SearchIndex, query: &str, limit: usize) -> Vec<SearchResult> {
    let config = index.config();
    let trimmed = query.trim();
    if limit == 0 || char_len(trimmed) < config.min_query_len {
        return Vec::new();
    }

    let parsed = ParsedQuery::new(trimmed);
    if parsed.is_empty() {
        return Vec::new();
    }

    let mut scores: Vec<DocumentScore> = index
        .entries()
        .iter()
        .filter_map(|entry| score_document(entry, &parsed, config))
        .collect();
    rank(&mut scores, limit);

    scores
        .into_iter()
        .map(|scored| to_result(index, scored))
        .collect()
}

/// Search with the index's configured limit.
pub fn search_default(index: &SearchIndex, query: &str) -> Vec<SearchResult> {
    search(index, query, index.config().limit)
}

fn to_result(index: &SearchIndex, scored: DocumentScore) -> SearchResult {
    let doc = &index.docs()[scored.position];
    SearchResult {
        id: doc.id.clone(),
        title: doc.title.clone(),
        description: doc.description.clone(),
        slug: doc.slug.clone(),
        tags: doc.tags.clone(),
        language: doc.language.clone(),
        matched: scored.matched_names(),
        score: scored.score,
        fields: scored.fields.iter().map(|(field, _)| *field).collect(),
        route_prefix: index.config().route_prefix.clone(),
    }
}
