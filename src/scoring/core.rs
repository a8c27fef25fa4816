// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field matching and the score sum.
//!
//! # Matching, per field
//!
//! A field matches when either:
//!
//! 1. its normalized text contains the whole normalized query (`Phrase`), which
//!    is what keeps `c++` or `"modern cmake"` working even though the tokenizer
//!    would split them differently, or
//! 2. any query term matches any field token, trying in order:
//!    `Exact` → `Prefix` → `Substring` → `Fuzzy(distance)`.
//!
//! # Score
//!
//! `score(doc) = Σ boost(field)` over matched fields. A field counts once no
//! matter how many terms hit it, and the match kind does not scale the boost.

use crate::config::SearchConfig;
use crate::fuzzy::bounded_distance;
use crate::search::utils::ParsedQuery;
use crate::types::{Field, IndexedDocument, IndexedField};
use crate::util::char_len;

/// How a field matched. Derived `Ord` puts stronger matches first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    Exact,
    Phrase,
    Prefix,
    Substring,
    /// Within this many edits.
    Fuzzy(usize),
}

/// A document that matched at least one field with a positive total.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentScore {
    /// Position in the index; the tie-breaker.
    pub position: usize,
    pub score: f64,
    /// Matched fields in attribution order, with the strongest match kind seen.
    pub fields: Vec<(Field, MatchKind)>,
}

impl DocumentScore {
    /// Field names joined the way results report them: `"title, tags"`.
    pub fn matched_names(&self) -> String {
        self.fields
            .iter()
            .map(|(field, _)| field.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Score increment for a matched field.
#[inline]
pub fn field_boost(field: Field, config: &SearchConfig) -> f64 {
    config.boosts.get(field)
}

/// Does one query term match one field token, and how?
pub fn term_match(term: &str, token: &str, config: &SearchConfig) -> Option<MatchKind> {
    if term == token {
        return Some(MatchKind::Exact);
    }
    if config.prefix && token.starts_with(term) {
        return Some(MatchKind::Prefix);
    }
    if config.substring && token.contains(term) {
        return Some(MatchKind::Substring);
    }

    let budget = config.edit_budget(char_len(term));
    if budget == 0 {
        return None;
    }
    bounded_distance(term, token, budget).map(MatchKind::Fuzzy)
}

/// Best match kind for the query against one field, if any.
pub fn field_match(
    field: &IndexedField,
    query: &ParsedQuery,
    config: &SearchConfig,
) -> Option<MatchKind> {
    if field.text.is_empty() {
        return None;
    }

    let mut best: Option<MatchKind> = None;
    if config.substring && !query.phrase.is_empty() && field.text.contains(&query.phrase) {
        best = Some(MatchKind::Phrase);
    }

    for term in &query.terms {
        for token in &field.tokens {
            if let Some(kind) = term_match(term, token, config) {
                if kind == MatchKind::Exact {
                    return Some(kind);
                }
                best = Some(best.map_or(kind, |current| current.min(kind)));
            }
        }
    }

    best
}

/// Score one document. `None` when nothing matched or every matched boost is zero.
pub fn score_document(
    entry: &IndexedDocument,
    query: &ParsedQuery,
    config: &SearchConfig,
) -> Option<DocumentScore> {
    let mut score = 0.0;
    let mut fields = Vec::new();

    for field in &entry.fields {
        if let Some(kind) = field_match(field, query, config) {
            score += field_boost(field.field, config);
            fields.push((field.field, kind));
        }
    }

    // Zero-scoring documents never qualify, even if a zero-boost field matched.
    (score > 0.0).then_some(DocumentScore {
        position: entry.position,
        score,
        fields,
    })
}
