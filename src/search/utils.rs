// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by the engine, scoring and the benches.

use crate::util::{normalize, tokenize};

/// Parse a query string into normalized, de-duplicated terms.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("Rust rust ASYNC");
/// assert_eq!(terms, vec!["rust", "async"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in tokenize(query) {
        if !terms.contains(&token) {
            terms.push(token);
        }
    }
    terms
}

/// A query ready for matching: the whole normalized string for phrase checks,
/// plus its terms for token checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub phrase: String,
    pub terms: Vec<String>,
}

impl ParsedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            phrase: normalize(query),
            terms: parse_query(query),
        }
    }

    /// Nothing to match: no phrase and no terms.
    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty() && self.terms.is_empty()
    }
}
