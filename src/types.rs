// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! Documents come in from the content pipeline, get split into per-field token
//! lists, and come back out as ranked results. Everything here is plain data:
//! the builder in `build` fills these in, the engine in `search` reads them.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchIndex**: `docs.len() = entries.len()`, and `entries[i].position = i`.
//!   Every accepted document appears exactly once, in payload order.
//!
//! - **SearchDocument**: `id` and `slug` are non-empty and unique within an index.
//!   The builder enforces this; anything else lands in `skipped`.
//!
//! - **IndexedField**: `tokens` are derived from `text`, never the other way around.

use crate::config::SearchConfig;
use crate::error::InvalidDocumentError;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One searchable record, as produced by the content pipeline.
///
/// Immutable once loaded. `id` and `slug` default to the empty string when the
/// payload leaves them out (or sends `null`) so the builder can reject the
/// record with a proper error instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slug: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The fields the index knows about, in attribution order.
///
/// The order matters: `SearchResult::matched` lists field names in exactly this
/// order, so "title, tags" never shows up as "tags, title".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Content,
    Tags,
    Language,
}

impl Field {
    /// Every indexed field, in attribution order.
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Content,
        Field::Tags,
        Field::Language,
    ];

    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Content => "content",
            Field::Tags => "tags",
            Field::Language => "language",
        }
    }

    /// Raw text of this field on a document. Tags are joined by a single space.
    pub fn raw_text(&self, doc: &SearchDocument) -> String {
        match self {
            Field::Title => doc.title.clone(),
            Field::Description => doc.description.clone(),
            Field::Content => doc.content.clone(),
            Field::Tags => doc.tags.join(" "),
            Field::Language => doc.language.clone().unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the UI gets back for each hit.
///
/// Derived and ephemeral: recomputed on every query, never cached. `matched` is
/// the comma-joined list of field names (the `match` key on the wire), `fields`
/// is the same information as a typed list for callers that don't want to parse it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "match")]
    pub matched: String,
    pub score: f64,
    #[serde(skip)]
    pub fields: Vec<Field>,
    #[serde(skip)]
    pub(crate) route_prefix: String,
}

impl SearchResult {
    /// Navigation target for this result: `<route prefix>/<slug>`.
    pub fn href(&self) -> String {
        let prefix = if self.route_prefix.is_empty() {
            crate::config::DEFAULT_ROUTE_PREFIX
        } else {
            self.route_prefix.as_str()
        };
        format!("{}/{}", prefix.trim_end_matches('/'), self.slug)
    }

    /// Did this field contribute to the score?
    pub fn matched_field(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// One field of one document, normalized and tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedField {
    pub field: Field,
    /// Normalized text (see `util::normalize`).
    pub text: String,
    /// Tokens of `text`, in order, duplicates kept.
    pub tokens: Vec<String>,
}

/// The searchable form of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    /// Position in `SearchIndex::docs`; the tie-breaker for equal scores.
    pub position: usize,
    /// One entry per `Field::ALL`, same order.
    pub fields: Vec<IndexedField>,
}

impl IndexedDocument {
    pub fn field(&self, field: Field) -> Option<&IndexedField> {
        self.fields.iter().find(|f| f.field == field)
    }
}

/// The complete search index: accepted documents, their tokenized fields,
/// the configuration queries run with, and the records that were rejected.
///
/// Built once per page load and read-only afterwards, so it can be shared by
/// reference with no locking.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    pub(crate) docs: Vec<SearchDocument>,
    pub(crate) entries: Vec<IndexedDocument>,
    pub(crate) config: SearchConfig,
    pub(crate) skipped: Vec<InvalidDocumentError>,
}

impl SearchIndex {
    /// Accepted documents, in payload order.
    pub fn docs(&self) -> &[SearchDocument] {
        &self.docs
    }

    pub fn entries(&self) -> &[IndexedDocument] {
        &self.entries
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Records the builder refused, with the reason for each.
    pub fn skipped(&self) -> &[InvalidDocumentError] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
