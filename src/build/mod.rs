// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! Runs once per page load. Each accepted document is normalized and tokenized
//! field by field; each refused one is logged and kept in the build report. The
//! build itself never fails: the worst case is an empty index.

pub mod document;

pub use document::*;

use crate::config::SearchConfig;
use crate::error::{InvalidDocumentError, PayloadError};
use crate::types::{Field, IndexedDocument, IndexedField, SearchDocument, SearchIndex};
use crate::util::{normalize, tokenize};

/// Build an index with the default configuration.
pub fn build_index(documents: Vec<SearchDocument>) -> SearchIndex {
    build_index_with_config(documents, SearchConfig::default())
}

/// Build an index whose queries will run with `config`.
///
/// Same input, same index: no randomness, no hashing order leaks into the result.
pub fn build_index_with_config(documents: Vec<SearchDocument>, config: SearchConfig) -> SearchIndex {
    assemble(documents.into_iter().enumerate(), Vec::new(), config)
}

/// Decode a JSON payload and build from whatever decoded cleanly.
pub fn build_index_from_json(json: &str, config: SearchConfig) -> Result<SearchIndex, PayloadError> {
    let parsed = parse_documents(json)?;
    Ok(assemble(parsed.documents, parsed.rejected, config))
}

fn assemble(
    documents: impl IntoIterator<Item = (usize, SearchDocument)>,
    mut skipped: Vec<InvalidDocumentError>,
    config: SearchConfig,
) -> SearchIndex {
    for error in &skipped {
        tracing::warn!(%error, "skipping document");
    }

    let mut validator = Validator::default();
    let mut docs = Vec::new();
    let mut entries = Vec::new();

    for (position, doc) in documents {
        match validator.accept(position, &doc) {
            Ok(()) => {
                entries.push(index_document(docs.len(), &doc));
                docs.push(doc);
            }
            Err(error) => {
                tracing::warn!(%error, "skipping document");
                skipped.push(error);
            }
        }
    }

    skipped.sort_by_key(InvalidDocumentError::position);
    tracing::debug!(
        documents = docs.len(),
        skipped = skipped.len(),
        "search index built"
    );

    SearchIndex {
        docs,
        entries,
        config,
        skipped,
    }
}

/// Normalize and tokenize every field of one document.
pub fn index_document(position: usize, doc: &SearchDocument) -> IndexedDocument {
    let fields = Field::ALL
        .iter()
        .map(|&field| {
            let raw = field.raw_text(doc);
            IndexedField {
                field,
                text: normalize(&raw),
                tokens: tokenize(&raw),
            }
        })
        .collect();

    IndexedDocument { position, fields }
}
