// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document payload parsing and per-record validation.
//!
//! The payload is a JSON array of documents. One bad record must not take the
//! others down with it, so records are decoded one at a time and a record that
//! does not fit the `SearchDocument` shape becomes an `InvalidDocumentError`.

use crate::error::{InvalidDocumentError, PayloadError};
use crate::types::SearchDocument;
use serde_json::Value;
use std::collections::HashSet;

/// Outcome of decoding a payload: the usable records, plus the ones that failed
/// to decode with their payload positions.
#[derive(Debug, Default)]
pub struct ParsedPayload {
    /// Decoded records with their payload positions.
    pub documents: Vec<(usize, SearchDocument)>,
    pub rejected: Vec<InvalidDocumentError>,
}

impl ParsedPayload {
    /// Just the documents, dropping positions.
    pub fn into_documents(self) -> Vec<SearchDocument> {
        self.documents.into_iter().map(|(_, doc)| doc).collect()
    }
}

/// Decode a JSON array of documents, record by record.
///
/// Fails only if the payload is not JSON or not an array.
pub fn parse_documents(json: &str) -> Result<ParsedPayload, PayloadError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(records) = value else {
        return Err(PayloadError::NotAnArray);
    };

    let mut parsed = ParsedPayload::default();
    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<SearchDocument>(record) {
            Ok(doc) => parsed.documents.push((position, doc)),
            Err(e) => parsed.rejected.push(InvalidDocumentError::Malformed {
                position,
                reason: e.to_string(),
            }),
        }
    }
    Ok(parsed)
}

/// Tracks ids and slugs already accepted, so duplicates can be refused.
#[derive(Debug, Default)]
pub struct Validator {
    ids: HashSet<String>,
    slugs: HashSet<String>,
}

impl Validator {
    /// Check one record. On success the id and slug are reserved.
    pub fn accept(
        &mut self,
        position: usize,
        doc: &SearchDocument,
    ) -> Result<(), InvalidDocumentError> {
        let id = doc.id.trim();
        if id.is_empty() {
            return Err(InvalidDocumentError::MissingId { position });
        }
        let slug = doc.slug.trim();
        if slug.is_empty() {
            return Err(InvalidDocumentError::MissingSlug {
                position,
                id: doc.id.clone(),
            });
        }
        if self.ids.contains(id) {
            return Err(InvalidDocumentError::DuplicateId {
                position,
                id: doc.id.clone(),
            });
        }
        if self.slugs.contains(slug) {
            return Err(InvalidDocumentError::DuplicateSlug {
                position,
                id: doc.id.clone(),
                slug: doc.slug.clone(),
            });
        }

        self.ids.insert(id.to_string());
        self.slugs.insert(slug.to_string());
        Ok(())
    }
}
