// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! None of these ever reach the user as a crash. `InvalidDocumentError` is
//! collected on the index as a build report, `HighlightError` is swallowed by
//! `highlight` and turned into plain text. Only the config and payload errors
//! propagate, and only to the outer surfaces (CLI, WASM constructor).

use thiserror::Error;

/// Why the builder refused a record. The record is skipped, the build goes on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDocumentError {
    #[error("document #{position} has no id")]
    MissingId { position: usize },

    #[error("document #{position} ({id:?}) has no slug")]
    MissingSlug { position: usize, id: String },

    #[error("document #{position} repeats id {id:?}")]
    DuplicateId { position: usize, id: String },

    #[error("document #{position} ({id:?}) repeats slug {slug:?}")]
    DuplicateSlug {
        position: usize,
        id: String,
        slug: String,
    },

    #[error("document #{position} is malformed: {reason}")]
    Malformed { position: usize, reason: String },
}

impl InvalidDocumentError {
    /// Position of the offending record in the payload.
    pub fn position(&self) -> usize {
        match self {
            InvalidDocumentError::MissingId { position }
            | InvalidDocumentError::MissingSlug { position, .. }
            | InvalidDocumentError::DuplicateId { position, .. }
            | InvalidDocumentError::DuplicateSlug { position, .. }
            | InvalidDocumentError::Malformed { position, .. } => *position,
        }
    }
}

/// The highlighting regex could not be built. Never escapes `highlight`.
#[derive(Debug, Error)]
#[error("cannot highlight query: {0}")]
pub struct HighlightError(#[from] pub regex::Error);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("boost for {field} must be finite and non-negative, got {value}")]
    InvalidBoost { field: &'static str, value: f64 },

    #[error("fuzzy must be within 0.0..=1.0, got {0}")]
    InvalidFuzziness(f64),

    #[error("limit must be at least 1")]
    ZeroLimit,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("document payload must be a JSON array")]
    NotAnArray,

    #[error("invalid document payload: {0}")]
    Json(#[from] serde_json::Error),
}
