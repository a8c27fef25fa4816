// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! The boost weights are tuning knobs, not semantics: nothing downstream assumes
//! a particular value, only that title outweighs description and tags, which
//! outweigh language. Everything has a default, so `{}` is a valid config.

use crate::error::ConfigError;
use crate::types::Field;
use serde::{Deserialize, Serialize};

/// Where confirmed results navigate to.
pub const DEFAULT_ROUTE_PREFIX: &str = "/blog";

/// Queries shorter than this (after trimming) never touch the index.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

pub const DEFAULT_LIMIT: usize = 10;

/// Fraction of the term length allowed as edit distance.
pub const DEFAULT_FUZZY: f64 = 0.2;

/// Hard cap on edit distance, whatever the term length.
pub const DEFAULT_MAX_EDITS: usize = 6;

/// Per-field score increments. A document's score is the sum of the boosts of
/// the fields it matched in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBoosts {
    pub title: f64,
    pub description: f64,
    pub content: f64,
    pub tags: f64,
    pub language: f64,
}

impl Default for FieldBoosts {
    fn default() -> Self {
        Self {
            title: 10.0,
            description: 5.0,
            content: 1.0,
            tags: 3.0,
            language: 2.0,
        }
    }
}

impl FieldBoosts {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Description => self.description,
            Field::Content => self.content,
            Field::Tags => self.tags,
            Field::Language => self.language,
        }
    }
}

/// Options shared by the builder and the query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Minimum trimmed query length, in characters.
    pub min_query_len: usize,
    /// Result cap used by `search_default` and the session.
    pub limit: usize,
    /// Match query terms as prefixes of field tokens.
    pub prefix: bool,
    /// Match query terms anywhere inside field tokens.
    pub substring: bool,
    /// Edit-distance budget as a fraction of term length (0 disables fuzzy).
    pub fuzzy: f64,
    /// Upper bound on the edit-distance budget.
    pub max_edits: usize,
    /// Path prefix for navigation targets.
    pub route_prefix: String,
    pub boosts: FieldBoosts,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            limit: DEFAULT_LIMIT,
            prefix: true,
            substring: true,
            fuzzy: DEFAULT_FUZZY,
            max_edits: DEFAULT_MAX_EDITS,
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            boosts: FieldBoosts::default(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in Field::ALL {
            let value = self.boosts.get(field);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBoost {
                    field: field.as_str(),
                    value,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.fuzzy) {
            return Err(ConfigError::InvalidFuzziness(self.fuzzy));
        }
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(())
    }

    /// Edit-distance budget for a term of `term_len` characters.
    pub fn edit_budget(&self, term_len: usize) -> usize {
        ((term_len as f64 * self.fuzzy).round() as usize).min(self.max_edits)
    }
}
