// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via bounded edit distance.
//!
//! Blog-sized vocabularies (a few thousand tokens at most) don't justify an
//! automaton. A bounded Levenshtein with early exits is fast enough per keystroke.

mod levenshtein;

pub use levenshtein::*;
