// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted.
//!
//! Higher score first. On an exact tie, the document that came first in the
//! payload wins, so results never shuffle between identical queries.

use super::DocumentScore;
use std::cmp::Ordering;

/// Compare two scored documents for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Position** - ascending, payload order
///
/// `total_cmp` keeps this a total order even if a config sneaks a NaN past
/// validation; NaN sorts above everything and at least sorts consistently.
pub fn compare_scores(a: &DocumentScore, b: &DocumentScore) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}

/// Sort in place and cut to `limit`.
pub fn rank(scores: &mut Vec<DocumentScore>, limit: usize) {
    scores.sort_by(compare_scores);
    scores.truncate(limit);
}
