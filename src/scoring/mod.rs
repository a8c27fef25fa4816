// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A document's score is the sum of the boosts of the fields it matched in.
//! How well a field matched (exact, prefix, fuzzy) only decides whether it
//! counts, never how much. Ranking then sorts by score and falls back to
//! payload order.

mod core;
pub mod ranking;

pub use core::*;
