// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: query string in, ranked results out.
//!
//! Pure and synchronous. Nothing here mutates the index, so any number of
//! queries can run against one `SearchIndex` without coordination.

mod query;
pub mod utils;

pub use query::*;
