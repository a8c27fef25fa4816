// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the builder, the query engine and highlighting.
//!
//! Text normalization for accent-insensitive search, and the tokenizer that
//! keeps `C++` and `C#` in one piece.

pub mod normalize;

pub use normalize::{char_len, fold_char_into, normalize, tokenize};
