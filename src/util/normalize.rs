// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Symbol characters that stay inside a token (`c++`, `c#`, `f#`).
const TOKEN_SYMBOLS: [char; 2] = ['+', '#'];

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// This enables fuzzy matching between ASCII and accented versions:
/// - "café" → "cafe"
/// - "naïve" → "naive"
/// - "Modern   CMake" → "modern cmake"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization, e.g. slim WASM builds)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fold one character the way `normalize` does, appending the result to `out`.
///
/// No whitespace handling. Lets callers fold text while keeping track of which
/// raw character each folded byte came from.
#[cfg(feature = "unicode-normalization")]
pub fn fold_char_into(c: char, out: &mut String) {
    for base in std::iter::once(c).nfd().filter(|c| !is_combining_mark(*c)) {
        out.extend(base.to_lowercase());
    }
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_char_into(c: char, out: &mut String) {
    out.extend(c.to_lowercase());
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || TOKEN_SYMBOLS.contains(&c)
}

/// Split text into normalized tokens.
///
/// A token is a maximal run of alphanumerics plus `+`/`#`, with at least one
/// alphanumeric in it. A bare `++` is punctuation, not a word.
pub fn tokenize(value: &str) -> Vec<String> {
    normalize(value)
        .split(|c: char| !is_token_char(c))
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

/// Length in Unicode scalar values. Byte length lies for anything non-ASCII.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
