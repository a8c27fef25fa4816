// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display helpers: match highlighting and excerpts.
//!
//! Both search the *raw* text for the *raw* query, case-insensitively, as a
//! literal. The query is escaped before it reaches the regex engine, so `c++`
//! highlights `C++` instead of blowing up on a dangling repetition operator.
//! If the engine refuses the pattern anyway (size limits on absurd queries),
//! highlighting degrades to plain text. Rendering never fails.
//!
//! When the literal finds nothing, both fall back to the same folding search
//! uses (diacritics stripped, lowercased), then map the folded match back onto
//! whole characters of the raw text. `cafe` marks `Café`.

use crate::error::HighlightError;
use crate::util::{char_len, fold_char_into};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Default excerpt length, in characters.
pub const DEFAULT_EXCERPT_LEN: usize = 150;

/// Characters of context kept on each side of a match in an excerpt.
pub const EXCERPT_CONTEXT: usize = 50;

/// Compiled-pattern budget. Real queries are a few dozen bytes.
const PATTERN_SIZE_LIMIT: usize = 1 << 16;

/// A run of text, marked or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment<'a> {
    Plain(&'a str),
    Mark(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(text) | Segment::Mark(text) => text,
        }
    }

    pub fn is_mark(&self) -> bool {
        matches!(self, Segment::Mark(_))
    }
}

/// Escape regex metacharacters so the query matches itself and nothing else.
pub fn escape_literal(query: &str) -> String {
    regex::escape(query)
}

fn literal_pattern(query: &str) -> Result<Regex, HighlightError> {
    Ok(RegexBuilder::new(&escape_literal(query))
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?)
}

/// `text` folded character by character, remembering where each piece came from.
struct FoldedText {
    folded: String,
    /// `(folded_start, raw_start, raw_end)` per raw character, in order.
    origins: Vec<(usize, usize, usize)>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut origins = Vec::with_capacity(text.len());
        for (raw_start, c) in text.char_indices() {
            origins.push((folded.len(), raw_start, raw_start + c.len_utf8()));
            fold_char_into(c, &mut folded);
        }
        Self { folded, origins }
    }

    /// Index of the raw character that produced the folded byte at `offset`.
    /// Characters that fold to nothing (combining marks) are never picked.
    fn owner(&self, offset: usize) -> usize {
        self.origins
            .partition_point(|&(folded_start, _, _)| folded_start <= offset)
            .saturating_sub(1)
    }

    fn folds_to_nothing(&self, i: usize) -> bool {
        let next = self.origins.get(i + 1).map_or(self.folded.len(), |o| o.0);
        self.origins[i].0 == next
    }

    /// Raw span covering folded bytes `start..end`, plus any combining marks
    /// trailing the last character.
    fn raw_span(&self, start: usize, end: usize) -> (usize, usize) {
        let first = self.owner(start);
        let mut last = self.owner(end - 1);
        while last + 1 < self.origins.len() && self.folds_to_nothing(last + 1) {
            last += 1;
        }
        (self.origins[first].1, self.origins[last].2)
    }
}

/// Byte spans of `query` in `text`, widened to whole raw characters.
fn folded_spans(text: &str, query: &str) -> Vec<(usize, usize)> {
    let mut needle = String::new();
    query.chars().for_each(|c| fold_char_into(c, &mut needle));
    if needle.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let haystack = FoldedText::new(text);
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for (start, found) in haystack.folded.match_indices(needle.as_str()) {
        let (raw_start, raw_end) = haystack.raw_span(start, start + found.len());
        // Two matches inside one raw character's fold collapse into one span.
        if spans.last().is_some_and(|&(_, end)| raw_start < end) {
            continue;
        }
        spans.push((raw_start, raw_end));
    }
    spans
}

/// Byte spans to mark: literal matches, else folded ones.
fn match_spans(text: &str, query: &str) -> Result<Vec<(usize, usize)>, HighlightError> {
    let spans: Vec<(usize, usize)> = literal_pattern(query)?
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    if !spans.is_empty() {
        return Ok(spans);
    }
    Ok(folded_spans(text, query))
}

/// Split `text` into plain and marked segments, or say why it can't.
pub fn try_highlight<'a>(text: &'a str, query: &str) -> Result<Vec<Segment<'a>>, HighlightError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(vec![Segment::Plain(text)]);
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end) in match_spans(text, query)? {
        if start > cursor {
            segments.push(Segment::Plain(&text[cursor..start]));
        }
        segments.push(Segment::Mark(&text[start..end]));
        cursor = end;
    }
    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::Plain(&text[cursor..]));
    }
    Ok(segments)
}

/// Split `text` into plain and marked segments. Never fails: a pattern the
/// engine rejects yields the whole text as one plain segment.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    match try_highlight(text, query) {
        Ok(segments) => segments,
        Err(error) => {
            tracing::debug!(%error, "highlight fell back to plain text");
            vec![Segment::Plain(text)]
        }
    }
}

/// A short window of `content` around the first occurrence of `query`.
///
/// - No match (or empty query): the first `max_len` characters, trimmed, with
///   `...` appended if anything was cut.
/// - Match: up to `EXCERPT_CONTEXT` characters either side, with `...` on each
///   side that doesn't reach the edge of the text.
pub fn extract_excerpt(content: &str, query: &str, max_len: usize) -> String {
    let query = query.trim();
    let found = if query.is_empty() {
        None
    } else {
        match_spans(content, query)
            .ok()
            .and_then(|spans| spans.first().copied())
    };

    let Some((match_start, match_end)) = found else {
        let head: String = content.chars().take(max_len).collect();
        let ellipsis = if char_len(content) > max_len { "..." } else { "" };
        return format!("{}{}", head.trim(), ellipsis);
    };

    let start = content[..match_start]
        .char_indices()
        .rev()
        .nth(EXCERPT_CONTEXT - 1)
        .map_or(0, |(i, _)| i);
    let end = content[match_end..]
        .char_indices()
        .nth(EXCERPT_CONTEXT)
        .map_or(content.len(), |(i, _)| match_end + i);

    let mut excerpt = String::with_capacity(end - start + 6);
    if start > 0 {
        excerpt.push_str("...");
    }
    excerpt.push_str(&content[start..end]);
    if end < content.len() {
        excerpt.push_str("...");
    }
    excerpt
}
