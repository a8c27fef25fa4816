// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The selection state machine.
//!
//! ```text
//!            open()                      set_query / move_* / select
//!  ┌────────┐ ─────▶ ┌──────────────────────────────┐ ◀──┐
//!  │ Closed │        │ Open(query, results, active) │ ───┘
//!  └────────┘ ◀───── └──────────────────────────────┘
//!            close()                     confirm() → Navigate
//! ```
//!
//! Transitions are plain method calls returning the UI effects they want. The
//! controller never touches the DOM, the keyboard or the scroll position itself,
//! so the whole table is testable without a renderer.
//!
//! # Invariants
//!
//! - `active_index` is `Some(i)` with `i < results.len()` iff `results` is
//!   non-empty, `None` otherwise.
//! - Replacing `results` resets `active_index` to the first result.
//! - `Closed` carries no query, results or cursor; reopening starts from scratch.

use crate::search::search_default;
use crate::types::{SearchIndex, SearchResult};
use serde::Serialize;

/// Something the UI should do as a consequence of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Freeze background scrolling while the overlay is open.
    LockScroll,
    /// Undo `LockScroll`.
    UnlockScroll,
    FocusInput,
    /// Bring result `i` into view (nearest edge, no jump if already visible).
    ScrollIntoView(usize),
    /// Leave the page for this path.
    Navigate(String),
}

/// Query, results and cursor of an open overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenSelection {
    query: String,
    results: Vec<SearchResult>,
    active_index: Option<usize>,
}

impl OpenSelection {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_result(&self) -> Option<&SearchResult> {
        self.active_index.and_then(|i| self.results.get(i))
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// The "no results found" state: something was typed, nothing came back.
    pub fn shows_no_results(&self) -> bool {
        !self.query.is_empty() && self.results.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Closed,
    Open(OpenSelection),
}

/// Flat, serializable view of the state for renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub is_open: bool,
    pub query: String,
    pub results: Vec<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_index: Option<usize>,
}

/// Drives `SelectionState` through its transitions.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SelectionState::Open(_))
    }

    /// The open selection, if any.
    pub fn selection(&self) -> Option<&OpenSelection> {
        match &self.state {
            SelectionState::Open(open) => Some(open),
            SelectionState::Closed => None,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut OpenSelection> {
        match &mut self.state {
            SelectionState::Open(open) => Some(open),
            SelectionState::Closed => None,
        }
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        match &self.state {
            SelectionState::Closed => SelectionSnapshot {
                is_open: false,
                query: String::new(),
                results: Vec::new(),
                active_index: None,
            },
            SelectionState::Open(open) => SelectionSnapshot {
                is_open: true,
                query: open.query.clone(),
                results: open.results.clone(),
                active_index: open.active_index,
            },
        }
    }

    /// `Closed → Open("", [], None)`. No-op when already open.
    pub fn open(&mut self) -> Vec<Effect> {
        if self.is_open() {
            return Vec::new();
        }
        self.state = SelectionState::Open(OpenSelection::default());
        vec![Effect::LockScroll, Effect::FocusInput]
    }

    /// `Open → Closed`, dropping query, results and cursor. No-op when closed.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        self.state = SelectionState::Closed;
        vec![Effect::UnlockScroll]
    }

    /// Re-run the query and replace the results. Runs on every edit, including
    /// the one that empties the input.
    pub fn set_query(&mut self, index: &SearchIndex, query: &str) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        let results = search_default(index, query);
        self.set_results(query, results)
    }

    /// Replace query and results in one step; the cursor goes back to the top.
    pub fn set_results(&mut self, query: &str, results: Vec<SearchResult>) -> Vec<Effect> {
        let Some(open) = self.selection_mut() else {
            return Vec::new();
        };
        open.query = query.to_string();
        open.active_index = if results.is_empty() { None } else { Some(0) };
        open.results = results;
        open.active_index.map(Effect::ScrollIntoView).into_iter().collect()
    }

    /// Next result, wrapping from the last back to the first.
    pub fn move_next(&mut self) -> Vec<Effect> {
        self.step(|active, len| (active + 1) % len)
    }

    /// Previous result, wrapping from the first to the last.
    pub fn move_prev(&mut self) -> Vec<Effect> {
        self.step(|active, len| (active + len - 1) % len)
    }

    fn step(&mut self, next: impl Fn(usize, usize) -> usize) -> Vec<Effect> {
        let Some(open) = self.selection_mut() else {
            return Vec::new();
        };
        let len = open.results.len();
        if len == 0 {
            return Vec::new();
        }
        let active = next(open.active_index.unwrap_or(0), len);
        open.active_index = Some(active);
        vec![Effect::ScrollIntoView(active)]
    }

    /// Point at result `index` (pointer hover). Out of range is a no-op.
    pub fn select(&mut self, index: usize) -> Vec<Effect> {
        let Some(open) = self.selection_mut() else {
            return Vec::new();
        };
        if index >= open.results.len() || open.active_index == Some(index) {
            return Vec::new();
        }
        open.active_index = Some(index);
        vec![Effect::ScrollIntoView(index)]
    }

    /// Where `confirm()` would navigate, if anywhere.
    pub fn navigation_target(&self) -> Option<String> {
        self.selection()
            .and_then(OpenSelection::active_result)
            .map(SearchResult::href)
    }

    /// Navigate to the active result. Leaves the state alone: the page is about
    /// to go away.
    pub fn confirm(&self) -> Vec<Effect> {
        self.navigation_target()
            .map(Effect::Navigate)
            .into_iter()
            .collect()
    }
}
