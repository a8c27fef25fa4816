// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and the CLI's
//! `replay` command.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::host::{Host, Subscription};
use crate::types::{SearchDocument, SearchResult};
use std::cell::RefCell;
use std::rc::Rc;

/// Lowercase, alphanumeric runs joined by `-`: "Go Channels" → "go-channels".
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Create a test document with only a title; the slug is derived from it.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, title: &str) -> SearchDocument {
    SearchDocument {
        id: id.to_string(),
        title: title.to_string(),
        slug: slugify(title),
        ..SearchDocument::default()
    }
}

/// Create a test document with tags.
pub fn make_tagged_doc(id: &str, title: &str, tags: &[&str]) -> SearchDocument {
    SearchDocument {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_doc(id, title)
    }
}

/// Create a bare result for selection tests; id, title and slug all equal `slug`.
pub fn make_result(slug: &str) -> SearchResult {
    SearchResult {
        id: slug.to_string(),
        title: slug.to_string(),
        description: String::new(),
        slug: slug.to_string(),
        tags: vec![],
        language: None,
        matched: "title".to_string(),
        score: 10.0,
        fields: vec![crate::types::Field::Title],
        route_prefix: String::new(),
    }
}

/// One call the core made on its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SubscribeKeyboard,
    UnsubscribeKeyboard,
    LockScroll,
    UnlockScroll,
    FocusInput,
    ScrollIntoView(usize),
    Navigate(String),
}

/// A `Host` that writes every call into a shared log.
///
/// Clones share the log, so keep one clone outside the session to inspect it,
/// including after the session has been dropped.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Rc<RefCell<Vec<HostCall>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn keyboard_attached(&self) -> bool {
        self.count(&HostCall::SubscribeKeyboard) > self.count(&HostCall::UnsubscribeKeyboard)
    }

    pub fn scroll_locked(&self) -> bool {
        self.count(&HostCall::LockScroll) > self.count(&HostCall::UnlockScroll)
    }

    pub fn navigations(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Navigate(href) => Some(href.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }

    fn guard(&self, on_release: HostCall) -> Subscription {
        let calls = Rc::clone(&self.calls);
        Subscription::new(move || calls.borrow_mut().push(on_release))
    }
}

impl Host for RecordingHost {
    fn subscribe_keyboard(&mut self) -> Subscription {
        self.record(HostCall::SubscribeKeyboard);
        self.guard(HostCall::UnsubscribeKeyboard)
    }

    fn lock_scroll(&mut self) -> Subscription {
        self.record(HostCall::LockScroll);
        self.guard(HostCall::UnlockScroll)
    }

    fn focus_input(&mut self) {
        self.record(HostCall::FocusInput);
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.record(HostCall::ScrollIntoView(index));
    }

    fn navigate(&mut self, href: &str) {
        self.record(HostCall::Navigate(href.to_string()));
    }
}
