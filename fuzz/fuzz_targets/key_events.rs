// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the overlay's event handling.
//!
//! Drives a session with arbitrary interleavings of open, close, typing, keys
//! (composing or not) and pointer events. The keyboard listener and the scroll
//! lock must be held exactly while open, and the cursor must stay in range.

#![no_main]

use arbitrary::Arbitrary;
use blogsift::testing::{make_tagged_doc, HostCall, RecordingHost};
use blogsift::{build_index, KeyEvent, SearchSession};
use libfuzzer_sys::fuzz_target;

const KEYS: [&str; 8] = ["Escape", "ArrowDown", "ArrowUp", "Enter", "a", "Process", "Tab", "Dead"];

#[derive(Debug, Arbitrary)]
enum Event {
    Open,
    Close,
    Signal(bool),
    Type(String),
    Key { key: u8, composing: bool, legacy_code: bool },
    Hover(u8),
    Backdrop(bool),
}

fuzz_target!(|events: Vec<Event>| {
    let index = build_index(vec![
        make_tagged_doc("1", "Rust Ownership", &["rust"]),
        make_tagged_doc("2", "Rust Traits", &["rust"]),
        make_tagged_doc("3", "CMake Modern Targets", &["cpp"]),
        make_tagged_doc("4", "Go Channels", &["go"]),
    ]);
    let host = RecordingHost::new();
    let mut session = SearchSession::new(index, host.clone());

    for event in events.into_iter().take(256) {
        match event {
            Event::Open => session.open(),
            Event::Close => session.close(),
            Event::Signal(real) => {
                session.signal(if real { "open-search" } else { "close-search" });
            }
            Event::Type(text) => {
                let text: String = text.chars().take(64).collect();
                session.set_query(&text);
            }
            Event::Key { key, composing, legacy_code } => {
                let mut event = KeyEvent::new(KEYS[usize::from(key) % KEYS.len()]);
                event.is_composing = composing;
                if legacy_code {
                    event = event.with_key_code(229);
                }
                let was_open = session.is_open();
                let outcome = session.handle_key(&event);
                assert!(was_open || !outcome.prevent_default);
            }
            Event::Hover(i) => session.hover(usize::from(i)),
            Event::Backdrop(on_backdrop) => session.backdrop_click(on_backdrop),
        }

        assert_eq!(host.keyboard_attached(), session.is_open());
        assert_eq!(host.scroll_locked(), session.is_open());
        let snapshot = session.snapshot();
        if let Some(active) = snapshot.active_index {
            assert!(active < snapshot.results.len());
        } else {
            assert!(snapshot.results.is_empty());
        }
    }

    drop(session);
    assert_eq!(
        host.count(&HostCall::SubscribeKeyboard),
        host.count(&HostCall::UnsubscribeKeyboard)
    );
});
