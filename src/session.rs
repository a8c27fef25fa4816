// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One search overlay, wired together.
//!
//! The session owns the index, the selection controller and the input
//! dispatcher, and turns controller effects into `Host` calls. The keyboard
//! subscription and the scroll lock are held as guards for exactly as long as
//! the overlay is open, so they cannot outlive it, even if the session itself
//! is dropped while open.
//!
//! Everything is synchronous: a `set_query` is fully applied before the next
//! event is looked at, so the last query typed is the one whose results show.

use crate::host::{Host, Subscription};
use crate::input::{ControlAction, InputDispatcher, KeyClass, KeyEvent};
use crate::selection::{Effect, SelectionController, SelectionSnapshot, SelectionState};
use crate::types::SearchIndex;

/// Name of the page-level event that opens the overlay.
pub const OPEN_SIGNAL: &str = "open-search";

/// What happened to one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub class: KeyClass,
    /// Whether the host should suppress the browser's default for this event.
    pub prevent_default: bool,
}

pub struct SearchSession<H: Host> {
    index: SearchIndex,
    controller: SelectionController,
    dispatcher: InputDispatcher,
    scroll_lock: Option<Subscription>,
    host: H,
}

impl<H: Host> SearchSession<H> {
    pub fn new(index: SearchIndex, host: H) -> Self {
        Self {
            index,
            controller: SelectionController::new(),
            dispatcher: InputDispatcher::new(),
            scroll_lock: None,
            host,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> &SelectionState {
        self.controller.state()
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.controller.snapshot()
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// React to a named page event. Only `OPEN_SIGNAL` means anything.
    pub fn signal(&mut self, name: &str) -> bool {
        if name != OPEN_SIGNAL {
            return false;
        }
        self.open();
        true
    }

    pub fn open(&mut self) {
        let effects = self.controller.open();
        if effects.is_empty() {
            return;
        }
        tracing::trace!("search overlay opened");
        self.dispatcher.attach(self.host.subscribe_keyboard());
        self.apply(effects);
    }

    pub fn close(&mut self) {
        let effects = self.controller.close();
        self.dispatcher.detach();
        if !effects.is_empty() {
            tracing::trace!("search overlay closed");
        }
        self.apply(effects);
    }

    /// The input's value changed.
    pub fn set_query(&mut self, query: &str) {
        let effects = self.controller.set_query(&self.index, query);
        self.apply(effects);
    }

    /// The pointer entered result `index`.
    pub fn hover(&mut self, index: usize) {
        let effects = self.controller.select(index);
        self.apply(effects);
    }

    /// A click landed on the overlay. Only a click on the backdrop itself
    /// (target identical to the listener's element) dismisses.
    pub fn backdrop_click(&mut self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.close();
        }
    }

    /// Route one key event from the global key stream.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        let class = self.dispatcher.dispatch(event);
        let Some(action) = class.action() else {
            return KeyOutcome {
                class,
                prevent_default: false,
            };
        };

        let prevent_default = match action {
            ControlAction::Dismiss => {
                self.close();
                true
            }
            ControlAction::Next => {
                let effects = self.controller.move_next();
                self.apply_acted(effects)
            }
            ControlAction::Previous => {
                let effects = self.controller.move_prev();
                self.apply_acted(effects)
            }
            ControlAction::Confirm => {
                let effects = self.controller.confirm();
                self.apply_acted(effects)
            }
        };

        KeyOutcome {
            class,
            prevent_default,
        }
    }

    /// Apply effects; report whether there were any.
    fn apply_acted(&mut self, effects: Vec<Effect>) -> bool {
        let acted = !effects.is_empty();
        self.apply(effects);
        acted
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LockScroll => self.scroll_lock = Some(self.host.lock_scroll()),
                Effect::UnlockScroll => {
                    if let Some(lock) = self.scroll_lock.take() {
                        lock.release();
                    }
                }
                Effect::FocusInput => self.host.focus_input(),
                Effect::ScrollIntoView(index) => self.host.scroll_into_view(index),
                Effect::Navigate(href) => {
                    tracing::debug!(%href, "navigating to search result");
                    self.host.navigate(&href);
                }
            }
        }
    }
}
