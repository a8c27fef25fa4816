// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard classification.
//!
//! The four control keys always win. An input method mid-composition marks its
//! key events as composing (or reports the legacy key code 229), and those
//! events must not leak into the query as stray characters, but they must not
//! swallow ArrowDown either. Hence: control key → control action, composing or
//! not; anything else during composition → ignored; anything else → left alone.
//!
//! `classify` is a pure function of the event. Which element has focus is not
//! part of the event and does not matter.

use crate::host::Subscription;
use serde::Deserialize;

/// `keyCode` browsers report for keys an input method is handling.
pub const IME_KEY_CODE: u32 = 229;

/// The parts of a keyboard event classification needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    /// The `KeyboardEvent.key` value: `"ArrowDown"`, `"a"`, `"Process"`, ...
    pub key: String,
    #[serde(default)]
    pub is_composing: bool,
    #[serde(default)]
    pub key_code: Option<u32>,
}

impl KeyEvent {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    /// The same key, as an input method mid-composition would deliver it.
    pub fn composing(mut self) -> Self {
        self.is_composing = true;
        self.key_code = Some(IME_KEY_CODE);
        self
    }

    pub fn with_key_code(mut self, key_code: u32) -> Self {
        self.key_code = Some(key_code);
        self
    }

    /// Part of an active composition, by either signal.
    pub fn is_composition(&self) -> bool {
        self.is_composing || self.key_code == Some(IME_KEY_CODE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    Dismiss,
    Next,
    Previous,
    Confirm,
}

impl ControlAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ControlAction::Dismiss),
            "ArrowDown" => Some(ControlAction::Next),
            "ArrowUp" => Some(ControlAction::Previous),
            "Enter" => Some(ControlAction::Confirm),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ControlAction::Dismiss => "Escape",
            ControlAction::Next => "ArrowDown",
            ControlAction::Previous => "ArrowUp",
            ControlAction::Confirm => "Enter",
        }
    }
}

/// What to do with one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Control(ControlAction),
    /// A composition artifact. Swallowed.
    Composing,
    /// An ordinary key. Left to the text input.
    PassThrough,
}

impl KeyClass {
    pub fn action(&self) -> Option<ControlAction> {
        match self {
            KeyClass::Control(action) => Some(*action),
            KeyClass::Composing | KeyClass::PassThrough => None,
        }
    }
}

/// Classify a key event for an open overlay.
pub fn classify(event: &KeyEvent) -> KeyClass {
    if let Some(action) = ControlAction::from_key(&event.key) {
        return KeyClass::Control(action);
    }
    if event.is_composition() {
        KeyClass::Composing
    } else {
        KeyClass::PassThrough
    }
}

/// Routes key events only while it holds a keyboard subscription.
///
/// Attach on open, detach on close. While detached every event passes through
/// and nothing gets its default prevented.
#[derive(Debug, Default)]
pub struct InputDispatcher {
    subscription: Option<Subscription>,
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a subscription. Any previous one is released first.
    pub fn attach(&mut self, subscription: Subscription) {
        self.detach();
        self.subscription = Some(subscription);
    }

    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn dispatch(&self, event: &KeyEvent) -> KeyClass {
        if self.is_attached() {
            classify(event)
        } else {
            KeyClass::PassThrough
        }
    }
}
