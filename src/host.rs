// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The seam between the search core and whatever renders it.
//!
//! Resources the overlay holds while open (the global key listener, the
//! background-scroll freeze) are handed out as `Subscription` guards. Dropping a
//! guard releases the resource, so every exit path releases it: an explicit
//! close, a reopen, or the session going away mid-flight.

use std::fmt;

/// Releases a host resource exactly once, on `release()` or on drop.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for hosts without the resource.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release now rather than at end of scope.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// What the core needs from the page.
pub trait Host {
    /// Start delivering global key events. Delivery stops when the guard drops.
    fn subscribe_keyboard(&mut self) -> Subscription;

    /// Freeze background scrolling. Scrolling comes back when the guard drops.
    fn lock_scroll(&mut self) -> Subscription;

    fn focus_input(&mut self) {}

    fn scroll_into_view(&mut self, _index: usize) {}

    fn navigate(&mut self, href: &str);
}
