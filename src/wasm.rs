// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the blog search overlay.
//!
//! This is the browser-facing API. The page hands over the JSON payload and an
//! object of callbacks; the overlay logic stays in Rust and calls back out for
//! everything that touches the DOM.
//!
//! # Callback API
//!
//! ```js
//! const search = new BlogSearch(payloadJson, { limit: 10 }, {
//!     attachKeyboard: () => window.addEventListener("keydown", onKey),
//!     detachKeyboard: () => window.removeEventListener("keydown", onKey),
//!     lockScroll: () => (document.body.style.overflow = "hidden"),
//!     unlockScroll: () => (document.body.style.overflow = ""),
//!     focusInput: () => input.focus(),
//!     scrollIntoView: (i) => items[i]?.scrollIntoView({ block: "nearest" }),
//!     navigate: (href) => goto(href),
//! });
//! window.addEventListener("open-search", () => search.signal("open-search"));
//! function onKey(e) { if (search.keydown(e)) e.preventDefault(); render(search.state()); }
//! ```
//!
//! Every callback is optional. A missing one is simply not called.
//!
//! Callbacks run while the `BlogSearch` method that triggered them is still
//! executing, so they must not call back into the same `BlogSearch` (not even
//! `state()`): wasm-bindgen rejects the nested borrow with a recursive-use
//! error. Render after the outer call returns, as `onKey` does above, or defer
//! with `queueMicrotask`.

use crate::build::build_index_from_json;
use crate::config::SearchConfig;
use crate::highlight::{extract_excerpt, highlight, DEFAULT_EXCERPT_LEN};
use crate::host::{Host, Subscription};
use crate::input::KeyEvent;
use crate::search::search_default;
use crate::session::SearchSession;
use js_sys::{Function, Reflect};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `Host` backed by an object of JS callbacks.
struct JsHost {
    callbacks: JsValue,
}

impl JsHost {
    fn callback(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.callbacks, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn invoke(&self, name: &str, arg: Option<JsValue>) {
        if let Some(callback) = self.callback(name) {
            call(name, &callback, arg);
        }
    }

    /// Call `acquire` now and hand back a guard that calls `release` on drop.
    fn acquire(&self, acquire: &str, release: &'static str) -> Subscription {
        self.invoke(acquire, None);
        match self.callback(release) {
            Some(callback) => Subscription::new(move || call(release, &callback, None)),
            None => Subscription::noop(),
        }
    }
}

fn call(name: &str, callback: &Function, arg: Option<JsValue>) {
    let outcome = match arg {
        Some(arg) => callback.call1(&JsValue::NULL, &arg),
        None => callback.call0(&JsValue::NULL),
    };
    if let Err(err) = outcome {
        tracing::warn!(callback = name, ?err, "host callback threw");
    }
}

impl Host for JsHost {
    fn subscribe_keyboard(&mut self) -> Subscription {
        self.acquire("attachKeyboard", "detachKeyboard")
    }

    fn lock_scroll(&mut self) -> Subscription {
        self.acquire("lockScroll", "unlockScroll")
    }

    fn focus_input(&mut self) {
        self.invoke("focusInput", None);
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.invoke("scrollIntoView", Some(JsValue::from_f64(index as f64)));
    }

    fn navigate(&mut self, href: &str) {
        self.invoke("navigate", Some(JsValue::from_str(href)));
    }
}

/// Read the fields classification needs straight off a `KeyboardEvent`.
///
/// Goes through `Reflect` rather than serde because DOM events expose these as
/// prototype getters, not own properties.
fn key_event(event: &JsValue) -> Result<KeyEvent, JsValue> {
    let key = Reflect::get(event, &JsValue::from_str("key"))?
        .as_string()
        .ok_or_else(|| JsValue::from_str("keydown event has no string `key`"))?;
    let is_composing = Reflect::get(event, &JsValue::from_str("isComposing"))?
        .as_bool()
        .unwrap_or(false);
    let key_code = Reflect::get(event, &JsValue::from_str("keyCode"))?
        .as_f64()
        .map(|code| code as u32);
    Ok(KeyEvent {
        key,
        is_composing,
        key_code,
    })
}

fn parse_config(config: JsValue) -> Result<SearchConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SearchConfig::default());
    }
    let config: SearchConfig =
        from_value(config).map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
    config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

/// WASM-accessible search overlay.
///
/// Owns the index and the overlay state for one page. The index is built once,
/// in the constructor; records that fail validation are skipped and reported
/// through `skippedCount`.
#[wasm_bindgen]
pub struct BlogSearch {
    session: SearchSession<JsHost>,
}

#[wasm_bindgen]
impl BlogSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(payload: &str, config: JsValue, host: JsValue) -> Result<BlogSearch, JsValue> {
        let config = parse_config(config)?;
        let index = build_index_from_json(payload, config)
            .map_err(|e| JsValue::from_str(&format!("Failed to load search payload: {}", e)))?;
        Ok(BlogSearch {
            session: SearchSession::new(index, JsHost { callbacks: host }),
        })
    }

    #[wasm_bindgen(getter, js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.session.index().len()
    }

    #[wasm_bindgen(getter, js_name = skippedCount)]
    pub fn skipped_count(&self) -> usize {
        self.session.index().skipped().len()
    }

    pub fn open(&mut self) {
        self.session.open();
    }

    pub fn close(&mut self) {
        self.session.close();
    }

    /// Forward a page event by name. Returns whether it opened the overlay.
    pub fn signal(&mut self, name: &str) -> bool {
        self.session.signal(name)
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: &str) {
        self.session.set_query(query);
    }

    /// Route a `keydown` event. Returns `true` when the caller should call
    /// `preventDefault()`.
    pub fn keydown(&mut self, event: JsValue) -> Result<bool, JsValue> {
        let event = key_event(&event)?;
        Ok(self.session.handle_key(&event).prevent_default)
    }

    #[wasm_bindgen(js_name = backdropClick)]
    pub fn backdrop_click(&mut self, target_is_backdrop: bool) {
        self.session.backdrop_click(target_is_backdrop);
    }

    pub fn hover(&mut self, index: usize) {
        self.session.hover(index);
    }

    /// Current overlay state: `{ isOpen, query, results, activeIndex? }`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.snapshot()).map_err(|e| e.to_string().into())
    }

    /// One-off query that leaves the overlay state alone.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let results = search_default(self.session.index(), query);
        to_value(&results).map_err(|e| e.to_string().into())
    }

    /// `[{ kind: "plain" | "mark", text }]` covering all of `text`.
    pub fn highlight(&self, text: &str, query: &str) -> Result<JsValue, JsValue> {
        to_value(&highlight(text, query)).map_err(|e| e.to_string().into())
    }

    pub fn excerpt(&self, content: &str, query: &str) -> String {
        extract_excerpt(content, query, DEFAULT_EXCERPT_LEN)
    }
}
