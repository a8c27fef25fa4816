// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search for a static blog.
//!
//! The content pipeline emits a JSON array of posts. This crate turns it into an
//! in-memory index, answers keystroke-by-keystroke queries against it, and runs
//! the keyboard-driven overlay that shows the results, without ever letting an
//! input method's composition keys stall navigation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   build/     │────▶│  search/     │────▶│ selection.rs │
//! │ (payload →   │     │ (query →     │     │ (Closed/Open │
//! │  SearchIndex)│     │  ranked hits)│     │  + effects)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  session.rs: SearchSession<H: Host>                     │
//! │  input.rs classifies keys, host.rs holds the guards     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use blogsift::{build_index_from_json, search_default, SearchConfig};
//!
//! let payload = r#"[
//!     {"id": "1", "title": "Go Channels", "description": "", "content": "",
//!      "tags": ["go"], "slug": "go-channels"}
//! ]"#;
//! let index = build_index_from_json(payload, SearchConfig::default()).unwrap();
//!
//! let results = search_default(&index, "chan");
//! assert_eq!(results[0].href(), "/blog/go-channels");
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod host;
pub mod input;
pub mod scoring;
pub mod search;
pub mod selection;
pub mod session;
pub mod testing;
pub mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use build::{build_index, build_index_from_json, build_index_with_config, parse_documents};
pub use config::{FieldBoosts, SearchConfig, DEFAULT_ROUTE_PREFIX};
pub use error::{ConfigError, HighlightError, InvalidDocumentError, PayloadError};
pub use fuzzy::levenshtein_within;
pub use highlight::{extract_excerpt, highlight, Segment};
pub use host::{Host, Subscription};
pub use input::{classify, ControlAction, InputDispatcher, KeyClass, KeyEvent};
pub use search::{search, search_default};
pub use selection::{Effect, OpenSelection, SelectionController, SelectionSnapshot, SelectionState};
pub use session::{KeyOutcome, SearchSession, OPEN_SIGNAL};
pub use types::{Field, SearchDocument, SearchIndex, SearchResult};
pub use util::normalize;
