// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Log output for the CLI.
//!
//! The library only emits `tracing` events; this is where they get a
//! subscriber. Output goes to stderr so it never mixes with `--json` results.
//! `RUST_LOG` picks the level, `warn` otherwise (skipped records and nothing
//! else). `RUST_LOG=blogsift=debug` adds index stats and highlight fallbacks.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(super::display::use_colors_on_stderr())
                .with_target(true)
                .with_filter(filter),
        )
        .init();
}
