// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the blogsift command-line interface.
//!
//! Three subcommands, all reading the same JSON payload the site ships to the
//! browser: `check` to see which records the index would refuse, `search` to
//! see what a query ranks, and `replay` to drive the overlay with a typed query
//! and a key sequence and watch what it asks the page to do.

pub mod display;
pub mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "blogsift",
    about = "Client-side blog search: index checker and query playground",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options every subcommand shares.
#[derive(Args)]
pub struct Source {
    /// JSON payload: an array of posts (id, title, description, content, tags, language, slug)
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON search config; missing keys take their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index and report skipped records
    Check {
        #[command(flatten)]
        source: Source,

        /// Exit with status 1 if any record was skipped
        #[arg(long)]
        strict: bool,
    },

    /// Run a query and display ranked results
    Search {
        #[command(flatten)]
        source: Source,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to the config's limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Open the overlay, type a query, press keys, print what the page is told to do
    Replay {
        #[command(flatten)]
        source: Source,

        /// Query to type after opening
        query: String,

        /// Comma-separated key names, e.g. "ArrowDown,ArrowDown,Enter".
        /// Suffix a key with `~` to send it mid-composition ("ArrowDown~").
        #[arg(short, long, default_value = "Enter")]
        keys: String,
    },
}
