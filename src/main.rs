// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

use blogsift::highlight::{extract_excerpt, highlight, DEFAULT_EXCERPT_LEN};
use blogsift::testing::RecordingHost;
use blogsift::{build_index_from_json, search, KeyEvent, SearchConfig, SearchIndex, SearchSession};

mod cli;
use cli::display::{self, themed, BOLD};
use cli::{Cli, Commands, Source};

fn main() {
    let cli = Cli::parse();
    cli::logging::init();

    let outcome = match cli.command {
        Commands::Check { source, strict } => run_check(&source, strict),
        Commands::Search {
            source,
            query,
            limit,
            json,
        } => run_search(&source, &query, limit, json),
        Commands::Replay {
            source,
            query,
            keys,
        } => run_replay(&source, &query, &keys),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SearchConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

fn load_index(source: &Source) -> Result<SearchIndex> {
    let config = load_config(source.config.as_deref())?;
    let payload = fs::read_to_string(&source.input)
        .with_context(|| format!("reading payload {}", source.input.display()))?;
    build_index_from_json(&payload, config)
        .with_context(|| format!("decoding payload {}", source.input.display()))
}

fn run_check(source: &Source, strict: bool) -> Result<()> {
    let index = load_index(source)?;
    let skipped = index.skipped();

    display::section_top("INDEX");
    display::row(&format!(" payload    {}", source.input.display()));
    display::row(&format!(
        " indexed    {}",
        themed(display::GREEN, &[BOLD], &index.len().to_string())
    ));
    display::row(&format!(" skipped    {}", skipped.len()));
    display::row(&format!(" route      {}/<slug>", index.config().route_prefix));
    if !skipped.is_empty() {
        display::row("");
        for error in skipped {
            display::row(&format!(" {}", display::skip_reason(error)));
        }
    }
    display::section_bot();

    if strict && !skipped.is_empty() {
        bail!("{} record(s) skipped", skipped.len());
    }
    Ok(())
}

fn run_search(source: &Source, query: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let index = load_index(source)?;
    let limit = limit.unwrap_or(index.config().limit);
    let results = search(&index, query, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    display::section_top(&format!("RESULTS for \"{}\" ({})", query, results.len()));
    if results.is_empty() {
        display::row(" No results found");
    }
    for (rank, result) in results.iter().enumerate() {
        let title = display::truncate(&result.title, 48);
        display::row(&format!(
            " {:>2}. {}  {}",
            rank + 1,
            display::score_value(result.score),
            display::marked(&highlight(&title, query))
        ));
        let fields: Vec<String> = result.fields.iter().map(|f| display::field_badge(*f)).collect();
        display::row(&format!("            {}  {}", result.href(), fields.join(", ")));

        let content = index
            .docs()
            .iter()
            .find(|doc| doc.id == result.id)
            .map(|doc| doc.content.as_str())
            .unwrap_or_default();
        if !content.is_empty() {
            let excerpt = extract_excerpt(content, query, DEFAULT_EXCERPT_LEN);
            let excerpt = display::truncate(&excerpt.replace('\n', " "), 58);
            display::row(&format!("            {}", display::marked(&highlight(&excerpt, query))));
        }
    }
    display::section_bot();
    Ok(())
}

/// `"ArrowDown~"` is ArrowDown sent mid-composition.
fn parse_key(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }
    Some(match spec.strip_suffix('~') {
        Some(key) => KeyEvent::new(key).composing(),
        None => KeyEvent::new(spec),
    })
}

fn run_replay(source: &Source, query: &str, keys: &str) -> Result<()> {
    let index = load_index(source)?;
    let host = RecordingHost::new();
    let mut session = SearchSession::new(index, host.clone());
    let mut seen = 0;

    let mut report = |label: String, host: &RecordingHost| {
        let calls = host.calls();
        display::row(&format!(" {}", label));
        for call in &calls[seen..] {
            display::row(&format!("     → {}", display::host_call(call)));
        }
        seen = calls.len();
    };

    display::section_top("REPLAY");
    session.open();
    report("open".to_string(), &host);
    session.set_query(query);
    report(format!("type \"{}\"", query), &host);

    for event in keys.split(',').filter_map(parse_key) {
        let outcome = session.handle_key(&event);
        let prevent = if outcome.prevent_default {
            " (default prevented)"
        } else {
            ""
        };
        report(
            format!(
                "{}{}: {}{}",
                event.key,
                if event.is_composing { "~" } else { "" },
                display::key_class(&outcome.class),
                prevent
            ),
            &host,
        );
    }

    let snapshot = session.snapshot();
    display::row("");
    display::row(&format!(
        " state: {}, {} result(s), active {}",
        if snapshot.is_open { "open" } else { "closed" },
        snapshot.results.len(),
        snapshot
            .active_index
            .map_or_else(|| "none".to_string(), |i| i.to_string())
    ));
    display::section_bot();
    Ok(())
}
