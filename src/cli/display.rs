// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the blogsift CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Highlighted query
//! matches get the accent color; without color they are wrapped in `[` `]` so
//! piped output still shows where the match landed.
//!
//! # Theme detection order
//!
//! 1. `BLOGSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! `NO_COLOR` disables color entirely, and so does a non-TTY stdout.

use blogsift::highlight::Segment;
use blogsift::testing::HostCall;
use blogsift::{Field, InvalidDocumentError, KeyClass};
use std::sync::OnceLock;

/// Width between the box borders.
pub const BOX_WIDTH: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background 7 and up (except 8, dark gray) is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    std::env::var("BLOGSIFT_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| theme_from_colorfgbg(&v))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(RED);
theme_color!(GRAY);

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Same rules, for the log writer.
pub fn use_colors_on_stderr() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr)
}

/// Apply a theme color plus modifiers, or nothing when color is off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as the terminal shows it: ANSI escapes don't count.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if !in_escape => len += 1,
            _ => {}
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Cut to `max` visible characters, appending `…` if anything was dropped.
/// Only for plain text; styled strings would lose their reset.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    themed(GRAY, &[], s)
}

/// ┌─ LABEL ─────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let rest = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(rest)))
    );
}

/// │ content     │
pub fn row(content: &str) {
    println!(
        "{}{}{}",
        border("│"),
        pad_right(content, BOX_WIDTH),
        border("│")
    );
}

/// └─────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Render highlight segments, marking the matches.
pub fn marked(segments: &[Segment<'_>]) -> String {
    let colors = use_colors();
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.to_string(),
            Segment::Mark(text) if colors => {
                format!("{}{}{}{}{}", BOLD, UNDERLINE, YELLOW(), text, RESET)
            }
            Segment::Mark(text) => format!("[{}]", text),
        })
        .collect()
}

pub fn field_badge(field: Field) -> String {
    let color_fn: fn() -> String = match field {
        Field::Title => GREEN,
        Field::Description => BLUE,
        Field::Content => GRAY,
        Field::Tags => MAGENTA,
        Field::Language => CYAN,
    };
    themed(color_fn, &[], field.as_str())
}

pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.1}", score);
    if score >= 10.0 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 5.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

pub fn skip_reason(error: &InvalidDocumentError) -> String {
    format!(
        "{} {}",
        themed(RED, &[BOLD], &format!("#{:<4}", error.position())),
        error
    )
}

pub fn key_class(class: &KeyClass) -> String {
    match class {
        KeyClass::Control(action) => themed(GREEN, &[], &format!("{:?}", action)),
        KeyClass::Composing => themed(YELLOW, &[], "composing (ignored)"),
        KeyClass::PassThrough => themed(GRAY, &[], "pass-through"),
    }
}

pub fn host_call(call: &HostCall) -> String {
    match call {
        HostCall::SubscribeKeyboard => "attach keyboard".to_string(),
        HostCall::UnsubscribeKeyboard => "detach keyboard".to_string(),
        HostCall::LockScroll => "lock scroll".to_string(),
        HostCall::UnlockScroll => "unlock scroll".to_string(),
        HostCall::FocusInput => "focus input".to_string(),
        HostCall::ScrollIntoView(i) => format!("scroll result {} into view", i),
        HostCall::Navigate(href) => format!("navigate → {}", themed(BLUE, &[UNDERLINE], href)),
    }
}
