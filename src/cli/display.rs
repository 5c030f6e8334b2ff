// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the paperank CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `PAPERANK_THEME` first, then `COLORFGBG`, then macOS system appearance,
//! then falls back to dark. Respects `NO_COLOR` and drops all escapes when
//! stdout is not a TTY, so piping a ranking into a file gives plain text.
//!
//! # Theme detection order
//!
//! 1. `PAPERANK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use paperank::{Ranking, SelectionMode};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Width of the recency bar in `weights` output.
const BAR_WIDTH: usize = 20;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("PAPERANK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border escape, or nothing when colors are off.
fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Collapse whitespace runs (newlines included) to single spaces, then cut
/// to `max` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max {
        return text;
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", b, reset, content, " ".repeat(pad), b, reset);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        b,
        reset,
        label_part,
        b,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (b, reset) = border(GRAY);
    println!("{}└{}┘{}", b, "─".repeat(BOX_WIDTH), reset);
}

/// Print a boxed, centered title:
/// ╔════╗
/// ║ T  ║
/// ╚════╝
pub fn title(text: &str) {
    let (b, reset) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!("{}╔{}╗{}", b, "═".repeat(BOX_WIDTH), reset);
    println!(
        "{}║{}{}{}{}{}║{}",
        b,
        reset,
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        b,
        reset
    );
    println!("{}╚{}╝{}", b, "═".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score with sign coloring. MMR scores go negative for redundant picks.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.3}", score);
    if score > 0.0 {
        themed(GREEN, &[], &text)
    } else if score < 0.0 {
        themed(RED, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Horizontal bar proportional to `value / max`.
pub fn weight_bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    }
    .min(BAR_WIDTH);
    format!(
        "{}{}",
        themed(BLUE, &[], &"█".repeat(filled)),
        themed(GRAY, &[DIM], &"░".repeat(BAR_WIDTH - filled))
    )
}

pub fn mode_label(mode: &SelectionMode) -> String {
    match mode {
        SelectionMode::RelevanceOnly => "relevance only".to_string(),
        SelectionMode::Diversified { lambda } => format!("MMR λ={:.2}", lambda),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

/// Table lines for a ranking, without the box.
pub fn ranking_lines(ranking: &Ranking) -> Vec<String> {
    let mut lines = Vec::with_capacity(ranking.len() + 1);
    lines.push(themed(
        GRAY,
        &[BOLD],
        &format!(" {:>4}  {:>8}  {:<22}  {}", "#", "SCORE", "ID", "TITLE"),
    ));
    for (rank, entry) in ranking.entries.iter().enumerate() {
        let candidate = &entry.candidate;
        let title = candidate.title.as_deref().unwrap_or(&candidate.text);
        lines.push(format!(
            " {:>4}  {}  {}  {}",
            rank + 1,
            score_value(entry.score),
            pad_right(&themed(CYAN, &[], &truncate(&candidate.id, 22)), 22),
            truncate(title, BOX_WIDTH - 41)
        ));
    }
    lines
}

/// Print a ranking as a boxed table, followed by a run summary.
pub fn print_ranking(ranking: &Ranking, total: usize, corpus_len: usize, model: &str) {
    title("PAPERANK");

    section_top("RANKING");
    for line in ranking_lines(ranking) {
        row(&line);
    }
    if ranking.is_empty() {
        row(&themed(GRAY, &[DIM], "  no candidates"));
    }
    section_bot();

    section_top("RUN");
    row(&format!(
        " model {}  ·  {}",
        themed(CYAN, &[], &truncate(model, 48)),
        mode_label(&ranking.mode)
    ));
    row(&format!(
        " {} of {} candidates shown  ·  {} corpus items",
        ranking.len(),
        total,
        corpus_len
    ));
    if let Some(underrun) = ranking.underrun {
        row(&themed(YELLOW, &[BOLD], &format!(" ⚠ {}", underrun)));
    }
    section_bot();
}

/// Table lines for recency weights: `(id, date_added, weight)`, newest first.
pub fn weight_lines(weights: &[(&str, &str, f64)]) -> Vec<String> {
    let max = weights.first().map_or(0.0, |&(_, _, w)| w);
    weights
        .iter()
        .enumerate()
        .map(|(rank, &(id, date, weight))| {
            format!(
                " {:>4}  {}  {:.4}  {}  {}",
                rank + 1,
                themed(GRAY, &[], date),
                weight,
                weight_bar(weight, max),
                themed(CYAN, &[], &truncate(id, 20))
            )
        })
        .collect()
}

pub fn print_weights(weights: &[(&str, &str, f64)], total: usize) {
    title("PAPERANK · RECENCY WEIGHTS");
    section_top(&format!("{} OF {} CORPUS ITEMS", weights.len(), total));
    for line in weight_lines(weights) {
        row(&line);
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
