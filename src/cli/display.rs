// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the findex CLI.
//!
//! Themed output: a small accent palette for dark and light terminals.
//! Detection tries `FINDEX_THEME` first (for explicit control), then
//! `COLORFGBG` (set by some terminals), then defaults to dark. Respects
//! `NO_COLOR` and non-TTY detection for pipelines.

use findex::{highlight_match, IndexStats, ScoredCompany};
use std::sync::OnceLock;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via FINDEX_THEME
    if let Ok(theme) = std::env::var("FINDEX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg >= 7 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Should output be colored at all?
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// Accent color for headings and match highlights, per theme.
fn accent() -> String {
    match theme() {
        Theme::Dark => rgb(97, 175, 239),  // #61afef
        Theme::Light => rgb(1, 132, 188),  // #0184bc
    }
}

/// Muted color for secondary detail.
fn muted() -> String {
    match theme() {
        Theme::Dark => rgb(92, 99, 112),   // #5c6370
        Theme::Light => rgb(160, 161, 167), // #a0a1a7
    }
}

fn paint(text: &str, style: &str) -> String {
    if colors_enabled() {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// One-line location summary: headquarters first, then any office, then
/// the flat location string.
fn location_line(company: &findex::Company) -> String {
    let hq = company
        .offices
        .iter()
        .find(|o| o.is_headquarter)
        .or_else(|| company.offices.first());
    match hq {
        Some(office) => format!("{}, {}", office.city, office.state),
        None => company.location.clone().unwrap_or_default(),
    }
}

/// Print search results as a themed table.
pub fn print_results(results: &[ScoredCompany], query: Option<&str>, limit: usize) {
    if results.is_empty() {
        println!("{}", paint("no matches", DIM));
        return;
    }

    let total = results.len();
    for scored in results.iter().take(limit) {
        let company = &scored.company;
        let name = match (query, colors_enabled()) {
            (Some(q), true) => {
                let open = format!("{BOLD}{}", accent());
                highlight_match(&company.name, q, &open, RESET)
            }
            _ => company.name.clone(),
        };

        let mut detail: Vec<String> = Vec::new();
        let location = location_line(company);
        if !location.is_empty() {
            detail.push(location);
        }
        if let Some(industry) = &company.industry {
            detail.push(industry.clone());
        }
        if let Some(rating) = company.rating {
            detail.push(format!("{rating:.1}★"));
        }

        println!("{}  {}", paint(&name, BOLD), paint(&detail.join(" · "), DIM));
        if !company.services.is_empty() {
            println!("    {}", paint(&company.services.join(", "), &muted()));
        }
    }

    if total > limit {
        println!("{}", paint(&format!("… and {} more", total - limit), DIM));
    }
}

/// Print autocomplete suggestions, one per line.
pub fn print_suggestions(suggestions: &[String], term: &str) {
    if suggestions.is_empty() {
        println!("{}", paint("no suggestions", DIM));
        return;
    }
    for suggestion in suggestions {
        let line = if colors_enabled() {
            let open = format!("{BOLD}{}", accent());
            highlight_match(suggestion, term, &open, RESET)
        } else {
            suggestion.clone()
        };
        println!("{line}");
    }
}

/// Print index statistics for `findex inspect`.
pub fn print_stats(stats: &IndexStats) {
    let rows = [
        ("companies", stats.companies),
        ("name tokens", stats.name_tokens),
        ("location tokens", stats.location_tokens),
        ("service tokens", stats.service_tokens),
        ("industry tokens", stats.industry_tokens),
        ("ABN entries", stats.abn_entries),
    ];
    for (label, value) in rows {
        // Pad before painting: escape codes must not count toward the width
        let label = format!("{label:>16}");
        println!("{}  {}", paint(&label, DIM), paint(&value.to_string(), BOLD));
    }
}
