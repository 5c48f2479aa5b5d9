// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the findex command-line interface.
//!
//! Three subcommands: `search` to run a filtered query over a JSON
//! dataset, `suggest` for autocomplete completions, and `inspect` to
//! examine what the index built from a dataset looks like.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use findex::{SortKey, SortOrder};

#[derive(Parser)]
#[command(
    name = "findex",
    about = "In-memory business-directory search with fuzzy matching",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a company dataset
    Search {
        /// Path to the companies JSON dataset
        #[arg(short, long)]
        input: String,

        /// Free-text query (matched against names, services, and ABNs)
        #[arg(short, long)]
        query: Option<String>,

        /// Comma-separated region codes or names ("nsw,vic")
        #[arg(short, long)]
        location: Option<String>,

        /// Desired service (repeatable)
        #[arg(long = "service")]
        services: Vec<String>,

        /// Team-size category (repeatable)
        #[arg(long = "size")]
        sizes: Vec<String>,

        /// Industry filter (fuzzy)
        #[arg(long)]
        industry: Option<String>,

        /// ABN filter (exact or partial)
        #[arg(long)]
        abn: Option<String>,

        /// Sort key
        #[arg(long, value_enum, default_value = "relevance")]
        sort_by: SortKeyArg,

        /// Sort direction
        #[arg(long, value_enum, default_value = "desc")]
        sort_order: SortOrderArg,

        /// Maximum rows to print
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Emit JSON (with scores) instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Suggest completions for partial input
    Suggest {
        /// Path to the companies JSON dataset
        #[arg(short, long)]
        input: String,

        /// Partial term to complete
        term: String,

        /// Maximum suggestions
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },

    /// Show index statistics for a dataset
    Inspect {
        /// Path to the companies JSON dataset
        input: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    Name,
    Rating,
    Relevance,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::Rating => SortKey::Rating,
            SortKeyArg::Relevance => SortKey::Relevance,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Asc => SortOrder::Asc,
            SortOrderArg::Desc => SortOrder::Desc,
        }
    }
}
