// Copyright 2026-present Findex Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;

use findex::{Company, CompanyIndex, SearchParams, Searcher};

mod cli;
use cli::{display, Cli, Commands};

/// Dataset files come in two shapes: a bare JSON array of companies, or
/// the API payload form `{ "companies": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Dataset {
    Wrapped { companies: Vec<Company> },
    Plain(Vec<Company>),
}

fn load_companies(path: &str) -> Result<Vec<Company>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read dataset {path}"))?;
    let dataset: Dataset =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse dataset {path}"))?;
    Ok(match dataset {
        Dataset::Wrapped { companies } => companies,
        Dataset::Plain(companies) => companies,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            input,
            query,
            location,
            services,
            sizes,
            industry,
            abn,
            sort_by,
            sort_order,
            limit,
            json,
        } => {
            let companies = load_companies(&input)?;
            let mut searcher = Searcher::new(companies);

            let params = SearchParams {
                query: query.clone(),
                location,
                services,
                size: sizes,
                industry,
                abn,
                sort_by: sort_by.into(),
                sort_order: sort_order.into(),
            };
            let results = searcher.search_scored(&params);

            if json {
                let shown: Vec<_> = results.iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                display::print_results(&results, query.as_deref(), limit);
            }
        }

        Commands::Suggest { input, term, limit } => {
            let companies = load_companies(&input)?;
            let searcher = Searcher::new(companies);
            let suggestions = searcher.suggest(&term, limit);
            display::print_suggestions(&suggestions, &term);
        }

        Commands::Inspect { input } => {
            let companies = load_companies(&input)?;
            let index = CompanyIndex::build(&companies);
            display::print_stats(&index.stats());
        }
    }

    Ok(())
}
