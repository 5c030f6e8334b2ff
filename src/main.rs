// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paperank::{
    load_candidates, load_corpus, load_embedder, rerank, sort_by_recency, temporal_weights,
    RerankConfig,
};

mod cli;
use cli::{display, Cli, Commands};

/// Everything `rank` needs, after merging the config file with CLI flags.
struct RankArgs {
    corpus: PathBuf,
    candidates: PathBuf,
    config: RerankConfig,
    limit: Option<usize>,
    json: bool,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Rank {
            corpus,
            candidates,
            config,
            model,
            lambda,
            relevance_scale,
            diversity_scale,
            limit,
            json,
        } => resolve_config(config.as_deref(), model, lambda, relevance_scale, diversity_scale)
            .and_then(|config| {
                run_rank(RankArgs {
                    corpus,
                    candidates,
                    config,
                    limit,
                    json,
                })
            }),
        Commands::Weights { corpus, limit } => run_weights(&corpus, limit),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config file (or defaults), then CLI flags on top.
fn resolve_config(
    path: Option<&Path>,
    model: Option<String>,
    lambda: Option<f64>,
    relevance_scale: Option<f64>,
    diversity_scale: Option<f64>,
) -> Result<RerankConfig> {
    let mut config = match path {
        Some(path) => RerankConfig::from_json_file(path)?,
        None => RerankConfig::default(),
    };

    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(lambda) = lambda {
        config = config.with_lambda(lambda);
    }
    if let Some(scale) = relevance_scale {
        config = config.with_relevance_scale(scale);
    }
    if let Some(scale) = diversity_scale {
        config = config.with_diversity_scale(scale);
    }
    Ok(config)
}

fn run_rank(args: RankArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let candidates = load_candidates(&args.candidates)?;
    let total = candidates.len();
    info!(corpus = corpus.len(), candidates = total, "inputs loaded");

    let embedder = load_embedder(&args.config.model)
        .with_context(|| format!("Failed to load embedding model '{}'", args.config.model))?;

    let mut ranking = rerank(candidates, &corpus, &embedder, &args.config)
        .context("Failed to rank candidates")?;

    if let Some(underrun) = ranking.underrun {
        eprintln!("⚠️  {}; showing the partial ranking", underrun);
    }
    if let Some(limit) = args.limit {
        ranking.truncate(limit);
    }

    if args.json {
        let out = serde_json::to_string_pretty(&ranking).context("Failed to serialize ranking")?;
        println!("{}", out);
    } else {
        display::print_ranking(&ranking, total, corpus.len(), &args.config.model);
    }
    Ok(())
}

fn run_weights(corpus_path: &Path, limit: Option<usize>) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let sorted = sort_by_recency(&corpus)
        .with_context(|| format!("Failed to order corpus {}", corpus_path.display()))?;
    let weights = temporal_weights(sorted.len());

    let shown = limit.unwrap_or(sorted.len()).min(sorted.len());
    let rows: Vec<(&str, &str, f64)> = sorted
        .iter()
        .zip(&weights)
        .take(shown)
        .map(|(item, &w)| (item.id.as_str(), item.date_added.as_str(), w))
        .collect();

    display::print_weights(&rows, sorted.len());
    Ok(())
}
