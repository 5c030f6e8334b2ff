// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the paperank command-line interface.
//!
//! Two subcommands: `rank` to order a batch of candidates against a corpus,
//! and `weights` to show how much each corpus item counts toward relevance.
//! Flags given to `rank` override whatever the `--config` file sets.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "paperank",
    about = "Recency-weighted, diversity-aware paper reranker",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidate papers against a reference corpus
    Rank {
        /// Corpus JSON file (flat items or a Zotero export)
        #[arg(long)]
        corpus: PathBuf,

        /// Candidates JSON file (flat items or arXiv papers)
        #[arg(long)]
        candidates: PathBuf,

        /// JSON config file (model, diversityLambda, relevanceScale, diversityScale)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Embedding model: `hash`, `hash-<dims>`, or `precomputed:<path>`
        #[arg(short, long)]
        model: Option<String>,

        /// Diversity weight λ in [0, 1]; 0 disables diversification
        #[arg(short, long, allow_negative_numbers = true)]
        lambda: Option<f64>,

        /// Multiplier on weighted corpus similarity
        #[arg(long, allow_negative_numbers = true)]
        relevance_scale: Option<f64>,

        /// Multiplier on the redundancy penalty
        #[arg(long, allow_negative_numbers = true)]
        diversity_scale: Option<f64>,

        /// Show only the top N results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print the ranking as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the recency weight of each corpus item
    Weights {
        /// Corpus JSON file (flat items or a Zotero export)
        #[arg(long)]
        corpus: PathBuf,

        /// Show only the N most recent items
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}
