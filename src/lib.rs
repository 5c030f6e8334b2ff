// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recency-weighted, diversity-aware reranking of candidate papers.
//!
//! Given a personal corpus (papers you saved, each with the time you saved
//! it) and a batch of new candidates, rank the candidates by how closely they
//! match what you have been reading lately, then reorder with Maximal
//! Marginal Relevance so the top of the list is not ten near-copies of the
//! same paper.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  source/    │────▶│  engine.rs   │────▶│  Ranking     │
//! │ (JSON load) │     │  (rerank)    │     │ (types.rs)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                      │      │      │
//!          ┌───────────┘      │      └────────────┐
//!          ▼                  ▼                   ▼
//! ┌─────────────────┐ ┌──────────────────┐ ┌───────────────┐
//! │   scoring/      │ │   embedding/     │ │   select/     │
//! │ temporal weights│ │ Embedder trait,  │ │ relevance sort│
//! │ relevance       │ │ hash, precomputed│ │ MMR diversity │
//! └─────────────────┘ └──────────────────┘ └───────────────┘
//!          │                  │                   │
//!          ▼                  ▼                   ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │          matrix.rs  (SimilarityMatrix, rayon rows)       │
//! │          verify/    (debug-build contracts)              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Scoring
//!
//! | Stage       | Formula                                                   |
//! |-------------|-----------------------------------------------------------|
//! | recency     | `w_i ∝ 1 / (1 + log10(i + 1))`, newest item `i = 0`       |
//! | relevance   | `rel_j = scale · Σ_i sim(c_j, d_i) · w_i`                 |
//! | MMR         | `λ · rel_j − (1 − λ) · diversity_scale · max_sim(c_j, S)` |
//!
//! # Usage
//!
//! ```
//! use paperank::{rerank, Candidate, CorpusItem, HashEmbedder, RerankConfig};
//!
//! let corpus = vec![CorpusItem::new("z1", "sparse attention for long documents", "2024-03-01T09:00:00Z")];
//! let candidates = vec![
//!     Candidate::new("a", "efficient attention for long sequences"),
//!     Candidate::new("b", "protein folding with diffusion"),
//! ];
//!
//! // The default config names the bundled `hash-256` embedder.
//! let embedder = HashEmbedder::new(256);
//! let config = RerankConfig::default();
//! let ranking = rerank(candidates, &corpus, &embedder, &config).unwrap();
//! assert_eq!(ranking.len(), 2);
//! ```

pub mod config;
pub mod embedding;
mod engine;
pub mod error;
pub mod matrix;
pub mod scoring;
pub mod select;
pub mod source;
pub mod types;
pub mod util;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use config::{
    ConfigError, RerankConfig, DEFAULT_DIVERSITY_LAMBDA, DEFAULT_DIVERSITY_SCALE, DEFAULT_MODEL,
};
pub use embedding::{load_embedder, EmbedError, Embedder, HashEmbedder, PrecomputedEmbedder};
pub use engine::rerank;
pub use error::{RerankError, Result};
pub use matrix::SimilarityMatrix;
pub use scoring::{relevance_scores, sort_by_recency, temporal_weights, RELEVANCE_SCALE};
pub use select::{mmr_select, rank_by_relevance, select, Selection};
pub use source::{load_candidates, load_corpus, SourceError};
pub use types::{
    Candidate, CorpusItem, Embedding, RankedCandidate, Ranking, SelectionMode, SelectionUnderrun,
};
