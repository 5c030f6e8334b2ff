// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline end to end.
//!
//! ```text
//! validate config ─▶ sort corpus newest-first ─▶ temporal weights
//!                                                     │
//! encode corpus (1 call) ─┐                           ▼
//!                         ├─▶ candidate × corpus sim ─▶ relevance ─▶ select ─▶ Ranking
//! encode candidates (1 call) ─────────────────────────────────────────┘
//! ```
//!
//! Everything that can be rejected without the provider (bad λ, empty model
//! id, malformed timestamps) is rejected before the first `encode` call, so a
//! bad request never pays for embeddings.

use tracing::{debug, warn};

use crate::config::RerankConfig;
use crate::embedding::{check_batch, Embedder};
use crate::error::{RerankError, Result};
use crate::scoring::{score_candidates, sort_by_recency, temporal_weights};
use crate::select::{rank_by_relevance, select, Selection};
use crate::types::{Candidate, CorpusItem, Embedding, RankedCandidate, Ranking};

/// Rank `candidates` by recency-weighted relevance to `corpus`, diversified per `config`.
///
/// Candidates are moved into the returned [`Ranking`] in rank order, each
/// paired with the score that placed it. The input order only matters for
/// breaking ties.
///
/// # Errors
///
/// - [`RerankError::InvalidConfiguration`] for a config that fails
///   [`RerankConfig::validate`], or when `embedder` does not serve
///   `config.model`
/// - [`RerankError::MalformedCorpusEntry`] when any corpus timestamp fails to parse
/// - [`RerankError::Provider`] for anything the embedding provider reports
///
/// A short diversity selection is not an error: the partial ranking comes
/// back with [`Ranking::underrun`] set.
pub fn rerank<E: Embedder + ?Sized>(
    candidates: Vec<Candidate>,
    corpus: &[CorpusItem],
    embedder: &E,
    config: &RerankConfig,
) -> Result<Ranking> {
    config.validate()?;
    if embedder.model_id() != config.model {
        return Err(RerankError::InvalidConfiguration(format!(
            "configured model '{}' but provider serves '{}'",
            config.model,
            embedder.model_id()
        )));
    }

    let corpus = sort_by_recency(corpus)?;
    let weights = temporal_weights(corpus.len());
    debug!(
        corpus = corpus.len(),
        candidates = candidates.len(),
        model = %config.model,
        lambda = config.diversity_lambda,
        "ranking candidates"
    );

    if candidates.is_empty() {
        return Ok(assemble(candidates, rank_by_relevance(&[])));
    }

    let corpus_vectors = encode_all(embedder, corpus.iter().map(|item| item.text.as_str()))?;
    let candidate_vectors = encode_all(embedder, candidates.iter().map(|c| c.text.as_str()))?;

    let relevance = score_candidates(
        embedder,
        &candidate_vectors,
        &corpus_vectors,
        &weights,
        config.relevance_scale,
    )?;

    let selection = select(
        &relevance,
        &candidate_vectors,
        config.diversity_lambda,
        config.diversity_scale,
    )?;
    debug!(mode = ?selection.mode, placed = selection.order.len(), "selection finished");

    if let Some(underrun) = selection.underrun {
        warn!(
            expected = underrun.expected,
            selected = underrun.selected,
            "diversity selection ended early; returning partial ranking"
        );
    }

    Ok(assemble(candidates, selection))
}

/// Encode a batch in one provider call. Empty batches skip the provider.
fn encode_all<'a, E: Embedder + ?Sized>(
    embedder: &E,
    texts: impl Iterator<Item = &'a str>,
) -> Result<Vec<Embedding>> {
    let texts: Vec<&str> = texts.collect();
    if texts.is_empty() {
        return Ok(Vec::new());
    }
    let vectors = embedder.encode(&texts)?;
    check_batch(texts.len(), &vectors)?;
    Ok(vectors)
}

/// Move candidates into rank order. Candidates missing from an underrun
/// selection are dropped here; the underrun record says how many.
fn assemble(candidates: Vec<Candidate>, selection: Selection) -> Ranking {
    let mut slots: Vec<Option<Candidate>> = candidates.into_iter().map(Some).collect();
    let entries = selection
        .order
        .iter()
        .filter_map(|&(idx, score)| {
            slots
                .get_mut(idx)
                .and_then(Option::take)
                .map(|candidate| RankedCandidate { candidate, score })
        })
        .collect();

    Ranking {
        entries,
        mode: selection.mode,
        underrun: selection.underrun,
    }
}
