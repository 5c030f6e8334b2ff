// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate relevance against a time-weighted corpus.
//!
//! ```text
//! relevance[i] = scale * Σ_j sim(candidate_i, corpus_j) * weight_j
//! ```
//!
//! With cosine similarity and weights summing to 1, the weighted sum lands in
//! [-1, 1]; the scale (10 by default) moves it into a range people read
//! comfortably. Downstream MMR scores assume this scale, so changing it
//! changes rankings, not just the displayed numbers.

use crate::embedding::{EmbedError, Embedder};
use crate::error::RerankError;
use crate::matrix::SimilarityMatrix;
use crate::types::Embedding;
use crate::verify::contracts::check_matrix_shape;

/// Default multiplier applied to weighted similarity sums.
pub const RELEVANCE_SCALE: f64 = 10.0;

/// Weighted row sums of a candidate × corpus similarity matrix, scaled.
///
/// `weights` must have one entry per matrix column. With no columns every
/// candidate scores 0.
pub fn relevance_scores(similarity: &SimilarityMatrix, weights: &[f64], scale: f64) -> Vec<f64> {
    debug_assert_eq!(
        similarity.cols(),
        weights.len(),
        "one temporal weight per corpus column"
    );

    (0..similarity.rows())
        .map(|i| {
            let weighted: f64 = similarity
                .row(i)
                .iter()
                .zip(weights)
                .map(|(&s, &w)| f64::from(s) * w)
                .sum();
            weighted * scale
        })
        .collect()
}

/// Ask the provider for candidate × corpus similarity and score each candidate.
///
/// An empty corpus short-circuits to all-zero scores without touching the
/// provider. A matrix of the wrong shape is treated as a provider failure.
pub fn score_candidates<E: Embedder + ?Sized>(
    embedder: &E,
    candidates: &[Embedding],
    corpus: &[Embedding],
    weights: &[f64],
    scale: f64,
) -> Result<Vec<f64>, RerankError> {
    if corpus.is_empty() {
        return Ok(vec![0.0; candidates.len()]);
    }

    let similarity = embedder.similarity(candidates, corpus)?;
    if similarity.shape() != (candidates.len(), corpus.len()) {
        return Err(EmbedError::ShapeMismatch {
            expected: (candidates.len(), corpus.len()),
            got_len: similarity.rows() * similarity.cols(),
        }
        .into());
    }
    check_matrix_shape(&similarity, candidates.len(), corpus.len());

    Ok(relevance_scores(&similarity, weights, scale))
}
