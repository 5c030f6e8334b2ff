// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Selection: turning relevance scores into a final order.
//!
//! Two paths, picked up front:
//!
//! - **Relevance only** (λ = 0, or at most one candidate): stable descending
//!   sort by relevance. Ties keep input order. Each candidate's score is its
//!   raw relevance.
//! - **Diversified** (λ > 0 and more than one candidate): greedy MMR in
//!   [`diversity`]. Each candidate's score is the MMR value it was picked with.
//!
//! The relevance-only path is not MMR with the penalty switched off. It never
//! builds the candidate × candidate matrix.

pub mod diversity;

pub use diversity::{mmr_score, mmr_select};

use crate::embedding::EmbedError;
use crate::matrix::SimilarityMatrix;
use crate::types::{Embedding, SelectionMode, SelectionUnderrun};
use crate::verify::contracts::check_selection;

/// A chosen order over candidate indices, with the score each was placed by.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// `(candidate index, score)` in rank order.
    pub order: Vec<(usize, f64)>,
    pub mode: SelectionMode,
    pub underrun: Option<SelectionUnderrun>,
}

impl Selection {
    pub fn indices(&self) -> Vec<usize> {
        self.order.iter().map(|&(idx, _)| idx).collect()
    }
}

/// Stable descending sort by relevance.
pub fn rank_by_relevance(relevance: &[f64]) -> Selection {
    let mut order: Vec<(usize, f64)> = relevance.iter().copied().enumerate().collect();
    // sort_by is stable: equal scores keep input order. Adding 0.0 folds -0.0
    // into +0.0, which total_cmp would otherwise rank below it.
    order.sort_by(|a, b| (b.1 + 0.0).total_cmp(&(a.1 + 0.0)));

    check_selection(
        &order.iter().map(|&(idx, _)| idx).collect::<Vec<_>>(),
        relevance.len(),
        true,
    );

    Selection {
        order,
        mode: SelectionMode::RelevanceOnly,
        underrun: None,
    }
}

/// Pick the selection path and run it.
///
/// `embeddings` are only read on the diversified path, where they feed the
/// candidate × candidate dot-product matrix.
pub fn select(
    relevance: &[f64],
    embeddings: &[Embedding],
    lambda: f64,
    diversity_scale: f64,
) -> Result<Selection, EmbedError> {
    if relevance.len() <= 1 || lambda <= 0.0 {
        return Ok(rank_by_relevance(relevance));
    }

    let similarity = SimilarityMatrix::dot(embeddings, embeddings)?;
    Ok(mmr_select(relevance, &similarity, lambda, diversity_scale))
}
