// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy maximal marginal relevance.
//!
//! Near-duplicate candidates tend to score alike, so a plain relevance sort
//! stacks them at the top. MMR picks one item at a time, and each pick is
//! charged for how much it resembles what is already chosen:
//!
//! ```text
//! mmr(i) = λ · relevance[i] − (1 − λ) · diversity_scale · max_{s ∈ selected} sim(i, s)
//! ```
//!
//! `max_{s ∈ selected}` is 0 before the first pick, so round one is a pure
//! relevance pick. `diversity_scale` puts the similarity (roughly [-1, 1]) on
//! the same footing as relevance, which is already scaled up by the scorer.
//!
//! # Tie-breaking
//!
//! Remaining candidates are scanned in index order and only a strictly
//! greater score replaces the current best. Equal scores go to the earliest
//! index.
//!
//! # Cost
//!
//! The max-similarity term is recomputed from scratch every round: O(M²)
//! lookups per round, O(M³) worst case overall. M is a daily batch of
//! candidates, not the corpus, so the simple version wins.
//!
//! # Short selections
//!
//! A round in which no candidate beats `-∞` (every score NaN) ends the loop.
//! A NaN similarity to any picked candidate makes that candidate's score NaN.
//! Nothing would change in later rounds, and padding the tail with unscored
//! candidates would hide the problem. The returned [`Selection`] then carries
//! a [`SelectionUnderrun`].

use crate::matrix::SimilarityMatrix;
use crate::types::{SelectionMode, SelectionUnderrun};
use crate::verify::contracts::{check_matrix_shape, check_selection};

use super::Selection;

/// One candidate's marginal relevance given its closest already-picked neighbour.
#[inline]
pub fn mmr_score(lambda: f64, relevance: f64, max_similarity: f64, diversity_scale: f64) -> f64 {
    lambda * relevance - (1.0 - lambda) * diversity_scale * max_similarity
}

/// Largest similarity between `idx` and any selected candidate; 0 when none.
///
/// A NaN similarity makes the result NaN, so the candidate can never be
/// picked. `f32::max` would drop it instead.
fn max_similarity_to_selected(
    similarity: &SimilarityMatrix,
    idx: usize,
    selected: &[(usize, f64)],
) -> f64 {
    if selected.is_empty() {
        return 0.0;
    }
    let mut max = f32::NEG_INFINITY;
    for &(sel, _) in selected {
        let sim = similarity.get(idx, sel);
        if sim.is_nan() {
            return f64::NAN;
        }
        if sim > max {
            max = sim;
        }
    }
    f64::from(max)
}

/// Greedy MMR over all candidates.
///
/// `similarity` is the `n × n` candidate matrix, `n = relevance.len()`.
pub fn mmr_select(
    relevance: &[f64],
    similarity: &SimilarityMatrix,
    lambda: f64,
    diversity_scale: f64,
) -> Selection {
    let n = relevance.len();
    check_matrix_shape(similarity, n, n);

    let mut selected: Vec<(usize, f64)> = Vec::with_capacity(n);
    let mut remaining: Vec<usize> = (0..n).collect();

    for _ in 0..n {
        if remaining.is_empty() {
            break;
        }

        let mut best: Option<usize> = None;
        let mut best_score = f64::NEG_INFINITY;

        for (pos, &idx) in remaining.iter().enumerate() {
            let max_sim = max_similarity_to_selected(similarity, idx, &selected);
            let score = mmr_score(lambda, relevance[idx], max_sim, diversity_scale);
            if score > best_score {
                best_score = score;
                best = Some(pos);
            }
        }

        let Some(pos) = best else {
            break;
        };
        let idx = remaining.remove(pos);
        selected.push((idx, best_score));
    }

    let underrun = (selected.len() < n).then_some(SelectionUnderrun {
        expected: n,
        selected: selected.len(),
    });

    check_selection(
        &selected.iter().map(|&(idx, _)| idx).collect::<Vec<_>>(),
        n,
        underrun.is_none(),
    );

    Selection {
        order: selected,
        mode: SelectionMode::Diversified { lambda },
        underrun,
    }
}
