// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Selection invariants over random relevance vectors and embeddings.

use proptest::prelude::*;

use paperank::util::vector::l2_normalize;
use paperank::{mmr_select, rank_by_relevance, select, Embedding, SimilarityMatrix};

// ============================================================================
// STRATEGIES
// ============================================================================

/// `n` unit-length embeddings of dimension 8, plus `n` relevance scores.
fn inputs_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<Embedding>)> {
    (1usize..24).prop_flat_map(|n| {
        (
            prop::collection::vec(-10.0f64..10.0, n),
            prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 8), n),
        )
            .prop_map(|(relevance, mut embeddings)| {
                for e in &mut embeddings {
                    // Keep every vector away from zero so normalization is meaningful.
                    e[0] += 2.0;
                    l2_normalize(e);
                }
                (relevance, embeddings)
            })
    })
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_selection_is_permutation(
        (relevance, embeddings) in inputs_strategy(),
        lambda in 0.0f64..=1.0,
    ) {
        let selection = select(&relevance, &embeddings, lambda, 10.0).unwrap();
        prop_assert!(selection.underrun.is_none());
        prop_assert!(is_permutation(&selection.indices(), relevance.len()));
    }

    #[test]
    fn prop_lambda_zero_is_descending_sort(
        (relevance, embeddings) in inputs_strategy(),
    ) {
        let selection = select(&relevance, &embeddings, 0.0, 10.0).unwrap();
        let scores: Vec<f64> = selection.order.iter().map(|&(_, s)| s).collect();
        for pair in scores.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
        prop_assert_eq!(selection.indices(), rank_by_relevance(&relevance).indices());
    }

    #[test]
    fn prop_first_pick_is_most_relevant(
        (relevance, embeddings) in inputs_strategy(),
        lambda in 0.01f64..=1.0,
    ) {
        let selection = select(&relevance, &embeddings, lambda, 10.0).unwrap();
        let best = relevance.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let first = selection.order[0].0;
        prop_assert_eq!(relevance[first], best);
    }

    #[test]
    fn prop_mmr_scores_never_exceed_weighted_relevance(
        (relevance, embeddings) in inputs_strategy(),
        lambda in 0.01f64..=1.0,
    ) {
        // Dot products of unit vectors are within [-1, 1], so the penalty can
        // turn into a bonus of at most (1 − λ)·scale.
        let sim = SimilarityMatrix::dot(&embeddings, &embeddings).unwrap();
        let selection = mmr_select(&relevance, &sim, lambda, 10.0);
        for &(idx, score) in &selection.order {
            prop_assert!(score <= lambda * relevance[idx] + (1.0 - lambda) * 10.0 + 1e-6);
        }
    }

    #[test]
    fn prop_selection_is_deterministic(
        (relevance, embeddings) in inputs_strategy(),
        lambda in 0.0f64..=1.0,
    ) {
        let a = select(&relevance, &embeddings, lambda, 10.0).unwrap();
        let b = select(&relevance, &embeddings, lambda, 10.0).unwrap();
        prop_assert_eq!(a.order, b.order);
    }
}
