// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recency weights and corpus ordering.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use crate::common::make_corpus_item;
use paperank::{sort_by_recency, temporal_weights, CorpusItem};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Timestamps within a few years, in the corpus layout.
fn timestamp_strategy() -> impl Strategy<Value = String> {
    (0i64..4 * 365 * 24 * 3600).prop_map(|offset| {
        let base = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        (base + Duration::seconds(offset))
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    })
}

fn corpus_strategy() -> impl Strategy<Value = Vec<CorpusItem>> {
    prop::collection::vec(timestamp_strategy(), 0..40).prop_map(|stamps| {
        stamps
            .into_iter()
            .enumerate()
            .map(|(i, ts)| make_corpus_item(&format!("z{}", i), "text", &ts))
            .collect()
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_weights_sum_to_one(n in 1usize..2000) {
        let weights = temporal_weights(n);
        prop_assert_eq!(weights.len(), n);
        let total: f64 = weights.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "sum = {}", total);
    }

    #[test]
    fn prop_weights_positive_and_non_increasing(n in 1usize..500) {
        let weights = temporal_weights(n);
        prop_assert!(weights.iter().all(|&w| w > 0.0));
        for pair in weights.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn prop_recency_sort_is_newest_first(corpus in corpus_strategy()) {
        let sorted = sort_by_recency(&corpus).unwrap();
        prop_assert_eq!(sorted.len(), corpus.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].added_at().unwrap() >= pair[1].added_at().unwrap());
        }
    }

    #[test]
    fn prop_recency_sort_keeps_input_order_on_ties(
        corpus in corpus_strategy(),
        dup in 0usize..40,
    ) {
        prop_assume!(!corpus.is_empty());
        // Give the last item the same timestamp as another one.
        let mut corpus = corpus;
        let twin = dup % corpus.len();
        let last = corpus.len() - 1;
        corpus[last].date_added = corpus[twin].date_added.clone();

        let sorted = sort_by_recency(&corpus).unwrap();
        let pos = |id: &str| sorted.iter().position(|item| item.id == id).unwrap();
        if twin != last {
            prop_assert!(pos(&corpus[twin].id) < pos(&corpus[last].id));
        }
    }
}
