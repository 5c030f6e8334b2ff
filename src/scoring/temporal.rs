// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recency weights for corpus items.
//!
//! Item at recency rank `i` (0 = newest) gets weight proportional to
//!
//! ```text
//! 1 / (1 + log10(i + 1))
//! ```
//!
//! normalized so all weights sum to 1. The newest item gets raw weight 1, the
//! 10th gets 0.5, the 100th gets 0.33. Old items fade but never drop out.
//!
//! # Invariants
//!
//! - `weights.len() == n`
//! - every weight is positive and `sum(weights) == 1` (±1e-6), for `n > 0`
//! - weights are non-increasing in rank

use chrono::{DateTime, Utc};

use crate::error::RerankError;
use crate::types::CorpusItem;
use crate::verify::contracts::check_weights_normalized;

/// Un-normalized decay for recency rank `rank`.
#[inline]
pub fn decay(rank: usize) -> f64 {
    1.0 / (1.0 + ((rank + 1) as f64).log10())
}

/// Normalized recency weights for a newest-first corpus of size `n`.
///
/// `n = 0` gives an empty vector: no corpus, no relevance signal.
pub fn temporal_weights(n: usize) -> Vec<f64> {
    let mut weights: Vec<f64> = (0..n).map(decay).collect();
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for w in &mut weights {
            *w /= total;
        }
    }
    check_weights_normalized(&weights);
    weights
}

/// Parse every timestamp and order the corpus newest-first.
///
/// The sort is stable: items added at the same second keep their input order.
/// One unparseable timestamp fails the whole call, since skipping the item
/// would silently shift every older item's weight.
pub fn sort_by_recency(corpus: &[CorpusItem]) -> Result<Vec<&CorpusItem>, RerankError> {
    let mut dated: Vec<(DateTime<Utc>, &CorpusItem)> = corpus
        .iter()
        .map(|item| {
            item.added_at()
                .map(|ts| (ts, item))
                .map_err(|e| RerankError::MalformedCorpusEntry {
                    id: item.id.clone(),
                    value: item.date_added.clone(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<_, _>>()?;

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dated.into_iter().map(|(_, item)| item).collect())
}
