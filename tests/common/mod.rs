// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;

use paperank::{Ranking, RerankConfig};
use tempfile::NamedTempFile;

// Re-export canonical test utilities from paperank::testing
pub use paperank::testing::{make_candidate, make_corpus_item, FixedEmbedder};

// ============================================================================
// FIXTURES
// ============================================================================

/// Three orthogonal topics plus a near neighbour of `ml`.
pub fn topic_embedder() -> FixedEmbedder {
    FixedEmbedder::new("fixed")
        .with("ml", vec![1.0, 0.0, 0.0])
        .with("bio", vec![0.0, 1.0, 0.0])
        .with("law", vec![0.0, 0.0, 1.0])
        .with("ml-ish", vec![0.8, 0.6, 0.0])
}

pub fn config(lambda: f64) -> RerankConfig {
    RerankConfig::new("fixed").with_lambda(lambda)
}

/// Write `contents` to a temp file that lives as long as the handle.
pub fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// A complete ranking holds every candidate id exactly once.
pub fn assert_ranking_well_formed(ranking: &Ranking, expected_ids: &[&str]) {
    assert!(ranking.is_complete(), "unexpected underrun: {:?}", ranking.underrun);
    assert_eq!(ranking.len(), expected_ids.len());

    let got: HashSet<&str> = ranking.ids().into_iter().collect();
    let want: HashSet<&str> = expected_ids.iter().copied().collect();
    assert_eq!(got, want, "ranking is not a permutation of the input");
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {}, got {}",
        expected,
        actual
    );
}
