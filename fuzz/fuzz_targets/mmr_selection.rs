// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for diversity selection invariants.
//!
//! Whatever scores and vectors come in, including NaN and infinities, the
//! selection must never place a candidate twice or invent one. A short
//! selection is allowed only when it says so.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use paperank::{select, SelectionMode};

#[derive(Debug, Arbitrary)]
struct Input {
    relevance: Vec<f64>,
    components: Vec<f32>,
    dims: u8,
    lambda: f64,
}

fuzz_target!(|input: Input| {
    let dims = (input.dims % 16) as usize + 1;
    let n = input.relevance.len().min(64);
    let relevance = &input.relevance[..n];

    // One vector per candidate, cycling through whatever components we got.
    let embeddings: Vec<Vec<f32>> = (0..n)
        .map(|i| {
            (0..dims)
                .map(|d| {
                    input
                        .components
                        .get((i * dims + d) % input.components.len().max(1))
                        .copied()
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    let lambda = if input.lambda.is_finite() {
        input.lambda.abs().fract()
    } else {
        0.5
    };

    let Ok(selection) = select(relevance, &embeddings, lambda, 10.0) else {
        return;
    };

    // INVARIANT 1: no index out of range, none repeated
    let mut seen = vec![false; n];
    for &(idx, _) in &selection.order {
        assert!(idx < n, "index {} out of range {}", idx, n);
        assert!(!seen[idx], "index {} selected twice", idx);
        seen[idx] = true;
    }

    // INVARIANT 2: short selections are always reported
    match selection.underrun {
        None => assert_eq!(selection.order.len(), n),
        Some(underrun) => {
            assert_eq!(underrun.expected, n);
            assert_eq!(underrun.selected, selection.order.len());
            assert!(underrun.selected < n);
        }
    }

    // INVARIANT 3: the relevance-only path never comes up short
    if selection.mode == SelectionMode::RelevanceOnly {
        assert!(selection.underrun.is_none());
    }
});
