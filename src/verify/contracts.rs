// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for weights, matrices, and selections.
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure** in tests and debug runs
//!
//! | Contract                    | Invariant                                      |
//! |-----------------------------|------------------------------------------------|
//! | `check_weights_normalized`  | weights ≥ 0, sum to 1, non-increasing in rank  |
//! | `check_matrix_shape`        | provider matrix is `rows × cols`               |
//! | `check_selection`           | selection is a permutation (or clean prefix)   |

use crate::config::{DEFAULT_DIVERSITY_LAMBDA, DEFAULT_DIVERSITY_SCALE};
use crate::matrix::SimilarityMatrix;
use crate::scoring::RELEVANCE_SCALE;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // Default λ must be a valid diversity weight and must actually diversify.
    assert!(DEFAULT_DIVERSITY_LAMBDA > 0.0);
    assert!(DEFAULT_DIVERSITY_LAMBDA <= 1.0);

    // Both scales must be positive or the penalty flips into a bonus.
    assert!(RELEVANCE_SCALE > 0.0);
    assert!(DEFAULT_DIVERSITY_SCALE > 0.0);
};

/// Tolerance for the weight sum.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// ============================================================================
// WEIGHT CONTRACTS
// ============================================================================

/// Check temporal weights: non-negative, non-increasing, summing to 1.
///
/// # Panics (debug builds only)
/// Panics if any weight is negative, any weight exceeds its predecessor, or
/// a non-empty vector does not sum to 1 within [`WEIGHT_SUM_TOLERANCE`].
#[inline]
pub fn check_weights_normalized(weights: &[f64]) {
    if weights.is_empty() {
        return;
    }

    for (i, &w) in weights.iter().enumerate() {
        debug_assert!(
            w >= 0.0,
            "Contract violation: weights[{}] = {} is negative",
            i,
            w
        );
    }

    for i in 1..weights.len() {
        debug_assert!(
            weights[i] <= weights[i - 1],
            "Contract violation: weights[{}] = {} > weights[{}] = {}",
            i,
            weights[i],
            i - 1,
            weights[i - 1]
        );
    }

    let total: f64 = weights.iter().sum();
    debug_assert!(
        (total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE,
        "Contract violation: weights sum to {}, expected 1",
        total
    );
}

// ============================================================================
// MATRIX CONTRACTS
// ============================================================================

/// Check a similarity matrix has the shape the caller asked for.
#[inline]
pub fn check_matrix_shape(matrix: &SimilarityMatrix, rows: usize, cols: usize) {
    debug_assert_eq!(
        matrix.shape(),
        (rows, cols),
        "Contract violation: similarity matrix is {:?}, expected ({}, {})",
        matrix.shape(),
        rows,
        cols
    );
}

// ============================================================================
// SELECTION CONTRACTS
// ============================================================================

/// Check a selection order over `n` candidates.
///
/// A complete selection must be a permutation of `0..n`. An incomplete one
/// must still be duplicate-free and in bounds.
#[inline]
pub fn check_selection(order: &[usize], n: usize, complete: bool) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut seen = vec![false; n];
    for (rank, &idx) in order.iter().enumerate() {
        debug_assert!(
            idx < n,
            "Contract violation: selection[{}] = {} out of bounds for {} candidates",
            rank,
            idx,
            n
        );
        if idx < n {
            debug_assert!(
                !seen[idx],
                "Contract violation: candidate {} selected twice (rank {})",
                idx,
                rank
            );
            seen[idx] = true;
        }
    }

    if complete {
        debug_assert_eq!(
            order.len(),
            n,
            "Contract violation: complete selection has {} of {} candidates",
            order.len(),
            n
        );
    }
}
