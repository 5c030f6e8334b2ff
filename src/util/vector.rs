// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dense vector primitives.
//!
//! Accumulation happens in `f32`, matching what the embedding providers hand
//! back. Callers that need `f64` precision widen after the dot product.

/// Dot product over the shared prefix of two vectors.
///
/// Mismatched lengths are a provider bug; [`crate::SimilarityMatrix`] checks
/// dimensions before calling this, so here we only guard against panics.
#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
#[inline]
pub fn norm(a: &[f32]) -> f32 {
    dot(a, a).sqrt()
}

/// Cosine similarity. Zero vectors are similar to nothing (returns 0).
#[inline]
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let denom = norm(a) * norm(b);
    if denom > 0.0 {
        dot(a, b) / denom
    } else {
        0.0
    }
}

/// Scale to unit length in place. Zero vectors stay zero.
pub fn l2_normalize(v: &mut [f32]) {
    let n = norm(v);
    if n > 0.0 {
        for x in v.iter_mut() {
            *x /= n;
        }
    }
}
