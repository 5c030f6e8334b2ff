// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pairwise similarity tables.
//!
//! A [`SimilarityMatrix`] is built once and then only read. Rows are
//! candidates; columns are whatever the candidates are being compared with
//! (corpus items for relevance, other candidates for diversity).
//!
//! With the `parallel` feature, rows are filled on the rayon pool. Each cell
//! is an independent dot product, so the parallel and sequential builds are
//! bit-identical.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::embedding::EmbedError;
use crate::types::Embedding;
use crate::util::vector;

/// Row-major `rows × cols` table of similarity scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Wrap row-major data. `data.len()` must equal `rows * cols`.
    pub fn from_raw(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, EmbedError> {
        if data.len() != rows * cols {
            return Err(EmbedError::ShapeMismatch {
                expected: (rows, cols),
                got_len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows. Ragged input is rejected.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, EmbedError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != n_cols) {
            return Err(EmbedError::DimensionMismatch {
                expected: n_cols,
                got: bad.len(),
            });
        }
        let data: Vec<f32> = rows.into_iter().flatten().collect();
        Self::from_raw(n_rows, n_cols, data)
    }

    /// Cosine similarity between every vector in `a` and every vector in `b`.
    pub fn cosine(a: &[Embedding], b: &[Embedding]) -> Result<Self, EmbedError> {
        Self::pairwise(a, b, vector::cosine)
    }

    /// Raw dot products between every vector in `a` and every vector in `b`.
    ///
    /// For unit-length embeddings this equals cosine similarity.
    pub fn dot(a: &[Embedding], b: &[Embedding]) -> Result<Self, EmbedError> {
        Self::pairwise(a, b, vector::dot)
    }

    fn pairwise(
        a: &[Embedding],
        b: &[Embedding],
        sim: fn(&[f32], &[f32]) -> f32,
    ) -> Result<Self, EmbedError> {
        check_dimensions(a, b)?;

        let rows = a.len();
        let cols = b.len();
        let mut data = vec![0.0f32; rows * cols];
        if cols == 0 {
            return Ok(Self { rows, cols, data });
        }

        let fill = |(i, row): (usize, &mut [f32])| {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = sim(&a[i], &b[j]);
            }
        };

        #[cfg(feature = "parallel")]
        data.par_chunks_mut(cols).enumerate().for_each(fill);
        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(cols).enumerate().for_each(fill);

        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Similarity at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// One row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

/// Every vector across both sets must share one dimension.
fn check_dimensions(a: &[Embedding], b: &[Embedding]) -> Result<(), EmbedError> {
    let Some(expected) = a.iter().chain(b).map(Vec::len).next() else {
        return Ok(());
    };
    match a.iter().chain(b).map(Vec::len).find(|&len| len != expected) {
        Some(got) => Err(EmbedError::DimensionMismatch { expected, got }),
        None => Ok(()),
    }
}
