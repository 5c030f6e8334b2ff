// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The embedding seam: text in, vectors out.
//!
//! Ranking never cares where vectors come from. It needs two things from a
//! provider: encode a batch of texts (one vector per text, same order), and
//! compare two batches of vectors. [`Embedder`] captures exactly that, with
//! cosine similarity as the default comparison.
//!
//! Two local providers ship with the crate so the CLI and tests run without a
//! model server:
//!
//! | Model id              | Provider              | Notes                          |
//! |-----------------------|-----------------------|--------------------------------|
//! | `hash`, `hash-<dims>` | [`HashEmbedder`]      | Feature-hashed bag of words    |
//! | `precomputed:<path>`  | [`PrecomputedEmbedder`] | Vectors from a JSON table    |
//!
//! Anything else goes through [`Embedder`] directly: implement the trait for
//! your backend and pass it to [`rerank`](crate::rerank).

mod hash;
mod precomputed;

pub use hash::{HashEmbedder, DEFAULT_HASH_DIMS};
pub use precomputed::PrecomputedEmbedder;

use thiserror::Error;

use crate::matrix::SimilarityMatrix;
use crate::types::Embedding;

/// Largest dimension accepted for `hash-<dims>` model ids.
pub const MAX_HASH_DIMS: usize = 65_536;

/// Failures reported by an embedding provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    #[error("cannot encode an empty batch")]
    EmptyBatch,

    #[error("text at batch position {index} is empty")]
    EmptyText { index: usize },

    #[error("unknown embedding model '{0}'")]
    UnknownModel(String),

    #[error("no precomputed vector for text '{preview}'")]
    MissingVector { preview: String },

    #[error("expected {expected} dimensions, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("provider returned {got} vectors for {expected} texts")]
    CountMismatch { expected: usize, got: usize },

    #[error("similarity matrix should be {}x{}, got {got_len} cells", expected.0, expected.1)]
    ShapeMismatch {
        expected: (usize, usize),
        got_len: usize,
    },

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// A text embedding backend.
pub trait Embedder {
    /// Identifier this provider answers to (matched against the configured model).
    fn model_id(&self) -> &str;

    /// One vector per text, in input order. Empty batches are an error.
    fn encode(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError>;

    /// Pairwise similarity, shape `(a.len(), b.len())`.
    fn similarity(&self, a: &[Embedding], b: &[Embedding]) -> Result<SimilarityMatrix, EmbedError> {
        SimilarityMatrix::cosine(a, b)
    }
}

impl<E: Embedder + ?Sized> Embedder for Box<E> {
    fn model_id(&self) -> &str {
        (**self).model_id()
    }

    fn encode(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError> {
        (**self).encode(texts)
    }

    fn similarity(&self, a: &[Embedding], b: &[Embedding]) -> Result<SimilarityMatrix, EmbedError> {
        (**self).similarity(a, b)
    }
}

/// Resolve a model id to one of the bundled providers.
///
/// - `hash` → [`HashEmbedder`] with [`DEFAULT_HASH_DIMS`] buckets
/// - `hash-<dims>` → [`HashEmbedder`] with `dims` buckets
/// - `precomputed:<path>` → [`PrecomputedEmbedder`] loaded from `path`
pub fn load_embedder(model_id: &str) -> Result<Box<dyn Embedder>, EmbedError> {
    if model_id == "hash" {
        return Ok(Box::new(HashEmbedder::named(DEFAULT_HASH_DIMS, model_id)));
    }

    if let Some(dims) = model_id.strip_prefix("hash-") {
        return match dims.parse::<usize>() {
            Ok(dims) if (1..=MAX_HASH_DIMS).contains(&dims) => {
                Ok(Box::new(HashEmbedder::new(dims)))
            }
            _ => Err(EmbedError::UnknownModel(model_id.to_string())),
        };
    }

    if let Some(path) = model_id.strip_prefix("precomputed:") {
        if path.is_empty() {
            return Err(EmbedError::UnknownModel(model_id.to_string()));
        }
        return Ok(Box::new(PrecomputedEmbedder::from_json_file(path)?));
    }

    Err(EmbedError::UnknownModel(model_id.to_string()))
}

/// Check a provider kept its one-vector-per-text promise.
pub(crate) fn check_batch(expected: usize, got: &[Embedding]) -> Result<(), EmbedError> {
    if got.len() == expected {
        Ok(())
    } else {
        Err(EmbedError::CountMismatch {
            expected,
            got: got.len(),
        })
    }
}
