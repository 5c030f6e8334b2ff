// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Feature-hashing embedder.
//!
//! Each token lands in one of `dims` buckets via FNV-1a, bucket counts are
//! L2-normalized, and cosine similarity becomes a cheap lexical-overlap
//! score. No model files, fully deterministic, good enough to exercise the
//! whole ranking pipeline and to rank small libraries by shared vocabulary.

use super::{EmbedError, Embedder};
use crate::types::Embedding;
use crate::util::{text, vector};

/// Bucket count used by the plain `hash` model id.
pub const DEFAULT_HASH_DIMS: usize = 256;

/// Bag-of-words embedder with hashed buckets.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dims: usize,
    model_id: String,
}

impl HashEmbedder {
    /// Embedder answering to `hash-<dims>`. `dims` is clamped to at least 1.
    pub fn new(dims: usize) -> Self {
        let dims = dims.max(1);
        Self::named(dims, &format!("hash-{}", dims))
    }

    pub(crate) fn named(dims: usize, model_id: &str) -> Self {
        Self {
            dims: dims.max(1),
            model_id: model_id.to_string(),
        }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    fn embed(&self, text: &str) -> Embedding {
        let mut v = vec![0.0f32; self.dims];
        for token in text::tokenize(text) {
            let bucket = (fnv1a_64(token.as_bytes()) % self.dims as u64) as usize;
            v[bucket] += 1.0;
        }
        vector::l2_normalize(&mut v);
        v
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_DIMS)
    }
}

impl Embedder for HashEmbedder {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn encode(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError> {
        if texts.is_empty() {
            return Err(EmbedError::EmptyBatch);
        }
        if let Some(index) = texts.iter().position(|t| t.trim().is_empty()) {
            return Err(EmbedError::EmptyText { index });
        }
        Ok(texts.iter().map(|t| self.embed(t)).collect())
    }
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;
    bytes.iter().fold(OFFSET, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}
