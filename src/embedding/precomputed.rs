// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vectors computed elsewhere, looked up by text.
//!
//! Lets the ranking run against real model output without linking the model:
//! embed the texts once with whatever backend you like, dump a table, and
//! point `precomputed:<path>` at it.
//!
//! ```json
//! {
//!   "model": "google/embeddinggemma-300m",
//!   "vectors": {
//!     "We propose a sparse attention kernel...": [0.012, -0.034, ...]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{EmbedError, Embedder};
use crate::types::Embedding;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VectorTable {
    /// Model that produced the vectors. Informational only.
    #[serde(default)]
    model: Option<String>,
    vectors: HashMap<String, Embedding>,
}

/// Text → vector lookup table.
#[derive(Debug, Clone)]
pub struct PrecomputedEmbedder {
    model_id: String,
    source_model: Option<String>,
    dims: usize,
    vectors: HashMap<String, Embedding>,
}

impl PrecomputedEmbedder {
    /// Build from an in-memory table. All vectors must share one dimension.
    pub fn new(
        model_id: impl Into<String>,
        vectors: HashMap<String, Embedding>,
    ) -> Result<Self, EmbedError> {
        let dims = vectors.values().next().map_or(0, Vec::len);
        if let Some(bad) = vectors.values().find(|v| v.len() != dims) {
            return Err(EmbedError::DimensionMismatch {
                expected: dims,
                got: bad.len(),
            });
        }
        Ok(Self {
            model_id: model_id.into(),
            source_model: None,
            dims,
            vectors,
        })
    }

    /// Load a JSON vector table. The embedder answers to `precomputed:<path>`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EmbedError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            EmbedError::Unavailable(format!("failed to read {}: {}", path.display(), e))
        })?;
        let table: VectorTable = serde_json::from_str(&raw).map_err(|e| {
            EmbedError::Unavailable(format!("invalid vector table {}: {}", path.display(), e))
        })?;

        let mut embedder = Self::new(format!("precomputed:{}", path.display()), table.vectors)?;
        embedder.source_model = table.model;
        Ok(embedder)
    }

    /// Model named in the table header, if any.
    pub fn source_model(&self) -> Option<&str> {
        self.source_model.as_deref()
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl Embedder for PrecomputedEmbedder {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn encode(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedError> {
        if texts.is_empty() {
            return Err(EmbedError::EmptyBatch);
        }
        texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(*text)
                    .cloned()
                    .ok_or_else(|| EmbedError::MissingVector {
                        preview: preview(text),
                    })
            })
            .collect()
    }
}

/// First 40 characters, enough to find the text in a log.
fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(40).collect();
    if text.chars().count() > 40 {
        out.push('…');
    }
    out
}
