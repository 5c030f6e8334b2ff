// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::HashMap;

use crate::embedding::{EmbedError, Embedder};
use crate::types::{Candidate, CorpusItem, Embedding};

/// Create a corpus item.
pub fn make_corpus_item(id: &str, text: &str, date_added: &str) -> CorpusItem {
    CorpusItem::new(id, text, date_added)
}

/// Create a candidate with a title derived from its id.
pub fn make_candidate(id: &str, text: &str) -> Candidate {
    Candidate::new(id, text).with_title(format!("Paper {}", id))
}

/// Deterministic stub provider: every known text maps to a fixed vector.
///
/// Unknown texts fail with [`EmbedError::MissingVector`], the same way a real
/// provider would refuse input it cannot handle.
#[derive(Debug, Clone, Default)]
pub struct FixedEmbedder {
    model_id: String,
    vectors: HashMap<String, Embedding>,
}

impl FixedEmbedder {
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            vectors: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, text: &str, vector: Embedding) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

impl Embedder for FixedEmbedder {
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
                        preview: (*text).to_string(),
                    })
            })
            .collect()
    }
}
