// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors a ranking call can fail with.
//!
//! Nothing here is retried. Provider failures pass through untouched so the
//! caller can decide whether the embedding backend deserves another try.
//! Short selections are not errors; see [`SelectionUnderrun`](crate::SelectionUnderrun).

use thiserror::Error;

use crate::embedding::EmbedError;

#[derive(Debug, Error)]
pub enum RerankError {
    /// The embedding provider could not encode or compare texts.
    #[error("embedding provider failed: {0}")]
    Provider(#[from] EmbedError),

    /// A corpus item's timestamp did not parse. Dropping the item would shift
    /// every later item's recency rank, so the whole call fails instead.
    #[error("corpus item '{id}' has malformed timestamp '{value}': {reason}")]
    MalformedCorpusEntry {
        id: String,
        value: String,
        reason: String,
    },

    /// Rejected before any provider call is made.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for ranking operations.
pub type Result<T> = std::result::Result<T, RerankError>;
