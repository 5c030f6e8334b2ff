// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking configuration.
//!
//! Four knobs, all with defaults:
//!
//! | Key               | Default    | Valid range | Meaning                              |
//! |-------------------|------------|-------------|--------------------------------------|
//! | `model`           | `hash-256` | non-empty   | embedding model id                   |
//! | `diversityLambda` | 0.3        | [0, 1]      | relevance vs. redundancy trade-off   |
//! | `relevanceScale`  | 10.0       | > 0, finite | multiplier on weighted similarity    |
//! | `diversityScale`  | 10.0       | > 0, finite | multiplier on the redundancy penalty |
//!
//! λ = 0 turns diversity off entirely (plain relevance sort). λ = 1 keeps the
//! MMR code path but zeroes its penalty term.
//!
//! The two scales default to the same value so that the redundancy penalty
//! and the relevance score live on the same footing. They are independent
//! settings: raising `relevanceScale` alone makes the ranking less diverse.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::RerankError;
use crate::scoring::RELEVANCE_SCALE;

/// Bundled hashing embedder with 256 buckets.
pub const DEFAULT_MODEL: &str = "hash-256";

/// Recommended diversity weight.
pub const DEFAULT_DIVERSITY_LAMBDA: f64 = 0.3;

/// Default multiplier on max-similarity-to-selected in the MMR score.
pub const DEFAULT_DIVERSITY_SCALE: f64 = 10.0;

/// Failures loading a config file. Value checks happen in [`RerankConfig::validate`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RerankConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_lambda")]
    pub diversity_lambda: f64,
    #[serde(default = "default_relevance_scale")]
    pub relevance_scale: f64,
    #[serde(default = "default_diversity_scale")]
    pub diversity_scale: f64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_lambda() -> f64 {
    DEFAULT_DIVERSITY_LAMBDA
}

fn default_relevance_scale() -> f64 {
    RELEVANCE_SCALE
}

fn default_diversity_scale() -> f64 {
    DEFAULT_DIVERSITY_SCALE
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            diversity_lambda: DEFAULT_DIVERSITY_LAMBDA,
            relevance_scale: RELEVANCE_SCALE,
            diversity_scale: DEFAULT_DIVERSITY_SCALE,
        }
    }
}

impl RerankConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set λ. Not clamped: out-of-range values are rejected by [`validate`](Self::validate).
    #[must_use]
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.diversity_lambda = lambda;
        self
    }

    #[must_use]
    pub fn with_relevance_scale(mut self, scale: f64) -> Self {
        self.relevance_scale = scale;
        self
    }

    #[must_use]
    pub fn with_diversity_scale(mut self, scale: f64) -> Self {
        self.diversity_scale = scale;
        self
    }

    /// Reject values the engine cannot rank with.
    pub fn validate(&self) -> Result<(), RerankError> {
        if self.model.trim().is_empty() {
            return Err(RerankError::InvalidConfiguration(
                "model identifier is empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.diversity_lambda) {
            return Err(RerankError::InvalidConfiguration(format!(
                "diversity lambda must be within [0, 1], got {}",
                self.diversity_lambda
            )));
        }
        check_scale("relevance scale", self.relevance_scale)?;
        check_scale("diversity scale", self.diversity_scale)?;
        Ok(())
    }
}

fn check_scale(name: &str, value: f64) -> Result<(), RerankError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RerankError::InvalidConfiguration(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}
