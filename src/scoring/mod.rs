// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how candidates get their relevance numbers.
//!
//! Two pieces. [`temporal`] turns corpus recency into weights, and
//! [`relevance`] folds candidate-to-corpus similarity through those weights
//! into one score per candidate. Recent library additions speak loudest, but
//! the decay is logarithmic, so a paper you saved years ago still counts.

pub mod relevance;
pub mod temporal;

pub use relevance::{relevance_scores, score_candidates, RELEVANCE_SCALE};
pub use temporal::{decay, sort_by_recency, temporal_weights};
