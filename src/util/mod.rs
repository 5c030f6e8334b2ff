// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small numeric and text helpers shared by the providers and the scorers.
//!
//! Vector math for similarity matrices, and the tokenizer the hashing
//! embedder uses. Nothing here knows about corpora or candidates.

pub mod text;
pub mod vector;
