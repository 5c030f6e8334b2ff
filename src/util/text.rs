// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for the local embedders.

/// Lowercase and collapse whitespace.
///
/// - "Graph  Neural\nNetworks" → "graph neural networks"
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split normalized text into alphanumeric tokens of at least two characters.
///
/// Underscores stay inside tokens so identifiers like `max_pool` survive.
/// Single characters are dropped; they carry almost no topical signal.
pub fn tokenize(value: &str) -> Vec<String> {
    normalize(value)
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}
