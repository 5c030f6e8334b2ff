// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking call.
//!
//! Corpus items are the reader's existing library, candidates are the new
//! arrivals, and a [`Ranking`] is what comes back. The engine only ever reads
//! corpus items. Candidates are moved into their [`RankedCandidate`] record,
//! so the caller gets the same values back, reordered and scored, rather than
//! copies.
//!
//! # Invariants
//!
//! - **CorpusItem**: `date_added` parses as `YYYY-MM-DDTHH:MM:SSZ`. Checked at
//!   ranking time; a bad timestamp fails the whole call.
//! - **Ranking**: `entries` holds each input candidate exactly once, unless
//!   `underrun` is set, in which case it holds a duplicate-free prefix of the
//!   selection.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout for corpus acquisition dates (`2024-01-01T00:00:00Z`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A fixed-dimension embedding vector.
pub type Embedding = Vec<f32>;

/// A document from the reference corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusItem {
    pub id: String,
    /// Text fed to the embedding provider (usually the abstract).
    pub text: String,
    /// Acquisition timestamp, kept raw until ranking parses it.
    pub date_added: String,
}

impl CorpusItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>, date_added: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            date_added: date_added.into(),
        }
    }

    /// Parse the acquisition timestamp.
    pub fn added_at(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        parse_timestamp(&self.date_added)
    }
}

/// Parse a `YYYY-MM-DDTHH:MM:SSZ` timestamp as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}

/// A new document waiting to be ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Text fed to the embedding provider (usually the summary).
    pub text: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A candidate together with the score that placed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub score: f64,
}

/// Which selection path produced the scores.
///
/// Relevance-only scores and MMR scores live on different scales. Neither is
/// comparable with scores from a run that used a different λ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum SelectionMode {
    /// Plain descending sort by relevance (λ = 0 or at most one candidate).
    RelevanceOnly,
    /// Greedy maximal marginal relevance with the given λ.
    Diversified { lambda: f64 },
}

/// Diversity selection stopped before every candidate was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionUnderrun {
    pub expected: usize,
    pub selected: usize,
}

impl std::fmt::Display for SelectionUnderrun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "diversity selection placed {} of {} candidates",
            self.selected, self.expected
        )
    }
}

/// The result of one `rerank` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    /// Candidates in rank order (first = rank 1).
    pub entries: Vec<RankedCandidate>,
    pub mode: SelectionMode,
    /// Set when the selection came back short. The partial ranking is kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underrun: Option<SelectionUnderrun>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every input candidate made it into the ranking.
    pub fn is_complete(&self) -> bool {
        self.underrun.is_none()
    }

    /// Candidate ids in rank order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.candidate.id.as_str()).collect()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    /// Drop everything past the first `k` entries.
    pub fn truncate(&mut self, k: usize) {
        self.entries.truncate(k);
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.entries.into_iter().map(|e| e.candidate).collect()
    }
}
