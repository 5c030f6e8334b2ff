// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{parse_error, read, SourceError};
use crate::types::Candidate;

#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateRecord {
    Flat(Candidate),
    Arxiv(ArxivPaper),
}

/// A paper as scraped from an arXiv listing.
#[derive(Deserialize)]
struct ArxivPaper {
    #[serde(alias = "entryId", alias = "entry_id")]
    id: String,
    title: String,
    summary: String,
}

impl CandidateRecord {
    fn into_candidate(self) -> Candidate {
        match self {
            CandidateRecord::Flat(candidate) => candidate,
            CandidateRecord::Arxiv(paper) => {
                Candidate::new(paper.id, paper.summary).with_title(paper.title)
            }
        }
    }
}

/// Parse a candidate JSON array. Candidates with blank text are dropped.
pub fn parse_candidates(raw: &str) -> Result<Vec<Candidate>, serde_json::Error> {
    let records: Vec<CandidateRecord> = serde_json::from_str(raw)?;
    let total = records.len();
    let candidates: Vec<Candidate> = records
        .into_iter()
        .map(CandidateRecord::into_candidate)
        .filter(|c| !c.text.trim().is_empty())
        .collect();

    if candidates.len() < total {
        info!(
            skipped = total - candidates.len(),
            kept = candidates.len(),
            "skipped candidates without text"
        );
    }
    Ok(candidates)
}

/// Read and parse a candidates file.
pub fn load_candidates(path: impl AsRef<Path>) -> Result<Vec<Candidate>, SourceError> {
    let path = path.as_ref();
    parse_candidates(&read(path)?).map_err(parse_error(path))
}
