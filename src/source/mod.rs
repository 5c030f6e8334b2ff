// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading corpora and candidates from JSON files.
//!
//! Both loaders accept a JSON array and normalise a couple of common shapes,
//! so exports from a reference manager or a feed scraper can be fed in
//! without a conversion step:
//!
//! | Input    | Flat shape                        | Also accepted                                     |
//! |----------|-----------------------------------|---------------------------------------------------|
//! | corpus   | `{id, text, dateAdded}`           | Zotero: `{key, data: {abstractNote, dateAdded}}`  |
//! | candidate| `{id, title?, text}`              | arXiv: `{entryId \| id, title, summary}`          |
//!
//! Records with blank text are skipped (a reference without an abstract has
//! nothing to embed). Timestamps are *not* checked here; ranking rejects a
//! malformed one for the whole call.

mod candidates;
mod corpus;

pub use candidates::{load_candidates, parse_candidates};
pub use corpus::{load_corpus, parse_corpus};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path) -> impl FnOnce(serde_json::Error) -> SourceError + '_ {
    move |source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    }
}
