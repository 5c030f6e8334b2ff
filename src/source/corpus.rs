// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{parse_error, read, SourceError};
use crate::types::CorpusItem;

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusRecord {
    Flat(CorpusItem),
    Zotero(ZoteroItem),
}

/// One entry of a Zotero library export.
#[derive(Deserialize)]
struct ZoteroItem {
    key: String,
    data: ZoteroData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZoteroData {
    #[serde(default)]
    abstract_note: String,
    date_added: String,
}

impl CorpusRecord {
    fn into_item(self) -> CorpusItem {
        match self {
            CorpusRecord::Flat(item) => item,
            CorpusRecord::Zotero(item) => {
                CorpusItem::new(item.key, item.data.abstract_note, item.data.date_added)
            }
        }
    }
}

/// Parse a corpus JSON array. Items with blank text are dropped.
pub fn parse_corpus(raw: &str) -> Result<Vec<CorpusItem>, serde_json::Error> {
    let records: Vec<CorpusRecord> = serde_json::from_str(raw)?;
    let total = records.len();
    let items: Vec<CorpusItem> = records
        .into_iter()
        .map(CorpusRecord::into_item)
        .filter(|item| !item.text.trim().is_empty())
        .collect();

    if items.len() < total {
        info!(
            skipped = total - items.len(),
            kept = items.len(),
            "skipped corpus items without text"
        );
    }
    Ok(items)
}

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<CorpusItem>, SourceError> {
    let path = path.as_ref();
    parse_corpus(&read(path)?).map_err(parse_error(path))
}
