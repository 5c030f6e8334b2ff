// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus timestamp handling.
//!
//! Arbitrary strings in `dateAdded` must either sort cleanly or fail the
//! whole ordering with the offending item named. Never a panic, never a
//! silently dropped item.

#![no_main]

use libfuzzer_sys::fuzz_target;
use paperank::{sort_by_recency, CorpusItem, RerankError};

fuzz_target!(|stamps: Vec<String>| {
    let corpus: Vec<CorpusItem> = stamps
        .iter()
        .take(128)
        .enumerate()
        .map(|(i, ts)| CorpusItem::new(format!("z{}", i), "text", ts.as_str()))
        .collect();

    match sort_by_recency(&corpus) {
        Ok(sorted) => {
            assert_eq!(sorted.len(), corpus.len());
            for pair in sorted.windows(2) {
                let newer = pair[0].added_at().expect("sorted items parse");
                let older = pair[1].added_at().expect("sorted items parse");
                assert!(newer >= older);
            }
        }
        Err(RerankError::MalformedCorpusEntry { id, .. }) => {
            let item = corpus.iter().find(|item| item.id == id).expect("named item exists");
            assert!(item.added_at().is_err());
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
});
