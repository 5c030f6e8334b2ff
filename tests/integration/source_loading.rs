// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading corpora and candidates from disk, then ranking them.

use crate::common::{assert_ranking_well_formed, json_file};
use paperank::{
    load_candidates, load_corpus, load_embedder, rerank, RerankConfig, RerankError, SourceError,
};

const ZOTERO_EXPORT: &str = r#"[
    {
        "key": "Q7ZK2M4N",
        "data": {
            "itemType": "journalArticle",
            "title": "Sparse Attention",
            "abstractNote": "We introduce sparse attention patterns for long documents.",
            "dateAdded": "2024-04-02T10:00:00Z"
        }
    },
    {
        "key": "B3X9P0LL",
        "data": {
            "itemType": "book",
            "title": "No Abstract",
            "dateAdded": "2024-04-03T10:00:00Z"
        }
    },
    {
        "key": "H8RT5W1C",
        "data": {
            "itemType": "conferencePaper",
            "title": "Graph Networks",
            "abstractNote": "Graph neural networks for molecular property prediction.",
            "dateAdded": "2022-09-14T16:45:00Z"
        }
    }
]"#;

const ARXIV_PAPERS: &str = r#"[
    {
        "entryId": "http://arxiv.org/abs/2405.00001v1",
        "title": "Long-Context Attention",
        "summary": "Efficient attention for long documents and sequences."
    },
    {
        "entryId": "http://arxiv.org/abs/2405.00002v1",
        "title": "Molecules",
        "summary": "Molecular property prediction with message passing."
    }
]"#;

#[test]
fn test_zotero_and_arxiv_end_to_end() {
    let corpus_file = json_file(ZOTERO_EXPORT);
    let candidates_file = json_file(ARXIV_PAPERS);

    let corpus = load_corpus(corpus_file.path()).unwrap();
    assert_eq!(corpus.len(), 2, "item without abstract should be skipped");

    let candidates = load_candidates(candidates_file.path()).unwrap();
    assert_eq!(candidates[0].title.as_deref(), Some("Long-Context Attention"));

    let config = RerankConfig::new("hash-512");
    let embedder = load_embedder(&config.model).unwrap();
    let ranking = rerank(candidates, &corpus, &embedder, &config).unwrap();

    assert_ranking_well_formed(
        &ranking,
        &[
            "http://arxiv.org/abs/2405.00001v1",
            "http://arxiv.org/abs/2405.00002v1",
        ],
    );
    // The attention paper matches the most recent corpus item.
    assert_eq!(ranking.ids()[0], "http://arxiv.org/abs/2405.00001v1");
}

#[test]
fn test_precomputed_vectors_end_to_end() {
    let vectors = json_file(
        r#"{
            "model": "specter2",
            "vectors": {
                "corpus text": [1.0, 0.0],
                "close": [0.9, 0.1],
                "far": [0.0, 1.0]
            }
        }"#,
    );
    let corpus = json_file(
        r#"[{"id": "z", "text": "corpus text", "dateAdded": "2024-01-01T00:00:00Z"}]"#,
    );
    let candidates = json_file(r#"[{"id": "far", "text": "far"}, {"id": "close", "text": "close"}]"#);

    let model = format!("precomputed:{}", vectors.path().display());
    let embedder = load_embedder(&model).unwrap();
    let ranking = rerank(
        load_candidates(candidates.path()).unwrap(),
        &load_corpus(corpus.path()).unwrap(),
        &embedder,
        &RerankConfig::new(model.clone()),
    )
    .unwrap();

    assert_eq!(ranking.ids(), vec!["close", "far"]);
}

#[test]
fn test_malformed_timestamp_in_file_fails_ranking() {
    let corpus = json_file(
        r#"[
            {"id": "ok", "text": "fine", "dateAdded": "2024-01-01T00:00:00Z"},
            {"id": "bad", "text": "broken", "dateAdded": "01/02/2024"}
        ]"#,
    );
    let corpus = load_corpus(corpus.path()).unwrap();
    let embedder = load_embedder("hash").unwrap();

    let err = rerank(
        vec![paperank::Candidate::new("c", "anything")],
        &corpus,
        &embedder,
        &RerankConfig::new("hash"),
    )
    .unwrap_err();
    match err {
        RerankError::MalformedCorpusEntry { id, value, .. } => {
            assert_eq!(id, "bad");
            assert_eq!(value, "01/02/2024");
        }
        other => panic!("expected MalformedCorpusEntry, got {:?}", other),
    }
}

#[test]
fn test_missing_and_invalid_files() {
    assert!(matches!(
        load_corpus("/nonexistent/corpus.json"),
        Err(SourceError::Read { .. })
    ));

    let broken = json_file("[{\"id\": ");
    let err = load_candidates(broken.path()).unwrap_err();
    assert!(matches!(err, SourceError::Parse { .. }));
    assert!(err.to_string().contains(&broken.path().display().to_string()));
}
