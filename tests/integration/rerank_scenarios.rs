// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end ranking scenarios with a fixed-vector provider.

use crate::common::{
    assert_close, assert_ranking_well_formed, config, make_candidate, make_corpus_item,
    topic_embedder, FixedEmbedder,
};
use paperank::{
    rerank, sort_by_recency, temporal_weights, HashEmbedder, RerankConfig, SelectionMode,
};

// ============================================================================
// RELEVANCE
// ============================================================================

#[test]
fn test_two_item_corpus_weights() {
    let weights = temporal_weights(2);
    assert_close(weights[0], 0.565412);
    assert_close(weights[1], 0.434588);
}

#[test]
fn test_newer_item_outweighs_older() {
    let corpus = vec![
        make_corpus_item("B", "bio", "2023-01-01T00:00:00Z"),
        make_corpus_item("A", "ml", "2024-01-01T00:00:00Z"),
    ];
    let sorted = sort_by_recency(&corpus).unwrap();
    let weights = temporal_weights(sorted.len());

    assert_eq!(sorted[0].id, "A");
    assert!(weights[0] > weights[1]);
    assert_close(weights[0] + weights[1], 1.0);
}

#[test]
fn test_relevance_follows_recency_weights() {
    // Newer corpus item is about ml, older about bio.
    let corpus = vec![
        make_corpus_item("old", "bio", "2021-06-01T12:00:00Z"),
        make_corpus_item("new", "ml", "2024-06-01T12:00:00Z"),
    ];
    let candidates = vec![make_candidate("b", "bio"), make_candidate("m", "ml")];

    let ranking = rerank(candidates, &corpus, &topic_embedder(), &config(0.0)).unwrap();
    assert_eq!(ranking.ids(), vec!["m", "b"]);
    assert_close(ranking.scores()[0], 5.654120);
    assert_close(ranking.scores()[1], 4.345880);
}

#[test]
fn test_single_candidate_score_is_relevance() {
    let corpus = vec![make_corpus_item("z", "ml", "2024-01-01T00:00:00Z")];
    let ranking = rerank(
        vec![make_candidate("only", "ml-ish")],
        &corpus,
        &topic_embedder(),
        &config(0.3),
    )
    .unwrap();

    // One candidate never goes through MMR, whatever λ says.
    assert_eq!(ranking.mode, SelectionMode::RelevanceOnly);
    assert_close(ranking.scores()[0], 8.0);
}

#[test]
fn test_lambda_zero_is_stable_relevance_sort() {
    let corpus = vec![make_corpus_item("z", "ml", "2024-01-01T00:00:00Z")];
    let candidates = vec![
        make_candidate("law-1", "law"),
        make_candidate("ml-1", "ml"),
        make_candidate("law-2", "law"),
        make_candidate("ml-2", "ml"),
    ];

    let ranking = rerank(candidates, &corpus, &topic_embedder(), &config(0.0)).unwrap();
    assert_eq!(ranking.ids(), vec!["ml-1", "ml-2", "law-1", "law-2"]);
    assert_eq!(ranking.scores(), vec![10.0, 10.0, 0.0, 0.0]);
}

#[test]
fn test_zero_relevance_ties_keep_input_order() {
    // Both candidates are orthogonal to the corpus item; one dot product
    // comes out as -0.0, the other as +0.0.
    let embedder = FixedEmbedder::new("fixed")
        .with("neg", vec![-1.0, 0.0])
        .with("pos", vec![1.0, 0.0])
        .with("corpus", vec![0.0, -1.0]);
    let corpus = vec![make_corpus_item("z", "corpus", "2024-01-01T00:00:00Z")];
    let candidates = vec![
        make_candidate("B-first", "neg"),
        make_candidate("A-second", "pos"),
    ];

    let ranking = rerank(candidates, &corpus, &embedder, &config(0.0)).unwrap();
    assert_eq!(ranking.ids(), vec!["B-first", "A-second"]);
    assert_eq!(ranking.scores(), vec![0.0, 0.0]);
}

// ============================================================================
// DIVERSITY
// ============================================================================

#[test]
fn test_lambda_one_matches_relevance_order() {
    let corpus = vec![
        make_corpus_item("z1", "ml", "2024-02-01T00:00:00Z"),
        make_corpus_item("z2", "bio", "2023-02-01T00:00:00Z"),
    ];
    let candidates = || {
        vec![
            make_candidate("a", "bio"),
            make_candidate("b", "ml-ish"),
            make_candidate("c", "ml"),
        ]
    };

    let plain = rerank(candidates(), &corpus, &topic_embedder(), &config(0.0)).unwrap();
    let mmr = rerank(candidates(), &corpus, &topic_embedder(), &config(1.0)).unwrap();

    assert_eq!(mmr.mode, SelectionMode::Diversified { lambda: 1.0 });
    assert_eq!(mmr.ids(), plain.ids());
    for (a, b) in mmr.scores().into_iter().zip(plain.scores()) {
        assert_close(a, b);
    }
}

#[test]
fn test_duplicates_are_pushed_down() {
    let corpus = vec![make_corpus_item("z", "ml", "2024-01-01T00:00:00Z")];
    let candidates = vec![
        make_candidate("a", "ml"),
        make_candidate("a-copy", "ml"),
        make_candidate("near", "ml-ish"),
    ];

    let ranking = rerank(candidates, &corpus, &topic_embedder(), &config(0.3)).unwrap();
    assert_ranking_well_formed(&ranking, &["a", "a-copy", "near"]);
    assert_eq!(ranking.ids(), vec!["a", "near", "a-copy"]);

    // 0.3·10 = 3; 0.3·8 − 0.7·10·0.8 = −3.2; 0.3·10 − 0.7·10·1 = −4
    let scores = ranking.scores();
    assert_close(scores[0], 3.0);
    assert_close(scores[1], -3.2);
    assert_close(scores[2], -4.0);
}

#[test]
fn test_identical_candidate_drops_below_unrelated_one() {
    let corpus = vec![make_corpus_item("z", "ml", "2024-01-01T00:00:00Z")];
    let candidates = vec![
        make_candidate("first", "ml"),
        make_candidate("twin", "ml"),
        make_candidate("other", "bio"),
    ];

    let ranking = rerank(candidates, &corpus, &topic_embedder(), &config(0.3)).unwrap();
    // twin: 0.3·10 − 0.7·10·1 = −4, other: 0.3·0 − 0 = 0
    assert_eq!(ranking.ids(), vec!["first", "other", "twin"]);
}

#[test]
fn test_rerank_is_deterministic() {
    let corpus = vec![
        make_corpus_item("z1", "sparse attention for long documents", "2024-03-01T09:00:00Z"),
        make_corpus_item("z2", "graph neural networks for molecules", "2023-11-20T18:30:00Z"),
        make_corpus_item("z3", "contract law and automated reasoning", "2022-01-05T08:00:00Z"),
    ];
    let candidates = || {
        vec![
            make_candidate("a", "efficient attention for long sequences"),
            make_candidate("b", "molecular property prediction with graph networks"),
            make_candidate("c", "efficient attention for long sequences"),
            make_candidate("d", "a survey of legal reasoning systems"),
        ]
    };
    let embedder = HashEmbedder::new(256);
    let config = RerankConfig::default();

    let first = rerank(candidates(), &corpus, &embedder, &config).unwrap();
    let second = rerank(candidates(), &corpus, &embedder, &config).unwrap();
    assert_eq!(first, second);
    assert_ranking_well_formed(&first, &["a", "b", "c", "d"]);

    // The verbatim duplicate cannot sit right behind its twin at λ = 0.3.
    let ids = first.ids();
    let a = ids.iter().position(|&id| id == "a").unwrap();
    let c = ids.iter().position(|&id| id == "c").unwrap();
    assert!(a.abs_diff(c) > 1, "duplicates adjacent in {:?}", ids);
}

#[test]
fn test_candidates_keep_their_fields() {
    let corpus = vec![make_corpus_item("z", "ml", "2024-01-01T00:00:00Z")];
    let candidate = make_candidate("2401.00001", "ml").with_title("Attention Everywhere");

    let ranking = rerank(vec![candidate.clone()], &corpus, &topic_embedder(), &config(0.3)).unwrap();
    assert_eq!(ranking.into_candidates(), vec![candidate]);
}
