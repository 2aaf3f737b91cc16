//! Tests for the analytics building blocks across module boundaries

mod common;

use sazanami::analytics::{build_graph, summarize, top_k};
use sazanami::models::RankedEntry;
use sazanami::segment::{SegmentDictionary, WordSegmenter};

#[test]
fn test_top_k_contract() {
    assert!(top_k(std::iter::empty(), 10).is_empty());

    let top = top_k(["a", "b", "a"].into_iter(), 1);
    assert_eq!(top, vec![RankedEntry::new("a", 2)]);
}

#[test]
fn test_top_k_stable_tie_break() {
    let top = top_k(["zz", "aa", "zz", "aa"].into_iter(), 2);
    // Equal counts: zz was seen first and must stay first
    assert_eq!(top[0].label, "zz");
    assert_eq!(top[1].label, "aa");
}

#[test]
fn test_graph_accumulates_reversed_pairs() {
    let posts = vec![
        vec!["xx".to_string(), "yy".to_string()],
        vec!["yy".to_string(), "xx".to_string()],
    ];
    let graph = build_graph(&posts, 2, 20);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges[0].weight, 2);
    assert_eq!(graph.edges[0].source, "xx");
    assert_eq!(graph.edges[0].target, "yy");
}

#[test]
fn test_graph_edge_list_is_bit_identical_across_runs() {
    let posts: Vec<Vec<String>> = (0..50)
        .map(|i| {
            vec![
                format!("tok{}", i % 7),
                format!("tok{}", (i + 1) % 7),
                format!("tok{}", (i + 3) % 7),
            ]
        })
        .collect();

    let first = serde_json::to_vec(&build_graph(&posts, 2, 20)).unwrap();
    let second = serde_json::to_vec(&build_graph(&posts, 2, 20)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_graph_from_segmented_japanese_text() {
    let dict = SegmentDictionary::from_words(["勉強会", "参加", "今日"]);
    let seg = WordSegmenter::with_dictionary(dict);

    let posts: Vec<Vec<String>> = vec![
        seg.segment("今日勉強会に参加"),
        seg.segment("勉強会参加"),
    ];
    let graph = build_graph(&posts, 2, 20);

    let pair = graph
        .edges
        .iter()
        .find(|e| e.source == "勉強会" && e.target == "参加")
        .expect("expected 勉強会/参加 edge");
    assert_eq!(pair.weight, 2);

    // Single-character に never reaches the graph
    assert!(!graph.nodes.iter().any(|n| n == "に"));
}

#[test]
fn test_timeline_daily_property() {
    let batch = common::enriched_batch(vec![
        {
            let mut p = common::enriched_post("a", &[], 0.0);
            p.timestamp = sazanami::loader::parse_timestamp("2025/08/09 08:00");
            p
        },
        {
            let mut p = common::enriched_post("b", &[], 0.0);
            p.timestamp = sazanami::loader::parse_timestamp("2025/08/09 22:00");
            p
        },
        {
            let mut p = common::enriched_post("c", &[], 0.0);
            p.timestamp = sazanami::loader::parse_timestamp("2025/08/10 10:00");
            p
        },
    ]);

    let summary = summarize(&batch);
    assert_eq!(summary.daily_counts.len(), 2);
    assert_eq!(summary.daily_counts[0].count, 2);
    assert_eq!(summary.daily_counts[1].count, 1);
}

#[test]
fn test_timeline_untimed_posts_only_in_counts() {
    let batch = common::enriched_batch(vec![common::enriched_post("untimed", &["#tag"], 0.5)]);

    let summary = summarize(&batch);
    assert!(summary.is_empty());

    // The same post still participates in non-temporal aggregates
    let ranking = top_k(
        batch
            .posts
            .iter()
            .flat_map(|p| p.hashtags.iter().map(String::as_str)),
        10,
    );
    assert_eq!(ranking.len(), 1);
}
