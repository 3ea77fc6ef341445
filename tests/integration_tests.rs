//! Integration tests for wordgraph

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use wordgraph::*;

/// Reference sentence: repeated words and a final dead end
const SAMPLE_TEXT: &str = "The scientist carefully analyzed the data, wrote a detailed report, \
and shared the report with the team, but the team requested more data, so the scientist \
analyzed it again.";

fn sample_session() -> WordGraphSession {
    let mut session = WordGraphSession::new();
    session.build_from_text(SAMPLE_TEXT);
    session
}

#[test]
fn test_build_from_sample_text() {
    let session = sample_session();
    let graph = session.graph().unwrap();

    // 29 tokens, 19 distinct words
    assert_eq!(graph.num_nodes(), 19);
    assert_eq!(graph.edge_weight_by_word("the", "scientist"), 2);
    assert_eq!(graph.edge_weight_by_word("the", "team"), 2);
    assert_eq!(graph.edge_weight_by_word("scientist", "the"), 0);

    let total: u64 = graph.edges().map(|(_, _, w)| u64::from(w)).sum();
    assert_eq!(total, 28);
}

#[test]
fn test_bridge_queries_on_sample_text() {
    let session = sample_session();

    let outcome = session.query_bridge_words("analyzed", "again").unwrap();
    assert_eq!(
        outcome.to_string(),
        "The bridge word from analyzed to again is: it."
    );

    let outcome = session.query_bridge_words("so", "test").unwrap();
    assert_eq!(outcome.to_string(), "No word2 in the graph!");

    let outcome = session.query_bridge_words("Test1", "Test2").unwrap();
    assert_eq!(outcome.to_string(), "No word1 or word2 in the graph!");

    let outcome = session.query_bridge_words("again", "the").unwrap();
    assert_eq!(outcome.to_string(), "No bridge words from again to the!");
}

#[test]
fn test_shortest_path_on_sample_text() {
    let session = sample_session();
    let cancel = CancellationToken::new();

    let paths = session.shortest_paths("the", "again", &cancel).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths[0].to_string(),
        "the -> scientist -> analyzed -> it -> again"
    );
    assert_eq!(paths[0].cost, 5);

    // "again" has no out-edges
    let none = session.shortest_paths("again", "the", &cancel).unwrap();
    assert!(none.is_empty());
    assert_eq!(
        report::render_paths("again", "the", &none),
        "No path from again to the.\n"
    );

    let err = session.shortest_paths("the", "test", &cancel).unwrap_err();
    assert_eq!(
        err,
        WordGraphError::UnknownWord(UnknownWords::Second {
            word: "test".to_string()
        })
    );
}

#[test]
fn test_all_paths_cover_reachable_words() {
    let session = sample_session();
    let all = session
        .all_shortest_paths("the", &CancellationToken::new())
        .unwrap();

    // every other word is reachable from "the"
    assert_eq!(all.len(), 18);
    for target in &all {
        assert!(!target.paths.is_empty());
        for path in &target.paths {
            assert_eq!(path.words.first().map(String::as_str), Some("the"));
            assert_eq!(path.words.last(), Some(&target.target));
            assert_eq!(path.cost, target.cost);
        }
    }
}

#[test]
fn test_pagerank_on_sample_text() {
    let session = sample_session();
    let result = session.page_rank(None).unwrap();
    let graph = session.graph().unwrap();

    assert!(result.converged);
    assert!((result.total() - 1.0).abs() < 1e-6);
    assert!(result.scores.iter().all(|&s| s > 0.0));

    let ranked = result.ranked(graph);
    assert_eq!(ranked.len(), 19);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));

    let table = report::render_pagerank(&ranked, 6);
    assert_eq!(table.lines().count(), 19);
}

#[test]
fn test_dot_export_two_edges() {
    let mut builder = GraphBuilder::new();
    let a = builder.get_or_create_node("A");
    let b = builder.get_or_create_node("B");
    let c = builder.get_or_create_node("C");
    builder.increment_edge(a, b, 2);
    builder.increment_edge(b, c, 1);
    let graph = builder.build();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.dot");
    graph::export::export_dot(&graph, &path).unwrap();

    let dot = fs::read_to_string(&path).unwrap();
    let edge_lines: Vec<&str> = dot.lines().filter(|l| l.contains("->")).collect();
    assert_eq!(
        edge_lines,
        vec![
            "  \"A\" -> \"B\" [label=\"2\"];",
            "  \"B\" -> \"C\" [label=\"1\"];",
        ]
    );
    assert!(dot.starts_with("digraph WordGraph {\n"));
    assert!(dot.ends_with("}\n"));
    assert!(!dir.path().join("graph.dot.tmp").exists());
}

#[test]
fn test_session_dot_and_walk_files() {
    let session = sample_session();
    let dir = tempfile::tempdir().unwrap();

    let dot_path = dir.path().join("graph.dot");
    session.export_dot(&dot_path).unwrap();
    let dot = fs::read_to_string(&dot_path).unwrap();
    assert_eq!(
        dot.lines().filter(|l| l.contains("->")).count(),
        session.graph().unwrap().num_edges()
    );

    let walk_path = dir.path().join("walk_output.txt");
    let trace = session
        .random_walk(ChaCha8Rng::seed_from_u64(42), &CancellationToken::new())
        .unwrap();
    let graph = session.graph().unwrap();
    trace.write_to(graph, &walk_path).unwrap();

    let written = fs::read_to_string(&walk_path).unwrap();
    assert_eq!(written, trace.to_line(graph));
    assert_eq!(written.split(" -> ").count(), trace.nodes().len());
}

#[test]
fn test_seeded_walks_are_reproducible() {
    let session = sample_session();
    let graph = session.graph().unwrap();
    let cancel = CancellationToken::new();

    let first = session
        .random_walk(ChaCha8Rng::seed_from_u64(9), &cancel)
        .unwrap();
    let second = session
        .random_walk(ChaCha8Rng::seed_from_u64(9), &cancel)
        .unwrap();
    assert_eq!(first.to_line(graph), second.to_line(graph));
}

#[test]
fn test_expand_text_on_sample_text() {
    let session = sample_session();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // analyzed -> it -> again is the only bridge
    let out = session.expand_text("Analyzed again", &mut rng).unwrap();
    assert_eq!(out, "analyzed it again");

    let out = session.expand_text("hello", &mut rng).unwrap();
    assert_eq!(out, "hello");
}

#[test]
fn test_queries_require_a_graph() {
    let session = WordGraphSession::new();
    assert_eq!(
        session.adjacency_listing().unwrap_err(),
        WordGraphError::GraphNotReady
    );
    assert_eq!(
        session.query_bridge_words("a", "b").unwrap_err(),
        WordGraphError::GraphNotReady
    );
}

#[test]
fn test_build_from_file_and_config_file() {
    let dir = tempfile::tempdir().unwrap();

    let text_path = dir.path().join("input.txt");
    fs::write(&text_path, SAMPLE_TEXT).unwrap();

    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{"damping": 0.5, "score_precision": 3}"#).unwrap();

    let config = WordGraphConfig::from_json_file(&config_path).unwrap();
    assert_eq!(config.damping, 0.5);
    assert_eq!(config.max_iterations, 100);

    let mut session = WordGraphSession::with_config(config).unwrap();
    let graph = session.build_from_file(&text_path).unwrap();
    assert_eq!(graph.num_nodes(), 19);

    let listing = session.adjacency_listing().unwrap();
    assert!(listing.contains("the -> scientist (2)\n"));
}

#[test]
fn test_invalid_config_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("bad.json");
    fs::write(&config_path, r#"{"damping": 1.5}"#).unwrap();

    let err = WordGraphConfig::from_json_file(&config_path).unwrap_err();
    assert!(matches!(err, WordGraphError::InvalidParameter { .. }));

    fs::write(&config_path, "not json").unwrap();
    let err = WordGraphConfig::from_json_file(&config_path).unwrap_err();
    assert!(matches!(err, WordGraphError::Serialization { .. }));
}
