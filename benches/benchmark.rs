//! Benchmarks for wordgraph

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wordgraph::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
The scientist carefully analyzed the data, wrote a detailed report, and shared
the report with the team, but the team requested more data, so the scientist
analyzed it again. Machine learning is a subset of artificial intelligence that
provides systems the ability to learn and improve from experience without being
explicitly programmed. The process of learning begins with observations or data,
such as examples, direct experience, or instruction, in order to look for
patterns in data and make better decisions in the future.
"#;

fn sample_words(repeat: usize) -> Vec<String> {
    Tokenizer::new().normalize(&SAMPLE_TEXT.repeat(repeat))
}

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    let mut group = c.benchmark_group("normalize_by_size");
    for size in [1, 10, 100].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.normalize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let words = sample_words(1);
    c.bench_function("graph_build", |b| {
        b.iter(|| GraphBuilder::from_words(black_box(&words)).build())
    });

    // Sequential vs parallel pair counting on a larger input
    let large = sample_words(200);
    let mut group = c.benchmark_group("graph_build_parallel");
    group.throughput(Throughput::Elements(large.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| GraphBuilder::from_words(black_box(&large)).build())
    });
    group.bench_function("parallel", |b| {
        b.iter(|| graph::builder::build_graph_with_threshold(black_box(&large), 1).build())
    });
    group.finish();
}

fn benchmark_pagerank(c: &mut Criterion) {
    let graph = WordGraph::from_words(&sample_words(1));

    let mut group = c.benchmark_group("pagerank_damping");
    for damping in [0.5, 0.85, 0.95].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(damping),
            damping,
            |b, &damping| {
                b.iter(|| {
                    StandardPageRank::new()
                        .with_damping(damping)
                        .run(black_box(&graph))
                })
            },
        );
    }
    group.finish();
}

fn benchmark_shortest_paths(c: &mut Criterion) {
    let graph = WordGraph::from_words(&sample_words(1));
    let engine = ShortestPathEngine::new(&graph);
    let cancel = CancellationToken::new();

    c.bench_function("dijkstra_tree", |b| {
        b.iter(|| engine.tree(black_box("the"), &cancel))
    });
    c.bench_function("paths_to_all", |b| {
        b.iter(|| engine.paths_to_all(black_box("the"), &cancel))
    });
}

fn benchmark_bridges_and_walks(c: &mut Criterion) {
    let graph = WordGraph::from_words(&sample_words(1));
    let resolver = BridgeWordResolver::new(&graph);
    let expander = TextExpander::new(&graph);
    let cancel = CancellationToken::new();

    c.bench_function("bridge_query", |b| {
        b.iter(|| resolver.query(black_box("the"), black_box("and")))
    });

    c.bench_function("expand_text", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| expander.expand(black_box("the data and the team analyzed it"), &mut rng))
    });

    c.bench_function("random_walk", |b| {
        let mut walker = RandomWalker::new(ChaCha8Rng::seed_from_u64(7));
        b.iter(|| walker.walk(black_box(&graph), &cancel))
    });
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_graph_building,
    benchmark_pagerank,
    benchmark_shortest_paths,
    benchmark_bridges_and_walks,
);
criterion_main!(benches);
