//! Criterion benchmarks for dsa-labs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dsa_labs::graph::{
    bfs, biconnected_components, dfs, dijkstra, prim, GraphBuilder, WeightedGraph,
};
use dsa_labs::nms::{clustered_boxes, non_max_suppression, random_boxes, rank};
use dsa_labs::sort::SortAlgorithm;
use dsa_labs::HuffmanTree;

/// Labels past the Latin-1 block so large graphs still get distinct chars.
fn label(i: usize) -> char {
    char::from_u32(0x100 + i as u32).unwrap()
}

/// Connected random graph: a spanning path plus random chords.
fn make_graph(vertex_count: usize, extra_edges: usize) -> WeightedGraph {
    let mut rng = StdRng::seed_from_u64(17);
    let mut builder = GraphBuilder::new();
    for i in 1..vertex_count {
        builder = builder.edge(label(i - 1), label(i), rng.gen_range(1..100));
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a != b {
            builder = builder.edge(label(a), label(b), rng.gen_range(1..100));
        }
    }
    builder.build().unwrap()
}

fn bench_traversals(c: &mut Criterion) {
    let graph = make_graph(500, 2000);
    let start = label(0);

    c.bench_function("bfs_500", |b| {
        b.iter(|| bfs(black_box(&graph), start).unwrap());
    });
    c.bench_function("dfs_500", |b| {
        b.iter(|| dfs(black_box(&graph), start).unwrap());
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = make_graph(500, 2000);
    c.bench_function("dijkstra_dense_500", |b| {
        b.iter(|| dijkstra(black_box(&graph), label(0)).unwrap());
    });
}

fn bench_prim(c: &mut Criterion) {
    let graph = make_graph(500, 2000);
    c.bench_function("prim_dense_500", |b| {
        b.iter(|| prim(black_box(&graph), label(0)).unwrap());
    });
}

fn bench_biconnected(c: &mut Criterion) {
    let sparse = make_graph(1000, 200);
    c.bench_function("biconnected_sparse_1k", |b| {
        b.iter(|| biconnected_components(black_box(&sparse)));
    });
}

fn bench_nms_sorts(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let boxes = random_boxes(1000, &mut rng);

    let mut group = c.benchmark_group("rank_1000");
    for algorithm in SortAlgorithm::NMS {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut v = boxes.clone();
                rank(&mut v, algorithm);
                v
            });
        });
    }
    group.finish();
}

fn bench_nms_clustered(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let boxes = clustered_boxes(2000, 10, &mut rng);
    c.bench_function("nms_clustered_2000", |b| {
        b.iter(|| non_max_suppression(black_box(&boxes), SortAlgorithm::Quick, 0.5));
    });
}

fn bench_huffman_build(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(200);
    c.bench_function("huffman_build", |b| {
        b.iter(|| HuffmanTree::from_text(black_box(&text)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_traversals,
    bench_dijkstra,
    bench_prim,
    bench_biconnected,
    bench_nms_sorts,
    bench_nms_clustered,
    bench_huffman_build,
);
criterion_main!(benches);
