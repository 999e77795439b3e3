use criterion::{criterion_group, criterion_main, Criterion};
use tww_core::{ContractionGraph, VertexId};
use tww_graph::Trigraph;

fn build_ring_with_chords(n: u32) -> Trigraph {
    let mut graph = Trigraph::new();
    graph.add_vertices(n as usize);
    for i in 0..n {
        graph
            .add_edge_initial(VertexId::from_raw(i), VertexId::from_raw((i + 1) % n))
            .unwrap();
        graph
            .add_edge_initial(VertexId::from_raw(i), VertexId::from_raw((i + 5) % n))
            .unwrap();
    }
    graph.recompute_degree_buckets();
    graph
}

fn bench_contract_ring(c: &mut Criterion) {
    let graph = build_ring_with_chords(256);
    c.bench_function("contract_ring_256", |b| {
        b.iter(|| {
            let mut scratch = graph.clone();
            while scratch.active_count() > 1 {
                let pool = scratch.top_k_lowest_red_degree(2);
                scratch.merge(pool[0], pool[1]).unwrap();
            }
            scratch.width()
        });
    });
}

fn bench_score_pairs(c: &mut Criterion) {
    let graph = build_ring_with_chords(256);
    let pool = graph.top_k_lowest_total_degree(20);
    c.bench_function("score_pool_pairs", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for (i, &u) in pool.iter().enumerate() {
                for &v in pool.iter().skip(i + 1) {
                    acc += graph.score(u, v).unwrap();
                }
            }
            acc
        });
    });
}

criterion_group!(benches, bench_contract_ring, bench_score_pairs);
criterion_main!(benches);
