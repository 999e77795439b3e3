use std::collections::BTreeSet;

use tww_core::{ContractionGraph, TwwError, VertexId};
use tww_graph::Trigraph;

fn v(raw: u32) -> VertexId {
    VertexId::from_raw(raw)
}

fn build_with_seed(seed: u64, n: usize, edges: &[(u32, u32)]) -> Trigraph {
    let mut graph = Trigraph::with_seed(seed);
    graph.add_vertices(n);
    for &(a, b) in edges {
        graph.add_edge_initial(v(a), v(b)).unwrap();
    }
    graph.recompute_degree_buckets();
    graph
}

const CYCLE_6: &[(u32, u32)] = &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)];

#[test]
fn walk_stays_within_two_hops() {
    let mut graph = build_with_seed(7, 6, CYCLE_6);

    let mut ball: BTreeSet<VertexId> = BTreeSet::new();
    for w in graph.black_neighbors(v(0)).unwrap() {
        ball.insert(w);
        ball.extend(graph.black_neighbors(w).unwrap());
    }
    ball.remove(&v(0));

    for _ in 0..32 {
        let walked = graph.random_walk_neighborhood(v(0), 10).unwrap();
        assert!(!walked.contains(&v(0)));
        assert!(walked.len() <= 10);
        assert!(walked.is_subset(&ball));
    }
}

#[test]
fn walks_are_reproducible_for_a_fixed_seed() {
    let mut first = build_with_seed(42, 6, CYCLE_6);
    let mut second = build_with_seed(42, 6, CYCLE_6);

    for round in 0..16 {
        let a = first.random_walk_neighborhood(v(round % 6), 10).unwrap();
        let b = second.random_walk_neighborhood(v(round % 6), 10).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn isolated_vertex_yields_empty_walk() {
    let mut graph = build_with_seed(1, 3, &[(0, 1)]);

    assert!(graph.random_walk_neighborhood(v(2), 10).unwrap().is_empty());

    let err = graph.random_neighbor(v(2)).unwrap_err();
    assert_eq!(err, TwwError::IsolatedVertex { vertex: 2 });
}

#[test]
fn random_neighbor_sees_both_colors() {
    let mut graph = build_with_seed(3, 3, &[(0, 1)]);
    graph
        .add_edge(v(0), v(2), tww_core::EdgeColor::Red)
        .unwrap();

    let mut seen = BTreeSet::new();
    for _ in 0..64 {
        seen.insert(graph.random_neighbor(v(0)).unwrap());
    }
    assert_eq!(seen, BTreeSet::from([v(1), v(2)]));
}
