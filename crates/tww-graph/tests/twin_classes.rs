use tww_core::{ContractionGraph, VertexId};
use tww_graph::{false_twin_classes, true_twin_classes, Trigraph};

fn v(raw: u32) -> VertexId {
    VertexId::from_raw(raw)
}

fn build(n: usize, edges: &[(u32, u32)]) -> Trigraph {
    let mut graph = Trigraph::new();
    graph.add_vertices(n);
    for &(a, b) in edges {
        graph.add_edge_initial(v(a), v(b)).unwrap();
    }
    graph.recompute_degree_buckets();
    graph
}

#[test]
fn star_leaves_are_true_twins() {
    let graph = build(7, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6)]);

    let classes = true_twin_classes(&graph).unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0], vec![v(1), v(2), v(3), v(4), v(5), v(6)]);

    assert!(false_twin_classes(&graph).unwrap().is_empty());
}

#[test]
fn triangle_vertices_are_false_twins() {
    let graph = build(3, &[(0, 1), (1, 2), (0, 2)]);

    assert!(true_twin_classes(&graph).unwrap().is_empty());
    let classes = false_twin_classes(&graph).unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0], vec![v(0), v(1), v(2)]);
}

#[test]
fn path_endpoints_sharing_a_neighbor_are_true_twins() {
    let graph = build(3, &[(0, 1), (1, 2)]);

    let classes = true_twin_classes(&graph).unwrap();
    assert_eq!(classes, vec![vec![v(0), v(2)]]);
}

#[test]
fn longer_path_has_no_twins() {
    let graph = build(4, &[(0, 1), (1, 2), (2, 3)]);

    assert!(true_twin_classes(&graph).unwrap().is_empty());
    assert!(false_twin_classes(&graph).unwrap().is_empty());
}

#[test]
fn contracting_a_twin_class_adds_no_red_edges() {
    let mut graph = build(7, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6)]);

    let classes = true_twin_classes(&graph).unwrap();
    for class in classes {
        let keeper = class[0];
        for &other in &class[1..] {
            graph.merge(keeper, other).unwrap();
        }
    }

    assert_eq!(graph.active_count(), 2);
    assert_eq!(graph.width(), 0);
}
