//! Twin-class enumeration by iterative partition refinement.
//!
//! Intended as a preamble on freshly built trigraphs: classes are computed
//! over the black subgraph only. Contracting a twin class never raises the
//! red degree of any vertex, so callers may collapse every non-singleton
//! class before the heuristic loop runs.

use tww_core::{ContractionGraph, TwwError, VertexId};

/// Enumerates non-singleton classes of vertices with identical open
/// neighborhoods.
pub fn true_twin_classes<G: ContractionGraph>(graph: &G) -> Result<Vec<Vec<VertexId>>, TwwError> {
    twin_classes(graph, false)
}

/// Enumerates non-singleton classes of vertices with identical closed
/// neighborhoods.
pub fn false_twin_classes<G: ContractionGraph>(graph: &G) -> Result<Vec<Vec<VertexId>>, TwwError> {
    twin_classes(graph, true)
}

fn twin_classes<G: ContractionGraph>(
    graph: &G,
    closed: bool,
) -> Result<Vec<Vec<VertexId>>, TwwError> {
    let vertices = graph.active_vertices();
    if vertices.is_empty() {
        return Ok(Vec::new());
    }

    let mut partitions: Vec<Vec<VertexId>> = vec![vertices.clone()];
    for &v in &vertices {
        let mut pivot = graph.black_neighbors(v)?;
        if closed {
            pivot.push(v);
            pivot.sort();
        }
        let mut refined = Vec::with_capacity(partitions.len());
        for class in &partitions {
            let (inside, outside) = split_by(class, &pivot);
            if !inside.is_empty() {
                refined.push(inside);
            }
            if !outside.is_empty() {
                refined.push(outside);
            }
        }
        partitions = refined;
    }

    Ok(partitions
        .into_iter()
        .filter(|class| class.len() > 1)
        .collect())
}

/// Splits a sorted class into the members inside and outside the sorted
/// pivot set.
fn split_by(class: &[VertexId], pivot: &[VertexId]) -> (Vec<VertexId>, Vec<VertexId>) {
    let mut inside = Vec::new();
    let mut outside = Vec::new();
    let mut rest = pivot.iter().peekable();
    for &v in class {
        while let Some(&&head) = rest.peek() {
            if head < v {
                rest.next();
            } else {
                break;
            }
        }
        if rest.peek().is_some_and(|&&head| head == v) {
            inside.push(v);
        } else {
            outside.push(v);
        }
    }
    (inside, outside)
}
