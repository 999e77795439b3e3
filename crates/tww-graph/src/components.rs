use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tww_core::rng::substream_seed;
use tww_core::{ContractionGraph, TwwError, VertexId};

use crate::trigraph::Trigraph;

/// Splits a freshly loaded trigraph into its connected components over the
/// black subgraph.
///
/// Each component becomes an independent trigraph with dense re-indexed
/// vertices that keep their external labels; component RNGs are seeded with
/// substreams derived from the parent seed in discovery order. A connected
/// graph is returned whole, keeping its indices and RNG state.
pub fn split_components(graph: Trigraph) -> Result<Vec<Trigraph>, TwwError> {
    let vertices = graph.active_vertices();
    let mut visited: BTreeSet<VertexId> = BTreeSet::new();
    let mut components: Vec<Vec<VertexId>> = Vec::new();

    for &start in &vertices {
        if !visited.insert(start) {
            continue;
        }
        let mut members = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            for w in graph.black_neighbors(v)? {
                if visited.insert(w) {
                    members.push(w);
                    queue.push_back(w);
                }
            }
        }
        members.sort();
        components.push(members);
    }

    if components.len() <= 1 {
        return Ok(vec![graph]);
    }

    let master = graph.seed();
    let mut split = Vec::with_capacity(components.len());
    for (stream, members) in components.iter().enumerate() {
        let mut part = Trigraph::with_seed(substream_seed(master, stream as u64));
        let labels: Vec<u32> = members
            .iter()
            .map(|&v| graph.label(v))
            .collect::<Result<_, _>>()?;
        part.add_vertices_labeled(&labels);

        let positions: BTreeMap<VertexId, u32> = members
            .iter()
            .enumerate()
            .map(|(pos, &v)| (v, pos as u32))
            .collect();
        for &v in members {
            for w in graph.black_neighbors(v)? {
                if v < w {
                    part.add_edge_initial(
                        VertexId::from_raw(positions[&v]),
                        VertexId::from_raw(positions[&w]),
                    )?;
                }
            }
        }
        part.recompute_degree_buckets();
        split.push(part);
    }
    Ok(split)
}
