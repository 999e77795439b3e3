#![deny(missing_docs)]
#![doc = "Core traits and data types for the twin-width contraction solver."]

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::TwwError;
pub use rng::{substream_seed, WalkRng};

/// Master seed used by every trigraph unless the caller overrides it.
///
/// Fixing the seed makes the random-walk candidate generation, and therefore
/// the emitted contraction sequence, reproducible run to run.
pub const DEFAULT_SEED: u64 = 12345;

/// Identifier for a vertex within a [`ContractionGraph`].
///
/// Identifiers are dense indices assigned at construction. The index of a
/// contracted-away vertex is retired for the lifetime of its graph and never
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

/// Color of an edge inside a trigraph.
///
/// Black edges are ordinary edges of the input graph; red edges record the
/// error introduced by contractions. A vertex pair carries at most one edge,
/// of exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EdgeColor {
    /// An edge both contraction endpoints agreed on.
    Black,
    /// An edge only one contraction endpoint carried.
    Red,
}

/// Structural contract for trigraphs driven by the contraction heuristics.
pub trait ContractionGraph: Send + Sync {
    /// Returns the number of active (not yet contracted) vertices.
    fn active_count(&self) -> usize;

    /// Returns all active vertex identifiers in ascending index order.
    fn active_vertices(&self) -> Vec<VertexId>;

    /// Returns whether the vertex exists and has not been contracted away.
    fn is_active(&self, vertex: VertexId) -> bool;

    /// Returns the external 1-based label recorded for the vertex.
    fn label(&self, vertex: VertexId) -> Result<u32, TwwError>;

    /// Returns the black neighbors of the vertex.
    fn black_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, TwwError>;

    /// Returns the red neighbors of the vertex.
    fn red_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, TwwError>;

    /// Returns the number of red edges incident to the vertex.
    fn red_degree(&self, vertex: VertexId) -> Result<usize, TwwError>;

    /// Returns the number of edges of either color incident to the vertex.
    fn total_degree(&self, vertex: VertexId) -> Result<usize, TwwError>;

    /// Adds an edge of the given color between two active vertices.
    ///
    /// Adding an edge that already exists in the same color is a no-op;
    /// adding one that exists in the other color is an error, the caller
    /// must [`remove_edge`](ContractionGraph::remove_edge) first.
    fn add_edge(&mut self, u: VertexId, v: VertexId, color: EdgeColor) -> Result<(), TwwError>;

    /// Removes the edge between two vertices in whichever color it exists,
    /// black checked first. No-op when no edge exists.
    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), TwwError>;

    /// Contracts `twin` into `source`, leaving `source` with the union of
    /// both neighborhoods: common black neighbors stay black, every other
    /// neighbor becomes red. `twin` is retired.
    fn merge(&mut self, source: VertexId, twin: VertexId) -> Result<(), TwwError>;

    /// Returns up to `k` active vertices in non-decreasing red-degree order.
    fn top_k_lowest_red_degree(&self, k: usize) -> Vec<VertexId>;

    /// Returns up to `k` active vertices in non-decreasing total-degree
    /// order.
    fn top_k_lowest_total_degree(&self, k: usize) -> Vec<VertexId>;

    /// Returns the size of the symmetric difference of the two closed
    /// neighborhoods, ignoring `u` and `v` themselves. This upper-bounds the
    /// red degree the merged vertex would start with.
    fn score(&self, u: VertexId, v: VertexId) -> Result<usize, TwwError>;

    /// Returns the maximum red degree ever observed since construction.
    fn width(&self) -> usize;

    /// Returns the mean absolute deviation of the total-degree distribution
    /// over active vertices.
    fn degree_deviation(&self) -> f64;

    /// Samples one neighbor of the vertex uniformly over both colors.
    fn random_neighbor(&mut self, vertex: VertexId) -> Result<VertexId, TwwError>;

    /// Collects a randomized neighborhood of the vertex by `trials`
    /// independent walks of length one or two. The vertex itself never
    /// appears in the result; an isolated vertex yields the empty set.
    fn random_walk_neighborhood(
        &mut self,
        vertex: VertexId,
        trials: usize,
    ) -> Result<BTreeSet<VertexId>, TwwError>;
}
