use std::collections::BTreeMap;

use tww_core::VertexId;

/// Memoizes symmetric-difference scores between cache resets.
///
/// Keys are canonicalized with the larger index first, matching the
/// driver's merge ordering. The cache is an optimization only; correctness
/// never depends on a hit.
#[derive(Debug, Clone, Default)]
pub struct ScoreCache {
    scores: BTreeMap<(u32, u32), usize>,
}

impl ScoreCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: VertexId, b: VertexId) -> (u32, u32) {
        let (hi, lo) = if a.as_raw() >= b.as_raw() {
            (a, b)
        } else {
            (b, a)
        };
        (hi.as_raw(), lo.as_raw())
    }

    /// Returns the memoized score for the pair, if any.
    pub fn get(&self, a: VertexId, b: VertexId) -> Option<usize> {
        self.scores.get(&Self::key(a, b)).copied()
    }

    /// Records the score for the pair.
    pub fn insert(&mut self, a: VertexId, b: VertexId, score: usize) {
        self.scores.insert(Self::key(a, b), score);
    }

    /// Drops every memoized score.
    pub fn clear(&mut self) {
        self.scores.clear();
    }

    /// Returns the number of memoized pairs.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns whether the cache holds no scores.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
