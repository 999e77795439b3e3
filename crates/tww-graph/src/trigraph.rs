use std::collections::BTreeSet;

use tww_core::{ContractionGraph, EdgeColor, TwwError, VertexId, WalkRng, DEFAULT_SEED};

use crate::buckets::DegreeBuckets;

fn index(vertex: VertexId) -> usize {
    vertex.as_raw() as usize
}

fn vertex(idx: u32) -> VertexId {
    VertexId::from_raw(idx)
}

/// Mutable trigraph: an undirected simple graph whose edges are colored
/// black or red, disjointly.
///
/// The trigraph incrementally maintains per-vertex adjacency for both
/// colors, two degree-bucket indices (by red degree and by total degree)
/// and the monotone width counter, so candidate selection and width
/// tracking stay sub-linear per contraction. It owns the deterministic RNG
/// used for random-walk candidate generation.
#[derive(Debug, Clone)]
pub struct Trigraph {
    labels: Vec<u32>,
    black: Vec<BTreeSet<u32>>,
    red: Vec<BTreeSet<u32>>,
    alive: Vec<bool>,
    active: usize,
    red_buckets: DegreeBuckets,
    deg_buckets: DegreeBuckets,
    width: usize,
    seed: u64,
    rng: WalkRng,
}

impl Default for Trigraph {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl Trigraph {
    /// Creates an empty trigraph seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trigraph with an explicit RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            labels: Vec::new(),
            black: Vec::new(),
            red: Vec::new(),
            alive: Vec::new(),
            active: 0,
            red_buckets: DegreeBuckets::new(),
            deg_buckets: DegreeBuckets::new(),
            width: 0,
            seed,
            rng: WalkRng::from_seed(seed),
        }
    }

    /// Returns the seed this trigraph's RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Allocates `n` active vertices indexed from the current size upward,
    /// labeled with their 1-based index.
    pub fn add_vertices(&mut self, n: usize) {
        let start = self.labels.len() as u32;
        let labels: Vec<u32> = (start..start + n as u32).map(|idx| idx + 1).collect();
        self.add_vertices_labeled(&labels);
    }

    /// Allocates one active vertex per entry of `labels`, recording the
    /// external label mapping. All vertices start in red bucket 0.
    pub fn add_vertices_labeled(&mut self, labels: &[u32]) {
        for &label in labels {
            let idx = self.labels.len() as u32;
            self.labels.push(label);
            self.black.push(BTreeSet::new());
            self.red.push(BTreeSet::new());
            self.alive.push(true);
            self.active += 1;
            self.red_buckets.insert(idx, 0);
            self.deg_buckets.insert(idx, 0);
        }
    }

    /// Adds a black edge during initial construction. Degree buckets are not
    /// touched; [`recompute_degree_buckets`](Trigraph::recompute_degree_buckets)
    /// rebuilds them in bulk once loading is done. Duplicate and reverse
    /// duplicate edges are dropped.
    pub fn add_edge_initial(&mut self, u: VertexId, v: VertexId) -> Result<(), TwwError> {
        let (iu, iv) = self.require_pair(u, v)?;
        self.black[iu].insert(iv as u32);
        self.black[iv].insert(iu as u32);
        Ok(())
    }

    /// Rebuilds the total-degree bucket index from the adjacency lists.
    pub fn recompute_degree_buckets(&mut self) {
        self.deg_buckets.clear();
        for idx in 0..self.alive.len() {
            if self.alive[idx] {
                let degree = self.black[idx].len() + self.red[idx].len();
                self.deg_buckets.insert(idx as u32, degree);
            }
        }
    }

    /// Retires a vertex: detaches every incident edge, removes it from both
    /// bucket indices and marks it inactive.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<(), TwwError> {
        let iv = self.require_active(v)?;
        let black: Vec<u32> = self.black[iv].iter().copied().collect();
        for w in black {
            self.unlink(iv, w as usize);
        }
        let red: Vec<u32> = self.red[iv].iter().copied().collect();
        for w in red {
            self.unlink(iv, w as usize);
        }
        self.red_buckets.remove(iv as u32);
        self.deg_buckets.remove(iv as u32);
        self.alive[iv] = false;
        self.active -= 1;
        Ok(())
    }

    fn require_active(&self, v: VertexId) -> Result<usize, TwwError> {
        let idx = index(v);
        if idx >= self.alive.len() || !self.alive[idx] {
            return Err(TwwError::UnknownVertex { vertex: v.as_raw() });
        }
        Ok(idx)
    }

    fn require_pair(&self, u: VertexId, v: VertexId) -> Result<(usize, usize), TwwError> {
        let iu = self.require_active(u)?;
        let iv = self.require_active(v)?;
        if iu == iv {
            return Err(TwwError::SelfLoop { vertex: u.as_raw() });
        }
        Ok((iu, iv))
    }

    /// Inserts the edge into both adjacency sets and refreshes both bucket
    /// indices. The edge must be absent in both colors.
    fn link(&mut self, iu: usize, iv: usize, color: EdgeColor) {
        match color {
            EdgeColor::Black => {
                self.black[iu].insert(iv as u32);
                self.black[iv].insert(iu as u32);
            }
            EdgeColor::Red => {
                self.red[iu].insert(iv as u32);
                self.red[iv].insert(iu as u32);
                let du = self.red_buckets.shift(iu as u32, 1);
                let dv = self.red_buckets.shift(iv as u32, 1);
                self.width = self.width.max(du).max(dv);
            }
        }
        self.deg_buckets.shift(iu as u32, 1);
        self.deg_buckets.shift(iv as u32, 1);
    }

    /// Removes the edge in whichever color it exists, black checked first,
    /// refreshing both bucket indices. Returns the color that was removed.
    fn unlink(&mut self, iu: usize, iv: usize) -> Option<EdgeColor> {
        let color = if self.black[iu].contains(&(iv as u32)) {
            self.black[iu].remove(&(iv as u32));
            self.black[iv].remove(&(iu as u32));
            EdgeColor::Black
        } else if self.red[iu].contains(&(iv as u32)) {
            self.red[iu].remove(&(iv as u32));
            self.red[iv].remove(&(iu as u32));
            self.red_buckets.shift(iu as u32, -1);
            self.red_buckets.shift(iv as u32, -1);
            EdgeColor::Red
        } else {
            return None;
        };
        self.deg_buckets.shift(iu as u32, -1);
        self.deg_buckets.shift(iv as u32, -1);
        Some(color)
    }

    fn neighborhood(&self, idx: usize) -> BTreeSet<u32> {
        self.black[idx].union(&self.red[idx]).copied().collect()
    }

    fn pick_neighbor(&mut self, idx: usize) -> Result<u32, TwwError> {
        let blacks = self.black[idx].len();
        let degree = blacks + self.red[idx].len();
        if degree == 0 {
            return Err(TwwError::IsolatedVertex { vertex: idx as u32 });
        }
        let draw = self.rng.pick(degree);
        let picked = if draw < blacks {
            self.black[idx].iter().nth(draw)
        } else {
            self.red[idx].iter().nth(draw - blacks)
        };
        picked
            .copied()
            .ok_or(TwwError::IsolatedVertex { vertex: idx as u32 })
    }
}

impl ContractionGraph for Trigraph {
    fn active_count(&self) -> usize {
        self.active
    }

    fn active_vertices(&self) -> Vec<VertexId> {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| vertex(idx as u32))
            .collect()
    }

    fn is_active(&self, v: VertexId) -> bool {
        self.alive.get(index(v)).copied().unwrap_or(false)
    }

    fn label(&self, v: VertexId) -> Result<u32, TwwError> {
        let idx = self.require_active(v)?;
        Ok(self.labels[idx])
    }

    fn black_neighbors(&self, v: VertexId) -> Result<Vec<VertexId>, TwwError> {
        let idx = self.require_active(v)?;
        Ok(self.black[idx].iter().map(|&w| vertex(w)).collect())
    }

    fn red_neighbors(&self, v: VertexId) -> Result<Vec<VertexId>, TwwError> {
        let idx = self.require_active(v)?;
        Ok(self.red[idx].iter().map(|&w| vertex(w)).collect())
    }

    fn red_degree(&self, v: VertexId) -> Result<usize, TwwError> {
        let idx = self.require_active(v)?;
        Ok(self.red[idx].len())
    }

    fn total_degree(&self, v: VertexId) -> Result<usize, TwwError> {
        let idx = self.require_active(v)?;
        Ok(self.black[idx].len() + self.red[idx].len())
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId, color: EdgeColor) -> Result<(), TwwError> {
        let (iu, iv) = self.require_pair(u, v)?;
        let (same, other) = match color {
            EdgeColor::Black => (&self.black, &self.red),
            EdgeColor::Red => (&self.red, &self.black),
        };
        if same[iu].contains(&(iv as u32)) {
            return Ok(());
        }
        if other[iu].contains(&(iv as u32)) {
            return Err(TwwError::EdgeColorConflict {
                u: u.as_raw(),
                v: v.as_raw(),
            });
        }
        self.link(iu, iv, color);
        Ok(())
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), TwwError> {
        let (iu, iv) = self.require_pair(u, v)?;
        self.unlink(iu, iv);
        Ok(())
    }

    fn merge(&mut self, source: VertexId, twin: VertexId) -> Result<(), TwwError> {
        if source == twin {
            return Err(TwwError::IdenticalVertices {
                vertex: source.as_raw(),
            });
        }
        let (is, it) = self.require_pair(source, twin)?;

        // 1. Drop the direct edge, whichever color it carries.
        self.unlink(is, it);

        // 2. Absorb the twin's red edges. Each one is unlinked before its
        // replacement at the source is linked, so no endpoint transiently
        // carries red edges to both `source` and `twin` and the width
        // counter only ever sees true red degrees. An endpoint that is a
        // black neighbor of the source is left to step 3, which recolors
        // that very edge.
        let twin_red: Vec<u32> = self.red[it].iter().copied().collect();
        for w in twin_red {
            let iw = w as usize;
            self.unlink(it, iw);
            if self.red[is].contains(&w) || self.black[is].contains(&w) {
                continue;
            }
            self.link(is, iw, EdgeColor::Red);
        }

        // 3. Black neighbors of the source the twin does not share turn red.
        let unique_source: Vec<u32> = self.black[is]
            .difference(&self.black[it])
            .copied()
            .collect();
        for w in unique_source {
            let iw = w as usize;
            self.unlink(is, iw);
            self.link(is, iw, EdgeColor::Red);
        }

        // 4. Black neighbors of the twin the source does not have attach red.
        let unique_twin: Vec<u32> = self.black[it]
            .difference(&self.black[is])
            .copied()
            .filter(|&w| w as usize != is)
            .collect();
        for w in unique_twin {
            if !self.red[is].contains(&w) {
                self.link(is, w as usize, EdgeColor::Red);
            }
        }

        // 5. Retire the twin; only shared black edges remain on it.
        self.remove_vertex(twin)?;

        Ok(())
    }

    fn top_k_lowest_red_degree(&self, k: usize) -> Vec<VertexId> {
        self.red_buckets.lowest(k).into_iter().map(vertex).collect()
    }

    fn top_k_lowest_total_degree(&self, k: usize) -> Vec<VertexId> {
        self.deg_buckets.lowest(k).into_iter().map(vertex).collect()
    }

    fn score(&self, u: VertexId, v: VertexId) -> Result<usize, TwwError> {
        let (iu, iv) = self.require_pair(u, v)?;
        let nu = self.neighborhood(iu);
        let nv = self.neighborhood(iv);
        Ok(nu
            .symmetric_difference(&nv)
            .filter(|&&w| w as usize != iu && w as usize != iv)
            .count())
    }

    fn width(&self) -> usize {
        self.width
    }

    fn degree_deviation(&self) -> f64 {
        if self.active == 0 {
            return 0.0;
        }
        let total: usize = self
            .deg_buckets
            .occupancy()
            .map(|(degree, count)| degree * count)
            .sum();
        let mean = total as f64 / self.active as f64;
        let deviation: f64 = self
            .deg_buckets
            .occupancy()
            .map(|(degree, count)| (degree as f64 - mean).abs() * count as f64)
            .sum();
        deviation / self.active as f64
    }

    fn random_neighbor(&mut self, v: VertexId) -> Result<VertexId, TwwError> {
        let idx = self.require_active(v)?;
        self.pick_neighbor(idx).map(vertex)
    }

    fn random_walk_neighborhood(
        &mut self,
        v: VertexId,
        trials: usize,
    ) -> Result<BTreeSet<VertexId>, TwwError> {
        let idx = self.require_active(v)?;
        let mut collected = BTreeSet::new();
        if self.black[idx].len() + self.red[idx].len() == 0 {
            return Ok(collected);
        }
        for _ in 0..trials {
            let two_hop = self.rng.second_hop();
            let mut picked = self.pick_neighbor(idx)?;
            let pidx = picked as usize;
            if two_hop && self.black[pidx].len() + self.red[pidx].len() > 0 {
                picked = self.pick_neighbor(pidx)?;
            }
            collected.insert(vertex(picked));
        }
        collected.remove(&v);
        Ok(collected)
    }
}
