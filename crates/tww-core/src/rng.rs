//! Seeded randomness for the contraction engine's random walks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::DEFAULT_SEED;

/// Walk randomness owned by a trigraph.
///
/// The type exposes exactly the two draws the contraction engine performs —
/// a uniform neighbor pick and the one-or-two hop choice of a walk trial —
/// and pins the seeding policy that makes contraction sequences part of the
/// output contract: the root trigraph draws from `StdRng` seeded with
/// [`DEFAULT_SEED`] unless the caller overrides it, and every connected
/// component is re-seeded with [`substream_seed`] so splitting a graph
/// never replays the parent's walk decisions.
#[derive(Debug, Clone)]
pub struct WalkRng {
    rng: StdRng,
}

impl WalkRng {
    /// Creates walk randomness from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly picks an index below `bound`. `bound` must be positive;
    /// callers check for isolated vertices before drawing.
    pub fn pick(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    /// Decides whether a walk trial takes a second hop, with equal
    /// probability for a one-hop and a two-hop trial.
    pub fn second_hop(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

impl Default for WalkRng {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

/// Derives the seed for one connected component from the master seed and
/// the component's discovery index.
///
/// One SplitMix64 round over the pair: platform independent, cheap, and a
/// different stream for every component, so per-component sequences stay
/// reproducible after the graph is split.
pub fn substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut mixed = master_seed
        .wrapping_add(substream.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    mixed ^ (mixed >> 31)
}
