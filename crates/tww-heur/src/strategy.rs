use std::time::Instant;

use serde::{Deserialize, Serialize};
use tww_core::{ContractionGraph, TwwError, VertexId};

use crate::cache::ScoreCache;
use crate::options::SolverOptions;

/// Candidate-selection strategy used to contract one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Pair each of the lowest-red-degree vertices with its random-walk
    /// neighborhood. Suits near-uniform degree distributions.
    RedWalk,
    /// Score every pair among the lowest-total-degree vertices. Suits
    /// skewed degree distributions.
    DegreePair,
}

impl Strategy {
    /// Picks the strategy for a component from its degree deviation.
    pub fn select(deviation: f64, threshold: f64) -> Self {
        if deviation <= threshold {
            Strategy::RedWalk
        } else {
            Strategy::DegreePair
        }
    }

    /// Returns the kebab-case name used in diagnostics and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::RedWalk => "red-walk",
            Strategy::DegreePair => "degree-pair",
        }
    }
}

/// One emitted contraction, in external 1-based labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractionStep {
    /// Label of the vertex that survives the contraction.
    pub source: u32,
    /// Label of the vertex contracted away.
    pub twin: u32,
}

/// Result of contracting one component down to a single vertex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveOutcome {
    /// Contractions in decision order.
    pub steps: Vec<ContractionStep>,
    /// Peak red degree the component reached.
    pub width: usize,
    /// Label of the vertex left standing.
    pub survivor: u32,
}

/// Contracts the graph down to a single vertex with the given strategy.
///
/// Each iteration pools candidates, scores pairs through the cache with the
/// larger index canonicalized as the survivor, merges the best-scoring pair
/// (first seen wins ties) and resets the cache every
/// `score_reset_threshold` iterations. An iteration that yields no scored
/// pair, or that starts past the deadline, contracts the two
/// lowest-total-degree vertices unscored so the sequence always completes.
pub fn drive<G: ContractionGraph>(
    graph: &mut G,
    strategy: Strategy,
    options: &SolverOptions,
    deadline: Option<Instant>,
) -> Result<DriveOutcome, TwwError> {
    let mut steps = Vec::with_capacity(graph.active_count().saturating_sub(1));
    let mut cache = ScoreCache::new();
    let mut since_reset = 0usize;

    while graph.active_count() > 1 {
        let expired = deadline.is_some_and(|at| Instant::now() >= at);
        let scored = if expired {
            None
        } else {
            best_pair(graph, strategy, options, &mut cache)?
        };
        let (source, twin) = match scored {
            Some(pair) => pair,
            None => fallback_pair(graph)?,
        };

        steps.push(ContractionStep {
            source: graph.label(source)?,
            twin: graph.label(twin)?,
        });
        graph.merge(source, twin)?;

        since_reset += 1;
        if since_reset >= options.score_reset_threshold.max(1) {
            cache.clear();
            since_reset = 0;
        }
    }

    let survivor = graph
        .active_vertices()
        .first()
        .copied()
        .ok_or(TwwError::EmptyGraph)?;
    Ok(DriveOutcome {
        steps,
        width: graph.width(),
        survivor: graph.label(survivor)?,
    })
}

fn best_pair<G: ContractionGraph>(
    graph: &mut G,
    strategy: Strategy,
    options: &SolverOptions,
    cache: &mut ScoreCache,
) -> Result<Option<(VertexId, VertexId)>, TwwError> {
    let mut best: Option<(usize, VertexId, VertexId)> = None;
    match strategy {
        Strategy::DegreePair => {
            let pool = graph.top_k_lowest_total_degree(options.candidate_pool);
            for (i, &a) in pool.iter().enumerate() {
                for &b in pool.iter().skip(i + 1) {
                    consider(graph, cache, &mut best, a, b)?;
                }
            }
        }
        Strategy::RedWalk => {
            let pool = graph.top_k_lowest_red_degree(options.candidate_pool);
            for &a in &pool {
                let walked = graph.random_walk_neighborhood(a, options.walk_trials)?;
                for b in walked {
                    consider(graph, cache, &mut best, a, b)?;
                }
            }
        }
    }
    Ok(best.map(|(_, v1, v2)| (v1, v2)))
}

fn consider<G: ContractionGraph>(
    graph: &G,
    cache: &mut ScoreCache,
    best: &mut Option<(usize, VertexId, VertexId)>,
    a: VertexId,
    b: VertexId,
) -> Result<(), TwwError> {
    // The larger index survives the merge, keeping the emitted pair ordered
    // the same way the sequence consumers expect.
    let (v1, v2) = if a.as_raw() >= b.as_raw() {
        (a, b)
    } else {
        (b, a)
    };
    let score = match cache.get(v1, v2) {
        Some(hit) => hit,
        None => {
            let computed = graph.score(v1, v2)?;
            cache.insert(v1, v2, computed);
            computed
        }
    };
    if best.as_ref().map_or(true, |&(current, _, _)| score < current) {
        *best = Some((score, v1, v2));
    }
    Ok(())
}

fn fallback_pair<G: ContractionGraph>(graph: &G) -> Result<(VertexId, VertexId), TwwError> {
    let pool = graph.top_k_lowest_total_degree(2);
    match pool[..] {
        [a, b] => Ok(if a.as_raw() >= b.as_raw() {
            (a, b)
        } else {
            (b, a)
        }),
        _ => Err(TwwError::NoCandidates),
    }
}
