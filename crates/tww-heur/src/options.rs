use serde::{Deserialize, Serialize};

/// Tunable parameters governing a solver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Number of lowest-degree vertices pooled as candidates per iteration.
    #[serde(default = "default_candidate_pool")]
    pub candidate_pool: usize,
    /// Number of random-walk trials per candidate in the red-walk strategy.
    #[serde(default = "default_walk_trials")]
    pub walk_trials: usize,
    /// Iterations between full score-cache resets.
    #[serde(default = "default_score_reset_threshold")]
    pub score_reset_threshold: usize,
    /// Degree-deviation cutoff: at or below it components use the red-walk
    /// strategy, above it the degree-pair strategy.
    #[serde(default = "default_deviation_threshold")]
    pub deviation_threshold: f64,
    /// Whether to contract connected components independently.
    #[serde(default = "default_true")]
    pub use_components: bool,
    /// Whether to collapse twin classes before the heuristic loop.
    #[serde(default)]
    pub eliminate_twins: bool,
    /// Optional wall-clock budget in milliseconds. Once exceeded, remaining
    /// contractions are chosen without scoring so the sequence still
    /// completes.
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
}

fn default_candidate_pool() -> usize {
    20
}

fn default_walk_trials() -> usize {
    10
}

fn default_score_reset_threshold() -> usize {
    1
}

fn default_deviation_threshold() -> f64 {
    25.0
}

fn default_true() -> bool {
    true
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            candidate_pool: default_candidate_pool(),
            walk_trials: default_walk_trials(),
            score_reset_threshold: default_score_reset_threshold(),
            deviation_threshold: default_deviation_threshold(),
            use_components: true,
            eliminate_twins: false,
            time_limit_ms: None,
        }
    }
}
