#![deny(missing_docs)]
#![doc = "Contraction heuristics: candidate strategies, score memoization and the component pipeline."]

mod cache;
mod options;
mod pipeline;
mod strategy;

pub use cache::ScoreCache;
pub use options::SolverOptions;
pub use pipeline::{solve, ComponentReport, SolveReport};
pub use strategy::{drive, ContractionStep, DriveOutcome, Strategy};
