use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tww_core::{ContractionGraph, TwwError, VertexId};
use tww_graph::{false_twin_classes, split_components, true_twin_classes, Trigraph};

use crate::options::SolverOptions;
use crate::strategy::{drive, ContractionStep, Strategy};

/// Per-component record of a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentReport {
    /// Number of vertices the component started with.
    pub vertices: usize,
    /// Degree deviation measured before the heuristic loop.
    pub degree_deviation: f64,
    /// Strategy selected from the deviation.
    pub strategy: Strategy,
    /// Peak red degree reached while contracting the component.
    pub width: usize,
    /// Label of the vertex left standing.
    pub survivor: u32,
}

/// Outcome of a full solve: the contraction sequence and its width witness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// All contractions in emission order, stitching pass included.
    pub steps: Vec<ContractionStep>,
    /// Peak red degree over all components.
    pub twin_width: usize,
    /// Per-component summaries in discovery order.
    pub components: Vec<ComponentReport>,
}

/// Runs the full contraction pipeline on a loaded trigraph.
///
/// The graph is split into connected components (unless disabled), each
/// component is contracted to a single vertex by the strategy its degree
/// deviation selects, and a final stitching pass joins the surviving
/// vertices so the sequence covers disconnected inputs too.
pub fn solve(graph: Trigraph, options: &SolverOptions) -> Result<SolveReport, TwwError> {
    let deadline = options
        .time_limit_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));
    let parts = if options.use_components {
        split_components(graph)?
    } else {
        vec![graph]
    };

    let mut steps = Vec::new();
    let mut components = Vec::new();
    let mut survivors: Vec<u32> = Vec::new();
    let mut twin_width = 0usize;

    for mut part in parts {
        if part.active_count() == 0 {
            continue;
        }
        let vertices = part.active_count();
        if options.eliminate_twins {
            collapse_twin_classes(&mut part, &mut steps)?;
        }
        let deviation = part.degree_deviation();
        let strategy = Strategy::select(deviation, options.deviation_threshold);
        let outcome = drive(&mut part, strategy, options, deadline)?;

        twin_width = twin_width.max(outcome.width);
        survivors.push(outcome.survivor);
        steps.extend(outcome.steps);
        components.push(ComponentReport {
            vertices,
            degree_deviation: deviation,
            strategy,
            width: outcome.width,
            survivor: outcome.survivor,
        });
    }

    // The stitch merges are between vertices of independent components, so
    // they never touch an edge and never raise any red degree.
    if let Some((&primary, rest)) = survivors.split_first() {
        for &other in rest {
            steps.push(ContractionStep {
                source: primary,
                twin: other,
            });
        }
    }

    Ok(SolveReport {
        steps,
        twin_width,
        components,
    })
}

/// Contracts every non-singleton twin class before the heuristic loop: true
/// twins first, then false-twin classes recomputed on the reduced graph.
/// Twin contractions never create a red edge.
fn collapse_twin_classes<G: ContractionGraph>(
    graph: &mut G,
    steps: &mut Vec<ContractionStep>,
) -> Result<(), TwwError> {
    let true_classes = true_twin_classes(graph)?;
    contract_classes(graph, &true_classes, steps)?;
    let false_classes = false_twin_classes(graph)?;
    contract_classes(graph, &false_classes, steps)?;
    Ok(())
}

fn contract_classes<G: ContractionGraph>(
    graph: &mut G,
    classes: &[Vec<VertexId>],
    steps: &mut Vec<ContractionStep>,
) -> Result<(), TwwError> {
    for class in classes {
        if let Some((&keeper, rest)) = class.split_first() {
            for &other in rest {
                steps.push(ContractionStep {
                    source: graph.label(keeper)?,
                    twin: graph.label(other)?,
                });
                graph.merge(keeper, other)?;
            }
        }
    }
    Ok(())
}
