//! Line-oriented problem reader for the `p tww` edge-list format.

use std::collections::BTreeSet;
use std::io::BufRead;

use tww_core::{TwwError, VertexId};
use tww_graph::Trigraph;

/// Parsed problem: vertex count and the deduplicated 0-based edge set.
#[derive(Debug, Clone)]
pub struct ProblemInput {
    /// Number of vertices declared by the header.
    pub vertices: u32,
    /// Canonical `(min, max)` edges, 0-based.
    pub edges: BTreeSet<(u32, u32)>,
    /// Edge count declared by the header, before deduplication.
    pub declared_edges: usize,
}

/// Reads a problem from a `p tww N M` stream.
///
/// Lines starting with `c` and blank lines are ignored. Duplicate and
/// reverse-duplicate edges are dropped. Every malformed line aborts with an
/// error carrying the 1-based line number.
pub fn parse_problem(reader: impl BufRead) -> Result<ProblemInput, TwwError> {
    let mut header: Option<(u32, usize)> = None;
    let mut edges = BTreeSet::new();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|err| TwwError::ReadFailure {
            line: number,
            cause: err.to_string(),
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens[0] == "p" {
            if header.is_some() {
                return Err(TwwError::DuplicateHeader { line: number });
            }
            if tokens.len() != 4 || tokens[1] != "tww" {
                return Err(TwwError::InvalidHeader { line: number });
            }
            let vertices = parse_number(tokens[2], number)?;
            let declared = parse_number(tokens[3], number)? as usize;
            header = Some((vertices, declared));
            continue;
        }

        let Some((vertices, _)) = header else {
            return Err(TwwError::MissingHeader { line: Some(number) });
        };
        if tokens.len() != 2 {
            return Err(TwwError::InvalidEdge { line: number });
        }
        let u = parse_number(tokens[0], number)?;
        let v = parse_number(tokens[1], number)?;
        for label in [u, v] {
            if label == 0 || label > vertices {
                return Err(TwwError::LabelOutOfRange {
                    line: number,
                    label,
                    vertices,
                });
            }
        }
        if u == v {
            return Err(TwwError::LoopEdge {
                line: number,
                label: u,
            });
        }
        edges.insert((u.min(v) - 1, u.max(v) - 1));
    }

    let (vertices, declared_edges) = header.ok_or(TwwError::MissingHeader { line: None })?;
    Ok(ProblemInput {
        vertices,
        edges,
        declared_edges,
    })
}

fn parse_number(token: &str, line: usize) -> Result<u32, TwwError> {
    token.parse().map_err(|_| TwwError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

impl ProblemInput {
    /// Edge density `2M / (N(N-1))` using the declared edge count.
    pub fn density(&self) -> f64 {
        if self.vertices < 2 {
            return 0.0;
        }
        let n = self.vertices as f64;
        (2.0 * self.declared_edges as f64) / (n * (n - 1.0))
    }

    /// Builds the trigraph for the solver, switching to the complement graph
    /// when density exceeds one half. Twin-width is invariant under
    /// complement, so the sequence stays a valid witness either way.
    /// Returns the graph and whether it was complemented.
    pub fn build_trigraph(&self, seed: u64) -> Result<(Trigraph, bool), TwwError> {
        let complemented = self.density() > 0.5;
        let mut graph = Trigraph::with_seed(seed);
        graph.add_vertices(self.vertices as usize);
        if complemented {
            for u in 0..self.vertices {
                for v in u + 1..self.vertices {
                    if !self.edges.contains(&(u, v)) {
                        graph.add_edge_initial(VertexId::from_raw(u), VertexId::from_raw(v))?;
                    }
                }
            }
        } else {
            for &(u, v) in &self.edges {
                graph.add_edge_initial(VertexId::from_raw(u), VertexId::from_raw(v))?;
            }
        }
        graph.recompute_degree_buckets();
        Ok((graph, complemented))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_problem;
    use tww_core::{ContractionGraph, TwwError};

    fn parse(text: &str) -> Result<super::ProblemInput, TwwError> {
        parse_problem(text.as_bytes())
    }

    fn error_code(result: Result<super::ProblemInput, TwwError>) -> &'static str {
        result.expect_err("expected an input error").code()
    }

    #[test]
    fn parses_a_path_with_comments() {
        let problem = parse("c a path\np tww 4 3\n1 2\n2 3\nc noise\n3 4\n").unwrap();
        assert_eq!(problem.vertices, 4);
        assert_eq!(problem.declared_edges, 3);
        assert_eq!(problem.edges.len(), 3);
        assert!(problem.edges.contains(&(0, 1)));
    }

    #[test]
    fn duplicate_and_reversed_edges_collapse() {
        let problem = parse("p tww 3 4\n1 2\n2 1\n1 2\n2 3\n").unwrap();
        assert_eq!(problem.edges.len(), 2);
    }

    #[test]
    fn header_must_come_first() {
        assert_eq!(error_code(parse("1 2\np tww 2 1\n")), "missing-header");
    }

    #[test]
    fn header_must_be_present() {
        assert_eq!(error_code(parse("c only comments\n")), "missing-header");
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(error_code(parse("p tww 3 1\n1 x\n")), "invalid-token");
        assert_eq!(error_code(parse("p tww x 1\n")), "invalid-token");
        assert_eq!(error_code(parse("p cep 3 1\n")), "invalid-header");
        assert_eq!(error_code(parse("p tww 3 1\n1\n")), "invalid-edge");
        assert_eq!(
            error_code(parse("p tww 3 1\n1 2\np tww 3 1\n")),
            "duplicate-header"
        );
    }

    #[test]
    fn labels_are_range_checked() {
        assert_eq!(error_code(parse("p tww 3 1\n1 4\n")), "label-out-of-range");
        assert_eq!(error_code(parse("p tww 3 1\n0 2\n")), "label-out-of-range");
        assert_eq!(error_code(parse("p tww 3 1\n2 2\n")), "self-loop");
    }

    #[test]
    fn errors_name_the_offending_line() {
        let err = parse("p tww 3 2\n1 2\n3 9\n").expect_err("label out of range");
        assert_eq!(
            err,
            TwwError::LabelOutOfRange {
                line: 3,
                label: 9,
                vertices: 3
            }
        );
    }

    #[test]
    fn density_switches_to_the_complement() {
        let sparse = parse("p tww 4 3\n1 2\n2 3\n3 4\n").unwrap();
        assert!(sparse.density() <= 0.5);
        let (graph, complemented) = sparse.build_trigraph(1).unwrap();
        assert!(!complemented);
        assert_eq!(graph.active_count(), 4);

        let complete = parse("p tww 4 6\n1 2\n1 3\n1 4\n2 3\n2 4\n3 4\n").unwrap();
        assert!(complete.density() > 0.5);
        let (graph, complemented) = complete.build_trigraph(1).unwrap();
        assert!(complemented);
        for vertex in graph.active_vertices() {
            assert_eq!(graph.total_degree(vertex).unwrap(), 0);
        }
    }
}
