//! Error type shared across the solver crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical error type for the twin-width solver.
///
/// Every variant carries the vertex indices or input coordinates the
/// failure site has at hand, so diagnostics never need to be re-derived by
/// the caller. [`TwwError::code`] exposes a stable machine-readable kind
/// for scripting against stderr output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TwwError {
    /// The vertex index is out of range or already contracted away.
    #[error("vertex {vertex} does not exist or was contracted")]
    UnknownVertex {
        /// Raw index of the offending vertex.
        vertex: u32,
    },
    /// An operation would make a vertex adjacent to itself.
    #[error("vertex {vertex} cannot be adjacent to itself")]
    SelfLoop {
        /// Raw index of the offending vertex.
        vertex: u32,
    },
    /// A contraction named the same vertex as source and twin.
    #[error("cannot contract vertex {vertex} into itself")]
    IdenticalVertices {
        /// Raw index of the offending vertex.
        vertex: u32,
    },
    /// `add_edge` hit a pair already connected in the other color.
    #[error("edge {u}-{v} already exists in the other color, remove it before recoloring")]
    EdgeColorConflict {
        /// Raw index of the first endpoint.
        u: u32,
        /// Raw index of the second endpoint.
        v: u32,
    },
    /// A neighbor was sampled from a vertex that has none.
    #[error("vertex {vertex} has no neighbors to sample")]
    IsolatedVertex {
        /// Raw index of the offending vertex.
        vertex: u32,
    },
    /// The driver was handed a trigraph with no active vertices.
    #[error("cannot drive a trigraph with no active vertices")]
    EmptyGraph,
    /// The fallback contraction found fewer than two active vertices.
    #[error("fewer than two active vertices left to contract")]
    NoCandidates,
    /// An input line could not be read from the stream.
    #[error("line {line}: could not read input ({cause})")]
    ReadFailure {
        /// 1-based number of the unreadable line.
        line: usize,
        /// Underlying I/O failure.
        cause: String,
    },
    /// No `p tww` problem line before edge data, or none at all.
    #[error("no `p tww` problem line found")]
    MissingHeader {
        /// 1-based number of the first edge line, when one was seen.
        line: Option<usize>,
    },
    /// A second problem line was encountered.
    #[error("line {line}: second problem line encountered")]
    DuplicateHeader {
        /// 1-based number of the duplicate line.
        line: usize,
    },
    /// A problem line that is not of the form `p tww N M`.
    #[error("line {line}: expected `p tww N M`")]
    InvalidHeader {
        /// 1-based number of the malformed line.
        line: usize,
    },
    /// A token that should have been an unsigned integer.
    #[error("line {line}: expected an unsigned integer, found {token:?}")]
    InvalidToken {
        /// 1-based number of the malformed line.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// An edge line that is not of the form `u v`.
    #[error("line {line}: expected `u v`")]
    InvalidEdge {
        /// 1-based number of the malformed line.
        line: usize,
    },
    /// An edge label outside the declared vertex range.
    #[error("line {line}: label {label} outside 1..={vertices}")]
    LabelOutOfRange {
        /// 1-based number of the offending line.
        line: usize,
        /// The out-of-range label.
        label: u32,
        /// The declared vertex count.
        vertices: u32,
    },
    /// An edge line naming the same endpoint twice.
    #[error("line {line}: edge endpoints must differ, got {label} twice")]
    LoopEdge {
        /// 1-based number of the offending line.
        line: usize,
        /// The repeated label.
        label: u32,
    },
}

impl TwwError {
    /// Returns the stable machine-readable kind of this error.
    pub fn code(&self) -> &'static str {
        match self {
            TwwError::UnknownVertex { .. } => "unknown-vertex",
            TwwError::SelfLoop { .. } | TwwError::LoopEdge { .. } => "self-loop",
            TwwError::IdenticalVertices { .. } => "identical-vertices",
            TwwError::EdgeColorConflict { .. } => "edge-color-conflict",
            TwwError::IsolatedVertex { .. } => "isolated-vertex",
            TwwError::EmptyGraph => "empty-graph",
            TwwError::NoCandidates => "no-candidates",
            TwwError::ReadFailure { .. } => "read-failure",
            TwwError::MissingHeader { .. } => "missing-header",
            TwwError::DuplicateHeader { .. } => "duplicate-header",
            TwwError::InvalidHeader { .. } => "invalid-header",
            TwwError::InvalidToken { .. } => "invalid-token",
            TwwError::InvalidEdge { .. } => "invalid-edge",
            TwwError::LabelOutOfRange { .. } => "label-out-of-range",
        }
    }
}
