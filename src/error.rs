//! Error types surfaced at the boundaries described in the crate's error
//! handling design: malformed input graphs, samplers that run dry, and
//! internal invariant checks.

use thiserror::Error;

/// Errors produced while validating a graph or deriving an ordering from it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Adjacency is asymmetric, or references a vertex outside the vertex set.
    #[error("graph adjacency is not symmetric, or references an unknown vertex")]
    MalformedGraph,

    /// The requested BFS root is not a vertex of the graph.
    #[error("root vertex is not part of the graph")]
    RootNotInGraph,

    /// The graph has no vertices at all.
    #[error("graph has no vertices")]
    Empty,
}

/// Errors produced while sampling a satisfying assignment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The BDD is (or reduces to) the FALSE sink: it has no solutions.
    #[error("bdd has no satisfying assignments")]
    NoSolutions,
}

/// Crate-wide error, wrapping the boundary-specific kinds above and adding
/// the internal-consistency class that should never trigger outside a bug.
#[derive(Debug, Error)]
pub enum BddError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    /// An internal consistency check failed, e.g. a child id ≥ its parent's.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
