//! **What is this?** This crate builds, reduces, counts, and samples from a
//! **Binary Decision Diagram** (BDD) that enumerates the connected
//! edge-induced subgraphs of an undirected graph. Given a graph `G = (V,
//! E)` with `|E| = m` Boolean variables (one per edge), the BDD represents
//! the Boolean function `f : {0,1}^m -> {0,1}` that is `1` exactly when the
//! selected edge subset induces a subgraph whose non-isolated vertices
//! form a single connected component spanning `V` — a *spanning connected
//! subgraph*.
//!
//! **Why is this useful?** Enumerating spanning connected subgraphs by
//! brute force is exponential in `|E|`; the BDD compresses the satisfying
//! assignments into a DAG whose size tracks the width of the vertex
//! frontier rather than `|E|` directly, which for grids and similarly
//! narrow graphs is dramatically smaller than `2^|E|`. Once built, the BDD
//! supports exact model counting and uniform sampling in time linear in
//! its own size, rather than linear in the number of solutions.
//!
//! ## What is a BDD, here?
//!
//! A BDD is a rooted DAG of *beads*. Two beads are terminal: `FALSE` (at
//! array index `0`) and `TRUE` (at index `1`). Every other bead tests one
//! Boolean variable and has two outgoing edges, `low` (taken when the
//! variable is `0`) and `high` (taken when it is `1`). The diagram is
//! *ordered* — every root-to-sink path tests variables in increasing order
//! — and, after [`reduce()`](Connectivity::build) runs, *reduced*: no bead
//! has `low == high`, and no two beads are structurally identical.
//!
//! ## Encoding a BDD in an array
//!
//! Rather than a pointer graph, each [`Bdd`] is one flat array of beads,
//! indexed by a [`BddPointer`]. Beads are laid out so that every bead's
//! `low`/`high` pointers are strictly smaller than its own index — the
//! root is always the *last* bead in the array. This keeps the whole
//! diagram in one contiguous allocation and makes structural equality a
//! matter of comparing two vectors, with no pointer chasing.
//!
//! ## Pipeline
//!
//! The four algorithmic stages run in a strict, single-threaded pipeline:
//!
//! 1. The *builder* walks the edge order one variable at a time, tracking
//!    partitions of the vertices touched so far, and emits one bead per
//!    surviving partition at each depth.
//! 2. The *reducer* collapses the result into an ROBDD in one bottom-up
//!    pass.
//! 3. The *counter* tabulates, for every bead, how many completions of the
//!    remaining variables satisfy the formula, as arbitrary-precision
//!    integers (`num_bigint::BigUint`).
//! 4. The *sampler* walks the reduced BDD top-down, choosing `low` or
//!    `high` with probability proportional to each branch's completion
//!    count.
//!
//! [`Connectivity::build`] runs all four stages behind one call.

mod bdd;
mod bdd_node;
mod bdd_pointer;
mod builder;
mod count;
mod dot;
mod error;
mod graph;
mod partition;
mod reduce;
mod sample;

pub use bdd::Bdd;
pub use bdd_pointer::BddPointer;
pub use error::{BddError, GraphError, SampleError};
pub use graph::{make_frontiers, order_edges, order_vertices, Graph};

use num_bigint::BigUint;
use rand::Rng;
use std::hash::Hash;

/// The reduced BDD for a graph's spanning-connectedness function, bundled
/// with the per-node solution counts needed to sample from it.
///
/// Building one runs the whole pipeline — construction, reduction, and
/// counting — up front, so repeated calls to [`Connectivity::sample`] only
/// pay for the walk down the diagram.
#[derive(Debug, Clone)]
pub struct Connectivity {
    bdd: Bdd,
    count: Vec<BigUint>,
}

impl Connectivity {
    /// Runs the full pipeline: BFS vertex ordering from `root`, unreduced
    /// construction, reduction, and counting.
    pub fn build<V: Clone + Eq + Hash + Ord>(
        graph: &Graph<V>,
        root: &V,
    ) -> Result<Connectivity, BddError> {
        let unreduced = builder::build_unreduced(graph, root)?;
        let bdd = reduce::reduce(&unreduced);
        let count = count::solution_counts(&bdd);
        Ok(Connectivity { bdd, count })
    }

    /// The underlying reduced BDD.
    pub fn bdd(&self) -> &Bdd {
        &self.bdd
    }

    /// The total number of spanning connected edge subsets.
    pub fn count(&self) -> BigUint {
        count::total_from_counts(&self.bdd, &self.count)
    }

    /// Draws one uniformly random satisfying assignment, as `m` bits in
    /// edge-order order.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<bool>, SampleError> {
        sample::sample(&self.bdd, &self.count, rng)
    }

    /// A Graphviz DOT rendering of the underlying BDD, for debugging.
    pub fn to_dot(&self) -> String {
        dot::to_dot(&self.bdd)
    }
}
