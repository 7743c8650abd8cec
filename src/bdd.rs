//! The array-based encoding of a binary decision diagram, per the data
//! model: node `0` is the `FALSE` sink, node `1` is the `TRUE` sink, and
//! the root is always the last node in the arena.

use crate::bdd_node::BddNode;
use crate::bdd_pointer::BddPointer;
use crate::error::BddError;
use std::iter::Map;
use std::ops::Range;

/// An ordered (and, once reduced, canonical) binary decision diagram.
///
/// `Bdd` owns its node arena outright: there is no sharing between BDDs,
/// so one can be cloned, sent across threads, or dropped without touching
/// any other diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bdd {
    nodes: Vec<BddNode>,
}

impl Bdd {
    pub(crate) fn from_nodes(nodes: Vec<BddNode>) -> Bdd {
        Bdd { nodes }
    }

    /// Number of nodes, including both sinks. Do not confuse with
    /// cardinality (the number of satisfying assignments).
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of Boolean variables in the underlying universe (one per edge).
    pub fn num_vars(&self) -> u32 {
        self.nodes[0].var
    }

    /// Pointer to the root of the diagram: always the last node.
    pub fn root_pointer(&self) -> BddPointer {
        BddPointer::from_index(self.nodes.len() - 1)
    }

    pub(crate) fn low_link_of(&self, node: BddPointer) -> BddPointer {
        self.nodes[node.to_index()].low
    }

    pub(crate) fn high_link_of(&self, node: BddPointer) -> BddPointer {
        self.nodes[node.to_index()].high
    }

    /// The conditioning variable of `node`. Sinks report `num_vars()`.
    pub(crate) fn var_of(&self, node: BddPointer) -> u32 {
        self.nodes[node.to_index()].var
    }

    pub(crate) fn node_at(&self, node: BddPointer) -> BddNode {
        self.nodes[node.to_index()]
    }

    pub(crate) fn mk_false(n_vars: u32) -> Bdd {
        Bdd {
            nodes: vec![BddNode::mk_zero(n_vars)],
        }
    }

    pub(crate) fn mk_true(n_vars: u32) -> Bdd {
        Bdd {
            nodes: vec![BddNode::mk_zero(n_vars), BddNode::mk_one(n_vars)],
        }
    }

    /// True if this BDD is exactly the `false` formula.
    pub fn is_false(&self) -> bool {
        self.nodes.len() == 1
    }

    /// True if this BDD is exactly the `true` formula.
    pub fn is_true(&self) -> bool {
        self.nodes.len() == 2
    }

    /// Iterator over every pointer in the arena, terminals included, in
    /// storage order (so the first two values are always the sinks).
    pub(crate) fn pointers(&self) -> Map<Range<usize>, fn(usize) -> BddPointer> {
        (0..self.size()).map(BddPointer::from_index)
    }

    /// Checks the DAG, ordering, and sink-convention invariants from the
    /// data model. Does not require the BDD to be reduced.
    pub fn check_invariants(&self) -> Result<(), BddError> {
        let s = self.size();
        if s == 0 {
            return Err(BddError::InvariantViolation("bdd has no nodes".into()));
        }
        let m = self.num_vars();
        let zero = &self.nodes[0];
        if zero.var != m || !zero.low.is_zero() || !zero.high.is_zero() {
            return Err(BddError::InvariantViolation(
                "node 0 is not a well-formed false sink".into(),
            ));
        }
        if s > 1 {
            let one = &self.nodes[1];
            if one.var != m || !one.low.is_one() || !one.high.is_one() {
                return Err(BddError::InvariantViolation(
                    "node 1 is not a well-formed true sink".into(),
                ));
            }
        }
        for id in 2..s {
            let node = &self.nodes[id];
            if node.low.to_index() >= id || node.high.to_index() >= id {
                return Err(BddError::InvariantViolation(format!(
                    "node {id} has a child with id >= its own id"
                )));
            }
            if self.var_of(node.low) <= node.var || self.var_of(node.high) <= node.var {
                return Err(BddError::InvariantViolation(format!(
                    "node {id} does not test variables in increasing order"
                )));
            }
        }
        if self.root_pointer().to_index() != s - 1 {
            return Err(BddError::InvariantViolation(
                "root is not the last node in the arena".into(),
            ));
        }
        Ok(())
    }

    /// Checks the additional reduced-BDD invariants: no node has
    /// `low == high`, and no two internal nodes are structurally equal.
    pub fn check_reduced(&self) -> Result<(), BddError> {
        let mut seen = fxhash::FxHashMap::default();
        for id in 2..self.size() {
            let node = &self.nodes[id];
            if node.low == node.high {
                return Err(BddError::InvariantViolation(format!(
                    "node {id} has low == high and should have been eliminated"
                )));
            }
            let key = (node.var, node.low, node.high);
            if let Some(prev) = seen.insert(key, id) {
                return Err(BddError::InvariantViolation(format!(
                    "nodes {prev} and {id} are structurally identical"
                )));
            }
        }
        Ok(())
    }
}
