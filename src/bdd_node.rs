use crate::bdd_pointer::BddPointer;

/// A single bead: a branching variable plus the two pointers taken when
/// that variable is `0` (`low`) or `1` (`high`).
///
/// Sinks are encoded as nodes too, with `var` set to the BDD's number of
/// variables (by convention, one past the last real variable index) and
/// `low == high == self`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct BddNode {
    pub var: u32,
    pub low: BddPointer,
    pub high: BddPointer,
}

impl BddNode {
    pub fn mk_zero(n_vars: u32) -> BddNode {
        BddNode {
            var: n_vars,
            low: BddPointer::zero(),
            high: BddPointer::zero(),
        }
    }

    pub fn mk_one(n_vars: u32) -> BddNode {
        BddNode {
            var: n_vars,
            low: BddPointer::one(),
            high: BddPointer::one(),
        }
    }

    pub fn mk_node(var: u32, low: BddPointer, high: BddPointer) -> BddNode {
        BddNode { var, low, high }
    }
}
