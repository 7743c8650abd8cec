/// A pointer into a [`crate::bdd::Bdd`]'s node arena.
///
/// Sink pointers are fixed by convention: `0` is the `FALSE` sink, `1` is
/// the `TRUE` sink. Everything else is an internal node, and the DAG
/// invariant requires that a node's `low`/`high` pointers are always
/// strictly smaller than the node's own index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BddPointer(pub(crate) u32);

impl BddPointer {
    pub fn zero() -> BddPointer {
        BddPointer(0)
    }

    pub fn one() -> BddPointer {
        BddPointer(1)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_one(&self) -> bool {
        self.0 == 1
    }

    /// True for either sink.
    pub fn is_terminal(&self) -> bool {
        self.0 <= 1
    }

    pub fn from_bool(value: bool) -> BddPointer {
        if value {
            BddPointer::one()
        } else {
            BddPointer::zero()
        }
    }

    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> BddPointer {
        BddPointer(index as u32)
    }
}
