//! Exact model counting (Knuth's Algorithm C), with arbitrary-precision
//! integers since counts for grids beyond ~7x7 exceed 2^64.

use crate::bdd::Bdd;
use crate::bdd_pointer::BddPointer;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes `count[k]`, the number of assignments to variables
/// `v(k)..n_vars` that make the sub-BDD rooted at `k` evaluate to `1`, for
/// every node `k` in `bdd`.
///
/// Variable skips (a child testing a variable more than one past its
/// parent's) contribute a factor of two per skipped variable, since those
/// variables may take either value freely.
pub fn solution_counts(bdd: &Bdd) -> Vec<BigUint> {
    let s = bdd.size();
    let mut count = vec![BigUint::zero(); s];
    if s > 1 {
        count[1] = BigUint::one();
    }
    for id in 2..s {
        let node = bdd.node_at(BddPointer::from_index(id));
        let v_lo = bdd.var_of(node.low);
        let v_hi = bdd.var_of(node.high);
        let weighted_lo = &count[node.low.to_index()] << (v_lo - node.var - 1);
        let weighted_hi = &count[node.high.to_index()] << (v_hi - node.var - 1);
        count[id] = weighted_lo + weighted_hi;
    }
    count
}

/// The total number of satisfying assignments of `bdd`: variables tested
/// before the root's are free, so the root's own count is scaled by
/// `2^v(root)`.
pub fn count_solutions(bdd: &Bdd) -> BigUint {
    let count = solution_counts(bdd);
    total_from_counts(bdd, &count)
}

/// Same as [`count_solutions`] but reusing a previously computed count
/// table, to avoid recomputing it once a caller already has one (e.g. to
/// feed the sampler).
pub fn total_from_counts(bdd: &Bdd, count: &[BigUint]) -> BigUint {
    let root = bdd.root_pointer();
    let v_root = bdd.var_of(root);
    (&count[root.to_index()]) << v_root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_unreduced;
    use crate::graph::Graph;
    use crate::reduce::reduce;
    use fxhash::FxHashMap as Map;

    fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> Graph<usize> {
        let vertices: Vec<usize> = (0..n).collect();
        let mut adjacency: Map<usize, Vec<usize>> = Map::default();
        for &v in &vertices {
            adjacency.insert(v, Vec::new());
        }
        for &(u, v) in edges {
            adjacency.get_mut(&u).unwrap().push(v);
            adjacency.get_mut(&v).unwrap().push(u);
        }
        Graph::new(vertices, adjacency).unwrap()
    }

    fn count_for(n: usize, edges: &[(usize, usize)]) -> BigUint {
        let g = graph_from_edges(n, edges);
        let bdd = reduce(&build_unreduced(&g, &0).unwrap());
        count_solutions(&bdd)
    }

    #[test]
    fn trivial_graph_has_one_solution() {
        assert_eq!(count_for(1, &[]), BigUint::from(1u32));
    }

    #[test]
    fn disconnected_graph_has_no_solutions() {
        assert_eq!(count_for(2, &[]), BigUint::zero());
    }

    #[test]
    fn single_edge_has_one_solution() {
        assert_eq!(count_for(2, &[(0, 1)]), BigUint::from(1u32));
    }

    #[test]
    fn triangle_has_four_solutions() {
        assert_eq!(count_for(3, &[(0, 1), (1, 2), (0, 2)]), BigUint::from(4u32));
    }

    #[test]
    fn four_cycle_has_eight_solutions() {
        // 2x2 grid == a 4-cycle: 4 spanning trees, plus the full cycle
        // itself counted twice over (each of its 4 edge-subsets missing
        // one edge is already a spanning tree) -- brute-forced to 8.
        assert_eq!(
            count_for(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]),
            BigUint::from(8u32)
        );
    }
}
