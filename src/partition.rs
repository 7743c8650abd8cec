//! Canonical partitions of the vertices touched so far, tracking "same
//! connected component so far" as the frontier slides across the edge
//! order.

/// A partition of the touched vertices into maximal connected components,
/// kept in canonical form (each subset sorted, subsets sorted by their
/// smallest element) so it can be used directly as a hash-map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Partition {
    subsets: Vec<Vec<usize>>,
}

impl Partition {
    /// A partition containing just `{v}`.
    pub fn singleton(v: usize) -> Partition {
        Partition {
            subsets: vec![vec![v]],
        }
    }

    pub fn contains(&self, w: usize) -> bool {
        self.subsets.iter().any(|s| s.binary_search(&w).is_ok())
    }

    /// If no subset already contains `w`, append `{w}` as a new subset.
    pub fn extend_if_new(&mut self, w: usize) {
        if !self.contains(w) {
            self.subsets.push(vec![w]);
            self.canonicalize();
        }
    }

    /// Merge the subsets containing `u` and `v` into one (adding either as
    /// a fresh singleton first if it isn't present yet), keeping the rest
    /// disjoint.
    pub fn merge(&self, u: usize, v: usize) -> Partition {
        let mut merged = Vec::new();
        let mut rest = Vec::new();
        for subset in &self.subsets {
            if subset.contains(&u) || subset.contains(&v) {
                merged.extend_from_slice(subset);
            } else {
                rest.push(subset.clone());
            }
        }
        if !merged.contains(&u) {
            merged.push(u);
        }
        if !merged.contains(&v) {
            merged.push(v);
        }
        merged.sort_unstable();
        merged.dedup();
        rest.push(merged);
        let mut result = Partition { subsets: rest };
        result.canonicalize();
        result
    }

    /// Drop every element below `retained_from`, and any subset that
    /// becomes empty as a result. Used to bound the memory of partitions
    /// that carry vertices no future edge can touch.
    pub fn prune(&self, retained_from: usize) -> Partition {
        let mut subsets: Vec<Vec<usize>> = self
            .subsets
            .iter()
            .map(|s| {
                s.iter()
                    .copied()
                    .filter(|&w| w >= retained_from)
                    .collect::<Vec<_>>()
            })
            .filter(|s| !s.is_empty())
            .collect();
        subsets.sort();
        Partition { subsets }
    }

    /// True iff this partition is a single subset covering all `n` vertices,
    /// i.e. the induced subgraph already spans and connects everything.
    pub fn is_spanning(&self, n: usize) -> bool {
        self.subsets.len() == 1 && self.subsets[0].len() == n
    }

    /// True iff some subset's largest element is strictly below
    /// `next_frontier_low`: that component can never accept another edge,
    /// yet the partition as a whole is not (yet) the single spanning class.
    pub fn has_dead_subset(&self, next_frontier_low: usize) -> bool {
        self.subsets
            .iter()
            .any(|s| *s.iter().max().expect("subsets are never empty") < next_frontier_low)
    }

    fn canonicalize(&mut self) {
        for subset in self.subsets.iter_mut() {
            subset.sort_unstable();
        }
        self.subsets.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_if_new_adds_singleton_once() {
        let mut p = Partition::singleton(0);
        p.extend_if_new(1);
        p.extend_if_new(1);
        assert_eq!(p.subsets, vec![vec![0], vec![1]]);
    }

    #[test]
    fn merge_unions_components_and_keeps_rest_disjoint() {
        let mut p = Partition::singleton(0);
        p.extend_if_new(1);
        p.extend_if_new(2);
        let merged = p.merge(0, 1);
        assert_eq!(merged.subsets, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn merge_adds_missing_endpoints_as_singletons() {
        let p = Partition::singleton(5);
        let merged = p.merge(5, 6);
        assert_eq!(merged.subsets, vec![vec![5, 6]]);
    }

    #[test]
    fn is_spanning_requires_single_full_subset() {
        let p = Partition {
            subsets: vec![vec![0, 1, 2]],
        };
        assert!(p.is_spanning(3));
        assert!(!p.is_spanning(4));
        let split = Partition {
            subsets: vec![vec![0], vec![1, 2]],
        };
        assert!(!split.is_spanning(3));
    }

    #[test]
    fn has_dead_subset_detects_finalised_components() {
        let p = Partition {
            subsets: vec![vec![0, 1], vec![3, 4]],
        };
        assert!(p.has_dead_subset(2));
        assert!(!p.has_dead_subset(1));
    }

    #[test]
    fn prune_drops_finalised_elements_and_empty_subsets() {
        let p = Partition {
            subsets: vec![vec![0, 1], vec![2]],
        };
        let pruned = p.prune(1);
        assert_eq!(pruned.subsets, vec![vec![1]]);
    }
}
