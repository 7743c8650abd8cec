//! The input graph, plus the BFS vertex ordering, the derived edge
//! ordering, and the per-edge frontiers that the builder consumes.

use crate::error::GraphError;
use fxhash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// An undirected graph: a vertex set plus a symmetric adjacency map.
///
/// `V` is opaque to the core — it only needs to be cheaply cloned, hashed,
/// and totally ordered so that BFS tie-breaking is deterministic.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: Vec<V>,
    adjacency: FxHashMap<V, Vec<V>>,
}

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Builds a graph, checking that `adjacency` only mentions vertices in
    /// `vertices` and is symmetric (`u` adjacent to `v` implies `v`
    /// adjacent to `u`).
    pub fn new(
        vertices: Vec<V>,
        adjacency: FxHashMap<V, Vec<V>>,
    ) -> Result<Graph<V>, GraphError> {
        let vertex_set: FxHashSet<&V> = vertices.iter().collect();
        for (u, neighbors) in &adjacency {
            if !vertex_set.contains(u) {
                return Err(GraphError::MalformedGraph);
            }
            for w in neighbors {
                if !vertex_set.contains(w) {
                    return Err(GraphError::MalformedGraph);
                }
                let reciprocated = adjacency.get(w).is_some_and(|ws| ws.contains(u));
                if !reciprocated {
                    return Err(GraphError::MalformedGraph);
                }
            }
        }
        Ok(Graph {
            vertices,
            adjacency,
        })
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn neighbors(&self, v: &V) -> &[V] {
        self.adjacency.get(v).map(|ns| ns.as_slice()).unwrap_or(&[])
    }
}

/// BFS vertex ordering from `root`, ties broken by insertion order into the
/// frontier (i.e. by BFS discovery order), matching a stable min-priority
/// queue keyed by `(distance, insertion_order)`.
pub fn order_vertices<V: Clone + Eq + Hash + Ord>(
    graph: &Graph<V>,
    root: &V,
) -> Result<Vec<V>, GraphError> {
    if graph.vertices().is_empty() {
        return Err(GraphError::Empty);
    }
    if !graph.vertices().iter().any(|v| v == root) {
        return Err(GraphError::RootNotInGraph);
    }

    let mut closed: FxHashSet<V> = FxHashSet::default();
    let mut heap: BinaryHeap<Reverse<(u64, u64, V)>> = BinaryHeap::new();
    let mut next_insertion: u64 = 0;

    heap.push(Reverse((0, next_insertion, root.clone())));
    next_insertion += 1;

    let mut ordering = Vec::with_capacity(graph.vertices().len());
    while let Some(Reverse((distance, _, vertex))) = heap.pop() {
        if closed.contains(&vertex) {
            continue;
        }
        closed.insert(vertex.clone());
        ordering.push(vertex.clone());
        for w in graph.neighbors(&vertex) {
            if !closed.contains(w) {
                heap.push(Reverse((distance + 1, next_insertion, w.clone())));
                next_insertion += 1;
            }
        }
    }
    log::debug!(
        "bfs from root visited {} of {} vertices",
        ordering.len(),
        graph.vertices().len()
    );

    // Vertices outside the root's component never get discovered by the
    // BFS above, but the ordering must still cover every vertex exactly
    // once (a disconnected graph is not malformed, just unsatisfiable).
    // Append them in their original insertion order.
    for v in graph.vertices() {
        if !closed.contains(v) {
            ordering.push(v.clone());
        }
    }
    Ok(ordering)
}

/// Edge ordering: scan vertices in `vertex_order`, and for each `u` list its
/// neighbours with a larger index, ascending. Every edge appears exactly
/// once, as `(u_index, v_index)` with `u_index < v_index`.
pub fn order_edges<V: Clone + Eq + Hash + Ord>(
    graph: &Graph<V>,
    vertex_order: &[V],
) -> Vec<(usize, usize)> {
    let index_of: FxHashMap<&V, usize> = vertex_order.iter().enumerate().map(|(i, v)| (v, i)).collect();

    let mut edges = Vec::new();
    for (u_index, u) in vertex_order.iter().enumerate() {
        let mut neighbor_indices: Vec<usize> = graph
            .neighbors(u)
            .iter()
            .filter_map(|w| index_of.get(w).copied())
            .filter(|&v_index| v_index > u_index)
            .collect();
        neighbor_indices.sort_unstable();
        edges.extend(neighbor_indices.into_iter().map(|v_index| (u_index, v_index)));
    }
    edges
}

/// Frontier sets: entry `i` is `{u_i, u_i+1, ..., v_i}` for edge `i = (u_i,
/// v_i)`. Purely advisory for the builder (see the construction note on
/// skipping the frontier set for the death-check), but useful for
/// diagnostics and tests.
pub fn make_frontiers(edge_order: &[(usize, usize)]) -> Vec<Vec<usize>> {
    edge_order.iter().map(|&(u, v)| (u..=v).collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> Graph<usize> {
        let vertices: Vec<usize> = (0..n).collect();
        let mut adjacency = FxHashMap::default();
        for i in 0..n {
            let mut neighbors = Vec::new();
            if i > 0 {
                neighbors.push(i - 1);
            }
            if i + 1 < n {
                neighbors.push(i + 1);
            }
            adjacency.insert(i, neighbors);
        }
        Graph::new(vertices, adjacency).unwrap()
    }

    #[test]
    fn bfs_from_path_endpoint_is_the_identity_order() {
        let g = path_graph(5);
        let order = order_vertices(&g, &0).unwrap();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn unknown_root_is_rejected() {
        let g = path_graph(3);
        assert_eq!(order_vertices(&g, &10), Err(GraphError::RootNotInGraph));
    }

    #[test]
    fn asymmetric_adjacency_is_rejected() {
        let mut adjacency = FxHashMap::default();
        adjacency.insert(0usize, vec![1]);
        adjacency.insert(1, vec![]);
        assert_eq!(
            Graph::new(vec![0, 1], adjacency),
            Err(GraphError::MalformedGraph)
        );
    }

    #[test]
    fn edge_order_lists_each_edge_once_with_u_before_v() {
        let g = path_graph(4);
        let order = order_vertices(&g, &0).unwrap();
        let edges = order_edges(&g, &order);
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn frontiers_span_each_edges_endpoints() {
        let edges = vec![(0, 1), (1, 3)];
        let frontiers = make_frontiers(&edges);
        assert_eq!(frontiers, vec![vec![0, 1], vec![1, 2, 3]]);
    }

    #[test]
    fn vertices_unreachable_from_root_are_still_included() {
        let mut adjacency = FxHashMap::default();
        adjacency.insert(0usize, vec![]);
        adjacency.insert(1, vec![]);
        let g = Graph::new(vec![0, 1], adjacency).unwrap();
        let order = order_vertices(&g, &0).unwrap();
        assert_eq!(order.len(), 2);
        assert!(order.contains(&1));
    }
}
