//! Layer-by-layer construction of the unreduced BDD: one internal node per
//! surviving partition at each depth, with early termination to sinks
//! driven by the pruning rule of the original source rather than the
//! (advisory-only) explicit frontier sets.

use crate::bdd::Bdd;
use crate::bdd_node::BddNode;
use crate::bdd_pointer::BddPointer;
use crate::error::BddError;
use crate::graph::{order_edges, order_vertices, Graph};
use crate::partition::Partition;
use fxhash::FxHashMap;
use std::hash::Hash;

/// Sentinel ids used while the builder is still assigning provisional
/// indices, before the final relabeling pass. Both are negative so they
/// never collide with a real partition id (which starts at `0`).
const TRUE_SINK: i64 = -2;
const FALSE_SINK: i64 = -1;

/// Builds the unreduced, ordered BDD for "the selected edges induce a
/// spanning connected subgraph of `graph`", using a BFS ordering rooted at
/// `root`.
pub fn build_unreduced<V: Clone + Eq + Hash + Ord>(
    graph: &Graph<V>,
    root: &V,
) -> Result<Bdd, BddError> {
    let vertex_order = order_vertices(graph, root)?;
    let n = vertex_order.len();

    // |V| <= 1: every edge subset (there are none) trivially spans and
    // connects. This is the EmptyGraph carve-out the Open Questions note
    // settles: |V| = 0 is a hard error (handled above by order_vertices),
    // but |V| = 1 is a legitimate, trivially-true degenerate graph.
    if n <= 1 {
        log::info!("graph has {n} vertices; spanning connectedness is vacuously true");
        return Ok(Bdd::mk_true(0));
    }

    let edge_order = order_edges(graph, &vertex_order);
    let m = edge_order.len();

    // |V| > 1 with no edges can never be connected.
    if m == 0 {
        log::info!("graph has {n} vertices and no edges; it cannot be spanning connected");
        return Ok(Bdd::mk_false(0));
    }

    log::info!("building unreduced bdd for {n} vertices, {m} edges");

    let mut next_partition_id: usize = 1; // id 0 is reserved for the initial partition
    let mut partitions: FxHashMap<usize, Partition> = FxHashMap::default();
    partitions.insert(0, Partition::singleton(edge_order[0].0));

    // bead id -> (variable, low, high); ids are negative for sinks until
    // the final relabeling pass rewrites everything into the arena.
    let mut beads: FxHashMap<i64, (u32, i64, i64)> = FxHashMap::default();
    beads.insert(TRUE_SINK, (m as u32, TRUE_SINK, TRUE_SINK));
    beads.insert(FALSE_SINK, (m as u32, FALSE_SINK, FALSE_SINK));

    for depth in 0..m {
        let (u, v) = edge_order[depth];

        debug_assert!(
            partitions.values().all(|p| p.contains(u)),
            "edge endpoint u={u} must already be present in every live partition at depth {depth}"
        );

        let next_frontier_low = if depth + 1 < m {
            edge_order[depth + 1].0
        } else {
            n
        };

        log::debug!(
            "depth {depth}: {} live partitions, edge ({u},{v}), next_frontier_low={next_frontier_low}",
            partitions.len()
        );

        let mut layer_cache: FxHashMap<Partition, i64> = FxHashMap::default();
        let mut next_partitions: FxHashMap<usize, Partition> = FxHashMap::default();

        // Iterate in sorted id order so that, given the same graph and
        // root, node allocation is deterministic run to run.
        let mut ids: Vec<usize> = partitions.keys().copied().collect();
        ids.sort_unstable();

        for id in ids {
            let partition = &partitions[&id];

            let mut low_partition = partition.clone();
            low_partition.extend_if_new(v);
            let low_id = classify(
                low_partition,
                n,
                next_frontier_low,
                &mut next_partition_id,
                &mut layer_cache,
                &mut next_partitions,
            );

            let high_partition = partition.merge(u, v);
            let high_id = classify(
                high_partition,
                n,
                next_frontier_low,
                &mut next_partition_id,
                &mut layer_cache,
                &mut next_partitions,
            );

            beads.insert(id as i64, (depth as u32, low_id, high_id));
        }

        partitions = next_partitions;
    }

    Ok(relabel(beads, m as u32))
}

/// Looks `partition` up in this depth's cache, allocating a fresh id (and
/// registering it for the next depth) only if it hasn't been seen yet at
/// this layer and doesn't immediately resolve to a sink.
fn classify(
    partition: Partition,
    n: usize,
    next_frontier_low: usize,
    next_partition_id: &mut usize,
    layer_cache: &mut FxHashMap<Partition, i64>,
    next_partitions: &mut FxHashMap<usize, Partition>,
) -> i64 {
    if let Some(&id) = layer_cache.get(&partition) {
        return id;
    }

    let id = if partition.is_spanning(n) {
        TRUE_SINK
    } else if next_frontier_low == n || partition.has_dead_subset(next_frontier_low) {
        FALSE_SINK
    } else {
        let fresh = *next_partition_id as i64;
        *next_partition_id += 1;
        next_partitions.insert(fresh as usize, partition.clone());
        fresh
    };

    layer_cache.insert(partition, id);
    id
}

/// Rewrites provisional bead ids into the arena convention: sinks at `0`
/// (`FALSE`) and `1` (`TRUE`), and every other bead numbered so that the
/// bead created first (the depth-0 partition, i.e. the root) lands at
/// `size - 1` and children always precede their parents.
fn relabel(beads: FxHashMap<i64, (u32, i64, i64)>, m: u32) -> Bdd {
    let s = beads.len();
    let mut remap: FxHashMap<i64, usize> = FxHashMap::default();
    remap.insert(TRUE_SINK, 1);
    remap.insert(FALSE_SINK, 0);
    for i in 0..(s - 2) {
        remap.insert(i as i64, s - 1 - i);
    }

    let mut nodes = vec![BddNode::mk_zero(m); s];
    nodes[1] = BddNode::mk_one(m);
    for (&old_id, &(var, low, high)) in &beads {
        if old_id == TRUE_SINK || old_id == FALSE_SINK {
            continue;
        }
        let new_id = remap[&old_id];
        nodes[new_id] = BddNode::mk_node(
            var,
            BddPointer::from_index(remap[&low]),
            BddPointer::from_index(remap[&high]),
        );
    }
    Bdd::from_nodes(nodes)
}
