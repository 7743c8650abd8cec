//! One bottom-up pass collapsing redundant nodes (`low == high`) and
//! merging structural duplicates into an ordered reduced BDD (ROBDD).

use crate::bdd::Bdd;
use crate::bdd_node::BddNode;
use crate::bdd_pointer::BddPointer;
use fxhash::FxHashMap;

/// Reduces `bdd` into an isomorphic, minimal ordered BDD.
///
/// Complexity is `O(|nodes| * alpha)` thanks to the union-find-style
/// `redirect` map with path compression; without compression it would be
/// `O(|nodes| * depth)`, which is still fine at the target sizes.
pub fn reduce(bdd: &Bdd) -> Bdd {
    let s = bdd.size();
    if s <= 2 {
        // Only sinks: already minimal.
        return bdd.clone();
    }

    let mut redirect: FxHashMap<usize, usize> = FxHashMap::default();
    let mut cache: FxHashMap<(u32, usize, usize), usize> = FxHashMap::default();

    // Node ids run from the root (s - 1) down to 2 in increasing depth, and
    // `var` is exactly the depth for unreduced internal nodes, so walking
    // ids upward from 2 already visits nodes in decreasing-variable (i.e.
    // bottom-up) order.
    for id in 2..s {
        let node = bdd.node_at(BddPointer::from_index(id));
        let lo = find(&redirect, node.low.to_index());
        let hi = find(&redirect, node.high.to_index());
        if lo == hi {
            redirect.insert(id, lo);
        } else if let Some(&existing) = cache.get(&(node.var, lo, hi)) {
            redirect.insert(id, existing);
        } else {
            cache.insert((node.var, lo, hi), id);
        }
    }

    let root = find(&redirect, bdd.root_pointer().to_index());

    // The whole function collapsed to a single sink: the root itself
    // reduced away, so the result is the constant-false or constant-true
    // BDD, not a two-sink arena whose root happens to sit at index 1.
    if root <= 1 {
        return if root == 1 {
            Bdd::mk_true(bdd.num_vars())
        } else {
            Bdd::mk_false(bdd.num_vars())
        };
    }

    // Postorder (children before parent) DFS from the surviving root,
    // seeded with both sinks so they always occupy slots 0 and 1 even when
    // one of them isn't reachable.
    let mut seen = vec![false; s];
    seen[0] = true;
    seen[1] = true;
    let mut order = vec![0usize, 1usize];
    walk(bdd, &redirect, root, &mut seen, &mut order);

    let mut new_index: FxHashMap<usize, usize> = FxHashMap::default();
    for (new_id, &old_id) in order.iter().enumerate() {
        new_index.insert(old_id, new_id);
    }

    let m = bdd.num_vars();
    let mut nodes = vec![BddNode::mk_zero(m); order.len()];
    if order.len() > 1 {
        nodes[1] = BddNode::mk_one(m);
    }
    for (new_id, &old_id) in order.iter().enumerate() {
        if old_id <= 1 {
            continue;
        }
        let node = bdd.node_at(BddPointer::from_index(old_id));
        let lo = find(&redirect, node.low.to_index());
        let hi = find(&redirect, node.high.to_index());
        nodes[new_id] = BddNode::mk_node(
            node.var,
            BddPointer::from_index(new_index[&lo]),
            BddPointer::from_index(new_index[&hi]),
        );
    }

    Bdd::from_nodes(nodes)
}

fn find(redirect: &FxHashMap<usize, usize>, mut key: usize) -> usize {
    while let Some(&next) = redirect.get(&key) {
        if next == key {
            break;
        }
        key = next;
    }
    key
}

fn walk(
    bdd: &Bdd,
    redirect: &FxHashMap<usize, usize>,
    id: usize,
    seen: &mut [bool],
    order: &mut Vec<usize>,
) {
    if seen[id] {
        return;
    }
    seen[id] = true;
    let node = bdd.node_at(BddPointer::from_index(id));
    let lo = find(redirect, node.low.to_index());
    let hi = find(redirect, node.high.to_index());
    walk(bdd, redirect, lo, seen, order);
    walk(bdd, redirect, hi, seen, order);
    order.push(id);
}
