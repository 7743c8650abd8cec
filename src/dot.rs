//! Graphviz DOT export. Purely diagnostic: nodes are grouped into
//! `rank=same` clusters by variable, sinks are drawn as boxes labelled `T`
//! and the upside-down-T for `FALSE`, and low/high edges are dashed/solid.

use crate::bdd::Bdd;
use crate::bdd_pointer::BddPointer;
use std::collections::BTreeMap;
use std::fmt::Write as _;

pub fn to_dot(bdd: &Bdd) -> String {
    let mut layers: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for pointer in bdd.pointers() {
        layers
            .entry(bdd.var_of(pointer))
            .or_default()
            .push(pointer.to_index());
    }

    let mut out = String::new();
    let _ = writeln!(out, "digraph bdd {{");
    let _ = writeln!(out, "\tgraph []");

    for ids in layers.values() {
        let _ = writeln!(out, "\t{{");
        let _ = writeln!(out, "\t\trank = same;");
        for &id in ids {
            if id <= 1 {
                let label = if id == 1 { "T" } else { "\u{22A5}" };
                let _ = writeln!(out, "\t\t\"{id}\" [label=\"{label}\", shape = box];");
            } else {
                let var = bdd.var_of(BddPointer::from_index(id));
                let _ = writeln!(out, "\t\t\"{id}\" [label=\"{var}\", shape = circle];");
            }
        }
        let _ = writeln!(out, "\t}}");
    }

    for pointer in bdd.pointers() {
        let id = pointer.to_index();
        if id <= 1 {
            continue;
        }
        let lo = bdd.low_link_of(pointer).to_index();
        let hi = bdd.high_link_of(pointer).to_index();
        let _ = writeln!(out, "\t\"{id}\" -> \"{lo}\" [style=dashed];");
        let _ = writeln!(out, "\t\"{id}\" -> \"{hi}\" [style=solid];");
    }

    let _ = writeln!(out, "}}");
    out
}
