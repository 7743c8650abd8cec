//! Builds an `n`x`n` grid graph, counts its spanning connected edge
//! subsets, draws one uniform sample, and prints a DOT rendering of the
//! reduced BDD.
//!
//! Run with `cargo run --example grid -- 3`.

use connected_subgraph_bdd::{order_edges, order_vertices, Connectivity, Graph};
use fxhash::FxHashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

fn grid_adjacency(n: usize) -> (Vec<usize>, FxHashMap<usize, Vec<usize>>) {
    let idx = |i: usize, j: usize| i * n + j;
    let vertices: Vec<usize> = (0..n * n).collect();
    let mut adjacency: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
    for &v in &vertices {
        adjacency.insert(v, Vec::new());
    }
    for i in 0..n {
        for j in 0..n {
            if j + 1 < n {
                let (a, b) = (idx(i, j), idx(i, j + 1));
                adjacency.get_mut(&a).unwrap().push(b);
                adjacency.get_mut(&b).unwrap().push(a);
            }
            if i + 1 < n {
                let (a, b) = (idx(i, j), idx(i + 1, j));
                adjacency.get_mut(&a).unwrap().push(b);
                adjacency.get_mut(&b).unwrap().push(a);
            }
        }
    }
    (vertices, adjacency)
}

fn main() {
    env_logger::init();

    let n: usize = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);

    let (vertices, adjacency) = grid_adjacency(n);
    log::info!("built {n}x{n} grid: {} vertices", vertices.len());

    let graph = Graph::new(vertices, adjacency).expect("grid adjacency is well-formed");
    // A corner root keeps the BDD far smaller than a central one, since the
    // vertex frontier stays narrower throughout the sweep.
    let root = 0usize;

    let connectivity = Connectivity::build(&graph, &root).expect("grid is non-empty");
    println!("bdd size: {} nodes", connectivity.bdd().size());
    println!("spanning connected subgraphs: {}", connectivity.count());

    // Variables are numbered in the BDD's own edge order, derived from the
    // same BFS vertex order `Connectivity::build` used internally -- not
    // the order edges happened to be pushed while building the adjacency
    // map above.
    let vertex_order = order_vertices(&graph, &root).expect("root is in the graph");
    let bdd_edge_order: Vec<(usize, usize)> = order_edges(&graph, &vertex_order)
        .into_iter()
        .map(|(u, v)| (vertex_order[u], vertex_order[v]))
        .collect();

    let mut rng = StdRng::seed_from_u64(0);
    match connectivity.sample(&mut rng) {
        Ok(assignment) => {
            let chosen: Vec<&(usize, usize)> = bdd_edge_order
                .iter()
                .zip(assignment.iter())
                .filter(|(_, &bit)| bit)
                .map(|(edge, _)| edge)
                .collect();
            println!("sampled edge subset: {chosen:?}");
        }
        Err(err) => println!("no solutions to sample: {err}"),
    }

    println!("{}", connectivity.to_dot());
}
