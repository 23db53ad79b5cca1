#![no_main]

use libfuzzer_sys::fuzz_target;
use matrixgraph::{DirectedGraph, Error};

// Byte stream as a little program: the first byte picks the capacity, then each opcode
// consumes its operands. Names are drawn from a small alphabet so duplicates, unknown
// vertices and cycles all come up often.
fuzz_target!(|data: &[u8]| {
    let Some((&capacity, mut ops)) = data.split_first() else {
        return;
    };
    let Ok(mut graph) = DirectedGraph::new(usize::from(capacity % 16)) else {
        return;
    };
    let name = |byte: u8| format!("v{}", byte % 20);

    while let [op, a, b, rest @ ..] = ops {
        ops = rest;
        match op % 6 {
            0 => {
                let count = graph.vertex_count();
                if graph.insert_vertex(name(*a)).is_err() {
                    assert_eq!(graph.vertex_count(), count);
                }
            }
            1 => {
                let before = graph.dump_edges();
                match graph.insert_edge(&name(*a), &name(*b), i64::from(*b) - 128) {
                    Ok(_) => assert!(graph.weight(&name(*a), &name(*b)).is_some()),
                    Err(_) => assert_eq!(graph.dump_edges(), before),
                }
            }
            2 | 3 => {
                if let (Ok(dfs), Ok(bfs)) = (graph.dfs(&name(*a)), graph.bfs(&name(*a))) {
                    let mut dfs = dfs;
                    let mut bfs = bfs;
                    dfs.sort();
                    bfs.sort();
                    assert_eq!(dfs, bfs);
                }
            }
            4 => match graph.top_sort() {
                Ok(order) => {
                    assert_eq!(order.len(), graph.vertex_count());
                    let position = |n: &str| order.iter().position(|o| o == n);
                    for (from, to, _) in graph.edges() {
                        assert!(position(from) < position(to));
                    }
                }
                Err(Error::CycleDetected { unsorted }) => assert!(!unsorted.is_empty()),
                Err(other) => panic!("unexpected error {other}"),
            },
            _ => {
                if let Ok(Some(path)) = graph.shortest_path(&name(*a), &name(*b)) {
                    assert_eq!(path.path().len(), path.distance() + 1);
                    for hop in path.path().windows(2) {
                        assert!(graph.weight(&hop[0], &hop[1]).is_some());
                    }
                }
            }
        }
    }
});
