//! Integration tests over the seven-vertex sample graph.
//!
//! ```text
//! V1 -> V2, V4        V4 -> V3, V5, V6, V7
//! V2 -> V4, V5        V5 -> V7
//! V3 -> V6, V1        V7 -> V6
//! ```
//!
//! The graph contains the cycle V1 -> V4 -> V3 -> V1.

use std::collections::HashSet;

use matrixgraph::{DirectedGraph, Error, Result};

const VERTICES: [&str; 7] = ["V1", "V2", "V3", "V4", "V5", "V6", "V7"];

const EDGES: [(&str, &str, i64); 12] = [
    ("V1", "V2", 2),
    ("V1", "V4", 1),
    ("V2", "V4", 3),
    ("V2", "V5", 10),
    ("V3", "V6", 5),
    ("V3", "V1", 4),
    ("V4", "V3", 2),
    ("V4", "V5", 2),
    ("V4", "V6", 8),
    ("V4", "V7", 4),
    ("V5", "V7", 6),
    ("V7", "V6", 1),
];

fn sample_graph() -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new(10)?;
    for name in VERTICES {
        graph.insert_vertex(name)?;
    }
    for (from, to, weight) in EDGES {
        graph.insert_edge(from, to, weight)?;
    }
    Ok(graph)
}

/// The sample graph without the V3 -> V1 back edge, which makes it acyclic.
fn sample_dag() -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new(10)?;
    for name in VERTICES {
        graph.insert_vertex(name)?;
    }
    for (from, to, weight) in EDGES.iter().filter(|(f, t, _)| (*f, *t) != ("V3", "V1")) {
        graph.insert_edge(from, to, *weight)?;
    }
    Ok(graph)
}

#[test]
fn test_sample_shape() -> Result<()> {
    let graph = sample_graph()?;
    assert_eq!(graph.capacity(), 10);
    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), 12);
    assert_eq!(graph.weight("V2", "V5"), Some(10));
    assert_eq!(graph.weight("V5", "V2"), None);
    Ok(())
}

#[test]
fn test_dump_edges() -> Result<()> {
    let graph = sample_graph()?;
    let rows = graph.dump_edges();
    assert_eq!(rows.len(), 10);

    let v1_row: Vec<Option<i64>> = rows[0][..7].to_vec();
    assert_eq!(
        v1_row,
        vec![None, Some(2), None, Some(1), None, None, None]
    );

    let present = rows.iter().flatten().filter(|cell| cell.is_some()).count();
    assert_eq!(present, 12);
    Ok(())
}

#[test]
fn test_dfs_from_v1() -> Result<()> {
    let graph = sample_graph()?;
    assert_eq!(
        graph.dfs("V1")?,
        ["V1", "V2", "V4", "V3", "V6", "V5", "V7"]
    );
    Ok(())
}

#[test]
fn test_bfs_from_v3() -> Result<()> {
    let graph = sample_graph()?;
    // V3's successors are V1 (index 0) and V6 (index 5), explored in that order
    assert_eq!(
        graph.bfs("V3")?,
        ["V3", "V1", "V6", "V2", "V4", "V5", "V7"]
    );
    Ok(())
}

#[test]
fn test_dfs_and_bfs_visit_the_same_set() -> Result<()> {
    let graph = sample_graph()?;
    for start in VERTICES {
        let dfs = graph.dfs(start)?;
        let bfs = graph.bfs(start)?;

        let dfs_set: HashSet<&String> = dfs.iter().collect();
        let bfs_set: HashSet<&String> = bfs.iter().collect();
        assert_eq!(dfs_set.len(), dfs.len(), "dfs from {start} repeats a vertex");
        assert_eq!(bfs_set.len(), bfs.len(), "bfs from {start} repeats a vertex");
        assert_eq!(dfs_set, bfs_set, "reachable sets differ from {start}");
        assert_eq!(dfs[0], start);
        assert_eq!(bfs[0], start);
    }
    Ok(())
}

#[test]
fn test_sink_traversal() -> Result<()> {
    let graph = sample_graph()?;
    assert_eq!(graph.dfs("V6")?, ["V6"]);
    assert_eq!(graph.bfs("V6")?, ["V6"]);
    Ok(())
}

#[test]
fn test_top_sort_detects_cycle() -> Result<()> {
    let graph = sample_graph()?;
    match graph.top_sort() {
        Err(Error::CycleDetected { unsorted }) => {
            // Every vertex hangs off the V1 -> V4 -> V3 -> V1 cycle
            assert_eq!(unsorted, VERTICES);
        }
        other => panic!("expected a cycle, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_top_sort_dag() -> Result<()> {
    let graph = sample_dag()?;
    let order = graph.top_sort()?;
    assert_eq!(order, ["V1", "V2", "V4", "V3", "V5", "V7", "V6"]);

    let position = |name: &str| order.iter().position(|n| n == name);
    for (from, to, _) in graph.edges() {
        assert!(position(from) < position(to), "{from} must precede {to}");
    }
    Ok(())
}

#[test]
fn test_shortest_path_v1_to_v7() -> Result<()> {
    let graph = sample_graph()?;
    let path = graph.shortest_path("V1", "V7")?.expect("V7 is reachable");
    assert_eq!(path.distance(), 2);
    assert_eq!(path.path(), ["V1", "V4", "V7"]);
    assert_eq!(path.to_string(), "V1 -> V4 -> V7 (2 hops)");
    Ok(())
}

#[test]
fn test_shortest_path_to_self() -> Result<()> {
    let graph = sample_graph()?;
    for name in VERTICES {
        let path = graph.shortest_path(name, name)?.expect("self is reachable");
        assert_eq!(path.distance(), 0);
        assert_eq!(path.path(), [name]);
    }
    Ok(())
}

#[test]
fn test_shortest_path_unreachable_from_sink() -> Result<()> {
    let graph = sample_graph()?;
    assert!(graph.shortest_path("V6", "V1")?.is_none());
    Ok(())
}

#[test]
fn test_shortest_path_distances_are_minimal() -> Result<()> {
    let graph = sample_graph()?;
    // Hop distances from V1, computed by hand
    let expected = [
        ("V1", 0),
        ("V2", 1),
        ("V4", 1),
        ("V3", 2),
        ("V5", 2),
        ("V6", 2),
        ("V7", 2),
    ];
    for (target, distance) in expected {
        let path = graph.shortest_path("V1", target)?.expect("reachable from V1");
        assert_eq!(path.distance(), distance, "distance to {target}");
        assert_eq!(path.path().len(), distance + 1);
        assert_eq!(path.path()[0], "V1");
        assert_eq!(path.path()[distance], target);
        for hop in path.path().windows(2) {
            assert!(graph.weight(&hop[0], &hop[1]).is_some());
        }
    }
    Ok(())
}

#[test]
fn test_failed_mutations_leave_graph_unchanged() -> Result<()> {
    let mut graph = sample_graph()?;
    let before = graph.dump_edges();

    assert_eq!(
        graph.insert_vertex("V3"),
        Err(Error::DuplicateVertex("V3".to_string()))
    );
    assert_eq!(graph.vertex_count(), 7);

    assert_eq!(
        graph.insert_edge("V1", "V9", 1),
        Err(Error::UnknownVertex("V9".to_string()))
    );
    assert_eq!(
        graph.insert_edge("V0", "V1", 1),
        Err(Error::UnknownVertex("V0".to_string()))
    );
    assert_eq!(graph.dump_edges(), before);
    Ok(())
}

#[test]
fn test_unknown_vertices_in_queries() -> Result<()> {
    let graph = sample_graph()?;
    assert_eq!(graph.dfs("V8"), Err(Error::UnknownVertex("V8".to_string())));
    assert_eq!(graph.bfs("V8"), Err(Error::UnknownVertex("V8".to_string())));
    assert_eq!(
        graph.shortest_path("V1", "V8").unwrap_err(),
        Error::UnknownVertex("V8".to_string())
    );
    Ok(())
}

#[test]
fn test_fill_to_capacity() -> Result<()> {
    let mut graph = sample_graph()?;
    for name in ["V8", "V9", "V10"] {
        graph.insert_vertex(name)?;
    }
    assert!(graph.is_full());
    assert_eq!(
        graph.insert_vertex("V11"),
        Err(Error::CapacityExceeded { capacity: 10 })
    );

    graph.insert_edge("V7", "V10", 0)?;
    assert_eq!(graph.bfs("V5")?, ["V5", "V7", "V6", "V10"]);
    Ok(())
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::UnknownVertex("V8".into()).to_string(),
        "Vertex 'V8' does not exist"
    );
    assert_eq!(
        Error::CapacityExceeded { capacity: 10 }.to_string(),
        "Graph is full, cannot insert more than 10 vertices"
    );
    assert_eq!(
        Error::CycleDetected {
            unsorted: vec!["V1".into(), "V3".into()]
        }
        .to_string(),
        "Graph contains a cycle, 2 vertices cannot be ordered: V1, V3"
    );
}
