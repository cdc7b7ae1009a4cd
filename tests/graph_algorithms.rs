//! Graph container, traversal, shortest path, spanning tree and
//! biconnectivity tests.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dsa_labs::graph::{
    bfs, biconnected_components, chain_graph, dfs, dijkstra, prim, sample_graph, traverse,
    Distance, GraphBuilder, TraversalOrder, WeightedGraph,
};
use dsa_labs::types::LabError;

/// Vertices reachable from `start` when `removed` is deleted, by plain BFS
/// over the matrix.
fn reachable_without(graph: &WeightedGraph, start: usize, removed: Option<usize>) -> usize {
    let n = graph.vertex_count();
    let mut seen = vec![false; n];
    let mut queue = VecDeque::from([start]);
    seen[start] = true;
    let mut count = 0;
    while let Some(u) = queue.pop_front() {
        count += 1;
        for v in 0..n {
            if Some(v) != removed && !seen[v] && graph.weight(u, v) > 0 {
                seen[v] = true;
                queue.push_back(v);
            }
        }
    }
    count
}

fn component_count(graph: &WeightedGraph, removed: Option<usize>) -> usize {
    let n = graph.vertex_count();
    let mut assigned = vec![false; n];
    let mut components = 0;
    for s in 0..n {
        if Some(s) == removed || assigned[s] {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([s]);
        assigned[s] = true;
        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if Some(v) != removed && !assigned[v] && graph.weight(u, v) > 0 {
                    assigned[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }
    components
}

fn brute_force_articulation_points(graph: &WeightedGraph) -> Vec<char> {
    let baseline = component_count(graph, None);
    let mut points: Vec<char> = (0..graph.vertex_count())
        .filter(|&v| component_count(graph, Some(v)) > baseline)
        .map(|v| graph.label(v))
        .collect();
    points.sort_unstable();
    points
}

fn random_graph(rng: &mut StdRng, vertices: usize, density: f64) -> WeightedGraph {
    let labels: Vec<char> = (0..vertices).map(|i| (b'A' + i as u8) as char).collect();
    let mut builder = GraphBuilder::new();
    for &label in &labels {
        builder = builder.vertex(label);
    }
    for i in 0..vertices {
        for j in i + 1..vertices {
            if rng.gen_bool(density) {
                builder = builder.edge(labels[i], labels[j], rng.gen_range(1..20));
            }
        }
    }
    builder.build().unwrap()
}

// ==================== Container Tests ====================

#[test]
fn test_sample_graph_shape() {
    let graph = sample_graph().unwrap();
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 12);
    assert!(graph.is_symmetric());
    assert_eq!(graph.edge_weight('A', 'G'), Some(4));
    assert_eq!(graph.edge_weight('G', 'A'), Some(4));
    assert_eq!(graph.edge_weight('A', 'H'), None);
}

#[test]
fn test_chain_graph_shape() {
    let graph = chain_graph().unwrap();
    assert_eq!(graph.vertex_count(), 12);
    assert_eq!(graph.edge_count(), 17);
    assert!(graph.is_symmetric());
}

#[test]
fn test_add_vertex_idempotent() {
    let mut graph = WeightedGraph::new();
    let a = graph.add_vertex('A');
    assert_eq!(graph.add_vertex('A'), a);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_add_edge_creates_endpoints() {
    let mut graph = WeightedGraph::new();
    graph.add_edge('X', 'Y', 7).unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.labels(), &['X', 'Y']);
    assert_eq!(graph.index_of('Y'), Some(1));
    assert_eq!(graph.label(0), 'X');
}

#[test]
fn test_readding_edge_overwrites_weight() {
    let mut graph = WeightedGraph::new();
    graph.add_edge('A', 'B', 3).unwrap();
    graph.add_edge('B', 'A', 9).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight('A', 'B'), Some(9));
    assert_eq!(graph.neighbors(0).len(), 1);
    assert_eq!(graph.neighbors(1).len(), 1);
}

#[test]
fn test_rejects_self_edge_and_zero_weight() {
    let mut graph = WeightedGraph::new();
    assert!(matches!(graph.add_edge('A', 'A', 1), Err(LabError::SelfEdge('A'))));
    assert!(matches!(
        graph.add_edge('A', 'B', 0),
        Err(LabError::ZeroWeight('A', 'B'))
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_format_matrix_has_labels() {
    let graph = sample_graph().unwrap();
    let text = graph.format_matrix();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].contains('A') && lines[0].contains('H'));
    assert!(lines[1].starts_with('A'));
}

#[test]
fn test_random_graphs_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let graph = random_graph(&mut rng, 10, 0.3);
        assert!(graph.is_symmetric());
    }
}

// ==================== Traversal Tests ====================

#[test]
fn test_bfs_order() {
    let graph = sample_graph().unwrap();
    assert_eq!(
        bfs(&graph, 'A').unwrap(),
        vec!['A', 'B', 'D', 'G', 'E', 'C', 'H', 'F']
    );
}

#[test]
fn test_dfs_matches_recursive_preorder() {
    let graph = sample_graph().unwrap();
    assert_eq!(
        dfs(&graph, 'A').unwrap(),
        vec!['A', 'B', 'E', 'D', 'G', 'H', 'F', 'C']
    );
}

#[test]
fn test_traverse_dispatch() {
    let graph = sample_graph().unwrap();
    assert_eq!(
        traverse(&graph, 'C', TraversalOrder::BreadthFirst).unwrap(),
        bfs(&graph, 'C').unwrap()
    );
    assert_eq!(
        traverse(&graph, 'C', TraversalOrder::DepthFirst).unwrap(),
        dfs(&graph, 'C').unwrap()
    );
}

#[test]
fn test_traversals_visit_reachable_once() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..30 {
        let graph = random_graph(&mut rng, 9, 0.25);
        let expected = reachable_without(&graph, 0, None);
        for order in [bfs(&graph, 'A').unwrap(), dfs(&graph, 'A').unwrap()] {
            assert_eq!(order.len(), expected);
            assert_eq!(order[0], 'A');
            let unique: HashSet<char> = order.iter().copied().collect();
            assert_eq!(unique.len(), order.len());
        }
    }
}

#[test]
fn test_traversal_unknown_start() {
    let graph = sample_graph().unwrap();
    assert!(matches!(bfs(&graph, 'Z'), Err(LabError::UnknownVertex('Z'))));
    assert!(matches!(dfs(&graph, 'Z'), Err(LabError::UnknownVertex('Z'))));
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_dijkstra_regression() {
    let graph = sample_graph().unwrap();
    let distances = dijkstra(&graph, 'A').unwrap();
    let mut by_label: Vec<(char, u64)> = distances
        .iter()
        .map(|(label, d)| (*label, d.value().unwrap()))
        .collect();
    by_label.sort_unstable();
    assert_eq!(
        by_label,
        vec![
            ('A', 0),
            ('B', 6),
            ('C', 19),
            ('D', 2),
            ('E', 9),
            ('F', 10),
            ('G', 4),
            ('H', 7),
        ]
    );
}

#[test]
fn test_dijkstra_index_order_and_start_zero() {
    let graph = chain_graph().unwrap();
    let distances = dijkstra(&graph, 'E').unwrap();
    let labels: Vec<char> = distances.iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, graph.labels());
    let e = graph.index_of('E').unwrap();
    assert_eq!(distances[e].1, Distance::Finite(0));
}

#[test]
fn test_dijkstra_unreachable() {
    let graph = GraphBuilder::new()
        .edge('A', 'B', 2)
        .edge('C', 'D', 1)
        .build()
        .unwrap();
    let distances = dijkstra(&graph, 'A').unwrap();
    assert_eq!(distances[1], ('B', Distance::Finite(2)));
    assert_eq!(distances[2], ('C', Distance::Unreachable));
    assert!(!distances[3].1.is_reachable());
    assert_eq!(distances[3].1.to_string(), "unreachable");
}

#[test]
fn test_dijkstra_satisfies_edge_relaxation() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let graph = random_graph(&mut rng, 10, 0.35);
        let distances = dijkstra(&graph, 'A').unwrap();
        for (a, b, w) in graph.edges() {
            let da = distances[graph.index_of(a).unwrap()].1.value();
            let db = distances[graph.index_of(b).unwrap()].1.value();
            match (da, db) {
                (Some(da), Some(db)) => {
                    assert!(db <= da + u64::from(w));
                    assert!(da <= db + u64::from(w));
                }
                (None, None) => {}
                _ => panic!("edge {}-{} crosses reachability", a, b),
            }
        }
    }
}

#[test]
fn test_dijkstra_unknown_start() {
    let graph = sample_graph().unwrap();
    assert!(matches!(
        dijkstra(&graph, 'Q'),
        Err(LabError::UnknownVertex('Q'))
    ));
}

// ==================== Spanning Tree Tests ====================

#[test]
fn test_prim_sample_graph() {
    let graph = sample_graph().unwrap();
    let tree = prim(&graph, 'A').unwrap();
    assert_eq!(tree.edges.len(), 7);
    assert_eq!(tree.total_weight, 32);

    let children: Vec<usize> = tree
        .edges
        .iter()
        .map(|e| graph.index_of(e.child).unwrap())
        .collect();
    let mut sorted = children.clone();
    sorted.sort_unstable();
    assert_eq!(children, sorted);

    for e in &tree.edges {
        assert_eq!(graph.edge_weight(e.parent, e.child), Some(e.weight));
    }
}

#[test]
fn test_prim_tree_is_acyclic_and_spanning() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..20 {
        let graph = random_graph(&mut rng, 10, 0.3);
        let tree = prim(&graph, 'A').unwrap();
        let reachable = reachable_without(&graph, 0, None);
        assert_eq!(tree.edges.len(), reachable - 1);

        // Union-find over tree edges: no edge may join an existing set.
        let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
        fn find(parent: &mut [usize], x: usize) -> usize {
            let mut x = x;
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }
        for e in &tree.edges {
            let a = find(&mut parent, graph.index_of(e.parent).unwrap());
            let b = find(&mut parent, graph.index_of(e.child).unwrap());
            assert_ne!(a, b, "cycle through {}-{}", e.parent, e.child);
            parent[a] = b;
        }
    }
}

#[test]
fn test_prim_disconnected_spans_start_component() {
    let graph = GraphBuilder::new()
        .edge('A', 'B', 2)
        .edge('B', 'C', 3)
        .edge('D', 'E', 1)
        .build()
        .unwrap();
    let tree = prim(&graph, 'A').unwrap();
    assert_eq!(tree.edges.len(), 2);
    assert_eq!(tree.total_weight, 5);
    assert!(tree.edges.iter().all(|e| e.child != 'D' && e.child != 'E'));
}

#[test]
fn test_prim_single_vertex() {
    let graph = GraphBuilder::new().vertex('A').build().unwrap();
    let tree = prim(&graph, 'A').unwrap();
    assert!(tree.edges.is_empty());
    assert_eq!(tree.total_weight, 0);
}

// ==================== Biconnectivity Tests ====================

#[test]
fn test_chain_graph_articulation_points() {
    let graph = chain_graph().unwrap();
    let result = biconnected_components(&graph);
    assert_eq!(result.articulation_points, vec!['E', 'G', 'H', 'J', 'K']);
    assert_eq!(result.components.len(), 6);

    let mut sizes: Vec<usize> = result.components.iter().map(|c| c.len()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![1, 1, 1, 3, 3, 8]);
}

#[test]
fn test_components_partition_edges() {
    let graph = chain_graph().unwrap();
    let result = biconnected_components(&graph);

    let mut seen: HashSet<(char, char)> = HashSet::new();
    for component in &result.components {
        for &(a, b) in component {
            let key = if a < b { (a, b) } else { (b, a) };
            assert!(seen.insert(key), "edge {}-{} listed twice", a, b);
        }
    }
    assert_eq!(seen.len(), graph.edge_count());
}

#[test]
fn test_sample_graph_is_biconnected() {
    let graph = sample_graph().unwrap();
    let result = biconnected_components(&graph);
    assert!(result.articulation_points.is_empty());
    assert_eq!(result.components.len(), 1);
    assert_eq!(result.components[0].len(), 12);
}

#[test]
fn test_articulation_points_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let graph = random_graph(&mut rng, 8, 0.3);
        let result = biconnected_components(&graph);
        assert_eq!(
            result.articulation_points,
            brute_force_articulation_points(&graph)
        );
        let listed: usize = result.components.iter().map(|c| c.len()).sum();
        assert_eq!(listed, graph.edge_count());
    }
}

#[test]
fn test_biconnected_disconnected_graph() {
    let graph = GraphBuilder::new()
        .edge('A', 'B', 1)
        .edge('B', 'C', 1)
        .edge('D', 'E', 1)
        .edge('E', 'F', 1)
        .edge('F', 'D', 1)
        .vertex('G')
        .build()
        .unwrap();
    let result = biconnected_components(&graph);
    assert_eq!(result.articulation_points, vec!['B']);
    assert_eq!(result.components.len(), 3);
}

#[test]
fn test_biconnected_empty_graph() {
    let result = biconnected_components(&WeightedGraph::new());
    assert!(result.components.is_empty());
    assert!(result.articulation_points.is_empty());
}
