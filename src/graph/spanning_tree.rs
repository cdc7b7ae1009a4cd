//! Minimum spanning tree (dense Prim).

use serde::Serialize;

use crate::types::LabResult;

use super::weighted_graph::Weight;
use super::WeightedGraph;

/// A tree edge from `parent` to `child`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    /// Vertex already in the tree when `child` joined.
    pub parent: char,
    /// Vertex that joined the tree through this edge.
    pub child: char,
    /// Edge weight.
    pub weight: Weight,
}

/// Result of [`prim`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpanningTree {
    /// Tree edges in child-index order.
    pub edges: Vec<TreeEdge>,
    /// Sum of edge weights.
    pub total_weight: u64,
}

/// Prim's algorithm from `start`.
///
/// Only the start vertex's connected component is spanned: the loop stops as
/// soon as no out-of-tree vertex has a finite key.
pub fn prim(graph: &WeightedGraph, start: char) -> LabResult<SpanningTree> {
    let root = graph.require(start)?;
    let n = graph.vertex_count();

    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    key[root] = Some(0);

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .filter_map(|v| key[v].map(|k| (k, v)))
            .min();
        let Some((k, u)) = next else {
            break;
        };
        in_tree[u] = true;
        log::debug!("added {} to tree with key {}", graph.label(u), k);

        for v in 0..n {
            let w = graph.weight(u, v);
            if w == 0 || in_tree[v] {
                continue;
            }
            if key[v].map_or(true, |k| w < k) {
                key[v] = Some(w);
                parent[v] = Some(u);
            }
        }
    }

    let mut tree = SpanningTree::default();
    for (child, p) in parent.iter().enumerate() {
        if let Some(p) = p {
            let weight = graph.weight(*p, child);
            tree.total_weight += u64::from(weight);
            tree.edges.push(TreeEdge {
                parent: graph.label(*p),
                child: graph.label(child),
                weight,
            });
        }
    }
    Ok(tree)
}
