//! Biconnected components and articulation points (Tarjan low-link DFS).
//!
//! Every vertex gets a discovery time `disc` and a low-link `low`, the
//! smallest discovery time reachable from its DFS subtree through at most one
//! back edge. Tree edges and back edges are pushed onto an edge stack as they
//! are first seen. When a child `v` of `u` finishes with `low[v] >= disc[u]`
//! (or `u` is a root that just gained its second child), `u` separates the
//! graph and the edges above and including `(u, v)` form one component.

use serde::Serialize;

use super::WeightedGraph;

/// Discovery time of a vertex the search has not reached yet.
const UNVISITED: usize = 0;

/// Result of [`biconnected_components`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Biconnectivity {
    /// One edge list per biconnected component, in discovery order. Edges
    /// are listed in the order they left the edge stack.
    pub components: Vec<Vec<(char, char)>>,
    /// Articulation points, sorted by label.
    pub articulation_points: Vec<char>,
}

struct Frame {
    vertex: usize,
    cursor: usize,
    children: usize,
}

/// Split the graph into biconnected components and find its cut vertices.
///
/// Runs one search per undiscovered vertex, so disconnected graphs are
/// covered. The DFS keeps its own frame stack instead of recursing.
pub fn biconnected_components(graph: &WeightedGraph) -> Biconnectivity {
    let n = graph.vertex_count();

    let mut disc = vec![UNVISITED; n];
    let mut low = vec![UNVISITED; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut is_cut = vec![false; n];
    let mut edge_stack: Vec<(usize, usize)> = Vec::new();
    let mut components: Vec<Vec<(usize, usize)>> = Vec::new();
    let mut time = 0;

    for root in 0..n {
        if disc[root] != UNVISITED {
            continue;
        }

        time += 1;
        disc[root] = time;
        low[root] = time;
        let mut stack = vec![Frame {
            vertex: root,
            cursor: 0,
            children: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let neighbors = graph.neighbors(u);

            if frame.cursor < neighbors.len() {
                let v = neighbors[frame.cursor];
                frame.cursor += 1;

                if disc[v] == UNVISITED {
                    frame.children += 1;
                    parent[v] = Some(u);
                    edge_stack.push((u, v));
                    time += 1;
                    disc[v] = time;
                    low[v] = time;
                    stack.push(Frame {
                        vertex: v,
                        cursor: 0,
                        children: 0,
                    });
                } else if parent[u] != Some(v) && disc[v] < disc[u] {
                    low[u] = low[u].min(disc[v]);
                    edge_stack.push((u, v));
                }
                continue;
            }

            // `u` is finished; fold its low-link into the parent frame.
            stack.pop();
            let Some(parent_frame) = stack.last() else {
                break;
            };
            let p = parent_frame.vertex;
            low[p] = low[p].min(low[u]);

            let separates = match parent[p] {
                None => parent_frame.children > 1,
                Some(_) => low[u] >= disc[p],
            };
            if separates {
                is_cut[p] = true;
                let mut component = Vec::new();
                while let Some(edge) = edge_stack.pop() {
                    component.push(edge);
                    if edge == (p, u) {
                        break;
                    }
                }
                log::debug!(
                    "component of {} edges split at {}",
                    component.len(),
                    graph.label(p)
                );
                components.push(component);
            }
        }

        if !edge_stack.is_empty() {
            let mut component = Vec::with_capacity(edge_stack.len());
            while let Some(edge) = edge_stack.pop() {
                component.push(edge);
            }
            components.push(component);
        }
    }

    let mut articulation_points: Vec<char> = is_cut
        .iter()
        .enumerate()
        .filter(|(_, &cut)| cut)
        .map(|(i, _)| graph.label(i))
        .collect();
    articulation_points.sort_unstable();

    Biconnectivity {
        components: components
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .map(|(a, b)| (graph.label(a), graph.label(b)))
                    .collect()
            })
            .collect(),
        articulation_points,
    }
}
