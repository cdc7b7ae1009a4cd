//! Graph traversal algorithms (BFS, DFS).

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::LabResult;

use super::WeightedGraph;

/// Visiting discipline for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraversalOrder {
    /// FIFO frontier.
    BreadthFirst,
    /// Pre-order depth-first.
    DepthFirst,
}

impl TraversalOrder {
    /// Short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

/// Visit every vertex reachable from `start`, returning labels in visit order.
pub fn traverse(graph: &WeightedGraph, start: char, order: TraversalOrder) -> LabResult<Vec<char>> {
    match order {
        TraversalOrder::BreadthFirst => bfs(graph, start),
        TraversalOrder::DepthFirst => dfs(graph, start),
    }
}

/// Breadth-first traversal from `start`.
pub fn bfs(graph: &WeightedGraph, start: char) -> LabResult<Vec<char>> {
    let start_idx = graph.require(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start_idx);

    while let Some(current) = queue.pop_front() {
        order.push(graph.label(current));
        for &neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(order)
}

/// Depth-first pre-order traversal from `start`.
///
/// Uses an explicit stack of `(vertex, next neighbor position)` frames, so
/// the visit order is the same as the recursive formulation without its
/// depth limit.
pub fn dfs(graph: &WeightedGraph, start: char) -> LabResult<Vec<char>> {
    let start_idx = graph.require(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    visited[start_idx] = true;
    order.push(graph.label(start_idx));
    stack.push((start_idx, 0));

    while let Some(frame) = stack.last_mut() {
        let (vertex, cursor) = *frame;
        let neighbors = graph.neighbors(vertex);
        if cursor == neighbors.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let next = neighbors[cursor];
        if !visited[next] {
            visited[next] = true;
            order.push(graph.label(next));
            stack.push((next, 0));
        }
    }

    Ok(order)
}
