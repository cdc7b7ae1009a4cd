//! Fluent API for building WeightedGraph instances.

use crate::types::LabResult;

use super::weighted_graph::Weight;
use super::WeightedGraph;

/// Fluent builder for constructing a WeightedGraph.
///
/// Edges are validated when [`GraphBuilder::build`] runs, in the order they
/// were added, so the resulting adjacency order matches the call order.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertices: Vec<char>,
    edges: Vec<(char, char, Weight)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated vertex.
    pub fn vertex(mut self, label: char) -> Self {
        self.vertices.push(label);
        self
    }

    /// Add an undirected weighted edge.
    pub fn edge(mut self, from: char, to: char, weight: Weight) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Add several edges at once.
    pub fn edges(mut self, edges: &[(char, char, Weight)]) -> Self {
        self.edges.extend_from_slice(edges);
        self
    }

    /// Build the final WeightedGraph.
    pub fn build(self) -> LabResult<WeightedGraph> {
        let mut graph = WeightedGraph::new();
        for label in self.vertices {
            graph.add_vertex(label);
        }
        for (from, to, weight) in self.edges {
            graph.add_edge(from, to, weight)?;
        }
        log::debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Edges of the 8-vertex weighted sample used for traversal, shortest-path
/// and spanning-tree demos.
pub const SAMPLE_EDGES: &[(char, char, Weight)] = &[
    ('A', 'B', 6),
    ('A', 'D', 2),
    ('A', 'G', 4),
    ('B', 'E', 9),
    ('B', 'C', 13),
    ('C', 'F', 11),
    ('D', 'E', 14),
    ('D', 'G', 12),
    ('E', 'F', 1),
    ('E', 'G', 5),
    ('F', 'H', 8),
    ('G', 'H', 3),
];

/// Edges of the 12-vertex sample with a chain of cut vertices, used for the
/// biconnected-components demo.
pub const CHAIN_EDGES: &[(char, char, Weight)] = &[
    ('A', 'B', 4),
    ('A', 'C', 13),
    ('A', 'D', 11),
    ('B', 'C', 12),
    ('B', 'E', 1),
    ('C', 'D', 5),
    ('C', 'E', 8),
    ('D', 'E', 14),
    ('E', 'F', 2),
    ('E', 'G', 9),
    ('F', 'G', 3),
    ('G', 'H', 7),
    ('H', 'I', 6),
    ('H', 'J', 10),
    ('I', 'J', 15),
    ('J', 'K', 16),
    ('K', 'L', 17),
];

/// The 8-vertex sample graph.
pub fn sample_graph() -> LabResult<WeightedGraph> {
    GraphBuilder::new().edges(SAMPLE_EDGES).build()
}

/// The 12-vertex chain sample graph.
pub fn chain_graph() -> LabResult<WeightedGraph> {
    GraphBuilder::new().edges(CHAIN_EDGES).build()
}
