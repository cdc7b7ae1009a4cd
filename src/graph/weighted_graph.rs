//! Core graph structure: labelled vertices, a weight matrix and adjacency lists.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::types::{LabError, LabResult};

/// Edge weight. Zero is reserved for "no edge" in the matrix.
pub type Weight = u32;

/// An undirected weighted graph over `char`-labelled vertices.
///
/// Vertices get dense indices in insertion order. Every edge is stored twice
/// in the matrix (`matrix[i][j] == matrix[j][i]`) and once in each endpoint's
/// adjacency list, which keeps edge-insertion order for traversals.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// Index -> label.
    labels: Vec<char>,
    /// Label -> index.
    index: HashMap<char, usize>,
    /// Dense weight matrix, `vertex_count × vertex_count`.
    matrix: Vec<Vec<Weight>>,
    /// Neighbor indices per vertex, in edge-insertion order.
    adjacency: Vec<Vec<usize>>,
    /// Number of distinct undirected edges.
    edge_count: usize,
}

impl WeightedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add a vertex if it is not already present. Returns its index either way.
    pub fn add_vertex(&mut self, label: char) -> usize {
        if let Some(&idx) = self.index.get(&label) {
            return idx;
        }

        let idx = self.labels.len();
        self.labels.push(label);
        self.index.insert(label, idx);

        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; idx + 1]);
        self.adjacency.push(Vec::new());

        idx
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// Re-adding an existing edge overwrites its weight.
    pub fn add_edge(&mut self, from: char, to: char, weight: Weight) -> LabResult<()> {
        if from == to {
            return Err(LabError::SelfEdge(from));
        }
        if weight == 0 {
            return Err(LabError::ZeroWeight(from, to));
        }

        let a = self.add_vertex(from);
        let b = self.add_vertex(to);

        if self.matrix[a][b] == 0 {
            self.adjacency[a].push(b);
            self.adjacency[b].push(a);
            self.edge_count += 1;
        }
        self.matrix[a][b] = weight;
        self.matrix[b][a] = weight;

        Ok(())
    }

    /// Index of a vertex label, if present.
    pub fn index_of(&self, label: char) -> Option<usize> {
        self.index.get(&label).copied()
    }

    /// Index of a vertex label, or `UnknownVertex`.
    pub fn require(&self, label: char) -> LabResult<usize> {
        self.index_of(label).ok_or(LabError::UnknownVertex(label))
    }

    /// Label of the vertex at `idx`.
    ///
    /// Panics if `idx` is out of range; indices only come from this graph.
    pub fn label(&self, idx: usize) -> char {
        self.labels[idx]
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[char] {
        &self.labels
    }

    /// Weight between two vertex indices (0 = no edge).
    pub fn weight(&self, a: usize, b: usize) -> Weight {
        self.matrix[a][b]
    }

    /// Weight between two labels, if both exist and are adjacent.
    pub fn edge_weight(&self, from: char, to: char) -> Option<Weight> {
        let (a, b) = (self.index_of(from)?, self.index_of(to)?);
        match self.matrix[a][b] {
            0 => None,
            w => Some(w),
        }
    }

    /// Neighbor indices of a vertex, in edge-insertion order.
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    /// The full weight matrix.
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    /// Each undirected edge once, as `(from, to, weight)` with `from` the
    /// lower index.
    pub fn edges(&self) -> Vec<(char, char, Weight)> {
        let mut result = Vec::with_capacity(self.edge_count);
        for (a, neighbors) in self.adjacency.iter().enumerate() {
            for &b in neighbors {
                if a < b {
                    result.push((self.labels[a], self.labels[b], self.matrix[a][b]));
                }
            }
        }
        result
    }

    /// True if the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count();
        (0..n).all(|i| (0..n).all(|j| self.matrix[i][j] == self.matrix[j][i]))
    }

    /// Render the weight matrix with row and column labels.
    pub fn format_matrix(&self) -> String {
        let width = self
            .matrix
            .iter()
            .flatten()
            .map(|w| w.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        let _ = write!(out, "{:>width$}", "", width = 1);
        for &label in &self.labels {
            let _ = write!(out, " {:>width$}", label, width = width);
        }
        out.push('\n');

        for (i, row) in self.matrix.iter().enumerate() {
            let _ = write!(out, "{}", self.labels[i]);
            for w in row {
                let _ = write!(out, " {:>width$}", w, width = width);
            }
            out.push('\n');
        }
        out
    }
}
