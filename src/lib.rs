//! Classic data-structure and algorithm exercises.
//!
//! The core is an undirected weighted graph with traversals, Dijkstra's
//! shortest paths, Prim's spanning tree and biconnected components. Around it
//! sit smaller exercises: a complex-number vector, an infix expression
//! evaluator, the largest histogram rectangle, Huffman coding and a
//! bounding-box NMS benchmark.

pub mod cli;
pub mod complex;
pub mod config;
pub mod expr;
pub mod graph;
pub mod histogram;
pub mod huffman;
pub mod nms;
pub mod sort;
pub mod types;

// Re-export commonly used types at the crate root
pub use complex::ComplexVector;
pub use config::LabConfig;
pub use expr::evaluate;
pub use graph::{
    bfs, biconnected_components, dfs, dijkstra, prim, Biconnectivity, Distance, GraphBuilder,
    SpanningTree, WeightedGraph,
};
pub use histogram::largest_rectangle_area;
pub use huffman::{Bitmap, HuffmanTree};
pub use nms::{non_max_suppression, PerformanceResult};
pub use sort::SortAlgorithm;
pub use types::{BoundingBox, Complex, LabError, LabResult};
