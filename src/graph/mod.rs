//! Undirected weighted graphs and the classic algorithms over them.

pub mod biconnected;
pub mod builder;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
pub mod weighted_graph;

pub use biconnected::{biconnected_components, Biconnectivity};
pub use builder::{chain_graph, sample_graph, GraphBuilder};
pub use shortest_path::{dijkstra, Distance};
pub use spanning_tree::{prim, SpanningTree, TreeEdge};
pub use traversal::{bfs, dfs, traverse, TraversalOrder};
pub use weighted_graph::{Weight, WeightedGraph};
