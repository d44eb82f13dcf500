//! In-memory labeled graph and label-constrained path search.
//!
//! Provides the graph storage, the per-query traversal state strategies
//! and the breadth-first path finder that ties them together.
//!
//! # Example
//!
//! ```rust
//! use labelgraph_core::graph::{shortest_path, DenseTraversalState, LabeledGraph, TraversalState};
//!
//! let mut graph = LabeledGraph::new();
//! let mut state = DenseTraversalState::new();
//! for _ in 0..3 {
//!     graph.create_vertex();
//!     state.on_vertex_created();
//! }
//! graph.create_edge(0, 1);
//! graph.create_edge(1, 2);
//! for v in 0..3 {
//!     graph.add_label(v, "blue");
//! }
//!
//! let path = shortest_path(&graph, &mut state, 0, 2, "blue").unwrap();
//! assert_eq!(path.length, 2);
//! assert_eq!(path.vertices, vec![0, 1, 2]);
//! ```

mod labeled_graph;
mod state;
pub mod traversal;
mod types;

#[cfg(test)]
mod types_tests;

pub use labeled_graph::LabeledGraph;
pub use state::{DenseTraversalState, SparseTraversalState, Strategy, TraversalState};
pub use traversal::{shortest_path, PathFinder};
pub use types::{Edge, Path, VertexId};
