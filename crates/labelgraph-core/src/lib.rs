//! # labelgraph core
//!
//! In-memory directed graph store with string labels on vertices and
//! label-constrained shortest-path queries.
//!
//! ## Features
//!
//! - **Dense handles**: vertices are `0..n`, created in order, never reused
//! - **Label index**: per-label compressed vertex sets for O(1) membership
//! - **Filtered BFS**: shortest paths restricted to vertices holding a label
//! - **Two traversal strategies**: hash-map state for huge, sparsely queried
//!   graphs, or vector state with O(touched) reset for raw speed
//!
//! ## Quick Start
//!
//! ```rust
//! use labelgraph_core::{GraphStore, Strategy};
//!
//! let mut store = GraphStore::with_strategy(Strategy::Performance);
//! for _ in 0..4 {
//!     store.create_vertex();
//! }
//! for (s, t) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
//!     store.create_edge(s, t);
//! }
//! for v in [0, 1, 3] {
//!     store.add_label(v, "1");
//! }
//!
//! let path = store.shortest_path(0, 3, "1").unwrap();
//! assert_eq!(path.vertices, vec![0, 1, 3]);
//!
//! store.remove_label(1, "1");
//! assert!(store.shortest_path(0, 3, "1").is_none());
//! ```
//!
//! ## Threading
//!
//! A store is single-writer. Queries reuse the store's traversal state, so
//! they take `&mut self`; run concurrent queries on separate stores.

#![warn(missing_docs)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;
pub mod store;
#[cfg(test)]
mod store_tests;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use graph::{
    DenseTraversalState, Edge, LabeledGraph, Path, PathFinder, SparseTraversalState, Strategy,
    TraversalState, VertexId,
};
pub use store::GraphStore;
