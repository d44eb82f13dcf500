//! The graph store facade.
//!
//! [`GraphStore`] owns a [`LabeledGraph`] together with the traversal state
//! its path queries reuse. Mutations go straight to the graph; queries run
//! a [`PathFinder`] over the owned state, which is left reset afterwards.

use std::collections::{HashMap, HashSet};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::graph::{Edge, LabeledGraph, Path, PathFinder, Strategy, TraversalState, VertexId};

/// A directed, unweighted graph with vertex labels and shortest-path queries.
///
/// The store is single-writer: `shortest_path` takes `&mut self` because it
/// writes to the shared traversal state. Callers that need concurrent
/// queries should give each thread its own store.
///
/// # Example
///
/// ```rust
/// use labelgraph_core::GraphStore;
///
/// let mut store = GraphStore::new();
/// let a = store.create_vertex();
/// let b = store.create_vertex();
/// assert!(store.create_edge(a, b));
/// assert!(store.add_label(a, "team"));
/// assert!(store.add_label(b, "team"));
///
/// let path = store.shortest_path(a, b, "team").unwrap();
/// assert_eq!(path.length, 1);
/// assert!(store.shortest_path(b, a, "team").is_none());
/// ```
#[derive(Debug)]
pub struct GraphStore {
    graph: LabeledGraph,
    state: Box<dyn TraversalState>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// Creates an empty store using the default (performance) strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(Strategy::default())
    }

    /// Creates an empty store using the given traversal strategy.
    #[must_use]
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::from_config(&StoreConfig::default().with_strategy(strategy))
    }

    /// Creates an empty store from configuration.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        tracing::debug!(
            strategy = %config.strategy,
            initial_capacity = config.initial_capacity,
            "graph store created"
        );
        let mut store = Self {
            graph: LabeledGraph::new(),
            state: config.strategy.new_state(),
        };
        if let Err(err) = store.try_reserve(config.initial_capacity) {
            tracing::warn!(error = %err, "initial capacity not reserved");
        }
        store
    }

    /// Builds a populated store in one step.
    ///
    /// Creates `vertex_count` vertices, then applies every label, then every
    /// edge.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if room for `vertex_count` vertices
    /// cannot be reserved, or if a label or an edge references a vertex
    /// outside `0..vertex_count`. No store is produced in that case.
    pub fn from_parts(
        vertex_count: u64,
        labels: &HashMap<String, HashSet<VertexId>>,
        edges: &[Edge],
        strategy: Strategy,
    ) -> Result<Self> {
        let mut store = Self::with_strategy(strategy);
        let reserved = usize::try_from(vertex_count)
            .map_err(|_| Error::vertex_count_too_large(vertex_count))
            .and_then(|capacity| store.try_reserve(capacity));
        if let Err(err) = reserved {
            tracing::warn!(vertex_count, error = %err, "rejected bulk vertex count");
            return Err(err);
        }

        for _ in 0..vertex_count {
            store.create_vertex();
        }

        for (label, vertices) in labels {
            for &vertex in vertices {
                if !store.add_label(vertex, label) {
                    tracing::warn!(label = %label, vertex, vertex_count, "rejected bulk label");
                    return Err(Error::unknown_label_vertex(label, vertex, vertex_count));
                }
            }
        }

        for edge in edges {
            if !store.create_edge(edge.source(), edge.target()) {
                tracing::warn!(
                    source = edge.source(),
                    target = edge.target(),
                    vertex_count,
                    "rejected bulk edge"
                );
                return Err(Error::unknown_edge_vertex(
                    edge.source(),
                    edge.target(),
                    vertex_count,
                ));
            }
        }

        tracing::debug!(
            vertex_count,
            labels = labels.len(),
            edges = edges.len(),
            "graph store populated"
        );
        Ok(store)
    }

    /// Reserves room for `additional` more vertices in the graph and, for
    /// the performance strategy, in the traversal state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the allocation cannot be made.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.graph
            .try_reserve(additional)
            .and_then(|()| self.state.try_reserve(additional))
            .map_err(|err| {
                Error::InvalidArgument(format!("cannot reserve {additional} vertices: {err}"))
            })
    }

    /// Creates a new vertex and returns its handle.
    pub fn create_vertex(&mut self) -> VertexId {
        let id = self.graph.create_vertex();
        self.state.on_vertex_created();
        id
    }

    /// Adds a directed edge. Returns false if either vertex is unknown.
    pub fn create_edge(&mut self, source: VertexId, target: VertexId) -> bool {
        self.graph.create_edge(source, target)
    }

    /// Attaches `label` to `vertex`. Returns false if the vertex is unknown.
    pub fn add_label(&mut self, vertex: VertexId, label: &str) -> bool {
        self.graph.add_label(vertex, label)
    }

    /// Detaches `label` from `vertex`. Returns false if the vertex is unknown;
    /// removing a label the vertex does not hold still succeeds.
    pub fn remove_label(&mut self, vertex: VertexId, label: &str) -> bool {
        self.graph.remove_label(vertex, label)
    }

    /// Finds a shortest path from `source` to `destination` through
    /// vertices that all hold `label`.
    ///
    /// Returns `None` for unknown vertices, unknown labels, endpoints
    /// lacking the label and unreachable destinations alike.
    pub fn shortest_path(
        &mut self,
        source: VertexId,
        destination: VertexId,
        label: &str,
    ) -> Option<Path> {
        PathFinder::new(&self.graph, self.state.as_mut()).shortest_path(source, destination, label)
    }

    /// Returns the underlying graph for read-only inspection.
    #[must_use]
    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    /// Returns the traversal strategy chosen at construction.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.state.strategy()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &dyn TraversalState {
        self.state.as_ref()
    }

    /// Returns the number of vertices created so far.
    #[must_use]
    pub fn vertex_count(&self) -> u64 {
        self.graph.vertex_count()
    }
}
