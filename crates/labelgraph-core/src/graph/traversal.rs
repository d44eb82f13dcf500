//! Label-constrained breadth-first shortest paths.
//!
//! The search only ever steps onto vertices that hold the query label, so
//! it runs over the label-induced subgraph without materializing it.

use std::collections::VecDeque;

use super::labeled_graph::LabeledGraph;
use super::state::TraversalState;
use super::types::{Path, VertexId};

/// Runs shortest-path queries over a graph using borrowed working state.
///
/// The finder never owns its state: the caller keeps one state alive across
/// queries and the finder leaves it reset after every call.
///
/// # Example
///
/// ```rust
/// use labelgraph_core::graph::{LabeledGraph, PathFinder, SparseTraversalState};
///
/// let mut graph = LabeledGraph::new();
/// let a = graph.create_vertex();
/// let b = graph.create_vertex();
/// graph.create_edge(a, b);
/// graph.add_label(a, "red");
/// graph.add_label(b, "red");
///
/// let mut state = SparseTraversalState::new();
/// let path = PathFinder::new(&graph, &mut state)
///     .shortest_path(a, b, "red")
///     .unwrap();
/// assert_eq!(path.vertices, vec![a, b]);
/// ```
#[derive(Debug)]
pub struct PathFinder<'a, S: TraversalState + ?Sized> {
    graph: &'a LabeledGraph,
    state: &'a mut S,
}

impl<'a, S: TraversalState + ?Sized> PathFinder<'a, S> {
    /// Creates a finder over `graph` that records its search in `state`.
    pub fn new(graph: &'a LabeledGraph, state: &'a mut S) -> Self {
        Self { graph, state }
    }

    /// Finds a shortest directed path from `source` to `destination` on
    /// which every vertex holds `label`.
    ///
    /// Returns `None` if either endpoint does not exist, if either endpoint
    /// lacks the label, or if no label-respecting route connects them.
    /// The traversal state is reset before the search starts and again
    /// before returning, whatever the outcome.
    pub fn shortest_path(
        &mut self,
        source: VertexId,
        destination: VertexId,
        label: &str,
    ) -> Option<Path> {
        if !self.state.is_clear() {
            tracing::debug!("discarding stale traversal state");
            self.state.reset();
        }
        let path = self.search(source, destination, label);
        self.state.reset();
        tracing::trace!(
            source,
            destination,
            label,
            length = path.as_ref().map(|p| p.length),
            "shortest path query"
        );
        path
    }

    fn search(&mut self, source: VertexId, destination: VertexId, label: &str) -> Option<Path> {
        let graph = self.graph;
        if !graph.contains_vertex(source) || !graph.contains_vertex(destination) {
            return None;
        }
        let members = graph.label_members(label)?;
        if !members.contains(source) || !members.contains(destination) {
            return None;
        }

        self.state.set_distance(source, 0);
        if source == destination {
            return self.state.find_path(source, destination);
        }

        let mut queue = VecDeque::from([source]);
        while let Some(current) = queue.pop_front() {
            let Some(depth) = self.state.distance(current) else {
                continue;
            };
            let next = depth + 1;

            for &neighbour in graph.neighbours(current) {
                if !members.contains(neighbour) {
                    continue;
                }

                if self.state.distance(neighbour).is_none_or(|d| d > next) {
                    self.state.set_distance(neighbour, next);
                    self.state.set_parent(neighbour, current);
                    queue.push_back(neighbour);
                }

                // Vertices leave the queue in non-decreasing distance order,
                // so the first time the destination is seen is a shortest route.
                if neighbour == destination {
                    return self.state.find_path(source, destination);
                }
            }
        }

        None
    }
}

/// Convenience wrapper around [`PathFinder::shortest_path`].
pub fn shortest_path<S: TraversalState + ?Sized>(
    graph: &LabeledGraph,
    state: &mut S,
    source: VertexId,
    destination: VertexId,
    label: &str,
) -> Option<Path> {
    PathFinder::new(graph, state).shortest_path(source, destination, label)
}
