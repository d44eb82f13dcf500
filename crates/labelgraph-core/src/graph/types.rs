//! Value types shared by the graph, the traversal state and the store.

use std::fmt;

/// Dense, zero-based vertex handle.
///
/// Handles are assigned in creation order and never reused.
pub type VertexId = u64;

/// A directed edge between two vertices.
///
/// # Example
///
/// ```rust
/// use labelgraph_core::graph::Edge;
///
/// let edge = Edge::new(0, 3);
/// assert_eq!(edge.source(), 0);
/// assert_eq!(edge.target(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// Returns the origin vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the destination vertex.
    #[must_use]
    pub fn target(&self) -> VertexId {
        self.target
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Self::new(source, target)
    }
}

/// A path found by a shortest-path query.
///
/// `vertices` runs from the source to the destination inclusive and
/// `length` is the number of edges traversed, so a single-vertex path has
/// length 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    /// Number of edges on the path.
    pub length: u64,
    /// Vertices visited, source first.
    pub vertices: Vec<VertexId>,
}

impl Path {
    /// Builds a path from its vertex sequence, deriving the length.
    ///
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn from_vertices(vertices: Vec<VertexId>) -> Option<Self> {
        let length = u64::try_from(vertices.len().checked_sub(1)?).ok()?;
        Some(Self { length, vertices })
    }

    /// Returns the first vertex of the path.
    #[must_use]
    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    /// Returns the last vertex of the path.
    #[must_use]
    pub fn destination(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Iterates over the edges of the path in order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.windows(2).map(|w| Edge::new(w[0], w[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
