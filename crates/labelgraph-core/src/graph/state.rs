//! Per-query working state for breadth-first search.
//!
//! A [`TraversalState`] records, for every vertex reached by the current
//! query, its distance from the source and its BFS-tree parent. The state
//! is reused across queries and must be [`reset`](TraversalState::reset)
//! between them.
//!
//! Two strategies trade memory for speed:
//!
//! | Strategy | Storage | get/set | reset | Idle memory |
//! |----------|---------|---------|-------|-------------|
//! | [`SparseTraversalState`] | hash maps | O(1) hashed | O(touched) | none |
//! | [`DenseTraversalState`] | vectors | O(1) indexed | O(touched) | O(V) |

use std::collections::TryReserveError;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::types::{Path, VertexId};

/// Scratch storage for one BFS run.
///
/// Vertices without an assigned distance are "unreached" and compare as
/// infinitely far away.
pub trait TraversalState: fmt::Debug + Send {
    /// Returns the distance assigned to `vertex`, or `None` if unreached.
    fn distance(&self, vertex: VertexId) -> Option<u64>;

    /// Assigns the BFS distance of `vertex`.
    fn set_distance(&mut self, vertex: VertexId, distance: u64);

    /// Returns the BFS-tree parent of `vertex`, if one was recorded.
    fn parent(&self, vertex: VertexId) -> Option<VertexId>;

    /// Records `parent` as the BFS-tree parent of `vertex`.
    fn set_parent(&mut self, vertex: VertexId, parent: VertexId);

    /// Forgets every distance and parent recorded since the last reset.
    fn reset(&mut self);

    /// Returns true if nothing has been recorded since the last reset.
    fn is_clear(&self) -> bool;

    /// Returns which strategy this state implements.
    fn strategy(&self) -> Strategy;

    /// Notifies the state that the graph gained a vertex.
    ///
    /// Strategies that size lazily ignore this.
    fn on_vertex_created(&mut self) {}

    /// Reserves room for `additional` more vertices ahead of bulk creation.
    ///
    /// Strategies that size lazily ignore the hint.
    ///
    /// # Errors
    ///
    /// Fails if the capacity overflows or the allocator refuses.
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let _ = additional;
        Ok(())
    }

    /// Returns the number of per-vertex entries kept allocated while idle.
    fn reserved_slots(&self) -> usize;

    /// Rebuilds the path `source -> destination` from parent links.
    ///
    /// Expects `destination` to have been reached from `source` by the
    /// search that just completed. Returns `None` when the parent chain
    /// does not lead back to `source`.
    fn find_path(&self, source: VertexId, destination: VertexId) -> Option<Path> {
        let mut vertices = vec![destination];
        if source != destination {
            // A BFS chain has exactly `distance` hops, which also bounds
            // the walk if the links were corrupted into a cycle.
            let hops = self.distance(destination)?;
            let mut current = destination;
            for _ in 0..hops {
                current = self.parent(current)?;
                vertices.push(current);
                if current == source {
                    break;
                }
            }
            if current != source {
                return None;
            }
        }
        vertices.reverse();
        Path::from_vertices(vertices)
    }
}

/// Traversal state selection, fixed for the lifetime of a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Hash-map backed state; memory proportional to vertices touched.
    #[serde(alias = "sparse")]
    Memory,
    /// Vector backed state with incremental reset (default).
    #[default]
    #[serde(alias = "dense")]
    Performance,
}

impl Strategy {
    /// Creates an empty state of this strategy.
    #[must_use]
    pub fn new_state(self) -> Box<dyn TraversalState> {
        match self {
            Self::Memory => Box::new(SparseTraversalState::new()),
            Self::Performance => Box::new(DenseTraversalState::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Performance => write!(f, "performance"),
        }
    }
}

// ── Sparse (memory-optimized) ──────────────────────────────────────────

/// Memory-optimized state backed by hash maps.
///
/// Allocates nothing for vertices the query never reaches, which suits
/// queries that touch a small corner of a very large graph. The maps are
/// never pre-sized, since `reset` costs O(capacity) of the maps.
#[derive(Debug, Default, Clone)]
pub struct SparseTraversalState {
    distances: FxHashMap<VertexId, u64>,
    parents: FxHashMap<VertexId, VertexId>,
}

impl SparseTraversalState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraversalState for SparseTraversalState {
    fn distance(&self, vertex: VertexId) -> Option<u64> {
        self.distances.get(&vertex).copied()
    }

    fn set_distance(&mut self, vertex: VertexId, distance: u64) {
        self.distances.insert(vertex, distance);
    }

    fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parents.get(&vertex).copied()
    }

    fn set_parent(&mut self, vertex: VertexId, parent: VertexId) {
        self.parents.insert(vertex, parent);
    }

    fn reset(&mut self) {
        self.distances.clear();
        self.parents.clear();
    }

    fn is_clear(&self) -> bool {
        self.distances.is_empty() && self.parents.is_empty()
    }

    fn strategy(&self) -> Strategy {
        Strategy::Memory
    }

    fn reserved_slots(&self) -> usize {
        self.distances.capacity().max(self.parents.capacity())
    }
}

// ── Dense (performance-optimized) ──────────────────────────────────────

const UNREACHED: u64 = u64::MAX;
const NO_PARENT: VertexId = VertexId::MAX;

/// Performance-optimized state backed by vectors indexed by handle.
///
/// Holds one slot per graph vertex at all times and grows in lockstep with
/// the graph through [`on_vertex_created`](TraversalState::on_vertex_created).
/// Slots written during a query are remembered so that `reset` restores
/// only those, keeping reset cost proportional to the query rather than
/// to the graph.
#[derive(Debug, Default, Clone)]
pub struct DenseTraversalState {
    distances: Vec<u64>,
    parents: Vec<VertexId>,
    /// Vertices written since the last reset, each listed once.
    touched: Vec<VertexId>,
}

impl DenseTraversalState {
    /// Creates an empty state with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state with room reserved for `vertices` slots.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            distances: Vec::with_capacity(vertices),
            parents: Vec::with_capacity(vertices),
            touched: Vec::new(),
        }
    }

    /// Returns the number of slots currently allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no slots are allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    #[allow(clippy::cast_possible_truncation)]
    // Reason: handles index a Vec owned by the graph, so every live handle fits in usize.
    fn slot(vertex: VertexId) -> usize {
        vertex as usize
    }

    /// Returns the slot for `vertex`, growing storage if the graph was
    /// populated without notifying this state, and marks it touched.
    fn touch(&mut self, vertex: VertexId) -> usize {
        let slot = Self::slot(vertex);
        if slot >= self.distances.len() {
            self.distances.resize(slot + 1, UNREACHED);
            self.parents.resize(slot + 1, NO_PARENT);
        }
        if self.distances[slot] == UNREACHED && self.parents[slot] == NO_PARENT {
            self.touched.push(vertex);
        }
        slot
    }
}

impl TraversalState for DenseTraversalState {
    fn distance(&self, vertex: VertexId) -> Option<u64> {
        self.distances
            .get(Self::slot(vertex))
            .copied()
            .filter(|&d| d != UNREACHED)
    }

    fn set_distance(&mut self, vertex: VertexId, distance: u64) {
        let slot = self.touch(vertex);
        self.distances[slot] = distance;
    }

    fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parents
            .get(Self::slot(vertex))
            .copied()
            .filter(|&p| p != NO_PARENT)
    }

    fn set_parent(&mut self, vertex: VertexId, parent: VertexId) {
        let slot = self.touch(vertex);
        self.parents[slot] = parent;
    }

    fn reset(&mut self) {
        for vertex in self.touched.drain(..) {
            let slot = Self::slot(vertex);
            self.distances[slot] = UNREACHED;
            self.parents[slot] = NO_PARENT;
        }
    }

    fn is_clear(&self) -> bool {
        self.touched.is_empty()
    }

    fn strategy(&self) -> Strategy {
        Strategy::Performance
    }

    fn on_vertex_created(&mut self) {
        self.distances.push(UNREACHED);
        self.parents.push(NO_PARENT);
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.distances.try_reserve(additional)?;
        self.parents.try_reserve(additional)
    }

    fn reserved_slots(&self) -> usize {
        self.distances.capacity()
    }
}
