//! Adjacency storage and label index for a directed, unweighted graph.
//!
//! Vertices are dense handles `0..vertex_count`, so adjacency lives in a
//! plain `Vec` indexed by handle. Labels map to compressed sets of holders.

use std::collections::TryReserveError;

use roaring::RoaringTreemap;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::types::VertexId;

// Outgoing adjacency of one vertex, in insertion order. Inline capacity
// covers the typical handful of out-edges.
type Neighbours = SmallVec<[VertexId; 4]>;

/// Directed graph whose vertices carry sets of string labels.
///
/// Provides O(1) vertex existence checks, O(degree) access to outgoing
/// edges and O(1) label membership tests.
#[derive(Debug, Default, Clone)]
pub struct LabeledGraph {
    /// `neighbours[v]`: destinations of edges leaving `v`, duplicates kept.
    neighbours: Vec<Neighbours>,
    /// label -> vertices holding it. Emptied labels are dropped.
    labels: FxHashMap<String, RoaringTreemap>,
    edge_count: usize,
}

impl LabeledGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            neighbours: Vec::with_capacity(vertices),
            ..Self::default()
        }
    }

    /// Reserves room for `additional` more vertices.
    ///
    /// # Errors
    ///
    /// Fails if the capacity overflows or the allocator refuses.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.neighbours.try_reserve(additional)
    }

    /// Converts a handle into an adjacency slot, if the vertex exists.
    pub(crate) fn slot(&self, vertex: VertexId) -> Option<usize> {
        usize::try_from(vertex)
            .ok()
            .filter(|&slot| slot < self.neighbours.len())
    }

    // ── Vertices ───────────────────────────────────────────────────────

    /// Appends a vertex with no edges and no labels, returning its handle.
    pub fn create_vertex(&mut self) -> VertexId {
        let id = self.vertex_count();
        self.neighbours.push(Neighbours::new());
        id
    }

    /// Returns true if `vertex` has been created.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.slot(vertex).is_some()
    }

    /// Returns the number of vertices created so far.
    #[must_use]
    pub fn vertex_count(&self) -> u64 {
        self.neighbours.len() as u64
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Adds a directed edge `source -> target`.
    ///
    /// Returns false without mutating anything if either endpoint does not
    /// exist. Self-loops and parallel edges are accepted.
    pub fn create_edge(&mut self, source: VertexId, target: VertexId) -> bool {
        if !self.contains_vertex(target) {
            return false;
        }
        let Some(slot) = self.slot(source) else {
            return false;
        };
        self.neighbours[slot].push(target);
        self.edge_count += 1;
        true
    }

    /// Returns the outgoing neighbours of `vertex` in insertion order.
    ///
    /// Unknown vertices have no neighbours.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> &[VertexId] {
        match self.slot(vertex) {
            Some(slot) => self.neighbours[slot].as_slice(),
            None => &[],
        }
    }

    /// Returns the total number of stored edges, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ── Labels ─────────────────────────────────────────────────────────

    /// Attaches `label` to `vertex`. Re-adding a held label is a no-op.
    ///
    /// Returns false if the vertex does not exist.
    pub fn add_label(&mut self, vertex: VertexId, label: &str) -> bool {
        if !self.contains_vertex(vertex) {
            return false;
        }
        if let Some(holders) = self.labels.get_mut(label) {
            holders.insert(vertex);
        } else {
            let mut holders = RoaringTreemap::new();
            holders.insert(vertex);
            self.labels.insert(label.to_owned(), holders);
        }
        true
    }

    /// Detaches `label` from `vertex`. Removing an absent label succeeds.
    ///
    /// Returns false if the vertex does not exist.
    pub fn remove_label(&mut self, vertex: VertexId, label: &str) -> bool {
        if !self.contains_vertex(vertex) {
            return false;
        }
        if let Some(holders) = self.labels.get_mut(label) {
            holders.remove(vertex);
            if holders.is_empty() {
                self.labels.remove(label);
            }
        }
        true
    }

    /// Returns true if `vertex` currently holds `label`.
    #[must_use]
    pub fn has_label(&self, vertex: VertexId, label: &str) -> bool {
        self.labels
            .get(label)
            .is_some_and(|holders| holders.contains(vertex))
    }

    /// Returns the set of vertices holding `label`, if any vertex does.
    pub(crate) fn label_members(&self, label: &str) -> Option<&RoaringTreemap> {
        self.labels.get(label)
    }

    /// Returns the vertices holding `label` in ascending order.
    #[must_use]
    pub fn vertices_with_label(&self, label: &str) -> Vec<VertexId> {
        self.labels
            .get(label)
            .map(|holders| holders.iter().collect())
            .unwrap_or_default()
    }

    /// Returns every label held by `vertex`, sorted.
    #[must_use]
    pub fn labels_of(&self, vertex: VertexId) -> Vec<&str> {
        let mut held: Vec<&str> = self
            .labels
            .iter()
            .filter(|(_, holders)| holders.contains(vertex))
            .map(|(label, _)| label.as_str())
            .collect();
        held.sort_unstable();
        held
    }

    /// Iterates over labels held by at least one vertex, in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }
}
