//! Tests for the GraphStore facade.

use std::collections::{HashMap, HashSet};

use crate::config::StoreConfig;
use crate::error::Error;
use crate::graph::{Edge, Strategy};
use crate::store::GraphStore;

fn labels(entries: &[(&str, &[u64])]) -> HashMap<String, HashSet<u64>> {
    entries
        .iter()
        .map(|(label, vertices)| ((*label).to_string(), vertices.iter().copied().collect()))
        .collect()
}

fn edges(pairs: &[(u64, u64)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

#[test]
fn test_default_strategy_is_performance() {
    assert_eq!(GraphStore::new().strategy(), Strategy::Performance);
    assert_eq!(GraphStore::default().strategy(), Strategy::Performance);
    assert_eq!(
        GraphStore::with_strategy(Strategy::Memory).strategy(),
        Strategy::Memory
    );
}

#[test]
fn test_from_config() {
    let config = StoreConfig::default()
        .with_strategy(Strategy::Memory)
        .with_initial_capacity(64);
    let store = GraphStore::from_config(&config);
    assert_eq!(store.strategy(), Strategy::Memory);
    assert_eq!(store.vertex_count(), 0);
}

#[test]
fn test_empty_store_has_no_paths() {
    for strategy in [Strategy::Memory, Strategy::Performance] {
        let mut store = GraphStore::with_strategy(strategy);
        assert!(store.shortest_path(0, 1, "a").is_none());
    }
}

#[test]
fn test_vertices_exist_immediately() {
    let mut store = GraphStore::new();
    for expected in 0..5 {
        let v = store.create_vertex();
        assert_eq!(v, expected);
        assert!(store.create_edge(v, v));
        assert!(store.add_label(v, "fresh"));
    }
    assert_eq!(store.vertex_count(), 5);
}

#[test]
fn test_mutations_reject_unknown_vertices() {
    let mut store = GraphStore::new();
    store.create_vertex();
    assert!(!store.create_edge(0, 1));
    assert!(!store.add_label(1, "x"));
    assert!(!store.remove_label(1, "x"));
    assert_eq!(store.graph().edge_count(), 0);
    assert!(store.graph().vertices_with_label("x").is_empty());
}

#[test]
fn test_from_parts_builds_store() {
    let mut store = GraphStore::from_parts(
        4,
        &labels(&[("1", &[0, 1, 3]), ("2", &[0, 2, 3])]),
        &edges(&[(0, 1), (0, 2), (1, 3), (2, 3)]),
        Strategy::Performance,
    )
    .unwrap();

    assert_eq!(store.vertex_count(), 4);
    assert_eq!(store.graph().edge_count(), 4);
    assert_eq!(store.shortest_path(0, 3, "1").unwrap().vertices, vec![0, 1, 3]);
}

#[test]
fn test_from_parts_rejects_bad_label_vertex() {
    let result = GraphStore::from_parts(
        2,
        &labels(&[("a", &[0, 2])]),
        &[],
        Strategy::Memory,
    );
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_from_parts_rejects_bad_edge() {
    let result = GraphStore::from_parts(
        2,
        &HashMap::new(),
        &edges(&[(0, 1), (1, 2)]),
        Strategy::Performance,
    );
    let err = result.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(ref msg) if msg.contains("1 -> 2")));
}

#[test]
fn test_from_parts_with_no_vertices() {
    let store = GraphStore::from_parts(0, &HashMap::new(), &[], Strategy::Memory).unwrap();
    assert_eq!(store.vertex_count(), 0);
}

#[test]
fn test_vertices_added_after_bulk_build_are_searchable() {
    for strategy in [Strategy::Memory, Strategy::Performance] {
        let mut store =
            GraphStore::from_parts(2, &labels(&[("k", &[0, 1])]), &edges(&[(0, 1)]), strategy)
                .unwrap();
        let v = store.create_vertex();
        assert!(store.create_edge(1, v));
        assert!(store.add_label(v, "k"));
        let path = store.shortest_path(0, v, "k").unwrap();
        assert_eq!(path.vertices, vec![0, 1, 2]);
    }
}

#[test]
fn test_memory_store_keeps_no_idle_slots() {
    let store = GraphStore::from_parts(10_000, &HashMap::new(), &[], Strategy::Memory).unwrap();
    assert_eq!(store.vertex_count(), 10_000);
    assert_eq!(store.state().reserved_slots(), 0);

    let config = StoreConfig::default()
        .with_strategy(Strategy::Memory)
        .with_initial_capacity(4096);
    assert_eq!(GraphStore::from_config(&config).state().reserved_slots(), 0);
}

#[test]
fn test_performance_store_reserves_initial_capacity() {
    let config = StoreConfig::default().with_initial_capacity(256);
    let store = GraphStore::from_config(&config);
    assert!(store.state().reserved_slots() >= 256);
}

#[test]
fn test_from_parts_rejects_unallocatable_vertex_count() {
    for strategy in [Strategy::Memory, Strategy::Performance] {
        let result = GraphStore::from_parts(u64::MAX, &HashMap::new(), &[], strategy);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}

#[test]
fn test_try_reserve_overflow_leaves_store_usable() {
    let mut store = GraphStore::new();
    assert!(matches!(
        store.try_reserve(usize::MAX),
        Err(Error::InvalidArgument(_))
    ));
    let a = store.create_vertex();
    let b = store.create_vertex();
    assert!(store.create_edge(a, b));
    assert!(store.add_label(a, "x"));
    assert!(store.add_label(b, "x"));
    assert_eq!(store.shortest_path(a, b, "x").unwrap().length, 1);
}
