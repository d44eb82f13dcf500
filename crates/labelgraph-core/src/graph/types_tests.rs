//! Tests for graph value types (Edge, Path).

use super::types::{Edge, Path};

#[test]
fn test_edge_new() {
    let edge = Edge::new(4, 9);
    assert_eq!(edge.source(), 4);
    assert_eq!(edge.target(), 9);
}

#[test]
fn test_edge_from_tuple() {
    let edge: Edge = (1, 2).into();
    assert_eq!(edge, Edge::new(1, 2));
}

#[test]
fn test_path_from_vertices() {
    let path = Path::from_vertices(vec![0, 1, 3]).unwrap();
    assert_eq!(path.length, 2);
    assert_eq!(path.source(), Some(0));
    assert_eq!(path.destination(), Some(3));
}

#[test]
fn test_path_single_vertex_has_zero_length() {
    let path = Path::from_vertices(vec![5]).unwrap();
    assert_eq!(path.length, 0);
    assert_eq!(path.edges().count(), 0);
}

#[test]
fn test_path_from_empty_is_none() {
    assert!(Path::from_vertices(Vec::new()).is_none());
}

#[test]
fn test_path_edges() {
    let path = Path::from_vertices(vec![0, 2, 3]).unwrap();
    let edges: Vec<Edge> = path.edges().collect();
    assert_eq!(edges, vec![Edge::new(0, 2), Edge::new(2, 3)]);
}

#[test]
fn test_path_display() {
    let path = Path::from_vertices(vec![0, 1, 3]).unwrap();
    assert_eq!(path.to_string(), "0 -> 1 -> 3");
}
