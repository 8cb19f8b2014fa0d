//! Core graph data structure.
//!
//! A `Graph` maps every vertex to the set of vertices it has a directed
//! edge to. Everything else in the crate is built on top of it.

use crate::error::{GraphError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use tracing::{debug, warn};

/// Anything usable as a vertex identifier.
///
/// Vertices are map keys and set members, so they need a total order.
/// `Debug` is only used for error messages and logs.
pub trait Vertex: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Vertex for T {}

/// A directed graph stored as adjacency sets.
///
/// Invariant: every vertex that appears in a neighbor set is also a key
/// of the map. `add_edge` refuses edges that would break this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph<V: Vertex> {
    vertices: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Adds a vertex with no outgoing edges.
    ///
    /// Adding a vertex that already exists clears its outgoing edges.
    /// Edges pointing *to* it are kept.
    pub fn add_vertex(&mut self, id: V) {
        if let Some(dropped) = self.vertices.insert(id.clone(), BTreeSet::new()) {
            if !dropped.is_empty() {
                debug!(
                    "re-added vertex {:?}, dropped {} outgoing edges",
                    id,
                    dropped.len()
                );
            }
        }
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// Both vertices must already exist. Otherwise the graph is left
    /// untouched and `GraphError::UnknownEndpoint` is returned.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<(), V> {
        if !self.vertices.contains_key(&to) {
            warn!("edge {:?} -> {:?} rejected: vertex not found", from, to);
            return Err(GraphError::UnknownEndpoint { from, to });
        }

        match self.vertices.get_mut(&from) {
            Some(neighbors) => {
                neighbors.insert(to);
                Ok(())
            }
            None => {
                warn!("edge {:?} -> {:?} rejected: vertex not found", from, to);
                Err(GraphError::UnknownEndpoint { from, to })
            }
        }
    }

    /// Gets the set of vertices `id` has an edge to.
    pub fn get_neighbors(&self, id: &V) -> Result<&BTreeSet<V>, V> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }

    /// Returns true if `id` has been added.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(BTreeSet::len).sum()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over all vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Iterates over all edges as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.vertices
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
    }

    /// Neighbors of a vertex already known to be in the graph.
    ///
    /// Traversals only reach vertices through neighbor sets, and the
    /// invariant guarantees those are keys.
    pub(crate) fn neighbors_of(&self, id: &V) -> impl Iterator<Item = &V> {
        self.vertices.get(id).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_vertices() -> Graph<i64> {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_vertex(3);
        graph
    }

    #[test]
    fn test_add_vertex_starts_without_neighbors() {
        let graph = three_vertices();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.get_neighbors(&2).unwrap().is_empty());
    }

    #[test]
    fn test_add_edge() {
        let mut graph = three_vertices();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 3).unwrap();

        let neighbors: Vec<i64> = graph.get_neighbors(&1).unwrap().iter().copied().collect();
        assert_eq!(neighbors, vec![2, 3]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_duplicate_edge_collapses() {
        let mut graph = three_vertices();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 2).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_allowed() {
        let mut graph = three_vertices();
        graph.add_edge(3, 3).unwrap();
        assert!(graph.get_neighbors(&3).unwrap().contains(&3));
    }

    #[test]
    fn test_add_edge_unknown_target_leaves_graph_untouched() {
        let mut graph = three_vertices();
        graph.add_edge(1, 2).unwrap();
        let before = graph.clone();

        let err = graph.add_edge(1, 99).unwrap_err();
        assert_eq!(err, GraphError::UnknownEndpoint { from: 1, to: 99 });
        assert_eq!(graph, before);
    }

    #[test]
    fn test_add_edge_unknown_source_leaves_graph_untouched() {
        let mut graph = three_vertices();
        let before = graph.clone();

        assert!(graph.add_edge(42, 1).is_err());
        assert!(!graph.contains_vertex(&42));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_get_neighbors_unknown_vertex() {
        let graph = three_vertices();
        assert_eq!(
            graph.get_neighbors(&7).unwrap_err(),
            GraphError::VertexNotFound(7)
        );
    }

    #[test]
    fn test_readd_vertex_clears_outgoing_edges() {
        let mut graph = three_vertices();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 1).unwrap();

        graph.add_vertex(1);

        assert!(graph.get_neighbors(&1).unwrap().is_empty());
        // Incoming edge from 2 survives.
        assert!(graph.get_neighbors(&2).unwrap().contains(&1));
    }

    #[test]
    fn test_edges_iteration() {
        let mut graph = three_vertices();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(1, 3).unwrap();

        let edges: Vec<(i64, i64)> = graph.edges().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(edges, vec![(1, 3), (2, 3)]);
    }

    #[test]
    fn test_serializes_as_adjacency_map() {
        let mut graph = three_vertices();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(2, 1).unwrap();

        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(json, r#"{"1":[2],"2":[1,3],"3":[]}"#);
    }

    #[test]
    fn test_string_vertices() {
        let mut graph: Graph<String> = Graph::new();
        graph.add_vertex("a".to_string());
        graph.add_vertex("b".to_string());
        graph.add_edge("a".to_string(), "b".to_string()).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.is_empty());
    }
}
