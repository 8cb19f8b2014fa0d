//! Graph builder for constructing a graph from loose vertex and edge lists.
//!
//! Edges can only be added between existing vertices, so the builder
//! collects everything first and then adds it in two passes.

use crate::error::GraphError;
use crate::graph::{Graph, Vertex};
use tracing::{debug, warn};

/// Builds a `Graph` from vertex and edge lists given in any order.
///
/// The builder handles the two-pass process:
/// 1. Add all vertices to the graph
/// 2. Add the edges between them
pub struct GraphBuilder<V: Vertex> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> GraphBuilder<V> {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Queues vertices to add.
    pub fn vertices<I>(mut self, vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        self.vertices.extend(vertices);
        self
    }

    /// Queues directed edges to add.
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Finishes building, skipping edges with unknown endpoints.
    ///
    /// Each skipped edge is logged by `Graph::add_edge`.
    pub fn build(self) -> Graph<V> {
        let (graph, rejected) = self.build_collecting();
        if !rejected.is_empty() {
            warn!("skipped {} edges with unknown endpoints", rejected.len());
        }
        graph
    }

    /// Finishes building, failing on the first edge with an unknown endpoint.
    pub fn try_build(self) -> Result<Graph<V>, GraphError<V>> {
        let mut graph = Graph::new();
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (from, to) in self.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Finishes building and returns the graph along with every rejected edge.
    pub fn build_collecting(self) -> (Graph<V>, Vec<GraphError<V>>) {
        let mut graph = Graph::new();
        let mut rejected = Vec::new();

        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (from, to) in self.edges {
            if let Err(err) = graph.add_edge(from, to) {
                rejected.push(err);
            }
        }

        debug!(
            "built graph with {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        (graph, rejected)
    }
}
