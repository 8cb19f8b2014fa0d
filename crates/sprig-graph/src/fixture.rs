//! JSON input files for graphs and genealogy data.
//!
//! ```json
//! { "vertices": [1, 2, 3], "edges": [[1, 2], [2, 3]] }
//! { "pairs": [[1, 3], [2, 3]] }
//! ```

use crate::ancestry::AncestorResolver;
use crate::builder::GraphBuilder;
use crate::error::GraphError;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError<i64>),
}

/// A graph described as vertex and edge lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFixture {
    pub vertices: Vec<i64>,
    #[serde(default)]
    pub edges: Vec<(i64, i64)>,
}

impl GraphFixture {
    /// Reads a fixture from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a fixture from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Captures the vertices and edges of an existing graph.
    pub fn from_graph(graph: &Graph<i64>) -> Self {
        Self {
            vertices: graph.vertices().copied().collect(),
            edges: graph.edges().map(|(from, to)| (*from, *to)).collect(),
        }
    }

    fn builder(self) -> GraphBuilder<i64> {
        GraphBuilder::new()
            .vertices(self.vertices)
            .edges(self.edges)
    }

    /// Builds the graph, skipping edges with unknown endpoints.
    pub fn into_graph(self) -> Graph<i64> {
        self.builder().build()
    }

    /// Builds the graph, failing on the first edge with an unknown endpoint.
    pub fn try_into_graph(self) -> Result<Graph<i64>, FixtureError> {
        Ok(self.builder().try_build()?)
    }
}

/// Genealogy data as `(parent, child)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryFixture {
    pub pairs: Vec<(i64, i64)>,
}

impl AncestryFixture {
    /// Reads a fixture from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a fixture from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds a resolver over the pairs.
    pub fn resolver(&self) -> AncestorResolver<i64> {
        AncestorResolver::from_pairs(self.pairs.iter().copied())
    }
}
