//! Sprig Graph - Directed adjacency-set graphs
//!
//! This crate stores a directed graph as a map from each vertex to the set
//! of vertices it has an edge to, and layers traversal and path search on
//! top of it. A separate resolver answers "earliest ancestor" questions over
//! flat (child, parent) genealogy data.
//!
//! # Architecture
//!
//! - [`Graph`] owns the adjacency sets and the neighbor lookup.
//! - Traversals (`bft`, `dft`, `dft_recursive`) and searches (`bfs`, `dfs`,
//!   `dfs_recursive`) are implemented on `Graph` in their own modules.
//! - [`AncestorResolver`] builds its own parent adjacency and never goes
//!   through `Graph`, since its edges point the other way.
//!
//! Neighbor sets are ordered, so every traversal is deterministic.
//!
//! # Example
//!
//! ```
//! use sprig_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex(1);
//! graph.add_vertex(2);
//! graph.add_vertex(3);
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 3).unwrap();
//!
//! assert_eq!(graph.bft(&1).unwrap(), vec![1, 2, 3]);
//! assert_eq!(graph.bfs(&1, &3).unwrap(), Some(vec![1, 2, 3]));
//! ```

mod ancestry;
mod builder;
mod error;
mod fixture;
mod graph;
mod search;
mod traversal;

pub use ancestry::{earliest_ancestor, Ancestor, AncestorResolver, NO_ANCESTOR};
pub use builder::GraphBuilder;
pub use error::{GraphError, Result};
pub use fixture::{AncestryFixture, FixtureError, GraphFixture};
pub use graph::{Graph, Vertex};
pub use search::Path;
