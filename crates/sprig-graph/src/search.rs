//! Path search between two vertices.
//!
//! The frontier holds whole paths rather than bare vertices, so the path
//! to the target is already in hand when it is found. A vertex is expanded
//! at most once, but it can sit at the end of several queued paths before
//! the first of them is processed.

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, trace};

/// A walk from a start vertex to its last element.
pub type Path<V> = Vec<V>;

impl<V: Vertex> Graph<V> {
    /// Finds a shortest path (fewest edges) from `start` to `target`.
    ///
    /// Returns `Ok(None)` if `target` is unreachable, and an error if
    /// `start` is not in the graph.
    pub fn bfs(&self, start: &V, target: &V) -> Result<Option<Path<V>>, V> {
        self.get_neighbors(start)?;

        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut queue: VecDeque<Path<V>> = VecDeque::new();
        queue.push_back(vec![start.clone()]);

        while let Some(path) = queue.pop_front() {
            let Some(current) = path.last() else {
                continue;
            };
            if !visited.insert(current.clone()) {
                continue;
            }

            if current == target {
                debug!(
                    "bfs {:?} -> {:?}: found path of {} edges",
                    start,
                    target,
                    path.len() - 1
                );
                return Ok(Some(path));
            }

            for neighbor in self.neighbors_of(current) {
                let mut next = path.clone();
                next.push(neighbor.clone());
                trace!("bfs enqueue {:?}", next);
                queue.push_back(next);
            }
        }

        debug!("bfs {:?} -> {:?}: no path", start, target);
        Ok(None)
    }

    /// Finds some path from `start` to `target`, exploring depth-first.
    ///
    /// The path is not necessarily the shortest one.
    pub fn dfs(&self, start: &V, target: &V) -> Result<Option<Path<V>>, V> {
        self.get_neighbors(start)?;

        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut stack: Vec<Path<V>> = vec![vec![start.clone()]];

        while let Some(path) = stack.pop() {
            let Some(current) = path.last() else {
                continue;
            };
            if !visited.insert(current.clone()) {
                continue;
            }

            if current == target {
                debug!(
                    "dfs {:?} -> {:?}: found path of {} edges",
                    start,
                    target,
                    path.len() - 1
                );
                return Ok(Some(path));
            }

            for neighbor in self.neighbors_of(current) {
                let mut next = path.clone();
                next.push(neighbor.clone());
                stack.push(next);
            }
        }

        debug!("dfs {:?} -> {:?}: no path", start, target);
        Ok(None)
    }

    /// Recursive depth-first path search.
    ///
    /// Returns the first path to `target` found by descending into
    /// neighbors in ascending order.
    pub fn dfs_recursive(&self, start: &V, target: &V) -> Result<Option<Path<V>>, V> {
        self.get_neighbors(start)?;

        let mut visited = BTreeSet::new();
        let mut path = Vec::new();
        if self.dfs_descend(start, target, &mut visited, &mut path) {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Extends `path` with `vertex` and searches below it.
    ///
    /// On success `path` ends at `target`; on failure it is restored to
    /// what it was on entry.
    fn dfs_descend(
        &self,
        vertex: &V,
        target: &V,
        visited: &mut BTreeSet<V>,
        path: &mut Path<V>,
    ) -> bool {
        visited.insert(vertex.clone());
        path.push(vertex.clone());

        if vertex == target {
            return true;
        }

        for neighbor in self.neighbors_of(vertex) {
            if !visited.contains(neighbor) && self.dfs_descend(neighbor, target, visited, path) {
                return true;
            }
        }

        path.pop();
        false
    }
}
