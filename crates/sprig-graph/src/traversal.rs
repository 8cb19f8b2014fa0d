//! Whole-graph traversals from a starting vertex.
//!
//! All three traversals share one contract: every vertex reachable from
//! the start is reported exactly once, and nothing else is. They differ
//! only in the order they report in.
//!
//! The frontier is not deduplicated. A vertex may be queued several times
//! and is skipped when it comes off the frontier already visited.

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use std::collections::{BTreeSet, VecDeque};
use tracing::trace;

impl<V: Vertex> Graph<V> {
    /// Breadth-first traversal, returning vertices in visitation order.
    pub fn bft(&self, start: &V) -> Result<Vec<V>, V> {
        let mut order = Vec::new();
        self.bft_with(start, |vertex| order.push(vertex.clone()))?;
        Ok(order)
    }

    /// Breadth-first traversal, calling `visit` on each vertex as it is reached.
    pub fn bft_with<F>(&self, start: &V, mut visit: F) -> Result<(), V>
    where
        F: FnMut(&V),
    {
        self.get_neighbors(start)?;

        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut queue: VecDeque<V> = VecDeque::new();
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            if visited.contains(&current) {
                continue;
            }

            trace!("bft visiting {:?}", current);
            visit(&current);

            for neighbor in self.neighbors_of(&current) {
                queue.push_back(neighbor.clone());
            }
            visited.insert(current);
        }

        Ok(())
    }

    /// Iterative depth-first traversal, returning vertices in visitation order.
    ///
    /// Neighbors are pushed in ascending order, so the highest one is
    /// explored first.
    pub fn dft(&self, start: &V) -> Result<Vec<V>, V> {
        let mut order = Vec::new();
        self.dft_with(start, |vertex| order.push(vertex.clone()))?;
        Ok(order)
    }

    /// Iterative depth-first traversal, calling `visit` on each vertex.
    pub fn dft_with<F>(&self, start: &V, mut visit: F) -> Result<(), V>
    where
        F: FnMut(&V),
    {
        self.get_neighbors(start)?;

        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut stack: Vec<V> = vec![start.clone()];

        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }

            trace!("dft visiting {:?}", current);
            visit(&current);

            for neighbor in self.neighbors_of(&current) {
                stack.push(neighbor.clone());
            }
            visited.insert(current);
        }

        Ok(())
    }

    /// Recursive depth-first traversal, returning vertices in visitation order.
    ///
    /// Neighbors are descended into in ascending order. Recursion depth
    /// grows with the longest depth-first branch; prefer [`Graph::dft`]
    /// on very deep graphs.
    pub fn dft_recursive(&self, start: &V) -> Result<Vec<V>, V> {
        self.get_neighbors(start)?;

        // Fresh state per call; nothing carries over between traversals.
        let mut visited = BTreeSet::new();
        let mut order = Vec::new();
        self.dft_visit(start, &mut visited, &mut order);
        Ok(order)
    }

    fn dft_visit(&self, vertex: &V, visited: &mut BTreeSet<V>, order: &mut Vec<V>) {
        if !visited.insert(vertex.clone()) {
            return;
        }
        order.push(vertex.clone());

        for neighbor in self.neighbors_of(vertex) {
            if !visited.contains(neighbor) {
                self.dft_visit(neighbor, visited, order);
            }
        }
    }
}
