//! Earliest-ancestor resolution over genealogy data.
//!
//! Input is a flat list of `(parent, child)` pairs, read as "child has
//! parent". The resolver keeps its own person → parents adjacency instead of
//! reusing [`Graph`](crate::Graph): its edges point from child to parent,
//! the opposite of the order the pairs are written in.

use crate::graph::Vertex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::{debug, trace};

/// Returned by [`earliest_ancestor`] when the person has no known parents.
pub const NO_ANCESTOR: i64 = -1;

/// The result of an ancestor lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ancestor<V> {
    /// The earliest known ancestor.
    pub id: V,
    /// Generations between the starting person and the ancestor (1 = parent).
    pub generations: usize,
}

/// Parent lookup built from `(parent, child)` pairs.
#[derive(Debug, Clone)]
pub struct AncestorResolver<V: Vertex> {
    parents: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Vertex> AncestorResolver<V> {
    /// Builds the parent adjacency. Every person named in a pair is
    /// registered, even if they have no parents of their own.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut parents: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
        for (parent, child) in pairs {
            parents.entry(parent.clone()).or_default();
            parents.entry(child).or_default().insert(parent);
        }
        Self { parents }
    }

    /// Direct parents of `person`, or `None` if they never appeared in the data.
    pub fn parents(&self, person: &V) -> Option<&BTreeSet<V>> {
        self.parents.get(person)
    }

    /// Number of distinct people in the data.
    pub fn people(&self) -> usize {
        self.parents.len()
    }

    /// Finds the ancestor farthest from `start`.
    ///
    /// Distance is the number of generations on the shortest chain of
    /// parent links. Ties go to the lowest id. Returns `None` when `start`
    /// has no recorded parents.
    pub fn earliest(&self, start: &V) -> Option<Ancestor<V>> {
        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut queue: VecDeque<Vec<V>> = VecDeque::new();
        queue.push_back(vec![start.clone()]);

        // The trivial path holding only `start` has length 1 and never wins.
        let mut best_len = 1;
        let mut best: Option<V> = None;

        while let Some(path) = queue.pop_front() {
            let Some(current) = path.last() else {
                continue;
            };
            if !visited.insert(current.clone()) {
                continue;
            }
            trace!("ancestry path {:?}", path);

            let longer = path.len() > best_len;
            let tied_lower = path.len() == best_len
                && best.as_ref().is_some_and(|leader| current < leader);
            if longer || tied_lower {
                best_len = path.len();
                best = Some(current.clone());
            }

            for parent in self.parents.get(current).into_iter().flatten() {
                let mut next = path.clone();
                next.push(parent.clone());
                queue.push_back(next);
            }
        }

        debug!("earliest ancestor of {:?}: {:?}", start, best);
        best.map(|id| Ancestor {
            id,
            generations: best_len - 1,
        })
    }
}

/// Returns the earliest known ancestor of `start`, or [`NO_ANCESTOR`].
///
/// Each pair is `(parent, child)`.
pub fn earliest_ancestor(pairs: &[(i64, i64)], start: i64) -> i64 {
    AncestorResolver::from_pairs(pairs.iter().copied())
        .earliest(&start)
        .map_or(NO_ANCESTOR, |ancestor| ancestor.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    //  10
    //  /
    // 1   2   4  11
    //  \ /   / \ /
    //   3   5   8
    //    \ / \   \
    //     6   7   9
    const FAMILY: [(i64, i64); 10] = [
        (1, 3),
        (2, 3),
        (3, 6),
        (5, 6),
        (5, 7),
        (4, 5),
        (4, 8),
        (8, 9),
        (11, 8),
        (10, 1),
    ];

    #[test]
    fn test_reference_family() {
        assert_eq!(earliest_ancestor(&FAMILY, 6), 10);
        assert_eq!(earliest_ancestor(&FAMILY, 1), 10);
        assert_eq!(earliest_ancestor(&FAMILY, 2), NO_ANCESTOR);
        assert_eq!(earliest_ancestor(&FAMILY, 3), 10);
        assert_eq!(earliest_ancestor(&FAMILY, 5), 4);
        assert_eq!(earliest_ancestor(&FAMILY, 7), 4);
        assert_eq!(earliest_ancestor(&FAMILY, 8), 4);
        assert_eq!(earliest_ancestor(&FAMILY, 9), 4);
        assert_eq!(earliest_ancestor(&FAMILY, 11), NO_ANCESTOR);
    }

    #[test]
    fn test_generation_count() {
        let resolver = AncestorResolver::from_pairs(FAMILY);
        assert_eq!(
            resolver.earliest(&6),
            Some(Ancestor {
                id: 10,
                generations: 3
            })
        );
    }

    #[test]
    fn test_no_data() {
        assert_eq!(earliest_ancestor(&[], 42), NO_ANCESTOR);
    }

    #[test]
    fn test_unknown_person() {
        assert_eq!(earliest_ancestor(&FAMILY, 100), NO_ANCESTOR);
    }

    #[test]
    fn test_tie_goes_to_lowest_id() {
        // Two chains of equal length from 1: 1 → 20 → 7 and 1 → 30 → 5.
        let pairs = [(20, 1), (7, 20), (30, 1), (5, 30)];
        assert_eq!(earliest_ancestor(&pairs, 1), 5);

        // Same chains, listed with the low leaf first.
        let pairs = [(30, 1), (5, 30), (20, 1), (7, 20)];
        assert_eq!(earliest_ancestor(&pairs, 1), 5);
    }

    #[test]
    fn test_longer_chain_beats_lower_id() {
        // 1 → 2 (one generation) vs 1 → 50 → 60 (two generations).
        let pairs = [(2, 1), (50, 1), (60, 50)];
        assert_eq!(earliest_ancestor(&pairs, 1), 60);
    }

    #[test]
    fn test_single_parent() {
        assert_eq!(earliest_ancestor(&[(9, 4)], 4), 9);
    }

    #[test]
    fn test_negative_start_without_parents() {
        // The start itself is never reported, whatever its id.
        assert_eq!(earliest_ancestor(&[(-3, -5)], -3), NO_ANCESTOR);
        assert_eq!(earliest_ancestor(&[(-3, -5)], -5), -3);
    }

    #[test]
    fn test_parent_registration() {
        let resolver = AncestorResolver::from_pairs(FAMILY);
        assert_eq!(resolver.people(), 11);
        assert!(resolver.parents(&10).unwrap().is_empty());
        let parents: Vec<i64> = resolver.parents(&3).unwrap().iter().copied().collect();
        assert_eq!(parents, vec![1, 2]);
        assert!(resolver.parents(&100).is_none());
    }

    #[test]
    fn test_string_ids() {
        let resolver = AncestorResolver::from_pairs([("bob", "carol"), ("alice", "bob")]);
        assert_eq!(resolver.earliest(&"carol").map(|a| a.id), Some("alice"));
    }
}
