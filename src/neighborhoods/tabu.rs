//! Tabu edges and the bounded recency list.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An unordered pair of customers describing an edge broken by a move.
///
/// The pair is normalized on construction, so `TabuEdge::new(3, 7)` and
/// `TabuEdge::new(7, 3)` are equal. The default edge `(0, 0)` is the trivial
/// descriptor returned by operators that do not take part in tabu bookkeeping.
///
/// # Examples
///
/// ```
/// use u_d2d::neighborhoods::TabuEdge;
///
/// assert_eq!(TabuEdge::new(7, 3), TabuEdge::new(3, 7));
/// assert_eq!(TabuEdge::new(7, 3).endpoints(), (3, 7));
/// assert!(TabuEdge::default().is_trivial());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TabuEdge(usize, usize);

impl TabuEdge {
    /// Creates the edge between `a` and `b`.
    pub fn new(a: usize, b: usize) -> Self {
        Self(a.min(b), a.max(b))
    }

    /// Both customers, smaller index first.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.0, self.1)
    }

    /// Returns `true` for the `(0, 0)` placeholder.
    pub fn is_trivial(&self) -> bool {
        self.0 == 0 && self.1 == 0
    }
}

impl fmt::Display for TabuEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// A most-recently-used list of [`TabuEdge`]s with a fixed capacity.
///
/// Touching an absent edge appends it and evicts the oldest entry when the
/// list grows past capacity; touching a present edge moves it to the most
/// recent end without changing the length.
///
/// # Examples
///
/// ```
/// use u_d2d::neighborhoods::{TabuEdge, TabuList};
///
/// let mut list = TabuList::new(2);
/// list.touch(TabuEdge::new(1, 2));
/// list.touch(TabuEdge::new(2, 3));
/// list.touch(TabuEdge::new(1, 2));
/// list.touch(TabuEdge::new(4, 5));
///
/// let entries: Vec<_> = list.iter().copied().collect();
/// assert_eq!(entries, vec![TabuEdge::new(1, 2), TabuEdge::new(4, 5)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuList {
    capacity: usize,
    entries: VecDeque<TabuEdge>,
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` edges.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Records `edge` as the most recently used entry.
    pub fn touch(&mut self, edge: TabuEdge) {
        match self.entries.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.entries.remove(pos);
                self.entries.push_back(edge);
            }
            None => {
                self.entries.push_back(edge);
                if self.entries.len() > self.capacity {
                    self.entries.pop_front();
                }
            }
        }
    }

    /// Returns `true` if `edge` is in the list.
    pub fn contains(&self, edge: TabuEdge) -> bool {
        self.entries.contains(&edge)
    }

    /// Entries from least to most recently touched.
    pub fn iter(&self) -> impl Iterator<Item = &TabuEdge> {
        self.entries.iter()
    }

    /// The most recently touched edge.
    pub fn latest(&self) -> Option<TabuEdge> {
        self.entries.back().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn edges(list: &TabuList) -> Vec<TabuEdge> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_edge_is_unordered() {
        assert_eq!(TabuEdge::new(4, 1), TabuEdge::new(1, 4));
        assert_eq!(TabuEdge::new(4, 1).to_string(), "1-4");
        assert!(!TabuEdge::new(0, 1).is_trivial());
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut list = TabuList::new(3);
        for i in 1..=4 {
            list.touch(TabuEdge::new(i, i + 1));
        }
        assert_eq!(list.len(), 3);
        assert!(!list.contains(TabuEdge::new(1, 2)));
        assert_eq!(
            edges(&list),
            vec![TabuEdge::new(2, 3), TabuEdge::new(3, 4), TabuEdge::new(4, 5)]
        );
    }

    #[test]
    fn test_hit_moves_to_back() {
        let mut list = TabuList::new(3);
        list.touch(TabuEdge::new(1, 2));
        list.touch(TabuEdge::new(2, 3));
        list.touch(TabuEdge::new(3, 4));
        list.touch(TabuEdge::new(2, 1));
        assert_eq!(list.len(), 3);
        assert_eq!(list.latest(), Some(TabuEdge::new(1, 2)));
        assert_eq!(
            edges(&list),
            vec![TabuEdge::new(2, 3), TabuEdge::new(3, 4), TabuEdge::new(1, 2)]
        );
    }

    #[test]
    fn test_refreshed_entry_survives_eviction() {
        let mut list = TabuList::new(2);
        list.touch(TabuEdge::new(1, 2));
        list.touch(TabuEdge::new(2, 3));
        list.touch(TabuEdge::new(1, 2));
        list.touch(TabuEdge::new(3, 4));
        assert!(list.contains(TabuEdge::new(1, 2)));
        assert!(!list.contains(TabuEdge::new(2, 3)));
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut list = TabuList::new(0);
        list.touch(TabuEdge::new(1, 2));
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 0);
    }

    #[test]
    fn test_clear() {
        let mut list = TabuList::new(2);
        list.touch(TabuEdge::new(1, 2));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.latest(), None);
    }

    proptest! {
        #[test]
        fn prop_bounded_and_unique(
            capacity in 0usize..6,
            touches in prop::collection::vec((0usize..5, 0usize..5), 0..40),
        ) {
            let mut list = TabuList::new(capacity);
            for (a, b) in touches {
                let edge = TabuEdge::new(a, b);
                list.touch(edge);
                prop_assert!(list.len() <= capacity);
                if capacity > 0 {
                    prop_assert_eq!(list.latest(), Some(edge));
                }
            }
            let mut seen = edges(&list);
            seen.sort_by_key(|e| e.endpoints());
            seen.dedup();
            prop_assert_eq!(seen.len(), list.len());
        }
    }
}
