//! Per-run search state, allocated fresh for every invocation.
//!
//! Locations themselves are immutable; tentative costs, predecessor ids, and
//! open/closed membership live here, keyed by location id. This keeps the
//! shared network free of mutable state so concurrent queries stay safe.

use std::cmp::Ordering;

use crate::cost::TransportMode;

/// Transient per-location search record for one strategy run.
#[derive(Debug)]
pub(crate) struct RunState {
    /// Tentative objective from the start (g).
    pub g: Vec<f64>,
    /// Cached estimate to the goal (h).
    pub h: Vec<f64>,
    /// Predecessor location id, resolved at reconstruction time.
    pub parent: Vec<Option<usize>>,
    /// Mode of the edge from the predecessor.
    pub arrival_mode: Vec<Option<TransportMode>>,
    /// Frontier membership.
    pub in_open: Vec<bool>,
    /// Expanded-set membership.
    pub closed: Vec<bool>,
}

impl RunState {
    /// Fresh state with every location untouched: infinite costs, no
    /// predecessor, neither queued nor expanded.
    pub fn new(num_locations: usize) -> Self {
        Self {
            g: vec![f64::INFINITY; num_locations],
            h: vec![f64::INFINITY; num_locations],
            parent: vec![None; num_locations],
            arrival_mode: vec![None; num_locations],
            in_open: vec![false; num_locations],
            closed: vec![false; num_locations],
        }
    }

    /// Walks predecessor ids back from `goal` and returns the forward path
    /// with the transport mode of each segment.
    pub fn reconstruct(&self, goal: usize) -> (Vec<usize>, Vec<TransportMode>) {
        let mut path = Vec::new();
        let mut modes = Vec::new();
        let mut current = goal;
        loop {
            path.push(current);
            match self.parent[current] {
                Some(prev) => {
                    // Every non-start node on a relaxed path carries its arrival mode.
                    modes.push(self.arrival_mode[current].unwrap_or(TransportMode::Road));
                    current = prev;
                }
                None => break,
            }
        }
        path.reverse();
        modes.reverse();
        (path, modes)
    }
}

/// A frontier entry ordered for a min-heap: smallest key first, ties broken
/// by the secondary key.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub key: f64,
    pub tie: f64,
    pub node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so std's max-heap pops the minimum key.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.tie.total_cmp(&self.tie))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_fresh_state_untouched() {
        let state = RunState::new(3);
        assert!(state.g.iter().all(|g| g.is_infinite()));
        assert!(state.parent.iter().all(Option::is_none));
        assert!(!state.in_open.iter().any(|&b| b));
        assert!(!state.closed.iter().any(|&b| b));
    }

    #[test]
    fn test_reconstruct_walks_parents() {
        let mut state = RunState::new(4);
        state.parent[2] = Some(1);
        state.arrival_mode[2] = Some(TransportMode::Fly);
        state.parent[1] = Some(0);
        state.arrival_mode[1] = Some(TransportMode::Road);
        let (path, modes) = state.reconstruct(2);
        assert_eq!(path, vec![0, 1, 2]);
        assert_eq!(modes, vec![TransportMode::Road, TransportMode::Fly]);
    }

    #[test]
    fn test_reconstruct_start_only() {
        let state = RunState::new(2);
        let (path, modes) = state.reconstruct(1);
        assert_eq!(path, vec![1]);
        assert!(modes.is_empty());
    }

    #[test]
    fn test_heap_pops_minimum_key() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { key: 3.0, tie: 0.0, node: 0 });
        heap.push(FrontierEntry { key: 1.0, tie: 0.0, node: 1 });
        heap.push(FrontierEntry { key: 2.0, tie: 0.0, node: 2 });
        assert_eq!(heap.pop().map(|e| e.node), Some(1));
        assert_eq!(heap.pop().map(|e| e.node), Some(2));
        assert_eq!(heap.pop().map(|e| e.node), Some(0));
    }

    #[test]
    fn test_heap_breaks_ties_by_secondary_key() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { key: 1.0, tie: 0.9, node: 0 });
        heap.push(FrontierEntry { key: 1.0, tie: 0.1, node: 1 });
        assert_eq!(heap.pop().map(|e| e.node), Some(1));
    }
}
