//! Diffing of successively observed node populations.
//!
//! An upstream producer periodically re-reads the full set of nodes it can
//! see — a service-registry snapshot, a process table — and only wants to
//! feed the graph the relationships of nodes that are new since its last
//! pass. [`DiscoveryState`] holds the "previously observed" population as an
//! explicit value owned by the caller and reports the difference on each
//! observation.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::NodeId;

/// Tracks which node identifiers have been observed so far.
///
/// # Example
///
/// ```
/// use linkgraph::DiscoveryState;
///
/// let mut state = DiscoveryState::new();
/// assert_eq!(state.observe(["adbd", "vold"]), vec!["adbd", "vold"]);
/// assert_eq!(state.observe(["adbd", "vold", "netd"]), vec!["netd"]);
/// assert!(state.observe(["adbd", "vold", "netd"]).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiscoveryState<N> {
    known: BTreeSet<N>,
}

impl<N: NodeId> DiscoveryState<N> {
    /// Create a tracker with no known nodes.
    #[must_use]
    pub fn new() -> Self {
        Self { known: BTreeSet::new() }
    }

    /// Record a full observation of the current node population.
    ///
    /// Returns the nodes that were not part of the previous observation, in
    /// the order they appear in `current` (duplicates ignored). The known
    /// population is replaced wholesale, so a node that disappears and
    /// later returns is reported as new again.
    pub fn observe<I>(&mut self, current: I) -> Vec<N>
    where
        I: IntoIterator<Item = N>,
    {
        let mut seen = BTreeSet::new();
        let mut fresh = Vec::new();
        for node in current {
            if !seen.insert(node.clone()) {
                continue;
            }
            if !self.known.contains(&node) {
                fresh.push(node);
            }
        }
        if !fresh.is_empty() {
            debug!(new = fresh.len(), population = seen.len(), "observed new nodes");
        }
        self.known = seen;
        fresh
    }

    /// The node population recorded by the most recent observation.
    #[must_use]
    pub fn known(&self) -> &BTreeSet<N> {
        &self.known
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_all_new() {
        let mut state = DiscoveryState::new();
        assert_eq!(state.observe([3u32, 1, 2]), vec![3, 1, 2]);
        assert_eq!(state.known().len(), 3);
    }

    #[test]
    fn repeat_observation_is_empty() {
        let mut state = DiscoveryState::new();
        state.observe([1u32, 2]);
        assert!(state.observe([2u32, 1]).is_empty());
    }

    #[test]
    fn duplicates_in_one_observation_count_once() {
        let mut state = DiscoveryState::new();
        assert_eq!(state.observe([5u32, 5, 5]), vec![5]);
        assert_eq!(state.known().len(), 1);
    }

    #[test]
    fn returning_node_is_new_again() {
        let mut state = DiscoveryState::new();
        state.observe([1u32, 2]);
        state.observe([1u32]);
        assert_eq!(state.observe([1u32, 2]), vec![2]);
    }
}
