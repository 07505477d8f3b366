//! The directed and undirected link graph variants.
//!
//! Both variants share one capability set — add a link, enumerate the whole
//! graph, enumerate from one node, subscribe to change events, clear a
//! node's links — expressed by the [`LinkGraph`] trait. They differ in what
//! a link means: the directed variant records orientation and stores each
//! link once, the undirected variant stores each link from both endpoints
//! and deduplicates during whole-graph enumeration.
//!
//! - [`DirectedLinkGraph`] - links with orientation
//! - [`UndirectedLinkGraph`] - symmetric links
//! - [`AdjacencySlot`] / [`NeighborSet`] - the per-node adjacency slots

mod adjacency;
mod directed;
mod undirected;

#[cfg(test)]
mod proptest_tests;

pub(crate) use adjacency::Adjacency;
pub use adjacency::{AdjacencySlot, NeighborSet};
pub use directed::DirectedLinkGraph;
pub use undirected::UndirectedLinkGraph;

use crate::error::GraphResult;
use crate::event::LinkEvent;
use crate::types::NodeId;

/// The capability set shared by both graph variants.
///
/// All operations are synchronous and run to completion before returning;
/// event dispatch happens after the mutation commits. Enumerations
/// materialize a fresh vector on every call — callers never hold a view
/// into internal state.
pub trait LinkGraph<N: NodeId> {
    /// Add a link between `a` and `b` (from `a` to `b` for the directed
    /// variant), then emit [`LinkEvent::Added`] with the pair.
    ///
    /// Re-adding an existing link leaves the structure unchanged but still
    /// fires the event.
    fn add_link(&mut self, a: N, b: N);

    /// Enumerate every current link through `make_link`, collecting the
    /// values it returns (a `None` from the callback suppresses that link).
    ///
    /// The undirected variant invokes the callback exactly once per edge,
    /// no matter which endpoint the walk reaches it from, and prunes stale
    /// references it encounters along the way.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingCallback`](crate::GraphError) when
    /// `make_link` is `None`, before any iteration.
    fn links<T, F>(&mut self, make_link: Option<F>) -> GraphResult<Vec<T>>
    where
        F: FnMut(&N, &N) -> Option<T>;

    /// Enumerate the links of a single node through `make_link`, in the
    /// order they were added. Unknown nodes enumerate as empty. Stale
    /// neighbors are pruned in place and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingCallback`](crate::GraphError) when
    /// `make_link` is `None`, before any iteration.
    fn links_from<T, F>(&mut self, node: &N, make_link: Option<F>) -> GraphResult<Vec<T>>
    where
        F: FnMut(&N, &N) -> Option<T>;

    /// Register a subscriber for `event` on this instance.
    fn subscribe<L>(&mut self, event: LinkEvent, listener: L)
    where
        L: FnMut(&N, &N) + 'static;

    /// Clear all links from `node` by installing a tombstone over its set,
    /// then emit [`LinkEvent::Removed`] once per former neighbor, in the
    /// order the set held them.
    ///
    /// Other nodes' references to `node` are not touched eagerly; they are
    /// pruned lazily by the next enumeration that encounters them. Unknown
    /// or already-cleared nodes are a no-op.
    fn remove_all(&mut self, node: &N);
}
