//! The undirected variant.

use std::collections::BTreeSet;

use crate::error::{GraphError, GraphResult};
use crate::event::{LinkEvent, ListenerRegistry};
use crate::graph::{Adjacency, LinkGraph};
use crate::types::{NodeId, PairKey};

/// A graph of symmetric links.
///
/// Every link is stored from both endpoints: adding (a, b) inserts b into
/// a's set and a into b's set. Whole-graph enumeration therefore meets each
/// edge twice and keeps per-call [`PairKey`] bookkeeping to emit it exactly
/// once; it also prunes stale references left behind by
/// [`remove_all`](LinkGraph::remove_all) as it walks.
///
/// # Example
///
/// ```
/// use linkgraph::{Link, LinkGraph, UndirectedLinkGraph};
///
/// let mut graph = UndirectedLinkGraph::new();
/// graph.add_link("surfaceflinger", "powerd");
///
/// // Both endpoints see the link.
/// let from_powerd = graph.links_from(&"powerd", Some(|a: &&'static str, b: &&'static str| Some(Link::from((a, b)))))?;
/// assert_eq!(from_powerd, vec![Link::new("powerd", "surfaceflinger")]);
/// # Ok::<(), linkgraph::GraphError>(())
/// ```
#[derive(Debug)]
pub struct UndirectedLinkGraph<N> {
    adjacency: Adjacency<N>,
    listeners: ListenerRegistry<N>,
}

impl<N: NodeId> UndirectedLinkGraph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self { adjacency: Adjacency::new(), listeners: ListenerRegistry::new() }
    }
}

impl<N: NodeId> Default for UndirectedLinkGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> LinkGraph<N> for UndirectedLinkGraph<N> {
    fn add_link(&mut self, a: N, b: N) {
        self.adjacency.ensure_live(a.clone()).insert(b.clone());
        self.adjacency.ensure_live(b.clone()).insert(a.clone());
        self.listeners.emit(LinkEvent::Added, &a, &b);
    }

    fn links<T, F>(&mut self, make_link: Option<F>) -> GraphResult<Vec<T>>
    where
        F: FnMut(&N, &N) -> Option<T>,
    {
        let Some(mut make_link) = make_link else {
            return Err(GraphError::MissingCallback);
        };

        // Bookkeeping is local to this call: each edge is emitted once,
        // from whichever endpoint the walk reaches first.
        let mut done: BTreeSet<PairKey<N>> = BTreeSet::new();
        let mut links = Vec::new();

        // Walk a key snapshot: pruning may drop fully dereferenced
        // tombstone keys while we go.
        for x in self.adjacency.roots() {
            let Some((live, stale)) = self.adjacency.split_neighbors(&x) else {
                continue;
            };
            for y in &stale {
                self.adjacency.prune(&x, y);
            }
            for y in live {
                if done.insert(PairKey::new(x.clone(), y.clone())) {
                    if let Some(link) = make_link(&x, &y) {
                        links.push(link);
                    }
                }
            }
        }
        Ok(links)
    }

    fn links_from<T, F>(&mut self, node: &N, make_link: Option<F>) -> GraphResult<Vec<T>>
    where
        F: FnMut(&N, &N) -> Option<T>,
    {
        let Some(make_link) = make_link else {
            return Err(GraphError::MissingCallback);
        };
        Ok(self.adjacency.links_from(node, make_link))
    }

    fn subscribe<L>(&mut self, event: LinkEvent, listener: L)
    where
        L: FnMut(&N, &N) + 'static,
    {
        self.listeners.subscribe(event, listener);
    }

    fn remove_all(&mut self, node: &N) {
        let Some(former) = self.adjacency.clear(node) else { return };
        for neighbor in &former {
            self.listeners.emit(LinkEvent::Removed, node, neighbor);
        }
    }
}
