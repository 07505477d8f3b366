//! The directed variant.

use crate::error::{GraphError, GraphResult};
use crate::event::{LinkEvent, ListenerRegistry};
use crate::graph::{Adjacency, LinkGraph};
use crate::types::NodeId;

/// A graph of directed links.
///
/// Each link is stored once, under its source node. Whole-graph enumeration
/// walks the live slots in key order and skips cleared nodes entirely;
/// per-node enumeration additionally prunes stale targets it meets.
///
/// # Example
///
/// ```
/// use linkgraph::{DirectedLinkGraph, LinkGraph};
///
/// let mut graph = DirectedLinkGraph::new();
/// graph.add_link("zygote", "system_server");
/// graph.add_link("zygote", "mediaserver");
///
/// let out = graph.links_from(&"zygote", Some(|a: &&str, b: &&str| Some(format!("{a}->{b}"))))?;
/// assert_eq!(out, vec!["zygote->system_server", "zygote->mediaserver"]);
/// # Ok::<(), linkgraph::GraphError>(())
/// ```
#[derive(Debug)]
pub struct DirectedLinkGraph<N> {
    adjacency: Adjacency<N>,
    listeners: ListenerRegistry<N>,
}

impl<N: NodeId> DirectedLinkGraph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self { adjacency: Adjacency::new(), listeners: ListenerRegistry::new() }
    }
}

impl<N: NodeId> Default for DirectedLinkGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> LinkGraph<N> for DirectedLinkGraph<N> {
    fn add_link(&mut self, from: N, to: N) {
        self.adjacency.ensure_live(from.clone()).insert(to.clone());
        self.listeners.emit(LinkEvent::Added, &from, &to);
    }

    fn links<T, F>(&mut self, make_link: Option<F>) -> GraphResult<Vec<T>>
    where
        F: FnMut(&N, &N) -> Option<T>,
    {
        let Some(mut make_link) = make_link else {
            return Err(GraphError::MissingCallback);
        };

        let mut links = Vec::new();
        for (from, slot) in self.adjacency.iter() {
            let Some(neighbors) = slot.live() else { continue };
            for to in neighbors {
                if let Some(link) = make_link(from, to) {
                    links.push(link);
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
        for to in &former {
            self.listeners.emit(LinkEvent::Removed, node, to);
        }
    }
}
