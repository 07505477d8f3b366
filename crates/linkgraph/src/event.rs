//! Change events and the subscriber registry.
//!
//! Each graph instance owns a [`ListenerRegistry`]: an explicit mapping from
//! event kind to an ordered list of subscriber callbacks. Dispatch is
//! synchronous — a mutation commits, then every subscriber for the event runs
//! before the mutating call returns. A rendering consumer subscribes to both
//! kinds to update incrementally instead of re-enumerating the whole graph.

use std::fmt;

/// The kinds of change event a link graph emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    /// A link was added between two nodes. Fires on every `add_link` call,
    /// including calls that leave the structure unchanged.
    Added,
    /// A link from a node to a former neighbor was removed by a full clear.
    Removed,
}

/// Subscriber callback, invoked with the two endpoints of the affected link.
pub type LinkListener<N> = Box<dyn FnMut(&N, &N)>;

/// Per-instance subscriber registry.
///
/// Created empty at graph construction, never persisted. Subscribers for an
/// event run in registration order.
pub struct ListenerRegistry<N> {
    added: Vec<LinkListener<N>>,
    removed: Vec<LinkListener<N>>,
}

impl<N> ListenerRegistry<N> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { added: Vec::new(), removed: Vec::new() }
    }

    /// Register a subscriber for an event kind.
    pub fn subscribe<L>(&mut self, event: LinkEvent, listener: L)
    where
        L: FnMut(&N, &N) + 'static,
    {
        self.listeners_mut(event).push(Box::new(listener));
    }

    /// Invoke every subscriber for `event`, in registration order.
    pub fn emit(&mut self, event: LinkEvent, a: &N, b: &N) {
        for listener in self.listeners_mut(event) {
            listener(a, b);
        }
    }

    /// Number of subscribers registered for an event kind.
    #[must_use]
    pub fn subscriber_count(&self, event: LinkEvent) -> usize {
        match event {
            LinkEvent::Added => self.added.len(),
            LinkEvent::Removed => self.removed.len(),
        }
    }

    fn listeners_mut(&mut self, event: LinkEvent) -> &mut Vec<LinkListener<N>> {
        match event {
            LinkEvent::Added => &mut self.added,
            LinkEvent::Removed => &mut self.removed,
        }
    }
}

impl<N> Default for ListenerRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for ListenerRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("added", &self.added.len())
            .field("removed", &self.removed.len())
            .finish()
    }
}
