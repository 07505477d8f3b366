//! Canonical pair keys for undirected edges.

use serde::{Deserialize, Serialize};

/// Order-independent identifier for an undirected edge.
///
/// `PairKey::new(a, b)` and `PairKey::new(b, a)` compare equal: the endpoints
/// are stored ordered by `Ord`. Whole-graph enumeration keeps a set of pair
/// keys so each undirected edge is emitted exactly once no matter which
/// endpoint the walk reaches it from. Comparison is structural — unlike
/// separator-joined string keys, no identifier value can collide with a
/// different pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairKey<N>(N, N);

impl<N: Ord> PairKey<N> {
    /// Create the canonical key for the edge between `a` and `b`.
    #[must_use]
    pub fn new(a: N, b: N) -> Self {
        if b < a {
            Self(b, a)
        } else {
            Self(a, b)
        }
    }
}

impl<N> PairKey<N> {
    /// The lesser endpoint.
    #[must_use]
    pub fn first(&self) -> &N {
        &self.0
    }

    /// The greater endpoint.
    #[must_use]
    pub fn second(&self) -> &N {
        &self.1
    }
}
