//! Resolved link records.

use serde::{Deserialize, Serialize};

/// A resolved link between two node identifiers.
///
/// The enumeration operations let the caller build arbitrary link values
/// through a mapping callback; `Link` is the conventional `{source, target}`
/// record a force-layout renderer consumes, offered so that callers feeding
/// one don't each redefine it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link<N> {
    /// The node the link was enumerated from.
    pub source: N,
    /// The neighboring node.
    pub target: N,
}

impl<N> Link<N> {
    /// Create a new link record.
    #[must_use]
    pub const fn new(source: N, target: N) -> Self {
        Self { source, target }
    }
}

impl<N: Clone> From<(&N, &N)> for Link<N> {
    fn from((source, target): (&N, &N)) -> Self {
        Self::new(source.clone(), target.clone())
    }
}
