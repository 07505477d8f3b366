//! Bounds for node identifiers.

use std::fmt::Debug;

/// Marker trait for node identifiers.
///
/// Node identifiers are opaque values from the caller's domain; the graph
/// imposes no format on them. It only needs to clone them into its adjacency
/// structures, order them (for deterministic enumeration and for canonical
/// pair keys), and print them in diagnostics. The trait is blanket-implemented
/// for every type meeting those bounds.
pub trait NodeId: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> NodeId for T {}
