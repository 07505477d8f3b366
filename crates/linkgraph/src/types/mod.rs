//! Core data types for the link graph.
//!
//! - [`NodeId`] - bounds for opaque node identifiers
//! - [`Link`] - resolved link record for rendering consumers
//! - [`PairKey`] - canonical order-independent key for an undirected edge

mod id;
mod link;
mod pair;

pub use id::NodeId;
pub use link::Link;
pub use pair::PairKey;
