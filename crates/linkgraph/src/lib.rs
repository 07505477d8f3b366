//! `linkgraph`
//!
//! An observable in-process graph that tracks links between opaque node
//! identifiers and notifies subscribers as links are added or removed. It is
//! the model layer behind an interactive relationship visualization: an
//! upstream producer feeds it links as relationship data arrives, and a
//! rendering consumer enumerates the current topology and subscribes to
//! change events for incremental updates.
//!
//! Removal is lazy: clearing a node's links installs a tombstone in its
//! adjacency slot, and stale references held by other nodes are pruned the
//! next time an enumeration encounters them.
//!
//! # Modules
//!
//! - [`discovery`] - Diffing of successively observed node populations
//! - [`error`] - Error types
//! - [`event`] - Change events and the subscriber registry
//! - [`graph`] - The directed and undirected graph variants
//! - [`types`] - Core data types (identifier bounds, links, pair keys)
//!
//! # Quick Start
//!
//! ```
//! use linkgraph::{LinkGraph, UndirectedLinkGraph};
//!
//! let mut graph = UndirectedLinkGraph::new();
//! graph.add_link("gpsd", "locationd");
//! graph.add_link("locationd", "maps");
//!
//! let rendered = graph.links(Some(|a: &&str, b: &&str| Some(format!("{a} -- {b}"))))?;
//! assert_eq!(rendered.len(), 2);
//! # Ok::<(), linkgraph::GraphError>(())
//! ```

pub mod discovery;
pub mod error;
pub mod event;
pub mod graph;
pub mod types;

// Re-export commonly used types
pub use discovery::DiscoveryState;
pub use error::{GraphError, GraphResult};
pub use event::LinkEvent;
pub use graph::{DirectedLinkGraph, LinkGraph, UndirectedLinkGraph};
pub use types::{Link, NodeId, PairKey};
