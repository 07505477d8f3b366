//! Property-based tests for the graph variants.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::graph::{LinkGraph, UndirectedLinkGraph};
use crate::types::PairKey;

/// Strategy for node identifiers, drawn from a small space so edge lists
/// collide and revisit the same nodes.
fn arb_node() -> impl Strategy<Value = u8> {
    0..16u8
}

/// Strategy for arbitrary edge lists, duplicates and self-loops included.
fn arb_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((arb_node(), arb_node()), 0..64)
}

proptest! {
    #[test]
    fn undirected_enumeration_is_duplicate_free(edges in arb_edges()) {
        let mut graph = UndirectedLinkGraph::new();
        for (a, b) in &edges {
            graph.add_link(*a, *b);
        }

        let keys = graph.links(Some(|a: &u8, b: &u8| Some(PairKey::new(*a, *b)))).unwrap();
        let mut seen = BTreeSet::new();
        for key in keys {
            prop_assert!(seen.insert(key), "edge emitted twice");
        }
    }

    #[test]
    fn undirected_links_are_symmetric(edges in arb_edges()) {
        let mut graph = UndirectedLinkGraph::new();
        for (a, b) in &edges {
            graph.add_link(*a, *b);
        }

        for (a, b) in &edges {
            let from_a = graph.links_from(a, Some(|_: &u8, y: &u8| Some(*y))).unwrap();
            prop_assert!(from_a.contains(b));
            let from_b = graph.links_from(b, Some(|_: &u8, y: &u8| Some(*y))).unwrap();
            prop_assert!(from_b.contains(a));
        }
    }

    #[test]
    fn duplicate_adds_never_grow_the_structure(edges in arb_edges()) {
        let mut once = UndirectedLinkGraph::new();
        let mut twice = UndirectedLinkGraph::new();
        for (a, b) in &edges {
            once.add_link(*a, *b);
            twice.add_link(*a, *b);
            twice.add_link(*a, *b);
        }

        let count = |graph: &mut UndirectedLinkGraph<u8>| {
            graph.links(Some(|a: &u8, b: &u8| Some(PairKey::new(*a, *b)))).unwrap()
        };
        prop_assert_eq!(count(&mut once), count(&mut twice));
    }

    #[test]
    fn clearing_every_node_leaves_nothing(edges in arb_edges()) {
        let mut graph = UndirectedLinkGraph::new();
        for (a, b) in &edges {
            graph.add_link(*a, *b);
        }
        for (a, _) in &edges {
            graph.remove_all(a);
        }
        for (_, b) in &edges {
            graph.remove_all(b);
        }

        let left = graph.links(Some(|a: &u8, b: &u8| Some((*a, *b)))).unwrap();
        prop_assert!(left.is_empty());
    }
}
