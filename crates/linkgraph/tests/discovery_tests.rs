//! Integration test wiring discovery diffs into a graph.

use linkgraph::{DiscoveryState, LinkGraph, UndirectedLinkGraph};

#[test]
fn discovery_diffs_feed_the_graph_incrementally() {
    let mut state = DiscoveryState::new();
    let mut graph = UndirectedLinkGraph::new();

    // First registry snapshot: everything links to the manager.
    for node in state.observe(["servicemanager", "vold", "netd"]) {
        if node != "servicemanager" {
            graph.add_link("servicemanager", node);
        }
    }
    assert_eq!(graph.links_from(&"servicemanager", Some(|_: &&'static str, b: &&'static str| Some(*b))).unwrap().len(), 2);

    // Second snapshot adds one service; only the new one is wired up.
    let fresh = state.observe(["servicemanager", "vold", "netd", "gpsd"]);
    assert_eq!(fresh, vec!["gpsd"]);
    for node in fresh {
        graph.add_link("servicemanager", node);
    }
    assert_eq!(graph.links_from(&"servicemanager", Some(|_: &&'static str, b: &&'static str| Some(*b))).unwrap().len(), 3);
}
