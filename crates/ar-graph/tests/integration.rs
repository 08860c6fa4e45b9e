//! Integration tests for ar-graph.

use ar_graph::GraphBuilder;
use proptest::prelude::*;

#[test]
fn build_minimal_graph() {
    // Build: carro -> piton
    let mut builder = GraphBuilder::new();
    let carro = builder.declare("carro");
    let piton = builder.declare("piton");
    let hose = builder.add_edge("carro", "piton");

    let graph = builder.build().unwrap();

    assert_eq!(graph.vertices().len(), 2);
    assert_eq!(graph.edges().len(), 1);

    assert_eq!(graph.outgoing(carro), &[hose]);
    assert_eq!(graph.incoming(piton), &[hose]);
    assert!(graph.incoming(carro).is_empty());
    assert!(graph.outgoing(piton).is_empty());
}

#[test]
fn chain_through_appliance() {
    // Build: carro -> wye -> piton-a, wye -> piton-b
    let mut builder = GraphBuilder::new();
    for key in ["carro", "wye", "piton-a", "piton-b"] {
        builder.declare(key);
    }
    let feed = builder.add_edge("carro", "wye");
    let a = builder.add_edge("wye", "piton-a");
    let b = builder.add_edge("wye", "piton-b");

    let graph = builder.build().unwrap();

    assert_eq!(graph.incoming_by_key("wye"), &[feed]);
    assert_eq!(graph.outgoing_by_key("wye"), &[a, b]);
}

#[test]
fn parallel_edges_are_kept_in_order() {
    let mut builder = GraphBuilder::new();
    builder.declare("s");
    builder.declare("t");
    let first = builder.add_edge("s", "t");
    let second = builder.add_edge("s", "t");

    let graph = builder.build().unwrap();

    assert_eq!(graph.outgoing_by_key("s"), &[first, second]);
    assert_eq!(graph.incoming_by_key("t"), &[first, second]);
}

#[test]
fn interleaved_edges_keep_insertion_order_per_vertex() {
    let mut builder = GraphBuilder::new();
    for key in ["a", "b", "c"] {
        builder.declare(key);
    }
    let e0 = builder.add_edge("a", "c");
    let _e1 = builder.add_edge("b", "c");
    let e2 = builder.add_edge("a", "b");

    let graph = builder.build().unwrap();

    assert_eq!(graph.outgoing_by_key("a"), &[e0, e2]);
}

#[test]
fn cycle_builds() {
    let mut builder = GraphBuilder::new();
    builder.declare("a");
    builder.declare("b");
    builder.add_edge("a", "b");
    builder.add_edge("b", "a");

    let graph = builder.build().unwrap();
    assert_eq!(graph.outgoing_by_key("a").len(), 1);
    assert_eq!(graph.incoming_by_key("a").len(), 1);
}

#[test]
fn dangling_keys_get_vertices_after_declared_nodes() {
    let mut builder = GraphBuilder::new();
    builder.declare("a");
    builder.declare("b");
    builder.add_edge("ghost", "b");

    let graph = builder.build().unwrap();

    let keys: Vec<&str> = graph.vertices().iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", "ghost"]);
    assert_eq!(graph.incoming_by_key("b").len(), 1);
    assert!(graph.outgoing_by_key("unknown").is_empty());
}

#[test]
fn empty_graph_builds() {
    let graph = GraphBuilder::new().build().unwrap();
    assert!(graph.vertices().is_empty());
    assert!(graph.edges().is_empty());
}

proptest! {
    #[test]
    fn adjacency_partitions_edges(pairs in prop::collection::vec((0u8..6, 0u8..6), 0..40)) {
        let mut builder = GraphBuilder::new();
        for i in 0..6u8 {
            builder.declare(&format!("n{i}"));
        }
        for (from, to) in &pairs {
            builder.add_edge(&format!("n{from}"), &format!("n{to}"));
        }
        let graph = builder.build().unwrap();

        let out_total: usize = graph.vertices().iter().map(|v| graph.outgoing(v.id).len()).sum();
        let in_total: usize = graph.vertices().iter().map(|v| graph.incoming(v.id).len()).sum();
        prop_assert_eq!(out_total, pairs.len());
        prop_assert_eq!(in_total, pairs.len());

        for vertex in graph.vertices() {
            for &edge_id in graph.outgoing(vertex.id) {
                prop_assert_eq!(graph.edge(edge_id).unwrap().from, vertex.id);
            }
            let ids = graph.incoming(vertex.id);
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
