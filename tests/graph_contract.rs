//! Graph contract tests: node/edge CRUD, referential integrity, queries.

use digraph_tool::graph::Graph;
use digraph_tool::types::error::{DigraphError, EdgeError, ErrorKind, GraphError, NodeError};
use digraph_tool::types::DEFAULT_WEIGHT;

// ==================== Helper ====================

/// A -> B -> C, plus A -> C.
fn triangle() -> Graph<String> {
    let mut graph = Graph::new();
    for id in ["A", "B", "C"] {
        graph.add_node(format!("payload-{}", id), id).unwrap();
    }
    graph.connect("A", "B", "ab").unwrap();
    graph.connect("B", "C", "bc").unwrap();
    graph.connect("A", "C", "ac").unwrap();
    graph
}

fn ids<T>(nodes: Vec<&digraph_tool::Node<T>>) -> Vec<&str> {
    nodes.into_iter().map(|n| n.id()).collect()
}

// ==================== Node Tests ====================

#[test]
fn test_add_then_get_node() {
    let mut graph = Graph::new();
    graph.add_node("payload-A".to_string(), "A").unwrap();

    let node = graph.get_node("A").unwrap();
    assert_eq!(node.id(), "A");
    assert_eq!(node.content(), "payload-A");
    assert!(graph.is_node("A"));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_duplicate_node_rejected() {
    let mut graph = Graph::new();
    graph.add_node("first", "A").unwrap();

    let result = graph.add_node("second", "A");
    match result.unwrap_err() {
        DigraphError::Graph(GraphError::DuplicateNode(id)) => assert_eq!(id, "A"),
        e => panic!("Expected DuplicateNode error, got {:?}", e),
    }
    assert_eq!(graph.node_count(), 1);
    assert_eq!(*graph.get_node("A").unwrap().content(), "first");
}

#[test]
fn test_empty_content_rejected() {
    let mut graph: Graph<String> = Graph::new();
    match graph.add_node(String::new(), "A").unwrap_err() {
        DigraphError::Node(NodeError::EmptyContent) => {}
        e => panic!("Expected EmptyContent error, got {:?}", e),
    }
    assert!(graph.is_empty());
}

#[test]
fn test_empty_node_id_rejected() {
    let mut graph = Graph::new();
    match graph.add_node("payload", "").unwrap_err() {
        DigraphError::Node(NodeError::EmptyId) => {}
        e => panic!("Expected EmptyId error, got {:?}", e),
    }
    assert!(graph.is_empty());
}

#[test]
fn test_content_checked_before_id() {
    let mut graph: Graph<Option<u32>> = Graph::new();
    let err = graph.add_node(None, "").unwrap_err();
    assert!(matches!(err, DigraphError::Node(NodeError::EmptyContent)));
}

#[test]
fn test_zero_is_valid_content() {
    let mut graph = Graph::new();
    graph.add_node(0i64, "zero").unwrap();
    assert_eq!(*graph.get_node("zero").unwrap().content(), 0);
}

#[test]
fn test_edge_id_owned_endpoints_borrowed() {
    let mut graph = triangle();
    for (i, target) in ["A", "B"].iter().enumerate() {
        let edge_id = format!("c{}", i);
        graph.connect("C", target, edge_id).unwrap();
    }
    let start = String::from("B");
    graph
        .add_unidirectional_edge(&start, "A", String::from("ba"), 0.5)
        .unwrap();

    assert_eq!(ids(graph.get_successors("C")), vec!["A", "B"]);
    assert_eq!(graph.get_edge("ba").unwrap().start(), "B");
}

#[test]
fn test_json_null_content_rejected() {
    let mut graph = Graph::new();
    let err = graph.add_node(serde_json::Value::Null, "A").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Node);
}

#[test]
fn test_node_content_mutation() {
    let mut graph = Graph::new();
    graph.add_node(vec![1, 2], "A").unwrap();

    graph.get_node_mut("A").unwrap().content_mut().push(3);
    assert_eq!(graph.get_node("A").unwrap().content(), &vec![1, 2, 3]);

    let old = graph.get_node_mut("A").unwrap().replace_content(vec![9]);
    assert_eq!(old, vec![1, 2, 3]);
    assert_eq!(graph.get_node("A").unwrap().content(), &vec![9]);
}

#[test]
fn test_get_missing_node() {
    let graph: Graph<String> = Graph::new();
    match graph.get_node("nope").unwrap_err() {
        DigraphError::Graph(GraphError::NodeNotFound(id)) => assert_eq!(id, "nope"),
        e => panic!("Expected NodeNotFound error, got {:?}", e),
    }
    assert!(!graph.is_node("nope"));
}

#[test]
fn test_nodes_keep_insertion_order() {
    let mut graph = Graph::new();
    for id in ["z", "a", "m"] {
        graph.add_node(id, id).unwrap();
    }
    let order: Vec<&str> = graph.nodes().map(|n| n.id()).collect();
    assert_eq!(order, vec!["z", "a", "m"]);
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_defaults() {
    let graph = triangle();
    let edge = graph.get_edge("ab").unwrap();
    assert_eq!(edge.id(), "ab");
    assert_eq!(edge.start(), "A");
    assert_eq!(edge.end(), "B");
    assert!((edge.weight() - DEFAULT_WEIGHT).abs() < f64::EPSILON);
    assert!(!edge.is_bidirectional());
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_empty_edge_inputs_rejected_in_order() {
    let mut graph = triangle();

    let err = graph.add_unidirectional_edge("", "", "", 1.0).unwrap_err();
    assert!(matches!(err, DigraphError::Edge(EdgeError::EmptyStart)));

    let err = graph.add_unidirectional_edge("A", "", "", 1.0).unwrap_err();
    assert!(matches!(err, DigraphError::Edge(EdgeError::EmptyEnd)));

    let err = graph.add_unidirectional_edge("A", "B", "", 1.0).unwrap_err();
    assert!(matches!(err, DigraphError::Edge(EdgeError::EmptyId)));

    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_duplicate_edge_rejected() {
    let mut graph = triangle();
    match graph.add_unidirectional_edge("C", "A", "ab", 3.0).unwrap_err() {
        DigraphError::Graph(GraphError::DuplicateEdge(id)) => assert_eq!(id, "ab"),
        e => panic!("Expected DuplicateEdge error, got {:?}", e),
    }
    assert_eq!(graph.get_edge("ab").unwrap().start(), "A");
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_edge_to_unknown_node_rejected() {
    let mut graph = triangle();

    match graph.connect("X", "A", "xa").unwrap_err() {
        DigraphError::Graph(GraphError::NodeNotFound(id)) => assert_eq!(id, "X"),
        e => panic!("Expected NodeNotFound error, got {:?}", e),
    }
    match graph.connect("A", "Y", "ay").unwrap_err() {
        DigraphError::Graph(GraphError::NodeNotFound(id)) => assert_eq!(id, "Y"),
        e => panic!("Expected NodeNotFound error, got {:?}", e),
    }
    assert!(!graph.is_edge("xa"));
    assert!(!graph.is_edge("ay"));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_bidirectional_edge_unsupported() {
    let mut graph = triangle();

    for (start, end, id) in [("A", "B", "new"), ("", "", ""), ("X", "Y", "ab")] {
        match graph.add_bidirectional_edge(start, end, id, 1.0).unwrap_err() {
            DigraphError::Graph(GraphError::Unsupported(_)) => {}
            e => panic!("Expected Unsupported error, got {:?}", e),
        }
    }
    assert_eq!(graph.edge_count(), 3);
    assert!(!graph.is_edge("new"));
}

#[test]
fn test_edge_weight_and_flag_mutation() {
    let mut graph = triangle();
    {
        let edge = graph.get_edge_mut("bc").unwrap();
        edge.set_weight(-4.0);
        edge.set_bidirectional(true);
    }
    let edge = graph.get_edge("bc").unwrap();
    assert!((edge.weight() + 4.0).abs() < f64::EPSILON);
    assert!(edge.is_bidirectional());

    // The flag is inert: queries stay directed
    assert!(ids(graph.get_successors("C")).is_empty());
}

#[test]
fn test_remove_edge() {
    let mut graph = triangle();
    let removed = graph.remove_edge("bc").unwrap();
    assert_eq!(removed.id(), "bc");
    assert!(!graph.is_edge("bc"));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.node_count(), 3);

    let order: Vec<&str> = graph.edges().map(|e| e.id()).collect();
    assert_eq!(order, vec!["ab", "ac"]);
}

#[test]
fn test_remove_missing_edge() {
    let mut graph = triangle();
    match graph.remove_edge("zz").unwrap_err() {
        DigraphError::Graph(GraphError::EdgeNotFound(id)) => assert_eq!(id, "zz"),
        e => panic!("Expected EdgeNotFound error, got {:?}", e),
    }
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.node_count(), 3);
}

// ==================== Removal Cascade Tests ====================

#[test]
fn test_remove_node_cascades() {
    let mut graph = triangle();
    let touching: Vec<String> = graph
        .edges()
        .filter(|e| e.touches("B"))
        .map(|e| e.id().to_string())
        .collect();
    assert_eq!(touching, vec!["ab", "bc"]);

    let removed = graph.remove_node("B").unwrap();
    assert_eq!(removed.into_content(), "payload-B");

    assert!(!graph.is_node("B"));
    for id in &touching {
        assert!(!graph.is_edge(id));
    }
    assert!(graph.is_edge("ac"));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_missing_node_mutates_nothing() {
    let mut graph = triangle();
    let err = graph.remove_node("Q").unwrap_err();
    assert!(matches!(err, DigraphError::Graph(GraphError::NodeNotFound(_))));
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_remove_node_with_self_loop() {
    let mut graph = triangle();
    graph.connect("C", "C", "cc").unwrap();
    graph.remove_node("C").unwrap();

    assert!(!graph.is_edge("cc"));
    assert!(!graph.is_edge("bc"));
    assert!(!graph.is_edge("ac"));
    assert_eq!(ids(graph.get_successors("A")), vec!["B"]);
}

#[test]
fn test_every_edge_references_live_nodes() {
    let mut graph = triangle();
    graph.add_node("payload-D".to_string(), "D").unwrap();
    graph.connect("D", "A", "da").unwrap();
    graph.connect("C", "D", "cd").unwrap();

    graph.remove_node("A").unwrap();
    graph.remove_edge("cd").unwrap();

    for edge in graph.edges() {
        assert!(graph.is_node(edge.start()));
        assert!(graph.is_node(edge.end()));
    }
}

#[test]
fn test_node_id_reusable_after_removal() {
    let mut graph = triangle();
    graph.remove_node("A").unwrap();
    graph.add_node("again".to_string(), "A").unwrap();
    graph.connect("A", "B", "ab").unwrap();

    assert!(graph.get_predecessors("A").is_empty());
    assert_eq!(ids(graph.get_predecessors("B")), vec!["A"]);
}

// ==================== Query Tests ====================

#[test]
fn test_queries_are_directed() {
    let graph = triangle();
    assert_eq!(ids(graph.get_successors("A")), vec!["B", "C"]);
    assert_eq!(ids(graph.get_predecessors("C")), vec!["B", "A"]);
    assert!(ids(graph.get_predecessors("A")).is_empty());
    assert!(!ids(graph.get_successors("B")).contains(&"A"));
}

#[test]
fn test_parallel_edges_not_deduplicated() {
    let mut graph = triangle();
    graph.connect("A", "B", "ab2").unwrap();

    assert_eq!(ids(graph.get_successors("A")), vec!["B", "C", "B"]);
    assert_eq!(ids(graph.get_predecessors("B")), vec!["A", "A"]);
    assert_eq!(graph.edges_from("A").len(), 3);
    assert_eq!(graph.edges_to("B").len(), 2);
}

#[test]
fn test_queries_on_unknown_node_are_empty() {
    let graph = triangle();
    assert!(graph.get_successors("nope").is_empty());
    assert!(graph.get_predecessors("nope").is_empty());
}

#[test]
fn test_clear() {
    let mut graph = triangle();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

// ==================== Scenario ====================

#[test]
fn test_two_node_scenario() {
    let mut graph = Graph::new();
    graph.add_node("payload-A", "A").unwrap();
    graph.add_node("payload-B", "B").unwrap();
    graph.add_unidirectional_edge("A", "B", "e1", 2.5).unwrap();

    assert!((graph.get_edge("e1").unwrap().weight() - 2.5).abs() < f64::EPSILON);
    assert_eq!(ids(graph.get_predecessors("B")), vec!["A"]);
    assert_eq!(ids(graph.get_successors("A")), vec!["B"]);

    graph.remove_node("A").unwrap();
    assert!(!graph.is_node("A"));
    assert!(!graph.is_edge("e1"));
    assert!(graph.is_node("B"));
}

// ==================== Error Kind Tests ====================

#[test]
fn test_error_kinds_are_distinct() {
    let mut graph = triangle();

    let node = graph.add_node(String::new(), "X").unwrap_err();
    let edge = graph.connect("", "A", "x").unwrap_err();
    let structural = graph.get_edge("missing").unwrap_err();

    assert_eq!(node.kind(), ErrorKind::Node);
    assert_eq!(edge.kind(), ErrorKind::Edge);
    assert_eq!(structural.kind(), ErrorKind::Graph);
    assert_eq!(
        structural.to_string(),
        "The edge 'missing' doesn't exist in graph"
    );
}
