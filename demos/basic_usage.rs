//! Basic build -> query -> remove flow.

use digraph_tool::*;

fn main() -> DigraphResult<()> {
    let mut builder = GraphBuilder::new();
    builder
        .node("Parse the input", "parse")
        .node("Type-check the tree", "check")
        .node("Emit code", "emit")
        .node("Report diagnostics", "report");

    builder
        .connect("parse", "check", "parse->check")
        .connect("check", "emit", "check->emit")
        .edge("check", "report", "check->report", 0.5);

    let mut graph = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    for node in graph.get_successors("check") {
        println!("  check -> {}: {}", node.id(), node.content());
    }

    match graph.add_bidirectional_edge("emit", "report", "emit<->report", 1.0) {
        Err(e) => println!("Bidirectional edge refused: {}", e),
        Ok(()) => unreachable!("bidirectional edges are not supported"),
    }

    graph.remove_node("check")?;
    println!(
        "After removing 'check': {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(())
}
