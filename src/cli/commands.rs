//! CLI command implementations.

use std::path::Path;

use serde_json::Value;

use crate::graph::Graph;
use crate::types::DigraphResult;

use super::script::{self, Outcome};

/// Replay a script against a fresh graph, printing each outcome as it is produced.
pub fn cmd_run(path: &Path, json: bool) -> DigraphResult<()> {
    let ops = script::load(path)?;
    let mut graph: Graph<Value> = Graph::new();
    log::info!("Running {} operation(s) from {}", ops.len(), path.display());

    for (index, op) in ops.iter().enumerate() {
        let step = index + 1;
        log::debug!("Step {}: {}", step, op.name());

        let outcome = match script::apply(&mut graph, op) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Step {} ({}) failed", step, op.name());
                return Err(e);
            }
        };

        if json {
            println!(
                "{}",
                serde_json::json!({"step": step, "op": op.name(), "outcome": outcome})
            );
        } else if outcome != Outcome::Applied {
            println!("[{}] {}: {}", step, op.name(), outcome);
        }
    }

    if json {
        println!(
            "{}",
            serde_json::json!({
                "nodes": graph.nodes().map(|n| n.id()).collect::<Vec<_>>(),
                "edges": graph.edges().collect::<Vec<_>>(),
            })
        );
    } else {
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        for edge in graph.edges() {
            println!("  {} (weight {})", edge, edge.weight());
        }
    }
    Ok(())
}

/// Parse a script without running it.
pub fn cmd_check(path: &Path, json: bool) -> DigraphResult<()> {
    let ops = script::load(path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"file": path.display().to_string(), "operations": ops.len()})
        );
    } else {
        println!("{}: {} operation(s)", path.display(), ops.len());
    }
    Ok(())
}
