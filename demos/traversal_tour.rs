//! Traversal tour
//!
//! Builds a small task-priority graph and runs every traversal over it.

use anyhow::{Context, Result};
use vertex_walk::{GraphTraversal, VertexGraph};

fn main() -> Result<()> {
    println!("vertex_walk Traversal Tour");
    println!("==========================");

    VertexGraph::new(|mut graph| -> Result<()> {
        // 1 -> 3 -> 7 -> 15
        //  \-> 5 -> 7    15 -> 1 (cycle back to the root)
        //       \-> 4
        let one = graph.add_vertex(1);
        let three = graph.add_vertex(3);
        let five = graph.add_vertex(5);
        let seven = graph.add_vertex(7);
        let four = graph.add_vertex(4);
        let fifteen = graph.add_vertex(15);
        graph.add_edge(one, three);
        graph.add_edge(one, five);
        graph.add_edge(three, seven);
        graph.add_edge(five, seven);
        graph.add_edge(five, four);
        graph.add_edge(seven, fifteen);
        graph.add_edge(fifteen, one);

        println!("\n1. Reachable values (DFS pre-order):");
        graph
            .write_reachable_values(Some(five), std::io::stdout().lock())
            .context("writing reachable values")?;

        println!("\n2. Aggregates from the root:");
        println!("  reachable vertices: {}", graph.enumerate_reachable(Some(one)).len());
        println!("  max value: {}", graph.max_reachable_value(Some(one)));
        let mut leaves: Vec<_> = graph
            .collect_leaves(Some(one))
            .into_iter()
            .map(|id| *graph.vertex(id).value())
            .collect();
        leaves.sort_unstable();
        println!("  leaves: {leaves:?}");
        println!("  all odd from 3: {}", graph.all_reachable_odd(Some(three)));
        println!("  all odd from 1: {}", graph.all_reachable_odd(Some(one)));

        println!("\n3. Strictly increasing paths:");
        let path = graph
            .strictly_increasing_path(Some(one), Some(fifteen))?
            .unwrap_or_default();
        let values: Vec<_> = path.iter().map(|&id| *graph.vertex(id).value()).collect();
        println!("  1 -> 15: {values:?}");
        println!(
            "  15 -> 1: {}",
            graph.has_strictly_increasing_path(Some(fifteen), Some(one))?
        );

        println!("\n4. Precondition failure:");
        match graph.has_strictly_increasing_path(None, Some(one)) {
            Ok(found) => println!("  unexpected result: {found}"),
            Err(err) => println!("  error: {err}"),
        }

        Ok(())
    })
}
