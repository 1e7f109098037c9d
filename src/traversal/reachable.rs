//! Reachability enumeration and value emission.

use std::collections::HashSet;
use std::fmt::Display;
use std::io::{self, Write};

use super::dfs::Dfs;
use crate::graph::{VertexAccess, VertexId};
use crate::macros::trace_traversal;

/// Returns every vertex reachable from `start`, including `start` itself.
///
/// An absent start yields the empty set.
pub fn enumerate_reachable<'brand, G>(graph: &G, start: Option<VertexId<'brand>>) -> HashSet<VertexId<'brand>>
where
    G: VertexAccess<'brand>,
{
    let reachable: HashSet<_> = Dfs::new(graph, start).collect();
    trace_traversal!(operation = "enumerate_reachable", visited = reachable.len());
    reachable
}

/// Calls `emit` with the value of each reachable vertex, once per vertex, in DFS pre-order.
pub fn visit_and_emit<'brand, G, E>(graph: &G, start: Option<VertexId<'brand>>, mut emit: E)
where
    G: VertexAccess<'brand>,
    E: FnMut(&G::Value),
{
    let mut dfs = Dfs::new(graph, start);
    for vertex in dfs.by_ref() {
        emit(graph.value(vertex));
    }
    trace_traversal!(operation = "visit_and_emit", visited = dfs.visited_count());
}

/// Writes the value of each reachable vertex to `sink`, one per line.
///
/// # Errors
/// Returns the first I/O error reported by `sink`; the traversal stops there.
pub fn write_reachable_values<'brand, G, W>(graph: &G, start: Option<VertexId<'brand>>, mut sink: W) -> io::Result<()>
where
    G: VertexAccess<'brand>,
    G::Value: Display,
    W: Write,
{
    let mut dfs = Dfs::new(graph, start);
    for vertex in dfs.by_ref() {
        writeln!(sink, "{}", graph.value(vertex))?;
    }
    trace_traversal!(operation = "write_reachable_values", visited = dfs.visited_count());
    sink.flush()
}
