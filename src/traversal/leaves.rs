//! Leaf detection.

use std::collections::HashSet;

use super::dfs::Dfs;
use crate::graph::{VertexAccess, VertexId};
use crate::macros::trace_traversal;

/// Returns the reachable vertices that have no outgoing neighbors.
///
/// `start` is included when it is itself a leaf. An absent start yields the
/// empty set. A self-loop counts as an outgoing edge.
pub fn collect_leaves<'brand, G>(graph: &G, start: Option<VertexId<'brand>>) -> HashSet<VertexId<'brand>>
where
    G: VertexAccess<'brand>,
{
    let mut dfs = Dfs::new(graph, start);
    let leaves: HashSet<_> = dfs
        .by_ref()
        .filter(|&vertex| graph.neighbors(vertex).is_empty())
        .collect();
    trace_traversal!(operation = "collect_leaves", visited = dfs.visited_count(), leaves = leaves.len());
    leaves
}
