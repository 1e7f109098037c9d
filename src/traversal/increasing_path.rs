//! Strictly increasing path search.
//!
//! A path is strictly increasing when every vertex on it carries a value
//! strictly greater than its predecessor's. The search is a DFS that only
//! descends edges `u -> v` with `value(v) > value(u)`; all other edges are
//! pruned. Since values strictly grow along descended edges, no descended
//! edge can close a cycle, and visited marking keeps the search linear when
//! several increasing routes share a suffix.

use super::dfs::Dfs;
use crate::error::TraversalError;
use crate::graph::{VertexAccess, VertexId};
use crate::macros::trace_traversal;

fn require<'brand>(
    start: Option<VertexId<'brand>>,
    end: Option<VertexId<'brand>>,
) -> Result<(VertexId<'brand>, VertexId<'brand>), TraversalError> {
    let start = start.ok_or(TraversalError::missing("start"))?;
    let end = end.ok_or(TraversalError::missing("end"))?;
    Ok((start, end))
}

/// Finds one strictly increasing path from `start` to `end`, endpoints included.
///
/// Returns `Ok(Some(vec![start]))` when `start == end`. Which path is
/// returned when several exist is unspecified.
///
/// # Errors
/// Returns [`TraversalError::InvalidArgument`] if either endpoint is absent,
/// before any traversal happens.
pub fn strictly_increasing_path<'brand, G>(
    graph: &G,
    start: Option<VertexId<'brand>>,
    end: Option<VertexId<'brand>>,
) -> Result<Option<Vec<VertexId<'brand>>>, TraversalError>
where
    G: VertexAccess<'brand>,
    G::Value: PartialOrd,
{
    let (start, end) = require(start, end)?;

    let mut dfs = Dfs::with_edge_filter(graph, Some(start), |from, to| graph.value(to) > graph.value(from));
    while let Some(vertex) = dfs.next() {
        if vertex == end {
            let path: Vec<_> = dfs.path().collect();
            trace_traversal!(operation = "strictly_increasing_path", visited = dfs.visited_count(), found = true);
            return Ok(Some(path));
        }
    }

    trace_traversal!(operation = "strictly_increasing_path", visited = dfs.visited_count(), found = false);
    Ok(None)
}

/// Returns whether a strictly increasing path leads from `start` to `end`.
///
/// A zero-length path (`start == end`) always exists.
///
/// # Errors
/// Returns [`TraversalError::InvalidArgument`] if either endpoint is absent.
///
/// # Example
///
/// ```rust
/// use vertex_walk::{GraphTraversal, TraversalError, VertexGraph};
///
/// VertexGraph::new(|mut graph| {
///     let ids: Vec<_> = (1..=4).map(|v| graph.add_vertex(v)).collect();
///     for w in ids.windows(2) {
///         graph.add_edge(w[0], w[1]);
///     }
///     assert_eq!(graph.has_strictly_increasing_path(Some(ids[0]), Some(ids[3])), Ok(true));
///     assert_eq!(graph.has_strictly_increasing_path(Some(ids[3]), Some(ids[0])), Ok(false));
///     assert_eq!(
///         graph.has_strictly_increasing_path(None, Some(ids[0])),
///         Err(TraversalError::InvalidArgument { argument: "start" }),
///     );
/// });
/// ```
pub fn has_strictly_increasing_path<'brand, G>(
    graph: &G,
    start: Option<VertexId<'brand>>,
    end: Option<VertexId<'brand>>,
) -> Result<bool, TraversalError>
where
    G: VertexAccess<'brand>,
    G::Value: PartialOrd,
{
    strictly_increasing_path(graph, start, end).map(|path| path.is_some())
}
