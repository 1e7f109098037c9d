//! Universal predicates over reachable vertices.

use num_traits::PrimInt;

use super::dfs::Dfs;
use crate::graph::{VertexAccess, VertexId};
use crate::macros::trace_traversal;

/// Returns `true` iff every vertex reachable from `start` satisfies `predicate`.
///
/// The traversal stops at the first violating vertex in DFS pre-order.
/// An absent start is vacuously `true`.
pub fn all_reachable_satisfy<'brand, G, P>(graph: &G, start: Option<VertexId<'brand>>, mut predicate: P) -> bool
where
    G: VertexAccess<'brand>,
    P: FnMut(&G::Value) -> bool,
{
    let mut dfs = Dfs::new(graph, start);
    let holds = dfs.all(|vertex| predicate(graph.value(vertex)));
    trace_traversal!(operation = "all_reachable_satisfy", visited = dfs.visited_count(), holds);
    holds
}

/// Returns `true` iff every reachable vertex holds an odd integer.
///
/// Negative odd values count as odd.
pub fn all_reachable_odd<'brand, G>(graph: &G, start: Option<VertexId<'brand>>) -> bool
where
    G: VertexAccess<'brand>,
    G::Value: PrimInt,
{
    all_reachable_satisfy(graph, start, |&value| is_odd(value))
}

#[inline]
fn is_odd<T: PrimInt>(value: T) -> bool {
    value & T::one() == T::one()
}
