//! Value aggregation over reachable vertices.

use num_traits::{Bounded, Zero};

use crate::graph::access::visited::VisitedSet;
use crate::graph::{VertexAccess, VertexId};
use crate::macros::trace_traversal;

struct MaxFrame<'brand, T> {
    vertex: VertexId<'brand>,
    next: usize,
    best: T,
}

/// Returns the largest value among all vertices reachable from `start`.
///
/// An absent start yields `T::min_value()`.
///
/// A vertex contributes its own value only when it is first discovered.
/// An edge to an already-visited neighbor (a second path or a cycle)
/// contributes `T::zero()` to the vertex it leaves from, so on graphs whose
/// reachable values are all negative the result is `0` as soon as any such
/// edge is crossed.
pub fn max_reachable_value<'brand, G>(graph: &G, start: Option<VertexId<'brand>>) -> G::Value
where
    G: VertexAccess<'brand>,
    G::Value: Ord + Clone + Bounded + Zero,
{
    let Some(start) = start else {
        return <G::Value as Bounded>::min_value();
    };

    let mut visited = VisitedSet::new(graph.vertex_count());
    visited.try_visit(start);
    let mut stack = vec![MaxFrame {
        vertex: start,
        next: 0,
        best: graph.value(start).clone(),
    }];

    let mut result = None;
    while let Some(frame) = stack.last_mut() {
        if let Some(&neighbor) = graph.neighbors(frame.vertex).get(frame.next) {
            frame.next += 1;
            if visited.try_visit(neighbor) {
                stack.push(MaxFrame {
                    vertex: neighbor,
                    next: 0,
                    best: graph.value(neighbor).clone(),
                });
            } else if frame.best < <G::Value as Zero>::zero() {
                frame.best = <G::Value as Zero>::zero();
            }
            continue;
        }

        // Neighbors exhausted: fold this subtree's maximum into its parent.
        let finished = stack.pop().map(|frame| frame.best);
        match (stack.last_mut(), finished) {
            (Some(parent), Some(best)) if best > parent.best => parent.best = best,
            (None, best) => result = best,
            _ => {}
        }
    }

    trace_traversal!(operation = "max_reachable_value", visited = visited.count());
    result.unwrap_or_else(<G::Value as Bounded>::min_value)
}
