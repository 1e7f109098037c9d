//! Pre-order depth-first search over a branded vertex graph.
//!
//! `Dfs` keeps an explicit stack of frames, one per vertex on the current
//! root-to-vertex path, each holding a cursor into that vertex's neighbor
//! list. This reproduces the visitation order of the recursive formulation
//! (first neighbor fully explored before the second) while keeping the
//! native call stack flat, so arbitrarily deep graphs are safe.

use crate::graph::access::visited::VisitedSet;
use crate::graph::{VertexAccess, VertexId};

/// Decides whether the edge `from -> to` may be descended.
pub type EdgeFilter<'brand> = fn(VertexId<'brand>, VertexId<'brand>) -> bool;

#[derive(Debug, Clone, Copy)]
struct Frame<'brand> {
    vertex: VertexId<'brand>,
    next: usize,
}

/// An iterator yielding reachable vertex ids in DFS pre-order.
///
/// Each vertex is marked visited the moment it is discovered and yielded
/// exactly once. Sibling order follows the neighbor list order.
///
/// # Example
///
/// ```rust
/// use vertex_walk::{Dfs, VertexGraph};
///
/// VertexGraph::new(|mut graph| {
///     // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
///     let v: Vec<_> = (0..4).map(|i| graph.add_vertex(i)).collect();
///     graph.add_edge(v[0], v[1]);
///     graph.add_edge(v[0], v[2]);
///     graph.add_edge(v[1], v[3]);
///     graph.add_edge(v[2], v[3]);
///
///     let order: Vec<_> = Dfs::new(&graph, Some(v[0])).map(|id| id.index()).collect();
///     assert_eq!(order, vec![0, 1, 3, 2]);
/// });
/// ```
pub struct Dfs<'g, 'brand, G, F = EdgeFilter<'brand>>
where
    G: VertexAccess<'brand>,
{
    graph: &'g G,
    visited: VisitedSet,
    stack: Vec<Frame<'brand>>,
    discovered: Option<VertexId<'brand>>,
    edge_filter: F,
}

impl<'g, 'brand, G> Dfs<'g, 'brand, G>
where
    G: VertexAccess<'brand>,
{
    /// Starts a traversal at `start`; `None` yields nothing.
    pub fn new(graph: &'g G, start: Option<VertexId<'brand>>) -> Self {
        let descend_all: EdgeFilter<'brand> = |_, _| true;
        Dfs::with_edge_filter(graph, start, descend_all)
    }
}

impl<'g, 'brand, G, F> Dfs<'g, 'brand, G, F>
where
    G: VertexAccess<'brand>,
    F: FnMut(VertexId<'brand>, VertexId<'brand>) -> bool,
{
    /// Starts a traversal at `start` that only descends edges accepted by `edge_filter`.
    ///
    /// Rejected edges are pruned without marking their target, so the target
    /// may still be reached later through an accepted edge.
    pub fn with_edge_filter(graph: &'g G, start: Option<VertexId<'brand>>, edge_filter: F) -> Self {
        let mut visited = VisitedSet::new(graph.vertex_count());
        let discovered = start.filter(|&s| visited.try_visit(s));
        Self {
            graph,
            visited,
            stack: Vec::new(),
            discovered,
            edge_filter,
        }
    }

    /// The path from the start vertex to the most recently yielded vertex.
    ///
    /// Only meaningful directly after `next` returned `Some`; the path is
    /// made of the vertices whose frames are still open.
    pub fn path(&self) -> impl ExactSizeIterator<Item = VertexId<'brand>> + '_ {
        self.stack.iter().map(|frame| frame.vertex)
    }

    /// Number of vertices discovered so far.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }

    /// Returns `true` if `vertex` has been discovered by this traversal.
    #[inline]
    pub fn is_visited(&self, vertex: VertexId<'brand>) -> bool {
        self.visited.is_visited(vertex)
    }
}

impl<'brand, G, F> Iterator for Dfs<'_, 'brand, G, F>
where
    G: VertexAccess<'brand>,
    F: FnMut(VertexId<'brand>, VertexId<'brand>) -> bool,
{
    type Item = VertexId<'brand>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(vertex) = self.discovered.take() {
                self.stack.push(Frame { vertex, next: 0 });
                return Some(vertex);
            }

            let frame = self.stack.last_mut()?;
            match self.graph.neighbors(frame.vertex).get(frame.next) {
                Some(&neighbor) => {
                    frame.next += 1;
                    if (self.edge_filter)(frame.vertex, neighbor) && self.visited.try_visit(neighbor) {
                        self.discovered = Some(neighbor);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
