//! Vertex identities, vertex records and the read-only access contract.

use core::fmt;

use super::brand::InvariantLifetime;

/// A stable identity for a vertex within one branded graph.
///
/// Ids compare by identity (their slot in the owning graph), never by the
/// value stored in the vertex: two vertices carrying equal values have
/// different ids. The `'brand` lifetime ties an id to the graph that minted
/// it, so ids from different graphs cannot be mixed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<'brand> {
    index: usize,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> VertexId<'brand> {
    #[inline(always)]
    pub(crate) const fn new(index: usize) -> Self {
        Self {
            index,
            _brand: InvariantLifetime::new(),
        }
    }

    /// Returns the dense index of this vertex in its graph.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for VertexId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.index)
    }
}

/// A vertex: one value plus an ordered list of outgoing neighbors.
///
/// The neighbor list may contain duplicates and self-loops.
#[derive(Debug)]
pub struct Vertex<'brand, T> {
    pub(crate) value: T,
    pub(crate) neighbors: Vec<VertexId<'brand>>,
}

impl<'brand, T> Vertex<'brand, T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            neighbors: Vec::new(),
        }
    }

    /// The value carried by this vertex.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Outgoing neighbors, in insertion order.
    #[inline]
    pub fn neighbors(&self) -> &[VertexId<'brand>] {
        &self.neighbors
    }

    /// Returns `true` if the vertex has no outgoing edges.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// Read-only access to a branded vertex graph.
///
/// This is the only thing traversals need from a graph representation:
/// a value per vertex, an iterable neighbor list per vertex, and a vertex
/// count used to size dense visited sets. Implementations must guarantee
/// that every `VertexId<'brand>` they hand out satisfies
/// `id.index() < self.vertex_count()`.
pub trait VertexAccess<'brand> {
    /// The value type stored in each vertex.
    type Value;

    /// Number of vertices; an upper bound on every id index plus one.
    fn vertex_count(&self) -> usize;

    /// The value stored at `vertex`.
    fn value(&self, vertex: VertexId<'brand>) -> &Self::Value;

    /// Outgoing neighbors of `vertex`, in iteration order.
    fn neighbors(&self, vertex: VertexId<'brand>) -> &[VertexId<'brand>];
}
