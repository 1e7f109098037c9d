//! An append-only arena of branded vertices.
//!
//! `VertexGraph` is the caller-owned representation traversals run over:
//! - vertices live in one `Vec`, identified by their slot index
//! - every `VertexId<'brand>` is minted by the graph that owns the slot
//! - vertices and edges can be added but never removed
//!
//! Because the brand is fresh per graph and storage only grows, every id in
//! scope is in bounds for the graph it belongs to, and lookups never fail.

use super::brand::InvariantLifetime;
use super::vertex::{Vertex, VertexAccess, VertexId};

/// A directed graph of labeled vertices with outgoing neighbor lists.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to the vertex arena |
/// | `add_edge` | \(O(1)\) amortized | No duplicate check; multi-edges are kept |
/// | `value` / `neighbors` | \(O(1)\) | Direct slot access |
/// | `edge_count` | \(O(n)\) | Sums neighbor list lengths |
#[derive(Debug)]
pub struct VertexGraph<'brand, T> {
    vertices: Vec<Vertex<'brand, T>>,
    _brand: InvariantLifetime<'brand>,
}

impl<T> VertexGraph<'_, T> {
    /// Creates an empty graph under a fresh brand and runs `f` with it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vertex_walk::{GraphTraversal, VertexGraph};
    ///
    /// let reachable = VertexGraph::new(|mut graph| {
    ///     let a = graph.add_vertex(1);
    ///     let b = graph.add_vertex(2);
    ///     graph.add_edge(a, b);
    ///     graph.enumerate_reachable(Some(a)).len()
    /// });
    /// assert_eq!(reachable, 2);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(VertexGraph<'new_brand, T>) -> R,
    {
        Self::with_capacity(0, f)
    }

    /// Like [`VertexGraph::new`], reserving room for `capacity` vertices.
    pub fn with_capacity<F, R>(capacity: usize, f: F) -> R
    where
        F: for<'new_brand> FnOnce(VertexGraph<'new_brand, T>) -> R,
    {
        f(VertexGraph {
            vertices: Vec::with_capacity(capacity),
            _brand: InvariantLifetime::new(),
        })
    }
}

impl<'brand, T> VertexGraph<'brand, T> {
    /// Adds a vertex with no outgoing edges and returns its id.
    pub fn add_vertex(&mut self, value: T) -> VertexId<'brand> {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(value));
        id
    }

    /// Appends a directed edge `from -> to`.
    ///
    /// Self-loops and repeated edges are stored as given.
    pub fn add_edge(&mut self, from: VertexId<'brand>, to: VertexId<'brand>) {
        self.vertices[from.index()].neighbors.push(to);
    }

    /// Returns the vertex record for `id`.
    #[inline]
    pub fn vertex(&self, id: VertexId<'brand>) -> &Vertex<'brand, T> {
        &self.vertices[id.index()]
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    /// Iterates over all vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<'brand>> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<'brand, T> VertexAccess<'brand> for VertexGraph<'brand, T> {
    type Value = T;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn value(&self, vertex: VertexId<'brand>) -> &T {
        &self.vertices[vertex.index()].value
    }

    #[inline]
    fn neighbors(&self, vertex: VertexId<'brand>) -> &[VertexId<'brand>] {
        &self.vertices[vertex.index()].neighbors
    }
}
