//! # `vertex_walk` - Depth-First Traversal Toolkit
//!
//! Traversal utilities over directed graphs of labeled vertices, where each
//! vertex carries one value and an ordered list of outgoing neighbors. The
//! graph may contain cycles, self-loops, duplicate edges and disconnected
//! parts.
//!
//! ## Operations
//!
//! - **Reachability**: [`enumerate_reachable`], [`visit_and_emit`], [`write_reachable_values`]
//! - **Aggregation**: [`max_reachable_value`]
//! - **Leaves**: [`collect_leaves`]
//! - **Universal predicates**: [`all_reachable_satisfy`], [`all_reachable_odd`]
//! - **Paths**: [`has_strictly_increasing_path`], [`strictly_increasing_path`]
//!
//! ## Guarantees
//!
//! - **Identity, not value**: visited sets are keyed by [`VertexId`], so
//!   vertices carrying equal values are still told apart.
//! - **Branded ids**: a [`VertexGraph`] lives inside a closure that opens a
//!   fresh invariant lifetime. Ids minted by one graph cannot be used with
//!   another, and since graphs only grow, id lookups never go out of bounds.
//! - **Flat call stack**: traversals keep an explicit frame stack on the heap,
//!   so deep chains cannot exhaust the native stack.
//! - **Per-call state**: every call owns its visited set; operations are
//!   re-entrant and never mutate the graph.
//!
//! ## Example
//!
//! ```rust
//! use vertex_walk::{GraphTraversal, VertexGraph};
//!
//! VertexGraph::new(|mut graph| {
//!     // Diamond: 1 -> 5, 1 -> 2, 5 -> 10, 2 -> 10
//!     let a = graph.add_vertex(1);
//!     let b = graph.add_vertex(5);
//!     let c = graph.add_vertex(2);
//!     let d = graph.add_vertex(10);
//!     graph.add_edge(a, b);
//!     graph.add_edge(a, c);
//!     graph.add_edge(b, d);
//!     graph.add_edge(c, d);
//!
//!     assert_eq!(graph.max_reachable_value(Some(a)), 10);
//!     assert_eq!(graph.enumerate_reachable(Some(a)).len(), 4);
//!     assert!(graph.collect_leaves(Some(a)).contains(&d));
//!     assert!(!graph.all_reachable_odd(Some(a)));
//!     assert_eq!(graph.has_strictly_increasing_path(Some(a), Some(d)), Ok(true));
//! });
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `trace!` event per traversal with the operation name
//!   and the number of visited vertices.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod error;
pub mod graph;
pub mod traversal;

pub use error::TraversalError;
pub use graph::{Vertex, VertexAccess, VertexGraph, VertexId};
pub use traversal::{
    all_reachable_odd,
    all_reachable_satisfy,
    collect_leaves,
    enumerate_reachable,
    has_strictly_increasing_path,
    max_reachable_value,
    strictly_increasing_path,
    visit_and_emit,
    write_reachable_values,
    Dfs,
    GraphTraversal,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The brand is a ZST: an id is exactly one index wide.
    assert!(mem::size_of::<VertexId<'static>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<VertexId<'static>>>() <= 2 * mem::size_of::<usize>());
};
