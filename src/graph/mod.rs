//! Branded vertex graphs.
//!
//! - `vertex`: vertex ids, vertex records and the `VertexAccess` contract
//! - `vertex_graph`: the append-only arena callers build graphs in

mod brand;
pub mod vertex;
pub mod vertex_graph;
pub(crate) mod access;

pub use vertex::{Vertex, VertexAccess, VertexId};
pub use vertex_graph::VertexGraph;
