//! Depth-first traversal operations.
//!
//! Every operation runs one DFS from a start vertex with a fresh visited set
//! owned by that call: a vertex is marked before its neighbors are
//! descended, and a marked vertex is never processed again. This makes all
//! operations terminate on cyclic graphs and run in \(O(n + m)\) over the
//! reachable subgraph.
//!
//! The operations are available as free functions and, through the blanket
//! [`GraphTraversal`] extension trait, as methods on any [`VertexAccess`]
//! graph.
//!
//! | Operation | Absent start | Value bound |
//! |-----------|--------------|-------------|
//! | `enumerate_reachable` | empty set | none |
//! | `visit_and_emit` | no emission | none |
//! | `max_reachable_value` | `Bounded::min_value()` | `Ord + Clone + Bounded + Zero` |
//! | `collect_leaves` | empty set | none |
//! | `all_reachable_satisfy` | `true` | none |
//! | `all_reachable_odd` | `true` | `PrimInt` |
//! | `has_strictly_increasing_path` | `InvalidArgument` | `PartialOrd` |

pub mod aggregate;
pub mod dfs;
pub mod increasing_path;
pub mod leaves;
pub mod predicate;
pub mod reachable;

use std::collections::HashSet;
use std::fmt::Display;
use std::io;

use num_traits::{Bounded, PrimInt, Zero};

pub use aggregate::max_reachable_value;
pub use dfs::{Dfs, EdgeFilter};
pub use increasing_path::{has_strictly_increasing_path, strictly_increasing_path};
pub use leaves::collect_leaves;
pub use predicate::{all_reachable_odd, all_reachable_satisfy};
pub use reachable::{enumerate_reachable, visit_and_emit, write_reachable_values};

use crate::error::TraversalError;
use crate::graph::{VertexAccess, VertexId};

/// Method-call access to the traversal operations for any [`VertexAccess`] graph.
pub trait GraphTraversal<'brand>: VertexAccess<'brand> + Sized {
    /// See [`enumerate_reachable`].
    fn enumerate_reachable(&self, start: Option<VertexId<'brand>>) -> HashSet<VertexId<'brand>> {
        enumerate_reachable(self, start)
    }

    /// See [`visit_and_emit`].
    fn visit_and_emit<E>(&self, start: Option<VertexId<'brand>>, emit: E)
    where
        E: FnMut(&Self::Value),
    {
        visit_and_emit(self, start, emit);
    }

    /// See [`write_reachable_values`].
    ///
    /// # Errors
    /// Propagates I/O errors from `sink`.
    fn write_reachable_values<W>(&self, start: Option<VertexId<'brand>>, sink: W) -> io::Result<()>
    where
        Self::Value: Display,
        W: io::Write,
    {
        write_reachable_values(self, start, sink)
    }

    /// See [`max_reachable_value`].
    fn max_reachable_value(&self, start: Option<VertexId<'brand>>) -> Self::Value
    where
        Self::Value: Ord + Clone + Bounded + Zero,
    {
        max_reachable_value(self, start)
    }

    /// See [`collect_leaves`].
    fn collect_leaves(&self, start: Option<VertexId<'brand>>) -> HashSet<VertexId<'brand>> {
        collect_leaves(self, start)
    }

    /// See [`all_reachable_satisfy`].
    fn all_reachable_satisfy<P>(&self, start: Option<VertexId<'brand>>, predicate: P) -> bool
    where
        P: FnMut(&Self::Value) -> bool,
    {
        all_reachable_satisfy(self, start, predicate)
    }

    /// See [`all_reachable_odd`].
    fn all_reachable_odd(&self, start: Option<VertexId<'brand>>) -> bool
    where
        Self::Value: PrimInt,
    {
        all_reachable_odd(self, start)
    }

    /// See [`has_strictly_increasing_path`].
    ///
    /// # Errors
    /// Returns [`TraversalError::InvalidArgument`] if either endpoint is absent.
    fn has_strictly_increasing_path(
        &self,
        start: Option<VertexId<'brand>>,
        end: Option<VertexId<'brand>>,
    ) -> Result<bool, TraversalError>
    where
        Self::Value: PartialOrd,
    {
        has_strictly_increasing_path(self, start, end)
    }

    /// See [`strictly_increasing_path`].
    ///
    /// # Errors
    /// Returns [`TraversalError::InvalidArgument`] if either endpoint is absent.
    fn strictly_increasing_path(
        &self,
        start: Option<VertexId<'brand>>,
        end: Option<VertexId<'brand>>,
    ) -> Result<Option<Vec<VertexId<'brand>>>, TraversalError>
    where
        Self::Value: PartialOrd,
    {
        strictly_increasing_path(self, start, end)
    }
}

impl<'brand, G> GraphTraversal<'brand> for G where G: VertexAccess<'brand> {}
