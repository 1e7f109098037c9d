//! Error types for traversal operations.
//!
//! Most traversals are total: an absent start vertex simply yields an empty,
//! sentinel or vacuous result. Only operations with a hard precondition (both
//! endpoints of a path) report errors.

/// The error type for traversal precondition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TraversalError {
    /// A required vertex argument was absent.
    InvalidArgument {
        /// Name of the offending parameter (`"start"` or `"end"`).
        argument: &'static str,
    },
}

impl TraversalError {
    #[inline]
    pub(crate) const fn missing(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }
}

impl core::fmt::Display for TraversalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument { argument } => {
                write!(f, "invalid argument: `{argument}` vertex is absent")
            }
        }
    }
}

impl std::error::Error for TraversalError {}
