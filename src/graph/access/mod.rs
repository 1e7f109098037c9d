//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so traversals can share the
//! visited-set primitive without exposing it as part of the public API.

pub(crate) mod visited;
