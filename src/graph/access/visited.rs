//! Visited sets for graph traversals.
//!
//! `VisitedSet` is a dense, word-packed bitset keyed by vertex index. It is
//! sized once per traversal from `VertexAccess::vertex_count` and lives only
//! for the duration of that call.
//!
//! Membership is keyed by identity (the id's slot), never by value, so the
//! set stays correct when distinct vertices carry equal values.

use crate::graph::VertexId;

const WORD_BITS: usize = u64::BITS as usize;

/// A dense visited set for one traversal.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    bits: usize,
    marked: usize,
}

impl VisitedSet {
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            bits,
            marked: 0,
        }
    }

    #[inline(always)]
    fn locate(index: usize) -> (usize, u64) {
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, vertex: VertexId<'_>) -> bool {
        debug_assert!(vertex.index() < self.bits, "vertex {vertex:?} out of bounds");
        let (word, mask) = Self::locate(vertex.index());
        let slot = &mut self.words[word];
        if *slot & mask == 0 {
            *slot |= mask;
            self.marked += 1;
            true
        } else {
            false
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, vertex: VertexId<'_>) -> bool {
        let (word, mask) = Self::locate(vertex.index());
        self.words[word] & mask != 0
    }

    /// Number of vertices marked so far.
    #[inline(always)]
    pub(crate) fn count(&self) -> usize {
        self.marked
    }
}
