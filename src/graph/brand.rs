use core::marker::PhantomData;

/// A marker type that is invariant in its lifetime parameter `'id`.
///
/// Graphs and the vertex ids they mint carry the same invariant brand, so the
/// compiler refuses to unify the brands of two different graphs and an id can
/// never be looked up in a graph that did not create it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    pub(crate) const fn new() -> Self {
        Self(PhantomData)
    }
}
