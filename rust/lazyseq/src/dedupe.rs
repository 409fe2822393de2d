//! Deduplication as a filtering predicate.
//!
//! [`Dedupe`] turns any [`Membership`] structure into a predicate that holds
//! exactly on an element's first occurrence. Because the predicate is
//! stateful, it must see every upstream element once and in order, which is
//! what [`Filtering`](crate::filtering::Filtering) guarantees.

use lazyseq_common::Result;
use lazyseq_membership::Membership;

use crate::{
    cursor::Cursor,
    filtering::{Filtering, Predicate},
    sequence::Sequence,
};

/// Predicate accepting elements not seen before.
#[derive(Debug, Clone, Default)]
pub struct Dedupe<M> {
    membership: M,
}

impl<M> Dedupe<M> {
    /// Creates a predicate recording seen elements in `membership`.
    ///
    /// # Arguments
    ///
    /// * `membership` - Set of the elements seen so far. It is usually empty;
    ///   a pre-populated set suppresses its elements from the first pull on.
    pub fn new(membership: M) -> Self {
        Dedupe { membership }
    }

    pub fn membership(&self) -> &M {
        &self.membership
    }
}

impl<C, M> Filtering<C, Dedupe<M>>
where
    C: Cursor,
    M: Membership<C::Item>,
{
    /// Creates a cursor over the distinct elements of `inner`.
    ///
    /// Every dedupe cursor in the crate is built here.
    ///
    /// # Arguments
    ///
    /// * `inner` - The upstream cursor.
    /// * `membership` - Set recording the elements let through.
    pub fn dedupe(inner: C, membership: M) -> Result<Self> {
        log::debug!(
            "dedupe cursor over {} with {} membership",
            std::any::type_name::<C::Item>(),
            membership.strategy()
        );
        Filtering::new(inner, Dedupe::new(membership))
    }
}

impl<T: ?Sized, M> Predicate<T> for Dedupe<M>
where
    M: Membership<T>,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self.membership.insert_new(item)
    }
}

/// Sequence of the distinct elements of `source`.
///
/// `factory` is called once per cursor, so suppression state is never shared
/// between cursors unless the factory itself hands out shared state.
#[derive(Debug, Clone)]
pub struct DedupeSequence<S, F> {
    source: S,
    factory: F,
}

impl<S, F> DedupeSequence<S, F> {
    /// Creates a new `DedupeSequence`.
    ///
    /// # Arguments
    ///
    /// * `source` - The sequence whose cursors are deduplicated.
    /// * `factory` - Produces the membership set of each new cursor.
    pub fn new(source: S, factory: F) -> Self {
        DedupeSequence { source, factory }
    }
}

impl<S, F, M> Sequence for DedupeSequence<S, F>
where
    S: Sequence,
    F: Fn() -> M,
    M: Membership<S::Item>,
{
    type Item = S::Item;
    type Cursor = Filtering<S::Cursor, Dedupe<M>>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Filtering::dedupe(self.source.cursor()?, (self.factory)())
    }
}
