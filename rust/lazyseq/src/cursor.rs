//! The pull-based cursor protocol.
//!
//! A [`Cursor`] is a single-pass, stateful consumer of a sequence. Callers
//! drive it by alternating [`Cursor::has_next`] and [`Cursor::next`]; the
//! former is a pure query and always agrees with whether the latter
//! succeeds. Calling `next` on an exhausted cursor yields an
//! [`ErrorKind::Exhausted`](lazyseq_common::ErrorKind::Exhausted) error and
//! never a sentinel value.

use std::hash::Hash;

use lazyseq_common::{Result, error::Error};
use lazyseq_membership::{HashMembership, Membership};

use crate::{
    dedupe::Dedupe,
    filtering::Filtering,
    mapping::{Mapping, TryMapping},
    non_null::{NonNull, Nullable},
};

/// Stateful consumer of a lazy sequence.
pub trait Cursor {
    type Item;

    /// Returns `true` if a subsequent [`Cursor::next`] call will succeed.
    ///
    /// Idempotent: repeated calls without an intervening `next` return the
    /// same answer. Once this returns `false` it returns `false` forever.
    fn has_next(&self) -> bool;

    /// Produces the next element.
    ///
    /// Fails with an "exhausted" error when [`Cursor::has_next`] is `false`.
    fn next(&mut self) -> Result<Self::Item>;

    /// Removes the element most recently returned by [`Cursor::next`] from
    /// the underlying storage.
    ///
    /// Cursors that are not backed by removable storage report an
    /// "unsupported removal" error.
    fn remove(&mut self) -> Result<()> {
        Err(Error::unsupported_removal(std::any::type_name::<Self>()))
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }
}

/// Adaptor constructors available on every cursor.
pub trait CursorExt: Cursor + Sized {
    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// The first matching element is located eagerly, so an upstream failure
    /// during that initial search is reported here.
    fn filter<F>(self, predicate: F) -> Result<Filtering<Self, F>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filtering::new(self, predicate)
    }

    /// Drops every element equal to one produced earlier by this cursor.
    fn dedupe(self) -> Result<Filtering<Self, Dedupe<HashMembership<Self::Item>>>>
    where
        Self::Item: Eq + Hash + Clone,
    {
        self.dedupe_with(HashMembership::new())
    }

    /// Like [`CursorExt::dedupe`], recording seen elements in `membership`.
    ///
    /// Passing `&mut set` shares suppression state between cursors.
    fn dedupe_with<M>(self, membership: M) -> Result<Filtering<Self, Dedupe<M>>>
    where
        M: Membership<Self::Item>,
    {
        Filtering::dedupe(self, membership)
    }

    /// Drops absent elements. Cursors over primitives are passed through.
    fn non_null(self) -> Result<NonNull<Self>>
    where
        Self::Item: Nullable,
    {
        NonNull::new(self)
    }

    fn map<B, F>(self, f: F) -> Mapping<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        Mapping::new(self, f)
    }

    /// Like [`CursorExt::map`] for transformations that can fail.
    fn try_map<B, F>(self, f: F) -> TryMapping<Self, F>
    where
        F: FnMut(Self::Item) -> Result<B>,
    {
        TryMapping::new(self, f)
    }

    /// Bridges this cursor to a std iterator over `Result<Item>`.
    fn results(self) -> CursorIter<Self> {
        CursorIter { cursor: self }
    }

    /// Drains the cursor into a vector, stopping at the first error.
    fn collect_vec(self) -> Result<Vec<Self::Item>> {
        self.results().collect()
    }
}

impl<C: Cursor> CursorExt for C {}

/// Iterator over the elements of a [`Cursor`].
///
/// Created by [`CursorExt::results`]. Yields `Some(Err(_))` when the cursor
/// fails and `None` once `has_next` reports `false`.
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = Result<C::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_next() {
            Some(self.cursor.next())
        } else {
            None
        }
    }
}
