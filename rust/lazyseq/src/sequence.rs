//! Restartable sequence descriptors.
//!
//! A [`Sequence`] is an immutable, value-like description of a lazy
//! sequence. Each call to [`Sequence::cursor`] starts an independent
//! traversal. Adaptor sequences own their source and produce adaptor cursors
//! over fresh source cursors, so composition is unbounded:
//!
//! ```
//! use lazyseq::{IntRange, SequenceExt};
//!
//! let odd_squares = IntRange::new(1, 10)
//!     .filter(|x: &i32| x % 2 == 1)
//!     .map(|x: i32| x * x);
//! assert_eq!(odd_squares.collect_vec().unwrap(), vec![1, 9, 25, 49, 81]);
//! ```

use std::hash::Hash;

use lazyseq_common::Result;
use lazyseq_membership::{HashMembership, Membership};

use crate::{
    bridge::IterCursor,
    cursor::{Cursor, CursorExt},
    dedupe::DedupeSequence,
    filtering::FilteringSequence,
    mapping::{MappingSequence, TryMappingSequence},
    non_null::{NonNullSequence, Nullable},
};

/// A lazy sequence that can hand out any number of independent cursors.
pub trait Sequence {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    /// Starts a new traversal from the beginning of the sequence.
    fn cursor(&self) -> Result<Self::Cursor>;
}

impl<'a, T: Clone> Sequence for &'a [T] {
    type Item = T;
    type Cursor = IterCursor<std::iter::Cloned<std::slice::Iter<'a, T>>>;

    fn cursor(&self) -> Result<Self::Cursor> {
        let slice: &'a [T] = *self;
        Ok(IterCursor::new(slice.iter().cloned()))
    }
}

impl<'a, T: Clone> Sequence for &'a Vec<T> {
    type Item = T;
    type Cursor = IterCursor<std::iter::Cloned<std::slice::Iter<'a, T>>>;

    fn cursor(&self) -> Result<Self::Cursor> {
        let vec: &'a Vec<T> = *self;
        Ok(IterCursor::new(vec.iter().cloned()))
    }
}

/// Adaptor constructors available on every sequence.
///
/// Closures handed to these adaptors must be `Clone`: each cursor gets its
/// own copy.
pub trait SequenceExt: Sequence + Sized {
    fn filter<F>(self, predicate: F) -> FilteringSequence<Self, F>
    where
        F: FnMut(&Self::Item) -> bool + Clone,
    {
        FilteringSequence::new(self, predicate)
    }

    /// Sequence of the distinct elements, in order of first occurrence.
    ///
    /// Each cursor tracks seen elements in a fresh set of its own.
    fn dedupe(self) -> DedupeSequence<Self, fn() -> HashMembership<Self::Item>>
    where
        Self::Item: Eq + Hash + Clone,
    {
        DedupeSequence::new(self, HashMembership::new as fn() -> HashMembership<Self::Item>)
    }

    /// Like [`SequenceExt::dedupe`], calling `factory` for each new cursor's
    /// membership structure.
    fn dedupe_with<M, F>(self, factory: F) -> DedupeSequence<Self, F>
    where
        F: Fn() -> M,
        M: Membership<Self::Item>,
    {
        DedupeSequence::new(self, factory)
    }

    fn non_null(self) -> NonNullSequence<Self>
    where
        Self::Item: Nullable,
    {
        NonNullSequence::new(self)
    }

    fn map<B, F>(self, f: F) -> MappingSequence<Self, F>
    where
        F: FnMut(Self::Item) -> B + Clone,
    {
        MappingSequence::new(self, f)
    }

    fn try_map<B, F>(self, f: F) -> TryMappingSequence<Self, F>
    where
        F: FnMut(Self::Item) -> Result<B> + Clone,
    {
        TryMappingSequence::new(self, f)
    }

    /// Runs a fresh cursor to exhaustion.
    fn collect_vec(&self) -> Result<Vec<Self::Item>> {
        self.cursor()?.collect_vec()
    }
}

impl<S: Sequence> SequenceExt for S {}
