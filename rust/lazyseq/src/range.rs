//! Closed integer intervals walked in either direction.
//!
//! A [`RangeSequence`] visits every integer from `first` to `last`, both
//! inclusive. The direction is fixed at construction: ascending when
//! `first <= last`, descending otherwise. The walk never computes a value
//! outside `[min(first, last), max(first, last)]`, so ranges touching
//! `T::MAX` or `T::MIN` neither overflow nor wrap.

use std::fmt::Debug;

use lazyseq_common::{Result, error::Error};
use num_traits::PrimInt;

use crate::{cursor::Cursor, sequence::Sequence};

/// Integer types a [`RangeSequence`] can walk over.
pub trait RangeBound: PrimInt + Debug {}

impl RangeBound for i32 {}
impl RangeBound for i64 {}

pub type IntRange = RangeSequence<i32>;
pub type LongRange = RangeSequence<i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSequence<T> {
    first: T,
    last: T,
    ascending: bool,
}

impl<T: RangeBound> RangeSequence<T> {
    /// Creates a new `RangeSequence`.
    ///
    /// # Arguments
    ///
    /// * `first` - The first value produced.
    /// * `last` - The last value produced. When it is below `first` the range
    ///   counts down.
    pub fn new(first: T, last: T) -> Self {
        RangeSequence {
            first,
            last,
            ascending: first <= last,
        }
    }

    pub fn first(&self) -> T {
        self.first
    }

    pub fn last(&self) -> T {
        self.last
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }
}

impl<T: RangeBound> Sequence for RangeSequence<T> {
    type Item = T;
    type Cursor = RangeCursor<T>;

    fn cursor(&self) -> Result<RangeCursor<T>> {
        log::trace!(
            "range cursor {:?}..={:?} ({})",
            self.first,
            self.last,
            if self.ascending { "ascending" } else { "descending" }
        );
        Ok(RangeCursor {
            next: self.first,
            last: self.last,
            ascending: self.ascending,
            done: false,
        })
    }
}

/// Cursor over a [`RangeSequence`].
#[derive(Debug, Clone)]
pub struct RangeCursor<T> {
    next: T,
    last: T,
    ascending: bool,
    done: bool,
}

impl<T: RangeBound> Cursor for RangeCursor<T> {
    type Item = T;

    #[inline]
    fn has_next(&self) -> bool {
        !self.done
    }

    #[inline]
    fn next(&mut self) -> Result<T> {
        if self.done {
            return Err(Error::exhausted(std::any::type_name::<Self>()));
        }
        let current = self.next;
        if current == self.last {
            self.done = true;
        } else if self.ascending {
            // current < last, cannot overflow
            self.next = current + T::one();
        } else {
            self.next = current - T::one();
        }
        Ok(current)
    }
}
