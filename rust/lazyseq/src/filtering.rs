//! Lookahead filtering.
//!
//! [`Filtering`] keeps the next accepted element buffered at all times, so
//! [`Cursor::has_next`] is a plain state check with no side effects. The
//! first search happens on construction; each [`Cursor::next`] hands out the
//! buffered element and immediately searches for the following one.
//!
//! The same cursor type serves every element kind. Monomorphization gives
//! the `i32`, `i64` and `f64` instances their own unboxed code paths.

use lazyseq_common::{Result, error::Error};

use crate::{cursor::Cursor, lookahead::Lookahead, sequence::Sequence};

/// A test applied to each candidate element.
///
/// Implemented for every `FnMut(&T) -> bool`. Stateful predicates (such as
/// the dedupe predicate) are allowed; they are invoked exactly once per
/// upstream element, in upstream order.
pub trait Predicate<T: ?Sized> {
    fn test(&mut self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Adapts a by-value predicate over a `Copy` element, the natural shape for
/// primitive predicates.
#[derive(Debug, Clone, Copy)]
pub struct ByValue<F>(pub F);

impl<T: Copy, F> Predicate<T> for ByValue<F>
where
    F: FnMut(T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        (self.0)(*item)
    }
}

/// Cursor yielding the upstream elements accepted by a predicate.
pub struct Filtering<C: Cursor, P> {
    inner: C,
    predicate: P,
    lookahead: Lookahead<C::Item>,
}

impl<C, P> Filtering<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    /// Wraps `inner` and seeks the first accepted element.
    ///
    /// An upstream failure during this first search is returned here and no
    /// cursor is created.
    ///
    /// # Arguments
    ///
    /// * `inner` - The upstream cursor. It is pulled only by this cursor from
    ///   now on.
    /// * `predicate` - Decides which upstream elements are passed on. Called
    ///   exactly once per upstream element, in order.
    pub fn new(inner: C, predicate: P) -> Result<Self> {
        let mut filtering = Filtering {
            inner,
            predicate,
            lookahead: Lookahead::Seeking,
        };
        filtering
            .lookahead
            .seek(&mut filtering.inner, &mut filtering.predicate)?;
        Ok(filtering)
    }
}

impl<C: Cursor, P> Filtering<C, P> {
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<C, P> Cursor for Filtering<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&self) -> bool {
        self.lookahead.has_pending()
    }

    fn next(&mut self) -> Result<Self::Item> {
        let current = self
            .lookahead
            .take()?
            .ok_or_else(|| Error::exhausted(std::any::type_name::<Self>()))?;
        // A failure here surfaces on the next pull, after `current`.
        self.lookahead.advance(&mut self.inner, &mut self.predicate);
        Ok(current)
    }

    // The upstream has already moved past the returned element, so removal
    // cannot be delegated; the default "unsupported" applies.
}

impl<C, P> std::fmt::Debug for Filtering<C, P>
where
    C: Cursor + std::fmt::Debug,
    C::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filtering")
            .field("inner", &self.inner)
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

/// Sequence whose cursors filter the cursors of `source`.
///
/// Every cursor receives its own clone of the predicate.
#[derive(Debug, Clone)]
pub struct FilteringSequence<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> FilteringSequence<S, P> {
    /// Creates a new `FilteringSequence`.
    ///
    /// # Arguments
    ///
    /// * `source` - The sequence whose cursors are filtered.
    /// * `predicate` - Cloned into every cursor.
    pub fn new(source: S, predicate: P) -> Self {
        FilteringSequence { source, predicate }
    }
}

impl<S, P> Sequence for FilteringSequence<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;
    type Cursor = Filtering<S::Cursor, P>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Filtering::new(self.source.cursor()?, self.predicate.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bridge::{IterCursor, VecCursor},
        cursor::CursorExt,
        sequence::SequenceExt,
    };

    #[test]
    fn test_filter_keeps_order() {
        let evens = IterCursor::new(0..10).filter(|x| x % 2 == 0).unwrap();
        assert_eq!(evens.collect_vec().unwrap(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_filter_nothing_accepted() {
        let mut none = IterCursor::new([1, 3, 5]).filter(|x| x % 2 == 0).unwrap();
        assert!(!none.has_next());
        assert!(none.next().unwrap_err().is_exhausted());
        assert!(!none.has_next());
    }

    #[test]
    fn test_filter_empty_upstream() {
        let empty = IterCursor::new(Vec::<String>::new())
            .filter(|_| true)
            .unwrap();
        assert!(!empty.has_next());
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let mut calls = 0;
        let mut cursor = IterCursor::new([1, 2, 3])
            .filter(|x| {
                calls += 1;
                *x != 2
            })
            .unwrap();
        for _ in 0..5 {
            assert!(cursor.has_next());
        }
        assert_eq!(cursor.next().unwrap(), 1);
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next().unwrap(), 3);
        assert!(!cursor.has_next());
        drop(cursor);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_by_value_predicate() {
        let cursor = Filtering::new(IterCursor::new([1.5f64, -2.0, 3.25]), ByValue(|x: f64| x > 0.0))
            .unwrap();
        assert_eq!(cursor.collect_vec().unwrap(), vec![1.5, 3.25]);
    }

    #[test]
    fn test_filter_does_not_support_removal() {
        let mut data = vec![1, 2, 3];
        let mut cursor = VecCursor::new(&mut data).filter(|x| *x > 1).unwrap();
        assert_eq!(cursor.next().unwrap(), 2);
        assert!(matches!(
            cursor.remove().unwrap_err().kind(),
            lazyseq_common::ErrorKind::UnsupportedRemoval { .. }
        ));
        drop(cursor);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_filtering_sequence_restarts() {
        let data = [5, 1, 7, 2, 9];
        let big = (&data[..]).filter(|x: &i32| *x > 4);
        assert_eq!(big.collect_vec().unwrap(), vec![5, 7, 9]);
        assert_eq!(big.collect_vec().unwrap(), vec![5, 7, 9]);
    }

    #[test]
    fn test_upstream_failure_propagates_from_constructor() {
        let failing = IterCursor::new([1, 2]).try_map(|x: i32| -> Result<i32> {
            if x == 1 {
                Err(Error::callback("first", std::io::Error::other("boom")))
            } else {
                Ok(x)
            }
        });
        let err = Filtering::new(failing, |_: &i32| true).err().unwrap();
        assert!(matches!(
            err.kind(),
            lazyseq_common::ErrorKind::Callback { .. }
        ));
    }

    #[test]
    fn test_accepted_element_survives_later_failure() {
        let upstream = IterCursor::new([1, 2, 3]).try_map(|x: i32| -> Result<i32> {
            if x == 2 {
                Err(Error::callback("two", std::io::Error::other("bad element")))
            } else {
                Ok(x)
            }
        });
        let mut cursor = upstream.filter(|_| true).unwrap();
        assert_eq!(cursor.next().unwrap(), 1);
        assert!(cursor.has_next());
        let err = cursor.next().unwrap_err();
        assert!(matches!(
            err.kind(),
            lazyseq_common::ErrorKind::Callback { context, .. } if context == "two"
        ));
        assert!(!cursor.has_next());
        assert!(cursor.next().unwrap_err().is_exhausted());
    }
}
