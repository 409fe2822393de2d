//! Suppression of absent elements.
//!
//! Absence is modeled by [`Nullable`]: `Option<T>` elements are absent when
//! `None`, primitive elements are never absent. A non-null cursor over a
//! primitive kind is therefore a transparent pass-through.

use lazyseq_common::Result;

use crate::{cursor::Cursor, filtering::Filtering, sequence::Sequence};

/// Element types that may represent an absent value.
pub trait Nullable {
    /// `false` if no value of this type is ever absent.
    const NULLABLE: bool;

    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    const NULLABLE: bool = true;

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

macro_rules! impl_never_null {
    ($($T:ty),*) => {
        $(
            impl Nullable for $T {
                const NULLABLE: bool = false;

                #[inline]
                fn is_null(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_never_null!(i32, i64, f64);

fn is_present<T: Nullable>(item: &T) -> bool {
    !item.is_null()
}

/// Cursor dropping absent elements.
pub enum NonNull<C: Cursor> {
    PassThrough(C),
    Filtered(Filtering<C, fn(&C::Item) -> bool>),
}

impl<C> NonNull<C>
where
    C: Cursor,
    C::Item: Nullable,
{
    /// Wraps `inner`, filtering it only when its element type has an absent
    /// value.
    ///
    /// # Arguments
    ///
    /// * `inner` - The upstream cursor. Returned as-is inside
    ///   [`NonNull::PassThrough`] for primitive element types.
    pub fn new(inner: C) -> Result<Self> {
        if <C::Item as Nullable>::NULLABLE {
            let predicate: fn(&C::Item) -> bool = is_present::<C::Item>;
            Ok(NonNull::Filtered(Filtering::new(inner, predicate)?))
        } else {
            Ok(NonNull::PassThrough(inner))
        }
    }
}

impl<C> Cursor for NonNull<C>
where
    C: Cursor,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&self) -> bool {
        match self {
            NonNull::PassThrough(inner) => inner.has_next(),
            NonNull::Filtered(filtered) => filtered.has_next(),
        }
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        match self {
            NonNull::PassThrough(inner) => inner.next(),
            NonNull::Filtered(filtered) => filtered.next(),
        }
    }

    fn remove(&mut self) -> Result<()> {
        match self {
            NonNull::PassThrough(inner) => inner.remove(),
            NonNull::Filtered(filtered) => filtered.remove(),
        }
    }
}

/// Sequence whose cursors drop absent elements.
#[derive(Debug, Clone)]
pub struct NonNullSequence<S> {
    source: S,
}

impl<S> NonNullSequence<S> {
    pub fn new(source: S) -> Self {
        NonNullSequence { source }
    }
}

impl<S> Sequence for NonNullSequence<S>
where
    S: Sequence,
    S::Item: Nullable,
{
    type Item = S::Item;
    type Cursor = NonNull<S::Cursor>;

    fn cursor(&self) -> Result<Self::Cursor> {
        NonNull::new(self.source.cursor()?)
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
    fn test_non_null_drops_none() {
        let cursor = IterCursor::new([None, Some("a"), None, None, Some("b"), None])
            .non_null()
            .unwrap();
        assert!(matches!(cursor, NonNull::Filtered(_)));
        assert_eq!(cursor.collect_vec().unwrap(), vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_non_null_all_none() {
        let cursor = IterCursor::new([None::<u8>, None]).non_null().unwrap();
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_primitives_pass_through() {
        let cursor = IterCursor::new([1.0, f64::NAN, -0.0]).non_null().unwrap();
        assert!(matches!(cursor, NonNull::PassThrough(_)));
        let values = cursor.collect_vec().unwrap();
        assert_eq!(values.len(), 3);
        assert!(values[1].is_nan());
    }

    #[test]
    fn test_pass_through_keeps_removal() {
        let mut data = vec![1i32, 2, 3];
        let mut cursor = VecCursor::new(&mut data).non_null().unwrap();
        cursor.next().unwrap();
        cursor.remove().unwrap();
        drop(cursor);
        assert_eq!(data, vec![2, 3]);
    }

    #[test]
    fn test_non_null_sequence() {
        let data = vec![Some(1i64), None, Some(3)];
        let seq = (&data).non_null();
        assert_eq!(seq.collect_vec().unwrap(), vec![Some(1), Some(3)]);
    }
}
