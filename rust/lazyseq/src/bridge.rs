//! Cursors over std iterators and vectors.

use lazyseq_common::{Result, error::Error};

use crate::cursor::Cursor;

/// Cursor over a std [`Iterator`].
///
/// The iterator is kept one element ahead so that [`Cursor::has_next`] can
/// answer without pulling.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    iter: I,
    peeked: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Creates a new `IterCursor`, pulling the first element right away.
    ///
    /// # Arguments
    ///
    /// * `source` - Anything convertible into the underlying iterator.
    pub fn new<T>(source: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        let mut iter = source.into_iter();
        let peeked = iter.next();
        IterCursor { iter, peeked }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn has_next(&self) -> bool {
        self.peeked.is_some()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item> {
        match self.peeked.take() {
            Some(current) => {
                self.peeked = self.iter.next();
                Ok(current)
            }
            None => Err(Error::exhausted(std::any::type_name::<Self>())),
        }
    }
}

/// Cursor over a borrowed vector that supports removing the element it
/// returned last.
#[derive(Debug)]
pub struct VecCursor<'a, T> {
    items: &'a mut Vec<T>,
    position: usize,
    removable: bool,
}

impl<'a, T> VecCursor<'a, T> {
    /// Creates a cursor positioned before the first element of `items`.
    pub fn new(items: &'a mut Vec<T>) -> Self {
        VecCursor {
            items,
            position: 0,
            removable: false,
        }
    }
}

impl<T: Clone> Cursor for VecCursor<'_, T> {
    type Item = T;

    #[inline]
    fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    fn next(&mut self) -> Result<T> {
        let item = self
            .items
            .get(self.position)
            .cloned()
            .ok_or_else(|| Error::exhausted(std::any::type_name::<Self>()))?;
        self.position += 1;
        self.removable = true;
        Ok(item)
    }

    fn remove(&mut self) -> Result<()> {
        if !self.removable {
            return Err(Error::illegal_state(
                "remove requires a preceding call to next",
            ));
        }
        self.removable = false;
        self.position -= 1;
        self.items.remove(self.position);
        Ok(())
    }
}
