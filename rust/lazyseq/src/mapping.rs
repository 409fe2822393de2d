//! Element-wise transformation.
//!
//! A mapping cursor has no buffering: [`Cursor::has_next`] asks the upstream
//! directly and every [`Cursor::next`] pulls exactly one upstream element.
//! Removal is forwarded to the upstream unchanged.

use lazyseq_common::Result;

use crate::{cursor::Cursor, sequence::Sequence};

/// Cursor applying `f` to every upstream element.
#[derive(Debug, Clone)]
pub struct Mapping<C, F> {
    inner: C,
    f: F,
}

impl<C, F> Mapping<C, F> {
    /// Creates a new `Mapping` cursor.
    ///
    /// # Arguments
    ///
    /// * `inner` - The upstream cursor.
    /// * `f` - Applied to each upstream element as it is pulled.
    pub fn new(inner: C, f: F) -> Self {
        Mapping { inner, f }
    }
}

impl<B, C, F> Cursor for Mapping<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<B> {
        self.inner.next().map(&mut self.f)
    }

    fn remove(&mut self) -> Result<()> {
        self.inner.remove()
    }
}

/// Cursor applying a fallible `f` to every upstream element.
///
/// An error returned by `f` is handed to the caller as-is. The failed
/// element is consumed; resuming the cursor afterwards continues with the
/// following upstream element.
#[derive(Debug, Clone)]
pub struct TryMapping<C, F> {
    inner: C,
    f: F,
}

impl<C, F> TryMapping<C, F> {
    /// Creates a new `TryMapping` cursor.
    ///
    /// # Arguments
    ///
    /// * `inner` - The upstream cursor.
    /// * `f` - Applied to each upstream element; its error ends that pull.
    pub fn new(inner: C, f: F) -> Self {
        TryMapping { inner, f }
    }
}

impl<B, C, F> Cursor for TryMapping<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> Result<B>,
{
    type Item = B;

    #[inline]
    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<B> {
        let item = self.inner.next()?;
        (self.f)(item)
    }

    fn remove(&mut self) -> Result<()> {
        self.inner.remove()
    }
}

#[derive(Debug, Clone)]
pub struct MappingSequence<S, F> {
    source: S,
    f: F,
}

impl<S, F> MappingSequence<S, F> {
    /// Every cursor receives its own clone of `f`.
    pub fn new(source: S, f: F) -> Self {
        MappingSequence { source, f }
    }
}

impl<B, S, F> Sequence for MappingSequence<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B + Clone,
{
    type Item = B;
    type Cursor = Mapping<S::Cursor, F>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(Mapping::new(self.source.cursor()?, self.f.clone()))
    }
}

#[derive(Debug, Clone)]
pub struct TryMappingSequence<S, F> {
    source: S,
    f: F,
}

impl<S, F> TryMappingSequence<S, F> {
    pub fn new(source: S, f: F) -> Self {
        TryMappingSequence { source, f }
    }
}

impl<B, S, F> Sequence for TryMappingSequence<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<B> + Clone,
{
    type Item = B;
    type Cursor = TryMapping<S::Cursor, F>;

    fn cursor(&self) -> Result<Self::Cursor> {
        Ok(TryMapping::new(self.source.cursor()?, self.f.clone()))
    }
}
