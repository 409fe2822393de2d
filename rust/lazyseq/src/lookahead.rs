//! One-element lookahead shared by every filtering cursor.
//!
//! The state machine is driven by [`Lookahead::seek`] and
//! [`Lookahead::advance`]:
//!
//! ```text
//!   Seeking --seek--> Buffered(v) --take--> Seeking --advance--> ...
//!      \                                       \
//!       +--------------> Exhausted <-------+    +--> Failed(e) --take--+
//!                                          |                           |
//!                                          +---------------------------+
//! ```
//!
//! `Exhausted` is terminal. A failure while looking ahead for the element
//! after a returned one is parked in `Failed` and raised by the following
//! `take`, so an accepted element is never lost to a later upstream error.

use lazyseq_common::{Result, error::Error};

use crate::{cursor::Cursor, filtering::Predicate};

#[derive(Debug)]
pub(crate) enum Lookahead<T> {
    Seeking,
    Buffered(T),
    Failed(Error),
    Exhausted,
}

impl<T> Lookahead<T> {
    /// Whether the next `take` yields an element or an error.
    #[inline]
    pub fn has_pending(&self) -> bool {
        matches!(self, Lookahead::Buffered(_) | Lookahead::Failed(_))
    }

    /// Pulls from `upstream` until `predicate` accepts an element or the
    /// upstream runs dry.
    ///
    /// On failure the state is left `Seeking`.
    pub fn seek<C, P>(&mut self, upstream: &mut C, predicate: &mut P) -> Result<()>
    where
        C: Cursor<Item = T>,
        P: Predicate<T>,
    {
        *self = Lookahead::Seeking;
        while upstream.has_next() {
            let candidate = upstream.next()?;
            if predicate.test(&candidate) {
                *self = Lookahead::Buffered(candidate);
                return Ok(());
            }
        }
        log::trace!("lookahead upstream exhausted");
        *self = Lookahead::Exhausted;
        Ok(())
    }

    /// Like [`Lookahead::seek`], parking a failure in `Failed` instead of
    /// returning it.
    pub fn advance<C, P>(&mut self, upstream: &mut C, predicate: &mut P)
    where
        C: Cursor<Item = T>,
        P: Predicate<T>,
    {
        if let Err(err) = self.seek(upstream, predicate) {
            log::trace!("lookahead failed, deferring: {err}");
            *self = Lookahead::Failed(err);
        }
    }

    /// Takes the buffered element, leaving the state `Seeking`.
    ///
    /// A parked failure is returned as the error and the state becomes
    /// `Exhausted`. Returns `Ok(None)` without changing state if nothing is
    /// pending.
    #[inline]
    pub fn take(&mut self) -> Result<Option<T>> {
        match std::mem::replace(self, Lookahead::Seeking) {
            Lookahead::Buffered(value) => Ok(Some(value)),
            Lookahead::Failed(err) => {
                *self = Lookahead::Exhausted;
                Err(err)
            }
            other => {
                *self = other;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bridge::IterCursor, cursor::CursorExt};

    #[test]
    fn test_seek_and_take() {
        let mut upstream = IterCursor::new([1, 2, 3, 4]);
        let mut even = |x: &i32| x % 2 == 0;
        let mut la = Lookahead::Seeking;

        la.seek(&mut upstream, &mut even).unwrap();
        assert!(la.has_pending());
        assert_eq!(la.take().unwrap(), Some(2));
        assert!(matches!(la, Lookahead::Seeking));

        la.seek(&mut upstream, &mut even).unwrap();
        assert_eq!(la.take().unwrap(), Some(4));

        la.seek(&mut upstream, &mut even).unwrap();
        assert!(matches!(la, Lookahead::Exhausted));
        assert_eq!(la.take().unwrap(), None);
        assert!(matches!(la, Lookahead::Exhausted));
    }

    #[test]
    fn test_advance_parks_failure() {
        let mut upstream = IterCursor::new([1, 2]).try_map(|x: i32| -> Result<i32> {
            Err(Error::callback(format!("item {x}"), std::io::Error::other("bad")))
        });
        let mut any = |_: &i32| true;
        let mut la = Lookahead::Seeking;

        la.advance(&mut upstream, &mut any);
        assert!(matches!(la, Lookahead::Failed(_)));
        assert!(la.has_pending());
        assert!(la.take().is_err());
        assert!(matches!(la, Lookahead::Exhausted));
        assert!(!la.has_pending());
        assert_eq!(la.take().unwrap(), None);
    }
}
