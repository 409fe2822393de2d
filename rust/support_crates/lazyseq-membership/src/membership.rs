use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use ahash::AHashSet;

/// A set-like structure supporting a combined "test and insert" operation.
pub trait Membership<T: ?Sized> {
    /// Records `value` and returns `true` if it was not present before.
    fn insert_new(&mut self, value: &T) -> bool;

    /// Number of distinct values recorded so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the backing structure, for diagnostics.
    fn strategy(&self) -> &'static str {
        "custom"
    }
}

impl<T, S> Membership<T> for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    #[inline]
    fn insert_new(&mut self, value: &T) -> bool {
        if self.contains(value) {
            false
        } else {
            self.insert(value.clone())
        }
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn strategy(&self) -> &'static str {
        "std hash set"
    }
}

impl<T: ?Sized, M: Membership<T> + ?Sized> Membership<T> for &mut M {
    #[inline]
    fn insert_new(&mut self, value: &T) -> bool {
        (**self).insert_new(value)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn strategy(&self) -> &'static str {
        (**self).strategy()
    }
}

/// Generic membership for any `Eq + Hash` element, backed by an `ahash` set.
///
/// Equality is whatever `T: Eq` says; for reference-like elements this is
/// value equality of the referent.
#[derive(Debug, Clone)]
pub struct HashMembership<T> {
    set: AHashSet<T>,
}

impl<T> HashMembership<T> {
    pub fn new() -> Self {
        HashMembership {
            set: AHashSet::new(),
        }
    }
}

impl<T> Default for HashMembership<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Membership<T> for HashMembership<T> {
    #[inline]
    fn insert_new(&mut self, value: &T) -> bool {
        if self.set.contains(value) {
            false
        } else {
            self.set.insert(value.clone())
        }
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn strategy(&self) -> &'static str {
        "ahash set"
    }
}
