//! Integer membership structures.
//!
//! Both types come in two flavors selected by [`IntSetKind`]: a hash set for
//! sparse or unknown value distributions, and a compressed bitmap for dense
//! ones. Signed values are mapped onto the unsigned bitmap domain by a plain
//! bit cast, which is a bijection and therefore preserves equality.

use ahash::AHashSet;
use roaring::{RoaringBitmap, RoaringTreemap};

use crate::{config::IntSetKind, membership::Membership};

/// Membership over `i32` values.
#[derive(Debug, Clone)]
pub enum IntMembership {
    Hashed(AHashSet<i32>),
    Bitmap(RoaringBitmap),
}

impl IntMembership {
    pub fn new(kind: IntSetKind) -> Self {
        match kind {
            IntSetKind::Hashed => IntMembership::Hashed(AHashSet::new()),
            IntSetKind::Bitmap => IntMembership::Bitmap(RoaringBitmap::new()),
        }
    }

    pub fn kind(&self) -> IntSetKind {
        match self {
            IntMembership::Hashed(_) => IntSetKind::Hashed,
            IntMembership::Bitmap(_) => IntSetKind::Bitmap,
        }
    }
}

impl Default for IntMembership {
    fn default() -> Self {
        Self::new(IntSetKind::default())
    }
}

impl Membership<i32> for IntMembership {
    #[inline]
    fn insert_new(&mut self, value: &i32) -> bool {
        match self {
            IntMembership::Hashed(set) => set.insert(*value),
            IntMembership::Bitmap(bitmap) => bitmap.insert(*value as u32),
        }
    }

    fn len(&self) -> usize {
        match self {
            IntMembership::Hashed(set) => set.len(),
            IntMembership::Bitmap(bitmap) => bitmap.len() as usize,
        }
    }

    fn strategy(&self) -> &'static str {
        match self {
            IntMembership::Hashed(_) => "hashed",
            IntMembership::Bitmap(_) => "roaring bitmap",
        }
    }
}

/// Membership over `i64` values.
#[derive(Debug, Clone)]
pub enum LongMembership {
    Hashed(AHashSet<i64>),
    Bitmap(RoaringTreemap),
}

impl LongMembership {
    pub fn new(kind: IntSetKind) -> Self {
        match kind {
            IntSetKind::Hashed => LongMembership::Hashed(AHashSet::new()),
            IntSetKind::Bitmap => LongMembership::Bitmap(RoaringTreemap::new()),
        }
    }

    pub fn kind(&self) -> IntSetKind {
        match self {
            LongMembership::Hashed(_) => IntSetKind::Hashed,
            LongMembership::Bitmap(_) => IntSetKind::Bitmap,
        }
    }
}

impl Default for LongMembership {
    fn default() -> Self {
        Self::new(IntSetKind::default())
    }
}

impl Membership<i64> for LongMembership {
    #[inline]
    fn insert_new(&mut self, value: &i64) -> bool {
        match self {
            LongMembership::Hashed(set) => set.insert(*value),
            LongMembership::Bitmap(bitmap) => bitmap.insert(*value as u64),
        }
    }

    fn len(&self) -> usize {
        match self {
            LongMembership::Hashed(set) => set.len(),
            LongMembership::Bitmap(bitmap) => bitmap.len() as usize,
        }
    }

    fn strategy(&self) -> &'static str {
        match self {
            LongMembership::Hashed(_) => "hashed",
            LongMembership::Bitmap(_) => "roaring treemap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_int(kind: IntSetKind) {
        let mut m = IntMembership::new(kind);
        assert_eq!(m.kind(), kind);
        assert!(m.insert_new(&-1));
        assert!(m.insert_new(&i32::MAX));
        assert!(m.insert_new(&i32::MIN));
        assert!(m.insert_new(&0));
        assert!(!m.insert_new(&-1));
        assert!(!m.insert_new(&i32::MIN));
        assert_eq!(m.len(), 4);
    }

    fn check_long(kind: IntSetKind) {
        let mut m = LongMembership::new(kind);
        assert_eq!(m.kind(), kind);
        assert!(m.insert_new(&-1));
        assert!(m.insert_new(&i64::MAX));
        assert!(m.insert_new(&i64::MIN));
        assert!(!m.insert_new(&i64::MAX));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_int_membership() {
        check_int(IntSetKind::Hashed);
        check_int(IntSetKind::Bitmap);
    }

    #[test]
    fn test_long_membership() {
        check_long(IntSetKind::Hashed);
        check_long(IntSetKind::Bitmap);
    }

    #[test]
    fn test_strategy_names_backing_structure() {
        assert_eq!(IntMembership::new(IntSetKind::Hashed).strategy(), "hashed");
        assert_eq!(IntMembership::new(IntSetKind::Bitmap).strategy(), "roaring bitmap");
        assert_eq!(LongMembership::new(IntSetKind::Bitmap).strategy(), "roaring treemap");
    }

    #[test]
    fn test_hashed_and_bitmap_agree() {
        fastrand::seed(8675309);
        let mut hashed = IntMembership::new(IntSetKind::Hashed);
        let mut bitmap = IntMembership::new(IntSetKind::Bitmap);
        for _ in 0..10_000 {
            let v = fastrand::i32(-500..500);
            assert_eq!(hashed.insert_new(&v), bitmap.insert_new(&v), "value {v}");
        }
        assert_eq!(hashed.len(), bitmap.len());
    }
}
