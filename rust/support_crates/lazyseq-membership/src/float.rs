//! `f64` membership with an explicit equality convention.
//!
//! See [`FloatEquality`] for the treatment of `NaN` and signed zero.

use ahash::AHashSet;
use ordered_float::OrderedFloat;

use crate::{config::FloatEquality, membership::Membership};

/// Membership over `f64` values.
#[derive(Debug, Clone)]
pub enum DoubleMembership {
    /// Keyed by the canonicalized bit pattern.
    Bitwise(AHashSet<u64>),
    /// Keyed by the total-order wrapper.
    Numeric(AHashSet<OrderedFloat<f64>>),
}

impl DoubleMembership {
    pub fn new(equality: FloatEquality) -> Self {
        match equality {
            FloatEquality::Bitwise => DoubleMembership::Bitwise(AHashSet::new()),
            FloatEquality::Numeric => DoubleMembership::Numeric(AHashSet::new()),
        }
    }

    pub fn equality(&self) -> FloatEquality {
        match self {
            DoubleMembership::Bitwise(_) => FloatEquality::Bitwise,
            DoubleMembership::Numeric(_) => FloatEquality::Numeric,
        }
    }
}

impl Default for DoubleMembership {
    fn default() -> Self {
        Self::new(FloatEquality::default())
    }
}

/// Bit pattern of `value`, with every NaN mapped to the canonical quiet NaN.
#[inline]
pub fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl Membership<f64> for DoubleMembership {
    #[inline]
    fn insert_new(&mut self, value: &f64) -> bool {
        match self {
            DoubleMembership::Bitwise(set) => set.insert(canonical_bits(*value)),
            DoubleMembership::Numeric(set) => set.insert(OrderedFloat(*value)),
        }
    }

    fn len(&self) -> usize {
        match self {
            DoubleMembership::Bitwise(set) => set.len(),
            DoubleMembership::Numeric(set) => set.len(),
        }
    }

    fn strategy(&self) -> &'static str {
        match self {
            DoubleMembership::Bitwise(_) => "bitwise",
            DoubleMembership::Numeric(_) => "numeric",
        }
    }
}
