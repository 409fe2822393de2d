//! Options controlling which membership structure backs a dedupe cursor.

/// Backing structure for integer membership.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IntSetKind {
    /// Hash set keyed by the integer value.
    #[default]
    Hashed,
    /// Compressed bitmap. Pays off when the values are dense, e.g. state
    /// indices drawn from a contiguous range.
    Bitmap,
}

/// Equality convention for `f64` membership.
///
/// | values            | `Bitwise`  | `Numeric` |
/// |-------------------|------------|-----------|
/// | `NaN` vs `NaN`    | equal      | equal     |
/// | `0.0` vs `-0.0`   | distinct   | equal     |
/// | `1.0` vs `1.0`    | equal      | equal     |
///
/// `Bitwise` compares the IEEE-754 bit patterns after collapsing every NaN
/// payload to the canonical quiet NaN.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FloatEquality {
    #[default]
    Bitwise,
    Numeric,
}

/// Dedupe configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupeOptions {
    pub int_set: IntSetKind,
    pub float_equality: FloatEquality,
}

impl DedupeOptions {
    pub fn with_int_set(mut self, int_set: IntSetKind) -> Self {
        self.int_set = int_set;
        self
    }

    pub fn with_float_equality(mut self, float_equality: FloatEquality) -> Self {
        self.float_equality = float_equality;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DedupeOptions::default();
        assert_eq!(opts.int_set, IntSetKind::Hashed);
        assert_eq!(opts.float_equality, FloatEquality::Bitwise);

        let opts = opts
            .with_int_set(IntSetKind::Bitmap)
            .with_float_equality(FloatEquality::Numeric);
        assert_eq!(opts.int_set, IntSetKind::Bitmap);
        assert_eq!(opts.float_equality, FloatEquality::Numeric);
    }
}
