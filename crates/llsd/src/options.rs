//! Parse-time configuration shared by both codecs.

/// What to do with an integral JSON number outside the `i32` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegerOverflow {
    /// Fail the parse with [`JsonError::IntegerOverflow`](crate::JsonError::IntegerOverflow).
    #[default]
    Error,
    /// Clamp to `i32::MIN` / `i32::MAX`.
    Saturate,
    /// Keep the low 32 bits (two's complement truncation).
    Wrap,
}

impl IntegerOverflow {
    /// Narrows `n` under this policy; `None` means the parse must fail.
    pub fn narrow(self, n: i128) -> Option<i32> {
        if let Ok(i) = i32::try_from(n) {
            return Some(i);
        }
        match self {
            IntegerOverflow::Error => None,
            IntegerOverflow::Saturate => Some(if n < 0 { i32::MIN } else { i32::MAX }),
            IntegerOverflow::Wrap => Some(n as i32),
        }
    }

    /// Narrows a decimal literal of any length, given its sign and ASCII
    /// digits.
    pub fn narrow_decimal(self, negative: bool, digits: &str) -> Option<i32> {
        if let Ok(n) = digits.parse::<i128>() {
            return self.narrow(if negative { -n } else { n });
        }
        match self {
            IntegerOverflow::Error => None,
            IntegerOverflow::Saturate => Some(if negative { i32::MIN } else { i32::MAX }),
            IntegerOverflow::Wrap => {
                // Reduction mod 2^32 commutes with the digit fold.
                let low = digits.bytes().fold(0u32, |acc, b| {
                    acc.wrapping_mul(10).wrapping_add(u32::from(b - b'0'))
                });
                let low = if negative { low.wrapping_neg() } else { low };
                Some(low as i32)
            }
        }
    }
}

/// Options accepted by the `*_with_options` parse entry points.
///
/// The default matches the reference behaviour: container nesting is not
/// limited and out-of-range JSON integers are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum container nesting. `Some(0)` rejects any array or map;
    /// `None` leaves recursion bounded only by the call stack.
    pub max_depth: Option<usize>,
    /// Policy for integral JSON literals that do not fit in `i32`. The
    /// binary codec never sees such values.
    pub integer_overflow: IntegerOverflow,
}

impl ParseOptions {
    /// Caps container nesting at `max_depth` levels.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the policy for out-of-range JSON integers.
    pub fn with_integer_overflow(mut self, policy: IntegerOverflow) -> Self {
        self.integer_overflow = policy;
        self
    }

    /// Whether a container opened at nesting level `depth` (1-based) is allowed.
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |limit| depth <= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_pass_every_policy() {
        for policy in [
            IntegerOverflow::Error,
            IntegerOverflow::Saturate,
            IntegerOverflow::Wrap,
        ] {
            assert_eq!(policy.narrow(-5), Some(-5));
            assert_eq!(policy.narrow(i32::MAX as i128), Some(i32::MAX));
            assert_eq!(policy.narrow(i32::MIN as i128), Some(i32::MIN));
        }
    }

    #[test]
    fn overflow_policies() {
        let big = (1i128 << 32) | 7;
        assert_eq!(IntegerOverflow::Error.narrow(big), None);
        assert_eq!(IntegerOverflow::Saturate.narrow(big), Some(i32::MAX));
        assert_eq!(IntegerOverflow::Saturate.narrow(-big), Some(i32::MIN));
        assert_eq!(IntegerOverflow::Wrap.narrow(big), Some(7));
        assert_eq!(IntegerOverflow::Wrap.narrow(2_147_483_648), Some(i32::MIN));
    }

    #[test]
    fn decimal_literals_beyond_i128() {
        // 2^64 and 10^40 + 5.
        let two_pow_64 = "18446744073709551616";
        let huge = format!("1{}5", "0".repeat(39));
        assert_eq!(IntegerOverflow::Error.narrow_decimal(false, two_pow_64), None);
        assert_eq!(IntegerOverflow::Error.narrow_decimal(false, &huge), None);
        assert_eq!(
            IntegerOverflow::Saturate.narrow_decimal(true, &huge),
            Some(i32::MIN)
        );
        assert_eq!(IntegerOverflow::Wrap.narrow_decimal(false, two_pow_64), Some(0));
        // 10^40 = 2^40 * 5^40, so it is 0 mod 2^32.
        assert_eq!(IntegerOverflow::Wrap.narrow_decimal(false, &huge), Some(5));
        assert_eq!(IntegerOverflow::Wrap.narrow_decimal(true, &huge), Some(-5));
        assert_eq!(IntegerOverflow::Error.narrow_decimal(true, "12"), Some(-12));
    }

    #[test]
    fn depth_limit() {
        let unbounded = ParseOptions::default();
        assert!(unbounded.allows_depth(100_000));

        let limited = ParseOptions::default().with_max_depth(2);
        assert!(limited.allows_depth(2));
        assert!(!limited.allows_depth(3));
    }
}
