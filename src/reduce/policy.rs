//! Policies for out-of-range inputs and integer overflow.

use super::error::ReduceError;

/// How arithmetic behaves when a value leaves the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Two's complement wraparound.
    Wrapping,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturating,
    /// Fail with [`ReduceError::Overflow`].
    #[default]
    Checked,
}

impl OverflowPolicy {
    /// Multiply under this policy. `index` is reported on overflow.
    #[inline]
    pub fn mul(self, a: i64, b: i64, index: i64) -> Result<i64, ReduceError> {
        match self {
            OverflowPolicy::Wrapping => Ok(a.wrapping_mul(b)),
            OverflowPolicy::Saturating => Ok(a.saturating_mul(b)),
            OverflowPolicy::Checked => a.checked_mul(b).ok_or(ReduceError::Overflow { index }),
        }
    }

    /// Add under this policy. `index` is reported on overflow.
    #[inline]
    pub fn add(self, a: i64, b: i64, index: i64) -> Result<i64, ReduceError> {
        match self {
            OverflowPolicy::Wrapping => Ok(a.wrapping_add(b)),
            OverflowPolicy::Saturating => Ok(a.saturating_add(b)),
            OverflowPolicy::Checked => a.checked_add(b).ok_or(ReduceError::Overflow { index }),
        }
    }

    /// Stable code used across the C ABI.
    pub fn code(self) -> u32 {
        match self {
            OverflowPolicy::Wrapping => 0,
            OverflowPolicy::Saturating => 1,
            OverflowPolicy::Checked => 2,
        }
    }
}

impl TryFrom<u32> for OverflowPolicy {
    type Error = ReduceError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OverflowPolicy::Wrapping),
            1 => Ok(OverflowPolicy::Saturating),
            2 => Ok(OverflowPolicy::Checked),
            _ => Err(ReduceError::InvalidConfig {
                field: "overflow",
                code,
            }),
        }
    }
}

/// What a negative iteration count means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// The range is empty and the sum is zero.
    #[default]
    Empty,
    /// Fail with [`ReduceError::InvalidArgument`].
    Reject,
}

impl LengthPolicy {
    /// Resolve `len` into an iteration count.
    pub fn resolve(self, len: i64) -> Result<i64, ReduceError> {
        match self {
            _ if len >= 0 => Ok(len),
            LengthPolicy::Empty => Ok(0),
            LengthPolicy::Reject => Err(ReduceError::invalid("len", len)),
        }
    }

    /// Stable code used across the C ABI.
    pub fn code(self) -> u32 {
        match self {
            LengthPolicy::Empty => 0,
            LengthPolicy::Reject => 1,
        }
    }
}

impl TryFrom<u32> for LengthPolicy {
    type Error = ReduceError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(LengthPolicy::Empty),
            1 => Ok(LengthPolicy::Reject),
            _ => Err(ReduceError::InvalidConfig {
                field: "negative_len",
                code,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_policies() {
        assert_eq!(OverflowPolicy::Wrapping.add(i64::MAX, 1, 0), Ok(i64::MIN));
        assert_eq!(OverflowPolicy::Saturating.add(i64::MAX, 1, 0), Ok(i64::MAX));
        assert_eq!(
            OverflowPolicy::Checked.add(i64::MAX, 1, 4),
            Err(ReduceError::Overflow { index: 4 })
        );
        assert_eq!(OverflowPolicy::Saturating.mul(i64::MAX, 2, 0), Ok(i64::MAX));
        assert_eq!(OverflowPolicy::Checked.mul(6, 7, 0), Ok(42));
    }

    #[test]
    fn test_length_policy() {
        assert_eq!(LengthPolicy::Empty.resolve(-5), Ok(0));
        assert_eq!(LengthPolicy::Empty.resolve(3), Ok(3));
        assert_eq!(LengthPolicy::Reject.resolve(0), Ok(0));
        assert_eq!(
            LengthPolicy::Reject.resolve(-5),
            Err(ReduceError::invalid("len", -5))
        );
    }

    #[test]
    fn test_codes() {
        for policy in [
            OverflowPolicy::Wrapping,
            OverflowPolicy::Saturating,
            OverflowPolicy::Checked,
        ] {
            assert_eq!(OverflowPolicy::try_from(policy.code()), Ok(policy));
        }
        assert!(matches!(
            OverflowPolicy::try_from(9),
            Err(ReduceError::InvalidConfig { field: "overflow", code: 9 })
        ));
        assert!(LengthPolicy::try_from(2).is_err());
    }
}
