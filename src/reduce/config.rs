//! Reducer configuration.

use super::policy::{LengthPolicy, OverflowPolicy};

/// Configuration shared by every reduction and exported call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReducerConfig {
    /// Overflow behaviour for powers and the accumulator.
    pub overflow: OverflowPolicy,
    /// Meaning of a negative iteration count.
    pub negative_len: LengthPolicy,
}

impl ReducerConfig {
    pub fn new(overflow: OverflowPolicy, negative_len: LengthPolicy) -> Self {
        Self {
            overflow,
            negative_len,
        }
    }

    /// The unvalidated, wraparound behaviour of a plain machine-integer loop.
    pub fn wrapping() -> Self {
        Self::new(OverflowPolicy::Wrapping, LengthPolicy::Empty)
    }

    /// Reject negative lengths and fail on overflow.
    pub fn strict() -> Self {
        Self::new(OverflowPolicy::Checked, LengthPolicy::Reject)
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_negative_len(mut self, negative_len: LengthPolicy) -> Self {
        self.negative_len = negative_len;
        self
    }
}
