//! Two-argument integer addition.

use super::error::ReduceError;
use super::policy::OverflowPolicy;

/// Add two integers under `policy`.
#[inline]
pub fn add(i: i64, j: i64, policy: OverflowPolicy) -> Result<i64, ReduceError> {
    policy
        .add(i, j, 0)
        .map_err(|_| ReduceError::AddOverflow { lhs: i, rhs: j })
}
