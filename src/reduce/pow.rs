//! Exact integer exponentiation.

use super::error::ReduceError;
use super::policy::OverflowPolicy;

/// Raise `base` to `exp` by repeated squaring.
///
/// `0^0` is 1. The base is only squared while exponent bits remain, so under
/// [`OverflowPolicy::Checked`] an error means the true result does not fit
/// in `i64`. `index` is the loop index reported on overflow.
pub fn int_pow(
    base: i64,
    exp: u64,
    policy: OverflowPolicy,
    index: i64,
) -> Result<i64, ReduceError> {
    match base {
        0 => return Ok(if exp == 0 { 1 } else { 0 }),
        1 => return Ok(1),
        -1 => return Ok(if exp % 2 == 0 { 1 } else { -1 }),
        _ => {}
    }

    let mut acc: i64 = 1;
    let mut base = base;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = policy.mul(acc, base, index)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = policy.mul(base, base, index)?;
        }
    }

    Ok(acc)
}
