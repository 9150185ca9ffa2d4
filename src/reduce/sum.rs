//! Power-sum reduction.

use super::config::ReducerConfig;
use super::error::ReduceError;
use super::pow::int_pow;

/// Compute `sum(n^exp for n in 0..len)`.
///
/// # Arguments
/// * `len` - Exclusive upper bound of the range; negative values follow
///   `config.negative_len`
/// * `exp` - Exponent applied to every index, must be non-negative
/// * `config` - Overflow and length policies
///
/// # Returns
/// The accumulated sum. `0^0` counts as 1, so `reduce_pow_sum(len, 0, _)`
/// is `len` for every `len >= 0`.
pub fn reduce_pow_sum(len: i64, exp: i64, config: &ReducerConfig) -> Result<i64, ReduceError> {
    let len = config.negative_len.resolve(len)?;
    let exp = u64::try_from(exp).map_err(|_| ReduceError::invalid("exp", exp))?;

    let mut acc: i64 = 0;
    for n in 0..len {
        let term = int_pow(n, exp, config.overflow, n)?;
        acc = config.overflow.add(acc, term, n)?;
    }

    Ok(acc)
}

/// Evaluate many `(len, exp)` pairs, one result per query.
pub fn reduce_pow_sum_batch(
    queries: &[(i64, i64)],
    config: &ReducerConfig,
) -> Vec<Result<i64, ReduceError>> {
    queries
        .iter()
        .map(|&(len, exp)| reduce_pow_sum(len, exp, config))
        .collect()
}
