//! Tables of power sums over a grid of lengths and exponents.

use ndarray::Array2;

use super::config::ReducerConfig;
use super::error::ReduceError;
use super::pow::int_pow;

/// Build a `(max_len + 1) x (max_exp + 1)` table with
/// `table[[len, exp]] == reduce_pow_sum(len, exp)`.
///
/// Rows are accumulated incrementally: row `len + 1` is row `len` plus
/// `len^exp`, so the whole table costs one power per cell.
pub fn pow_sum_table(
    max_len: i64,
    max_exp: i64,
    config: &ReducerConfig,
) -> Result<Array2<i64>, ReduceError> {
    let rows = dimension("max_len", max_len)?;
    let cols = dimension("max_exp", max_exp)?;
    let cells = rows
        .checked_mul(cols)
        .filter(|&cells| {
            cells
                .checked_mul(std::mem::size_of::<i64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(ReduceError::invalid("max_len", max_len))?;

    let mut storage = Vec::new();
    storage
        .try_reserve_exact(cells)
        .map_err(|_| ReduceError::invalid("max_len", max_len))?;
    storage.resize(cells, 0i64);
    let mut table = Array2::from_shape_vec((rows, cols), storage)
        .map_err(|_| ReduceError::invalid("max_len", max_len))?;
    for len in 1..rows {
        let n = (len - 1) as i64;
        for exp in 0..cols {
            let term = int_pow(n, exp as u64, config.overflow, n)?;
            let prev = table[[len - 1, exp]];
            table[[len, exp]] = config.overflow.add(prev, term, n)?;
        }
    }

    Ok(table)
}

fn dimension(name: &'static str, bound: i64) -> Result<usize, ReduceError> {
    if bound < 0 {
        return Err(ReduceError::invalid(name, bound));
    }
    usize::try_from(bound)
        .ok()
        .and_then(|b| b.checked_add(1))
        .ok_or(ReduceError::invalid(name, bound))
}
