//! FFI functions for the reductions.

use super::types::{read_config, CReducerConfig, PowsumStatus};
use crate::reduce::{pow_sum_table, reduce_pow_sum, reduce_pow_sum_batch};
use libc::c_int;
use tracing::debug;

/// Add two C ints with wraparound.
#[no_mangle]
pub extern "C" fn powsum_add(i: c_int, j: c_int) -> c_int {
    i.wrapping_add(j)
}

/// Compute `sum(n^exp for n in 0..len)`.
///
/// # Safety
/// `out_value` must be a valid pointer. `config` may be null for defaults.
#[no_mangle]
pub unsafe extern "C" fn powsum_reduce_pow_sum(
    len: i64,
    exp: i64,
    config: *const CReducerConfig,
    out_value: *mut i64,
) -> PowsumStatus {
    if out_value.is_null() {
        return PowsumStatus::NullPointer;
    }

    let cfg = match read_config(config) {
        Ok(cfg) => cfg,
        Err(status) => return status,
    };

    debug!(target: "powsum::ffi", len, exp, ?cfg, "reduce_pow_sum");
    match reduce_pow_sum(len, exp, &cfg) {
        Ok(value) => {
            *out_value = value;
            PowsumStatus::Ok
        }
        Err(e) => PowsumStatus::from(&e),
    }
}

/// Evaluate `count` queries `(lens[i], exps[i])`.
///
/// Every query writes its own status; `out_values[i]` is written only when
/// `out_status[i]` is `Ok`. The return value is `Ok` when the call itself
/// was well-formed, even if individual queries failed.
///
/// # Safety
/// All arrays must be valid for `count` elements.
#[no_mangle]
pub unsafe extern "C" fn powsum_reduce_batch(
    lens: *const i64,
    exps: *const i64,
    count: usize,
    config: *const CReducerConfig,
    out_values: *mut i64,
    out_status: *mut PowsumStatus,
) -> PowsumStatus {
    if count == 0 {
        return PowsumStatus::Ok;
    }
    if lens.is_null() || exps.is_null() || out_values.is_null() || out_status.is_null() {
        return PowsumStatus::NullPointer;
    }

    let cfg = match read_config(config) {
        Ok(cfg) => cfg,
        Err(status) => return status,
    };

    let lens = std::slice::from_raw_parts(lens, count);
    let exps = std::slice::from_raw_parts(exps, count);
    let queries: Vec<(i64, i64)> = lens.iter().copied().zip(exps.iter().copied()).collect();

    debug!(target: "powsum::ffi", count, ?cfg, "reduce_batch");
    for (i, result) in reduce_pow_sum_batch(&queries, &cfg).into_iter().enumerate() {
        match result {
            Ok(value) => {
                *out_values.add(i) = value;
                *out_status.add(i) = PowsumStatus::Ok;
            }
            Err(e) => *out_status.add(i) = PowsumStatus::from(&e),
        }
    }

    PowsumStatus::Ok
}

/// Fill `out` with the row-major `(max_len + 1) x (max_exp + 1)` table of
/// power sums.
///
/// The shape is always written to `out_rows` / `out_cols` once the bounds
/// are valid, so a caller can size the buffer from a `BufferTooSmall` reply.
/// Passing a null `out` with `out_len == 0` queries the shape only.
///
/// # Safety
/// `out` must be valid for `out_len` elements (or null when `out_len` is 0);
/// `out_rows` and `out_cols` must be valid pointers.
#[no_mangle]
pub unsafe extern "C" fn powsum_pow_sum_table(
    max_len: i64,
    max_exp: i64,
    config: *const CReducerConfig,
    out: *mut i64,
    out_len: usize,
    out_rows: *mut usize,
    out_cols: *mut usize,
) -> PowsumStatus {
    if (out.is_null() && out_len > 0) || out_rows.is_null() || out_cols.is_null() {
        return PowsumStatus::NullPointer;
    }
    if max_len < 0 || max_exp < 0 {
        return PowsumStatus::InvalidArgument;
    }

    let cfg = match read_config(config) {
        Ok(cfg) => cfg,
        Err(status) => return status,
    };

    let (rows, cols) = match (usize::try_from(max_len), usize::try_from(max_exp)) {
        (Ok(l), Ok(e)) if l < usize::MAX && e < usize::MAX => (l + 1, e + 1),
        _ => return PowsumStatus::InvalidArgument,
    };
    *out_rows = rows;
    *out_cols = cols;

    match rows.checked_mul(cols) {
        Some(needed) if needed <= out_len => {}
        Some(_) => return PowsumStatus::BufferTooSmall,
        None => return PowsumStatus::InvalidArgument,
    }

    debug!(target: "powsum::ffi", max_len, max_exp, ?cfg, "pow_sum_table");
    match pow_sum_table(max_len, max_exp, &cfg) {
        Ok(table) => {
            for (i, value) in table.iter().enumerate() {
                *out.add(i) = *value;
            }
            PowsumStatus::Ok
        }
        Err(e) => PowsumStatus::from(&e),
    }
}
