//! Exercises the C ABI the way a cffi host would.

use powsum::{
    powsum_add, powsum_call, powsum_function_arity, powsum_function_count,
    powsum_function_doc_buf, powsum_function_name_buf, powsum_pow_sum_table,
    powsum_reduce_batch, powsum_reduce_pow_sum, CReducerConfig, PowsumStatus,
};
use std::ffi::{c_char, CStr};
use std::ptr;

fn wrapping() -> CReducerConfig {
    CReducerConfig {
        overflow: 0,
        negative_len: 0,
    }
}

fn strict() -> CReducerConfig {
    CReducerConfig {
        overflow: 2,
        negative_len: 1,
    }
}

fn name_at(index: usize) -> String {
    let mut buf = [0 as c_char; 64];
    let mut len = 0usize;
    let status = unsafe { powsum_function_name_buf(index, buf.as_mut_ptr(), buf.len(), &mut len) };
    assert_eq!(status, PowsumStatus::Ok);
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_add_keeps_c_int_contract() {
    assert_eq!(powsum_add(2, 40), 42);
    assert_eq!(powsum_add(-5, 5), 0);
}

#[test]
fn test_reduce_policies() {
    let mut out = -1i64;

    let status = unsafe { powsum_reduce_pow_sum(-5, 3, ptr::null(), &mut out) };
    assert_eq!(status, PowsumStatus::Ok);
    assert_eq!(out, 0);

    let cfg = strict();
    out = -1;
    let status = unsafe { powsum_reduce_pow_sum(-5, 3, &cfg, &mut out) };
    assert_eq!(status, PowsumStatus::InvalidArgument);
    assert_eq!(out, -1);

    let status = unsafe { powsum_reduce_pow_sum(100, 20, &cfg, &mut out) };
    assert_eq!(status, PowsumStatus::Overflow);

    let cfg = wrapping();
    let status = unsafe { powsum_reduce_pow_sum(100, 20, &cfg, &mut out) };
    assert_eq!(status, PowsumStatus::Ok);
    let exact: i128 = (0..100i128).map(|n| n.pow(20)).sum();
    assert_eq!(out, exact as u64 as i64);
}

#[test]
fn test_reduce_invalid_config() {
    let cfg = CReducerConfig {
        overflow: 3,
        negative_len: 0,
    };
    let mut out = 0i64;
    let status = unsafe { powsum_reduce_pow_sum(3, 2, &cfg, &mut out) };
    assert_eq!(status, PowsumStatus::InvalidConfig);
}

#[test]
fn test_batch() {
    let lens = [10i64, 50, 4, 67];
    let exps = [0i64, 5, -1, 10];
    let mut values = [0i64; 4];
    let mut status = [PowsumStatus::Ok; 4];

    let rc = unsafe {
        powsum_reduce_batch(
            lens.as_ptr(),
            exps.as_ptr(),
            lens.len(),
            ptr::null(),
            values.as_mut_ptr(),
            status.as_mut_ptr(),
        )
    };

    assert_eq!(rc, PowsumStatus::Ok);
    assert_eq!(
        status,
        [
            PowsumStatus::Ok,
            PowsumStatus::Ok,
            PowsumStatus::InvalidArgument,
            PowsumStatus::Overflow
        ]
    );
    assert_eq!(values[0], 10);
    assert_eq!(values[1], 2_450_520_625);
}

#[test]
fn test_batch_null_arrays() {
    let rc = unsafe {
        powsum_reduce_batch(
            ptr::null(),
            ptr::null(),
            3,
            ptr::null(),
            ptr::null_mut(),
            ptr::null_mut(),
        )
    };
    assert_eq!(rc, PowsumStatus::NullPointer);
}

#[test]
fn test_table_row_major() {
    let mut buf = vec![0i64; 5 * 4];
    let (mut rows, mut cols) = (0usize, 0usize);

    let status = unsafe {
        powsum_pow_sum_table(
            4,
            3,
            ptr::null(),
            buf.as_mut_ptr(),
            buf.len(),
            &mut rows,
            &mut cols,
        )
    };

    assert_eq!(status, PowsumStatus::Ok);
    assert_eq!((rows, cols), (5, 4));
    // Row for len = 4: 0^e + 1^e + 2^e + 3^e
    assert_eq!(&buf[16..20], &[4, 6, 14, 36]);
    assert_eq!(&buf[0..4], &[0, 0, 0, 0]);
}

#[test]
fn test_export_table_introspection() {
    let count = powsum_function_count();
    assert_eq!(count, 2);

    let names: Vec<String> = (0..count).map(name_at).collect();
    assert_eq!(names, vec!["add", "reduce_pow_sum"]);
    assert_eq!(powsum_function_arity(0), 2);
    assert_eq!(powsum_function_arity(count), -1);

    let mut buf = [0 as c_char; 64];
    let mut len = 0usize;
    let status = unsafe { powsum_function_doc_buf(0, buf.as_mut_ptr(), buf.len(), &mut len) };
    assert_eq!(status, PowsumStatus::Ok);
    let doc = unsafe { CStr::from_ptr(buf.as_ptr()) };
    assert_eq!(doc.to_str().unwrap(), "A function that adds two numbers");

    let status = unsafe { powsum_function_name_buf(count, buf.as_mut_ptr(), buf.len(), &mut len) };
    assert_eq!(status, PowsumStatus::NotFound);
}

#[test]
fn test_call_by_name() {
    let mut out = 0i64;

    let args = [2i64, 3];
    let status = unsafe { powsum_call(c"add".as_ptr(), args.as_ptr(), 2, ptr::null(), &mut out) };
    assert_eq!(status, PowsumStatus::Ok);
    assert_eq!(out, 5);

    let args = [50i64, 5];
    let status = unsafe {
        powsum_call(c"reduce_pow_sum".as_ptr(), args.as_ptr(), 2, ptr::null(), &mut out)
    };
    assert_eq!(status, PowsumStatus::Ok);
    assert_eq!(out, 2_450_520_625);

    let status = unsafe { powsum_call(c"add".as_ptr(), args.as_ptr(), 1, ptr::null(), &mut out) };
    assert_eq!(status, PowsumStatus::ArityMismatch);

    let status = unsafe { powsum_call(c"my_add".as_ptr(), ptr::null(), 0, ptr::null(), &mut out) };
    assert_eq!(status, PowsumStatus::NotFound);

    let status = unsafe { powsum_call(ptr::null(), ptr::null(), 0, ptr::null(), &mut out) };
    assert_eq!(status, PowsumStatus::NullPointer);
}
