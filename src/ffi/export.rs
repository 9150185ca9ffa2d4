//! FFI functions for the export table.

use super::types::{read_config, CReducerConfig, PowsumStatus};
use crate::export::default_registry;
use std::ffi::{c_char, CStr};
use tracing::debug;

static MODULE_NAME: &[u8] = b"powsum\0";
static MODULE_DOC: &[u8] = b"Exact integer power sums\0";

/// Get the module name as a static C string.
#[no_mangle]
pub extern "C" fn powsum_module_name() -> *const c_char {
    MODULE_NAME.as_ptr() as *const c_char
}

/// Get the module docstring as a static C string.
#[no_mangle]
pub extern "C" fn powsum_module_doc() -> *const c_char {
    MODULE_DOC.as_ptr() as *const c_char
}

/// Get the number of exported functions.
#[no_mangle]
pub extern "C" fn powsum_function_count() -> usize {
    default_registry().len()
}

/// Get the arity of the function at `index`, or -1 if there is none.
#[no_mangle]
pub extern "C" fn powsum_function_arity(index: usize) -> i64 {
    default_registry()
        .get_index(index)
        .map_or(-1, |f| f.signature().arity as i64)
}

/// Copy the name of the function at `index` into a buffer.
///
/// # Safety
/// Buffer must be valid for `buffer_len` bytes; `out_len` must be valid.
#[no_mangle]
pub unsafe extern "C" fn powsum_function_name_buf(
    index: usize,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> PowsumStatus {
    match default_registry().get_index(index) {
        Some(f) => copy_to_buf(f.signature().name, buffer, buffer_len, out_len),
        None => PowsumStatus::NotFound,
    }
}

/// Copy the docstring of the function at `index` into a buffer.
///
/// # Safety
/// Buffer must be valid for `buffer_len` bytes; `out_len` must be valid.
#[no_mangle]
pub unsafe extern "C" fn powsum_function_doc_buf(
    index: usize,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> PowsumStatus {
    match default_registry().get_index(index) {
        Some(f) => copy_to_buf(f.signature().doc, buffer, buffer_len, out_len),
        None => PowsumStatus::NotFound,
    }
}

/// Call an exported function by name.
///
/// # Safety
/// `name` must be a valid C string, `args` valid for `nargs` elements (or
/// null when `nargs` is 0), and `out_value` a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn powsum_call(
    name: *const c_char,
    args: *const i64,
    nargs: usize,
    config: *const CReducerConfig,
    out_value: *mut i64,
) -> PowsumStatus {
    if name.is_null() || out_value.is_null() || (args.is_null() && nargs > 0) {
        return PowsumStatus::NullPointer;
    }

    let name = match CStr::from_ptr(name).to_str() {
        Ok(s) => s,
        Err(_) => return PowsumStatus::InvalidUtf8,
    };

    let cfg = match read_config(config) {
        Ok(cfg) => cfg,
        Err(status) => return status,
    };

    let args: &[i64] = if nargs == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(args, nargs)
    };

    debug!(target: "powsum::ffi", function = name, nargs, "call");
    match default_registry().call(name, args, &cfg) {
        Ok(value) => {
            *out_value = value;
            PowsumStatus::Ok
        }
        Err(e) => PowsumStatus::from(&e),
    }
}

/// Copy `text` into `buffer`, truncating and null-terminating.
/// `out_len` receives the full length so callers can retry with a larger buffer.
unsafe fn copy_to_buf(
    text: &str,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> PowsumStatus {
    if buffer.is_null() || out_len.is_null() {
        return PowsumStatus::NullPointer;
    }
    if buffer_len == 0 {
        *out_len = text.len();
        return PowsumStatus::BufferTooSmall;
    }

    let bytes = text.as_bytes();
    let copy_len = bytes.len().min(buffer_len - 1);

    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer as *mut u8, copy_len);
    *buffer.add(copy_len) = 0;
    *out_len = text.len();

    if copy_len < bytes.len() {
        PowsumStatus::BufferTooSmall
    } else {
        PowsumStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MODULE;

    #[test]
    fn test_module_strings() {
        let name = unsafe { CStr::from_ptr(powsum_module_name()) };
        assert_eq!(name.to_str().unwrap(), MODULE.name);
        let doc = unsafe { CStr::from_ptr(powsum_module_doc()) };
        assert_eq!(doc.to_str().unwrap(), MODULE.doc);
    }

    #[test]
    fn test_copy_truncates() {
        let mut buf = [1 as c_char; 4];
        let mut len = 0usize;
        let status = unsafe { copy_to_buf("reduce", buf.as_mut_ptr(), buf.len(), &mut len) };

        assert_eq!(status, PowsumStatus::BufferTooSmall);
        assert_eq!(len, 6);
        let copied = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(copied.to_str().unwrap(), "red");
    }
}
