//! FFI entry point for installing the log subscriber.

use super::types::PowsumStatus;
use crate::logging::{init, LoggingError};
use std::ffi::{c_char, CStr};

/// Install a stderr tracing subscriber.
///
/// `filter` uses `EnvFilter` directive syntax (e.g. `"powsum=debug"`); null
/// reads the `POWSUM_LOG` environment variable.
///
/// # Safety
/// `filter` must be null or a valid C string.
#[no_mangle]
pub unsafe extern "C" fn powsum_log_init(filter: *const c_char) -> PowsumStatus {
    let directives = if filter.is_null() {
        None
    } else {
        match CStr::from_ptr(filter).to_str() {
            Ok(s) => Some(s),
            Err(_) => return PowsumStatus::InvalidUtf8,
        }
    };

    match init(directives) {
        Ok(()) => PowsumStatus::Ok,
        Err(LoggingError::InvalidFilter(_)) => PowsumStatus::InvalidArgument,
        Err(LoggingError::AlreadyInitialized) => PowsumStatus::AlreadyInitialized,
    }
}
