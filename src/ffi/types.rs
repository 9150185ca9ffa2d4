//! C-compatible type definitions for FFI.

use crate::reduce::{LengthPolicy, OverflowPolicy, ReduceError, ReducerConfig};

/// Result status codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowsumStatus {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer was passed.
    NullPointer = 1,
    /// Argument out of range.
    InvalidArgument = 2,
    /// Result does not fit in 64 bits.
    Overflow = 3,
    /// Invalid UTF-8 string.
    InvalidUtf8 = 4,
    /// No exported function with that name or index.
    NotFound = 5,
    /// Wrong number of arguments for an exported function.
    ArityMismatch = 6,
    /// Output buffer is too small.
    BufferTooSmall = 7,
    /// Unknown policy code in the configuration.
    InvalidConfig = 8,
    /// A logging subscriber is already installed.
    AlreadyInitialized = 9,
}

impl From<&ReduceError> for PowsumStatus {
    fn from(err: &ReduceError) -> Self {
        match err {
            ReduceError::InvalidArgument { .. } => PowsumStatus::InvalidArgument,
            ReduceError::Overflow { .. } | ReduceError::AddOverflow { .. } => {
                PowsumStatus::Overflow
            }
            ReduceError::UnknownFunction(_) => PowsumStatus::NotFound,
            ReduceError::ArityMismatch { .. } => PowsumStatus::ArityMismatch,
            ReduceError::InvalidConfig { .. } => PowsumStatus::InvalidConfig,
        }
    }
}

/// Configuration passed across the C ABI.
///
/// `overflow`: 0 = wrapping, 1 = saturating, 2 = checked.
/// `negative_len`: 0 = empty range, 1 = reject.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CReducerConfig {
    pub overflow: u32,
    pub negative_len: u32,
}

impl Default for CReducerConfig {
    fn default() -> Self {
        ReducerConfig::default().into()
    }
}

impl From<ReducerConfig> for CReducerConfig {
    fn from(c: ReducerConfig) -> Self {
        Self {
            overflow: c.overflow.code(),
            negative_len: c.negative_len.code(),
        }
    }
}

impl TryFrom<CReducerConfig> for ReducerConfig {
    type Error = ReduceError;

    fn try_from(c: CReducerConfig) -> Result<Self, Self::Error> {
        Ok(ReducerConfig {
            overflow: OverflowPolicy::try_from(c.overflow)?,
            negative_len: LengthPolicy::try_from(c.negative_len)?,
        })
    }
}

/// Read an optional config pointer; null selects the defaults.
///
/// # Safety
/// `config` must be null or point to a valid `CReducerConfig`.
pub(crate) unsafe fn read_config(config: *const CReducerConfig) -> Result<ReducerConfig, PowsumStatus> {
    if config.is_null() {
        return Ok(ReducerConfig::default());
    }
    ReducerConfig::try_from(*config).map_err(|e| PowsumStatus::from(&e))
}
