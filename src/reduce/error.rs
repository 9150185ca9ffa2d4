//! Errors raised by reductions and exported calls.

use thiserror::Error;

/// Errors that can occur when evaluating a reduction or an exported function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// An argument is outside the accepted range.
    #[error("invalid argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    /// A term or the accumulator left the `i64` range under the checked policy.
    #[error("integer overflow at index {index}")]
    Overflow { index: i64 },

    /// A two-operand sum left the `i64` range under the checked policy.
    #[error("integer overflow adding {lhs} and {rhs}")]
    AddOverflow { lhs: i64, rhs: i64 },

    /// No exported function has this name.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// An exported function was called with the wrong number of arguments.
    #[error("function '{name}' takes {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A policy code could not be decoded.
    #[error("invalid {field} code: {code}")]
    InvalidConfig { field: &'static str, code: u32 },
}

impl ReduceError {
    pub(crate) fn invalid(name: &'static str, value: i64) -> Self {
        ReduceError::InvalidArgument { name, value }
    }
}
