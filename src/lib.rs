//! powsum - exact integer power sums for host runtimes.
//!
//! This crate computes `sum(n^exp for n in 0..len)` in integer arithmetic
//! and exposes it, together with a small export table, over a C ABI:
//!
//! - Exponentiation by squaring, no floating-point round trip
//! - Selectable overflow policy (wrapping, saturating, checked)
//! - Export table with names and docstrings for host-side registration
//! - FFI layer for Python (cffi) and other language bindings
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     FFI Layer (powsum.h)            │
//! │  C-compatible functions & types     │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │          Pure Rust Core             │
//! │  ┌───────────┐  ┌───────────────┐  │
//! │  │  Export   │  │   Reducer     │  │
//! │  │  Registry │  │ (pow, table)  │  │
//! │  └───────────┘  └───────────────┘  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # FFI Usage
//!
//! ```c
//! int64_t sum;
//! PowsumStatus st = powsum_reduce_pow_sum(50, 5, NULL, &sum);
//!
//! // Through the export table
//! int64_t args[2] = {2, 3};
//! powsum_call("add", args, 2, NULL, &sum);
//! ```

pub mod export;
pub mod ffi;
pub mod logging;
pub mod reduce;

// Re-export commonly used items
pub use export::{default_registry, ExportRegistry, Exported, ModuleInfo, Signature, MODULE};
pub use reduce::{
    add, int_pow, pow_sum_table, reduce_pow_sum, reduce_pow_sum_batch, LengthPolicy,
    OverflowPolicy, ReduceError, ReducerConfig,
};

// Re-export FFI types for cbindgen
pub use ffi::types::*;
pub use ffi::reduce::*;
pub use ffi::export::*;
pub use ffi::logging::*;
