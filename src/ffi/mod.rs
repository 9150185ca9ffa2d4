//! FFI (Foreign Function Interface) layer for C bindings.
//!
//! This module provides C-compatible functions that can be called from
//! Python via cffi, or from any other language that supports C FFI.

pub mod export;
pub mod logging;
pub mod reduce;
pub mod types;

pub use export::*;
pub use logging::*;
pub use reduce::*;
pub use types::*;
