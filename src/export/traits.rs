//! Exported function trait definitions.

use crate::reduce::{ReduceError, ReducerConfig};

/// Name and docstring of the exported module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub doc: &'static str,
}

/// Describes one exported function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Name the host calls the function by.
    pub name: &'static str,
    /// Docstring shown by the host.
    pub doc: &'static str,
    /// Number of integer arguments.
    pub arity: usize,
}

/// A function callable through the export table.
pub trait Exported: Send + Sync {
    /// Get the function signature.
    fn signature(&self) -> Signature;

    /// Invoke with arguments already checked against the arity.
    fn invoke(&self, args: &[i64], config: &ReducerConfig) -> Result<i64, ReduceError>;

    /// Check the arity, then invoke.
    fn call(&self, args: &[i64], config: &ReducerConfig) -> Result<i64, ReduceError> {
        let sig = self.signature();
        if args.len() != sig.arity {
            return Err(ReduceError::ArityMismatch {
                name: sig.name.to_string(),
                expected: sig.arity,
                got: args.len(),
            });
        }
        self.invoke(args, config)
    }

    /// Get the function name.
    fn name(&self) -> &'static str {
        self.signature().name
    }
}
