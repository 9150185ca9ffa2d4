//! Registry of exported functions.

use super::functions::{AddFunction, PowSumFunction};
use super::traits::{Exported, Signature};
use crate::reduce::{ReduceError, ReducerConfig};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Exported functions, kept in registration order.
pub struct ExportRegistry {
    functions: Vec<Arc<dyn Exported>>,
    by_name: HashMap<&'static str, usize>,
}

impl ExportRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in functions registered.
    pub fn new_with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(AddFunction);
        registry.register(PowSumFunction);
        registry
    }

    /// Register a function. A function with the same name is replaced in place.
    pub fn register<F: Exported + 'static>(&mut self, function: F) {
        self.register_arc(Arc::new(function));
    }

    /// Register a function from an Arc.
    pub fn register_arc(&mut self, function: Arc<dyn Exported>) {
        let name = function.name();
        match self.by_name.get(name) {
            Some(&idx) => self.functions[idx] = function,
            None => {
                self.by_name.insert(name, self.functions.len());
                self.functions.push(function);
            }
        }
    }

    /// Get a function by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Exported>> {
        self.by_name
            .get(name)
            .map(|&idx| self.functions[idx].clone())
    }

    /// Get a function by registration index.
    pub fn get_index(&self, index: usize) -> Option<Arc<dyn Exported>> {
        self.functions.get(index).cloned()
    }

    /// Check if a function is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Signatures in registration order.
    pub fn signatures(&self) -> Vec<Signature> {
        self.functions.iter().map(|f| f.signature()).collect()
    }

    /// Look up `name` and call it with `args`.
    pub fn call(
        &self,
        name: &str,
        args: &[i64],
        config: &ReducerConfig,
    ) -> Result<i64, ReduceError> {
        trace!(target: "powsum::export", function = name, nargs = args.len(), "dispatch");
        let function = self
            .get(name)
            .ok_or_else(|| ReduceError::UnknownFunction(name.to_string()))?;
        function.call(args, config)
    }
}

impl Default for ExportRegistry {
    fn default() -> Self {
        Self::new()
    }
}
