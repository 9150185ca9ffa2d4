//! Export table: the functions a host runtime can look up by name.

pub mod functions;
pub mod registry;
pub mod traits;

pub use functions::{AddFunction, PowSumFunction};
pub use registry::ExportRegistry;
pub use traits::{Exported, ModuleInfo, Signature};

use once_cell::sync::Lazy;

/// The exported module.
pub const MODULE: ModuleInfo = ModuleInfo {
    name: "powsum",
    doc: "Exact integer power sums",
};

static DEFAULT_REGISTRY: Lazy<ExportRegistry> = Lazy::new(ExportRegistry::new_with_defaults);

/// The registry behind the C ABI, built on first use.
pub fn default_registry() -> &'static ExportRegistry {
    &DEFAULT_REGISTRY
}
