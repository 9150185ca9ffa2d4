//! Integer reductions.

pub mod arith;
pub mod config;
pub mod error;
pub mod policy;
pub mod pow;
pub mod sum;
pub mod table;

pub use arith::add;
pub use config::ReducerConfig;
pub use error::ReduceError;
pub use policy::{LengthPolicy, OverflowPolicy};
pub use pow::int_pow;
pub use sum::{reduce_pow_sum, reduce_pow_sum_batch};
pub use table::pow_sum_table;
