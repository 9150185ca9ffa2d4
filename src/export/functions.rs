//! Built-in exported functions.

use super::traits::{Exported, Signature};
use crate::reduce::{add, reduce_pow_sum, ReduceError, ReducerConfig};

/// `add(i, j)`.
#[derive(Debug, Default)]
pub struct AddFunction;

impl Exported for AddFunction {
    fn signature(&self) -> Signature {
        Signature {
            name: "add",
            doc: "A function that adds two numbers",
            arity: 2,
        }
    }

    fn invoke(&self, args: &[i64], config: &ReducerConfig) -> Result<i64, ReduceError> {
        let (i, j) = two_args(self.signature(), args)?;
        add(i, j, config.overflow)
    }
}

/// `reduce_pow_sum(len, exp)`.
#[derive(Debug, Default)]
pub struct PowSumFunction;

impl Exported for PowSumFunction {
    fn signature(&self) -> Signature {
        Signature {
            name: "reduce_pow_sum",
            doc: "Sum of n**exp for n in range(len)",
            arity: 2,
        }
    }

    fn invoke(&self, args: &[i64], config: &ReducerConfig) -> Result<i64, ReduceError> {
        let (len, exp) = two_args(self.signature(), args)?;
        reduce_pow_sum(len, exp, config)
    }
}

fn two_args(sig: Signature, args: &[i64]) -> Result<(i64, i64), ReduceError> {
    let &[a, b] = args else {
        return Err(ReduceError::ArityMismatch {
            name: sig.name.to_string(),
            expected: 2,
            got: args.len(),
        });
    };
    Ok((a, b))
}
