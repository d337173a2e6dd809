//! Stage-tree evaluation.
//!
//! [`evaluate`] walks a compiled [`EvaluationStage`] tree against a set of
//! caller-supplied bindings and produces a single [`Value`]. Operator type
//! contracts, short-circuit rules and accessor resolution all live in this
//! module; the tree itself is read-only throughout.

mod accessors;
mod eval;
mod operators;
mod parameters;

pub mod error;


pub use error::EvalError;
pub use parameters::{EmptyParameters, Parameters};

use crate::compiler::EvaluationStage;
use crate::values::Value;

/// Evaluate a compiled stage tree against the given bindings.
pub fn evaluate(root: &EvaluationStage, parameters: &dyn Parameters) -> Result<Value, EvalError> {
    let result = eval::evaluate_stage(root, parameters);
    if let Err(error) = &result {
        tracing::debug!(%error, "evaluation failed");
    }
    result
}
