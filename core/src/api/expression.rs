use ecow::EcoString;

use crate::compiler::EvaluationStage;
use crate::evaluator::{self, EmptyParameters, EvalError, Parameters};
use crate::values::Value;

/// A compiled expression, ready to be evaluated any number of times.
///
/// The stage tree inside is immutable after compilation; evaluation reads
/// it without mutation, so a single compiled expression may be shared and
/// evaluated from multiple threads at once.
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    source: EcoString,
    root: EvaluationStage,
    variables: Vec<EcoString>,
}

impl CompiledExpression {
    pub(crate) fn new(source: EcoString, root: EvaluationStage, variables: Vec<EcoString>) -> Self {
        Self {
            source,
            root,
            variables,
        }
    }

    /// The source text this expression was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The variable names the expression references, in source order,
    /// deduplicated. Useful for validating bindings before evaluating.
    pub fn variables(&self) -> &[EcoString] {
        &self.variables
    }

    /// The root of the compiled stage tree.
    pub fn root(&self) -> &EvaluationStage {
        &self.root
    }

    /// Evaluate against the given bindings.
    pub fn evaluate(&self, parameters: &dyn Parameters) -> Result<Value, EvalError> {
        evaluator::evaluate(&self.root, parameters)
    }

    /// Evaluate with no bindings, for expressions over literals alone.
    pub fn evaluate_empty(&self) -> Result<Value, EvalError> {
        self.evaluate(&EmptyParameters)
    }
}
