//! The stage-tree walker.
//!
//! Evaluation is a plain recursive descent over the compiled tree. The only
//! ordering rule beyond "children before parent" is short-circuiting: for
//! `&&`, `||`, `?`, `:` and `??` the left value may decide the result on its
//! own, in which case the right branch is never visited and can neither run
//! side effects nor raise errors.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::compiler::{EvaluationStage, ExpressionFunction, OperatorSymbol, StageKind};
use crate::evaluator::{accessors, operators, EvalError, Parameters};
use crate::values::Value;

pub(super) fn evaluate_stage(
    stage: &EvaluationStage,
    parameters: &dyn Parameters,
) -> Result<Value, EvalError> {
    match &stage.kind {
        StageKind::Literal(value) => Ok(value.clone()),
        StageKind::Parameter(name) => {
            parameters.get(name).ok_or_else(|| EvalError::UnknownParameter {
                name: name.to_string(),
            })
        }
        StageKind::Function { name, callable } => {
            let arguments = eval_arguments(stage.right.as_deref(), parameters)?;
            call_function(name, callable, &arguments)
        }
        StageKind::Accessor { path, call } => {
            let arguments = if *call {
                eval_arguments(stage.right.as_deref(), parameters)?
            } else {
                Vec::new()
            };
            accessors::resolve(path, *call, &arguments, parameters)
        }
        StageKind::Operator(symbol) => evaluate_operator(*symbol, stage, parameters),
    }
}

fn evaluate_operator(
    symbol: OperatorSymbol,
    stage: &EvaluationStage,
    parameters: &dyn Parameters,
) -> Result<Value, EvalError> {
    if symbol == OperatorSymbol::Separator {
        let mut items = Vec::new();
        collect_separated(stage, parameters, &mut items)?;
        return Ok(Value::Array(items));
    }

    let left = match &stage.left {
        Some(left) => Some(evaluate_stage(left, parameters)?),
        None => None,
    };

    // The left contract is enforced before the short-circuit decision, so a
    // non-bool left of `&&` fails even when the right branch would be skipped.
    let contract = operators::contract(symbol);
    if let Some(contract) = &contract {
        if let (Some(check), Some(value)) = (contract.left, left.as_ref()) {
            if !check(value) {
                return Err(operators::type_error(contract.error_format, value, symbol));
            }
        }
    }

    if let Some(decided) = short_circuit(symbol, left.as_ref()) {
        return Ok(decided);
    }

    let right = match &stage.right {
        Some(right) => Some(evaluate_stage(right, parameters)?),
        None => None,
    };
    if let Some(contract) = &contract {
        if let (Some(check), Some(value)) = (contract.right, right.as_ref()) {
            if !check(value) {
                return Err(operators::type_error(contract.error_format, value, symbol));
            }
        }
        if let (Some(check), Some(l), Some(r)) = (contract.combined, left.as_ref(), right.as_ref())
        {
            if !check(l, r) {
                return Err(operators::type_error(contract.error_format, l, symbol));
            }
        }
    }

    operators::apply(symbol, left, right)
}

/// The result a short-circuit stage commits to from its left value alone.
fn short_circuit(symbol: OperatorSymbol, left: Option<&Value>) -> Option<Value> {
    use OperatorSymbol::*;
    let left = left?;
    match symbol {
        And if left.as_bool() == Some(false) => Some(Value::Bool(false)),
        Or if left.as_bool() == Some(true) => Some(Value::Bool(true)),
        // An unfulfilled `?` yields null, which the enclosing `:` picks up.
        TernaryTrue if left.as_bool() == Some(false) => Some(Value::Null),
        TernaryFalse | Coalesce if !left.is_null() => Some(left.clone()),
        _ => None,
    }
}

/// Flatten a left-leaning chain of separator stages into one value list.
fn collect_separated(
    stage: &EvaluationStage,
    parameters: &dyn Parameters,
    items: &mut Vec<Value>,
) -> Result<(), EvalError> {
    if let StageKind::Operator(OperatorSymbol::Separator) = stage.kind {
        let left = stage.left.as_deref().expect("separator stage has a left operand");
        let right = stage.right.as_deref().expect("separator stage has a right operand");
        collect_separated(left, parameters, items)?;
        collect_separated(right, parameters, items)
    } else {
        items.push(evaluate_stage(stage, parameters)?);
        Ok(())
    }
}

/// Evaluate a call's argument clause into a flat argument list. An absent
/// clause is a zero-argument call; a single array value spreads.
fn eval_arguments(
    stage: Option<&EvaluationStage>,
    parameters: &dyn Parameters,
) -> Result<Vec<Value>, EvalError> {
    let Some(stage) = stage else {
        return Ok(Vec::new());
    };
    match evaluate_stage(stage, parameters)? {
        Value::Array(items) => Ok(items),
        single => Ok(vec![single]),
    }
}

fn call_function(
    name: &str,
    callable: &ExpressionFunction,
    arguments: &[Value],
) -> Result<Value, EvalError> {
    catch_unwind(AssertUnwindSafe(|| callable(arguments))).map_err(|_| EvalError::Host {
        message: format!("function '{name}' panicked"),
    })?
}
