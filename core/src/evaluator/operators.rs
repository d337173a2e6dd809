//! Operator behaviors and the type contracts that gate them.
//!
//! Each non-leaf stage is gated by a [`TypeContract`]: per-side checks, or a
//! combined check when the constraint spans both operands (addition accepts
//! two numbers or anything next to a string; comparison accepts two numbers
//! or two strings, never a mix). A behavior is total with respect to its
//! contract: once the checks pass it can only fail for semantic reasons
//! such as an uncoercible textual number or a bad runtime pattern.

use regex::Regex;

use crate::casting::{to_float, to_i64, to_text};
use crate::compiler::OperatorSymbol;
use crate::evaluator::EvalError;
use crate::values::Value;

const LOGICAL_ERROR_FORMAT: &str =
    "Value '{value}' cannot be used with the logical operator '{operator}', it is not a bool";
const MODIFIER_ERROR_FORMAT: &str =
    "Value '{value}' cannot be used with the modifier '{operator}', it is not a number";
const COMPARATOR_ERROR_FORMAT: &str =
    "Value '{value}' cannot be used with the comparator '{operator}', it is not a number";
const TERNARY_ERROR_FORMAT: &str =
    "Value '{value}' cannot be used with the ternary operator '{operator}', it is not a bool";
const PREFIX_ERROR_FORMAT: &str = "Value '{value}' cannot be used with the prefix '{operator}'";
const MATCHER_ERROR_FORMAT: &str =
    "Value '{value}' cannot be used with the matcher '{operator}', it is not a string";
const MEMBERSHIP_ERROR_FORMAT: &str =
    "Value '{value}' cannot be used with the membership operator '{operator}', it is not an array";

/// The type checks gating one operator.
pub(super) struct TypeContract {
    pub left: Option<fn(&Value) -> bool>,
    pub right: Option<fn(&Value) -> bool>,
    /// When present, overrides the per-side checks.
    pub combined: Option<fn(&Value, &Value) -> bool>,
    pub error_format: &'static str,
}

impl TypeContract {
    const fn sides(
        left: Option<fn(&Value) -> bool>,
        right: Option<fn(&Value) -> bool>,
        error_format: &'static str,
    ) -> Self {
        Self {
            left,
            right,
            combined: None,
            error_format,
        }
    }

    const fn joint(combined: fn(&Value, &Value) -> bool, error_format: &'static str) -> Self {
        Self {
            left: None,
            right: None,
            combined: Some(combined),
            error_format,
        }
    }
}

/// The contract for a symbol, or `None` for operators without one
/// (equality coerces per-side itself; `:`/`??` accept anything).
pub(super) fn contract(symbol: OperatorSymbol) -> Option<TypeContract> {
    use OperatorSymbol::*;
    let contract = match symbol {
        Add => TypeContract::joint(addition_type_check, MODIFIER_ERROR_FORMAT),
        Subtract | Multiply | Divide | Modulus | Exponent | BitwiseAnd | BitwiseOr | BitwiseXor
        | LeftShift | RightShift => {
            TypeContract::sides(Some(is_number), Some(is_number), MODIFIER_ERROR_FORMAT)
        }
        GreaterThan | LessThan | GreaterOrEqual | LessOrEqual => {
            TypeContract::joint(comparator_type_check, COMPARATOR_ERROR_FORMAT)
        }
        And | Or => TypeContract::sides(Some(is_bool), Some(is_bool), LOGICAL_ERROR_FORMAT),
        Invert => TypeContract::sides(None, Some(is_bool), LOGICAL_ERROR_FORMAT),
        Negate | BitwiseNot => TypeContract::sides(None, Some(is_number), PREFIX_ERROR_FORMAT),
        TernaryTrue => TypeContract::sides(Some(is_bool), None, TERNARY_ERROR_FORMAT),
        RegexMatch | NotRegexMatch => {
            TypeContract::sides(Some(is_string), Some(is_pattern_or_string), MATCHER_ERROR_FORMAT)
        }
        In => TypeContract::sides(None, Some(is_array), MEMBERSHIP_ERROR_FORMAT),
        Equal | NotEqual | TernaryFalse | Coalesce | Separator => return None,
    };
    Some(contract)
}

pub(super) fn type_error(
    error_format: &'static str,
    value: &Value,
    symbol: OperatorSymbol,
) -> EvalError {
    EvalError::Type {
        message: error_format
            .replace("{value}", &value.to_string())
            .replace("{operator}", &symbol.to_string()),
    }
}

/// Apply an operator behavior to its (already type-checked) operands.
///
/// Short-circuited outcomes never reach this point: by the time a
/// short-circuit symbol lands here its left value has committed to the
/// right branch.
pub(super) fn apply(
    symbol: OperatorSymbol,
    left: Option<Value>,
    right: Option<Value>,
) -> Result<Value, EvalError> {
    use OperatorSymbol::*;
    match symbol {
        Add => {
            let (l, r) = both(left, right);
            if l.as_str().is_some() || r.as_str().is_some() {
                let mut text = to_text(&l);
                text.push_str(&to_text(&r));
                Ok(Value::Str(text))
            } else {
                Ok(Value::Number(to_float(&l)? + to_float(&r)?))
            }
        }
        Subtract => numeric(left, right, |l, r| l - r),
        Multiply => numeric(left, right, |l, r| l * r),
        Divide => numeric(left, right, |l, r| l / r),
        Modulus => numeric(left, right, |l, r| l % r),
        Exponent => numeric(left, right, f64::powf),
        Negate => Ok(Value::Number(-to_float(&only_right(right))?)),
        Invert => {
            let value = only_right(right);
            Ok(Value::Bool(!value.as_bool().expect("checked as bool")))
        }
        BitwiseNot => Ok(Value::Number(!to_i64(&only_right(right))? as f64)),
        Equal => {
            let (l, r) = both(left, right);
            Ok(Value::Bool(equality(&l, &r)?))
        }
        NotEqual => {
            let (l, r) = both(left, right);
            Ok(Value::Bool(!equality(&l, &r)?))
        }
        GreaterThan => comparison(left, right, |o| o.is_gt()),
        LessThan => comparison(left, right, |o| o.is_lt()),
        GreaterOrEqual => comparison(left, right, |o| o.is_ge()),
        LessOrEqual => comparison(left, right, |o| o.is_le()),
        RegexMatch => {
            let (l, r) = both(left, right);
            Ok(Value::Bool(pattern_match(&l, &r)?))
        }
        NotRegexMatch => {
            let (l, r) = both(left, right);
            Ok(Value::Bool(!pattern_match(&l, &r)?))
        }
        BitwiseAnd => bitwise(left, right, |l, r| l & r),
        BitwiseOr => bitwise(left, right, |l, r| l | r),
        BitwiseXor => bitwise(left, right, |l, r| l ^ r),
        LeftShift => bitwise(left, right, |l, r| shifted(l, r, |a, s| a << s)),
        RightShift => bitwise(left, right, |l, r| shifted(l, r, |a, s| a >> s)),
        In => {
            let (l, r) = both(left, right);
            let candidates = r.as_array().expect("checked as array");
            Ok(Value::Bool(candidates.contains(&l)))
        }
        And => {
            let (l, r) = both(left, right);
            Ok(Value::Bool(
                l.as_bool().expect("checked as bool") && r.as_bool().expect("checked as bool"),
            ))
        }
        Or => {
            let (l, r) = both(left, right);
            Ok(Value::Bool(
                l.as_bool().expect("checked as bool") || r.as_bool().expect("checked as bool"),
            ))
        }
        // `a ? b` reaches here only when `a` was true; its value is `b`.
        TernaryTrue => Ok(only_right(right)),
        // `x : c` and `x ?? c` reach here only when `x` was null.
        TernaryFalse | Coalesce => Ok(only_right(right)),
        Separator => unreachable!("separator chains are flattened by the evaluator"),
    }
}

fn both(left: Option<Value>, right: Option<Value>) -> (Value, Value) {
    (
        left.expect("binary stage has a left operand"),
        right.expect("binary stage has a right operand"),
    )
}

fn only_right(right: Option<Value>) -> Value {
    right.expect("unary stage has a right operand")
}

fn numeric(
    left: Option<Value>,
    right: Option<Value>,
    op: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let (l, r) = both(left, right);
    Ok(Value::Number(op(to_float(&l)?, to_float(&r)?)))
}

fn bitwise(
    left: Option<Value>,
    right: Option<Value>,
    op: fn(i64, i64) -> i64,
) -> Result<Value, EvalError> {
    let (l, r) = both(left, right);
    Ok(Value::Number(op(to_i64(&l)?, to_i64(&r)?) as f64))
}

/// Shift on the 64-bit truncation; out-of-range shift amounts clear to zero.
fn shifted(value: i64, amount: i64, op: fn(u64, u32) -> u64) -> i64 {
    if (0..64).contains(&amount) {
        op(value as u64, amount as u32) as i64
    } else {
        0
    }
}

fn comparison(
    left: Option<Value>,
    right: Option<Value>,
    pick: fn(core::cmp::Ordering) -> bool,
) -> Result<Value, EvalError> {
    let (l, r) = both(left, right);
    let ordering = if let (Some(a), Some(b)) = (l.as_str(), r.as_str()) {
        a.cmp(b)
    } else {
        to_float(&l)?
            .partial_cmp(&to_float(&r)?)
            .unwrap_or(core::cmp::Ordering::Greater)
    };
    Ok(Value::Bool(pick(ordering)))
}

/// Value equality on the coerced representation: lexical when both sides
/// are textual, numeric otherwise.
fn equality(l: &Value, r: &Value) -> Result<bool, EvalError> {
    if let (Some(a), Some(b)) = (l.as_str(), r.as_str()) {
        Ok(a == b)
    } else {
        Ok(to_float(l)? == to_float(r)?)
    }
}

fn pattern_match(l: &Value, r: &Value) -> Result<bool, EvalError> {
    let text = l.as_str().expect("checked as string");
    match r {
        Value::Pattern(pattern) => Ok(pattern.is_match(text)),
        Value::Str(pattern) => {
            let compiled = Regex::new(pattern).map_err(|e| EvalError::Pattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            Ok(compiled.is_match(text))
        }
        other => unreachable!("checked as pattern or string, got {other:?}"),
    }
}

fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

fn is_pattern_or_string(value: &Value) -> bool {
    matches!(value, Value::Pattern(_) | Value::Str(_))
}

/// A value counts as a number if it coerces: numbers themselves, plus
/// textual values in decimal form.
fn is_number(value: &Value) -> bool {
    to_float(value).is_ok()
}

/// Addition means numbers, unless either side is textual (concatenation).
fn addition_type_check(left: &Value, right: &Value) -> bool {
    (is_number(left) && is_number(right)) || is_string(left) || is_string(right)
}

/// Comparison is numeric or lexicographic between two strings, never a mix.
fn comparator_type_check(left: &Value, right: &Value) -> bool {
    (is_number(left) && is_number(right)) || (is_string(left) && is_string(right))
}
