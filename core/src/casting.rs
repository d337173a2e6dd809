//! Scalar coercion shared by the operator behaviors.
//!
//! Nearly every stage leans on these two conversions: arithmetic and
//! bitwise operators pull both operands through [`to_float`], and string
//! concatenation renders either side through [`to_text`].

use ecow::EcoString;

use crate::evaluator::EvalError;
use crate::values::Value;

/// Coerce a value to the canonical `f64` numeric form.
///
/// Numbers pass through unchanged; textual values go through standard
/// decimal parsing. Everything else is a conversion error.
pub fn to_float(value: &Value) -> Result<f64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Str(s) => s.trim().parse::<f64>().map_err(|_| conversion_error(value)),
        _ => Err(conversion_error(value)),
    }
}

/// Coerce a value to the 64-bit signed integer truncation used by the
/// bitwise operators.
pub fn to_i64(value: &Value) -> Result<i64, EvalError> {
    Ok(to_float(value)? as i64)
}

/// Render a value in its canonical textual form.
pub fn to_text(value: &Value) -> EcoString {
    ecow::eco_format!("{value}")
}

fn conversion_error(value: &Value) -> EvalError {
    EvalError::Conversion {
        value: value.to_string(),
    }
}
