//! Accessor-path resolution over maps and host objects.
//!
//! The path root resolves through the caller's bindings like any other
//! variable; each further segment reads a map entry or a host-object field,
//! and a path flagged as a call invokes a host method at its final segment.
//! Every excursion into host code runs under a panic guard so a faulty
//! implementation surfaces as an access error instead of tearing down the
//! caller's thread.

use std::panic::{catch_unwind, AssertUnwindSafe};

use ecow::EcoString;

use crate::casting::{to_float, to_text};
use crate::evaluator::{EvalError, Parameters};
use crate::values::{Value, ValueKind};

pub(super) fn resolve(
    path: &[EcoString],
    call: bool,
    arguments: &[Value],
    parameters: &dyn Parameters,
) -> Result<Value, EvalError> {
    let root_name = path.first().expect("accessor path has at least one segment");
    let mut current = parameters.get(root_name).ok_or_else(|| EvalError::UnknownParameter {
        name: root_name.to_string(),
    })?;

    let last = path.len() - 1;
    for (index, segment) in path.iter().enumerate().skip(1) {
        current = if call && index == last {
            invoke_method(&current, path, segment, arguments)?
        } else {
            read_field(&current, path, segment)?
        };
    }
    Ok(current)
}

fn read_field(value: &Value, path: &[EcoString], segment: &str) -> Result<Value, EvalError> {
    match value {
        Value::Map(_) => value
            .map_entry(segment)
            .cloned()
            .ok_or_else(|| access_error(path, format!("no entry '{segment}'"))),
        Value::Object(object) => {
            let field = guarded(path, || object.field(segment))?;
            field.ok_or_else(|| {
                access_error(
                    path,
                    format!("no field '{segment}' on '{}'", object.type_name()),
                )
            })
        }
        other => Err(access_error(
            path,
            format!("cannot read '{segment}' from a {}", other.kind().name()),
        )),
    }
}

fn invoke_method(
    value: &Value,
    path: &[EcoString],
    name: &str,
    arguments: &[Value],
) -> Result<Value, EvalError> {
    let Value::Object(object) = value else {
        return Err(access_error(
            path,
            format!("cannot call '{name}' on a {}", value.kind().name()),
        ));
    };
    let declared = guarded(path, || object.method_params(name))?.ok_or_else(|| {
        access_error(path, format!("no method '{name}' on '{}'", object.type_name()))
    })?;
    if declared.len() != arguments.len() {
        return Err(access_error(
            path,
            format!(
                "method '{name}' takes {} arguments, got {}",
                declared.len(),
                arguments.len()
            ),
        ));
    }
    let mut coerced = Vec::with_capacity(arguments.len());
    for (position, (argument, kind)) in arguments.iter().zip(&declared).enumerate() {
        coerced.push(coerce_argument(argument, *kind, position, path)?);
    }
    guarded(path, || object.invoke(name, &coerced))?
}

/// Coerce one call argument to its declared kind: numbers through decimal
/// coercion, strings through canonical rendering, anything else by exact
/// kind match.
fn coerce_argument(
    value: &Value,
    kind: ValueKind,
    position: usize,
    path: &[EcoString],
) -> Result<Value, EvalError> {
    if value.kind() == kind {
        return Ok(value.clone());
    }
    let coerced = match kind {
        ValueKind::Number => to_float(value).ok().map(Value::Number),
        ValueKind::Str => Some(Value::Str(to_text(value))),
        _ => None,
    };
    coerced.ok_or(EvalError::Argument {
        position,
        target: path_text(path),
        expected: kind.name(),
    })
}

/// Run a host callback under a panic guard.
fn guarded<T>(path: &[EcoString], host_call: impl FnOnce() -> T) -> Result<T, EvalError> {
    catch_unwind(AssertUnwindSafe(host_call))
        .map_err(|_| access_error(path, "host code panicked".to_string()))
}

fn access_error(path: &[EcoString], message: String) -> EvalError {
    EvalError::Access {
        path: path_text(path),
        message,
    }
}

fn path_text(path: &[EcoString]) -> String {
    let mut text = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            text.push('.');
        }
        text.push_str(segment);
    }
    text
}
