//! The reflection seam between the evaluator and caller-owned objects.
//!
//! Accessor expressions (`order.Customer.Name`, `clock.Now()`) traverse
//! values whose shape the engine cannot know at compile time. Rather than
//! spreading runtime introspection through the evaluator, everything the
//! resolver needs is behind this one trait: "given an opaque value and a
//! field or method name, return the child value or fail".

use crate::evaluator::EvalError;
use crate::values::{Value, ValueKind};

/// A caller-owned object reachable through accessor paths.
///
/// Implementations must be safe to share across threads, since a compiled
/// expression holding no objects itself may be evaluated concurrently
/// against bindings that do.
pub trait HostObject: Send + Sync {
    /// A short name used in error messages and canonical rendering.
    fn type_name(&self) -> &str {
        "object"
    }

    /// Read a named field, or `None` if the object has no such field.
    fn field(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }

    /// The declared parameter kinds of a named method, or `None` if the
    /// object has no such method. The accessor resolver coerces each
    /// argument to the declared kind before calling [`HostObject::invoke`].
    fn method_params(&self, name: &str) -> Option<Vec<ValueKind>> {
        let _ = name;
        None
    }

    /// Invoke a named method with already-coerced arguments.
    ///
    /// Only called for names that [`HostObject::method_params`] reported,
    /// with exactly as many arguments as declared. An `Err` here surfaces
    /// to the expression caller as a host evaluation error.
    fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, EvalError> {
        let _ = args;
        Err(EvalError::Host {
            message: format!("method '{}' on '{}' is not callable", name, self.type_name()),
        })
    }
}
