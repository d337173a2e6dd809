//! Rebus - an embeddable expression-evaluation engine
//!
//! # Overview
//!
//! Rebus compiles small, C-like boolean and arithmetic expressions into an
//! immutable evaluation tree that can be run any number of times against
//! different variable bindings. Common use cases include:
//!
//! - Admission and routing rules evaluated per request
//! - Feature flags and conditional configuration
//! - Filtering records against user-supplied predicates
//!
//! # Quick Start
//!
//! ```
//! use rebus::{compile, Value};
//!
//! let expr = compile("total > 100 ? 'review' : 'auto'").unwrap();
//!
//! let result = expr
//!     .evaluate(&|name: &str| match name {
//!         "total" => Some(Value::Number(250.0)),
//!         _ => None,
//!     })
//!     .unwrap();
//! assert_eq!(result, Value::Str("review".into()));
//! ```
//!
//! # Host functions
//!
//! Register plain Rust functions on an [`Engine`] and call them by name.
//! Function names resolve at compile time, so typos fail early:
//!
//! ```
//! use rebus::{Engine, Value};
//!
//! let mut engine = Engine::new();
//! engine.register_function("double", |args: &[Value]| {
//!     let n = rebus::casting::to_float(&args[0])?;
//!     Ok(Value::Number(n * 2.0))
//! });
//!
//! let expr = engine.compile("double(21)").unwrap();
//! assert_eq!(expr.evaluate_empty().unwrap(), Value::Number(42.0));
//! ```

// Re-export the public API from rebus_core
pub use rebus_core::api::{compile, CompiledExpression, Engine, Error};

// Re-export the value domain and the host-object seam
pub use rebus_core::values::{self, HostObject, Value, ValueKind};

// Re-export errors and evaluation-time bindings
pub use rebus_core::evaluator::{EmptyParameters, EvalError, Parameters};
pub use rebus_core::parser::{CompileError, CompileErrorKind};

// The lower-level pipeline stays reachable for callers that need it
pub use rebus_core::{casting, compiler, evaluator, parser};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
