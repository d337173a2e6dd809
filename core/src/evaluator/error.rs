//! Runtime evaluation errors.
//!
//! Evaluation errors abort only the current `evaluate` call; the compiled
//! tree stays valid and reusable. Branches skipped by short-circuit
//! semantics never run and therefore never produce errors.

/// An error produced while evaluating a compiled expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// An operand failed an operator's declared type contract. The message
    /// names the value, its textual form, and the operator.
    #[error("{message}")]
    Type { message: String },

    /// A value could not be coerced to the numeric form an operator needs.
    #[error("unable to convert value '{value}' to a number")]
    Conversion { value: String },

    /// The variable-lookup capability had no binding for a referenced name.
    #[error("no parameter '{name}' found")]
    UnknownParameter { name: String },

    /// A member-access path could not be resolved: missing field or method,
    /// wrong container kind, wrong call arity, or a fault inside host code.
    #[error("failed to access '{path}': {message}")]
    Access { path: String, message: String },

    /// A method-call argument could not be coerced to its declared kind.
    #[error("argument {position} to '{target}' cannot be converted to {expected}")]
    Argument {
        position: usize,
        target: String,
        expected: &'static str,
    },

    /// A textual pattern on the right of `=~`/`!~` failed to compile.
    #[error("unable to compile pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// An error value explicitly returned by a host function or an
    /// accessor-invoked method.
    #[error("{message}")]
    Host { message: String },
}
