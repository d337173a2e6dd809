//! Core compiler and evaluation engine for rebus expressions.
//!
//! An expression is compiled once into an immutable stage tree and then
//! evaluated any number of times against caller-supplied variable bindings.
//! The pipeline is:
//!
//! 1. [`parser`] scans source text into spanned tokens.
//! 2. [`compiler`] folds the token stream into an [`compiler::EvaluationStage`]
//!    tree via operator-precedence parsing.
//! 3. [`evaluator`] walks the tree against a [`evaluator::Parameters`] lookup,
//!    producing a dynamically-typed [`values::Value`] or a typed error.
//!
//! The public entry points live in [`api`]; the inner modules are exposed for
//! embedders that need to inspect tokens or stage trees directly.

pub mod api;
pub mod casting;
pub mod compiler;
pub mod evaluator;
pub mod parser;
pub mod values;
