//! The embedding surface: engines, compiled expressions, and the unified
//! public error type.

pub mod engine;
pub mod error;
pub mod expression;

pub use engine::{compile, Engine};
pub use error::Error;
pub use expression::CompiledExpression;
