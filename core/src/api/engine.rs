use std::sync::Arc;

use ecow::EcoString;

use crate::api::expression::CompiledExpression;
use crate::compiler::{self, FunctionRegistry};
use crate::evaluator::EvalError;
use crate::parser::{self, CompileError};
use crate::values::Value;

/// An expression engine: a registry of host functions plus the compile
/// entry point. Cloning is cheap; the registry holds shared handles.
#[derive(Default, Clone)]
pub struct Engine {
    functions: FunctionRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a host function callable from expressions by name.
    /// Registering the same name again replaces the earlier function.
    pub fn register_function<F>(&mut self, name: impl Into<EcoString>, function: F) -> &mut Self
    where
        F: Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    /// Compile a source expression into a reusable evaluation tree.
    ///
    /// Function names resolve against the registry at compile time, so an
    /// expression calling an unregistered function fails here, not at
    /// evaluation.
    pub fn compile(&self, source: &str) -> Result<CompiledExpression, CompileError> {
        tracing::debug!(source, "compiling expression");
        let tokens = parser::tokenize(source)?;
        let root = compiler::plan(&tokens, &self.functions)?;
        let variables = compiler::referenced_variables(&root);
        Ok(CompiledExpression::new(source.into(), root, variables))
    }
}

/// Compile a source expression with no registered functions.
pub fn compile(source: &str) -> Result<CompiledExpression, CompileError> {
    Engine::new().compile(source)
}
