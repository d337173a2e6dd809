use crate::evaluator::EvalError;
use crate::parser::CompileError;

/// Any error the engine can produce, compile-time or runtime.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
