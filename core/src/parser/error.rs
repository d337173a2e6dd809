//! Compilation errors.
//!
//! Both lexical and syntactic failures surface as a [`CompileError`]: a kind
//! describing what went wrong plus the byte span of the offending text.
//! Compilation is all-or-nothing; a compile error never leaves a partially
//! built expression behind.

use core::fmt;

use crate::parser::token::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub span: Span,
}

impl CompileError {
    pub fn new(kind: CompileErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at offset {})", self.kind, self.span.start())
    }
}

impl std::error::Error for CompileError {}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileErrorKind {
    // Lexical failures.
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated pattern literal")]
    UnterminatedPattern,
    #[error("unable to compile pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
    #[error("unrecognized character '{0}'")]
    UnexpectedCharacter(char),

    // Syntactic failures.
    #[error("unbalanced parenthesis")]
    UnbalancedClause,
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(String),
    #[error("dangling argument separator")]
    DanglingSeparator,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("undefined function '{0}'")]
    UnknownFunction(String),
    #[error("empty expression")]
    EmptyExpression,
}
