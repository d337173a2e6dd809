use core::fmt;

use ecow::EcoString;

use crate::compiler::OperatorSymbol;
use crate::values::Value;

/// A byte range into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub core::ops::Range<usize>);

impl Span {
    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.0.start, self.0.end)
    }
}

/// One lexical token, produced by the tokenizer and consumed by the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A literal operand: number, string, boolean, null, or `/…/` pattern.
    Literal(Value),
    /// A bare variable reference.
    Identifier(EcoString),
    /// An identifier immediately followed by `(`: a registered function name.
    Function(EcoString),
    /// A dotted member-access path (`a.b.c`); always rooted at a variable.
    Accessor(Vec<EcoString>),
    Operator(OperatorSymbol),
    ClauseOpen,
    ClauseClose,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal(value) => write!(f, "{value}"),
            TokenKind::Identifier(name) | TokenKind::Function(name) => write!(f, "{name}"),
            TokenKind::Accessor(path) => write!(f, "{}", path.join(".")),
            TokenKind::Operator(symbol) => write!(f, "{symbol}"),
            TokenKind::ClauseOpen => write!(f, "("),
            TokenKind::ClauseClose => write!(f, ")"),
        }
    }
}
