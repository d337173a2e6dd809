use core::fmt;
use std::sync::Arc;

use ecow::EcoString;

use crate::evaluator::EvalError;
use crate::values::Value;

/// A host function registered on an engine, callable from expressions.
pub type ExpressionFunction = Arc<dyn Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync>;

/// The closed enumeration of operators an expression can contain.
///
/// Precedence and associativity are consulted only while the stage tree is
/// being built; after that, evaluation order is fully encoded in the tree
/// shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSymbol {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Exponent,

    Negate,
    Invert,
    BitwiseNot,

    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,

    RegexMatch,
    NotRegexMatch,

    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LeftShift,
    RightShift,

    In,

    And,
    Or,

    TernaryTrue,
    TernaryFalse,
    Coalesce,

    Separator,
}

impl OperatorSymbol {
    /// Binding strength used during tree construction; higher binds tighter.
    pub fn precedence(self) -> u8 {
        use OperatorSymbol::*;
        match self {
            Negate | Invert | BitwiseNot => 18,
            Exponent => 17,
            Multiply | Divide | Modulus => 16,
            Add | Subtract => 15,
            LeftShift | RightShift => 14,
            GreaterThan | LessThan | GreaterOrEqual | LessOrEqual => 13,
            Equal | NotEqual => 12,
            RegexMatch | NotRegexMatch => 11,
            BitwiseAnd => 10,
            BitwiseXor => 9,
            BitwiseOr => 8,
            In => 7,
            And => 6,
            Or => 5,
            TernaryTrue => 4,
            TernaryFalse => 3,
            Coalesce => 2,
            Separator => 1,
        }
    }

    pub fn is_right_associative(self) -> bool {
        use OperatorSymbol::*;
        matches!(
            self,
            Negate | Invert | BitwiseNot | Exponent | TernaryTrue | TernaryFalse | Coalesce
        )
    }

    /// Prefix operators take a single right operand.
    pub fn is_unary_prefix(self) -> bool {
        use OperatorSymbol::*;
        matches!(self, Negate | Invert | BitwiseNot)
    }

    /// Stages whose left value alone may decide the result, skipping the
    /// right branch entirely.
    pub fn is_short_circuit(self) -> bool {
        use OperatorSymbol::*;
        matches!(self, And | Or | TernaryTrue | TernaryFalse | Coalesce)
    }
}

impl fmt::Display for OperatorSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use OperatorSymbol::*;
        let text = match self {
            Add => "+",
            Subtract | Negate => "-",
            Multiply => "*",
            Divide => "/",
            Modulus => "%",
            Exponent => "**",
            Invert => "!",
            BitwiseNot => "~",
            Equal => "==",
            NotEqual => "!=",
            GreaterThan => ">",
            LessThan => "<",
            GreaterOrEqual => ">=",
            LessOrEqual => "<=",
            RegexMatch => "=~",
            NotRegexMatch => "!~",
            BitwiseAnd => "&",
            BitwiseOr => "|",
            BitwiseXor => "^",
            LeftShift => "<<",
            RightShift => ">>",
            In => "in",
            And => "&&",
            Or => "||",
            TernaryTrue => "?",
            TernaryFalse => ":",
            Coalesce => "??",
            Separator => ",",
        };
        write!(f, "{text}")
    }
}

/// What a single stage computes.
#[derive(Clone)]
pub enum StageKind {
    /// A literal value; ignores both children.
    Literal(Value),
    /// A variable reference resolved through the caller's lookup capability.
    Parameter(EcoString),
    /// A registered function applied to the evaluated right child.
    Function {
        name: EcoString,
        callable: ExpressionFunction,
    },
    /// A dotted member-access path; `call` marks paths that terminate in a
    /// method invocation, whose arguments come from the right child.
    Accessor { path: Vec<EcoString>, call: bool },
    Operator(OperatorSymbol),
}

impl fmt::Debug for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            StageKind::Parameter(name) => f.debug_tuple("Parameter").field(name).finish(),
            StageKind::Function { name, .. } => f.debug_tuple("Function").field(name).finish(),
            StageKind::Accessor { path, call } => f
                .debug_struct("Accessor")
                .field("path", path)
                .field("call", call)
                .finish(),
            StageKind::Operator(symbol) => f.debug_tuple("Operator").field(symbol).finish(),
        }
    }
}

/// One node of the compiled evaluation tree.
///
/// Every node exclusively owns its children; the tree is immutable after
/// construction and carries no evaluation state, so one compiled tree may be
/// walked concurrently from any number of callers.
#[derive(Debug, Clone)]
pub struct EvaluationStage {
    pub kind: StageKind,
    pub left: Option<Box<EvaluationStage>>,
    pub right: Option<Box<EvaluationStage>>,
}

impl EvaluationStage {
    pub fn leaf(kind: StageKind) -> Self {
        Self {
            kind,
            left: None,
            right: None,
        }
    }

    pub fn unary(symbol: OperatorSymbol, right: EvaluationStage) -> Self {
        Self {
            kind: StageKind::Operator(symbol),
            left: None,
            right: Some(Box::new(right)),
        }
    }

    pub fn binary(symbol: OperatorSymbol, left: EvaluationStage, right: EvaluationStage) -> Self {
        Self {
            kind: StageKind::Operator(symbol),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }
}
