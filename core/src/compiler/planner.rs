use smallvec::SmallVec;

use crate::compiler::stage::{EvaluationStage, OperatorSymbol, StageKind};
use crate::compiler::FunctionRegistry;
use crate::parser::{CompileError, CompileErrorKind, Span, Token, TokenKind};

// Most expressions nest shallowly; both stacks usually stay inline.
type StageStack = SmallVec<[EvaluationStage; 8]>;
type OperatorStack = SmallVec<[(OperatorSymbol, Span); 8]>;

/// Operator-precedence stage-tree builder.
///
/// Walks the token stream once, keeping an output stack of finished stages
/// and a stack of pending operators. Operands push a leaf stage; each
/// operator first folds every pending operator that binds at least as
/// tightly (strictly tighter for right-associative operators), then waits on
/// the stack itself. Parenthesized clauses recurse.
pub(crate) struct Planner<'a> {
    tokens: &'a [Token],
    pos: usize,
    functions: &'a FunctionRegistry,
}

impl<'a> Planner<'a> {
    pub(crate) fn new(tokens: &'a [Token], functions: &'a FunctionRegistry) -> Self {
        Self {
            tokens,
            pos: 0,
            functions,
        }
    }

    pub(crate) fn plan(mut self) -> Result<EvaluationStage, CompileError> {
        let root = self.plan_clause(0)?;
        root.ok_or_else(|| CompileError::new(CompileErrorKind::EmptyExpression, Span(0..0)))
    }

    /// Build one clause. At `depth` 0 the clause ends at the end of input;
    /// deeper clauses end at their matching `)`. Returns `None` for an empty
    /// clause, which only a zero-argument call may produce.
    fn plan_clause(&mut self, depth: usize) -> Result<Option<EvaluationStage>, CompileError> {
        let mut output = StageStack::new();
        let mut operators = OperatorStack::new();
        let mut last_was_operand = false;
        let end_span;

        loop {
            let Some(token) = self.next() else {
                if depth > 0 {
                    let at = self.end_of_input();
                    return Err(CompileError::new(CompileErrorKind::UnbalancedClause, at));
                }
                end_span = self.end_of_input();
                break;
            };
            let span = token.span.clone();
            match &token.kind {
                TokenKind::ClauseClose => {
                    if depth == 0 {
                        return Err(CompileError::new(CompileErrorKind::UnbalancedClause, span));
                    }
                    end_span = span;
                    break;
                }
                TokenKind::ClauseOpen => {
                    self.expect_operand_position(last_was_operand, &token.kind, &span)?;
                    match self.plan_clause(depth + 1)? {
                        Some(stage) => output.push(stage),
                        None => {
                            return Err(CompileError::new(CompileErrorKind::EmptyExpression, span));
                        }
                    }
                    last_was_operand = true;
                }
                TokenKind::Literal(value) => {
                    self.expect_operand_position(last_was_operand, &token.kind, &span)?;
                    output.push(EvaluationStage::leaf(StageKind::Literal(value.clone())));
                    last_was_operand = true;
                }
                TokenKind::Identifier(name) => {
                    self.expect_operand_position(last_was_operand, &token.kind, &span)?;
                    output.push(EvaluationStage::leaf(StageKind::Parameter(name.clone())));
                    last_was_operand = true;
                }
                TokenKind::Function(name) => {
                    self.expect_operand_position(last_was_operand, &token.kind, &span)?;
                    let Some(callable) = self.functions.get(name) else {
                        return Err(CompileError::new(
                            CompileErrorKind::UnknownFunction(name.to_string()),
                            span,
                        ));
                    };
                    let kind = StageKind::Function {
                        name: name.clone(),
                        callable: callable.clone(),
                    };
                    let arguments = self.call_clause(depth, &span)?;
                    output.push(EvaluationStage {
                        kind,
                        left: None,
                        right: arguments.map(Box::new),
                    });
                    last_was_operand = true;
                }
                TokenKind::Accessor(path) => {
                    self.expect_operand_position(last_was_operand, &token.kind, &span)?;
                    let path = path.clone();
                    let call = matches!(
                        self.peek().map(|t| &t.kind),
                        Some(TokenKind::ClauseOpen)
                    );
                    let arguments = if call {
                        self.call_clause(depth, &span)?
                    } else {
                        None
                    };
                    output.push(EvaluationStage {
                        kind: StageKind::Accessor { path, call },
                        left: None,
                        right: arguments.map(Box::new),
                    });
                    last_was_operand = true;
                }
                TokenKind::Operator(symbol) => {
                    let symbol = self.resolve_position(*symbol, last_was_operand, &span)?;
                    while let Some(&(pending, _)) = operators.last() {
                        let fold = if symbol.is_right_associative() {
                            pending.precedence() > symbol.precedence()
                        } else {
                            pending.precedence() >= symbol.precedence()
                        };
                        if !fold {
                            break;
                        }
                        let (pending, pending_span) = operators
                            .pop()
                            .expect("operator stack is non-empty inside the fold loop");
                        Self::combine(&mut output, pending, &pending_span)?;
                    }
                    operators.push((symbol, span));
                    last_was_operand = false;
                }
            }
        }

        if !last_was_operand {
            if let Some((pending, pending_span)) = operators.last() {
                let kind = if *pending == OperatorSymbol::Separator {
                    CompileErrorKind::DanglingSeparator
                } else {
                    CompileErrorKind::MissingOperand(pending.to_string())
                };
                return Err(CompileError::new(kind, pending_span.clone()));
            }
        }
        while let Some((pending, pending_span)) = operators.pop() {
            Self::combine(&mut output, pending, &pending_span)?;
        }

        match output.len() {
            0 => Ok(None),
            1 => Ok(output.pop()),
            _ => Err(CompileError::new(
                CompileErrorKind::UnexpectedToken(output[1].kind_text()),
                end_span,
            )),
        }
    }

    /// Parse the parenthesized argument clause of a function or method call.
    fn call_clause(
        &mut self,
        depth: usize,
        call_span: &Span,
    ) -> Result<Option<EvaluationStage>, CompileError> {
        match self.next().map(|t| t.kind) {
            Some(TokenKind::ClauseOpen) => self.plan_clause(depth + 1),
            Some(other) => Err(CompileError::new(
                CompileErrorKind::UnexpectedToken(other.to_string()),
                call_span.clone(),
            )),
            None => Err(CompileError::new(
                CompileErrorKind::UnbalancedClause,
                self.end_of_input(),
            )),
        }
    }

    /// Disambiguate unary prefixes from binary forms by parser position.
    fn resolve_position(
        &self,
        symbol: OperatorSymbol,
        last_was_operand: bool,
        span: &Span,
    ) -> Result<OperatorSymbol, CompileError> {
        if last_was_operand {
            if symbol.is_unary_prefix() {
                return Err(CompileError::new(
                    CompileErrorKind::UnexpectedToken(symbol.to_string()),
                    span.clone(),
                ));
            }
            return Ok(symbol);
        }
        match symbol {
            OperatorSymbol::Subtract => Ok(OperatorSymbol::Negate),
            s if s.is_unary_prefix() => Ok(s),
            other => Err(CompileError::new(
                CompileErrorKind::MissingOperand(other.to_string()),
                span.clone(),
            )),
        }
    }

    fn combine(
        output: &mut StageStack,
        symbol: OperatorSymbol,
        span: &Span,
    ) -> Result<(), CompileError> {
        let missing = || {
            CompileError::new(
                CompileErrorKind::MissingOperand(symbol.to_string()),
                span.clone(),
            )
        };
        if symbol.is_unary_prefix() {
            let right = output.pop().ok_or_else(missing)?;
            output.push(EvaluationStage::unary(symbol, right));
        } else {
            let right = output.pop().ok_or_else(missing)?;
            let left = output.pop().ok_or_else(missing)?;
            output.push(EvaluationStage::binary(symbol, left, right));
        }
        Ok(())
    }

    fn expect_operand_position(
        &self,
        last_was_operand: bool,
        kind: &TokenKind,
        span: &Span,
    ) -> Result<(), CompileError> {
        if last_was_operand {
            return Err(CompileError::new(
                CompileErrorKind::UnexpectedToken(kind.to_string()),
                span.clone(),
            ));
        }
        Ok(())
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn end_of_input(&self) -> Span {
        let end = self.tokens.last().map(|t| t.span.end()).unwrap_or(0);
        Span(end..end)
    }
}

impl EvaluationStage {
    fn kind_text(&self) -> String {
        match &self.kind {
            StageKind::Literal(value) => value.to_string(),
            StageKind::Parameter(name) => name.to_string(),
            StageKind::Function { name, .. } => name.to_string(),
            StageKind::Accessor { path, .. } => path.join("."),
            StageKind::Operator(symbol) => symbol.to_string(),
        }
    }
}
