use ecow::EcoString;
use regex::Regex;

use crate::compiler::OperatorSymbol;
use crate::parser::error::{CompileError, CompileErrorKind};
use crate::parser::token::{Span, Token, TokenKind};
use crate::values::Value;

/// Scans expression source text into an ordered token sequence.
///
/// The lexer owns no semantics beyond lexical classification and literal
/// parsing. The one piece of context it tracks is whether the next token
/// sits in operand position, which disambiguates `/…/` pattern literals
/// from division.
pub(crate) struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    tokens: Vec<Token>,
    expect_operand: bool,
}

impl<'src> Lexer<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
            expect_operand: true,
        }
    }

    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump(ch);
                continue;
            }
            let start = self.pos;
            match ch {
                '0'..='9' => self.number(start)?,
                '\'' | '"' => self.string(start, ch)?,
                '/' if self.expect_operand => self.pattern(start)?,
                '(' => {
                    self.bump(ch);
                    self.push(TokenKind::ClauseOpen, start);
                }
                ')' => {
                    self.bump(ch);
                    self.push(TokenKind::ClauseClose, start);
                }
                c if c.is_ascii_alphabetic() || c == '_' => self.word(start),
                _ => self.operator(start, ch)?,
            }
        }
        Ok(self.tokens)
    }

    fn number(&mut self, start: usize) -> Result<(), CompileError> {
        self.digits();
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.bump('.');
            self.digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump('e');
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump('+');
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.error(CompileErrorKind::InvalidNumber(self.text_from(start)), start));
            }
            self.digits();
        }
        let text = &self.source[start..self.pos];
        let value: f64 = text
            .parse()
            .map_err(|_| self.error(CompileErrorKind::InvalidNumber(text.to_string()), start))?;
        self.push(TokenKind::Literal(Value::Number(value)), start);
        Ok(())
    }

    fn string(&mut self, start: usize, quote: char) -> Result<(), CompileError> {
        self.bump(quote);
        let mut text = EcoString::new();
        loop {
            let Some(ch) = self.peek() else {
                return Err(self.error(CompileErrorKind::UnterminatedString, start));
            };
            self.bump(ch);
            match ch {
                '\\' => {
                    let Some(escaped) = self.peek() else {
                        return Err(self.error(CompileErrorKind::UnterminatedString, start));
                    };
                    self.bump(escaped);
                    match escaped {
                        'n' => text.push('\n'),
                        't' => text.push('\t'),
                        'r' => text.push('\r'),
                        other => text.push(other),
                    }
                }
                c if c == quote => break,
                other => text.push(other),
            }
        }
        self.push(TokenKind::Literal(Value::Str(text)), start);
        Ok(())
    }

    fn pattern(&mut self, start: usize) -> Result<(), CompileError> {
        self.bump('/');
        let mut text = String::new();
        loop {
            let Some(ch) = self.peek() else {
                return Err(self.error(CompileErrorKind::UnterminatedPattern, start));
            };
            self.bump(ch);
            match ch {
                '\\' => {
                    let Some(escaped) = self.peek() else {
                        return Err(self.error(CompileErrorKind::UnterminatedPattern, start));
                    };
                    self.bump(escaped);
                    // An escaped delimiter drops the backslash; every other
                    // escape belongs to the pattern itself.
                    if escaped == '/' {
                        text.push('/');
                    } else {
                        text.push('\\');
                        text.push(escaped);
                    }
                }
                '/' => break,
                other => text.push(other),
            }
        }
        let pattern = Regex::new(&text)
            .map_err(|e| self.error(CompileErrorKind::InvalidPattern(e.to_string()), start))?;
        self.push(TokenKind::Literal(Value::pattern(pattern)), start);
        Ok(())
    }

    fn word(&mut self, start: usize) {
        let first = self.identifier();
        match first.as_str() {
            "true" => return self.push(TokenKind::Literal(Value::Bool(true)), start),
            "false" => return self.push(TokenKind::Literal(Value::Bool(false)), start),
            "null" => return self.push(TokenKind::Literal(Value::Null), start),
            "in" => return self.push(TokenKind::Operator(OperatorSymbol::In), start),
            _ => {}
        }
        let mut path = vec![first];
        while self.peek() == Some('.')
            && self
                .peek_second()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        {
            self.bump('.');
            path.push(self.identifier());
        }
        if path.len() > 1 {
            self.push(TokenKind::Accessor(path), start);
        } else if self.peek() == Some('(') {
            self.push(TokenKind::Function(path.remove(0)), start);
        } else {
            self.push(TokenKind::Identifier(path.remove(0)), start);
        }
    }

    fn operator(&mut self, start: usize, first: char) -> Result<(), CompileError> {
        use OperatorSymbol::*;
        let two: &[(&str, OperatorSymbol)] = &[
            ("**", Exponent),
            ("==", Equal),
            ("!=", NotEqual),
            ("<=", LessOrEqual),
            (">=", GreaterOrEqual),
            ("<<", LeftShift),
            (">>", RightShift),
            ("&&", And),
            ("||", Or),
            ("=~", RegexMatch),
            ("!~", NotRegexMatch),
            ("??", Coalesce),
        ];
        for (text, symbol) in two {
            if self.source[self.pos..].starts_with(text) {
                self.pos += 2;
                self.push(TokenKind::Operator(*symbol), start);
                return Ok(());
            }
        }
        let symbol = match first {
            '+' => Add,
            '-' => Subtract,
            '*' => Multiply,
            '/' => Divide,
            '%' => Modulus,
            '&' => BitwiseAnd,
            '|' => BitwiseOr,
            '^' => BitwiseXor,
            '~' => BitwiseNot,
            '!' => Invert,
            '<' => LessThan,
            '>' => GreaterThan,
            '?' => TernaryTrue,
            ':' => TernaryFalse,
            ',' => Separator,
            other => {
                return Err(self.error(CompileErrorKind::UnexpectedCharacter(other), start));
            }
        };
        self.bump(first);
        self.push(TokenKind::Operator(symbol), start);
        Ok(())
    }

    fn identifier(&mut self) -> EcoString {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.pos += 1;
        }
        self.source[start..self.pos].into()
    }

    fn digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self, _hint: char) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn text_from(&self, start: usize) -> String {
        self.source[start..self.pos].to_string()
    }

    fn error(&self, kind: CompileErrorKind, start: usize) -> CompileError {
        CompileError::new(kind, Span(start..self.pos.max(start + 1)))
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.expect_operand = matches!(kind, TokenKind::Operator(_) | TokenKind::ClauseOpen);
        self.tokens.push(Token {
            kind,
            span: Span(start..self.pos),
        });
    }
}
