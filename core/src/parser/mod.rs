//! Tokenizer for rebus expressions.
//!
//! [`tokenize`] scans source text left to right into spanned [`Token`]s:
//! numeric, string, boolean, and `/…/` pattern literals, identifiers and
//! dotted accessor paths, function names, operators (longest match first),
//! clause markers, and the argument separator. Lexical failures report the
//! offending byte span.

mod lexer;

pub mod error;
pub mod token;


pub use error::{CompileError, CompileErrorKind};
pub use token::{Span, Token, TokenKind};

/// Scan source text into an ordered token sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    lexer::Lexer::new(source).tokenize()
}
