//! Core parser struct and helper methods.

use crate::error::{IonError, ParserError};
use crate::lexer::{Scanner, Token, TokenKind};
use crate::parser::backend::Backend;
use crate::span::Span;

pub type ParseResult<T> = Result<T, IonError>;

/// Deepest allowed nesting of parentheses and prefix operators.
///
/// This is a resource limit, not part of the grammar: it bounds native
/// recursion while parsing, and keeps the compiled program well inside the
/// VM's operand stack.
pub const MAX_NESTING: usize = 256;

/// The parser for ion.
pub struct Parser<'a, B: Backend> {
    pub(crate) scanner: Scanner<'a>,
    pub(crate) backend: B,
    pub(crate) depth: usize,
}

impl<'a, B: Backend> Parser<'a, B> {
    pub fn new(scanner: Scanner<'a>, backend: B) -> Self {
        Self {
            scanner,
            backend,
            depth: 0,
        }
    }

    /// Parse one expression. Input after it is ignored unless the scanner
    /// was set up with `require_end`.
    pub fn parse(&mut self) -> ParseResult<B::Value> {
        let value = self.expression()?;
        if self.scanner.options().require_end {
            self.expect(TokenKind::Eof)?;
        }
        Ok(value)
    }

    /// Hand back the backend, e.g. to collect emitted code.
    pub fn into_backend(self) -> B {
        self.backend
    }

    // ===== Token manipulation =====

    pub(crate) fn advance(&mut self) -> Token {
        self.scanner.advance()
    }

    pub(crate) fn peek(&self) -> Token {
        self.scanner.token()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> IonError {
        let found = self.peek();
        ParserError::unexpected_token(expected, found.kind.to_string(), found.span).into()
    }

    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    // ===== Nesting =====

    pub(crate) fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParserError::NestingTooDeep {
                limit: MAX_NESTING,
                span: self.current_span(),
            }
            .into());
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}
