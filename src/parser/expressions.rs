//! Expression grammar.
//!
//! ```text
//! expression := term
//! term       := factor (('+' | '-') factor)*
//! factor     := unary (('*' | '/') unary)*
//! unary      := ('-' | '+' | '~') unary | primary
//! primary    := INTEGER | '(' expression ')'
//! ```
//!
//! Binary operators are left-associative (loops); prefix operators nest to
//! the right (recursion).

use crate::lexer::TokenKind;
use crate::ops::{BinaryOp, UnaryOp};
use crate::parser::backend::Backend;
use crate::parser::core::{ParseResult, Parser};

impl<'a, B: Backend> Parser<'a, B> {
    pub(crate) fn expression(&mut self) -> ParseResult<B::Value> {
        self.term()
    }

    fn term(&mut self) -> ParseResult<B::Value> {
        let mut value = self.factor()?;

        while let Some(op) = BinaryOp::term(self.peek().kind) {
            let operator = self.advance();
            let right = self.factor()?;
            value = self.backend.binary(op, value, right, operator.span)?;
        }

        Ok(value)
    }

    fn factor(&mut self) -> ParseResult<B::Value> {
        let mut value = self.unary()?;

        while let Some(op) = BinaryOp::factor(self.peek().kind) {
            let operator = self.advance();
            let right = self.unary()?;
            value = self.backend.binary(op, value, right, operator.span)?;
        }

        Ok(value)
    }

    fn unary(&mut self) -> ParseResult<B::Value> {
        let Some(op) = UnaryOp::prefix(self.peek().kind) else {
            return self.primary();
        };

        self.enter()?;
        let operator = self.advance();
        let operand = self.unary();
        self.leave();

        self.backend.unary(op, operand?, operator.span)
    }

    fn primary(&mut self) -> ParseResult<B::Value> {
        let token = self.peek();

        match token.kind {
            TokenKind::Int(value) => {
                self.advance();
                self.backend.literal(value, token.span)
            }
            TokenKind::Punct(b'(') => {
                self.enter()?;
                self.advance();
                let value = self.expression();
                self.leave();

                let value = value?;
                self.expect(TokenKind::Punct(b')'))?;
                Ok(value)
            }
            _ => Err(self.unexpected("integer or '('")),
        }
    }
}
