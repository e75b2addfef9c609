//! Lexer/Scanner for ion source code.
//!
//! The scanner keeps one token of lookahead: [`Scanner::token`] is always the
//! next unconsumed token, and [`Scanner::advance`] hands it out and scans the
//! following one.

use tracing::trace;

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use crate::symbol::SymbolTable;

/// Scanner configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Skip ASCII whitespace between tokens. Off by default, in which case
    /// every space is a punctuation token of its own.
    pub skip_whitespace: bool,
    /// Reject anything left over after a complete expression. Off by
    /// default, in which case parsing stops after the expression and the
    /// rest of the input is ignored.
    pub require_end: bool,
}

/// The lexer transforms source code into a stream of tokens.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    token: Token,
    symbols: &'a mut SymbolTable,
    options: ScanOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, symbols: &'a mut SymbolTable) -> Self {
        Self::with_options(source, symbols, ScanOptions::default())
    }

    pub fn with_options(
        source: &'a str,
        symbols: &'a mut SymbolTable,
        options: ScanOptions,
    ) -> Self {
        let mut scanner = Self {
            source,
            pos: 0,
            token: Token::eof(0),
            symbols,
            options,
        };
        scanner.token = scanner.scan_token();
        scanner
    }

    /// The current lookahead token.
    pub fn token(&self) -> Token {
        self.token
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Consume the current token and scan the next one.
    pub fn advance(&mut self) -> Token {
        let previous = self.token;
        self.token = self.scan_token();
        previous
    }

    /// Scan all remaining tokens, ending with (and including) `Eof`.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.advance();
            tokens.push(token);
            if token.kind == TokenKind::Eof {
                break;
            }
        }

        tokens
    }

    fn scan_token(&mut self) -> Token {
        if self.options.skip_whitespace {
            self.skip_whitespace();
        }

        let start = self.pos;
        let Some(&c) = self.source.as_bytes().get(start) else {
            return Token::eof(start);
        };

        let kind = match c {
            // A NUL byte terminates the stream just like the end of input.
            0 => TokenKind::Eof,
            b'0'..=b'9' => self.scan_number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.scan_name(),
            _ => {
                self.pos += 1;
                TokenKind::Punct(c)
            }
        };

        let token = Token::new(kind, Span::new(start, self.pos));
        trace!(kind = ?token.kind, start, end = self.pos, "token");
        token
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Digits accumulate as `value * 10 + digit` in wrapping 32-bit
    /// arithmetic, so literals past `i32::MAX` wrap modulo 2^32.
    fn scan_number(&mut self) -> TokenKind {
        let mut value: i32 = 0;

        while let Some(c) = self.peek().filter(u8::is_ascii_digit) {
            value = value.wrapping_mul(10).wrapping_add(i32::from(c - b'0'));
            self.pos += 1;
        }

        TokenKind::Int(value)
    }

    fn scan_name(&mut self) -> TokenKind {
        let start = self.pos;

        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.pos += 1;
        }

        // Both ends sit next to ASCII bytes, so the slice is on char boundaries.
        let name = &self.source[start..self.pos];
        TokenKind::Name(self.symbols.intern(name))
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }
}
