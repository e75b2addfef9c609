//! Token definitions for the ion lexer.

use std::fmt;

use crate::span::Span;
use crate::symbol::Symbol;

/// All token types in ion.
///
/// Punctuation is not enumerated: any byte that does not start a number or
/// a name becomes `Punct` carrying that byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input (or an embedded NUL byte).
    Eof,
    /// Decimal integer literal, wrapped to 32 bits.
    Int(i32),
    /// Identifier, interned.
    Name(Symbol),
    /// Any other single byte.
    Punct(u8),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Int(_) => write!(f, "integer"),
            TokenKind::Name(_) => write!(f, "name"),
            TokenKind::Punct(c) => write!(f, "{}", describe_byte(*c)),
        }
    }
}

/// Render a punctuation byte for diagnostics: `'+'`, or `<ASCII 9>` when
/// the byte is not printable.
pub fn describe_byte(c: u8) -> String {
    if c.is_ascii_graphic() || c == b' ' {
        format!("'{}'", c as char)
    } else {
        format!("<ASCII {}>", c)
    }
}

/// A token with its location in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, Span::at(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Eof.to_string(), "end of file");
        assert_eq!(TokenKind::Int(7).to_string(), "integer");
        assert_eq!(TokenKind::Punct(b')').to_string(), "')'");
        assert_eq!(TokenKind::Punct(b' ').to_string(), "' '");
        assert_eq!(TokenKind::Punct(b'\t').to_string(), "<ASCII 9>");
        assert_eq!(TokenKind::Punct(0xC3).to_string(), "<ASCII 195>");
    }
}
