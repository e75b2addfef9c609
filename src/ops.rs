//! Operators and their 32-bit semantics.
//!
//! Both the direct evaluator and the VM go through [`BinaryOp::apply`] and
//! [`UnaryOp::apply`], so the two execution paths cannot drift apart.
//! Arithmetic is two's-complement and wraps on overflow; division truncates
//! toward zero.

use std::fmt;

use crate::lexer::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// `+` and `-`, the loosest-binding level.
    pub fn term(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Punct(b'+') => Some(Self::Add),
            TokenKind::Punct(b'-') => Some(Self::Subtract),
            _ => None,
        }
    }

    /// `*` and `/`.
    pub fn factor(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Punct(b'*') => Some(Self::Multiply),
            TokenKind::Punct(b'/') => Some(Self::Divide),
            _ => None,
        }
    }

    /// Compute `left op right`. Returns `None` only for division by zero.
    pub fn apply(self, left: i32, right: i32) -> Option<i32> {
        match self {
            Self::Add => Some(left.wrapping_add(right)),
            Self::Subtract => Some(left.wrapping_sub(right)),
            Self::Multiply => Some(left.wrapping_mul(right)),
            // wrapping_div turns i32::MIN / -1 into i32::MIN instead of panicking
            Self::Divide if right == 0 => None,
            Self::Divide => Some(left.wrapping_div(right)),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Negate,
    Not,
}

impl UnaryOp {
    pub fn prefix(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Punct(b'+') => Some(Self::Plus),
            TokenKind::Punct(b'-') => Some(Self::Negate),
            TokenKind::Punct(b'~') => Some(Self::Not),
            _ => None,
        }
    }

    pub fn apply(self, operand: i32) -> i32 {
        match self {
            Self::Plus => operand,
            Self::Negate => operand.wrapping_neg(),
            Self::Not => !operand,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "~",
        };
        f.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(BinaryOp::Divide.apply(7, 2), Some(3));
        assert_eq!(BinaryOp::Divide.apply(-7, 2), Some(-3));
        assert_eq!(BinaryOp::Divide.apply(45, 56), Some(0));
        assert_eq!(BinaryOp::Divide.apply(1, 0), None);
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(BinaryOp::Add.apply(i32::MAX, 1), Some(i32::MIN));
        assert_eq!(BinaryOp::Subtract.apply(i32::MIN, 1), Some(i32::MAX));
        assert_eq!(BinaryOp::Multiply.apply(1 << 30, 4), Some(0));
        assert_eq!(BinaryOp::Divide.apply(i32::MIN, -1), Some(i32::MIN));
        assert_eq!(UnaryOp::Negate.apply(i32::MIN), i32::MIN);
    }

    #[test]
    fn test_unary() {
        assert_eq!(UnaryOp::Not.apply(25), -26);
        assert_eq!(UnaryOp::Plus.apply(-4), -4);
        assert_eq!(UnaryOp::Negate.apply(5), -5);
    }

    #[test]
    fn test_token_mapping() {
        assert_eq!(BinaryOp::term(TokenKind::Punct(b'-')), Some(BinaryOp::Subtract));
        assert_eq!(BinaryOp::term(TokenKind::Punct(b'*')), None);
        assert_eq!(BinaryOp::factor(TokenKind::Punct(b'/')), Some(BinaryOp::Divide));
        assert_eq!(UnaryOp::prefix(TokenKind::Punct(b'~')), Some(UnaryOp::Not));
        assert_eq!(UnaryOp::prefix(TokenKind::Int(1)), None);
    }
}
