//! Output strategies for the parser.
//!
//! The grammar is written once in [`Parser`](super::Parser). What a
//! production produces is up to the backend: the direct evaluator folds every
//! production into an `i32`, the bytecode compiler appends instructions and
//! produces `()`.
//!
//! Callbacks fire in postfix order: operands are always reported before the
//! operator that consumes them.

use crate::error::IonError;
use crate::ops::{BinaryOp, UnaryOp};
use crate::span::Span;

pub trait Backend {
    /// What each production yields.
    type Value;

    /// An integer literal.
    fn literal(&mut self, value: i32, span: Span) -> Result<Self::Value, IonError>;

    /// A prefix operator applied to an already produced operand.
    fn unary(
        &mut self,
        op: UnaryOp,
        operand: Self::Value,
        span: Span,
    ) -> Result<Self::Value, IonError>;

    /// A binary operator applied to two already produced operands. `span`
    /// covers the operator token.
    fn binary(
        &mut self,
        op: BinaryOp,
        left: Self::Value,
        right: Self::Value,
        span: Span,
    ) -> Result<Self::Value, IonError>;
}
