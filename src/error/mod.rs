//! Error types for all phases.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::span::Span;

/// Buffer growth errors.
#[derive(Debug, Error)]
pub enum AllocError {
    #[error("Capacity overflow while reserving {requested} more elements")]
    CapacityOverflow { requested: usize },

    #[error("Allocation failed: {0}")]
    Reserve(#[from] TryReserveError),
}

/// Parser errors.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Expected {expected}, got {found} at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    /// The input is grammatical but exceeds the parser's nesting limit.
    /// Reported as a syntax error since nothing was produced.
    #[error("Expression nested deeper than {limit} levels at {span}")]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParserError {
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } => *span,
            Self::NestingTooDeep { span, .. } => *span,
        }
    }
}

/// Evaluation and VM errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Division by zero at {0}")]
    DivisionByZero(Span),

    #[error("Stack overflow at byte {offset}")]
    StackOverflow { offset: usize },

    #[error("Stack underflow at byte {offset}")]
    StackUnderflow { offset: usize },

    #[error("Unknown opcode {byte} at byte {offset}")]
    UnknownOpcode { byte: u8, offset: usize },

    #[error("Unexpected end of bytecode at byte {offset}")]
    UnexpectedEndOfCode { offset: usize },
}

impl RuntimeError {
    pub fn division_by_zero(span: Span) -> Self {
        Self::DivisionByZero(span)
    }
}

/// The five failure classes a caller can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Buffer growth could not obtain memory.
    Allocation,
    /// The token stream does not match the grammar.
    Syntax,
    /// Division by zero.
    Arithmetic,
    /// VM push beyond capacity or pop below empty.
    StackFault,
    /// Malformed bytecode: an unknown opcode or a truncated program.
    UnknownOpcode,
}

/// A unified error type for all phases.
#[derive(Debug, Error)]
pub enum IonError {
    #[error("Allocation error: {0}")]
    Alloc(#[from] AllocError),

    #[error("Syntax error: {0}")]
    Parser(#[from] ParserError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl IonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Alloc(_) => ErrorKind::Allocation,
            Self::Parser(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::DivisionByZero(_)) => ErrorKind::Arithmetic,
            Self::Runtime(RuntimeError::StackOverflow { .. })
            | Self::Runtime(RuntimeError::StackUnderflow { .. }) => ErrorKind::StackFault,
            Self::Runtime(RuntimeError::UnknownOpcode { .. })
            | Self::Runtime(RuntimeError::UnexpectedEndOfCode { .. }) => ErrorKind::UnknownOpcode,
        }
    }
}
