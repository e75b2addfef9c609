//! Direct evaluation: every production folds straight into an `i32`.

use tracing::debug;

use crate::error::{IonError, RuntimeError};
use crate::lexer::{ScanOptions, Scanner};
use crate::ops::{BinaryOp, UnaryOp};
use crate::parser::{Backend, Parser};
use crate::span::Span;
use crate::symbol::SymbolTable;

pub type EvalResult<T> = Result<T, IonError>;

/// Evaluates while parsing; no intermediate form is built.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Parse and evaluate `source` in one pass.
    pub fn evaluate(source: &str, options: ScanOptions) -> EvalResult<i32> {
        let mut symbols = SymbolTable::new();
        let scanner = Scanner::with_options(source, &mut symbols, options);
        let value = Parser::new(scanner, Evaluator::new()).parse()?;
        debug!(value, "evaluated expression");
        Ok(value)
    }
}

impl Backend for Evaluator {
    type Value = i32;

    fn literal(&mut self, value: i32, _span: Span) -> EvalResult<i32> {
        Ok(value)
    }

    fn unary(&mut self, op: UnaryOp, operand: i32, _span: Span) -> EvalResult<i32> {
        Ok(op.apply(operand))
    }

    fn binary(&mut self, op: BinaryOp, left: i32, right: i32, span: Span) -> EvalResult<i32> {
        op.apply(left, right)
            .ok_or_else(|| RuntimeError::division_by_zero(span).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn eval(source: &str) -> EvalResult<i32> {
        Evaluator::evaluate(source, ScanOptions::default())
    }

    #[test]
    fn test_simple_arithmetic() {
        assert_eq!(eval("1").unwrap(), 1);
        assert_eq!(eval("(1)").unwrap(), 1);
        assert_eq!(eval("-+1").unwrap(), -1);
        assert_eq!(eval("1-2-3").unwrap(), -4);
        assert_eq!(eval("2*3+4*5").unwrap(), 26);
        assert_eq!(eval("2*(3+4)*5").unwrap(), 70);
        assert_eq!(eval("2+-3").unwrap(), -1);
    }

    #[test]
    fn test_complement_and_truncation() {
        assert_eq!(eval("~1+1").unwrap(), -1);
        assert_eq!(eval("12*34+45/56+~25").unwrap(), 382);
        assert_eq!(eval("-7/2").unwrap(), -3);
    }

    #[test]
    fn test_division_by_zero() {
        let err = eval("1/0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        match err {
            IonError::Runtime(RuntimeError::DivisionByZero(span)) => {
                assert_eq!(span, Span::new(1, 2))
            }
            other => panic!("Expected division by zero, got {:?}", other),
        }
    }

    #[test]
    fn test_division_by_computed_zero() {
        assert_eq!(eval("8/(2-2)").unwrap_err().kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(eval("2147483647+1").unwrap(), i32::MIN);
        assert_eq!(eval("2147483648").unwrap(), i32::MIN);
        assert_eq!(eval("-2147483648/-1").unwrap(), i32::MIN);
    }
}
