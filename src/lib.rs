//! ion: a tiny integer expression language.
//!
//! This is the library root that exports all modules.
//!
//! # Execution Modes
//!
//! One grammar, two ways to run it:
//! - **Direct evaluation**: the parser folds every production into a value
//! - **Bytecode VM**: the parser emits stack code, which the VM then runs
//!
//! Both produce the same value for every well-formed expression.

// Allow some clippy lints that are stylistic and not critical
#![allow(clippy::module_inception)]

pub mod buffer;
pub mod bytecode;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod ops;
pub mod parser;
pub mod span;
pub mod symbol;

use error::IonError;
use lexer::ScanOptions;

/// Execution mode for running ion expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Evaluate while parsing
    Evaluate,
    /// Compile to bytecode, then run it on the VM
    #[default]
    Bytecode,
}

/// Options for [`run_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mode: ExecutionMode,
    /// Skip whitespace between tokens instead of treating it as a token.
    pub skip_whitespace: bool,
    /// Reject input left over after the expression instead of ignoring it.
    pub require_end: bool,
}

impl Options {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            skip_whitespace: self.skip_whitespace,
            require_end: self.require_end,
        }
    }
}

/// Evaluate an expression directly.
pub fn evaluate(source: &str) -> Result<i32, IonError> {
    interpreter::Evaluator::evaluate(source, ScanOptions::default())
}

/// Compile an expression to bytecode without executing.
pub fn compile(source: &str) -> Result<bytecode::Chunk, IonError> {
    bytecode::Compiler::compile(source, ScanOptions::default())
}

/// Compile an expression and run it on a fresh VM.
pub fn compile_and_run(source: &str) -> Result<i32, IonError> {
    run_with_options(source, &Options::default())
}

/// Compile an expression to bytecode, scanning as `options` says.
pub fn compile_with_options(
    source: &str,
    options: &Options,
) -> Result<bytecode::Chunk, IonError> {
    bytecode::Compiler::compile(source, options.scan_options())
}

/// Run an expression with full control over execution options.
pub fn run_with_options(source: &str, options: &Options) -> Result<i32, IonError> {
    match options.mode {
        ExecutionMode::Evaluate => interpreter::Evaluator::evaluate(source, options.scan_options()),
        ExecutionMode::Bytecode => {
            let chunk = compile_with_options(source, options)?;
            let mut vm = bytecode::VM::new();
            Ok(vm.run(&chunk)?)
        }
    }
}

/// Disassemble compiled bytecode to a string.
pub fn disassemble(chunk: &bytecode::Chunk) -> String {
    bytecode::disassemble_chunk(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_scenarios_on_both_paths() {
        for (source, expected) in [("2*(3+4)*5", 70), ("12*34+45/56+~25", 382)] {
            assert_eq!(evaluate(source).unwrap(), expected, "evaluate {source}");
            assert_eq!(compile_and_run(source).unwrap(), expected, "vm {source}");
        }
    }

    #[test]
    fn test_error_kinds_on_both_paths() {
        assert_eq!(evaluate("(1").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(compile_and_run("(1").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(evaluate("1/0").unwrap_err().kind(), ErrorKind::Arithmetic);
        assert_eq!(compile_and_run("1/0").unwrap_err().kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_literal_wraps_on_both_paths() {
        assert_eq!(evaluate("2147483648").unwrap(), i32::MIN);
        assert_eq!(compile_and_run("2147483648").unwrap(), i32::MIN);
    }

    #[test]
    fn test_trailing_input_is_ignored_on_both_paths() {
        for source in ["1)", "1 +2", "1,2", "6*7)(8"] {
            let expected = if source.starts_with('6') { 42 } else { 1 };
            assert_eq!(evaluate(source).unwrap(), expected, "evaluate {source}");
            assert_eq!(compile_and_run(source).unwrap(), expected, "vm {source}");
        }
    }

    #[test]
    fn test_require_end_option() {
        for mode in [ExecutionMode::Evaluate, ExecutionMode::Bytecode] {
            let options = Options {
                mode,
                require_end: true,
                ..Options::default()
            };
            let err = run_with_options("1)", &options).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "{mode:?}");
            assert_eq!(run_with_options("1+2", &options).unwrap(), 3, "{mode:?}");
        }
    }

    #[test]
    fn test_whitespace_option() {
        assert_eq!(compile_and_run("1 + 2").unwrap(), 1);
        assert_eq!(compile_and_run("1+ 2").unwrap_err().kind(), ErrorKind::Syntax);

        let options = Options {
            skip_whitespace: true,
            ..Options::default()
        };
        assert_eq!(run_with_options(" 1 + 2 ", &options).unwrap(), 3);

        let options = Options {
            mode: ExecutionMode::Evaluate,
            skip_whitespace: true,
            ..Options::default()
        };
        assert_eq!(run_with_options("( 6 * 7 )", &options).unwrap(), 42);
    }

    #[test]
    fn test_compile_with_options() {
        let options = Options {
            skip_whitespace: true,
            ..Options::default()
        };
        let chunk = compile_with_options("6 * 7", &options).unwrap();
        assert_eq!(disassemble(&chunk).lines().count(), 4);
        assert_eq!(bytecode::VM::new().run(&chunk), Ok(42));
    }

    #[test]
    fn test_compiled_program_round_trips_through_bytes() {
        let chunk = compile("-(3-10)").unwrap();
        let restored = bytecode::Chunk::from_bytes(chunk.to_bytes());
        assert_eq!(bytecode::VM::new().run(&restored), Ok(7));
        assert!(disassemble(&restored).ends_with("HLT\n"));
    }
}
