//! Bytecode compiler: emits stack-machine code while parsing.

use tracing::debug;

use crate::bytecode::chunk::Chunk;
use crate::bytecode::instruction::OpCode;
use crate::error::IonError;
use crate::lexer::{ScanOptions, Scanner};
use crate::ops::{BinaryOp, UnaryOp};
use crate::parser::{Backend, Parser};
use crate::span::Span;
use crate::symbol::SymbolTable;

pub type CompileResult<T> = Result<T, IonError>;

/// Parser backend that appends instructions to a [`Chunk`].
///
/// Operands are emitted before their operator, so the code is already in
/// the order a stack machine consumes it.
#[derive(Debug, Default)]
pub struct Compiler {
    chunk: Chunk,
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            chunk: Chunk::new(),
        }
    }

    /// Compile `source` into a complete program ending in `HLT`.
    pub fn compile(source: &str, options: ScanOptions) -> CompileResult<Chunk> {
        let mut symbols = SymbolTable::new();
        let scanner = Scanner::with_options(source, &mut symbols, options);
        let mut parser = Parser::new(scanner, Compiler::new());
        parser.parse()?;

        // HLT sits where parsing stopped, which is not always the end.
        let end = Span::at(parser.current_span().start);
        let chunk = parser.into_backend().finish(end)?;
        debug!(bytes = chunk.len(), "compiled expression");
        Ok(chunk)
    }

    /// Terminate the program with `HLT` and hand it over.
    pub fn finish(mut self, span: Span) -> CompileResult<Chunk> {
        self.chunk.write_op(OpCode::Hlt, span)?;
        Ok(self.chunk)
    }
}

impl Backend for Compiler {
    type Value = ();

    fn literal(&mut self, value: i32, span: Span) -> CompileResult<()> {
        self.chunk.write_op(OpCode::Lit, span)?;
        self.chunk.write_i32(value, span)?;
        Ok(())
    }

    fn unary(&mut self, op: UnaryOp, _operand: (), span: Span) -> CompileResult<()> {
        self.chunk.write_op(op.into(), span)?;
        Ok(())
    }

    fn binary(&mut self, op: BinaryOp, _left: (), _right: (), span: Span) -> CompileResult<()> {
        self.chunk.write_op(op.into(), span)?;
        Ok(())
    }
}
