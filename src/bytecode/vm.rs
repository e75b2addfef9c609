//! Stack-based virtual machine for executing bytecode.

use tracing::{debug, trace};

use crate::bytecode::chunk::Chunk;
use crate::bytecode::instruction::OpCode;
use crate::error::RuntimeError;
use crate::ops::{BinaryOp, UnaryOp};

/// Maximum stack size.
pub const STACK_MAX: usize = 1024;

/// Result type for VM operations.
pub type VMResult<T> = Result<T, RuntimeError>;

/// The virtual machine: an instruction pointer and a fixed-size operand
/// stack. There are no jumps, so execution is one straight pass.
pub struct VM {
    stack: [i32; STACK_MAX],
    /// Number of live stack slots.
    top: usize,
    /// Offset of the next byte to fetch.
    ip: usize,
    /// Offset of the instruction being executed, for diagnostics.
    op_start: usize,
}

impl VM {
    pub fn new() -> Self {
        Self {
            stack: [0; STACK_MAX],
            top: 0,
            ip: 0,
            op_start: 0,
        }
    }

    /// Run a program to its `HLT` and return the value it pops.
    pub fn run(&mut self, chunk: &Chunk) -> VMResult<i32> {
        // Reset execution state
        self.top = 0;
        self.ip = 0;
        self.op_start = 0;

        let result = self.execute(chunk);
        match &result {
            Ok(value) => debug!(value, ip = self.ip, "vm halted"),
            Err(err) => debug!(%err, "vm faulted"),
        }
        result
    }

    /// Main execution loop.
    fn execute(&mut self, chunk: &Chunk) -> VMResult<i32> {
        loop {
            self.op_start = self.ip;
            let byte = self.read_byte(chunk)?;
            let opcode = OpCode::from_u8(byte).ok_or(RuntimeError::UnknownOpcode {
                byte,
                offset: self.op_start,
            })?;
            trace!(
                offset = self.op_start,
                op = opcode.mnemonic(),
                depth = self.top,
                "dispatch"
            );

            match opcode {
                OpCode::Add => self.binary_op(chunk, BinaryOp::Add)?,
                OpCode::Sub => self.binary_op(chunk, BinaryOp::Subtract)?,
                OpCode::Mul => self.binary_op(chunk, BinaryOp::Multiply)?,
                OpCode::Div => self.binary_op(chunk, BinaryOp::Divide)?,

                OpCode::Pos => self.unary_op(UnaryOp::Plus)?,
                OpCode::Neg => self.unary_op(UnaryOp::Negate)?,
                OpCode::Not => self.unary_op(UnaryOp::Not)?,

                OpCode::Lit => {
                    let value = self.read_u32(chunk)? as i32;
                    self.push(value)?;
                }

                OpCode::Hlt => return self.pop(),
            }
        }
    }

    fn read_byte(&mut self, chunk: &Chunk) -> VMResult<u8> {
        let byte = chunk
            .code()
            .get(self.ip)
            .copied()
            .ok_or(RuntimeError::UnexpectedEndOfCode { offset: self.ip })?;
        self.ip += 1;
        Ok(byte)
    }

    fn read_u32(&mut self, chunk: &Chunk) -> VMResult<u32> {
        let value = chunk
            .read_u32(self.ip)
            .ok_or(RuntimeError::UnexpectedEndOfCode { offset: self.ip })?;
        self.ip += 4;
        Ok(value)
    }

    fn push(&mut self, value: i32) -> VMResult<()> {
        if self.top >= STACK_MAX {
            return Err(RuntimeError::StackOverflow {
                offset: self.op_start,
            });
        }
        self.stack[self.top] = value;
        self.top += 1;
        Ok(())
    }

    fn pop(&mut self) -> VMResult<i32> {
        if self.top == 0 {
            return Err(RuntimeError::StackUnderflow {
                offset: self.op_start,
            });
        }
        self.top -= 1;
        Ok(self.stack[self.top])
    }

    fn binary_op(&mut self, chunk: &Chunk, op: BinaryOp) -> VMResult<()> {
        let b = self.pop()?;
        let a = self.pop()?;
        let result = op
            .apply(a, b)
            .ok_or_else(|| RuntimeError::division_by_zero(chunk.span_at(self.op_start)))?;
        self.push(result)
    }

    fn unary_op(&mut self, op: UnaryOp) -> VMResult<()> {
        let value = self.pop()?;
        self.push(op.apply(value))
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}
