//! Bytecode instruction definitions for the ion VM.
//!
//! Wire format: one byte per opcode, using the discriminants below. `Lit` is
//! followed by a 4-byte little-endian operand holding the literal's two's
//! complement bit pattern. No other opcode has operands.

use crate::ops::{BinaryOp, UnaryOp};

/// Opcodes for the bytecode virtual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Pop right, pop left, push left + right
    Add = 0,
    /// Pop right, pop left, push left - right
    Sub = 1,
    /// Pop right, pop left, push left * right
    Mul = 2,
    /// Pop right, pop left, push left / right (truncating)
    Div = 3,
    /// Unary plus: pop and push back unchanged
    Pos = 4,
    /// Negate the top of stack
    Neg = 5,
    /// Bitwise complement of the top of stack
    Not = 6,
    /// Push a literal: LIT <value:u32 little-endian>
    Lit = 7,
    /// Pop the result and stop
    Hlt = 8,
}

impl OpCode {
    /// Get the number of operand bytes for this opcode.
    pub fn operand_size(self) -> usize {
        match self {
            OpCode::Lit => 4,
            _ => 0,
        }
    }

    /// Convert from u8 to OpCode.
    pub fn from_u8(byte: u8) -> Option<OpCode> {
        let op = match byte {
            0 => OpCode::Add,
            1 => OpCode::Sub,
            2 => OpCode::Mul,
            3 => OpCode::Div,
            4 => OpCode::Pos,
            5 => OpCode::Neg,
            6 => OpCode::Not,
            7 => OpCode::Lit,
            8 => OpCode::Hlt,
            _ => return None,
        };
        Some(op)
    }

    /// Upper-case assembler name.
    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Add => "ADD",
            OpCode::Sub => "SUB",
            OpCode::Mul => "MUL",
            OpCode::Div => "DIV",
            OpCode::Pos => "POS",
            OpCode::Neg => "NEG",
            OpCode::Not => "NOT",
            OpCode::Lit => "LIT",
            OpCode::Hlt => "HLT",
        }
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}

impl From<BinaryOp> for OpCode {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => OpCode::Add,
            BinaryOp::Subtract => OpCode::Sub,
            BinaryOp::Multiply => OpCode::Mul,
            BinaryOp::Divide => OpCode::Div,
        }
    }
}

impl From<UnaryOp> for OpCode {
    fn from(op: UnaryOp) -> Self {
        match op {
            UnaryOp::Plus => OpCode::Pos,
            UnaryOp::Negate => OpCode::Neg,
            UnaryOp::Not => OpCode::Not,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_roundtrip() {
        for i in 0..=OpCode::Hlt as u8 {
            let op = OpCode::from_u8(i).expect("valid opcode");
            assert_eq!(i, op as u8);
        }
    }

    #[test]
    fn test_invalid_opcode() {
        assert!(OpCode::from_u8(9).is_none());
        assert!(OpCode::from_u8(255).is_none());
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(OpCode::Lit.operand_size(), 4);
        assert_eq!(OpCode::Add.operand_size(), 0);
        assert_eq!(OpCode::Hlt.operand_size(), 0);
    }
}
