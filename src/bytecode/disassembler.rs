//! Bytecode disassembler for debugging.
//!
//! ```text
//! 0000    0 LIT 12
//! 0005    3 LIT 34
//! 0010    2 MUL
//! 0011    5 HLT
//! ```
//!
//! Columns are the byte offset, the source offset the instruction came from
//! (`|` when unchanged from the previous line, omitted for chunks without
//! debug spans), the mnemonic and the literal operand.

use std::fmt::{self, Write};

use crate::bytecode::chunk::Chunk;
use crate::bytecode::instruction::OpCode;

/// Disassemble a chunk into human-readable output.
pub fn disassemble_chunk(chunk: &Chunk) -> String {
    chunk.to_string()
}

/// Disassemble the instruction at `offset`. Returns the offset of the next
/// one, or the chunk length once there is nothing left.
fn disassemble_instruction<W: Write>(
    chunk: &Chunk,
    offset: usize,
    output: &mut W,
) -> Result<usize, fmt::Error> {
    let Some(&byte) = chunk.code().get(offset) else {
        return Ok(chunk.len());
    };

    // Print offset
    write!(output, "{:04} ", offset)?;

    // Print source offset (or | if same as previous instruction)
    if chunk.has_spans() {
        let start = chunk.span_at(offset).start;
        if offset > 0 && start == chunk.span_at(offset - 1).start {
            write!(output, "   | ")?;
        } else {
            write!(output, "{:4} ", start)?;
        }
    }

    let Some(opcode) = OpCode::from_u8(byte) else {
        writeln!(output, "Unknown opcode {}", byte)?;
        return Ok(offset + 1);
    };

    match opcode {
        OpCode::Lit => match chunk.read_u32(offset + 1) {
            Some(value) => {
                writeln!(output, "{} {}", opcode.mnemonic(), value as i32)?;
                Ok(offset + 1 + opcode.operand_size())
            }
            None => {
                writeln!(output, "{} <truncated>", opcode.mnemonic())?;
                Ok(chunk.len())
            }
        },
        _ => {
            writeln!(output, "{}", opcode.mnemonic())?;
            Ok(offset + 1)
        }
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut offset = 0;

        while offset < self.len() {
            offset = disassemble_instruction(self, offset, f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::compiler::Compiler;
    use crate::lexer::ScanOptions;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_disassemble_compiled() {
        let chunk = Compiler::compile("12*34", ScanOptions::default()).unwrap();
        assert_eq!(
            disassemble_chunk(&chunk),
            "0000    0 LIT 12\n\
             0005    3 LIT 34\n\
             0010    2 MUL\n\
             0011    5 HLT\n"
        );
    }

    #[test]
    fn test_disassemble_negative_literal() {
        let chunk = Chunk::from_bytes(vec![7, 0xFE, 0xFF, 0xFF, 0xFF, 5, 8]);
        assert_eq!(
            disassemble_chunk(&chunk),
            "0000 LIT -2\n0005 NEG\n0006 HLT\n"
        );
    }

    #[test]
    fn test_disassemble_garbage() {
        let chunk = Chunk::from_bytes(vec![42, 7, 1]);
        assert_eq!(
            disassemble_chunk(&chunk),
            "0000 Unknown opcode 42\n0001 LIT <truncated>\n"
        );
    }

    #[test]
    fn test_offset_past_end() {
        let chunk = Chunk::from_bytes(vec![8]);
        let mut out = String::new();
        assert_eq!(disassemble_instruction(&chunk, 5, &mut out), Ok(1));
        assert_eq!(out, "");
        assert_eq!(disassemble_chunk(&Chunk::new()), "");
    }
}
