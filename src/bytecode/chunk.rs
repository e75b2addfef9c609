//! Bytecode chunk: the compiled program.

use crate::buffer::Buf;
use crate::bytecode::instruction::OpCode;
use crate::error::AllocError;
use crate::span::Span;

/// A compiled program: opcode and operand bytes, plus where each byte came
/// from in the source.
///
/// Only `code` is part of the wire format; `spans` is debug information and
/// is empty for chunks built from raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    /// The bytecode instructions.
    code: Buf<u8>,
    /// Source spans for error reporting, parallel to `code`.
    spans: Buf<Span>,
}

impl Chunk {
    pub fn new() -> Self {
        Self {
            code: Buf::new(),
            spans: Buf::new(),
        }
    }

    /// Wrap bytecode produced elsewhere, e.g. read back from disk.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            code: Buf::from(bytes),
            spans: Buf::new(),
        }
    }

    /// Write an opcode to the chunk.
    pub fn write_op(&mut self, op: OpCode, span: Span) -> Result<(), AllocError> {
        self.write_byte(op.into(), span)
    }

    /// Write a raw byte to the chunk.
    pub fn write_byte(&mut self, byte: u8, span: Span) -> Result<(), AllocError> {
        self.code.push(byte)?;
        self.spans.push(span)
    }

    /// Write a 32-bit value to the chunk (little-endian).
    pub fn write_i32(&mut self, value: i32, span: Span) -> Result<(), AllocError> {
        let bytes = value.to_le_bytes();
        self.code.extend_from_slice(&bytes)?;
        self.spans.extend_from_slice(&[span; 4])
    }

    /// Read a little-endian 32-bit value at `offset`, if four bytes remain.
    pub fn read_u32(&self, offset: usize) -> Option<u32> {
        let end = offset.checked_add(4)?;
        let bytes = self.code.as_slice().get(offset..end)?;
        let mut word = [0u8; 4];
        word.copy_from_slice(bytes);
        Some(u32::from_le_bytes(word))
    }

    pub fn code(&self) -> &[u8] {
        self.code.as_slice()
    }

    /// Copy of the raw bytecode, suitable for writing out.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.code.as_slice().to_vec()
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Source span of the byte at `offset`, or the default span when the
    /// chunk carries no debug information.
    pub fn span_at(&self, offset: usize) -> Span {
        self.spans.get(offset).copied().unwrap_or_default()
    }

    /// Whether the chunk knows where its bytes came from.
    pub fn has_spans(&self) -> bool {
        !self.spans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_little_endian() {
        let mut chunk = Chunk::new();
        chunk.write_op(OpCode::Lit, Span::new(0, 3)).unwrap();
        chunk.write_i32(0x0403_0201, Span::new(0, 3)).unwrap();
        chunk.write_op(OpCode::Hlt, Span::at(3)).unwrap();

        assert_eq!(chunk.code(), &[7, 1, 2, 3, 4, 8]);
        assert_eq!(chunk.read_u32(1), Some(0x0403_0201));
        assert_eq!(chunk.span_at(2), Span::new(0, 3));
        assert_eq!(chunk.span_at(5), Span::at(3));
    }

    #[test]
    fn test_negative_literal_bit_pattern() {
        let mut chunk = Chunk::new();
        chunk.write_i32(-2, Span::default()).unwrap();
        assert_eq!(chunk.code(), &[0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(chunk.read_u32(0).map(|v| v as i32), Some(-2));
    }

    #[test]
    fn test_read_past_end() {
        let chunk = Chunk::from_bytes(vec![7, 1, 2]);
        assert_eq!(chunk.read_u32(1), None);
        assert_eq!(chunk.read_u32(usize::MAX), None);
        assert!(!chunk.has_spans());
        assert_eq!(chunk.span_at(0), Span::default());
    }
}
