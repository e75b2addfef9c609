//! Bytecode module for the ion VM.
//!
//! The compiler emits postfix stack code while parsing, so no tree is ever
//! built. Programs can be written out with [`Chunk::to_bytes`] and read back
//! with [`Chunk::from_bytes`].
//!
//! # Architecture
//!
//! - `instruction`: OpCode definitions and the wire format
//! - `chunk`: Bytecode chunks with a source span side table
//! - `compiler`: Parser backend that emits bytecode
//! - `vm`: Stack-based virtual machine for executing bytecode
//! - `disassembler`: Debug output for bytecode inspection

pub mod chunk;
pub mod compiler;
pub mod disassembler;
pub mod instruction;
pub mod vm;

pub use chunk::Chunk;
pub use compiler::Compiler;
pub use disassembler::disassemble_chunk;
pub use instruction::OpCode;
pub use vm::{STACK_MAX, VM};
