//! Lexer module for ion.

pub mod scanner;
pub mod token;

pub use scanner::{ScanOptions, Scanner};
pub use token::{Token, TokenKind};
