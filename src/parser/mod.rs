//! Parser module for ion.

mod backend;
mod core;
mod expressions;


pub use self::backend::Backend;
pub use self::core::{ParseResult, Parser, MAX_NESTING};
