//! Interpreter module for ion: evaluation straight from the token stream.

pub mod evaluator;

pub use evaluator::{Evaluator, EvalResult};
