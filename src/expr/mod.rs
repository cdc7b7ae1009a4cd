//! Infix expression evaluator.

pub mod eval;
pub mod lexer;

pub use eval::{evaluate, Evaluation, DEMO_EXPRESSIONS};
pub use lexer::{tokenize, Function, Operator, Token};
