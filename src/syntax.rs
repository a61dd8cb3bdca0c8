//! Syntax tree for chat markup.
//!
//! The tree is lossless: the text of the root node is always the exact input
//! that was parsed, delimiters included.

mod ast;
mod kind;
mod spans;

pub use ast::AstNode;
pub use kind::*;
pub use spans::{Message, Span};
