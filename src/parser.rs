//! Tokenizer and syntax tree builder for chat markup.

mod delimiters;
mod tokenizer;
mod tree;


pub use delimiters::{DELIMITERS, Delimiter, try_parse_delimited};
pub use tokenizer::{Token, TokenKind, Tokenizer, tokenize};
pub use tree::parse;
