//! CLI integration tests for chatmark.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, tokens, parse, css)
//! - Stdin/stdout handling
//! - Config discovery
//! - Exit codes

mod common;
mod parse;
mod render;
mod tokens;
