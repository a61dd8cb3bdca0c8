//! Builds the lossless syntax tree from the token stream.

use rowan::GreenNodeBuilder;

use super::tokenizer::{TokenKind, Tokenizer};
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Parse a message into a syntax tree rooted at `MESSAGE`.
pub fn parse(input: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::MESSAGE.into());
    emit_inline(&mut builder, input);
    builder.finish_node();
    SyntaxNode::new_root(builder.finish())
}

/// Emit every token of `text`, recursing into span content.
fn emit_inline(builder: &mut GreenNodeBuilder, text: &str) {
    for token in Tokenizer::new(text) {
        match token.kind {
            TokenKind::Literal => emit_literal(builder, token.text),
            TokenKind::Code => emit_code(builder, token.text),
            kind => emit_span(builder, kind, token.text),
        }
    }
}

/// Split a literal into alternating TEXT and WHITESPACE tokens.
fn emit_literal(builder: &mut GreenNodeBuilder, text: &str) {
    let mut rest = text;
    while let Some(first) = rest.chars().next() {
        let is_space = first.is_whitespace();
        let len = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != is_space)
            .map_or(rest.len(), |(i, _)| i);
        let kind = if is_space {
            SyntaxKind::WHITESPACE
        } else {
            SyntaxKind::TEXT
        };
        builder.token(kind.into(), &rest[..len]);
        rest = &rest[len..];
    }
}

fn emit_span(builder: &mut GreenNodeBuilder, kind: TokenKind, inner: &str) {
    let (node, marker) = match kind {
        TokenKind::Emphasis => (SyntaxKind::EMPHASIS, SyntaxKind::EMPHASIS_MARKER),
        TokenKind::Strong => (SyntaxKind::STRONG, SyntaxKind::STRONG_MARKER),
        TokenKind::Strike => (SyntaxKind::STRIKE, SyntaxKind::STRIKE_MARKER),
        TokenKind::Code | TokenKind::Literal => unreachable!("not a recursive span: {kind:?}"),
    };
    let delim = kind.delimiter().map(String::from).unwrap_or_default();

    builder.start_node(node.into());
    builder.token(marker.into(), &delim);
    emit_inline(builder, inner);
    builder.token(marker.into(), &delim);
    builder.finish_node();
}

/// Code spans keep their content as a single raw token.
fn emit_code(builder: &mut GreenNodeBuilder, content: &str) {
    builder.start_node(SyntaxKind::CODE.into());
    builder.token(SyntaxKind::CODE_MARKER.into(), "`");
    builder.token(SyntaxKind::CODE_CONTENT.into(), content);
    builder.token(SyntaxKind::CODE_MARKER.into(), "`");
    builder.finish_node();
}
