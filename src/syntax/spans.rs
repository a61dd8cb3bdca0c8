//! Message and span AST node wrappers.

use super::ast::{children, tokens};
use super::{AstNode, SyntaxKind, SyntaxNode};
use crate::parser::TokenKind;
use rowan::NodeOrToken;

/// The root of a parsed chat message.
pub struct Message(SyntaxNode);

impl AstNode for Message {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::MESSAGE
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
            Some(Self(syntax))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl Message {
    /// Top-level spans, in source order.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        children(&self.0)
    }

    /// Whether the message contains no markup at all.
    pub fn is_plain(&self) -> bool {
        self.spans().next().is_none()
    }
}

/// An emphasis, strong, code or strike span.
pub struct Span(SyntaxNode);

impl AstNode for Span {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_span()
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
            Some(Self(syntax))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl Span {
    pub fn kind(&self) -> TokenKind {
        match self.0.kind() {
            SyntaxKind::EMPHASIS => TokenKind::Emphasis,
            SyntaxKind::STRONG => TokenKind::Strong,
            SyntaxKind::CODE => TokenKind::Code,
            SyntaxKind::STRIKE => TokenKind::Strike,
            kind => unreachable!("span wrapper around {kind:?}"),
        }
    }

    /// Source text between the two delimiters, nested markup included.
    pub fn inner_text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter(|child| match child {
                NodeOrToken::Token(t) => !t.kind().is_marker(),
                NodeOrToken::Node(_) => true,
            })
            .map(|child| child.to_string())
            .collect()
    }

    /// Spans nested directly inside this one. Always empty for code spans.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        children(&self.0)
    }

    /// Raw content of a code span.
    pub fn code(&self) -> Option<String> {
        if self.0.kind() != SyntaxKind::CODE {
            return None;
        }
        Some(
            tokens(&self.0, SyntaxKind::CODE_CONTENT)
                .map(|t| t.text().to_string())
                .collect(),
        )
    }
}
