//! AST node trait and support utilities.

use super::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Trait for typed AST node wrappers.
///
/// This provides type-safe access to syntax tree nodes with ergonomic APIs.
/// Pattern borrowed from rust-analyzer.
pub trait AstNode: Sized {
    /// Checks if a `SyntaxKind` can be cast to this node type.
    fn can_cast(kind: SyntaxKind) -> bool;

    /// Attempts to cast a `SyntaxNode` to this typed wrapper.
    fn cast(syntax: SyntaxNode) -> Option<Self>;

    /// Returns a reference to the underlying `SyntaxNode`.
    fn syntax(&self) -> &SyntaxNode;
}

/// Helper functions for accessing children.
pub(super) mod support {
    use super::{AstNode, SyntaxKind, SyntaxNode, SyntaxToken};

    /// Find all child nodes of a specific type.
    pub(crate) fn children<'a, N: AstNode + 'a>(
        node: &'a SyntaxNode,
    ) -> impl Iterator<Item = N> + 'a {
        node.children().filter_map(N::cast)
    }

    /// Find all direct tokens of a specific kind.
    pub(crate) fn tokens(
        node: &SyntaxNode,
        kind: SyntaxKind,
    ) -> impl Iterator<Item = SyntaxToken> + '_ {
        node.children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(move |it| it.kind() == kind)
    }
}

pub(super) use support::{children, tokens};
