//! Syntax kinds and language definition for the chat markup CST.

use rowan::Language;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    WHITESPACE = 0,
    TEXT,
    EMPHASIS_MARKER, // _
    STRONG_MARKER,   // *
    CODE_MARKER,     // `
    STRIKE_MARKER,   // ~
    CODE_CONTENT,    // raw text inside a code span

    // Composite nodes
    EMPHASIS, // _text_
    STRONG,   // *text*
    CODE,     // `text`
    STRIKE,   // ~text~
    MESSAGE,
}

impl SyntaxKind {
    /// Whether this kind is one of the four span nodes.
    pub fn is_span(self) -> bool {
        matches!(
            self,
            SyntaxKind::EMPHASIS | SyntaxKind::STRONG | SyntaxKind::CODE | SyntaxKind::STRIKE
        )
    }

    pub fn is_marker(self) -> bool {
        matches!(
            self,
            SyntaxKind::EMPHASIS_MARKER
                | SyntaxKind::STRONG_MARKER
                | SyntaxKind::CODE_MARKER
                | SyntaxKind::STRIKE_MARKER
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChatLanguage {}

impl Language for ChatLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::MESSAGE as u16);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<ChatLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ChatLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ChatLanguage>;
