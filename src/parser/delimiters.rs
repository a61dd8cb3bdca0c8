//! Delimiter table for inline spans.
//!
//! Syntax: `_emphasis_`, `*strong*`, `` `code` ``, `~strike~`
//!
//! Rules:
//! - A span opens only at a token boundary (the start of the current chunk)
//! - The opening delimiter must not be doubled (`__` never opens)
//! - The closing delimiter is the next occurrence of the same character,
//!   which may lie past spaces or in the middle of a word
//! - Content is never empty

use super::TokenKind;

/// A span delimiter and the token kind it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: char,
    pub kind: TokenKind,
}

/// All delimiters, in the order they are tried at each token boundary.
pub const DELIMITERS: [Delimiter; 4] = [
    Delimiter {
        marker: '_',
        kind: TokenKind::Emphasis,
    },
    Delimiter {
        marker: '*',
        kind: TokenKind::Strong,
    },
    Delimiter {
        marker: '`',
        kind: TokenKind::Code,
    },
    Delimiter {
        marker: '~',
        kind: TokenKind::Strike,
    },
];

/// Look up the delimiter for a span kind. `None` for literals.
pub fn delimiter_for(kind: TokenKind) -> Option<Delimiter> {
    DELIMITERS.into_iter().find(|d| d.kind == kind)
}

/// Try to parse a `delim`-delimited span at the start of `text`.
/// Returns: (total_len, inner_content)
pub fn try_parse_delimited(text: &str, delim: Delimiter) -> Option<(usize, &str)> {
    let mut chars = text.chars();

    if chars.next() != Some(delim.marker) {
        return None;
    }

    // Doubled delimiter is never a span
    if chars.next() == Some(delim.marker) {
        return None;
    }

    let open_len = delim.marker.len_utf8();
    let end = open_len + text[open_len..].find(delim.marker)?;

    Some((end + delim.marker.len_utf8(), &text[open_len..end]))
}

/// Try every delimiter in priority order.
/// Returns: (kind, total_len, inner_content)
pub fn try_parse_span(text: &str) -> Option<(TokenKind, usize, &str)> {
    DELIMITERS.into_iter().find_map(|delim| {
        try_parse_delimited(text, delim).map(|(len, inner)| (delim.kind, len, inner))
    })
}
