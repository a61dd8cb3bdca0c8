//! Tokenizer for chat markup.
//!
//! Splits a message into literal words, whitespace runs and markup spans.
//! A span can only start at a token boundary, which keeps markup from
//! triggering in the middle of words, usernames (`@_user_`) or URLs
//! (`https://youtu.be/Yif_3Ryr_so`). A span may still end mid-word, as in
//! `_italic_things`.

use std::borrow::Cow;

use serde::Serialize;

use super::delimiters::{delimiter_for, try_parse_span};

/// What a token represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Text reproduced verbatim.
    Literal,
    /// `_text_`
    Emphasis,
    /// `*text*`
    Strong,
    /// `` `text` ``
    Code,
    /// `~text~`
    Strike,
}

impl TokenKind {
    pub fn is_span(self) -> bool {
        self != TokenKind::Literal
    }

    /// The delimiter character surrounding spans of this kind.
    pub fn delimiter(self) -> Option<char> {
        delimiter_for(self).map(|d| d.marker)
    }
}

/// A token produced by the tokenizer.
///
/// For literals `text` is the verbatim source. For spans it is the inner
/// text with both delimiters stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn literal(text: &'a str) -> Self {
        Self {
            kind: TokenKind::Literal,
            text,
        }
    }

    pub fn span(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// The source text this token was produced from, delimiters included.
    pub fn source(&self) -> Cow<'a, str> {
        match self.kind.delimiter() {
            Some(d) => Cow::Owned(format!("{d}{}{d}", self.text)),
            None => Cow::Borrowed(self.text),
        }
    }
}

/// Lazy tokenizer over a single message.
///
/// # Examples
///
/// ```
/// use chatmark::parser::{Token, TokenKind, Tokenizer};
///
/// let tokens: Vec<_> = Tokenizer::new("say _hi_").collect();
/// assert_eq!(tokens[1], Token::span(TokenKind::Emphasis, "hi"));
/// ```
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// Set after a word or span; the next call first eats trailing whitespace.
    after_token: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            after_token: false,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume a span if one opens at the cursor.
    fn consume_span(&mut self) -> Option<Token<'a>> {
        let (kind, len, inner) = try_parse_span(self.remaining())?;
        self.pos += len;
        Some(Token::span(kind, inner))
    }

    /// Consume a word up to and including the next space after its first
    /// character, or the rest of the input if there is none.
    fn consume_word(&mut self) -> Token<'a> {
        let chunk = self.remaining();
        let first_len = chunk.chars().next().map_or(0, char::len_utf8);
        let len = chunk[first_len..]
            .find(' ')
            .map_or(chunk.len(), |k| first_len + k + 1);
        self.pos += len;
        Token::literal(&chunk[..len])
    }

    fn consume_whitespace(&mut self) -> Option<Token<'a>> {
        let chunk = self.remaining();
        let len = chunk
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map_or(chunk.len(), |(i, _)| i);
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(Token::literal(&chunk[..len]))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if std::mem::take(&mut self.after_token)
            && let Some(space) = self.consume_whitespace()
        {
            log::trace!("whitespace token at {}: {:?}", self.pos, space.text);
            return Some(space);
        }

        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let token = match self.consume_span() {
            Some(span) => span,
            None => self.consume_word(),
        };
        self.after_token = true;

        log::trace!("{:?} token at {}: {:?}", token.kind, start, token.text);
        Some(token)
    }
}

/// Tokenize a whole message.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Tokenizer::new(input).collect()
}
