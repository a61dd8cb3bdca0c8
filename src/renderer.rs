//! HTML rendering of chat markup.
//!
//! Rendering folds over the token stream. Literal text is copied through,
//! spans are wrapped in their tag around a recursive render of the inner text.
//! Code spans are the exception: their content is never rendered, so markup
//! inside backticks stays as typed.

use crate::config::{Config, EscapePolicy};
use crate::parser::{Token, TokenKind, tokenize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    strike_class: String,
    escape: EscapePolicy,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            strike_class: config.strike_class.clone(),
            escape: config.escape,
        }
    }

    /// Render a message to HTML.
    ///
    /// # Examples
    ///
    /// ```
    /// let html = chatmark::Renderer::default().render("*_x_*");
    /// assert_eq!(html, "<strong><em>x</em></strong>");
    /// ```
    pub fn render(&self, text: &str) -> String {
        tokenize(text)
            .into_iter()
            .fold(String::with_capacity(text.len()), |mut out, token| {
                self.push_token(&mut out, token);
                out
            })
    }

    fn push_token(&self, out: &mut String, token: Token<'_>) {
        match token.kind {
            TokenKind::Literal => self.push_text(out, token.text),
            TokenKind::Emphasis => wrap(out, "em", &self.render(token.text)),
            TokenKind::Strong => wrap(out, "strong", &self.render(token.text)),
            TokenKind::Code => {
                out.push_str("<code>");
                self.push_text(out, token.text);
                out.push_str("</code>");
            }
            TokenKind::Strike => {
                out.push_str("<span class=\"");
                self.push_text(out, &self.strike_class);
                out.push_str("\">");
                out.push_str(&self.render(token.text));
                out.push_str("</span>");
            }
        }
    }

    fn push_text(&self, out: &mut String, text: &str) {
        match self.escape {
            EscapePolicy::None => out.push_str(text),
            EscapePolicy::Html => escape_html(out, text),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

fn wrap(out: &mut String, tag: &str, inner: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_html(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
