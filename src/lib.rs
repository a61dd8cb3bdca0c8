pub mod config;
pub mod host;
pub mod parser;
pub mod renderer;
pub mod syntax;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::EscapePolicy;
pub use parser::{Token, TokenKind, parse, tokenize};
pub use renderer::Renderer;
pub use syntax::SyntaxNode;

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders a chat message's inline markup to HTML with the default config.
///
/// Supports `_emphasis_`, `*strong*`, `` `code` `` and `~strike~`. Markup
/// only opens at the start of a word, so usernames and URLs containing the
/// delimiter characters are left alone. Unterminated markup is kept as
/// literal text; this function never fails.
///
/// # Examples
///
/// ```rust
/// use chatmark::render;
///
/// assert_eq!(render("_hi_ @_user_"), "<em>hi</em> @_user_");
/// ```
pub fn render(input: &str) -> String {
    Renderer::default().render(input)
}
