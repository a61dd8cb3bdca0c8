use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(author, version)]
#[command(about = "Render _italic_, *bold*, ~strike~ and `code` chat markup to HTML")]
#[command(
    long_about = "Chatmark applies Slack/reddit-like inline markup to chat messages. It \
    understands _italic_, *bold*, ~strike~ and `code`, and leaves usernames and URLs that \
    happen to contain those characters alone."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a message from stdin
    echo 'hello _world_' | chatmark render

    # Escape HTML in message text
    chatmark render --escape-html message.txt

    # Inspect tokens or the syntax tree
    chatmark tokens --json message.txt
    chatmark parse message.txt

    # Print the CSS rule for strikethrough spans
    chatmark css

CONFIGURATION:

Chatmark looks for configuration files in this order:
  1. Explicit --config path
  2. chatmark.toml or .chatmark.toml in current/parent directories
  3. ~/.config/chatmark/config.toml (XDG)
  4. Built-in defaults

Example .chatmark.toml:

    strike_class = \"markup-strike\"
    escape = \"html\"
    message_kinds = [\"message\", \"emote\", \"mention\"]")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, chatmark will \
        search for .chatmark.toml or chatmark.toml in the current directory and its parents, \
        then fall back to ~/.config/chatmark/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a chat message to HTML
    #[command(
        long_about = "Render a chat message to HTML. Reads the file, or stdin if no file is \
        given, and writes the rendered message to stdout. Whitespace is preserved exactly."
    )]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Escape HTML-significant characters in message text
        #[arg(long)]
        #[arg(
            long_help = "Escape & < > \" and ' in literal and code text, overriding the \
            configured escape policy. Use this when the message comes from an untrusted source."
        )]
        escape_html: bool,
    },
    /// Print the token stream for debugging
    Tokens {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse and display the syntax tree for debugging
    #[command(
        long_about = "Parse a message and display its concrete syntax tree. The tree shows \
        every span and its delimiters, and always reproduces the input exactly."
    )]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Print the CSS rule for strikethrough spans
    Css,
}
