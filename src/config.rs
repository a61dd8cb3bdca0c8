use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::host::MessageKind;

/// Default CSS class attached to rendered strikethrough spans.
pub const DEFAULT_STRIKE_CLASS: &str = "markup-strike";

/// What to do with HTML-significant characters in message text.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EscapePolicy {
    /// Chat text is trusted and copied through unchanged.
    #[default]
    None,
    /// Escape `& < > " '` in literal and code text and in the strike class.
    Html,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Class on the `<span>` wrapping strikethrough text
    pub strike_class: String,
    pub escape: EscapePolicy,
    /// Message kinds the host adapter transforms; everything else passes through
    pub message_kinds: Vec<MessageKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strike_class: DEFAULT_STRIKE_CLASS.to_string(),
            escape: EscapePolicy::default(),
            message_kinds: MessageKind::markup_defaults().to_vec(),
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn strike_class(mut self, class: impl Into<String>) -> Self {
        self.config.strike_class = class.into();
        self
    }

    pub fn escape(mut self, policy: EscapePolicy) -> Self {
        self.config.escape = policy;
        self
    }

    pub fn message_kinds(mut self, kinds: impl IntoIterator<Item = MessageKind>) -> Self {
        self.config.message_kinds = kinds.into_iter().collect();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Project-level config names, looked up in every ancestor of the start dir.
const PROJECT_FILES: [&str; 2] = [".chatmark.toml", "chatmark.toml"];

impl Config {
    /// Parse config text. `origin` names the file in error messages.
    pub fn from_toml(text: &str, origin: &Path) -> io::Result<Self> {
        toml::from_str(text).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid config {}: {e}", origin.display()),
            )
        })
    }

    pub fn from_file(path: &Path) -> io::Result<Self> {
        log::debug!("Reading config from: {}", path.display());
        let config = Self::from_toml(&fs::read_to_string(path)?, path)?;
        log::info!("Loaded config from: {}", path.display());
        Ok(config)
    }
}

/// `$XDG_CONFIG_HOME/chatmark/config.toml`, then `~/.config/chatmark/config.toml`.
fn user_config_paths() -> impl Iterator<Item = PathBuf> {
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"));
    xdg.into_iter()
        .chain(home)
        .map(|base| base.join("chatmark").join("config.toml"))
}

/// First existing config file: nearest project file, then the user config.
fn discover(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .flat_map(|dir| PROJECT_FILES.iter().map(move |name| dir.join(name)))
        .chain(user_config_paths())
        .find(|path| path.is_file())
}

/// Load configuration from the explicit path if given, otherwise from
/// the nearest project file or user config, otherwise use the defaults.
///
/// A config file that exists but cannot be read or parsed is an error,
/// whether it was passed explicitly or discovered.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    let Some(path) = explicit
        .map(Path::to_path_buf)
        .or_else(|| discover(start_dir))
    else {
        log::debug!("No config file found, using defaults");
        return Ok((Config::default(), None));
    };

    let config = Config::from_file(&path)?;
    Ok((config, Some(path)))
}
