//! Adapter between a chat host and the markup renderer.
//!
//! The host owns a [`MessageHooks`] registry and runs it on every incoming
//! message before display. [`ChatMarkup`] registers a hook that rewrites the
//! body of chat-like messages, and hands the host the CSS rule it needs for
//! strikethrough spans.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::renderer::Renderer;

/// The kind of an incoming message, as tagged by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    Message,
    /// `/me` style action
    Emote,
    /// Message that mentions the current user
    Mention,
    System,
    Log,
    #[serde(other)]
    Other,
}

impl MessageKind {
    /// Kinds that carry user-written chat text.
    pub fn markup_defaults() -> &'static [MessageKind] {
        &[MessageKind::Message, MessageKind::Emote, MessageKind::Mention]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub kind: MessageKind,
    pub message: String,
}

impl ChatMessage {
    pub fn new(kind: MessageKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub type Hook = Box<dyn FnMut(&mut ChatMessage)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

/// Hooks run, in subscription order, on every message before it is shown.
#[derive(Default)]
pub struct MessageHooks {
    hooks: Vec<(HookId, Hook)>,
    next_id: u64,
}

impl MessageHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, hook: impl FnMut(&mut ChatMessage) + 'static) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        self.hooks.push((id, Box::new(hook)));
        log::debug!("Subscribed message hook {:?}", id);
        id
    }

    /// Returns false if the hook was not registered.
    pub fn unsubscribe(&mut self, id: HookId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|(hook_id, _)| *hook_id != id);
        let removed = self.hooks.len() != before;
        log::debug!("Unsubscribed message hook {:?} (removed: {})", id, removed);
        removed
    }

    pub fn dispatch(&mut self, message: &mut ChatMessage) {
        for (_, hook) in &mut self.hooks {
            hook(message);
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

/// A single CSS rule the host registers alongside the hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl StyleRule {
    /// `.{class} { text-decoration: line-through; }`
    pub fn strike(class: &str) -> Self {
        Self {
            selector: format!(".{class}"),
            declarations: vec![("text-decoration".to_string(), "line-through".to_string())],
        }
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.selector)?;
        for (property, value) in &self.declarations {
            write!(f, " {property}: {value};")?;
        }
        write!(f, " }}")
    }
}

struct MessageTransform {
    renderer: Renderer,
    kinds: Vec<MessageKind>,
}

impl MessageTransform {
    fn apply(&self, message: &mut ChatMessage) {
        if self.kinds.contains(&message.kind) {
            message.message = self.renderer.render(&message.message);
        }
    }
}

/// The chat markup plugin: `_italic_`, `*bold*`, `~strike~`, `` `code` ``.
pub struct ChatMarkup {
    transform: Rc<MessageTransform>,
    strike_class: String,
    hook: Option<HookId>,
}

impl ChatMarkup {
    pub fn new(config: &Config) -> Self {
        Self {
            transform: Rc::new(MessageTransform {
                renderer: Renderer::new(config),
                kinds: config.message_kinds.clone(),
            }),
            strike_class: config.strike_class.clone(),
            hook: None,
        }
    }

    /// Subscribe the message hook. Calling this while enabled does nothing.
    pub fn enable(&mut self, hooks: &mut MessageHooks) {
        if self.hook.is_some() {
            return;
        }
        let transform = Rc::clone(&self.transform);
        self.hook = Some(hooks.subscribe(move |message| transform.apply(message)));
    }

    pub fn disable(&mut self, hooks: &mut MessageHooks) {
        if let Some(id) = self.hook.take() {
            hooks.unsubscribe(id);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.hook.is_some()
    }

    pub fn on_message(&self, message: &mut ChatMessage) {
        self.transform.apply(message);
    }

    pub fn transform(&self, text: &str) -> String {
        self.transform.renderer.render(text)
    }

    pub fn style(&self) -> StyleRule {
        StyleRule::strike(&self.strike_class)
    }
}

impl Default for ChatMarkup {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
