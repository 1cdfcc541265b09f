use super::notifier::Notifier;
use crate::tui::ui::commands::Command;
use crate::tui::ui::events::{Message, MessageKind, Payload};
use std::collections::HashMap;
use std::fmt;

/// What a handler decided: whether its bar stays active, and an optional
/// effect to run.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Reaction {
    pub active: bool,
    pub command: Command,
}

impl Reaction {
    pub fn active(command: Command) -> Self {
        Self {
            active: true,
            command,
        }
    }

    pub fn inactive() -> Self {
        Self {
            active: false,
            command: Command::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Dispatched {
    Handled(Reaction),
    /// No handler for this variant; the message is handed back as it came.
    Unhandled(Message),
}

type Handler = Box<dyn Fn(Message, &mut Notifier) -> Dispatched>;

/// Maps a message variant to the one handler registered for it.
#[derive(Default)]
pub struct DispatchTable {
    handlers: HashMap<MessageKind, Handler>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every message of `kind`. A later registration
    /// for the same kind replaces the earlier one.
    pub fn register<F>(&mut self, kind: MessageKind, handler: F) -> &mut Self
    where
        F: Fn(Message, &mut Notifier) -> Reaction + 'static,
    {
        self.insert(
            kind,
            Box::new(move |msg, notifier| Dispatched::Handled(handler(msg, notifier))),
        );
        self
    }

    /// Registers a handler taking the unwrapped payload of one variant.
    pub fn on<T, F>(&mut self, handler: F) -> &mut Self
    where
        T: Payload + 'static,
        F: Fn(T, &mut Notifier) -> Reaction + 'static,
    {
        self.insert(
            T::KIND,
            Box::new(move |msg, notifier| match T::from_message(msg) {
                Ok(payload) => Dispatched::Handled(handler(payload, notifier)),
                Err(msg) => Dispatched::Unhandled(msg),
            }),
        );
        self
    }

    pub fn dispatch(&self, msg: Message, notifier: &mut Notifier) -> Dispatched {
        match self.handlers.get(&msg.kind()) {
            Some(handler) => handler(msg, notifier),
            None => Dispatched::Unhandled(msg),
        }
    }

    pub fn handles(&self, kind: MessageKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn insert(&mut self, kind: MessageKind, handler: Handler) {
        if self.handlers.insert(kind, handler).is_some() {
            tracing::debug!(?kind, "replacing previously registered handler");
        }
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
