//! Messages flowing through the update loop.
//!
//! Every kind of message a page or command bar can receive is a variant of
//! [`Message`]. Each variant wraps its own payload type, and every payload
//! implements [`Payload`], which is what lets a dispatch table register a
//! strongly-typed handler per variant without any runtime casting.

use crate::tui::domain::models::{Navigation, SchemaVersion, Subject};
use crossterm::event::KeyEvent;

/// Periodic spinner pulse addressed to one notifier.
///
/// `sequence` identifies the ticker run; a notifier that re-enters loading
/// starts a new sequence and ignores pulses from older ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinnerTick {
    pub id: u64,
    pub sequence: u64,
}

/// Request to dismiss the notification of the bar carrying `tag`.
///
/// Only honored while the bar is still at `generation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HideNotification {
    pub tag: String,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectListingStarted;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectsListed {
    pub subjects: Vec<Subject>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectListingFailed {
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectDeletionStarted {
    pub subject: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectDeleted {
    pub subject: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectDeletionFailed {
    pub subject: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaCreationStarted {
    pub subject: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaCreated {
    pub subject: String,
    pub version: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaCreationFailed {
    pub subject: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaListingStarted {
    pub subject: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemasListed {
    pub subject: String,
    pub schemas: Vec<SchemaVersion>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaListingFailed {
    pub subject: String,
    pub reason: String,
}

/// Emitted by the search prompt whenever its query text changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQueryChanged {
    pub query: String,
}

/// A message payload that maps one-to-one onto a [`Message`] variant.
pub trait Payload: Sized {
    const KIND: MessageKind;

    fn into_message(self) -> Message;

    /// Unwraps the payload, handing the message back untouched when it is
    /// another variant.
    fn from_message(msg: Message) -> Result<Self, Message>;
}

macro_rules! messages {
    ($($(#[$doc:meta])* $variant:ident($payload:ty)),* $(,)?) => {
        #[derive(Clone, Debug, PartialEq)]
        pub enum Message {
            $($(#[$doc])* $variant($payload),)*
        }

        /// Variant identity of a [`Message`], used as the dispatch key.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum MessageKind {
            $($variant,)*
        }

        impl Message {
            pub fn kind(&self) -> MessageKind {
                match self {
                    $(Message::$variant(_) => MessageKind::$variant,)*
                }
            }
        }

        $(
            impl Payload for $payload {
                const KIND: MessageKind = MessageKind::$variant;

                fn into_message(self) -> Message {
                    Message::$variant(self)
                }

                fn from_message(msg: Message) -> Result<Self, Message> {
                    match msg {
                        Message::$variant(payload) => Ok(payload),
                        other => Err(other),
                    }
                }
            }

            impl From<$payload> for Message {
                fn from(payload: $payload) -> Self {
                    Message::$variant(payload)
                }
            }
        )*
    };
}

messages! {
    // Runtime
    /// Spinner animation pulse
    Tick(SpinnerTick),
    /// Deferred dismissal of a notification
    Hide(HideNotification),
    /// Terminal key press
    Key(KeyEvent),
    Navigate(Navigation),

    // Subjects
    SubjectListingStarted(SubjectListingStarted),
    SubjectsListed(SubjectsListed),
    SubjectListingFailed(SubjectListingFailed),
    SubjectDeletionStarted(SubjectDeletionStarted),
    SubjectDeleted(SubjectDeleted),
    SubjectDeletionFailed(SubjectDeletionFailed),

    // Schemas
    SchemaCreationStarted(SchemaCreationStarted),
    SchemaCreated(SchemaCreated),
    SchemaCreationFailed(SchemaCreationFailed),
    SchemaListingStarted(SchemaListingStarted),
    SchemasListed(SchemasListed),
    SchemaListingFailed(SchemaListingFailed),

    // Search prompt
    SearchQueryChanged(SearchQueryChanged),
}
