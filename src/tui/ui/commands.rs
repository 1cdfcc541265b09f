use super::events::{Message, SpinnerTick};
use crate::tui::domain::models::SubjectCreationDetails;
use std::time::Duration;

/// Side effects requested by an update. They run off the update path and
/// report back only by producing new messages.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Command {
    #[default]
    None,
    Batch(Vec<Command>),
    /// Deliver `tick` after `every`; the receiving notifier re-arms it.
    Tick { every: Duration, tick: SpinnerTick },
    /// Deliver `message` once after `after`.
    Delay { after: Duration, message: Box<Message> },
    /// Deliver `message` on the next loop iteration.
    Emit(Box<Message>),
    /// Run a registry operation; it reports its own start and outcome.
    Perform(Operation),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    ListSubjects,
    DeleteSubject(String),
    CreateSchema(SubjectCreationDetails),
    ListSchemas(String),
}

impl Command {
    /// Combines commands, dropping `None`s and unwrapping single entries.
    pub fn batch(commands: impl IntoIterator<Item = Command>) -> Command {
        let mut flattened: Vec<Command> = commands
            .into_iter()
            .filter(|command| !command.is_none())
            .collect();
        match flattened.len() {
            0 => Command::None,
            1 => flattened.remove(0),
            _ => Command::Batch(flattened),
        }
    }

    pub fn emit(message: impl Into<Message>) -> Command {
        Command::Emit(Box::new(message.into()))
    }

    pub fn delay(after: Duration, message: impl Into<Message>) -> Command {
        Command::Delay {
            after,
            message: Box::new(message.into()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Command::None)
    }
}
