//! Runs commands off the update path.
//!
//! Every effect ends by sending zero or more messages back to the loop; none
//! of them touch UI state directly.

use crate::tui::application::registry_service::Registry;
use crate::tui::ui::commands::{Command, Operation};
use crate::tui::ui::events::{
    Message, SchemaCreationStarted, SchemaListingStarted, SubjectDeletionStarted,
    SubjectListingStarted,
};
use crossbeam::channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub struct Executor {
    registry: Arc<dyn Registry>,
    sender: Sender<Message>,
    timer: Sender<(Instant, Message)>,
}

impl Executor {
    /// Also starts the timer thread that delivers ticks and delayed
    /// messages; it exits once the executor is dropped.
    pub fn new(registry: Arc<dyn Registry>) -> (Self, Receiver<Message>) {
        let (sender, receiver) = unbounded();
        let (timer, requests) = unbounded();
        let output = sender.clone();
        thread::spawn(move || run_timer(requests, output));
        (
            Self {
                registry,
                sender,
                timer,
            },
            receiver,
        )
    }

    pub fn execute(&self, command: Command) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for command in commands {
                    self.execute(command);
                }
            }
            Command::Emit(message) => self.send(*message),
            Command::Tick { every, tick } => {
                self.after(every, Message::Tick(tick));
            }
            Command::Delay { after, message } => {
                self.after(after, *message);
            }
            Command::Perform(operation) => {
                self.send(started_message(&operation));
                let registry = Arc::clone(&self.registry);
                let sender = self.sender.clone();
                thread::spawn(move || {
                    let result = perform(registry.as_ref(), operation);
                    if sender.send(result).is_err() {
                        tracing::debug!("loop gone, dropping operation result");
                    }
                });
            }
        }
    }

    fn after(&self, delay: Duration, message: Message) {
        if self.timer.send((Instant::now() + delay, message)).is_err() {
            tracing::debug!("timer gone, dropping delayed message");
        }
    }

    fn send(&self, message: Message) {
        if self.sender.send(message).is_err() {
            tracing::debug!("loop gone, dropping message");
        }
    }
}

struct Scheduled {
    due: Instant,
    order: u64,
    message: Message,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.order).cmp(&(other.due, other.order))
    }
}

// Messages due at the same instant go out in the order they were scheduled.
fn run_timer(requests: Receiver<(Instant, Message)>, output: Sender<Message>) {
    let mut pending: BinaryHeap<Reverse<Scheduled>> = BinaryHeap::new();
    let mut order = 0u64;

    loop {
        let now = Instant::now();
        while pending.peek().is_some_and(|Reverse(next)| next.due <= now) {
            if let Some(Reverse(due)) = pending.pop()
                && output.send(due.message).is_err()
            {
                tracing::debug!("loop gone, stopping timer");
                return;
            }
        }

        let request = match pending.peek() {
            Some(Reverse(next)) => match requests.recv_deadline(next.due) {
                Ok(request) => request,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return,
            },
            None => match requests.recv() {
                Ok(request) => request,
                Err(_) => return,
            },
        };

        let (due, message) = request;
        order += 1;
        pending.push(Reverse(Scheduled {
            due,
            order,
            message,
        }));
    }
}

/// Runs `command` to completion on the calling thread, skipping every delay,
/// and returns the messages it would have produced in order. Ticks are
/// delivered once rather than re-armed.
pub fn drain(command: Command, registry: &dyn Registry) -> Vec<Message> {
    let mut messages = Vec::new();
    drain_into(command, registry, &mut messages);
    messages
}

fn drain_into(command: Command, registry: &dyn Registry, messages: &mut Vec<Message>) {
    match command {
        Command::None => {}
        Command::Batch(commands) => {
            for command in commands {
                drain_into(command, registry, messages);
            }
        }
        Command::Emit(message) | Command::Delay { message, .. } => messages.push(*message),
        Command::Tick { tick, .. } => messages.push(Message::Tick(tick)),
        Command::Perform(operation) => {
            messages.push(started_message(&operation));
            messages.push(perform(registry, operation));
        }
    }
}

fn started_message(operation: &Operation) -> Message {
    match operation {
        Operation::ListSubjects => SubjectListingStarted.into(),
        Operation::DeleteSubject(subject) => SubjectDeletionStarted {
            subject: subject.clone(),
        }
        .into(),
        Operation::CreateSchema(details) => SchemaCreationStarted {
            subject: details.subject.clone(),
        }
        .into(),
        Operation::ListSchemas(subject) => SchemaListingStarted {
            subject: subject.clone(),
        }
        .into(),
    }
}

fn perform(registry: &dyn Registry, operation: Operation) -> Message {
    match operation {
        Operation::ListSubjects => registry.list_subjects(),
        Operation::DeleteSubject(subject) => registry.delete_subject(&subject),
        Operation::CreateSchema(details) => registry.create_schema(details),
        Operation::ListSchemas(subject) => registry.list_schemas(&subject),
    }
}
