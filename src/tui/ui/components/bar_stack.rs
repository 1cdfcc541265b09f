use super::cmdbar::{CmdBar, Routed};
use crate::tui::ui::commands::Command;
use crate::tui::ui::events::Message;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

#[derive(Debug, PartialEq)]
pub struct StackUpdate {
    pub routed: Routed,
    pub command: Command,
}

/// The ordered set of command bars a page owns.
///
/// Messages visit bars in the order they were pushed:
/// - ticks reach every bar, whoever consumes them;
/// - keys go only to the focussed bar while one holds focus, so no other
///   bar can be activated in the meantime;
/// - anything else stops at the first bar that consumes it, and falls out
///   the bottom as a passthrough when none does.
#[derive(Default)]
pub struct BarStack {
    bars: Vec<Box<dyn CmdBar>>,
}

impl BarStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, bar: impl CmdBar + 'static) -> Self {
        self.push(bar);
        self
    }

    pub fn push(&mut self, bar: impl CmdBar + 'static) {
        debug_assert!(
            self.get(bar.tag()).is_none(),
            "command bar tags must be unique"
        );
        self.bars.push(Box::new(bar));
    }

    pub fn update(&mut self, msg: Message) -> StackUpdate {
        match msg {
            Message::Tick(tick) => {
                let commands: Vec<Command> = self
                    .bars
                    .iter_mut()
                    .map(|bar| bar.update(Message::Tick(tick)).command)
                    .collect();
                StackUpdate {
                    routed: Routed::Consumed,
                    command: Command::batch(commands),
                }
            }
            Message::Key(key) => match self.focussed_index() {
                Some(index) => {
                    let bar = &mut self.bars[index];
                    tracing::trace!(tag = bar.tag(), ?key, "key routed to focussed bar");
                    let update = bar.update(Message::Key(key));
                    StackUpdate {
                        routed: update.routed,
                        command: update.command,
                    }
                }
                None => self.chain(Message::Key(key)),
            },
            msg => self.chain(msg),
        }
    }

    fn chain(&mut self, mut msg: Message) -> StackUpdate {
        let mut commands = Vec::new();
        for bar in self.bars.iter_mut() {
            let update = bar.update(msg);
            commands.push(update.command);
            match update.routed {
                Routed::Consumed => {
                    return StackUpdate {
                        routed: Routed::Consumed,
                        command: Command::batch(commands),
                    };
                }
                Routed::Passthrough(next) => msg = next,
            }
        }
        StackUpdate {
            routed: Routed::Passthrough(msg),
            command: Command::batch(commands),
        }
    }

    fn focussed_index(&self) -> Option<usize> {
        self.bars.iter().position(|bar| bar.is_focussed())
    }

    /// Tag of the bar currently holding focus.
    pub fn focussed(&self) -> Option<&str> {
        self.focussed_index().map(|index| self.bars[index].tag())
    }

    /// Whether a bar other than `tag` holds focus.
    pub fn is_blocked_for(&self, tag: &str) -> bool {
        self.bars
            .iter()
            .any(|bar| bar.tag() != tag && bar.is_focussed())
    }

    pub fn get(&self, tag: &str) -> Option<&dyn CmdBar> {
        self.bars
            .iter()
            .find(|bar| bar.tag() == tag)
            .map(|bar| bar.as_ref())
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Views of all visible bars, top to bottom.
    pub fn view(&self) -> String {
        self.bars
            .iter()
            .map(|bar| bar.view())
            .filter(|view| !view.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn height(&self) -> u16 {
        self.bars.iter().map(|bar| bar.height()).sum()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let visible: Vec<(usize, u16)> = self
            .bars
            .iter()
            .enumerate()
            .map(|(index, bar)| (index, bar.height()))
            .filter(|(_, height)| *height > 0)
            .collect();
        if visible.is_empty() {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                visible
                    .iter()
                    .map(|(_, height)| Constraint::Length(*height))
                    .collect::<Vec<_>>(),
            )
            .split(area);

        for ((index, _), chunk) in visible.iter().zip(chunks.iter()) {
            self.bars[*index].render(f, *chunk);
        }
    }
}
