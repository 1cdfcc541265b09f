use super::cmdbar::{BarUpdate, CmdBar};
use super::dispatch::{DispatchTable, Dispatched, Reaction};
use super::notifier::Notifier;
use crate::tui::constants::BORDERED_PADDING;
use crate::tui::ui::events::{Message, MessageKind, Payload};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Duration;

/// A command bar that turns registered messages into notifier transitions.
///
/// Ticks and hides addressed to this bar are handled before the dispatch
/// table is consulted. Everything the table has no handler for is returned
/// untouched so the next consumer can look at it.
#[derive(Debug)]
pub struct NotifierCmdBar {
    active: bool,
    tag: String,
    notifier: Notifier,
    handlers: DispatchTable,
}

impl NotifierCmdBar {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            active: false,
            notifier: Notifier::new(tag.clone()),
            tag,
            handlers: DispatchTable::new(),
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.notifier = self.notifier.with_tick_interval(interval);
        self
    }

    /// Builder form of [`DispatchTable::on`].
    pub fn on<T, F>(mut self, handler: F) -> Self
    where
        T: Payload + 'static,
        F: Fn(T, &mut Notifier) -> Reaction + 'static,
    {
        self.handlers.on(handler);
        self
    }

    pub fn register<F>(&mut self, kind: MessageKind, handler: F) -> &mut Self
    where
        F: Fn(Message, &mut Notifier) -> Reaction + 'static,
    {
        self.handlers.register(kind, handler);
        self
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn generation(&self) -> u64 {
        self.notifier.generation()
    }
}

impl CmdBar for NotifierCmdBar {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn update(&mut self, msg: Message) -> BarUpdate {
        match msg {
            Message::Tick(tick) => {
                let command = self.notifier.tick(tick);
                BarUpdate::consumed(self.active, command)
            }
            Message::Hide(hide) if hide.tag != self.tag => {
                BarUpdate::passthrough(self.active, Message::Hide(hide))
            }
            Message::Hide(hide) => {
                if hide.generation == self.notifier.generation() {
                    self.active = false;
                    self.notifier.idle();
                } else {
                    tracing::debug!(
                        tag = %self.tag,
                        scheduled = hide.generation,
                        current = self.notifier.generation(),
                        "ignoring stale hide"
                    );
                }
                BarUpdate::consumed(self.active, Default::default())
            }
            msg => match self.handlers.dispatch(msg, &mut self.notifier) {
                Dispatched::Handled(reaction) => {
                    tracing::debug!(tag = %self.tag, active = reaction.active, "message handled");
                    self.active = reaction.active;
                    BarUpdate::consumed(self.active, reaction.command)
                }
                Dispatched::Unhandled(msg) => BarUpdate::passthrough(self.active, msg),
            },
        }
    }

    fn view(&self) -> String {
        self.notifier.view()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_focussed(&self) -> bool {
        self.active && self.notifier.has_priority()
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let view = self.view();
        // an idle notifier gets no border either
        if view.is_empty() || area.height == 0 {
            return;
        }

        let width = area.width.saturating_sub(BORDERED_PADDING);
        let text: String = view.chars().take(width as usize).collect();
        let bar = Paragraph::new(Line::from(Span::styled(text, self.notifier.style()))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(bar, area);
    }
}
