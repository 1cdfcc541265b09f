use crate::tui::constants::BORDERED_BAR_HEIGHT;
use crate::tui::ui::commands::Command;
use crate::tui::ui::events::Message;
use ratatui::{Frame, layout::Rect};

/// Whether a consumer claimed a message or handed it on.
#[derive(Clone, Debug, PartialEq)]
pub enum Routed {
    Consumed,
    Passthrough(Message),
}

impl Routed {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Routed::Consumed)
    }

    pub fn passthrough(self) -> Option<Message> {
        match self {
            Routed::Consumed => None,
            Routed::Passthrough(msg) => Some(msg),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarUpdate {
    pub active: bool,
    pub routed: Routed,
    pub command: Command,
}

impl BarUpdate {
    pub fn consumed(active: bool, command: Command) -> Self {
        Self {
            active,
            routed: Routed::Consumed,
            command,
        }
    }

    pub fn passthrough(active: bool, msg: Message) -> Self {
        Self {
            active,
            routed: Routed::Passthrough(msg),
            command: Command::None,
        }
    }
}

/// A bar a page can stack above its content.
pub trait CmdBar {
    fn tag(&self) -> &str;

    /// Consumes `msg` or hands it back for the next consumer.
    fn update(&mut self, msg: Message) -> BarUpdate;

    /// Text content; empty means the bar takes no space at all.
    fn view(&self) -> String;

    fn is_active(&self) -> bool;

    /// True while the bar exclusively holds keyboard input.
    fn is_focussed(&self) -> bool;

    fn render(&mut self, f: &mut Frame, area: Rect);

    fn height(&self) -> u16 {
        if self.view().is_empty() {
            0
        } else {
            BORDERED_BAR_HEIGHT
        }
    }
}
