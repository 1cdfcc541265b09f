pub mod bar_stack;
pub mod cmdbar;
pub mod dispatch;
pub mod notifier;
pub mod notifier_cmdbar;
pub mod search_cmdbar;
pub mod subject_table;
pub mod text_input;

#[cfg(test)]
mod dispatch_test;

use crate::tui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub use bar_stack::{BarStack, StackUpdate};
pub use cmdbar::{BarUpdate, CmdBar, Routed};
pub use dispatch::{DispatchTable, Dispatched, Reaction};
pub use notifier::{Notifier, NotifierState};
pub use notifier_cmdbar::NotifierCmdBar;
pub use search_cmdbar::SearchCmdBar;

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
