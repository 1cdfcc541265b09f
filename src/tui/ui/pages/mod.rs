pub mod create_schema_page;
pub mod schema_details_page;
pub mod subjects_page;

#[cfg(test)]
mod create_schema_page_test;

use crate::tui::ui::commands::Command;
use crate::tui::ui::events::Message;
use ratatui::{Frame, layout::Rect};

/// A key binding advertised in the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub name: &'static str,
    pub keybinding: &'static str,
}

impl Shortcut {
    pub const fn new(name: &'static str, keybinding: &'static str) -> Self {
        Self { name, keybinding }
    }
}

pub trait Page {
    fn title(&self) -> String;

    /// Page logic sees data-bearing messages first; its command bars then get
    /// a chance to claim the message, and keys nobody claimed come back to
    /// the page.
    fn update(&mut self, msg: Message) -> Command;

    fn render(&mut self, f: &mut Frame, area: Rect);

    /// Tag of the command bar currently owning the keyboard, if any.
    fn focussed_bar(&self) -> Option<&str>;

    fn shortcuts(&self) -> Vec<Shortcut>;
}
