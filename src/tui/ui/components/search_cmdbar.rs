use super::cmdbar::{BarUpdate, CmdBar};
use super::text_input::TextInput;
use crate::tui::constants::SEARCH_PLACEHOLDER;
use crate::tui::ui::commands::Command;
use crate::tui::ui::events::{Message, SearchQueryChanged};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Free-text prompt opened with `/`.
///
/// While open it owns the keyboard: every key is consumed, and each edit
/// emits a [`SearchQueryChanged`] for the page to filter on. `Enter` closes
/// the prompt and keeps the query, `Esc` closes it and clears the query.
#[derive(Debug)]
pub struct SearchCmdBar {
    tag: String,
    active: bool,
    input: TextInput,
}

impl SearchCmdBar {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            active: false,
            input: TextInput::new(),
        }
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    fn query_changed(&self) -> Command {
        Command::emit(SearchQueryChanged {
            query: self.input.text().to_string(),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) -> BarUpdate {
        if !self.active {
            return if key.code == KeyCode::Char('/') && key.modifiers == KeyModifiers::NONE {
                tracing::debug!(tag = %self.tag, "search prompt opened");
                self.active = true;
                BarUpdate::consumed(true, Command::None)
            } else {
                BarUpdate::passthrough(false, Message::Key(key))
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.active = false;
                let had_query = !self.input.text().is_empty();
                self.input.clear();
                let command = if had_query {
                    self.query_changed()
                } else {
                    Command::None
                };
                BarUpdate::consumed(false, command)
            }
            KeyCode::Enter => {
                self.active = false;
                BarUpdate::consumed(false, Command::None)
            }
            _ => {
                let command = if self.input.handle_key(key) {
                    self.query_changed()
                } else {
                    Command::None
                };
                BarUpdate::consumed(true, command)
            }
        }
    }
}

impl CmdBar for SearchCmdBar {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn update(&mut self, msg: Message) -> BarUpdate {
        match msg {
            Message::Key(key) => self.handle_key(key),
            msg => BarUpdate::passthrough(self.active, msg),
        }
    }

    fn view(&self) -> String {
        if !self.active {
            return String::new();
        }
        if self.input.text().is_empty() {
            format!("> {SEARCH_PLACEHOLDER}")
        } else {
            format!("> {}", self.input.text())
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_focussed(&self) -> bool {
        self.active
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.active || area.height == 0 {
            return;
        }

        let prompt = Span::styled(
            "> ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
        let mut spans = vec![prompt];
        if self.input.text().is_empty() {
            spans.push(Span::styled(
                SEARCH_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.extend(self.input.render_cursor_spans());
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        f.render_widget(bar, area);
    }
}
