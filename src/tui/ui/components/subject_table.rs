use crate::tui::domain::models::{Navigation, Subject};
use crate::tui::ui::components::Component;
use crate::tui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

#[derive(Default)]
pub struct SubjectTable {
    subjects: Vec<Subject>,
    filter: String,
    state: TableState,
}

impl SubjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_subjects(&mut self, subjects: Vec<Subject>) {
        self.subjects = subjects;
        self.clamp_selection();
    }

    pub fn remove(&mut self, name: &str) {
        self.subjects.retain(|subject| subject.name != name);
        self.clamp_selection();
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.clamp_selection();
    }

    /// Subjects matching the filter, case-insensitively.
    pub fn visible(&self) -> Vec<&Subject> {
        let needle = self.filter.to_lowercase();
        self.subjects
            .iter()
            .filter(|subject| needle.is_empty() || subject.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected(&self) -> Option<&Subject> {
        let index = self.state.selected()?;
        self.visible().get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        let selected = match (count, self.state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (count, Some(index)) => Some(index.min(count - 1)),
        };
        self.state.select(selected);
    }
}

impl Component for SubjectTable {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let header = Row::new(vec![Cell::from("Subject Name"), Cell::from("Versions")]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .visible()
            .into_iter()
            .map(|subject| {
                Row::new(vec![
                    Cell::from(subject.name.clone()),
                    Cell::from(subject.version_count().to_string()),
                ])
            })
            .collect();

        let title = format!("Subjects ({})", rows.len());
        let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(10)])
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL))
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );

        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let count = self.visible().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(index) = self.state.selected() {
                    self.state.select(Some(index.saturating_sub(1)));
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    let next = self.state.selected().map_or(0, |index| index + 1);
                    self.state.select(Some(next.min(count - 1)));
                }
                None
            }
            KeyCode::Enter => self
                .selected()
                .map(|subject| Message::Navigate(Navigation::SchemaDetails(subject.name.clone()))),
            _ => None,
        }
    }
}
