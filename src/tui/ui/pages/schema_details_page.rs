use super::{Page, Shortcut};
use crate::config::Timings;
use crate::tui::constants::SCHEMA_BAR_TAG;
use crate::tui::domain::models::{Navigation, SchemaVersion};
use crate::tui::ui::commands::{Command, Operation};
use crate::tui::ui::components::{BarStack, Notifier, NotifierCmdBar, Reaction, Routed};
use crate::tui::ui::events::{Message, SchemaListingFailed, SchemaListingStarted, SchemasListed};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

pub struct SchemaDetailsPage {
    subject: Option<String>,
    versions: Vec<SchemaVersion>,
    selected: usize,
    bars: BarStack,
}

impl SchemaDetailsPage {
    pub fn new(timings: Timings) -> Self {
        let loading = NotifierCmdBar::new(SCHEMA_BAR_TAG)
            .with_tick_interval(timings.tick_interval)
            .on(|_: SchemaListingStarted, m: &mut Notifier| {
                Reaction::active(m.spin_with_loading("Loading schema"))
            })
            .on(|_: SchemasListed, m: &mut Notifier| {
                m.idle();
                Reaction::inactive()
            })
            .on(|msg: SchemaListingFailed, m: &mut Notifier| {
                m.show_error(format!("Failed to load schema: {}", msg.reason));
                Reaction::active(Command::None)
            });

        Self {
            subject: None,
            versions: Vec::new(),
            selected: 0,
            bars: BarStack::new().with(loading),
        }
    }

    /// Switches the page to `subject` and requests its versions.
    pub fn load(&mut self, subject: String) -> Command {
        self.versions.clear();
        self.selected = 0;
        self.subject = Some(subject.clone());
        Command::Perform(Operation::ListSchemas(subject))
    }

    pub fn bars(&self) -> &BarStack {
        &self.bars
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn versions(&self) -> &[SchemaVersion] {
        &self.versions
    }

    pub fn selected(&self) -> Option<&SchemaVersion> {
        self.versions.get(self.selected)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Esc => Command::emit(Message::Navigate(Navigation::Subjects)),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Command::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.versions.len() {
                    self.selected += 1;
                }
                Command::None
            }
            _ => Command::None,
        }
    }
}

fn listing_subject(msg: &Message) -> Option<&str> {
    match msg {
        Message::SchemaListingStarted(started) => Some(&started.subject),
        Message::SchemasListed(listed) => Some(&listed.subject),
        Message::SchemaListingFailed(failed) => Some(&failed.subject),
        _ => None,
    }
}

fn pretty_schema(schema: &str) -> String {
    serde_json::from_str::<serde_json::Value>(schema)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| schema.to_string())
}

impl Page for SchemaDetailsPage {
    fn title(&self) -> String {
        match &self.subject {
            Some(subject) => format!("Schema: {subject}"),
            None => "Schema".to_string(),
        }
    }

    fn update(&mut self, msg: Message) -> Command {
        // results of an earlier load must not touch the bar of the current one
        if let Some(subject) = listing_subject(&msg)
            && self.subject.as_deref() != Some(subject)
        {
            tracing::debug!(subject, current = ?self.subject, "dropping listing of another subject");
            return Command::None;
        }

        if let Message::SchemasListed(listed) = &msg {
            self.versions = listed.schemas.clone();
            // start on the latest version
            self.selected = self.versions.len().saturating_sub(1);
        }

        let update = self.bars.update(msg);
        match update.routed {
            Routed::Passthrough(Message::Key(key)) => {
                let command = self.handle_key(key);
                Command::batch([update.command, command])
            }
            _ => update.command,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(self.bars.height()), Constraint::Min(3)])
            .split(area);
        self.bars.render(f, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(10)])
            .split(rows[1]);

        let items: Vec<ListItem> = self
            .versions
            .iter()
            .map(|v| ListItem::new(format!("Version {}", v.version)))
            .collect();
        let mut state = ListState::default();
        if !self.versions.is_empty() {
            state.select(Some(self.selected));
        }
        let list = List::new(items)
            .block(Block::default().title("Versions").borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_stateful_widget(list, columns[0], &mut state);

        let body: Vec<Line> = self
            .selected()
            .map(|v| pretty_schema(&v.schema))
            .unwrap_or_default()
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();
        let schema = Paragraph::new(body)
            .block(Block::default().title(self.title()).borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(schema, columns[1]);
    }

    fn focussed_bar(&self) -> Option<&str> {
        self.bars.focussed()
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new("Version", "↑/↓"),
            Shortcut::new("Back", "Esc"),
        ]
    }
}
