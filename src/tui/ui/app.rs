use crate::config::Timings;
use crate::tui::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, STATUS_BAR_HEIGHT};
use crate::tui::domain::models::{Navigation, PageId};
use crate::tui::ui::commands::Command;
use crate::tui::ui::events::Message;
use crate::tui::ui::pages::create_schema_page::CreateSchemaPage;
use crate::tui::ui::pages::schema_details_page::SchemaDetailsPage;
use crate::tui::ui::pages::subjects_page::SubjectsPage;
use crate::tui::ui::pages::{Page, Shortcut};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::{Duration, Instant};

const GLOBAL_SHORTCUTS: [Shortcut; 3] = [
    Shortcut::new("Subjects", "F1"),
    Shortcut::new("Create", "F3"),
    Shortcut::new("Quit", "C-c C-c"),
];

/// Owns the pages and decides which of them sees each message.
///
/// Keys go to the current page only. Everything else is offered to every
/// page: tags and spinner ids are unique, so a message only ever changes
/// the page it was meant for.
pub struct App {
    current: PageId,
    subjects: SubjectsPage,
    create: CreateSchemaPage,
    details: SchemaDetailsPage,
    status: Option<String>,
    last_ctrl_c_press: Option<Instant>,
    quit: bool,
}

impl App {
    pub fn new(timings: Timings) -> Self {
        Self {
            current: PageId::default(),
            subjects: SubjectsPage::new(timings),
            create: CreateSchemaPage::new(timings),
            details: SchemaDetailsPage::new(timings),
            status: None,
            last_ctrl_c_press: None,
            quit: false,
        }
    }

    /// Command to run once before the first frame.
    pub fn init(&self) -> Command {
        self.subjects.load()
    }

    pub fn current_page(&self) -> PageId {
        self.current
    }

    pub fn subjects_page(&self) -> &SubjectsPage {
        &self.subjects
    }

    pub fn create_page(&self) -> &CreateSchemaPage {
        &self.create
    }

    pub fn details_page(&self) -> &SchemaDetailsPage {
        &self.details
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn page(&self) -> &dyn Page {
        match self.current {
            PageId::Subjects => &self.subjects,
            PageId::CreateSchema => &self.create,
            PageId::SchemaDetails => &self.details,
        }
    }

    fn page_mut(&mut self) -> &mut dyn Page {
        match self.current {
            PageId::Subjects => &mut self.subjects,
            PageId::CreateSchema => &mut self.create,
            PageId::SchemaDetails => &mut self.details,
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::Key(key) => self.handle_key(key),
            Message::Navigate(navigation) => self.navigate(navigation),
            msg => Command::batch([
                self.subjects.update(msg.clone()),
                self.create.update(msg.clone()),
                self.details.update(msg),
            ]),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press
                && last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS)
            {
                tracing::info!("quit requested");
                self.quit = true;
                return Command::None;
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.status = Some("Press Ctrl+C again to exit".to_string());
            return Command::None;
        }
        self.status = None;

        // a focussed bar owns every key, global ones included
        if self.page().focussed_bar().is_some() {
            tracing::trace!(?key, "key kept on focussed page");
            return self.page_mut().update(Message::Key(key));
        }

        match key.code {
            KeyCode::F(1) => self.navigate(Navigation::Subjects),
            KeyCode::F(3) => self.navigate(Navigation::CreateSchema),
            _ => self.page_mut().update(Message::Key(key)),
        }
    }

    fn navigate(&mut self, navigation: Navigation) -> Command {
        let from = self.current;
        tracing::debug!(?from, ?navigation, "navigating");
        match navigation {
            Navigation::Subjects => {
                self.current = PageId::Subjects;
                // a schema may have been added meanwhile
                if from == PageId::CreateSchema {
                    self.subjects.load()
                } else {
                    Command::None
                }
            }
            Navigation::CreateSchema => {
                self.current = PageId::CreateSchema;
                Command::None
            }
            Navigation::SchemaDetails(subject) => {
                self.current = PageId::SchemaDetails;
                self.details.load(subject)
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", self.page().title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, chunks[0]);

        self.page_mut().render(f, chunks[1]);

        let status = match &self.status {
            Some(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            )),
            None => self.shortcut_line(),
        };
        f.render_widget(Paragraph::new(status), chunks[2]);
    }

    fn shortcut_line(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD);
        let spans = self
            .page()
            .shortcuts()
            .into_iter()
            .chain(GLOBAL_SHORTCUTS)
            .flat_map(|shortcut| {
                [
                    Span::styled(shortcut.keybinding, key_style),
                    Span::styled(
                        format!(" {}  ", shortcut.name),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }
}
