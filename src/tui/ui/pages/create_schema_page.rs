use super::{Page, Shortcut};
use crate::config::Timings;
use crate::tui::constants::{CREATE_BAR_TAG, FORM_FIELD_HEIGHT};
use crate::tui::domain::models::{Navigation, SubjectCreationDetails};
use crate::tui::ui::commands::{Command, Operation};
use crate::tui::ui::components::text_input::TextInput;
use crate::tui::ui::components::{BarStack, Notifier, NotifierCmdBar, Reaction, Routed};
use crate::tui::ui::events::{Message, SchemaCreated, SchemaCreationFailed, SchemaCreationStarted};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Subject,
    Schema,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Subject => FormField::Schema,
            FormField::Schema => FormField::Subject,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FormField::Subject => "Subject",
            FormField::Schema => "Schema",
        }
    }
}

/// Form registering a new schema under a subject.
pub struct CreateSchemaPage {
    subject: TextInput,
    schema: TextInput,
    focus: FormField,
    validation: Option<String>,
    bars: BarStack,
}

impl CreateSchemaPage {
    pub fn new(timings: Timings) -> Self {
        let dismiss = timings.dismiss_delay;
        let creation = NotifierCmdBar::new(CREATE_BAR_TAG)
            .with_tick_interval(timings.tick_interval)
            .on(|_: SchemaCreationStarted, m: &mut Notifier| {
                Reaction::active(m.spin_with_loading("Creating Schema"))
            })
            .on(move |_: SchemaCreated, m: &mut Notifier| {
                m.show_success("Schema created");
                Reaction::active(m.dismiss_after(dismiss))
            })
            .on(|msg: SchemaCreationFailed, m: &mut Notifier| {
                m.show_error(format!("Failed to create schema: {}", msg.reason));
                Reaction::active(Command::None)
            });

        Self {
            subject: TextInput::new(),
            schema: TextInput::new(),
            focus: FormField::Subject,
            validation: None,
            bars: BarStack::new().with(creation),
        }
    }

    pub fn bars(&self) -> &BarStack {
        &self.bars
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn subject(&self) -> &str {
        self.subject.text()
    }

    pub fn schema(&self) -> &str {
        self.schema.text()
    }

    pub fn validation(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    pub fn reset(&mut self) {
        self.subject.clear();
        self.schema.clear();
        self.focus = FormField::Subject;
        self.validation = None;
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            FormField::Subject => &mut self.subject,
            FormField::Schema => &mut self.schema,
        }
    }

    fn validate(&self) -> Result<SubjectCreationDetails, &'static str> {
        if self.subject.text().trim().is_empty() {
            return Err("subject cannot be empty");
        }
        if self.schema.text().trim().is_empty() {
            return Err("schema cannot be empty");
        }
        Ok(SubjectCreationDetails {
            subject: self.subject.text().trim().to_string(),
            schema: self.schema.text().to_string(),
        })
    }

    fn submit(&mut self) -> Command {
        match self.validate() {
            Ok(details) => {
                self.validation = None;
                tracing::info!(subject = %details.subject, "submitting schema");
                Command::Perform(Operation::CreateSchema(details))
            }
            Err(reason) => {
                self.validation = Some(reason.to_string());
                Command::None
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        if let Some(tag) = self.bars.focussed() {
            tracing::debug!(?key, tag, "form locked while a bar holds focus");
            return Command::None;
        }

        match key.code {
            KeyCode::Esc => Command::emit(Message::Navigate(Navigation::Subjects)),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset();
                Command::None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.next();
                Command::None
            }
            KeyCode::Enter => match self.focus {
                FormField::Subject => {
                    self.focus = FormField::Schema;
                    Command::None
                }
                FormField::Schema => self.submit(),
            },
            _ => {
                if self.focused_input().handle_key(key) {
                    self.validation = None;
                }
                Command::None
            }
        }
    }

    fn render_field(&self, f: &mut Frame, area: Rect, field: FormField) {
        let input = match field {
            FormField::Subject => &self.subject,
            FormField::Schema => &self.schema,
        };
        let focused = self.focus == field;
        let line = if focused {
            Line::from(input.render_cursor_spans())
        } else {
            Line::from(Span::raw(input.text()))
        };
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let widget = Paragraph::new(line).block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(widget, area);
    }
}

impl Page for CreateSchemaPage {
    fn title(&self) -> String {
        "Create Schema".to_string()
    }

    fn update(&mut self, msg: Message) -> Command {
        if let Message::SchemaCreated(created) = &msg {
            tracing::info!(subject = %created.subject, version = created.version, "schema created");
            self.reset();
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
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.bars.height()),
                Constraint::Length(FORM_FIELD_HEIGHT),
                Constraint::Length(FORM_FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        self.bars.render(f, chunks[0]);
        self.render_field(f, chunks[1], FormField::Subject);
        self.render_field(f, chunks[2], FormField::Schema);
        if let Some(reason) = &self.validation {
            f.render_widget(
                Paragraph::new(Span::styled(reason.as_str(), Style::default().fg(Color::Red))),
                chunks[3],
            );
        }
    }

    fn focussed_bar(&self) -> Option<&str> {
        self.bars.focussed()
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new("Next Field", "Tab"),
            Shortcut::new("Submit", "Enter"),
            Shortcut::new("Reset", "C-r"),
            Shortcut::new("Back", "Esc"),
        ]
    }
}
