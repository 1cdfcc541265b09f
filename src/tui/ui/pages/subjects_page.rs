use super::{Page, Shortcut};
use crate::config::Timings;
use crate::tui::constants::{
    BORDERED_BAR_HEIGHT, DELETE_BAR_TAG, SEARCH_BAR_TAG, SUBJECTS_BAR_TAG,
};
use crate::tui::ui::commands::{Command, Operation};
use crate::tui::ui::components::subject_table::SubjectTable;
use crate::tui::ui::components::{
    BarStack, Component, Notifier, NotifierCmdBar, Reaction, Routed, SearchCmdBar,
};
use crate::tui::ui::events::{
    Message, SubjectDeleted, SubjectDeletionFailed, SubjectDeletionStarted, SubjectListingFailed,
    SubjectListingStarted, SubjectsListed,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub struct SubjectsPage {
    table: SubjectTable,
    bars: BarStack,
    pending_delete: Option<String>,
}

impl SubjectsPage {
    pub fn new(timings: Timings) -> Self {
        let listing = NotifierCmdBar::new(SUBJECTS_BAR_TAG)
            .with_tick_interval(timings.tick_interval)
            .on(|_: SubjectListingStarted, m: &mut Notifier| {
                Reaction::active(m.spin_with_loading("Loading subjects"))
            })
            .on(|_: SubjectsListed, m: &mut Notifier| {
                m.idle();
                Reaction::inactive()
            })
            .on(|msg: SubjectListingFailed, m: &mut Notifier| {
                m.show_error(format!("Failed to load subjects: {}", msg.reason));
                Reaction::active(Command::None)
            });

        let dismiss = timings.dismiss_delay;
        let deletion = NotifierCmdBar::new(DELETE_BAR_TAG)
            .with_tick_interval(timings.tick_interval)
            .on(|_: SubjectDeletionStarted, m: &mut Notifier| {
                Reaction::active(m.spin_with_loading("Deleting Subject"))
            })
            .on(move |_: SubjectDeleted, m: &mut Notifier| {
                m.show_success("Subject deleted");
                Reaction::active(m.dismiss_after(dismiss))
            })
            .on(|msg: SubjectDeletionFailed, m: &mut Notifier| {
                m.show_error(format!("Failed to delete subject: {}", msg.reason));
                Reaction::active(Command::None)
            });

        Self {
            table: SubjectTable::new(),
            bars: BarStack::new()
                .with(listing)
                .with(deletion)
                .with(SearchCmdBar::new(SEARCH_BAR_TAG)),
            pending_delete: None,
        }
    }

    /// Command that (re)loads the subject list.
    pub fn load(&self) -> Command {
        Command::Perform(Operation::ListSubjects)
    }

    pub fn bars(&self) -> &BarStack {
        &self.bars
    }

    pub fn table(&self) -> &SubjectTable {
        &self.table
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    // Data messages update the table before the bars get to claim them.
    fn observe(&mut self, msg: &Message) {
        match msg {
            Message::SubjectsListed(listed) => self.table.set_subjects(listed.subjects.clone()),
            Message::SubjectDeleted(deleted) => self.table.remove(&deleted.subject),
            Message::SearchQueryChanged(changed) => self.table.set_filter(changed.query.clone()),
            _ => {}
        }
    }

    fn confirm_delete(&mut self, key: KeyEvent, subject: String) -> Command {
        match key.code {
            KeyCode::Enter => {
                tracing::info!(%subject, "subject deletion confirmed");
                Command::Perform(Operation::DeleteSubject(subject))
            }
            KeyCode::Esc => {
                tracing::debug!(%subject, "subject deletion cancelled");
                Command::None
            }
            _ => {
                self.pending_delete = Some(subject);
                Command::None
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::F(2) | KeyCode::F(5) if self.bars.focussed().is_some() => {
                tracing::debug!(
                    ?key,
                    focussed = self.bars.focussed(),
                    "activation key ignored while another bar holds focus"
                );
                Command::None
            }
            KeyCode::F(2) => {
                if let Some(subject) = self.table.selected() {
                    self.pending_delete = Some(subject.name.clone());
                }
                Command::None
            }
            KeyCode::F(5) => self.load(),
            _ => self
                .table
                .handle_key(key)
                .map_or(Command::None, Command::emit),
        }
    }

    fn render_confirmation(&self, f: &mut Frame, area: Rect, subject: &str) {
        let line = Line::from(vec![
            Span::styled(
                format!("🗑️  {subject} will be deleted permanently  "),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                "Delete!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("Cancel.", Style::default().fg(Color::DarkGray)),
        ]);
        let prompt = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        f.render_widget(prompt, area);
    }
}

impl Page for SubjectsPage {
    fn title(&self) -> String {
        "Subjects".to_string()
    }

    fn update(&mut self, msg: Message) -> Command {
        if let Message::Key(key) = &msg
            && let Some(subject) = self.pending_delete.take()
        {
            return self.confirm_delete(*key, subject);
        }

        self.observe(&msg);
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
        let confirm_height = if self.pending_delete.is_some() {
            BORDERED_BAR_HEIGHT
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(confirm_height),
                Constraint::Length(self.bars.height()),
                Constraint::Min(3),
            ])
            .split(area);

        if let Some(subject) = &self.pending_delete {
            self.render_confirmation(f, chunks[0], subject);
        }
        self.bars.render(f, chunks[1]);
        self.table.render(f, chunks[2]);
    }

    fn focussed_bar(&self) -> Option<&str> {
        self.bars.focussed()
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        if self.pending_delete.is_some() {
            return vec![
                Shortcut::new("Confirm", "Enter"),
                Shortcut::new("Cancel", "Esc"),
            ];
        }
        vec![
            Shortcut::new("Search", "/"),
            Shortcut::new("Delete", "F2"),
            Shortcut::new("Refresh", "F5"),
            Shortcut::new("Details", "Enter"),
        ]
    }
}
