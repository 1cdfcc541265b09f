use anyhow::{Context, Result};
use crossbeam::channel::Receiver;
use crossterm::{
    event::{self, Event, KeyEventKind, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

pub mod application;
pub mod constants;
pub mod domain;
pub mod runtime;
pub mod ui;

#[cfg(test)]
mod runtime_test;
#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;

use self::application::registry_service::Registry;
use self::constants::EVENT_POLL_INTERVAL_MS;
use self::runtime::Executor;
use self::ui::app::App;
use self::ui::events::Message;
use crate::config::Timings;

/// The terminal front end: draws the app, feeds it input and effect
/// results, and hands every resulting command to the executor.
pub struct InteractiveApp {
    app: App,
    executor: Executor,
    receiver: Receiver<Message>,
}

impl InteractiveApp {
    pub fn new(timings: Timings, registry: Arc<dyn Registry>) -> Self {
        let (executor, receiver) = Executor::new(registry);
        Self {
            app: App::new(timings),
            executor,
            receiver,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.executor.execute(self.app.init());
        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.app.render(f))?;

            // Results of finished effects
            while let Ok(msg) = self.receiver.try_recv() {
                self.handle_message(msg);
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_message(Message::Key(key));
            }

            if self.app.should_quit() {
                break;
            }
        }
        Ok(())
    }

    fn handle_message(&mut self, msg: Message) {
        tracing::trace!(kind = ?msg.kind(), "update");
        let command = self.app.update(msg);
        self.executor.execute(command);
    }
}
