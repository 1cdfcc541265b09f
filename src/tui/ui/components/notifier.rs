use crate::tui::constants::{
    ERROR_GLYPH, LOADING_GLYPH, SPINNER_FRAMES, SPINNER_TICK_MS, SUCCESS_GLYPH,
};
use crate::tui::ui::commands::Command;
use crate::tui::ui::events::{HideNotification, SpinnerTick};
use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_SPINNER_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum NotifierState {
    #[default]
    Idle,
    Loading {
        label: String,
    },
    Success {
        label: String,
    },
    Error {
        label: String,
    },
}

/// Status line state machine: idle, an animated loading label, or a
/// success/error banner.
///
/// Every transition bumps `generation`, which is what deferred hides are
/// checked against.
#[derive(Debug)]
pub struct Notifier {
    state: NotifierState,
    tag: String,
    generation: u64,
    spinner_id: u64,
    sequence: u64,
    frame: usize,
    tick_interval: Duration,
}

impl Notifier {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            state: NotifierState::Idle,
            tag: tag.into(),
            generation: 0,
            spinner_id: NEXT_SPINNER_ID.fetch_add(1, Ordering::Relaxed),
            sequence: 0,
            frame: 0,
            tick_interval: Duration::from_millis(SPINNER_TICK_MS),
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Enters `Loading` and returns the first tick of a fresh ticker run.
    /// Pulses of any earlier run stop being re-armed.
    pub fn spin_with_loading(&mut self, label: impl Into<String>) -> Command {
        self.transition(NotifierState::Loading {
            label: label.into(),
        });
        self.frame = 0;
        self.sequence += 1;
        Command::Tick {
            every: self.tick_interval,
            tick: self.current_tick(),
        }
    }

    pub fn show_success(&mut self, label: impl Into<String>) {
        self.transition(NotifierState::Success {
            label: label.into(),
        });
    }

    pub fn show_error(&mut self, label: impl Into<String>) {
        self.transition(NotifierState::Error {
            label: label.into(),
        });
    }

    pub fn idle(&mut self) {
        self.transition(NotifierState::Idle);
    }

    pub fn advance_frame(&mut self) {
        if self.has_priority() {
            self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Handles a spinner pulse. Pulses for another spinner or an older run
    /// are dropped; a current pulse advances the frame and re-arms itself,
    /// even once the notifier has left `Loading`.
    pub fn tick(&mut self, tick: SpinnerTick) -> Command {
        if tick != self.current_tick() {
            return Command::None;
        }
        self.advance_frame();
        Command::Tick {
            every: self.tick_interval,
            tick,
        }
    }

    /// Schedules a hide for this notifier's bar at the current generation.
    pub fn dismiss_after(&self, delay: Duration) -> Command {
        Command::delay(
            delay,
            HideNotification {
                tag: self.tag.clone(),
                generation: self.generation,
            },
        )
    }

    /// Only a loading notifier may hold input focus.
    pub fn has_priority(&self) -> bool {
        matches!(self.state, NotifierState::Loading { .. })
    }

    pub fn is_idle(&self) -> bool {
        self.state == NotifierState::Idle
    }

    pub fn state(&self) -> &NotifierState {
        &self.state
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn spinner_id(&self) -> u64 {
        self.spinner_id
    }

    pub fn view(&self) -> String {
        match &self.state {
            NotifierState::Idle => String::new(),
            NotifierState::Loading { label } => {
                format!("{} {LOADING_GLYPH} {label}", SPINNER_FRAMES[self.frame])
            }
            NotifierState::Success { label } => format!("{SUCCESS_GLYPH} {label}"),
            NotifierState::Error { label } => format!("{ERROR_GLYPH} {label}"),
        }
    }

    pub fn style(&self) -> Style {
        match self.state {
            NotifierState::Idle => Style::default(),
            NotifierState::Loading { .. } => Style::default().fg(Color::Yellow),
            NotifierState::Success { .. } => Style::default().fg(Color::Green),
            NotifierState::Error { .. } => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        }
    }

    fn current_tick(&self) -> SpinnerTick {
        SpinnerTick {
            id: self.spinner_id,
            sequence: self.sequence,
        }
    }

    fn transition(&mut self, state: NotifierState) {
        tracing::trace!(tag = %self.tag, from = ?self.state, to = ?state, "notifier transition");
        self.state = state;
        self.generation += 1;
    }
}
