//! Main Application
//!
//! The App owns the drill and the event loop:
//! 1. Terminal key events are mapped to drill commands per screen
//! 2. A ~10 fps frame tick feeds elapsed time into the drill, which drives
//!    the pending auto-advance
//! 3. Every iteration renders from the drill's getters
//!
//! The key→command mapping is a pure function over (mode, phase) so it can
//! be tested without a terminal.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use anzan_core::config::clamped_interval;
use anzan_core::{Drill, DrillConfig, Mode, Phase};

use crate::ui;

/// Frame cadence: 10 fps is plenty for a countdown and keeps CPU idle.
const FRAME_DURATION: Duration = Duration::from_millis(100);

/// Slider step for the interval, in seconds.
const INTERVAL_STEP: f32 = 0.1;

/// A drill command resolved from one key press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Enter the auto-mode setup screen.
    ChooseAuto,
    /// Enter the manual-mode setup screen.
    ChooseManual,
    /// Start a run from a setup screen.
    Start,
    /// Show the next number (manual mode).
    Advance,
    /// Reveal the sum after a finished run.
    Reveal,
    /// Switch from the answer to the number list.
    Inspect,
    /// Return from the number list to the answer.
    BackFromInspect,
    /// Discard the run and return to setup.
    Reset,
    /// Discard the run and return to the home screen.
    Home,
    /// Adjust the auto interval by this many seconds.
    NudgeInterval(f32),
    /// Leave the application.
    Quit,
}

/// Main application state.
pub struct App {
    drill: Drill,
    running: bool,
    last_frame: Instant,
}

impl App {
    /// Create the app around a configured drill.
    #[must_use]
    pub fn new(config: &DrillConfig) -> Self {
        Self {
            drill: Drill::new(config),
            running: true,
            last_frame: Instant::now(),
        }
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        self.last_frame = Instant::now();

        // Initial frame so the home screen appears before any input.
        terminal.draw(|frame| ui::render(frame, &self.drill))?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority.
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(&key);
                            }
                            // Resize is handled by the redraw below.
                            _ => {}
                        }
                    }
                }

                // Frame tick.
                () = tokio::time::sleep(FRAME_DURATION) => {}
            }

            // Feed real elapsed time into the drill regardless of which
            // branch woke us, so key bursts never stall the countdown.
            let now = Instant::now();
            self.drill.tick(now - self.last_frame);
            self.last_frame = now;

            terminal.draw(|frame| ui::render(frame, &self.drill))?;
        }

        Ok(())
    }

    /// Handle one key press.
    fn handle_key(&mut self, key: &KeyEvent) {
        if let Some(command) = command_for_key(self.drill.mode(), self.drill.phase(), key) {
            self.apply(command);
        }
    }

    /// Apply a resolved command to the drill.
    fn apply(&mut self, command: Command) {
        match command {
            Command::ChooseAuto => self.drill.set_mode(Mode::Auto),
            Command::ChooseManual => self.drill.set_mode(Mode::Manual),
            Command::Start => self.drill.start(),
            Command::Advance => self.drill.advance(),
            Command::Reveal => self.drill.reveal_answer(),
            Command::Inspect => self.drill.inspect_numbers(),
            Command::BackFromInspect => self.drill.back_from_inspect(),
            Command::Reset => self.drill.reset(),
            Command::Home => self.drill.go_home(),
            Command::NudgeInterval(delta) => self.nudge_interval(delta),
            Command::Quit => self.running = false,
        }
    }

    /// Adjust the interval by `delta` seconds, snapped to the 0.1s grid and
    /// clamped to the drill's [0, 10] range.
    fn nudge_interval(&mut self, delta: f32) {
        let secs = self.drill.interval().as_secs_f32() + delta;
        let snapped = (secs * 10.0).round() / 10.0;
        self.drill.set_interval(clamped_interval(snapped));
    }

    /// The drill, for rendering and tests.
    #[must_use]
    pub fn drill(&self) -> &Drill {
        &self.drill
    }
}

/// Resolve a key press to a command for the current screen.
///
/// Returns `None` for keys that mean nothing there.
fn command_for_key(mode: Mode, phase: Phase, key: &KeyEvent) -> Option<Command> {
    // Quit works everywhere.
    if key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(Command::Quit);
    }

    match (mode, phase) {
        (Mode::Home, _) => match key.code {
            KeyCode::Char('a') => Some(Command::ChooseAuto),
            KeyCode::Char('m') => Some(Command::ChooseManual),
            KeyCode::Esc => Some(Command::Quit),
            _ => None,
        },

        (Mode::Auto, Phase::Idle) => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => Some(Command::Start),
            KeyCode::Left | KeyCode::Down => Some(Command::NudgeInterval(-INTERVAL_STEP)),
            KeyCode::Right | KeyCode::Up => Some(Command::NudgeInterval(INTERVAL_STEP)),
            KeyCode::Char('h') | KeyCode::Esc => Some(Command::Home),
            _ => None,
        },

        (Mode::Manual, Phase::Idle) => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => Some(Command::Start),
            KeyCode::Char('h') | KeyCode::Esc => Some(Command::Home),
            _ => None,
        },

        (Mode::Manual, Phase::Running) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => Some(Command::Advance),
            _ => None,
        },

        // Auto runs are timer-driven; no advance key.
        (Mode::Auto, Phase::Running) => None,

        (_, Phase::Finished) => match key.code {
            KeyCode::Enter | KeyCode::Char('a') => Some(Command::Reveal),
            _ => None,
        },

        (_, Phase::ShowingAnswer) => match key.code {
            KeyCode::Char('c') => Some(Command::Inspect),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('h') => Some(Command::Home),
            _ => None,
        },

        (_, Phase::ShowingNumbers) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => Some(Command::BackFromInspect),
            _ => None,
        },
    }
}
