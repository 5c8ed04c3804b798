//! Drill State Machine
//!
//! The [`Drill`] is the explicit state object behind a practice run: it owns
//! the mode, the phase, the generated sequence, the cursor into it, and the
//! single pending auto-advance countdown. UI surfaces drive it through
//! command methods and read it back through getters; there is no observer
//! machinery and no interior mutability.
//!
//! # Phases
//!
//! ```text
//! idle --start--> running --advance×8--> finished --reveal--> showingAnswer
//!                                                                │    ▲
//!                                                          inspect    back
//!                                                                ▼    │
//!                                                           showingNumbers
//! ```
//!
//! Any phase returns to idle via [`Drill::reset`]; [`Drill::go_home`] is a
//! reset plus a mode change back to [`Mode::Home`].
//!
//! # Timer discipline
//!
//! At most one advance countdown is pending at any time. Every command that
//! touches mode, phase, index, interval or the sequence replaces it
//! unconditionally: re-armed with the current interval while the drill is
//! running in auto mode, cleared otherwise. Replacement doubles as
//! cancellation, so cancelling an absent countdown is a no-op and a stale
//! countdown can never fire with outdated state.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DrillConfig;
use crate::sequence::{Sequence, SEQUENCE_LEN};
use crate::timer::AdvanceTimer;

/// Presentation mode: who advances the numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Mode selection screen; no drill can run here.
    Home,
    /// Advancement driven by the interval timer.
    Auto,
    /// Advancement driven by explicit user action.
    Manual,
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Auto => write!(f, "auto"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Where the drill is within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Waiting on the setup screen; no sequence yet.
    Idle,
    /// Presenting numbers one at a time.
    Running,
    /// All eight numbers shown; answer not yet revealed.
    Finished,
    /// The sum is on display.
    ShowingAnswer,
    /// The full sequence is on display for checking.
    ShowingNumbers,
}

/// The drill state machine.
///
/// Single-threaded and run-to-completion: every mutation happens inside one
/// of the command methods (or [`tick`](Self::tick)) and finishes before the
/// next trigger is processed.
#[derive(Debug)]
pub struct Drill {
    mode: Mode,
    phase: Phase,
    interval: Duration,
    sequence: Option<Sequence>,
    index: usize,
    current: Option<i32>,
    answer: Option<i32>,
    /// The arena-of-one: the only pending deferred advance, replaced or
    /// cleared by every state-affecting command.
    pending: Option<AdvanceTimer>,
    rng: StdRng,
}

impl Drill {
    /// Create a drill from configuration, seeding the RNG from the OS.
    #[must_use]
    pub fn new(config: &DrillConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a drill with an explicit RNG, for deterministic replays.
    #[must_use]
    pub fn with_rng(config: &DrillConfig, rng: StdRng) -> Self {
        Self {
            mode: config.start_mode,
            phase: Phase::Idle,
            interval: config.interval,
            sequence: None,
            index: 0,
            current: None,
            answer: None,
            pending: None,
            rng,
        }
    }

    /// Create a drill with a seeded RNG. Convenience for tests.
    #[must_use]
    pub fn with_seed(config: &DrillConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Start a run: generate a fresh sequence and show its first number.
    ///
    /// Only meaningful from the idle phase of auto or manual mode; a no-op
    /// anywhere else, matching the screens that expose a start action.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle || self.mode == Mode::Home {
            return;
        }

        let sequence = Sequence::generate(&mut self.rng);
        self.current = sequence.get(0);
        self.sequence = Some(sequence);
        self.index = 0;
        self.answer = None;
        self.phase = Phase::Running;
        debug!(mode = %self.mode, "drill started");
        self.reschedule();
    }

    /// Show the next number, or finish after the eighth.
    ///
    /// The timed advance in auto mode performs exactly this transition.
    /// A no-op outside the running phase.
    pub fn advance(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(sequence) = &self.sequence else {
            return;
        };

        if self.index < SEQUENCE_LEN - 1 {
            self.index += 1;
            self.current = sequence.get(self.index);
            debug!(index = self.index, "advanced");
        } else {
            self.current = None;
            self.phase = Phase::Finished;
            debug!("run finished");
        }
        self.reschedule();
    }

    /// Compute and reveal the sum. A no-op unless the run has finished.
    pub fn reveal_answer(&mut self) {
        if self.phase != Phase::Finished {
            return;
        }

        if let Some(sequence) = &self.sequence {
            self.answer = Some(sequence.total());
        }
        self.phase = Phase::ShowingAnswer;
        debug!(answer = ?self.answer, "answer revealed");
        self.reschedule();
    }

    /// Switch from the answer to the full number list. Pure view toggle.
    pub fn inspect_numbers(&mut self) {
        if self.phase == Phase::ShowingAnswer {
            self.phase = Phase::ShowingNumbers;
            self.reschedule();
        }
    }

    /// Return from the number list to the answer. Pure view toggle.
    pub fn back_from_inspect(&mut self) {
        if self.phase == Phase::ShowingNumbers {
            self.phase = Phase::ShowingAnswer;
            self.reschedule();
        }
    }

    /// Return to idle from any phase, discarding the run.
    ///
    /// Clears the sequence, cursor, displayed number, answer, and any
    /// pending advance. Idempotent.
    pub fn reset(&mut self) {
        self.sequence = None;
        self.index = 0;
        self.current = None;
        self.answer = None;
        self.phase = Phase::Idle;
        self.pending = None;
        debug!("drill reset");
    }

    /// Reset and return to the mode selection screen.
    pub fn go_home(&mut self) {
        self.reset();
        self.mode = Mode::Home;
    }

    /// Select a presentation mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reschedule();
    }

    /// Reconfigure the auto-advance delay.
    ///
    /// Mid-run in auto mode this restarts the pending countdown against the
    /// new interval.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.reschedule();
    }

    /// Feed elapsed wall time into the pending countdown.
    ///
    /// When the countdown completes, performs the same transition as
    /// [`advance`](Self::advance) (which re-arms through the usual
    /// discipline). At most one advance happens per tick.
    pub fn tick(&mut self, delta: Duration) {
        let fired = match &mut self.pending {
            Some(timer) => timer.update(delta),
            None => false,
        };
        if fired {
            self.pending = None;
            self.advance();
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Current presentation mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current phase within the run.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The configured auto-advance delay.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The number currently on display, if any.
    #[must_use]
    pub fn current_number(&self) -> Option<i32> {
        self.current
    }

    /// Zero-based position of the displayed number.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The full sequence of the current run. Needed only for the inspect
    /// view.
    #[must_use]
    pub fn sequence(&self) -> Option<&Sequence> {
        self.sequence.as_ref()
    }

    /// The revealed sum, once [`reveal_answer`](Self::reveal_answer) ran.
    #[must_use]
    pub fn answer(&self) -> Option<i32> {
        self.answer
    }

    /// Time until the next automatic advance, while one is pending.
    #[must_use]
    pub fn time_to_advance(&self) -> Option<Duration> {
        self.pending.map(|timer| timer.remaining())
    }

    /// Replace the pending countdown against the current state.
    ///
    /// Armed only while running in auto mode; cleared in every other state.
    fn reschedule(&mut self) {
        self.pending = if self.mode == Mode::Auto && self.phase == Phase::Running {
            Some(AdvanceTimer::after(self.interval))
        } else {
            None
        };
    }
}
