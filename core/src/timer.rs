//! Advance Timer
//!
//! A one-shot countdown driven by delta time. The drill owns at most one of
//! these at a time (the pending auto-advance); the driver feeds elapsed wall
//! time into it each frame and performs the advance when it fires.
//!
//! Delta-driven timing keeps the core free of any clock or runtime: a TUI
//! can tick it from a 10 fps frame loop, a test from a plain loop with
//! synthetic durations, and both see identical behavior.

use std::time::Duration;

/// One-shot countdown toward the next automatic advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceTimer {
    delay: Duration,
    elapsed: Duration,
    fired: bool,
}

impl AdvanceTimer {
    /// Create a countdown that fires once `delay` has elapsed.
    ///
    /// A zero delay fires on the first [`update`](Self::update).
    #[must_use]
    pub fn after(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            fired: false,
        }
    }

    /// Advance the countdown by `delta`.
    ///
    /// Returns `true` exactly once, on the update that reaches the delay.
    /// Further updates are no-ops; a fired timer stays fired until replaced.
    pub fn update(&mut self, delta: Duration) -> bool {
        if self.fired {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.delay {
            self.fired = true;
            return true;
        }
        false
    }

    /// Time left until the countdown fires. Zero once fired.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.elapsed)
    }

    /// The full delay this countdown was armed with.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the countdown has already fired.
    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.fired
    }
}
