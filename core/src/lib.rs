//! Anzan Core - Headless Flash-Anzan Drill Engine
//!
//! This crate provides the core logic for a flash-anzan mental arithmetic
//! drill, completely independent of any UI framework. It can drive a TUI,
//! web UI, native GUI, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     UI Surfaces                       │
//! │      ┌─────────┐   ┌─────────┐   ┌──────────────┐    │
//! │      │   TUI   │   │   GUI   │   │   Headless   │    │
//! │      │(ratatui)│   │         │   │  (testing)   │    │
//! │      └────┬────┘   └────┬────┘   └──────┬───────┘    │
//! │           │             │               │            │
//! │           └─────────────┴───────────────┘            │
//! │              commands (down) / getters (up)          │
//! └──────────────────────────┼───────────────────────────┘
//!                            │
//! ┌──────────────────────────┼───────────────────────────┐
//! │                    ANZAN CORE                         │
//! │  ┌───────────────────────┴────────────────────────┐  │
//! │  │                     Drill                       │  │
//! │  │  ┌──────────┐  ┌────────────┐  ┌────────────┐  │  │
//! │  │  │ Sequence │  │  Advance   │  │   Config   │  │  │
//! │  │  │Generator │  │   Timer    │  │   Layers   │  │  │
//! │  │  └──────────┘  └────────────┘  └────────────┘  │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Drill`]: the drill state machine, driven by command methods
//! - [`Sequence`]: eight signed numbers with non-negative prefix sums
//! - [`AdvanceTimer`]: the one pending auto-advance countdown
//! - [`DrillConfig`]: layered configuration (defaults, file, environment)
//!
//! # Quick Start
//!
//! ```
//! use anzan_core::{Drill, DrillConfig, Mode, Phase};
//!
//! let mut drill = Drill::new(&DrillConfig::default());
//! drill.set_mode(Mode::Manual);
//! drill.start();
//! assert_eq!(drill.phase(), Phase::Running);
//! assert!(drill.current_number().is_some());
//!
//! // Seven advances walk the remaining numbers, the eighth finishes.
//! for _ in 0..8 {
//!     drill.advance();
//! }
//! assert_eq!(drill.phase(), Phase::Finished);
//!
//! drill.reveal_answer();
//! assert_eq!(drill.answer(), Some(drill.sequence().unwrap().total()));
//! ```
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework, and no async runtime. All time is injected by the driver
//! through [`Drill::tick`], so the whole engine is deterministic under a
//! seeded RNG.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod drill;
pub mod sequence;
pub mod timer;

pub use config::{ConfigError, DrillConfig};
pub use drill::{Drill, Mode, Phase};
pub use sequence::{Sequence, SEQUENCE_LEN, VALUE_MAX, VALUE_MIN};
pub use timer::AdvanceTimer;
