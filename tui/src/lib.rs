//! Anzan TUI - Terminal interface for flash mental arithmetic practice
//!
//! This crate provides a full-screen terminal UI over the headless
//! `anzan-core` drill engine: a home screen for picking a mode, setup
//! screens, the timed or manual number presentation, and the answer and
//! inspection views.
//!
//! # Architecture
//!
//! - **App**: event loop, key handling, frame ticking of the drill
//! - **Ui**: one draw function per screen, all reading the drill's getters
//! - **Theme**: the color palette

pub mod app;
pub mod theme;
pub mod ui;

pub use app::App;
