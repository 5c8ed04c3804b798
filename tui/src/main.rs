//! anzan - flash mental arithmetic practice in the terminal.

use std::io::{stdout, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use anzan_core::DrillConfig;
use anzan_tui::App;

/// Raw-mode/alternate-screen guard: the terminal is restored when this
/// drops, including on error paths.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Log to a file under the data dir so the alternate screen stays clean.
/// Silently skipped when no writable location exists.
fn init_tracing() {
    let Some(dir) = dirs::data_dir().map(|dir| dir.join("anzan")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("anzan.log")) else {
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = DrillConfig::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring configuration: {err}");
        DrillConfig::default()
    });

    let mut session = TerminalSession::new()?;
    let mut app = App::new(&config);
    let result = app.run(&mut session.terminal).await;
    drop(session);
    result
}
