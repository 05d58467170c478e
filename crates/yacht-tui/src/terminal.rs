//! TerminalGuard — owns the terminal modes the search UI listens through.
//!
//! Raw mode, the alternate screen and mouse capture are acquired together in
//! `acquire` and released in `Drop`.

use std::io::{self, Stdout};

use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    pub fn acquire() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                restore();
                return Err(e.into());
            }
        };
        debug!("terminal acquired, size={:?}", terminal.size());
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

/// Undo everything `acquire` sets up. Errors are logged, not returned.
fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!("disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!("leave alternate screen: {}", e);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
        if let Err(e) = self.terminal.show_cursor() {
            warn!("show cursor: {}", e);
        }
        debug!("terminal released");
    }
}
