// terminal.rs - Raw-mode terminal session, restored on every exit path

use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::{cursor, execute, terminal};
use life_core::RenderModel;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use crate::ui;

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Switches to raw mode on the alternate screen. Dropping the session switches back.
    pub fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("cannot enable raw mode")?;

        let entered = execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
        match entered {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                if let Err(restore_err) = restore() {
                    warn!(%restore_err, "terminal restore failed");
                }
                Err(err).context("cannot set up the terminal")
            }
        }
    }

    pub fn draw(&mut self, model: &RenderModel<'_>, last_key: &str) -> anyhow::Result<()> {
        self.terminal
            .draw(|frame| ui::draw(frame, model, last_key))
            .context("cannot draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            warn!(%err, "terminal restore failed");
        }
    }
}

fn restore() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show)
}
