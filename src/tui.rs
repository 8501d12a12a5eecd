//! Terminal lifecycle management
//!
//! Owns raw mode, the alternate screen, and event polling. Teardown is
//! shared between `exit`, `Drop`, and a panic hook so a crash never leaves
//! the terminal in raw mode.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

/// Wrapper around the ratatui terminal plus the event-poll timeout
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Polling timeout; elapsing without input produces a tick
    pub tick_rate: Duration,
}

/// Leave the alternate screen and hand the terminal back to the shell.
/// Safe to call more than once.
fn restore() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        Ok(Self {
            terminal: Terminal::new(backend)?,
            tick_rate: Duration::from_millis(250),
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Switch to the alternate screen in raw mode and hook panics so the
    /// terminal is restored before the panic message prints
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore();
            default_hook(info);
        }));

        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal; also runs on Drop
    pub fn exit(&mut self) -> Result<()> {
        restore()
    }

    /// Wait up to one tick for an event. `None` means the tick elapsed.
    /// Key repeats and releases are dropped so every reported key event is
    /// a press.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Press => Ok(None),
            other => Ok(Some(other)),
        }
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = restore();
    }
}
