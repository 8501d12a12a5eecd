//! The component contract shared by every screen and dialog
//!
//! Input handling and state mutation are kept apart: event handlers turn
//! raw terminal events into `Action`s, and `update` is the only place an
//! action changes state. The root `App` dispatches actions to whichever
//! component owns them, so a screen never reaches into another screen.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// One-time setup after construction, for state that needs a running
    /// clock or terminal (the splash screen records its start time here)
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a key press into an action. Text inputs are the one
    /// exception allowed to mutate state here, since each typed character
    /// as an action variant would buy nothing.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Translate a mouse event into an action
    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Apply an action. A returned action is dispatched as a follow-up in
    /// the same iteration of the main loop.
    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into `area`. Rendering must not change observable state;
    /// cursor clamping against the just-computed viewport is tolerated.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
