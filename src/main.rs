//! pcbuilder-tui: browse a PC part catalog, assemble builds, and compare
//! them from the terminal

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

/// Poll timeout; also the cadence of `Action::Tick`, which drives the
/// splash delay and the fake auth delay
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let mut tui = Tui::new()?.with_tick_rate(TICK_RATE);
    tui.enter()?;

    let mut app = App::new();
    app.init()?;
    let result = run(&mut tui, &mut app);

    // Restore the terminal before a run error prints
    tui.exit()?;
    result
}

/// Event loop: render, wait for input or a tick, then drain the action
/// chain the event produced
fn run(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                eprintln!("draw error: {e}");
            }
        })?;

        let mut next = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // Follow-ups run in the same iteration, so one tick can both
        // finish the splash delay and switch modes
        while let Some(action) = next {
            next = app.update(action)?;
        }
    }

    Ok(())
}
