//! Splash screen component
//!
//! Shows the logo for a moment on startup. Any key skips ahead; the
//! main loop's tick advances it once the delay has elapsed.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};

/// A tower case next to the app name
const LOGO: &str = r#" ==============
 ==          ==
 ==  @@@@@@  ==     @@@@@@@@    @@@@@@@@@
 ==  @@  @@  ==     @@@@@@@@@  @@@@@@@@@@@
 ==  @@@@@@  ==     @@@    @@@ @@@       @
 ==          ==     @@@    @@@ @@@
 ==  ======  ==     @@@@@@@@@  @@@
 ==  ======  ==     @@@@@@@@   @@@
 ==          ==     @@@        @@@       @
 ==    @@    ==     @@@        @@@@@@@@@@@
 ==          ==     @@@         @@@@@@@@@
 =============="#;

/// How long the splash stays up when no key is pressed
const HOLD: Duration = Duration::from_millis(1500);

#[derive(Default)]
pub struct SplashComponent {
    /// Set by `init`; `None` means the splash never started
    started: Option<Instant>,
}

impl SplashComponent {
    /// True once the display delay has elapsed
    pub fn is_complete(&self) -> bool {
        self.started.is_some_and(|t| t.elapsed() >= HOLD)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.started = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key skips ahead; q goes straight out
        let action = if key.code == KeyCode::Char('q') {
            Action::ForceQuit
        } else {
            Action::SplashComplete
        };
        Ok(Some(action))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Pad the art to a uniform width; centered alignment works per
        // line and would otherwise shear it
        let width = LOGO.lines().map(str::len).max().unwrap_or(0);
        let mut lines: Vec<Line> = LOGO
            .lines()
            .map(|l| {
                Line::from(Span::styled(
                    format!("{:<width$}", l),
                    Style::default().fg(Color::Cyan),
                ))
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "pcbuilder",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "-tui",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "A terminal UI for planning PC builds",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )));

        // Center the block vertically, leaning slightly above the middle
        let height = lines.len() as u16;
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(2),
            Constraint::Length(height),
            Constraint::Fill(3),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_not_complete_before_init() {
        let splash = SplashComponent::default();
        assert!(!splash.is_complete());
    }

    #[test]
    fn test_any_key_skips_but_q_quits() {
        use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

        let key = |code| KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };

        let mut splash = SplashComponent::default();
        assert_eq!(
            splash.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SplashComplete)
        );
        assert_eq!(
            splash.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::ForceQuit)
        );
    }
}
