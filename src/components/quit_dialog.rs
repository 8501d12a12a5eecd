//! Quit confirmation dialog
//!
//! Nothing leaves the session except the profile file, so quitting is
//! guarded by a yes/no prompt.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct QuitDialog;

impl QuitDialog {
    fn hint_line() -> Line<'static> {
        let key = |label: &'static str, color: Color| {
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        Line::from(vec![
            key(" y ", Color::Red),
            Span::raw("Quit  "),
            key(" n/Esc ", Color::Green),
            Span::raw("Keep planning"),
        ])
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match key.code {
            KeyCode::Char('y' | 'Y') => Some(Action::ForceQuit),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        })
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 46, 8);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Quit ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        // Saved builds and the in-progress configuration are session-only
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Quit PC Builder?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Builds saved this session will be lost.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Self::hint_line(),
        ];

        frame.render_widget(
            Paragraph::new(content)
                .block(block)
                .alignment(Alignment::Center),
            popup_area,
        );
        Ok(())
    }
}
