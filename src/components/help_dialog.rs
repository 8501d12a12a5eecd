//! Help dialog component
//!
//! Scrollable reference of every keyboard shortcut, grouped by where the
//! keys apply.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Shortcut reference as data: section title, then key / description pairs
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Screens",
        &[
            ("1", "Parts catalog"),
            ("2", "Curated builds"),
            ("3", "Build configurator"),
            ("4", "Compare builds"),
            ("5", "Profile"),
        ],
    ),
    (
        "Navigation",
        &[
            ("j / ↓", "Move to next item"),
            ("k / ↑", "Move to previous item"),
            ("g", "Jump to first item"),
            ("G", "Jump to last item"),
            ("Tab", "Next category tab"),
            ("Shift+Tab", "Previous category tab"),
        ],
    ),
    (
        "Scrolling",
        &[
            ("Ctrl+e", "Scroll down one line"),
            ("Ctrl+y", "Scroll up one line"),
            ("Ctrl+d", "Scroll down half a page"),
            ("Ctrl+u", "Scroll up half a page"),
            ("Wheel", "Scroll the detail panel"),
        ],
    ),
    (
        "Search & Filters",
        &[
            ("/", "Enter search mode"),
            ("Esc", "Exit search / Cancel"),
            ("Enter", "Confirm search"),
            ("p", "Cycle price bands"),
            ("f", "Filter builds by purpose"),
        ],
    ),
    (
        "Configurator",
        &[
            ("Enter", "Put highlighted part in its slot"),
            ("d", "Empty the current slot"),
            ("c", "Clear all slots"),
            ("s", "Save configuration as a build"),
            ("x", "Export part list to CSV"),
        ],
    ),
    (
        "Comparison",
        &[
            ("Enter", "Add / remove highlighted build"),
            ("n", "Next side-by-side pair"),
            ("p", "Previous side-by-side pair"),
        ],
    ),
    (
        "Profile",
        &[
            ("Tab", "Next form field"),
            ("Ctrl+t", "Toggle sign in / sign up"),
            ("Enter", "Submit form"),
            ("d", "Delete saved build"),
            ("x", "Export saved build to CSV"),
            ("o", "Sign out"),
        ],
    ),
    (
        "General",
        &[("?", "Show this help"), ("q", "Quit / Close dialog")],
    ),
];

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (title, shortcuts) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));

        for (key, description) in *shortcuts {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:12}", key),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                return Ok(Some(Action::CloseModal));
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = area.inner(Margin {
            horizontal: 6,
            vertical: 2,
        });
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible = dialog_area.height.saturating_sub(2) as usize;

        self.scroll_offset = self.scroll_offset.min(total.saturating_sub(visible));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}
