//! Purpose filter dialog component
//!
//! List dialog for picking the purpose tag the Builds screen filters by.
//! The first row clears the filter; the active purpose carries a marker.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct PurposeFilterDialog {
    /// Purpose tags offered below the clear row
    pub purposes: Vec<String>,
    /// Cursor over the rows; 0 is the clear row
    pub selected_index: usize,
    pub list_state: ListState,
    /// Purpose currently applied on the Builds screen, empty for none
    pub current_filter: String,
}

impl Default for PurposeFilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PurposeFilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            purposes: Vec::new(),
            selected_index: 0,
            list_state,
            current_filter: String::new(),
        }
    }

    /// Load the offered purposes and put the cursor on the active one
    /// (the clear row when no filter is applied)
    pub fn set_purposes(&mut self, purposes: Vec<String>, current_filter: &str) {
        self.purposes = purposes;
        self.current_filter = current_filter.to_string();
        self.move_to(
            self.purposes
                .iter()
                .position(|p| p == current_filter)
                .map_or(0, |idx| idx + 1),
        );
    }

    /// The purpose under the cursor; `None` on the clear row
    pub fn get_selected_purpose(&self) -> Option<&str> {
        self.selected_index
            .checked_sub(1)
            .and_then(|idx| self.purposes.get(idx))
            .map(String::as_str)
    }

    fn move_to(&mut self, index: usize) {
        self.selected_index = index.min(self.purposes.len());
        self.list_state.select(Some(self.selected_index));
    }

    /// Row labels with their active markers, clear row first
    fn rows(&self) -> Vec<(String, bool)> {
        let mut rows = vec![(
            "All purposes".to_string(),
            self.current_filter.is_empty(),
        )];
        for purpose in &self.purposes {
            rows.push((purpose.clone(), *purpose == self.current_filter));
        }
        rows
    }
}

impl Component for PurposeFilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => match self.get_selected_purpose() {
                Some(purpose) => Some(Action::SetPurposeFilter(purpose.to_string())),
                None => Some(Action::ClearPurposeFilter),
            },
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_to(self.selected_index.saturating_sub(1));
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_to(self.selected_index + 1);
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rows = self.rows();

        // Rows plus borders, one line of header, one blank
        let height = (rows.len() as u16 + 4).clamp(8, area.height.saturating_sub(2));
        let popup_area = centered_popup(area, 44u16.min(area.width.saturating_sub(4)), height);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Filter by Purpose ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(
                Line::from(vec![
                    Span::styled(" Enter ", Style::default().fg(Color::Green)),
                    Span::raw("Apply "),
                    Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
                    Span::raw("Cancel "),
                ])
                .alignment(Alignment::Center),
            );
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        if self.purposes.is_empty() {
            let notice = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No purposes in the catalog",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    "Purpose tags come from curated builds",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(notice, inner);
            return Ok(());
        }

        let items: Vec<ListItem> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (label, active))| {
                let marker = if active { "● " } else { "  " };
                let style = if active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if i == 0 {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(label, style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, inner, &mut self.list_state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purposes() -> Vec<String> {
        vec!["gaming", "streaming", "work"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_cursor_starts_on_active_purpose() {
        let mut dialog = PurposeFilterDialog::new();
        dialog.set_purposes(purposes(), "streaming");
        assert_eq!(dialog.selected_index, 2);
        assert_eq!(dialog.get_selected_purpose(), Some("streaming"));

        // No active filter puts the cursor on the clear row
        dialog.set_purposes(purposes(), "");
        assert_eq!(dialog.selected_index, 0);
        assert_eq!(dialog.get_selected_purpose(), None);
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut dialog = PurposeFilterDialog::new();
        dialog.set_purposes(purposes(), "");

        dialog.move_to(0);
        dialog.move_to(dialog.selected_index.saturating_sub(1));
        assert_eq!(dialog.selected_index, 0);

        for _ in 0..10 {
            dialog.move_to(dialog.selected_index + 1);
        }
        assert_eq!(dialog.selected_index, 3);
        assert_eq!(dialog.get_selected_purpose(), Some("work"));
    }
}
