//! Table component for aligned columnar display
//!
//! Renders the side-by-side comparison grid: a label column plus one
//! column per build, with headers, truncation, and scrolling.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a column may grow before its cells are truncated
const MAX_COL_WIDTH: usize = 40;

/// Scrollable grid of pre-formatted cells. The first column holds field
/// labels, the rest hold one build each.
pub struct TableComponent {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    title: String,
    scroll: usize,
}

impl Default for TableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TableComponent {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            title: "Table".to_string(),
            scroll: 0,
        }
    }

    /// Replace the grid content and rewind the scroll
    pub fn set_data(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.headers = headers;
        self.rows = rows;
        self.scroll = 0;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Widest cell per column, capped so one runaway description cannot
    /// shove the other columns off screen
    fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in rows {
            for (cell, width) in row.iter().zip(widths.iter_mut()) {
                *width = (*width).max(cell.width());
            }
        }
        for width in &mut widths {
            *width = (*width).min(MAX_COL_WIDTH);
        }
        widths
    }

    /// Fit a cell to an exact display width: truncate with an ellipsis
    /// when over, pad with spaces when under. Width is measured in
    /// terminal columns, not bytes.
    fn fit_cell(cell: &str, width: usize) -> String {
        let mut out = if cell.width() > width {
            let budget = width.saturating_sub(3);
            let mut kept = String::new();
            let mut used = 0;
            for c in cell.chars() {
                let w = c.to_string().width();
                if used + w > budget {
                    break;
                }
                kept.push(c);
                used += w;
            }
            format!("{kept}...")
        } else {
            cell.to_string()
        };
        let padding = width.saturating_sub(out.width());
        out.extend(std::iter::repeat(' ').take(padding));
        out
    }

    /// One grid row as a line, with a column separator between cells and
    /// a per-column style
    fn grid_line(
        cells: &[String],
        widths: &[usize],
        style_for: impl Fn(usize) -> Style,
    ) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(Self::fit_cell(cell, *width), style_for(i)));
        }
        Line::from(spans)
    }

    /// The whole grid as lines: header, rule, then one line per row
    fn grid_lines(&self) -> Vec<Line<'static>> {
        if self.headers.is_empty() {
            return vec![Line::from("Nothing to compare")];
        }

        let widths = Self::column_widths(&self.headers, &self.rows);
        let header_style = |_: usize| {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        let row_style = |col: usize| {
            if col == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            }
        };

        let mut lines = vec![Self::grid_line(&self.headers, &widths, header_style)];

        let rule: String = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            rule,
            Style::default().fg(Color::DarkGray),
        )));

        for row in &self.rows {
            lines.push(Self::grid_line(row, &widths, row_style));
        }

        lines
    }
}

impl Component for TableComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let step: isize = match action {
            Action::ScrollDown => 1,
            Action::ScrollUp => -1,
            Action::PageDown => 10,
            Action::PageUp => -10,
            _ => 0,
        };
        self.scroll = if step < 0 {
            self.scroll.saturating_sub(step.unsigned_abs())
        } else {
            self.scroll.saturating_add(step as usize)
        };
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = self.grid_lines();
        let total = content.len();
        let visible = area.height.saturating_sub(2) as usize;

        // Update can only grow the offset; the real bound depends on the
        // viewport, so it is applied here
        self.scroll = self.scroll.min(total.saturating_sub(visible));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.title))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, area);

        if total > visible {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible)).position(self.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_cell_pads_and_truncates_to_exact_width() {
        assert_eq!(TableComponent::fit_cell("abc", 5), "abc  ");
        assert_eq!(TableComponent::fit_cell("abcde", 5), "abcde");
        assert_eq!(
            TableComponent::fit_cell("NVIDIA GeForce RTX 4090", 10),
            "NVIDIA ..."
        );
    }

    #[test]
    fn test_column_widths_track_widest_cell_up_to_cap() {
        let headers = vec!["".to_string(), "Rig".to_string()];
        let rows = vec![
            vec!["Price".to_string(), "$3499.99".to_string()],
            vec!["Notes".to_string(), "x".repeat(80)],
        ];
        let widths = TableComponent::column_widths(&headers, &rows);
        assert_eq!(widths, vec![5, MAX_COL_WIDTH]);
    }

    #[test]
    fn test_grid_lines_shape_and_empty_state() {
        let mut table = TableComponent::new();
        table.set_data(
            vec!["".to_string(), "Build A".to_string()],
            vec![
                vec!["Price".to_string(), "$3499.99".to_string()],
                vec!["Rating".to_string(), "4.9".to_string()],
            ],
        );
        // header + rule + 2 rows
        assert_eq!(table.grid_lines().len(), 4);

        table.set_data(Vec::new(), Vec::new());
        assert_eq!(table.grid_lines().len(), 1);
    }
}
