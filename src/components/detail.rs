//! Detail panel component
//!
//! Displays the highlighted part or build: pricing, rating, wrapped
//! description, and the spec table or component roster. Shared by the
//! Parts, Builds, and Profile screens.

use crate::action::Action;
use crate::component::Component;
use crate::model::{Build, Catalog, Category, Part};
use anyhow::Result;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Wrap budget for descriptions
const WRAP_WIDTH: usize = 72;

/// Detail panel component for displaying part or build information
pub struct DetailComponent {
    /// Current scroll offset
    scroll: usize,
    /// Cached content lines
    content: Vec<Line<'static>>,
    /// Panel title
    title: String,
    /// Identity of the rendered item; the setters are called on every
    /// frame, so rebuilds are skipped while this is unchanged to keep
    /// the scroll position
    shown: Option<String>,
}

impl Default for DetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailComponent {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            content: vec![Line::from("Nothing selected")],
            title: "Detail".to_string(),
            shown: None,
        }
    }

    /// Update content for the highlighted part
    pub fn set_part(&mut self, part: Option<&Part>) {
        let key = match part {
            Some(part) => format!("part:{}", part.id),
            None => "part:".to_string(),
        };
        if self.shown.as_deref() == Some(key.as_str()) {
            return;
        }
        self.shown = Some(key);
        self.scroll = 0;

        match part {
            Some(part) => {
                self.title = part.category.name().to_string();
                self.content = render_part_detail(part);
            }
            None => {
                self.title = "Detail".to_string();
                self.content = vec![Line::from("No part selected")];
            }
        }
    }

    /// Update content for the highlighted build
    pub fn set_build(&mut self, build: Option<&Build>, catalog: &Catalog) {
        let key = match build {
            Some(build) => format!("build:{}", build.id),
            None => "build:".to_string(),
        };
        if self.shown.as_deref() == Some(key.as_str()) {
            return;
        }
        self.shown = Some(key);
        self.scroll = 0;

        match build {
            Some(build) => {
                self.title = "Build".to_string();
                self.content = render_build_detail(build, catalog);
            }
            None => {
                self.title = "Detail".to_string();
                self.content = vec![Line::from("No build selected")];
            }
        }
    }
}

impl Component for DetailComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let step: isize = match action {
            Action::ScrollDown => 1,
            Action::ScrollUp => -1,
            Action::PageDown => 20,
            Action::PageUp => -20,
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
        let total = self.content.len();
        let visible = area.height.saturating_sub(2) as usize;

        // The scroll bound depends on the viewport, so it is applied here
        // rather than in update
        self.scroll = self.scroll.min(total.saturating_sub(visible));

        let paragraph = Paragraph::new(self.content.clone())
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

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering helpers
// ═══════════════════════════════════════════════════════════════════════════════

fn header_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}:", text),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn separator_line() -> Line<'static> {
    Line::from(Span::styled(
        "═══════════════════════════════════════════════════════════",
        Style::default().fg(Color::DarkGray),
    ))
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}

/// Star rating like "★★★★☆ 4.8"
pub fn stars(rating: f64) -> String {
    let filled = (rating.floor().max(0.0) as usize).min(5);
    format!("{}{} {:.1}", "★".repeat(filled), "☆".repeat(5 - filled), rating)
}

/// Greedy word wrap measured in display columns
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn render_part_detail(part: &Part) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        part.name.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(field_line("Brand", part.brand.clone()));
    lines.push(field_line("Category", part.category.name().to_string()));
    lines.push(field_line("Price", format!("${:.2}", part.price)));
    if part.rating > 0.0 {
        lines.push(field_line("Rating", stars(part.rating)));
    }
    lines.push(Line::from(""));

    if !part.description.is_empty() {
        lines.push(header_line("Description"));
        lines.push(separator_line());
        for wrapped in wrap_text(&part.description, WRAP_WIDTH) {
            lines.push(Line::from(wrapped));
        }
        lines.push(Line::from(""));
    }

    if !part.specs.is_empty() {
        lines.push(header_line("Specifications"));
        lines.push(separator_line());
        let label_width = part
            .specs
            .iter()
            .map(|s| s.name.width())
            .max()
            .unwrap_or(0);
        for spec in &part.specs {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", spec.name, width = label_width),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(spec.value.to_string()),
            ]));
        }
    }

    lines
}

fn render_build_detail(build: &Build, catalog: &Catalog) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        build.name.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(field_line("Tier", build.tier.clone()));
    lines.push(field_line("Price", format!("${:.2}", build.price)));
    if build.rating > 0.0 {
        lines.push(field_line("Rating", stars(build.rating)));
    }
    if !build.purposes.is_empty() {
        lines.push(field_line("Purposes", build.purposes.join(", ")));
    }
    if let Some(date) = build.date {
        lines.push(field_line("Saved", date.format("%Y-%m-%d").to_string()));
    }
    lines.push(Line::from(""));

    if !build.description.is_empty() {
        lines.push(header_line("Description"));
        lines.push(separator_line());
        for wrapped in wrap_text(&build.description, WRAP_WIDTH) {
            lines.push(Line::from(wrapped));
        }
        lines.push(Line::from(""));
    }

    lines.push(header_line("Components"));
    lines.push(separator_line());
    let mut roster_total = 0.0;
    for category in Category::all() {
        let entry = build
            .components
            .get(&category)
            .and_then(|id| catalog.part(id));
        let (name, price) = match entry {
            Some(part) => {
                roster_total += part.price;
                (part.name.clone(), format!("${:.2}", part.price))
            }
            None => ("-".to_string(), String::new()),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", category.name()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("{:<32}", name)),
            Span::styled(price, Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Components total: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("${:.2}", roster_total),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    lines
}
