//! Configurator screen component
//!
//! Assembles a build one category slot at a time. The component owns the
//! in-progress `Configuration`; switching away from the screen discards it.

use crate::action::Action;
use crate::component::Component;
use crate::components::split_list_detail;
use crate::model::ui::Screen;
use crate::model::{Catalog, Category, Configuration, Part};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Configurator Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Configurator screen state: active category slot, list selection, and
/// the build in progress
pub struct ConfiguratorComponent {
    /// Category whose parts are listed
    pub active_tab: Category,

    /// List selection state
    pub list_state: ListState,

    /// The build in progress
    pub config: Configuration,
}

impl Default for ConfiguratorComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfiguratorComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            active_tab: Category::Cpu,
            list_state,
            config: Configuration::new(),
        }
    }

    /// Discard the in-progress configuration and reset the cursor
    pub fn reset(&mut self) {
        self.active_tab = Category::Cpu;
        self.config = Configuration::new();
        self.select_first();
    }

    /// Parts available for the active category, in catalog order
    pub fn parts_for_tab<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Part> {
        catalog.parts_by_category(self.active_tab)
    }

    /// The currently highlighted part
    pub fn selected_part<'a>(&self, catalog: &'a Catalog) -> Option<&'a Part> {
        let index = self.list_state.selected()?;
        self.parts_for_tab(catalog).get(index).copied()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Switch to the next category slot
    pub fn next_tab(&mut self) {
        let tabs = Category::all();
        let current = tabs.iter().position(|c| *c == self.active_tab).unwrap_or(0);
        self.active_tab = tabs[(current + 1) % tabs.len()];
        self.select_first();
    }

    /// Switch to the previous category slot
    pub fn previous_tab(&mut self) {
        let tabs = Category::all();
        let current = tabs.iter().position(|c| *c == self.active_tab).unwrap_or(0);
        let prev = if current == 0 { tabs.len() - 1 } else { current - 1 };
        self.active_tab = tabs[prev];
        self.select_first();
    }

    /// Select the next part, wrapping at the end
    pub fn next(&mut self, catalog: &Catalog) {
        let len = self.parts_for_tab(catalog).len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// Select the previous part, wrapping at the start
    pub fn previous(&mut self, catalog: &Catalog) {
        let len = self.parts_for_tab(catalog).len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        self.list_state.select(Some(0));
    }

    pub fn select_last(&mut self, catalog: &Catalog) {
        let len = self.parts_for_tab(catalog).len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Slot Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Put the highlighted part in its slot, replacing any occupant.
    /// Returns the name of the part that was selected.
    pub fn select_highlighted(&mut self, catalog: &Catalog) -> Option<String> {
        let part = self.selected_part(catalog)?;
        let name = part.name.clone();
        self.config.select(part);
        Some(name)
    }

    /// Empty the active category slot; `None` if it was already empty
    pub fn remove_slot(&mut self) -> Option<String> {
        self.config.remove(self.active_tab)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for ConfiguratorComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Slot operations
            KeyCode::Enter => Some(Action::SelectPart),
            KeyCode::Char('d') => Some(Action::RemoveSlot),
            KeyCode::Char('c') => Some(Action::ClearConfiguration),
            KeyCode::Char('s') => Some(Action::OpenSaveDialog),
            KeyCode::Char('x') => Some(Action::ExportParts),

            // Screens
            KeyCode::Char(c @ '1'..='5') => Screen::all()
                .into_iter()
                .find(|s| s.key() == c)
                .map(Action::SwitchScreen),

            // Modals
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Updates are handled by App which has access to the catalog
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_configurator_screen
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the configurator screen into the content and help areas
pub fn draw_configurator_screen(
    frame: &mut Frame,
    content: Rect,
    help: Rect,
    configurator: &mut ConfiguratorComponent,
    catalog: &Catalog,
) -> Result<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(content);

    render_category_tabs(frame, chunks[0], configurator);

    let (list_area, summary_area) = split_list_detail(chunks[1]);
    render_part_list(frame, list_area, configurator, catalog);
    render_summary(frame, summary_area, configurator, catalog);

    render_help_bar(frame, help);

    Ok(())
}

fn render_category_tabs(frame: &mut Frame, area: Rect, configurator: &ConfiguratorComponent) {
    let categories = Category::all();
    let titles: Vec<&str> = categories.iter().map(|c| c.name()).collect();
    let selected = categories
        .iter()
        .position(|c| *c == configurator.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_part_list(
    frame: &mut Frame,
    area: Rect,
    configurator: &mut ConfiguratorComponent,
    catalog: &Catalog,
) {
    let parts = configurator.parts_for_tab(catalog);
    let current = configurator.config.selected(configurator.active_tab);

    let items: Vec<ListItem> = parts
        .iter()
        .map(|part| {
            let in_slot = current == Some(part.id.as_str());
            let marker = if in_slot { "✓ " } else { "  " };
            let name_style = if in_slot {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(part.name.clone(), name_style),
                Span::styled(
                    format!("  ${:.2}", part.price),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let title = format!(" {} ({}) ", configurator.active_tab.name(), parts.len());

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut configurator.list_state);
}

fn render_summary(
    frame: &mut Frame,
    area: Rect,
    configurator: &ConfiguratorComponent,
    catalog: &Catalog,
) {
    let mut lines = Vec::new();

    for (category, slot) in configurator.config.slots() {
        let is_active = category == configurator.active_tab;
        let label_style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let (name_span, price_span) = match slot.and_then(|id| catalog.part(id)) {
            Some(part) => (
                Span::styled(format!("{:<32}", part.name), Style::default().fg(Color::White)),
                Span::styled(
                    format!("${:.2}", part.price),
                    Style::default().fg(Color::Green),
                ),
            ),
            None => (
                Span::styled(format!("{:<32}", "-"), Style::default().fg(Color::DarkGray)),
                Span::raw(""),
            ),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", category.name()), label_style),
            name_span,
            price_span,
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("${:.2}", configurator.config.total_price(catalog)),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({}/{} slots)", configurator.config.selected_count(), Category::all().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    if configurator.config.is_complete() {
        lines.push(Line::from(Span::styled(
            "Complete",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Incomplete",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your Build ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(
            " Enter ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Select "),
        Span::styled(
            " d ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Remove "),
        Span::styled(
            " c ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Clear "),
        Span::styled(
            " s ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Save "),
        Span::styled(
            " x ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Export "),
        Span::styled(
            " Tab ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Category "),
        Span::styled(
            " ? ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Help"),
    ];

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}
