//! Parts screen component
//!
//! Browsable catalog of individual components: category tabs, search,
//! price bands, and a detail panel for the highlighted part.

use crate::action::Action;
use crate::component::Component;
use crate::components::split_list_detail;
use crate::model::ui::Screen;
use crate::model::{Catalog, Category, Filter, Part, PART_PRICE_BANDS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Parts Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Parts screen state: active category tab, list selection, search, and
/// the selected price band
pub struct PartsComponent {
    /// Active category tab (None is the "All" tab)
    pub active_tab: Option<Category>,

    /// List selection state
    pub list_state: ListState,

    /// Search query string
    pub search_query: String,

    /// Whether search mode is active
    pub search_mode: bool,

    /// Index into `PART_PRICE_BANDS`
    pub price_band: usize,
}

impl Default for PartsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PartsComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            active_tab: None,
            list_state,
            search_query: String::new(),
            search_mode: false,
            price_band: 0,
        }
    }

    /// Tab order: "All" followed by every category
    pub fn tabs() -> Vec<Option<Category>> {
        let mut tabs = vec![None];
        tabs.extend(Category::all().into_iter().map(Some));
        tabs
    }

    /// The filter the current tab, search query, and price band describe
    pub fn current_filter(&self) -> Filter {
        let band = PART_PRICE_BANDS[self.price_band];
        Filter {
            category: self.active_tab,
            query: self.search_query.clone(),
            price_min: band.min,
            price_max: band.max,
            purpose: None,
        }
    }

    /// Parts matching the current filter, in catalog order
    pub fn filtered_parts<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Part> {
        self.current_filter().filter_parts(&catalog.parts)
    }

    /// The currently highlighted part
    pub fn selected_part<'a>(&self, catalog: &'a Catalog) -> Option<&'a Part> {
        let index = self.list_state.selected()?;
        self.filtered_parts(catalog).get(index).copied()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Switch to the next category tab
    pub fn next_tab(&mut self) {
        let tabs = Self::tabs();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        self.active_tab = tabs[(current + 1) % tabs.len()];
        self.select_first();
    }

    /// Switch to the previous category tab
    pub fn previous_tab(&mut self) {
        let tabs = Self::tabs();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        let prev = if current == 0 { tabs.len() - 1 } else { current - 1 };
        self.active_tab = tabs[prev];
        self.select_first();
    }

    /// Select the next part, wrapping at the end
    pub fn next(&mut self, catalog: &Catalog) {
        let len = self.filtered_parts(catalog).len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// Select the previous part, wrapping at the start
    pub fn previous(&mut self, catalog: &Catalog) {
        let len = self.filtered_parts(catalog).len();
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
        let len = self.filtered_parts(catalog).len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search & Filters
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Add character to search query
    pub fn search_input(&mut self, c: char) {
        self.search_query.push(c);
        self.select_first();
    }

    /// Remove last character from search query
    pub fn search_backspace(&mut self) {
        self.search_query.pop();
        self.select_first();
    }

    /// Advance to the next price band, wrapping back to "Any price"
    pub fn cycle_price_band(&mut self) {
        self.price_band = (self.price_band + 1) % PART_PRICE_BANDS.len();
        self.select_first();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for PartsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Scrolling (with Ctrl for detail panel)
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollDown)
            }
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollUp)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),

            // Search & filters
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('p') => Some(Action::CyclePriceBand),

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
        // Drawing is done through draw_parts_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the parts screen into the content and help areas
pub fn draw_parts_screen(
    frame: &mut Frame,
    content: Rect,
    help: Rect,
    parts: &mut PartsComponent,
    detail: &mut crate::components::DetailComponent,
    catalog: &Catalog,
) -> Result<()> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(content);

    render_category_tabs(frame, chunks[0], parts);

    let (list_area, detail_area) = split_list_detail(chunks[1]);
    render_part_list(frame, list_area, parts, catalog);

    let selected = parts.selected_part(catalog);
    detail.set_part(selected);
    detail.draw(frame, detail_area)?;

    render_help_bar(frame, help, parts);

    Ok(())
}

fn render_category_tabs(frame: &mut Frame, area: Rect, parts: &PartsComponent) {
    let tabs = PartsComponent::tabs();
    let titles: Vec<&str> = tabs
        .iter()
        .map(|t| t.as_ref().map(|c| c.name()).unwrap_or("All"))
        .collect();
    let selected = tabs
        .iter()
        .position(|t| *t == parts.active_tab)
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

fn render_part_list(frame: &mut Frame, area: Rect, parts: &mut PartsComponent, catalog: &Catalog) {
    let filtered = parts.filtered_parts(catalog);

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|part| {
            ListItem::new(Line::from(vec![
                Span::styled(part.name.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  ${:.2}", part.price),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    // Title with count and active price band
    let mut title = format!(" Components ({}) ", filtered.len());
    if parts.price_band != 0 {
        title = format!(
            "{}[{}] ",
            title,
            PART_PRICE_BANDS[parts.price_band].label
        );
    }

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

    frame.render_stateful_widget(list, area, &mut parts.list_state);
}

fn render_help_bar(frame: &mut Frame, area: Rect, parts: &PartsComponent) {
    let help_spans = if parts.search_mode {
        vec![
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel  "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Confirm  "),
            Span::styled(
                format!("Search: {}", parts.search_query),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            Span::styled(
                " q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit "),
            Span::styled(
                " / ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Search "),
            Span::styled(
                " p ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Price "),
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
        ]
    };

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}
