//! Builds screen component
//!
//! Browsable list of curated builds with search, price bands, and a
//! purpose filter. The detail panel shows the highlighted build's
//! component roster.

use crate::action::Action;
use crate::component::Component;
use crate::components::split_list_detail;
use crate::model::ui::Screen;
use crate::model::{Build, Catalog, Filter, BUILD_PRICE_BANDS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Builds Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Builds screen state: list selection, search, price band, and the
/// active purpose filter
pub struct BuildsComponent {
    /// List selection state
    pub list_state: ListState,

    /// Search query string
    pub search_query: String,

    /// Whether search mode is active
    pub search_mode: bool,

    /// Index into `BUILD_PRICE_BANDS`
    pub price_band: usize,

    /// Current purpose filter (empty means no filter)
    pub purpose_filter: String,
}

impl Default for BuildsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildsComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            search_query: String::new(),
            search_mode: false,
            price_band: 0,
            purpose_filter: String::new(),
        }
    }

    /// The filter the search query, price band, and purpose describe
    pub fn current_filter(&self) -> Filter {
        let band = BUILD_PRICE_BANDS[self.price_band];
        Filter {
            category: None,
            query: self.search_query.clone(),
            price_min: band.min,
            price_max: band.max,
            purpose: if self.purpose_filter.is_empty() {
                None
            } else {
                Some(self.purpose_filter.clone())
            },
        }
    }

    /// Curated builds matching the current filter, in catalog order
    pub fn filtered_builds<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Build> {
        self.current_filter().filter_builds(&catalog.builds)
    }

    /// The currently highlighted build
    pub fn selected_build<'a>(&self, catalog: &'a Catalog) -> Option<&'a Build> {
        let index = self.list_state.selected()?;
        self.filtered_builds(catalog).get(index).copied()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select the next build, wrapping at the end
    pub fn next(&mut self, catalog: &Catalog) {
        let len = self.filtered_builds(catalog).len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// Select the previous build, wrapping at the start
    pub fn previous(&mut self, catalog: &Catalog) {
        let len = self.filtered_builds(catalog).len();
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
        let len = self.filtered_builds(catalog).len();
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
        self.price_band = (self.price_band + 1) % BUILD_PRICE_BANDS.len();
        self.select_first();
    }

    /// Set the purpose filter
    pub fn set_purpose_filter(&mut self, purpose: String) {
        self.purpose_filter = purpose;
        self.select_first();
    }

    /// Clear the purpose filter
    pub fn clear_purpose_filter(&mut self) {
        self.purpose_filter.clear();
        self.select_first();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for BuildsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
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
            KeyCode::Char('f') => Some(Action::OpenPurposeFilter),

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
        // Drawing is done through draw_builds_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the builds screen into the content and help areas
pub fn draw_builds_screen(
    frame: &mut Frame,
    content: Rect,
    help: Rect,
    builds: &mut BuildsComponent,
    detail: &mut crate::components::DetailComponent,
    catalog: &Catalog,
) -> Result<()> {
    let (list_area, detail_area) = split_list_detail(content);
    render_build_list(frame, list_area, builds, catalog);

    let selected = builds.selected_build(catalog);
    detail.set_build(selected, catalog);
    detail.draw(frame, detail_area)?;

    render_help_bar(frame, help, builds);

    Ok(())
}

fn render_build_list(
    frame: &mut Frame,
    area: Rect,
    builds: &mut BuildsComponent,
    catalog: &Catalog,
) {
    let filtered = builds.filtered_builds(catalog);

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|build| {
            ListItem::new(Line::from(vec![
                Span::styled(build.name.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!(" ({})", build.tier),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  ${:.2}", build.price),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    // Title with count and active filters
    let mut title = format!(" Builds ({}) ", filtered.len());
    if builds.price_band != 0 {
        title = format!("{}[{}] ", title, BUILD_PRICE_BANDS[builds.price_band].label);
    }
    if !builds.purpose_filter.is_empty() {
        title = format!("{}[{}] ", title, builds.purpose_filter);
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

    frame.render_stateful_widget(list, area, &mut builds.list_state);
}

fn render_help_bar(frame: &mut Frame, area: Rect, builds: &BuildsComponent) {
    let help_spans = if builds.search_mode {
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
                format!("Search: {}", builds.search_query),
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
                " f ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Purpose "),
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
