//! Compare screen component
//!
//! Picks up to three builds out of the pool (curated plus saved) and shows
//! the active pair side by side in a spec grid. Entering the screen
//! re-seeds the selection with the first two curated builds.

use crate::action::Action;
use crate::component::Component;
use crate::components::{split_list_detail, TableComponent};
use crate::model::ui::Screen;
use crate::model::{Category, ComparisonSet, DomainState, MAX_COMPARE};
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
// Compare Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Compare screen state: the pool in display order, the comparison set,
/// and the embedded grid
pub struct CompareComponent {
    /// Every eligible build id, curated first then saved
    pub pool: Vec<String>,

    /// Current selection and the remaining pool
    pub set: ComparisonSet,

    /// Cursor over the pool list
    pub list_state: ListState,

    /// Which pair page is shown when three builds are selected
    pub pair_index: usize,

    /// The side-by-side grid
    pub table: TableComponent,
}

impl Default for CompareComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            pool: Vec::new(),
            set: ComparisonSet::default(),
            list_state,
            pair_index: 0,
            table: TableComponent::new(),
        }
    }

    /// Re-seed from the domain: full pool, first two curated builds
    /// selected. Called every time the screen is entered.
    pub fn sync(&mut self, domain: &DomainState) {
        self.pool = domain.compare_pool();

        let seed: Vec<&str> = domain
            .catalog
            .builds
            .iter()
            .take(2)
            .map(|b| b.id.as_str())
            .collect();
        self.set = ComparisonSet::seeded(self.pool.clone(), &seed);

        self.pair_index = 0;
        self.list_state.select(Some(0));
        self.rebuild_table(domain);
    }

    /// The build id under the cursor
    pub fn highlighted_id(&self) -> Option<&str> {
        let index = self.list_state.selected()?;
        self.pool.get(index).map(|s| s.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the cursor to the next pool entry, wrapping at the end
    pub fn next(&mut self) {
        if self.pool.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % self.pool.len()));
    }

    /// Move the cursor to the previous pool entry, wrapping at the start
    pub fn previous(&mut self) {
        if self.pool.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            self.pool.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        self.list_state.select(Some(0));
    }

    pub fn select_last(&mut self) {
        if !self.pool.is_empty() {
            self.list_state.select(Some(self.pool.len() - 1));
        }
    }

    /// Advance to the next pair page
    pub fn next_pair(&mut self) {
        self.pair_index = (self.pair_index + 1) % self.set.pair_count();
    }

    /// Step back to the previous pair page
    pub fn previous_pair(&mut self) {
        let count = self.set.pair_count();
        self.pair_index = if self.pair_index == 0 {
            count - 1
        } else {
            self.pair_index - 1
        };
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Grid
    // ─────────────────────────────────────────────────────────────────────────

    /// Rebuild the grid for the active pair. Call after any change to the
    /// selection or the pair index.
    pub fn rebuild_table(&mut self, domain: &DomainState) {
        self.pair_index %= self.set.pair_count();

        let pair = self.set.active_pair(self.pair_index);
        let (headers, rows) = build_comparison_rows(domain, pair);
        self.table.set_data(headers, rows);

        let title = if self.set.pair_count() > 1 {
            format!(" Comparison ({}/{}) ", self.pair_index + 1, self.set.pair_count())
        } else {
            " Comparison ".to_string()
        };
        self.table.set_title(title);
    }
}

/// Grid content for a pair of builds: one label column plus a column per
/// present build
pub fn build_comparison_rows(
    domain: &DomainState,
    pair: (Option<&str>, Option<&str>),
) -> (Vec<String>, Vec<Vec<String>>) {
    let builds: Vec<_> = [pair.0, pair.1]
        .iter()
        .filter_map(|id| id.and_then(|id| domain.find_build(id)))
        .collect();

    if builds.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut headers = vec![String::new()];
    headers.extend(builds.iter().map(|b| b.name.clone()));

    let mut rows = Vec::new();
    let mut push_row = |label: &str, cells: Vec<String>| {
        let mut row = vec![label.to_string()];
        row.extend(cells);
        rows.push(row);
    };

    push_row("Tier", builds.iter().map(|b| b.tier.clone()).collect());
    push_row(
        "Price",
        builds.iter().map(|b| format!("${:.2}", b.price)).collect(),
    );
    push_row(
        "Rating",
        builds
            .iter()
            .map(|b| {
                if b.rating > 0.0 {
                    format!("{:.1}", b.rating)
                } else {
                    "-".to_string()
                }
            })
            .collect(),
    );
    push_row(
        "Purposes",
        builds
            .iter()
            .map(|b| {
                if b.purposes.is_empty() {
                    "-".to_string()
                } else {
                    b.purposes.join(", ")
                }
            })
            .collect(),
    );
    push_row(
        "Saved",
        builds
            .iter()
            .map(|b| {
                b.date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string())
            })
            .collect(),
    );

    for category in Category::all() {
        push_row(
            category.name(),
            builds
                .iter()
                .map(|b| {
                    b.components
                        .get(&category)
                        .and_then(|id| domain.catalog.part(id))
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| "-".to_string())
                })
                .collect(),
        );
    }

    push_row(
        "Parts total",
        builds
            .iter()
            .map(|b| format!("${:.2}", crate::model::catalog::total_price(domain.catalog.build_parts(b))))
            .collect(),
    );

    (headers, rows)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for CompareComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Membership and pair paging
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleCompare),
            KeyCode::Char('n') => Some(Action::NextPair),
            KeyCode::Char('p') => Some(Action::PrevPair),

            // Scrolling (with Ctrl for the grid)
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
        // Updates are handled by App which has access to the domain
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_compare_screen
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the compare screen into the content and help areas
pub fn draw_compare_screen(
    frame: &mut Frame,
    content: Rect,
    help: Rect,
    compare: &mut CompareComponent,
    domain: &DomainState,
) -> Result<()> {
    let (list_area, grid_area) = split_list_detail(content);
    render_pool_list(frame, list_area, compare, domain);
    compare.table.draw(frame, grid_area)?;

    render_help_bar(frame, help);

    Ok(())
}

fn render_pool_list(
    frame: &mut Frame,
    area: Rect,
    compare: &mut CompareComponent,
    domain: &DomainState,
) {
    let items: Vec<ListItem> = compare
        .pool
        .iter()
        .map(|id| {
            let in_set = compare.set.contains(id);
            let marker = if in_set { "✓ " } else { "  " };
            let name_style = if in_set {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Green))];
            match domain.find_build(id) {
                Some(build) => {
                    spans.push(Span::styled(build.name.clone(), name_style));
                    if build.date.is_some() {
                        spans.push(Span::styled(
                            " (saved)",
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                }
                None => spans.push(Span::styled(id.clone(), name_style)),
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Compare ({}/{}) ", compare.set.len(), MAX_COMPARE);

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

    frame.render_stateful_widget(list, area, &mut compare.list_state);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(
            " Enter ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Toggle "),
        Span::styled(
            " n/p ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Pair "),
        Span::styled(
            " j/k ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Navigate "),
        Span::styled(
            " ? ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Help "),
        Span::styled(
            " q ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Quit"),
    ];

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}
