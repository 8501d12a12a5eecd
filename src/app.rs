//! Root application component
//!
//! `App` routes every key event to exactly one receiver (the top modal,
//! the search field, or the active screen) and applies every action in
//! one `update` match. Cross-cutting effects, anything touching the
//! domain plus a component, live here and nowhere else.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_builds_screen, draw_compare_screen, draw_configurator_screen,
    draw_parts_screen, draw_profile_screen, BuildsComponent, CompareComponent,
    ConfiguratorComponent, DetailComponent, HelpDialog, PartsComponent, ProfileComponent,
    PurposeFilterDialog, QuitDialog, SplashComponent,
};
use crate::components::profile::AuthMode;
use crate::config::Config;
use crate::model::domain::{Account, DomainState};
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{AppMode, Screen};
use crate::model::{Catalog, Category};
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// App State
// ═══════════════════════════════════════════════════════════════════════════════

/// Root state: domain data plus every screen and dialog component
pub struct App {
    /// Splash or running
    pub mode: AppMode,

    /// Active screen
    pub screen: Screen,

    /// Catalog, saved builds, account
    pub domain: DomainState,

    /// Overlay stack; the top entry receives input
    pub modals: ModalStack,

    /// Set when the main loop should stop
    pub should_quit: bool,

    /// Shown in red on the status line until the next screen switch
    pub error: Option<String>,

    /// One-shot feedback (saved, exported, deleted) on the status line
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub parts: PartsComponent,
    pub builds: BuildsComponent,
    pub configurator: ConfiguratorComponent,
    pub compare: CompareComponent,
    pub profile: ProfileComponent,
    pub detail: DetailComponent,
    pub quit_dialog: QuitDialog,
    pub purpose_filter_dialog: PurposeFilterDialog,
    pub help_dialog: HelpDialog,

    /// Persisted profile identity
    pub config: Config,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Construction & Screen Plumbing
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance with the embedded catalog loaded
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();

        let (domain, error) = match services::load_seed() {
            Ok(seed) => (DomainState::new(seed.catalog, seed.saved_builds), None),
            Err(e) => (
                DomainState::new(Catalog::new(Vec::new(), Vec::new()), Vec::new()),
                Some(format!("Failed to load catalog: {}", e)),
            ),
        };

        let mut app = App {
            mode: AppMode::Splash,
            screen: Screen::Parts,
            domain,
            modals: ModalStack::default(),
            should_quit: false,
            error,
            status_message: None,
            // Components
            splash: SplashComponent::default(),
            parts: PartsComponent::new(),
            builds: BuildsComponent::new(),
            configurator: ConfiguratorComponent::new(),
            compare: CompareComponent::new(),
            profile: ProfileComponent::new(),
            detail: DetailComponent::new(),
            quit_dialog: QuitDialog,
            purpose_filter_dialog: PurposeFilterDialog::new(),
            help_dialog: HelpDialog::default(),
            config,
        };

        app.compare.sync(&app.domain);
        app
    }

    /// True when the active screen is in incremental-search mode
    fn search_mode_active(&self) -> bool {
        match self.screen {
            Screen::Parts => self.parts.search_mode,
            Screen::Builds => self.builds.search_mode,
            _ => false,
        }
    }

    /// Switch screens, running the leave/enter hooks
    fn switch_screen(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }

        // The in-progress configuration is discarded when the screen is left
        if self.screen == Screen::Configurator {
            self.configurator.reset();
        }

        // The comparison set re-seeds on every entry
        if screen == Screen::Compare {
            self.compare.sync(&self.domain);
        }

        self.error = None;
        self.status_message = None;
        self.screen = screen;
    }

    /// Write the relevant parts list as a CSV into the working directory
    fn export_parts(&mut self) {
        let (parts, stem, date) = match self.screen {
            Screen::Configurator => (
                self.configurator.config.selected_parts(&self.domain.catalog),
                "custom-build".to_string(),
                Local::now().date_naive(),
            ),
            Screen::Profile => match self.profile.selected_saved(&self.domain) {
                Some(build) => (
                    self.domain.catalog.build_parts(build),
                    build.name.clone(),
                    build.date.unwrap_or_else(|| Local::now().date_naive()),
                ),
                None => return,
            },
            _ => return,
        };

        if parts.is_empty() {
            self.error = Some("Nothing to export".to_string());
            return;
        }

        let file_name = services::export_file_name(&stem, date);
        match services::write_parts_csv(std::path::Path::new(&file_name), &parts) {
            Ok(()) => {
                self.status_message = Some(format!("Exported {}", file_name));
                self.error = None;
            }
            Err(e) => self.error = Some(format!("Export failed: {}", e)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.search_mode_active() {
                    self.handle_search_key_event(key)
                } else {
                    match self.screen {
                        Screen::Parts => self.parts.handle_key_event(key),
                        Screen::Builds => self.builds.handle_key_event(key),
                        Screen::Configurator => self.configurator.handle_key_event(key),
                        Screen::Compare => self.compare.handle_key_event(key),
                        Screen::Profile => self
                            .profile
                            .handle_key_event_for(self.domain.account.is_some(), key),
                    }
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // The wheel scrolls whatever panel the Ctrl-e/y keys scroll.
        // Modals handle their own scrolling through keys only.
        if self.mode != AppMode::Running || !self.modals.is_empty() {
            return Ok(None);
        }
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
                // Poll the simulated authentication delay
                if self.profile.auth_ready() {
                    return Ok(Some(Action::CompleteAuth));
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Screen Switching
            // ─────────────────────────────────────────────────────────────────
            Action::SwitchScreen(screen) => self.switch_screen(screen),

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to the active screen)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => match self.screen {
                Screen::Parts => self.parts.next(&self.domain.catalog),
                Screen::Builds => self.builds.next(&self.domain.catalog),
                Screen::Configurator => self.configurator.next(&self.domain.catalog),
                Screen::Compare => self.compare.next(),
                Screen::Profile => self.profile.next(&self.domain),
            },
            Action::PrevItem => match self.screen {
                Screen::Parts => self.parts.previous(&self.domain.catalog),
                Screen::Builds => self.builds.previous(&self.domain.catalog),
                Screen::Configurator => self.configurator.previous(&self.domain.catalog),
                Screen::Compare => self.compare.previous(),
                Screen::Profile => self.profile.previous(&self.domain),
            },
            Action::FirstItem => match self.screen {
                Screen::Parts => self.parts.select_first(),
                Screen::Builds => self.builds.select_first(),
                Screen::Configurator => self.configurator.select_first(),
                Screen::Compare => self.compare.select_first(),
                Screen::Profile => self.profile.select_first(),
            },
            Action::LastItem => match self.screen {
                Screen::Parts => self.parts.select_last(&self.domain.catalog),
                Screen::Builds => self.builds.select_last(&self.domain.catalog),
                Screen::Configurator => self.configurator.select_last(&self.domain.catalog),
                Screen::Compare => self.compare.select_last(),
                Screen::Profile => self.profile.select_last(&self.domain),
            },
            Action::NextTab => match self.screen {
                Screen::Parts => self.parts.next_tab(),
                Screen::Configurator => self.configurator.next_tab(),
                _ => {}
            },
            Action::PrevTab => match self.screen {
                Screen::Parts => self.parts.previous_tab(),
                Screen::Configurator => self.configurator.previous_tab(),
                _ => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (detail panel, or the grid on the Compare screen)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                match self.screen {
                    Screen::Compare => {
                        self.compare.table.update(action)?;
                    }
                    _ => {
                        self.detail.update(action)?;
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {
                // The purpose dialog moves its own cursor; mirror it into
                // the modal payload
                if let Some(Modal::PurposeFilter { selected_index }) = self.modals.top_mut() {
                    *selected_index = self.purpose_filter_dialog.selected_index;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Search (delegate to the active screen)
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => match self.screen {
                Screen::Parts => self.parts.enter_search_mode(),
                Screen::Builds => self.builds.enter_search_mode(),
                _ => {}
            },
            Action::ExitSearchMode => match self.screen {
                Screen::Parts => self.parts.exit_search_mode(),
                Screen::Builds => self.builds.exit_search_mode(),
                _ => {}
            },
            Action::SearchInput(c) => match self.screen {
                Screen::Parts => self.parts.search_input(c),
                Screen::Builds => self.builds.search_input(c),
                _ => {}
            },
            Action::SearchBackspace => match self.screen {
                Screen::Parts => self.parts.search_backspace(),
                Screen::Builds => self.builds.search_backspace(),
                _ => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Action::CyclePriceBand => match self.screen {
                Screen::Parts => self.parts.cycle_price_band(),
                Screen::Builds => self.builds.cycle_price_band(),
                _ => {}
            },
            Action::OpenPurposeFilter => {
                self.purpose_filter_dialog
                    .set_purposes(self.domain.catalog.purposes(), &self.builds.purpose_filter);
                self.modals.push(Modal::PurposeFilter {
                    selected_index: self.purpose_filter_dialog.selected_index,
                });
            }
            Action::SetPurposeFilter(purpose) => {
                self.builds.set_purpose_filter(purpose);
                self.modals.pop();
            }
            Action::ClearPurposeFilter => {
                self.builds.clear_purpose_filter();
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Configurator
            // ─────────────────────────────────────────────────────────────────
            Action::SelectPart => {
                if let Some(name) = self.configurator.select_highlighted(&self.domain.catalog) {
                    self.status_message = Some(format!("Selected {}", name));
                }
            }
            Action::RemoveSlot => {
                if let Some(part_id) = self.configurator.remove_slot() {
                    let name = self
                        .domain
                        .catalog
                        .part(&part_id)
                        .map(|p| p.name.clone())
                        .unwrap_or(part_id);
                    self.status_message = Some(format!("Removed {}", name));
                }
            }
            Action::ClearConfiguration => {
                self.configurator.config.clear();
                self.status_message = Some("Cleared all selections".to_string());
            }
            Action::OpenSaveDialog => {
                self.modals.push(Modal::SaveBuild {
                    name: String::new(),
                });
            }
            Action::SaveBuild(name) => {
                let id = self.domain.next_saved_id();
                let date = Local::now().date_naive();
                match self
                    .configurator
                    .config
                    .snapshot(id, &name, date, &self.domain.catalog)
                {
                    Ok(build) => {
                        let build_name = build.name.clone();
                        self.domain.add_saved(build);
                        self.modals.pop();
                        self.error = None;
                        self.status_message = Some(format!("Saved '{}'", build_name));
                    }
                    // Dialog stays open so the name can be fixed
                    Err(e) => self.error = Some(e.to_string()),
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Compare
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleCompare => {
                if let Some(id) = self.compare.highlighted_id().map(str::to_string) {
                    let name = self
                        .domain
                        .find_build(&id)
                        .map(|b| b.name.clone())
                        .unwrap_or_else(|| id.clone());

                    let outcome = if self.compare.set.contains(&id) {
                        self.compare
                            .set
                            .remove(&id)
                            .map(|_| format!("{} removed from comparison", name))
                    } else {
                        self.compare
                            .set
                            .add(&id)
                            .map(|_| format!("{} added to comparison", name))
                    };

                    match outcome {
                        Ok(msg) => {
                            self.status_message = Some(msg);
                            self.error = None;
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    }

                    self.compare.rebuild_table(&self.domain);
                }
            }
            Action::NextPair => {
                self.compare.next_pair();
                self.compare.rebuild_table(&self.domain);
            }
            Action::PrevPair => {
                self.compare.previous_pair();
                self.compare.rebuild_table(&self.domain);
            }

            // ─────────────────────────────────────────────────────────────────
            // Profile & Auth
            // ─────────────────────────────────────────────────────────────────
            Action::SubmitAuth => {
                self.profile.submit();
            }
            Action::CompleteAuth => {
                let (auth_mode, name, email) = self.profile.complete();

                let account = match auth_mode {
                    AuthMode::SignIn => Account {
                        name: self.config.profile_name.clone(),
                        tagline: self.config.profile_tagline.clone(),
                        email,
                        member_since: self.config.member_since,
                    },
                    AuthMode::SignUp => {
                        let account = Account {
                            name,
                            tagline: self.config.profile_tagline.clone(),
                            email,
                            member_since: Local::now().date_naive(),
                        };
                        // A new account becomes the persisted identity
                        self.config.profile_name = account.name.clone();
                        self.config.profile_email = account.email.clone();
                        self.config.member_since = account.member_since;
                        if let Err(e) = self.config.save() {
                            self.error = Some(format!("Failed to save config: {}", e));
                        }
                        account
                    }
                };

                self.domain.account = Some(account);
                self.status_message = Some(match auth_mode {
                    AuthMode::SignIn => "You have been signed in. This is a demo.".to_string(),
                    AuthMode::SignUp => {
                        "Your account has been created. This is a demo.".to_string()
                    }
                });
            }
            Action::SignOut => {
                self.domain.account = None;
                self.profile.reset_form();
                self.status_message = Some("Signed out".to_string());
            }
            Action::DeleteSavedBuild => {
                let id = self
                    .profile
                    .selected_saved(&self.domain)
                    .map(|b| b.id.clone());
                if let Some(id) = id {
                    match self.domain.delete_saved(&id) {
                        Ok(build) => {
                            self.profile.clamp_selection(&self.domain);
                            self.status_message = Some(format!("Deleted '{}'", build.name));
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Export
            // ─────────────────────────────────────────────────────────────────
            Action::ExportParts => self.export_parts(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let layout = calculate_main_layout(area);

                self.render_screen_tabs(frame, layout.tabs);

                match self.screen {
                    Screen::Parts => draw_parts_screen(
                        frame,
                        layout.content,
                        layout.help,
                        &mut self.parts,
                        &mut self.detail,
                        &self.domain.catalog,
                    )?,
                    Screen::Builds => draw_builds_screen(
                        frame,
                        layout.content,
                        layout.help,
                        &mut self.builds,
                        &mut self.detail,
                        &self.domain.catalog,
                    )?,
                    Screen::Configurator => draw_configurator_screen(
                        frame,
                        layout.content,
                        layout.help,
                        &mut self.configurator,
                        &self.domain.catalog,
                    )?,
                    Screen::Compare => draw_compare_screen(
                        frame,
                        layout.content,
                        layout.help,
                        &mut self.compare,
                        &self.domain,
                    )?,
                    Screen::Profile => draw_profile_screen(
                        frame,
                        layout.content,
                        layout.help,
                        &mut self.profile,
                        &mut self.detail,
                        &self.domain,
                    )?,
                }

                self.render_status_bar(frame, layout.status);

                // Overlays center on the whole terminal, not the content area
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Input Routing & Chrome
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::PurposeFilter { .. } => self.purpose_filter_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
            Modal::SaveBuild { name } => Ok(match key.code {
                KeyCode::Esc => Some(Action::CloseModal),
                KeyCode::Enter => Some(Action::SaveBuild(name.clone())),
                KeyCode::Backspace => {
                    if let Some(Modal::SaveBuild { name }) = self.modals.top_mut() {
                        name.pop();
                    }
                    None
                }
                KeyCode::Char(c) => {
                    if let Some(Modal::SaveBuild { name }) = self.modals.top_mut() {
                        name.push(c);
                    }
                    None
                }
                _ => None,
            }),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        })
    }

    fn render_screen_tabs(&self, frame: &mut Frame, area: Rect) {
        let all_screens = Screen::all();
        let titles: Vec<String> = all_screens
            .iter()
            .map(|s| format!("{} {}", s.key(), s.name()))
            .collect();
        let selected = all_screens
            .iter()
            .position(|s| *s == self.screen)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL))
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " PC Builder ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        spans.push(Span::raw(" "));

        // Screen summary
        match self.screen {
            Screen::Parts => {
                if let Some(part) = self.parts.selected_part(&self.domain.catalog) {
                    spans.push(Span::styled(
                        part.name.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::styled(
                        format!(" ({})", part.brand),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            Screen::Builds => {
                if let Some(build) = self.builds.selected_build(&self.domain.catalog) {
                    spans.push(Span::styled(
                        build.name.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::styled(
                        format!(" ({})", build.tier),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            Screen::Configurator => {
                spans.push(Span::styled(
                    format!(
                        "{}/{} slots",
                        self.configurator.config.selected_count(),
                        Category::all().len()
                    ),
                    Style::default().fg(Color::White),
                ));
                spans.push(Span::styled(
                    format!(
                        "  ${:.2}",
                        self.configurator.config.total_price(&self.domain.catalog)
                    ),
                    Style::default().fg(Color::Green),
                ));
            }
            Screen::Compare => {
                spans.push(Span::styled(
                    format!("{} builds comparing", self.compare.set.len()),
                    Style::default().fg(Color::White),
                ));
            }
            Screen::Profile => match self.domain.account {
                Some(ref account) => spans.push(Span::styled(
                    account.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                None => spans.push(Span::styled(
                    "Signed out",
                    Style::default().fg(Color::DarkGray),
                )),
            },
        }

        // Error message if present
        if let Some(ref error) = self.error {
            spans.clear();
            spans.push(Span::styled(
                format!(" Error: {} ", error),
                Style::default().fg(Color::Red),
            ));
        }

        // Status message if present
        if let Some(ref status) = self.status_message {
            spans.push(Span::styled(
                format!(" {} ", status),
                Style::default().fg(Color::Yellow),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        frame.render_widget(paragraph, area);
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::PurposeFilter { .. } => self.purpose_filter_dialog.draw(frame, area)?,
            Modal::SaveBuild { name } => self.draw_save_dialog(frame, area, name)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }

    /// Draw the save-build name prompt
    fn draw_save_dialog(&self, frame: &mut Frame, area: Rect, name: &str) -> Result<()> {
        use crate::components::centered_popup;

        let popup_area = centered_popup(area, 60, 11);
        frame.render_widget(Clear, popup_area);

        let slot_summary = format!(
            "{}/{} slots  ${:.2}",
            self.configurator.config.selected_count(),
            Category::all().len(),
            self.configurator.config.total_price(&self.domain.catalog)
        );

        let feedback = match self.error {
            Some(ref e) => Line::from(Span::styled(e.clone(), Style::default().fg(Color::Red))),
            None => Line::from(""),
        };

        let key = |label: &'static str, color: Color| {
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Save this build as:",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("> {}_", name),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(Span::styled(
                slot_summary,
                Style::default().fg(Color::DarkGray),
            )),
            feedback,
            Line::from(vec![
                key(" Enter ", Color::Green),
                Span::raw("Save  "),
                key(" Esc ", Color::Yellow),
                Span::raw("Cancel"),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Save Build ")
            .title_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(
            Paragraph::new(content)
                .block(block)
                .alignment(ratatui::layout::Alignment::Center),
            popup_area,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn running_app() -> App {
        let mut app = App::new();
        app.mode = AppMode::Running;
        app
    }

    #[test]
    fn test_seed_catalog_loads() {
        let app = App::new();
        assert!(app.error.is_none());
        assert_eq!(app.domain.catalog.parts.len(), 11);
        assert_eq!(app.domain.catalog.builds.len(), 2);
        assert_eq!(app.domain.saved_builds.len(), 3);
    }

    #[test]
    fn test_switch_screen_discards_configuration() {
        let mut app = running_app();
        app.switch_screen(Screen::Configurator);
        app.update(Action::SelectPart).unwrap();
        assert_eq!(app.configurator.config.selected_count(), 1);

        app.switch_screen(Screen::Parts);
        assert_eq!(app.configurator.config.selected_count(), 0);
    }

    #[test]
    fn test_switch_screen_clears_messages() {
        let mut app = running_app();
        app.error = Some("boom".to_string());
        app.status_message = Some("ok".to_string());

        app.switch_screen(Screen::Builds);
        assert!(app.error.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_entering_compare_reseeds_selection() {
        let mut app = running_app();
        app.switch_screen(Screen::Compare);
        app.update(Action::LastItem).unwrap();
        app.update(Action::ToggleCompare).unwrap();
        assert_eq!(app.compare.set.len(), 3);

        app.switch_screen(Screen::Parts);
        app.switch_screen(Screen::Compare);
        assert_eq!(app.compare.set.len(), 2);
        assert_eq!(app.compare.set.selected(), &["build1", "build2"]);
    }

    #[test]
    fn test_compare_capacity_error_reaches_status_line() {
        let mut app = running_app();
        app.switch_screen(Screen::Compare);

        // Fill to capacity, then try one more
        app.update(Action::LastItem).unwrap();
        app.update(Action::ToggleCompare).unwrap();
        assert_eq!(app.compare.set.len(), 3);

        app.update(Action::PrevItem).unwrap();
        app.update(Action::ToggleCompare).unwrap();
        assert_eq!(app.compare.set.len(), 3);
        assert!(app
            .error
            .as_deref()
            .is_some_and(|e| e.contains("up to 3 builds")));
    }

    #[test]
    fn test_save_build_appends_to_saved_list() {
        let mut app = running_app();
        app.switch_screen(Screen::Configurator);
        app.update(Action::SelectPart).unwrap();

        let before = app.domain.saved_builds.len();
        app.modals.push(Modal::SaveBuild {
            name: "Weekend Rig".to_string(),
        });
        app.update(Action::SaveBuild("Weekend Rig".to_string()))
            .unwrap();

        assert_eq!(app.domain.saved_builds.len(), before + 1);
        assert!(app.modals.is_empty());
        assert!(app
            .domain
            .saved_builds
            .iter()
            .any(|b| b.name == "Weekend Rig" && b.date.is_some()));
    }

    #[test]
    fn test_save_build_rejects_blank_name_and_keeps_dialog() {
        let mut app = running_app();
        app.switch_screen(Screen::Configurator);
        app.modals.push(Modal::SaveBuild {
            name: String::new(),
        });

        let before = app.domain.saved_builds.len();
        app.update(Action::SaveBuild("   ".to_string())).unwrap();

        assert_eq!(app.domain.saved_builds.len(), before);
        assert!(!app.modals.is_empty());
        assert!(app.error.is_some());
    }

    #[test]
    fn test_save_dialog_collects_typed_name() {
        let mut app = running_app();
        app.switch_screen(Screen::Configurator);
        app.update(Action::OpenSaveDialog).unwrap();

        for c in ['R', 'i', 'g'] {
            app.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        app.handle_key_event(key(KeyCode::Backspace)).unwrap();

        assert_eq!(
            app.modals.top(),
            Some(&Modal::SaveBuild {
                name: "Ri".to_string()
            })
        );

        let action = app.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::SaveBuild("Ri".to_string())));
    }

    #[test]
    fn test_sign_in_flow_builds_account_from_config() {
        let mut app = running_app();
        app.profile.email_input = "jane@example.com".to_string();
        app.profile.password_input = "hunter2".to_string();
        app.update(Action::SubmitAuth).unwrap();
        assert!(app.profile.is_authenticating());

        app.update(Action::CompleteAuth).unwrap();
        let account = app.domain.account.as_ref().unwrap();
        assert_eq!(account.email, "jane@example.com");
        assert_eq!(account.name, app.config.profile_name);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("signed in")));
    }

    #[test]
    fn test_sign_out_clears_account() {
        let mut app = running_app();
        app.domain.account = Some(Account {
            name: "Jane".to_string(),
            tagline: String::new(),
            email: "jane@example.com".to_string(),
            member_since: Local::now().date_naive(),
        });

        app.update(Action::SignOut).unwrap();
        assert!(app.domain.account.is_none());
    }

    #[test]
    fn test_delete_saved_build_from_profile() {
        let mut app = running_app();
        app.screen = Screen::Profile;
        let before = app.domain.saved_builds.len();
        let first = app.domain.saved_builds[0].id.clone();

        app.update(Action::DeleteSavedBuild).unwrap();
        assert_eq!(app.domain.saved_builds.len(), before - 1);
        assert!(app.domain.saved_builds.iter().all(|b| b.id != first));
    }

    #[test]
    fn test_quit_dialog_confirms_and_cancels() {
        let mut app = running_app();
        app.update(Action::OpenQuitDialog).unwrap();

        let action = app.handle_key_event(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(action, Some(Action::CloseModal));

        let action = app.handle_key_event(key(KeyCode::Char('y'))).unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_mouse_wheel_scrolls_only_without_modals() {
        let mut app = running_app();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(
            app.handle_mouse_event(wheel).unwrap(),
            Some(Action::ScrollDown)
        );

        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.handle_mouse_event(wheel).unwrap(), None);
    }

    #[test]
    fn test_search_mode_routes_typed_characters() {
        let mut app = running_app();
        app.update(Action::EnterSearchMode).unwrap();
        assert!(app.parts.search_mode);

        let action = app.handle_key_event(key(KeyCode::Char('i'))).unwrap();
        assert_eq!(action, Some(Action::SearchInput('i')));
        app.update(Action::SearchInput('i')).unwrap();
        assert_eq!(app.parts.search_query, "i");

        let action = app.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::ExitSearchMode));
    }
}
