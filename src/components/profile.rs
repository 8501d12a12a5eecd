//! Profile screen component
//!
//! Signed out it shows the stubbed sign-in / sign-up form; signed in it
//! shows the account identity and the session's saved builds. There is no
//! real authentication behind the form, only field validation and a
//! simulated delay.

use crate::action::Action;
use crate::component::Component;
use crate::components::split_list_detail;
use crate::model::ui::Screen;
use crate::model::{Build, DomainState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use regex::Regex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Simulated authentication delay
const AUTH_DELAY: Duration = Duration::from_millis(1500);

/// Loose shape check, not RFC validation
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Which auth form is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Focusable auth form fields; `Name` exists only on the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Profile Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Profile screen state: the auth form while signed out, the saved-builds
/// cursor while signed in
pub struct ProfileComponent {
    /// Active auth form
    pub mode: AuthMode,

    /// Focused form field
    pub focus: AuthField,

    pub name_input: String,
    pub email_input: String,
    pub password_input: String,

    /// Validation error shown under the form
    pub error: Option<String>,

    /// Set while the simulated authentication is in flight
    submitted_at: Option<Instant>,

    /// Cursor over the saved builds list
    pub list_state: ListState,
}

impl Default for ProfileComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            mode: AuthMode::SignIn,
            focus: AuthField::Email,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            error: None,
            submitted_at: None,
            list_state,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Auth Form
    // ─────────────────────────────────────────────────────────────────────────

    /// Fields in focus order for the active mode
    fn fields(&self) -> Vec<AuthField> {
        match self.mode {
            AuthMode::SignIn => vec![AuthField::Email, AuthField::Password],
            AuthMode::SignUp => vec![AuthField::Name, AuthField::Email, AuthField::Password],
        }
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + 1) % fields.len()];
    }

    /// Move focus to the previous field
    pub fn previous_field(&mut self) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let prev = if current == 0 { fields.len() - 1 } else { current - 1 };
        self.focus = fields[prev];
    }

    /// Switch between sign in and sign up
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.focus = match self.mode {
            AuthMode::SignIn => AuthField::Email,
            AuthMode::SignUp => AuthField::Name,
        };
        self.error = None;
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            AuthField::Name => &mut self.name_input,
            AuthField::Email => &mut self.email_input,
            AuthField::Password => &mut self.password_input,
        }
    }

    /// Validate the form; on success the simulated authentication starts
    pub fn submit(&mut self) -> bool {
        self.error = None;

        if self.mode == AuthMode::SignUp && self.name_input.trim().is_empty() {
            self.error = Some("Name is required".to_string());
            return false;
        }
        if self.email_input.trim().is_empty() {
            self.error = Some("Email is required".to_string());
            return false;
        }
        if !EMAIL_REGEX.is_match(self.email_input.trim()) {
            self.error = Some("Enter a valid email address".to_string());
            return false;
        }
        if self.password_input.is_empty() {
            self.error = Some("Password is required".to_string());
            return false;
        }

        self.submitted_at = Some(Instant::now());
        true
    }

    /// True while the simulated delay is running
    pub fn is_authenticating(&self) -> bool {
        self.submitted_at.is_some()
    }

    /// True once the simulated delay has elapsed
    pub fn auth_ready(&self) -> bool {
        self.submitted_at
            .map(|t| t.elapsed() >= AUTH_DELAY)
            .unwrap_or(false)
    }

    /// Finish the simulated authentication, yielding the mode and the
    /// submitted identity. Clears the processing state and the password.
    pub fn complete(&mut self) -> (AuthMode, String, String) {
        self.submitted_at = None;
        self.password_input.clear();
        self.list_state.select(Some(0));
        (
            self.mode,
            self.name_input.trim().to_string(),
            self.email_input.trim().to_string(),
        )
    }

    /// Back to a blank sign-in form
    pub fn reset_form(&mut self) {
        self.mode = AuthMode::SignIn;
        self.focus = AuthField::Email;
        self.name_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.error = None;
        self.submitted_at = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Saved Builds
    // ─────────────────────────────────────────────────────────────────────────

    /// The highlighted saved build
    pub fn selected_saved<'a>(&self, domain: &'a DomainState) -> Option<&'a Build> {
        let index = self.list_state.selected()?;
        domain.saved_builds.get(index)
    }

    /// Select the next saved build, wrapping at the end
    pub fn next(&mut self, domain: &DomainState) {
        let len = domain.saved_builds.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// Select the previous saved build, wrapping at the start
    pub fn previous(&mut self, domain: &DomainState) {
        let len = domain.saved_builds.len();
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

    pub fn select_last(&mut self, domain: &DomainState) {
        let len = domain.saved_builds.len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Clamp the cursor after a deletion
    pub fn clamp_selection(&mut self, domain: &DomainState) {
        let len = domain.saved_builds.len();
        if len == 0 {
            self.list_state.select(Some(0));
        } else if self.list_state.selected().unwrap_or(0) >= len {
            self.list_state.select(Some(len - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key Handling
    // ─────────────────────────────────────────────────────────────────────────

    /// Keymap for the auth form (signed out)
    pub fn handle_auth_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Form is disabled while the simulated delay runs
        if self.is_authenticating() {
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_mode();
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                None
            }
            KeyCode::Enter => Some(Action::SubmitAuth),
            KeyCode::Esc => Some(Action::SwitchScreen(Screen::Parts)),
            KeyCode::Backspace => {
                self.focused_input().pop();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                self.focused_input().push(c);
                self.error = None;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    /// Keymap for the signed-in view
    fn handle_signed_in_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
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

            // Saved build operations
            KeyCode::Char('d') => Some(Action::DeleteSavedBuild),
            KeyCode::Char('x') => Some(Action::ExportParts),
            KeyCode::Char('o') => Some(Action::SignOut),

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

    /// Route a key to the auth form or the signed-in view
    pub fn handle_key_event_for(
        &mut self,
        signed_in: bool,
        key: KeyEvent,
    ) -> Result<Option<Action>> {
        if signed_in {
            self.handle_signed_in_key_event(key)
        } else {
            self.handle_auth_key_event(key)
        }
    }
}

impl Component for ProfileComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Signed-in state lives in the domain; App routes through
        // handle_key_event_for instead
        self.handle_auth_key_event(key)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_profile_screen
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the profile screen into the content and help areas
pub fn draw_profile_screen(
    frame: &mut Frame,
    content: Rect,
    help: Rect,
    profile: &mut ProfileComponent,
    detail: &mut crate::components::DetailComponent,
    domain: &DomainState,
) -> Result<()> {
    match domain.account {
        Some(_) => {
            let (list_area, detail_area) = split_list_detail(content);
            render_identity_and_saved(frame, list_area, profile, domain);

            let selected = profile.selected_saved(domain);
            detail.set_build(selected, &domain.catalog);
            detail.draw(frame, detail_area)?;
        }
        None => render_auth_form(frame, content, profile),
    }

    render_help_bar(frame, help, profile, domain.account.is_some());

    Ok(())
}

fn render_auth_form(frame: &mut Frame, area: Rect, profile: &ProfileComponent) {
    let form_width = 48u16.min(area.width.saturating_sub(4));
    let form_height = 16u16.min(area.height);
    let form_area = crate::components::centered_popup(area, form_width, form_height);

    let (title, submit_label) = match profile.mode {
        AuthMode::SignIn => (" Sign In ", "Sign in to access your account"),
        AuthMode::SignUp => (" Create Account ", "Enter your details to create a new account"),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            submit_label,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let render_field = |lines: &mut Vec<Line<'static>>,
                        label: &str,
                        value: String,
                        focused: bool| {
        lines.push(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Cyan),
        )));
        let cursor = if focused { "_" } else { "" };
        let style = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(format!("{}{}", value, cursor), style),
        ]));
        lines.push(Line::from(""));
    };

    if profile.mode == AuthMode::SignUp {
        render_field(
            &mut lines,
            "Name",
            profile.name_input.clone(),
            profile.focus == AuthField::Name,
        );
    }
    render_field(
        &mut lines,
        "Email",
        profile.email_input.clone(),
        profile.focus == AuthField::Email,
    );
    render_field(
        &mut lines,
        "Password",
        "•".repeat(profile.password_input.chars().count()),
        profile.focus == AuthField::Password,
    );

    if profile.is_authenticating() {
        let busy = match profile.mode {
            AuthMode::SignIn => "Signing in...",
            AuthMode::SignUp => "Creating account...",
        };
        lines.push(Line::from(Span::styled(
            busy,
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(ref error) = profile.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, form_area);
}

fn render_identity_and_saved(
    frame: &mut Frame,
    area: Rect,
    profile: &mut ProfileComponent,
    domain: &DomainState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    // Identity card
    let mut identity_lines = Vec::new();
    if let Some(ref account) = domain.account {
        identity_lines.push(Line::from(Span::styled(
            account.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        identity_lines.push(Line::from(Span::styled(
            account.tagline.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        identity_lines.push(Line::from(Span::styled(
            account.email.clone(),
            Style::default().fg(Color::Cyan),
        )));
        identity_lines.push(Line::from(vec![
            Span::styled("Member since: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                account.member_since.format("%Y-%m-%d").to_string(),
                Style::default().fg(Color::White),
            ),
        ]));
        identity_lines.push(Line::from(vec![
            Span::styled("Saved builds: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                domain.saved_builds.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    let identity = Paragraph::new(identity_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Profile ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(identity, chunks[0]);

    // Saved builds list
    let items: Vec<ListItem> = domain
        .saved_builds
        .iter()
        .map(|build| {
            let mut spans = vec![Span::styled(
                build.name.clone(),
                Style::default().fg(Color::White),
            )];
            if let Some(date) = build.date {
                spans.push(Span::styled(
                    format!(" ({})", date.format("%Y-%m-%d")),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                format!("  ${:.2}", build.price),
                Style::default().fg(Color::Green),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Saved Builds ({}) ", domain.saved_builds.len()))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, chunks[1], &mut profile.list_state);
}

fn render_help_bar(frame: &mut Frame, area: Rect, profile: &ProfileComponent, signed_in: bool) {
    let help_spans = if signed_in {
        vec![
            Span::styled(
                " d ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Delete "),
            Span::styled(
                " x ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Export "),
            Span::styled(
                " o ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Sign out "),
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
        ]
    } else {
        let toggle_hint = match profile.mode {
            AuthMode::SignIn => "Sign up instead ",
            AuthMode::SignUp => "Sign in instead ",
        };
        vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Submit "),
            Span::styled(
                " Tab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Next field "),
            Span::styled(
                " Ctrl+t ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(toggle_hint),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Back to Parts"),
        ]
    };

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_all_fields() {
        let mut profile = ProfileComponent::new();
        assert!(!profile.submit());
        assert_eq!(profile.error.as_deref(), Some("Email is required"));

        profile.email_input = "not-an-email".to_string();
        assert!(!profile.submit());
        assert_eq!(profile.error.as_deref(), Some("Enter a valid email address"));

        profile.email_input = "jane@example.com".to_string();
        assert!(!profile.submit());
        assert_eq!(profile.error.as_deref(), Some("Password is required"));

        profile.password_input = "hunter2".to_string();
        assert!(profile.submit());
        assert!(profile.is_authenticating());
        assert!(profile.error.is_none());
    }

    #[test]
    fn test_sign_up_requires_name() {
        let mut profile = ProfileComponent::new();
        profile.toggle_mode();
        profile.email_input = "jane@example.com".to_string();
        profile.password_input = "hunter2".to_string();

        assert!(!profile.submit());
        assert_eq!(profile.error.as_deref(), Some("Name is required"));

        profile.name_input = "Jane".to_string();
        assert!(profile.submit());
    }

    #[test]
    fn test_complete_clears_password_and_processing_state() {
        let mut profile = ProfileComponent::new();
        profile.email_input = "jane@example.com".to_string();
        profile.password_input = "hunter2".to_string();
        assert!(profile.submit());

        let (mode, name, email) = profile.complete();
        assert_eq!(mode, AuthMode::SignIn);
        assert_eq!(name, "");
        assert_eq!(email, "jane@example.com");
        assert!(!profile.is_authenticating());
        assert!(profile.password_input.is_empty());
    }

    #[test]
    fn test_field_cycle_skips_name_when_signing_in() {
        let mut profile = ProfileComponent::new();
        assert_eq!(profile.focus, AuthField::Email);
        profile.next_field();
        assert_eq!(profile.focus, AuthField::Password);
        profile.next_field();
        assert_eq!(profile.focus, AuthField::Email);

        profile.toggle_mode();
        assert_eq!(profile.focus, AuthField::Name);
        profile.previous_field();
        assert_eq!(profile.focus, AuthField::Password);
    }

    #[test]
    fn test_email_shape_check() {
        assert!(EMAIL_REGEX.is_match("john.doe@example.com"));
        assert!(!EMAIL_REGEX.is_match("john.doe@example"));
        assert!(!EMAIL_REGEX.is_match("@example.com"));
        assert!(!EMAIL_REGEX.is_match("john doe@example.com"));
    }
}
