//! Shared layout helpers for the screens and dialogs

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Areas of the main screen chrome, top to bottom
pub struct MainLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// A dialog area centered in `area`, clipped to fit
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}

/// Screen tabs, content, status line, help bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let [tabs, content, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    MainLayout {
        tabs,
        content,
        status,
        help,
    }
}

/// Horizontal split used by the list screens: list on the left, detail on
/// the right
pub fn split_list_detail(area: Rect) -> (Rect, Rect) {
    let [list, detail] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    (list, detail)
}
