//! Root layout widget - orchestrates main layout structure

use crate::app::session::Session;
use crate::app::state::{AppState, ToastKind};
use crate::storage::Storage;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::{favorites, help, lyrics, search_form, truncate_str};

/// Main layout structure:
/// ┌ Artist ────────────────┬ Title ─────────────────┐
/// └────────────────────────┴────────────────────────┘
/// ┌ Lyrics ──────────────────────────┬ Favorites ───┐
/// │                                  │              │
/// └──────────────────────────────────┴──────────────┘
///   status / toast
pub fn render(frame: &mut Frame, state: &mut AppState, session: &Session<Storage>) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search form
            Constraint::Min(5),    // Lyrics + favorites
            Constraint::Length(1), // Status line
        ])
        .split(root);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[1]);

    search_form::render(frame, state, session, rows[0]);
    lyrics::render(frame, state, session, body[0]);
    favorites::render(frame, state, session, body[1]);
    render_status_line(frame, state, session, rows[2]);

    if state.show_help {
        let area = centered(root, 64, 20);
        frame.render_widget(Clear, area);
        help::render(frame, area);
    }
}

/// Toast first, then the session error, then the app status, then a hint.
fn render_status_line(frame: &mut Frame, state: &AppState, session: &Session<Storage>, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let width = area.width.saturating_sub(4) as usize;

    let (icon, text, color) = if let Some(toast) = &state.toast {
        match toast.kind {
            ToastKind::Success => (icons.success, toast.message.as_str(), theme.palette.accent_alt),
            ToastKind::Error => (icons.error, toast.message.as_str(), theme.palette.error),
        }
    } else if let Some(err) = session.error() {
        (icons.error, err, theme.palette.error)
    } else if !state.status.is_empty() {
        (icons.info, state.status.as_str(), theme.palette.fg_secondary)
    } else {
        (
            icons.help,
            "F1 help  Tab focus  Enter search  Ctrl+F favorite  Ctrl+L clear  Esc quit",
            theme.palette.fg_secondary,
        )
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color)),
        Span::styled(truncate_str(text, width), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
