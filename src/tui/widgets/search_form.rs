//! Artist and title inputs

use crate::app::session::Session;
use crate::app::state::{AppState, Focus};
use crate::storage::Storage;
use crate::tui::theme::{LoadingSpinner, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, state: &AppState, session: &Session<Storage>, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let icons = get_theme().icons;
    render_input(
        frame,
        format!(" {} Artist ", icons.artist),
        &state.artist_input,
        state.focus == Focus::Artist,
        session.loading(),
        state.tick,
        cols[0],
    );
    render_input(
        frame,
        format!(" {} Title ", icons.music),
        &state.title_input,
        state.focus == Focus::Title,
        session.loading(),
        state.tick,
        cols[1],
    );
}

fn render_input(
    frame: &mut Frame,
    title: String,
    value: &str,
    focused: bool,
    loading: bool,
    tick: u64,
    area: Rect,
) {
    let theme = get_theme();
    let block = theme.block(title, focused);

    // Locked while a search runs; the spinner replaces the cursor.
    let (text, color) = if loading {
        let suffix = if focused { format!(" {}", LoadingSpinner::frame(tick)) } else { String::new() };
        (format!("{value}{suffix}"), theme.palette.fg_secondary)
    } else {
        let cursor = if focused { "▏" } else { "" };
        (format!("{value}{cursor}"), theme.palette.fg_primary)
    };

    // Keep the tail visible when the value is wider than the box.
    let inner_width = area.width.saturating_sub(2) as usize;
    let len = text.chars().count();
    let visible: String = text.chars().skip(len.saturating_sub(inner_width)).collect();

    let p = Paragraph::new(Line::from(visible))
        .style(Style::default().fg(color))
        .block(block);
    frame.render_widget(p, area);
}
