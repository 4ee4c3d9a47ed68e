//! Help overlay showing keybindings

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let block = theme.block(format!(" {} Keybinds ", theme.icons.help), true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Search", &theme),
        keybind("Tab", "Next field", &theme),
        keybind("Shift+Tab", "Previous field", &theme),
        keybind("Enter", "Search lyrics", &theme),
        keybind("Ctrl+u", "Clear field", &theme),
        keybind("Ctrl+l", "Clear everything", &theme),
        Line::default(),
        section_header("Lyrics", &theme),
        keybind("PgUp/PgDn", "Scroll a page", &theme),
        keybind("J / K", "Scroll a line", &theme),
        keybind("Ctrl+f", "Toggle favorite", &theme),
    ];

    let right_content = vec![
        section_header("Favorites", &theme),
        keybind("j / Down", "Move down", &theme),
        keybind("k / Up", "Move up", &theme),
        keybind("Enter", "Open favorite", &theme),
        keybind("d / Del", "Remove favorite", &theme),
        keybind("f", "Toggle favorite", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("F1 / ?", "Toggle this help", &theme),
        keybind("q", "Quit (favorites)", &theme),
        keybind("Esc", "Quit", &theme),
    ];

    frame.render_widget(Paragraph::new(left_content).wrap(Wrap { trim: false }), cols[0]);
    frame.render_widget(Paragraph::new(right_content).wrap(Wrap { trim: false }), cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:11}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
