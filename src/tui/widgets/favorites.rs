//! Favorites pane - saved songs with virtual scrolling

use crate::app::session::Session;
use crate::app::state::{AppState, Focus};
use crate::storage::Storage;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use super::truncate_str;

/// Each favorite takes two rows: title, then artist.
const ROWS_PER_ITEM: usize = 2;

pub fn render(frame: &mut Frame, state: &mut AppState, session: &Session<Storage>, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let favorites = session.favorites();
    let focused = state.focus == Focus::Favorites;

    let title = format!(" {} Favorites ({}) ", icons.star, favorites.len());
    let block = theme.block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if favorites.is_empty() {
        let empty = Paragraph::new(Line::from("No favorites yet. Press Ctrl+F on a song to save it."))
            .style(Style::default().fg(theme.palette.fg_secondary))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, inner);
        return;
    }

    let visible = (inner.height as usize / ROWS_PER_ITEM).max(1);
    let list_state = &mut state.favorites_list;
    list_state.clamp(favorites.len());
    list_state.update_scroll(visible);

    let width = inner.width.saturating_sub(3) as usize;
    let items: Vec<ListItem> = favorites
        .iter()
        .enumerate()
        .skip(list_state.scroll_offset)
        .take(visible)
        .map(|(i, song)| {
            let is_selected = focused && i == list_state.selected;
            let title_style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };
            let is_current = session
                .current_song()
                .is_some_and(|current| current.same_identity(song));
            let marker = if is_current { icons.music } else { " " };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(theme.palette.accent_alt)),
                    Span::styled(truncate_str(&song.title, width.saturating_sub(2)), title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", truncate_str(&song.artist, width.saturating_sub(2))),
                    Style::default().fg(theme.palette.fg_secondary),
                )),
            ])
        })
        .collect();

    let mut widget_state = ListState::default();
    if focused {
        widget_state.select(Some(list_state.selected - list_state.scroll_offset));
    }

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol(icons.selected);

    frame.render_stateful_widget(list, inner, &mut widget_state);
}
