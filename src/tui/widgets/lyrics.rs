//! Lyrics pane - heading, favorite marker and scrollable text

use crate::app::session::Session;
use crate::app::state::AppState;
use crate::lyrics::text::display_lines;
use crate::storage::Storage;
use crate::tui::theme::{LoadingSpinner, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, state: &mut AppState, session: &Session<Storage>, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let title = match session.current_song() {
        Some(song) => {
            let star = if session.is_current_favorite() { icons.star } else { icons.star_empty };
            format!(" {} {} {} ", icons.lyrics, song.heading(), star)
        }
        None => format!(" {} Lyrics ", icons.lyrics),
    };
    let block = theme.block(title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if session.loading() {
        let msg = Paragraph::new(Line::from(format!(
            "{} Searching...",
            LoadingSpinner::frame(state.tick)
        )))
        .style(Style::default().fg(theme.palette.fg_secondary))
        .alignment(Alignment::Center);
        frame.render_widget(msg, inner);
        return;
    }

    let Some(lyrics) = session.current_song().and_then(|s| s.lyrics.as_deref()) else {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Enter an artist and a song title to look up lyrics",
            Style::default().fg(theme.palette.fg_secondary),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(msg, inner);
        return;
    };

    let lines: Vec<Line> = display_lines(lyrics)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.palette.fg_primary))))
        .collect();

    // Don't scroll past the last screenful.
    let max_scroll = lines.len().saturating_sub(inner.height as usize) as u16;
    state.lyrics_scroll = state.lyrics_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines).scroll((state.lyrics_scroll, 0));
    frame.render_widget(paragraph, inner);
}
