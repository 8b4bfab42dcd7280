use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use super::theme::{THEME_ACCENT, THEME_BORDER, THEME_FG, THEME_HIGHLIGHT};
use crate::app::App;
use crate::tui::format_clock;

pub fn render_playlist(f: &mut ratatui::Frame, app: &mut App, area: Rect) {
    app.playlist_area = Some(area);

    // One row per song inside the borders; rows start at area.y + 1, which
    // is what the mouse hit-test assumes.
    let visible = area.height.saturating_sub(2) as usize;
    if app.playlist_cursor < app.playlist_scroll {
        app.playlist_scroll = app.playlist_cursor;
    } else if visible > 0 && app.playlist_cursor >= app.playlist_scroll + visible {
        app.playlist_scroll = app.playlist_cursor + 1 - visible;
    }

    let songs = app.queue.songs();
    let end = (app.playlist_scroll + visible).min(songs.len());

    let items: Vec<ListItem> = songs[app.playlist_scroll..end]
        .iter()
        .enumerate()
        .map(|(offset, song)| {
            let index = app.playlist_scroll + offset;
            let marker = if app.queue.playing_index() == Some(index) {
                "▶ "
            } else {
                "  "
            };

            let style = if index == app.playlist_cursor {
                Style::default()
                    .bg(THEME_HIGHLIGHT)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(THEME_FG)
            };

            let line = Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{} - {}", song.name, song.artist)),
                Span::styled(
                    format!("  {}", format_clock(song.duration_secs())),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line).style(style)
        })
        .collect();

    let title = if app.loading_playlist {
        " Playlist (loading...) ".to_string()
    } else {
        format!(" Playlist ({}) ", songs.len())
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME_BORDER))
            .title(Span::styled(title, Style::default().fg(THEME_ACCENT))),
    );
    f.render_widget(list, area);
}
