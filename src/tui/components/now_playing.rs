use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::{THEME_ACCENT, THEME_BORDER, THEME_FG, THEME_HIGHLIGHT};
use crate::app::App;

pub fn render_now_playing(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME_BORDER))
        .title(" Now Playing ");

    let text = if let Some(song) = app.queue.current() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                song.name.clone(),
                Style::default().fg(THEME_FG).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                song.artist.clone(),
                Style::default().fg(THEME_ACCENT),
            )),
        ]
    } else if app.loading_playlist {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading playlist...",
                Style::default().fg(THEME_HIGHLIGHT),
            )),
        ]
    } else if app.queue.is_empty() {
        vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("T", Style::default().fg(THEME_ACCENT).add_modifier(Modifier::BOLD)),
                Span::styled("unebar", Style::default().fg(THEME_FG).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "No playlist loaded.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Pass a playlist id on the command line or set one in the config.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nothing playing.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press l to open the playlist, Enter to play.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let p = Paragraph::new(text).alignment(Alignment::Center).block(block);
    f.render_widget(p, area);
}
