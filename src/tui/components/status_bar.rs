use ratatui::{
    prelude::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::{THEME_ACCENT, THEME_BORDER, THEME_HIGHLIGHT};
use crate::app::App;

pub fn render_status_bar(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let key_hints = if app.playlist_visible {
        "q: Quit | Space: Play/Pause | n/b: Next/Prev | j/k: Nav | Enter: Play | x: Remove | l: Close list"
    } else {
        "q: Quit | Space: Play/Pause | n/b: Next/Prev | Arrows: Seek | r: Pattern | m: Mute | +/-: Vol | l: Playlist"
    };

    let (text, color) = match &app.status_message {
        Some(msg) => (format!(" {} ", msg), THEME_HIGHLIGHT),
        None => (format!(" {} ", key_hints), THEME_ACCENT),
    };

    let p = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME_BORDER)),
        )
        .style(Style::default().fg(color));
    f.render_widget(p, area);
}
