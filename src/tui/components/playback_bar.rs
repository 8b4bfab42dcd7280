use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::{THEME_ACCENT, THEME_FG, THEME_HIGHLIGHT};
use crate::app::App;
use crate::player::seek::ProgressTrack;
use crate::tui::format_clock;

pub fn render_playback_bar(f: &mut ratatui::Frame, app: &mut App, area: Rect) {
    app.playback_bar_area = Some(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME_ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 2 || inner.width == 0 {
        app.progress_area = None;
        app.progress_track = None;
        return;
    }

    // Row 0: the seekable track. Its geometry is captured here so mouse
    // events can be mapped back to track time.
    let track_row = Rect::new(inner.x, inner.y, inner.width, 1);
    let duration_secs = app
        .queue
        .current()
        .map(|s| s.duration_secs())
        .unwrap_or(0.0);
    let track = ProgressTrack::new(track_row.x, track_row.width, duration_secs);
    app.progress_area = Some(track_row);
    app.progress_track = Some(track);

    // A live drag preview wins over the sampled position.
    let knob_col = app
        .seek
        .preview_col()
        .unwrap_or_else(|| track.col_at(app.display.secs()))
        .min(track_row.width.saturating_sub(1));

    let played = knob_col as usize;
    let remaining = (track_row.width as usize).saturating_sub(played + 1);
    let track_line = Line::from(vec![
        Span::styled("━".repeat(played), Style::default().fg(THEME_ACCENT)),
        Span::styled(
            "●",
            Style::default().fg(THEME_FG).add_modifier(Modifier::BOLD),
        ),
        Span::styled("─".repeat(remaining), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(track_line), track_row);

    // Row 1: transport status, clock, pattern, volume, title.
    let info_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);

    let (title, total_secs) = match app.queue.current() {
        Some(song) => (
            format!("{} - {}", song.name, song.artist),
            song.duration_secs(),
        ),
        None => ("No track".to_string(), 0.0),
    };

    let status_str = if app.queue.current().is_none() {
        " IDLE "
    } else if app.is_playing {
        " PLAYING "
    } else {
        " PAUSED "
    };
    let status_color = if app.is_playing {
        THEME_ACCENT
    } else {
        Color::Gray
    };

    let clock_str = format!(
        "{}/{}",
        format_clock(app.current_time_secs),
        format_clock(total_secs)
    );
    let volume_str = if app.volume.is_muted() {
        "muted".to_string()
    } else {
        format!("vol {}%", app.volume.level())
    };

    // status + clock + pattern + volume + separators
    let overhead = 45;
    let available_width = info_row.width.saturating_sub(overhead) as usize;
    let displayed_title = if title.chars().count() > available_width && available_width > 3 {
        format!(
            "{}...",
            title
                .chars()
                .take(available_width.saturating_sub(3))
                .collect::<String>()
        )
    } else {
        title
    };

    let info_line = Line::from(vec![
        Span::styled(
            status_str,
            Style::default()
                .fg(Color::Black)
                .bg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}] ", clock_str),
            Style::default()
                .fg(THEME_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}] ", app.queue.pattern.label()),
            Style::default().fg(THEME_HIGHLIGHT),
        ),
        Span::styled(format!("[{}] ", volume_str), Style::default().fg(THEME_FG)),
        Span::styled(
            displayed_title,
            Style::default().fg(THEME_FG).add_modifier(Modifier::ITALIC),
        ),
    ]);
    f.render_widget(Paragraph::new(info_line), info_row);
}
