use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::app::App;

pub mod components;

use components::now_playing::render_now_playing;
use components::playback_bar::render_playback_bar;
use components::playlist::render_playlist;
use components::status_bar::render_status_bar;
use components::theme::THEME_BG;

pub fn ui(f: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1) // Outer margin
        .constraints([
            Constraint::Min(1),    // Main content
            Constraint::Length(4), // Playback bar: track row + info row
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Render Background
    f.render_widget(
        Block::default().style(Style::default().bg(THEME_BG)),
        f.area(),
    );

    if app.playlist_visible {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_layout[0]);
        render_now_playing(f, app, content_chunks[0]);
        render_playlist(f, app, content_chunks[1]);
    } else {
        app.playlist_area = None;
        render_now_playing(f, app, main_layout[0]);
    }

    render_playback_bar(f, app, main_layout[1]);
    render_status_bar(f, app, main_layout[2]);
}

/// "mm:ss" wall clock, floored to whole seconds.
pub fn format_clock(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "00:00".to_string();
    }
    let total = secs as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(59.9), "00:59");
        assert_eq!(format_clock(61.0), "01:01");
        assert_eq!(format_clock(3600.0), "60:00");
    }

    #[test]
    fn clock_tolerates_bad_input() {
        assert_eq!(format_clock(f64::NAN), "00:00");
        assert_eq!(format_clock(-3.0), "00:00");
    }
}
