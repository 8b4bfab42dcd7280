use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::App;
use super::actions;

fn is_in_rect(x: u16, y: u16, area: Rect) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    log::debug!("key event: {:?}", key.code);

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            actions::toggle_pause(app);
        }
        KeyCode::Char('n') => {
            actions::play_next(app);
        }
        KeyCode::Char('b') => {
            actions::play_previous(app);
        }
        KeyCode::Left => {
            app.player.seek_by(-5.0);
        }
        KeyCode::Right => {
            app.player.seek_by(5.0);
        }
        KeyCode::Char('[') => {
            app.player.seek_by(-30.0);
        }
        KeyCode::Char(']') => {
            app.player.seek_by(30.0);
        }
        KeyCode::Char('m') => {
            actions::toggle_mute(app);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            actions::step_volume(app, 5);
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            actions::step_volume(app, -5);
        }
        KeyCode::Char('r') => {
            actions::change_pattern(app);
        }
        KeyCode::Char('R') => {
            actions::reload_playlist(app);
        }
        KeyCode::Char('l') => {
            app.playlist_visible = !app.playlist_visible;
        }
        KeyCode::Down | KeyCode::Char('j') if app.playlist_visible => {
            if !app.queue.is_empty() {
                app.playlist_cursor = (app.playlist_cursor + 1).min(app.queue.len() - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') if app.playlist_visible => {
            app.playlist_cursor = app.playlist_cursor.saturating_sub(1);
        }
        KeyCode::Enter if app.playlist_visible => {
            actions::play_song_at(app, app.playlist_cursor);
        }
        KeyCode::Char('x') => {
            if app.playlist_visible {
                actions::delete_song(app, app.playlist_cursor);
            } else {
                actions::stop_playback(app);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Progress track first: a press there arms the seek gesture and
            // must not fall through to the pause toggle below it.
            if let Some(area) = app.progress_area {
                if is_in_rect(x, y, area) {
                    app.seek.press();
                    return;
                }
            }

            if app.playlist_visible {
                if let Some(area) = app.playlist_area {
                    if is_in_rect(x, y, area) {
                        let list_start_y = area.y + 1; // border
                        if y >= list_start_y {
                            let index = app.playlist_scroll + (y - list_start_y) as usize;
                            if index < app.queue.len() {
                                app.playlist_cursor = index;
                                actions::play_song_at(app, index);
                            }
                        }
                        return;
                    }
                }
            }

            if let Some(area) = app.playback_bar_area {
                if is_in_rect(x, y, area) {
                    actions::toggle_pause(app);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(track) = app.progress_track {
                app.seek.drag(x, &track);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(track) = app.progress_track {
                if let Some(target) = app.seek.release(x, &track) {
                    actions::commit_seek(app, target);
                }
            } else {
                // No track geometry (no song loaded): just disarm.
                app.seek = crate::player::seek::SeekState::Idle;
            }
        }
        MouseEventKind::ScrollUp => {
            if in_playback_bar(app, x, y) {
                actions::step_volume(app, 5);
            } else if app.playlist_visible {
                app.playlist_cursor = app.playlist_cursor.saturating_sub(1);
            }
        }
        MouseEventKind::ScrollDown => {
            if in_playback_bar(app, x, y) {
                actions::step_volume(app, -5);
            } else if app.playlist_visible && !app.queue.is_empty() {
                app.playlist_cursor = (app.playlist_cursor + 1).min(app.queue.len() - 1);
            }
        }
        _ => {}
    }
}

fn in_playback_bar(app: &App, x: u16, y: u16) -> bool {
    app.playback_bar_area
        .map(|area| is_in_rect(x, y, area))
        .unwrap_or(false)
}
