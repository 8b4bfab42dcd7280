use std::time::Duration;

use super::App;
use crate::model::PlayPattern;
use crate::model::queue::Removal;
use crate::player::resolver::ResolveRequest;
use crate::player::seek::SeekState;

/// Make `index` the playing song and kick off stream URL resolution for it.
/// Playback starts when (and if) the resolution lands; anything still in
/// flight for an earlier song is superseded by the new ticket.
pub fn play_song_at(app: &mut App, index: usize) {
    let Some(song) = app.queue.select(index) else {
        return;
    };
    let song_id = song.id;
    let name = song.name.clone();
    let artist = song.artist.clone();
    let duration = Duration::from_millis(song.duration_ms);

    app.current_time_secs = 0.0;
    app.display.reset();
    app.seek = SeekState::Idle;
    app.playlist_cursor = index;

    let seq = app.ticket.issue();
    log::info!("resolving stream url for song {song_id} (seq {seq})");
    let _ = app.resolve_tx.send(ResolveRequest { seq, song_id });

    app.status_message = Some(format!("Loading {name}..."));
    if let Some(mc) = &mut app.media_controller {
        let _ = mc.set_metadata(&name, Some(&artist), Some(duration));
    }
}

pub fn toggle_pause(app: &mut App) {
    if app.queue.current().is_none() {
        // Nothing loaded yet: treat play as "start from the cursor".
        if !app.queue.is_empty() {
            let index = app.playlist_cursor.min(app.queue.len() - 1);
            play_song_at(app, index);
        }
        return;
    }

    app.is_playing = !app.is_playing;
    if app.is_playing {
        app.player.play();
    } else {
        app.player.pause();
    }
    app.status_message = Some(if app.is_playing {
        "Playing".to_string()
    } else {
        "Paused".to_string()
    });
    sync_media_status(app);
}

pub fn play_next(app: &mut App) {
    if let Some(index) = app.queue.next_index() {
        play_song_at(app, index);
    }
}

pub fn play_previous(app: &mut App) {
    if let Some(index) = app.queue.previous_index() {
        play_song_at(app, index);
    }
}

pub fn change_pattern(app: &mut App) {
    app.queue.pattern = app.queue.pattern.cycle();
    app.status_message = Some(format!("Pattern: {}", app.queue.pattern.label()));
}

pub fn step_volume(app: &mut App, delta: i16) {
    app.volume.step(delta);
    apply_gain(app);
    app.status_message = Some(if app.volume.is_muted() {
        "Volume: muted".to_string()
    } else {
        format!("Volume: {}%", app.volume.level())
    });
}

pub fn toggle_mute(app: &mut App) {
    app.volume.toggle_mute();
    apply_gain(app);
    app.status_message = Some(if app.volume.is_muted() {
        "Muted".to_string()
    } else {
        format!("Volume: {}%", app.volume.level())
    });
}

fn apply_gain(app: &mut App) {
    app.player.set_gain(app.volume.gain());
}

/// Write a committed seek straight to the element and move the display so
/// the bar does not snap back while the next sample is in flight.
pub fn commit_seek(app: &mut App, target_secs: f64) {
    app.player.seek_to(target_secs);
    app.current_time_secs = target_secs;
    app.display.set(target_secs);
}

pub fn stop_playback(app: &mut App) {
    app.player.stop();
    app.is_playing = false;
    app.current_time_secs = 0.0;
    app.display.reset();
    app.seek = SeekState::Idle;
    app.status_message = Some("Stopped.".to_string());
    sync_media_status(app);
}

pub fn delete_song(app: &mut App, index: usize) {
    match app.queue.remove(index) {
        Removal::Kept => {}
        Removal::CurrentGone { index: Some(next) } => {
            // The loaded source belongs to the deleted song; move on.
            play_song_at(app, next);
        }
        Removal::CurrentGone { index: None } => {
            stop_playback(app);
        }
    }
    if app.queue.is_empty() {
        app.playlist_cursor = 0;
    } else if app.playlist_cursor >= app.queue.len() {
        app.playlist_cursor = app.queue.len() - 1;
    }
}

pub fn reload_playlist(app: &mut App) {
    let Some(id) = app.playlist_id else {
        app.status_message = Some("No playlist configured.".to_string());
        return;
    };
    app.loading_playlist = true;
    app.status_message = Some("Reloading playlist...".to_string());
    let _ = app.playlist_tx.send(id);
}

/// When the resolver fails, surface it and move on rather than freezing on
/// the previous source. Single-pattern and one-song queues stop instead of
/// spinning on the same broken track.
pub fn skip_unavailable(app: &mut App) {
    if app.queue.pattern != PlayPattern::Single && app.queue.len() > 1 {
        play_next(app);
    } else {
        app.is_playing = false;
        sync_media_status(app);
    }
}

pub fn sync_media_status(app: &mut App) {
    if let Some(mc) = &mut app.media_controller {
        let _ = mc.set_playback_status(app.is_playing, Some(app.current_time_secs));
    }
}
