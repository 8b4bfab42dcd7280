use super::App;
use super::actions;
use crate::player::progress::ProgressSource;
use crate::sys::audio::ElementEvent;
use crate::sys::media::MediaEvent;

/// Per-tick reconciliation: drain every async channel, reflect element
/// state, and sample the playback position. Runs on the 200 ms UI tick.
pub fn on_tick(app: &mut App) {
    // Playlist fetches
    while let Ok(result) = app.playlist_rx.try_recv() {
        app.loading_playlist = false;
        match result {
            Ok(songs) => {
                let count = songs.len();
                app.queue.load(songs);
                app.playlist_cursor = 0;
                app.playlist_scroll = 0;
                app.status_message = Some(format!("Loaded {count} tracks."));
            }
            Err(e) => {
                log::warn!("playlist fetch failed: {e}");
                app.status_message = Some(format!("Playlist error: {e}"));
            }
        }
    }

    // State changes reported by the element itself. The element is allowed
    // to pause on its own (buffering, source swap), so our flag follows it
    // rather than the other way around.
    let events = app.player.drain_events();
    let (playing, advance) = fold_element_events(&events);
    if let Some(playing) = playing {
        if app.is_playing != playing {
            app.is_playing = playing;
            actions::sync_media_status(app);
        }
    }
    if advance {
        actions::play_next(app);
    }

    // Resolver completions; anything not carrying the newest sequence was
    // superseded while in flight and is dropped here.
    while let Ok(reply) = app.resolve_rx.try_recv() {
        if !app.ticket.is_current(reply.seq) {
            log::debug!(
                "discarding stale resolution for song {} (seq {})",
                reply.song_id,
                reply.seq
            );
            continue;
        }
        match reply.result {
            Ok(url) => {
                log::info!("song {} resolved, swapping source", reply.song_id);
                app.player.set_source(&url);
                app.player.set_gain(app.volume.gain());
                // A freshly resolved source starts playing.
                app.player.play();
                app.is_playing = true;
                actions::sync_media_status(app);
            }
            Err(e) => {
                log::warn!("resolution failed for song {}: {e}", reply.song_id);
                let name = app
                    .queue
                    .current()
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                app.status_message = Some(format!("Track unavailable: {name}"));
                actions::skip_unavailable(app);
            }
        }
    }

    // OS media keys
    while let Ok(event) = app.media_rx.try_recv() {
        match event {
            MediaEvent::Play => {
                if !app.is_playing {
                    actions::toggle_pause(app);
                }
            }
            MediaEvent::Pause => {
                if app.is_playing {
                    actions::toggle_pause(app);
                }
            }
            MediaEvent::Toggle => actions::toggle_pause(app),
            MediaEvent::Next => actions::play_next(app),
            MediaEvent::Previous => actions::play_previous(app),
            MediaEvent::Stop => actions::stop_playback(app),
        }
    }

    // Sample the element position through the ProgressSource seam. A live
    // drag preview takes precedence over the sampler on the display.
    let dragging = app.seek.is_dragging();
    if let Some(t) = app.player.take_position() {
        app.current_time_secs = t;
        app.display.apply_sample(t, dragging);
        actions::sync_media_status(app);
    }
    if app.queue.current().is_some() {
        app.player.request();
    }
}

/// Collapse one tick's worth of element events: the last pause/resume wins,
/// and any number of end-of-file reports amounts to exactly one advance.
fn fold_element_events(events: &[ElementEvent]) -> (Option<bool>, bool) {
    let mut playing = None;
    let mut advance = false;
    for event in events {
        match event {
            ElementEvent::Paused => playing = Some(false),
            ElementEvent::Resumed => playing = Some(true),
            ElementEvent::Ended => advance = true,
        }
    }
    (playing, advance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_events_change_nothing() {
        assert_eq!(fold_element_events(&[]), (None, false));
    }

    #[test]
    fn track_end_advances_exactly_once_per_tick() {
        let events = [
            ElementEvent::Ended,
            ElementEvent::Ended,
            ElementEvent::Ended,
        ];
        assert_eq!(fold_element_events(&events), (None, true));
    }

    #[test]
    fn last_pause_state_wins() {
        let events = [ElementEvent::Paused, ElementEvent::Resumed];
        assert_eq!(fold_element_events(&events), (Some(true), false));
    }

    #[test]
    fn pause_after_end_still_lands() {
        let events = [
            ElementEvent::Resumed,
            ElementEvent::Ended,
            ElementEvent::Paused,
        ];
        assert_eq!(fold_element_events(&events), (Some(false), true));
    }
}
