//! Client for the NetEase-compatible music API server.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::model::Song;

#[derive(Debug, Deserialize)]
struct SongUrlResponse {
    code: i64,
    #[serde(default)]
    data: Vec<SongUrlEntry>,
}

#[derive(Debug, Deserialize)]
struct SongUrlEntry {
    #[allow(dead_code)]
    id: u64,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistResponse {
    #[serde(default)]
    songs: Vec<PlaylistSong>,
}

#[derive(Debug, Deserialize)]
struct PlaylistSong {
    id: u64,
    name: String,
    #[serde(default)]
    ar: Vec<ArtistRef>,
    /// Duration in milliseconds.
    dt: u64,
}

#[derive(Debug, Deserialize)]
struct ArtistRef {
    name: String,
}

/// Resolve the playable stream URL for one track. Only the first entry of
/// the response is meaningful.
pub async fn fetch_song_url(host: &str, song_id: u64) -> Result<String> {
    let endpoint = format!("{host}/song/url?id={song_id}");
    let response: SongUrlResponse = reqwest::get(&endpoint)
        .await
        .with_context(|| format!("request to {endpoint} failed"))?
        .json()
        .await
        .context("malformed /song/url payload")?;

    if response.code != 200 {
        bail!("server returned code {} for song {song_id}", response.code);
    }

    match response.data.into_iter().next().and_then(|e| e.url) {
        Some(url) if !url.is_empty() => Ok(url),
        _ => bail!("no stream url available for song {song_id}"),
    }
}

/// Fetch the full track list of a playlist.
pub async fn fetch_playlist(host: &str, playlist_id: u64) -> Result<Vec<Song>> {
    let endpoint = format!("{host}/playlist/track/all?id={playlist_id}");
    let response: PlaylistResponse = reqwest::get(&endpoint)
        .await
        .with_context(|| format!("request to {endpoint} failed"))?
        .json()
        .await
        .context("malformed playlist payload")?;

    Ok(response.songs.into_iter().map(Song::from).collect())
}

impl From<PlaylistSong> for Song {
    fn from(raw: PlaylistSong) -> Self {
        let artist = if raw.ar.is_empty() {
            "Unknown".to_string()
        } else {
            raw.ar
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        };
        Song {
            id: raw.id,
            name: raw.name,
            artist,
            duration_ms: raw.dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_url_payload_parses() {
        let raw = r#"{"code":200,"data":[{"id":33894312,"url":"http://m8.music.example/33894312.mp3","br":320000}]}"#;
        let parsed: SongUrlResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.code, 200);
        assert_eq!(
            parsed.data[0].url.as_deref(),
            Some("http://m8.music.example/33894312.mp3")
        );
    }

    #[test]
    fn song_url_with_null_url_parses_to_none() {
        let raw = r#"{"code":200,"data":[{"id":1,"url":null}]}"#;
        let parsed: SongUrlResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.data[0].url.is_none());
    }

    #[test]
    fn playlist_payload_maps_to_songs() {
        let raw = r#"{"songs":[
            {"id":347230,"name":"Example Song","ar":[{"name":"A"},{"name":"B"}],"dt":200000},
            {"id":347231,"name":"Other","ar":[],"dt":185000}
        ]}"#;
        let parsed: PlaylistResponse = serde_json::from_str(raw).unwrap();
        let songs: Vec<Song> = parsed.songs.into_iter().map(Song::from).collect();
        assert_eq!(songs[0].artist, "A / B");
        assert_eq!(songs[0].duration_secs(), 200.0);
        assert_eq!(songs[1].artist, "Unknown");
    }
}
