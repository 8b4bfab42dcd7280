use anyhow::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::model::Song;
use crate::model::queue::Queue;
use crate::player::progress::DisplayPosition;
use crate::player::resolver::{self, ResolveReply, ResolveRequest, ResolveTicket};
use crate::player::seek::{ProgressTrack, SeekState};
use crate::player::volume::VolumeState;
use crate::sys::api;
use crate::sys::audio::AudioPlayer;
use crate::sys::config::Config;
use crate::sys::media::{MediaController, MediaEvent};

pub struct App {
    pub running: bool,
    pub server_host: String,
    pub playlist_id: Option<u64>,

    // Session queue
    pub queue: Queue,
    pub playlist_cursor: usize,
    pub playlist_scroll: usize,
    pub playlist_visible: bool,
    pub loading_playlist: bool,

    // Playback state
    pub is_playing: bool,
    pub current_time_secs: f64,
    pub display: DisplayPosition,
    pub seek: SeekState,
    pub volume: VolumeState,

    // Stream URL resolution
    pub ticket: ResolveTicket,
    pub resolve_tx: UnboundedSender<ResolveRequest>,
    pub resolve_rx: UnboundedReceiver<ResolveReply>,

    // Playlist fetching
    pub playlist_tx: UnboundedSender<u64>,
    pub playlist_rx: UnboundedReceiver<Result<Vec<Song>, String>>,

    // The media element, exclusively owned here
    pub player: AudioPlayer,

    // Messages/Status
    pub status_message: Option<String>,

    // Areas captured at render time for mouse hit-testing
    pub playback_bar_area: Option<Rect>,
    pub progress_area: Option<Rect>,
    pub playlist_area: Option<Rect>,
    pub progress_track: Option<ProgressTrack>,

    // Media Controls
    pub media_controller: Option<MediaController>,
    pub media_rx: UnboundedReceiver<MediaEvent>,
}

impl App {
    pub fn new(config: &Config, server_host: String, playlist_id: Option<u64>) -> Result<Self> {
        // Resolver worker: one task per request, so a hung fetch cannot
        // stall later resolutions. Superseded results are filtered on the
        // consumer side.
        let (resolve_tx, resolve_req_rx) = mpsc::unbounded_channel::<ResolveRequest>();
        let (resolve_res_tx, resolve_rx) = mpsc::unbounded_channel::<ResolveReply>();
        let resolver_host = server_host.clone();

        tokio::spawn(resolver::run_resolver(
            resolve_req_rx,
            resolve_res_tx,
            move |song_id| {
                let host = resolver_host.clone();
                async move {
                    api::fetch_song_url(&host, song_id)
                        .await
                        .map_err(|e| e.to_string())
                }
            },
        ));

        let (playlist_tx, mut playlist_req_rx) = mpsc::unbounded_channel::<u64>();
        let (playlist_res_tx, playlist_rx) = mpsc::unbounded_channel();
        let playlist_host = server_host.clone();

        tokio::spawn(async move {
            while let Some(id) = playlist_req_rx.recv().await {
                let result = api::fetch_playlist(&playlist_host, id)
                    .await
                    .map_err(|e| e.to_string());
                let _ = playlist_res_tx.send(result);
            }
        });

        let player = AudioPlayer::spawn()?;
        let volume = VolumeState::new(config.volume);
        player.set_gain(volume.gain());

        let (media_tx, media_rx) = mpsc::unbounded_channel();
        let media_controller = MediaController::init(media_tx).ok();

        let loading_playlist = playlist_id.is_some();
        if let Some(id) = playlist_id {
            let _ = playlist_tx.send(id);
        }

        Ok(Self {
            running: true,
            server_host,
            playlist_id,
            queue: Queue::new(),
            playlist_cursor: 0,
            playlist_scroll: 0,
            playlist_visible: false,
            loading_playlist,
            is_playing: false,
            current_time_secs: 0.0,
            display: DisplayPosition::default(),
            seek: SeekState::default(),
            volume,
            ticket: ResolveTicket::default(),
            resolve_tx,
            resolve_rx,
            playlist_tx,
            playlist_rx,
            player,
            status_message: None,
            playback_bar_area: None,
            progress_area: None,
            playlist_area: None,
            progress_track: None,
            media_controller,
            media_rx,
        })
    }
}
