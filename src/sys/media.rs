use souvlaki::{
    MediaControlEvent, MediaControls, MediaMetadata, MediaPlayback, MediaPosition, PlatformConfig,
};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Transport intents arriving from the OS media keys.
#[derive(Debug, Clone)]
pub enum MediaEvent {
    Play,
    Pause,
    Toggle,
    Next,
    Previous,
    Stop,
}

pub struct MediaController {
    controls: MediaControls,
}

impl MediaController {
    pub fn init(tx: UnboundedSender<MediaEvent>) -> Result<Self, souvlaki::Error> {
        let config = PlatformConfig {
            dbus_name: "tunebar",
            display_name: "Tunebar",
            hwnd: None,
        };

        let mut controls = MediaControls::new(config)?;

        controls.attach(move |event: MediaControlEvent| {
            let app_event = match event {
                MediaControlEvent::Play => MediaEvent::Play,
                MediaControlEvent::Pause => MediaEvent::Pause,
                MediaControlEvent::Toggle => MediaEvent::Toggle,
                MediaControlEvent::Next => MediaEvent::Next,
                MediaControlEvent::Previous => MediaEvent::Previous,
                MediaControlEvent::Stop => MediaEvent::Stop,
                _ => return,
            };
            let _ = tx.send(app_event);
        })?;

        Ok(Self { controls })
    }

    /// Push play state and the current position out at sampler frequency so
    /// the desktop shell's progress display stays truthful.
    pub fn set_playback_status(
        &mut self,
        playing: bool,
        position_secs: Option<f64>,
    ) -> Result<(), souvlaki::Error> {
        let progress = position_secs
            .filter(|t| t.is_finite() && *t >= 0.0)
            .map(|t| MediaPosition(Duration::from_secs_f64(t)));
        self.controls.set_playback(if playing {
            MediaPlayback::Playing { progress }
        } else {
            MediaPlayback::Paused { progress }
        })
    }

    pub fn set_metadata(
        &mut self,
        title: &str,
        artist: Option<&str>,
        duration: Option<Duration>,
    ) -> Result<(), souvlaki::Error> {
        self.controls.set_metadata(MediaMetadata {
            title: Some(title),
            artist,
            album: None,
            duration,
            cover_url: None,
        })
    }
}
