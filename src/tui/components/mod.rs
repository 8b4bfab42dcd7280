pub mod now_playing;
pub mod playback_bar;
pub mod playlist;
pub mod status_bar;
pub mod theme;
