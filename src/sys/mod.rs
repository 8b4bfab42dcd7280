pub mod api;
pub mod audio;
pub mod config;
pub mod logging;
pub mod media;
pub mod mpv_ipc;
