//! Ownership of the media element.
//!
//! A single idle mpv process is spawned for the lifetime of the app and
//! driven over its JSON IPC socket. Nothing else in the program talks to
//! mpv: collaborators get only the narrow operations below (source swap,
//! play/pause, absolute and relative seek, gain) plus a drained stream of
//! the element's own state changes.

use anyhow::{Context, Result};
use serde_json::json;
use std::process::Command as StdCommand;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::player::progress::ProgressSource;
use crate::sys::mpv_ipc;

const REQ_TIME_POS: u64 = 10;
const OBSERVE_PAUSE: u64 = 1;

/// State changes originating in the element itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementEvent {
    /// The element paused on its own (or confirmed our pause).
    Paused,
    Resumed,
    /// Natural end of the current source. Source swaps do not produce this.
    Ended,
}

pub struct AudioPlayer {
    process: Option<tokio::process::Child>,
    cmd_tx: UnboundedSender<String>,
    res_rx: UnboundedReceiver<String>,
    last_position: Option<f64>,
}

impl AudioPlayer {
    /// Spawn mpv in idle mode and connect the IPC pump. Commands sent
    /// before the socket is up are buffered by the channel.
    pub fn spawn() -> Result<Self> {
        let socket_path = mpv_ipc::ipc_socket_path();

        let child = tokio::process::Command::new("mpv")
            .arg("--idle=yes")
            .arg("--no-video")
            .arg("--no-terminal")
            .arg(format!("--input-ipc-server={socket_path}"))
            .kill_on_drop(true)
            .spawn()
            .context("failed to spawn mpv; is it installed and in PATH?")?;

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<String>();
        let (res_tx, res_rx) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            if let Err(e) = mpv_ipc::run_ipc_pump(socket_path, cmd_rx, res_tx).await {
                log::error!("mpv ipc pump exited: {e:#}");
            }
        });

        let player = Self {
            process: Some(child),
            cmd_tx,
            res_rx,
            last_position: None,
        };

        // Element-initiated pauses must reach the app, so observe the
        // property instead of trusting our own bookkeeping.
        player.send(json!({
            "command": ["observe_property", OBSERVE_PAUSE, "pause"]
        }));
        Ok(player)
    }

    fn send(&self, cmd: serde_json::Value) {
        let mut line = cmd.to_string();
        line.push('\n');
        let _ = self.cmd_tx.send(line);
    }

    pub fn set_source(&mut self, url: &str) {
        self.last_position = None;
        self.send(json!({"command": ["loadfile", url, "replace"]}));
    }

    pub fn play(&self) {
        self.send(json!({"command": ["set_property", "pause", false]}));
    }

    pub fn pause(&self) {
        self.send(json!({"command": ["set_property", "pause", true]}));
    }

    pub fn stop(&mut self) {
        self.last_position = None;
        self.send(json!({"command": ["stop"]}));
    }

    pub fn seek_to(&self, secs: f64) {
        self.send(json!({"command": ["seek", secs, "absolute"]}));
    }

    pub fn seek_by(&self, secs: f64) {
        self.send(json!({"command": ["seek", secs, "relative"]}));
    }

    /// Apply an output gain in 0.0-1.0; mpv's volume property is 0-100.
    pub fn set_gain(&self, gain: f32) {
        let volume = (gain.clamp(0.0, 1.0) * 100.0) as f64;
        self.send(json!({"command": ["set_property", "volume", volume]}));
    }

    /// Drain IPC responses accumulated since the last tick. Position
    /// replies are stashed for `take_position`; element state changes are
    /// returned for the transport layer.
    pub fn drain_events(&mut self) -> Vec<ElementEvent> {
        let mut events = Vec::new();
        while let Ok(line) = self.res_rx.try_recv() {
            let Ok(val) = serde_json::from_str::<serde_json::Value>(&line) else {
                continue;
            };

            if val["request_id"].as_u64() == Some(REQ_TIME_POS) {
                if let Some(t) = val["data"].as_f64() {
                    if t.is_finite() {
                        self.last_position = Some(t);
                    }
                }
                continue;
            }

            match val["event"].as_str() {
                Some("property-change") if val["name"].as_str() == Some("pause") => {
                    match val["data"].as_bool() {
                        Some(true) => events.push(ElementEvent::Paused),
                        Some(false) => events.push(ElementEvent::Resumed),
                        None => {}
                    }
                }
                Some("end-file") => {
                    // "stop"/"redirect"/"error" reasons come from source
                    // swaps and failures, not from finishing a track.
                    if val["reason"].as_str() == Some("eof") {
                        events.push(ElementEvent::Ended);
                    }
                }
                _ => {}
            }
        }
        events
    }

    pub fn shutdown(&mut self) {
        self.send(json!({"command": ["quit"]}));
        if let Some(mut child) = self.process.take() {
            let _ = child.start_kill();
        }
    }
}

impl ProgressSource for AudioPlayer {
    fn request(&mut self) {
        self.send(json!({
            "command": ["get_property", "time-pos"],
            "request_id": REQ_TIME_POS
        }));
    }

    fn take_position(&mut self) -> Option<f64> {
        self.last_position.take()
    }
}

/// Startup environment check, mirrors the dependency probe at launch.
pub fn check_mpv() -> bool {
    StdCommand::new("mpv")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
