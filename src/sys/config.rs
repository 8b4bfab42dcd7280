use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the NetEase-compatible API server.
    #[serde(default = "default_server_host")]
    pub server_host: String,
    /// Playlist loaded at startup when none is given on the command line.
    #[serde(default)]
    pub playlist_id: Option<u64>,
    #[serde(default = "default_volume")]
    pub volume: u8,
    #[serde(default = "default_true")]
    pub enable_logging: bool,
}

fn default_server_host() -> String {
    "http://localhost:3000".to_string()
}
fn default_volume() -> u8 {
    70
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: default_server_host(),
            playlist_id: None,
            volume: default_volume(),
            enable_logging: default_true(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        ProjectDirs::from("com", "tunebar", "tunebar")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME")
                    .or_else(|_| std::env::var("USERPROFILE"))
                    .unwrap_or_else(|_| ".".to_string());
                Path::new(&home).join(".tunebar").join("config.toml")
            })
    }

    pub fn load() -> Self {
        let path = Self::get_config_path();
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::get_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::from("# Tunebar Configuration\n\n");

        content.push_str("# Base URL of the music API server.\n");
        content.push_str(&format!("server_host = \"{}\"\n\n", self.server_host));

        if let Some(id) = self.playlist_id {
            content.push_str("# Playlist to load on startup.\n");
            content.push_str(&format!("playlist_id = {id}\n\n"));
        }

        content.push_str("# Initial volume level (1-100).\n");
        content.push_str(&format!("volume = {}\n\n", self.volume));

        content.push_str("# Write a debug log under the data directory.\n");
        content.push_str(&format!("enable_logging = {}\n", self.enable_logging));

        fs::write(path, content)?;
        Ok(())
    }
}
