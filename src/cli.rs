use clap::Parser;

#[derive(Parser)]
#[command(name = "Tunebar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(help_template = "NAME:
   {name} - Terminal Music Player

USAGE:
   tunebar [playlist-id] [global options]

VERSION:
   {version}

DESCRIPTION:
   {name} is a terminal music player that streams playlists from a
   NetEase-compatible music API and plays them through mpv.

   Controls:
     • Space to play/pause, n/b for next/previous
     • Click or drag the progress bar to seek
     • +/- for volume, m to mute, r to cycle the play pattern
     • Press l to toggle the playlist panel
     • Press q to quit

GLOBAL OPTIONS:
{options}
")]
pub struct Cli {
    /// Playlist id to load on startup (overrides the config file)
    pub playlist: Option<u64>,

    /// Music API server, e.g. http://localhost:3000
    #[arg(long = "host")]
    pub host: Option<String>,

    /// print the version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub show_version: Option<bool>,
}
