mod app;
mod cli;
mod model;
mod player;
mod sys;
mod tui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::process::exit;
use std::{
    io,
    time::{Duration, Instant},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if !sys::audio::check_mpv() {
        eprintln!("CRITICAL: mpv is not installed or not in PATH.");
        eprintln!("Tunebar requires mpv for playback.");
        exit(1);
    }

    let mut config = sys::config::Config::load();
    if let Err(e) = sys::logging::init_logger(sys::logging::log_file_path(), config.enable_logging)
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let server_host = cli.host.clone().unwrap_or_else(|| config.server_host.clone());
    let playlist_id = cli.playlist.or(config.playlist_id);

    log::info!("starting tunebar against {}", server_host);

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, server_host, playlist_id)?;

    // Main Loop: position samples land on the tick, so the tick rate bounds
    // how fresh the progress display can be.
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| tui::ui(f, &mut app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app::handlers::handle_key_event(&mut app, key),
                Event::Mouse(mouse) => app::handlers::handle_mouse_event(&mut app, mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app::updates::on_tick(&mut app);
            last_tick = Instant::now();
        }

        if !app.running {
            break;
        }
    }

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    app.player.shutdown();

    // Carry the volume over to the next session.
    config.volume = app.volume.level();
    if let Err(e) = config.save() {
        log::warn!("could not save config: {e}");
    }

    Ok(())
}
