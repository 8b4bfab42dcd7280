use anyhow::Result;
use directories::ProjectDirs;
use fern::colors::{Color, ColoredLevelConfig};
use std::path::{Path, PathBuf};

pub fn log_file_path() -> PathBuf {
    ProjectDirs::from("com", "tunebar", "tunebar")
        .map(|dirs| dirs.data_dir().join("tunebar.log"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .unwrap_or_else(|_| ".".to_string());
            Path::new(&home).join(".tunebar").join("tunebar.log")
        })
}

pub fn init_logger(path: PathBuf, enabled: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let level = if enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    };

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                colors.color(record.level()),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(path)?)
        .apply()?;

    Ok(())
}
